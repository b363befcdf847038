//! Lenient deserializers for identifiers and text fields.
//!
//! Boards exported by different tools disagree on whether ids are JSON strings
//! or numbers. Both are accepted and normalized to strings.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
}

impl Scalar {
    fn into_string(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Number(number) => number.to_string(),
            Scalar::Flag(flag) => flag.to_string(),
        }
    }
}

/// Required identifier: string or number.
pub(crate) fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Scalar::deserialize(deserializer).map(Scalar::into_string)
}

/// Optional identifier: string, number or null.
pub(crate) fn opt_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .filter(|id| !id.is_empty()))
}

/// Free text where null and numbers occur in the wild; null becomes empty.
pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?
        .map(Scalar::into_string)
        .unwrap_or_default())
}

/// Grid order: rows of cells, each null or a button id.
pub(crate) fn cells<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<Vec<Option<String>>>, D::Error> {
    let rows = Vec::<Vec<Option<Scalar>>>::deserialize(deserializer)?;
    Ok(rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| cell.map(Scalar::into_string).filter(|id| !id.is_empty()))
                .collect()
        })
        .collect())
}
