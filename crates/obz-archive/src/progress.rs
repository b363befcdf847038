//! Load progress reporting.

/// Observer for archive load progress.
///
/// Receives percentages in `0..=100` that never decrease during one load.
/// Purely observational: the values have no effect on the result.
pub trait ProgressSink {
    fn report(&mut self, percent: u8);
}

impl<F: FnMut(u8)> ProgressSink for F {
    fn report(&mut self, percent: u8) {
        self(percent)
    }
}

/// Clamps reports so a sink only ever sees non-decreasing values.
pub(crate) struct Progress<'a> {
    sink: &'a mut dyn ProgressSink,
    last: Option<u8>,
}

impl<'a> Progress<'a> {
    pub(crate) fn new(sink: &'a mut dyn ProgressSink) -> Self {
        Self { sink, last: None }
    }

    pub(crate) fn report(&mut self, percent: u8) {
        let percent = percent.min(100).max(self.last.unwrap_or(0));
        if self.last != Some(percent) {
            self.last = Some(percent);
            self.sink.report(percent);
        }
    }

    /// Report step `done` of `total` mapped onto `from..=to`.
    pub(crate) fn step(&mut self, from: u8, to: u8, done: usize, total: usize) {
        let span = usize::from(to.saturating_sub(from));
        let offset = if total == 0 { span } else { span * done / total };
        self.report(from.saturating_add(u8::try_from(offset).unwrap_or(u8::MAX)));
    }
}
