//! Configuration options for dataset translation.

/// Options controlling how records are translated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Number of hierarchy levels to emit (1 = broadest range).
    ///
    /// `None`, zero, negative values and values deeper than a code path all
    /// emit the full path.
    pub granularity: Option<i64>,

    /// Only translate rows whose `icd10` or `icd11` is missing, empty or `tbd`.
    pub only_unmatched: bool,
}

impl TranslateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_granularity(mut self, granularity: Option<i64>) -> Self {
        self.granularity = granularity;
        self
    }

    #[must_use]
    pub fn with_only_unmatched(mut self, enable: bool) -> Self {
        self.only_unmatched = enable;
        self
    }
}
