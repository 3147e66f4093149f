//! Configuration options for address extraction.

use phonenumber::country;

/// Region whose numbering plan phone columns are validated against.
pub const DEFAULT_PHONE_REGION: country::Id = country::Id::BR;

/// How address values containing `/` are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlashSplitMode {
    /// Emit only the `/`-separated parts.
    #[default]
    SplitOnly,
    /// Emit the parts, then also validate the whole value as one candidate.
    ///
    /// Matches the output of older exports, where a valid whole value would
    /// appear next to its parts.
    Legacy,
}

/// Options for extracting addresses from a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub slash_split: SlashSplitMode,
    pub phone_region: country::Id,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            slash_split: SlashSplitMode::default(),
            phone_region: DEFAULT_PHONE_REGION,
        }
    }
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_slash_split(mut self, mode: SlashSplitMode) -> Self {
        self.slash_split = mode;
        self
    }
}
