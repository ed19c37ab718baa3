/// Default limit on nested groups and exponent chains
pub const MAX_NESTING_DEPTH: usize = 100;

/// Settings for a [`Parser`](super::Parser)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserConfig {
    /// How many `(` groups and right-hand `^` operands may be open at once
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_NESTING_DEPTH,
        }
    }
}
