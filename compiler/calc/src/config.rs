use calc_parser::ParserConfig;

/// What the interpreter produces for each line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Scan, then evaluate the first statement
    #[default]
    Evaluate,
    /// Scan, then list the lexemes statement by statement
    Tokens,
}

/// Settings for a whole interpreter run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Settings handed to the evaluator for every line
    pub parser: ParserConfig,
    /// Evaluate lines or list their lexemes
    pub mode: Mode,
}
