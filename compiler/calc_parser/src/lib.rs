pub mod parser;

pub use parser::config::{ParserConfig, MAX_NESTING_DEPTH};
pub use parser::error::{EvalError, EvalResult, Expected};
pub use parser::{evaluate, evaluate_with, Parser};

#[cfg(test)]
mod tests {
    use std::sync::Once;
    use log::LevelFilter;
    use env_logger::Builder;
    use std::io::Write;

    static INIT: Once = Once::new();

    /// Initialize the logger for tests
    pub fn init_test_logger() {
        INIT.call_once(|| {
            Builder::new()
                .is_test(true)
                .filter_level(LevelFilter::Trace)
                .format(|buf, record| {
                    writeln!(
                        buf,
                        "[{}] {}: {}",
                        record.level(),
                        record.target(),
                        record.args()
                    )
                })
                .init();
            log::info!("Test logger initialized");
        });
    }
}

// Integration tests are in the tests/ directory
