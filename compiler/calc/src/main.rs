use std::path::PathBuf;

use calc::{run_files, InterpreterConfig, Mode};
use calc_parser::{ParserConfig, MAX_NESTING_DEPTH};
use clap::Parser;
use log::{warn, LevelFilter};

#[derive(Debug, Parser)]
#[command(
    name = "interpreter",
    version,
    about = "Evaluate semicolon-terminated integer statements line by line",
    long_about = "interpreter reads INPUT one line at a time, checks each line for\n\
        malformed lexemes, evaluates the first statement of every clean line and\n\
        writes the line followed by its result to OUTPUT.\n\n\
        EXAMPLES:\n\
        \n  interpreter statements.txt results.txt\n\
        \n  interpreter --tokens statements.txt lexemes.txt",
    after_help = "Set CALC_MAX_DEPTH to change the nesting limit when --max-depth is not given."
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// File of statements to interpret
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// File to write the report to; replaced if it exists
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// How many groups and exponents may be nested in one statement
    #[arg(long = "max-depth", value_name = "N")]
    max_depth: Option<usize>,

    /// List each line's lexemes instead of evaluating it
    #[arg(long)]
    tokens: bool,
}

fn init_logging(verbose: u8) {
    let mut builder = match verbose {
        0 => env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")),
        n => {
            let level = match n {
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            };
            let mut builder = env_logger::Builder::new();
            builder.filter_level(level);
            builder
        }
    };
    let _ = builder.try_init();
}

/// Pick the nesting limit: the flag first, then `CALC_MAX_DEPTH`, then the
/// default. An unparsable environment value is ignored.
fn parser_config(flag: Option<usize>, env: Option<&str>) -> ParserConfig {
    let from_env = env.and_then(|s| match s.trim().parse::<usize>() {
        Ok(n) => Some(n),
        Err(e) => {
            warn!("ignoring CALC_MAX_DEPTH={s:?}: {e}");
            None
        }
    });

    ParserConfig {
        max_depth: flag.or(from_env).unwrap_or(MAX_NESTING_DEPTH),
    }
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let env_depth = std::env::var("CALC_MAX_DEPTH").ok();
    let config = InterpreterConfig {
        parser: parser_config(cli.max_depth, env_depth.as_deref()),
        mode: if cli.tokens {
            Mode::Tokens
        } else {
            Mode::Evaluate
        },
    };

    match run_files(&cli.input, &cli.output, &config) {
        Ok(_) => 0,
        Err(e) => {
            eprintln!("error: {e}");
            1
        }
    }
}

fn main() {
    std::process::exit(run_cli());
}
