use std::{env, fs::read_to_string, path::PathBuf, process::ExitCode, str::FromStr, time::Instant};

use clap::{Parser, ValueEnum};
use syntax::{display_error, lexer::lexer::tokenize, parser::parser::parse};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Parser, Debug)]
#[clap(name = "syntax", about = "Check a script for syntax errors and print its tree.")]
struct Cli {
    /// Path to the script
    source: PathBuf,

    /// What to print once the script has been read
    #[clap(short, long, value_enum, default_value = "ast")]
    emit: Emit,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Emit {
    Ast,
    Tokens,
}

fn main() -> ExitCode {
    initialize_logging();
    let cli = Cli::parse();

    let file_name = cli
        .source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.source.to_string_lossy().into_owned());

    let file_contents = match read_to_string(&cli.source) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Error: failed to read {}: {}", cli.source.display(), err);
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    match cli.emit {
        Emit::Tokens => match tokenize(file_contents.clone(), Some(file_name)) {
            Ok(tokens) => {
                info!("Tokenized in {:?}", start.elapsed());
                for token in tokens {
                    println!("{}", token);
                }
            }
            Err(error) => {
                display_error(&error, &file_contents);
                return ExitCode::FAILURE;
            }
        },
        Emit::Ast => match parse(&file_contents, Some(file_name)) {
            Ok(program) => {
                info!("Parsed in {:?}", start.elapsed());
                println!("{:#?}", program);
            }
            Err(error) => {
                display_error(&error, &file_contents);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

fn initialize_logging() {
    let env_filter = env::var("RUST_LOG").unwrap_or_default();
    let filter = EnvFilter::from_str(&env_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .init();
}
