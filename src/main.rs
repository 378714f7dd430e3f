// std imports
use std::{
    fs::File,
    io::{self, Write, stdin, stdout},
    path::PathBuf,
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use kizuna::{Rule, Source};

const KIZUNA_LOG: &str = "KIZUNA_LOG";
const KIZUNA_LOG_STYLE: &str = "KIZUNA_LOG_STYLE";
const STDIN_NAME: &str = "(standard input)";

/// Parse one literal from a file or standard input
#[derive(Debug, Parser)]
#[command(name = "kizuna", version)]
struct Opt {
    /// Rule to run against the input
    #[arg(short, long, value_enum, default_value_t = Rule::Literal, env = "KIZUNA_RULE")]
    rule: Rule,

    /// Name shown in diagnostics instead of the file path
    #[arg(short, long)]
    name: Option<String>,

    /// Fail unless only whitespace follows the match
    #[arg(short, long)]
    complete: bool,

    /// Input file, standard input if omitted
    file: Option<PathBuf>,
}

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("failed to read {name}: {source}")]
    Read { name: String, source: io::Error },
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn bootstrap() {
    if std::env::var(KIZUNA_LOG).is_ok() {
        let env = logger::Env::new()
            .filter(KIZUNA_LOG)
            .write_style(KIZUNA_LOG_STYLE);
        logger::Builder::from_env(env)
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn load(opt: &Opt) -> Result<Source, AppError> {
    match &opt.file {
        Some(path) => {
            let name = opt.name.clone().unwrap_or_else(|| path.display().to_string());
            let file = File::open(path).map_err(|source| AppError::Read {
                name: name.clone(),
                source,
            })?;
            Source::from_reader(file, name.clone())
                .map_err(|source| AppError::Read { name, source })
        }
        None => {
            let name = opt.name.clone().unwrap_or_else(|| STDIN_NAME.to_string());
            Source::from_reader(stdin().lock(), name.clone())
                .map_err(|source| AppError::Read { name, source })
        }
    }
}

/// Returns whether the rule matched
fn run(opt: &Opt) -> Result<bool, AppError> {
    let source = load(opt)?;
    let mut out = stdout().lock();

    let matched = match opt.rule.run(&source, opt.complete) {
        Ok((token, cursor)) => {
            writeln!(out, "Parse succeeded: {}", token.lexeme())?;
            write!(out, "Rest: {}", cursor.rest())?;
            true
        }
        Err(error) => {
            eprintln!("{error}");
            write!(out, "Rest: {}", source.content())?;
            false
        }
    };
    out.flush()?;

    Ok(matched)
}

fn main() {
    bootstrap();
    let opt = Opt::parse();

    match run(&opt) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("error: {err}");
            process::exit(2);
        }
    }
}
