//! Command-line interface for vardecl
//!
//! Usage:
//!   vardecl check `<path>` [--format `<format>`] [--config `<file>`] [--language en|ru]
//!   vardecl tokens `<path>`                 - Print the token stream
//!   vardecl sample [valid|with-errors]      - Print a bundled sample source
//!   vardecl list-formats                    - List available output formats
//!
//! `<path>` may be `-` to read from stdin. Exit status is 0 when the input is a
//! valid declaration block, 1 when diagnostics were reported and 2 when the
//! input could not be processed at all.

use clap::builder::PossibleValuesParser;
use clap::{Arg, ArgAction, ArgMatches, Command};
use config::ConfigError;
use std::io::Read;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;
use vardecl::decl::messages::{Language, UnknownLanguage};
use vardecl::decl::processor::{
    available_formats, process_file, process_source, Processed, ProcessingError,
    ProcessingSpec, ProcessingStage,
};
use vardecl::decl::samples;
use vardecl::settings::{Loader, Settings, LOCAL_CONFIG_FILE};

const EXIT_INVALID: i32 = 1;
const EXIT_FAILURE: i32 = 2;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Processing(#[from] ProcessingError),
    #[error("{0}")]
    Language(#[from] UnknownLanguage),
    #[error("error reading {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
}

fn source_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("path")
                .help("Path to the source file, or '-' for stdin")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("language")
                .long("language")
                .short('l')
                .help("Message language (en, ru)"),
        )
}

fn cli() -> Command {
    Command::new("vardecl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check var declaration blocks and report every syntax error")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log output (repeat for more)")
                .action(ArgAction::Count)
                .global(true),
        )
        .subcommand(
            source_args(Command::new("check").about("Validate a source file"))
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'diagnostics-simple', 'tokens-json')"),
                )
                .arg(
                    Arg::new("no-success")
                        .long("no-success")
                        .help("Print nothing when the input is valid")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(source_args(
            Command::new("tokens").about("Print the token stream of a source file"),
        ))
        .subcommand(
            Command::new("sample")
                .about("Print a bundled sample source")
                .arg(
                    Arg::new("name")
                        .help("Which sample to print")
                        .value_parser(PossibleValuesParser::new(samples::names().iter().copied()))
                        .default_value("valid")
                        .index(1),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available output formats"))
}

fn main() {
    let matches = cli().get_matches();
    init_logging(matches.get_count("verbose"));

    let result = match matches.subcommand() {
        Some(("check", check_matches)) => {
            let path = check_matches.get_one::<String>("path").unwrap();
            let format = check_matches.get_one::<String>("format").cloned();
            handle_check_command(path, check_matches, format)
        }
        Some(("tokens", tokens_matches)) => {
            let path = tokens_matches.get_one::<String>("path").unwrap();
            handle_check_command(path, tokens_matches, Some("tokens-simple".to_string()))
        }
        Some(("sample", sample_matches)) => {
            let name = sample_matches.get_one::<String>("name").unwrap();
            handle_sample_command(name);
            Ok(0)
        }
        Some(("list-formats", _)) => {
            handle_list_formats_command();
            Ok(0)
        }
        _ => unreachable!(),
    };

    match result {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(EXIT_FAILURE);
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: could not install logger: {}", e);
    }
}

/// Run the processor over a file, or over stdin when `path` is `-`
fn process_path(
    path: &str,
    spec: &ProcessingSpec,
    settings: &Settings,
) -> Result<Processed, CliError> {
    let read_error = |source| CliError::Read {
        path: path.to_string(),
        source,
    };

    if path == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .map_err(read_error)?;
        return Ok(process_source(&source, spec, &settings.diagnostics)?);
    }

    process_file(path, spec, &settings.diagnostics).map_err(|e| match e {
        ProcessingError::Io(source) => read_error(source),
        other => other.into(),
    })
}

fn load_settings(
    matches: &ArgMatches,
    format: Option<String>,
) -> Result<Settings, CliError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);

    if let Some(path) = matches.get_one::<String>("config") {
        debug!(path = %path, "layering configuration file");
        loader = loader.with_file(path);
    }
    if let Some(code) = matches.get_one::<String>("language") {
        let language: Language = code.parse()?;
        loader = loader.set_override("diagnostics.language", language.code())?;
    }
    if let Some(format) = format {
        loader = loader.set_override("output.format", format)?;
    }
    if matches.try_get_one::<bool>("no-success").ok().flatten() == Some(&true) {
        loader = loader.set_override("diagnostics.report_success", false)?;
    }

    Ok(loader.build()?)
}

/// Handle the check and tokens commands
fn handle_check_command(
    path: &str,
    matches: &ArgMatches,
    format: Option<String>,
) -> Result<i32, CliError> {
    let settings = load_settings(matches, format)?;
    let spec = ProcessingSpec::from_string(&settings.output.format)?;

    info!(path = %path, format = %settings.output.format, "checking source");
    let processed = process_path(path, &spec, &settings)?;

    print!("{}", processed.output);

    let valid = processed.report.is_valid();
    info!(
        diagnostics = processed.report.diagnostics.len(),
        valid, "check finished"
    );

    if spec.stage == ProcessingStage::Tokens || valid {
        Ok(0)
    } else {
        Ok(EXIT_INVALID)
    }
}

/// Handle the sample command
fn handle_sample_command(name: &str) {
    if let Some(source) = samples::get(name) {
        println!("{}", source);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available output formats:\n");
    for name in available_formats() {
        println!("  {}", name);
    }
}
