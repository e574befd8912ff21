/**
 * JSX i18n CLI - jsx-xi18n
 *
 * Extracts translation messages from program ASTs (ESTree/Babel JSON)
 */
use clap::{Arg, ArgAction, Command};
use jsx_i18n::logging::{ConsoleLogger, LogLevel};
use jsx_i18n_cli::extract_i18n::{main_xi18n, ExtractI18nOptions, OutputFormat};
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

fn main() {
    let matches = Command::new("jsx-xi18n")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Extract i18n messages from JSX translation blocks")
        .arg(
            Arg::new("inputs")
                .value_name("AST_JSON")
                .help("AST JSON files or glob patterns")
                .action(ArgAction::Append)
                .required(true),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("PATH")
                .help("Path to the extractor configuration (JSON)"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .value_name("FORMAT")
                .value_parser(["json", "lines"])
                .default_value("json")
                .help("Output format"),
        )
        .arg(
            Arg::new("out-file")
                .short('o')
                .long("out-file")
                .value_name("PATH")
                .help("Write the output to a file instead of stdout"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .default_value("warn")
                .help("debug, info, warn or error"),
        )
        .get_matches();

    let level = match matches.get_one::<String>("log-level").map(|s| s.parse::<LogLevel>()) {
        Some(Ok(level)) => level,
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        None => LogLevel::Warn,
    };

    let format = match matches.get_one::<String>("format").map(|s| s.parse::<OutputFormat>()) {
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
        None => OutputFormat::Json,
    };

    let options = ExtractI18nOptions {
        inputs: matches
            .get_many::<String>("inputs")
            .map(|values| values.cloned().collect())
            .unwrap_or_default(),
        config: matches.get_one::<String>("config").map(PathBuf::from),
        format,
        out_file: matches.get_one::<String>("out-file").map(PathBuf::from),
    };

    let code = main_xi18n(&options, Arc::new(ConsoleLogger::new(level)));
    if code != 0 {
        process::exit(code);
    }
}
