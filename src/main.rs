use clap::{Arg, Command as ClapCommand, ArgAction};
use log::{error, LevelFilter};
use std::process;

use coordkit::commands::{CommandFactory, CoordkitCommandFactory};
use coordkit::utils::logger::Logger;

fn main() {
    let matches = ClapCommand::new("CoordKit")
        .version("0.1.0")
        .about("Convert coordinates between DD, DM, DMS, UTM, MGRS and the Malaysian RSO grids")
        .arg(
            Arg::new("input")
                .help("Coordinate to convert, e.g. \"3.1, 101.7\" or \"47N 411519 343074\"")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("from")
                .short('f')
                .long("from")
                .help("Input format (DD, DM, DMS, UTM, MGRS, MRSO_GDM2000, BRSO_GDM2000, RSO_KERTAU, RSO_TIMBALAI_SABAH, RSO_TIMBALAI_SARAWAK)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("to")
                .short('t')
                .long("to")
                .help("Output format, same names as --from")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("precision")
                .short('p')
                .long("precision")
                .help("MGRS digits per axis (1..5)")
                .value_name("DIGITS")
                .default_value("5")
                .required(false),
        )
        .arg(
            Arg::new("batch")
                .short('b')
                .long("batch")
                .help("Convert every line of this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write batch results to this file instead of stdout")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("history")
                .long("history")
                .help("JSON-lines file recording conversions")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("show-history")
                .long("show-history")
                .help("List recorded conversions, newest first")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("clear-history")
                .long("clear-history")
                .help("Remove all recorded conversions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log output to this file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let verbose = matches.get_flag("verbose");
    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => {
            let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
        },
    }

    let factory = CoordkitCommandFactory::new();

    match factory.create_command(&matches) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
