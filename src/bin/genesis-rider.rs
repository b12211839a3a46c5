//! Inspect or convert a Genesis / Mega Drive ROM image
//! Usage: genesis-rider input_file [output_file]
//!
//! With one file, prints the ROM header.  With two files, converts
//! between the binary and Super Magic Drive layouts.
use std::process::exit;

use clap::error::ErrorKind as ArgsErrorKind;
use clap::Parser;
use log::{info, warn};

use genesis_rider::config::{
    Config, Configuration, ReportFormat, DEBUG_KEY, REPORT_FORMAT_KEY, STRICT_HEADER_KEY,
};
use genesis_rider::convert::{convert_file, error_message, inspect_file};
use genesis_rider::error::Error;

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_UNKNOWN_OPTION: i32 = 127;

/// Command line arguments
#[derive(Parser, Debug)]
#[clap(about, version)]
struct Args {
    /// ROM image to read
    input: Option<String>,
    /// File to write the converted image to.
    /// If no output file is given, shows ROM header information
    output: Option<String>,
    /// Anything past the output file is an error
    #[clap(hide = true)]
    extra: Vec<String>,
    /// Configuration file
    #[clap(short, long, default_value = "config/genesis-rider")]
    config: String,
    /// Accept ROM headers without the license signature
    #[clap(long)]
    lenient_header: bool,
    /// Header report format: text or toml
    #[clap(long)]
    format: Option<String>,
}

fn print_help() {
    println!("Usage: genesis-rider input_file [output_file]\n");
    println!("Converts Sega Genesis/Mega Drive ROM files.\n");
    println!("If no output file given, shows ROM header information.");
}

/// Print a one line error and return the failure exit code
fn print_error(e: &Error, input: &str, output: &str) -> i32 {
    eprintln!("{}", error_message(e, input, output));

    EXIT_FAILURE
}

/// Inspect or convert an image file
fn main() {
    // Parse command line arguments, unknown options show the usage text
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ArgsErrorKind::DisplayHelp | ArgsErrorKind::DisplayVersion => e.exit(),
            _ => {
                print_help();
                exit(EXIT_UNKNOWN_OPTION);
            }
        },
    };

    // Load config
    let mut debug = false;

    // Initialize logger
    if let Err(e) = env_logger::try_init() {
        panic!("couldn't initialize logger: {:?}", e);
    }

    genesis_rider::init();

    if !args.extra.is_empty() {
        print_help();
        exit(EXIT_UNKNOWN_OPTION);
    }

    let input = match &args.input {
        Some(input) => input,
        None => {
            print_help();
            exit(EXIT_SUCCESS);
        }
    };

    let settings = match load_settings(&args) {
        Ok(settings) => {
            info!("merged in config");
            if let Ok(b) = settings.get_bool(DEBUG_KEY) {
                debug = b;
            }
            settings
        }
        Err(s) => {
            warn!("error loading config: {:?}", s);
            config::Config::default()
        }
    };
    let config = match Config::load(settings) {
        Ok(config) => config,
        Err(e) => {
            warn!("error loading config: {}", e);
            Config::default()
        }
    };

    if debug {
        info!(
            "signature check: {:?}, report format: {:?}",
            config.signature_check(),
            config.report_format()
        );
    }

    let code = match &args.output {
        None => match inspect_file(input, &config) {
            Ok(report) => match config.report_format() {
                ReportFormat::Text => {
                    print!("{}", report);
                    EXIT_SUCCESS
                }
                ReportFormat::Toml => match report.to_toml() {
                    Ok(toml) => {
                        print!("{}", toml);
                        EXIT_SUCCESS
                    }
                    Err(e) => print_error(&e, input, ""),
                },
            },
            Err(e) => print_error(&e, input, ""),
        },
        Some(output) => match convert_file(input, output, &config) {
            Ok(image) => {
                info!("Wrote {}: {}", output, image);
                EXIT_SUCCESS
            }
            Err(e) => print_error(&e, input, output),
        },
    };

    exit(code);
}

/// load settings from a config file, the environment and the command
/// line, later sources overriding earlier ones
/// returns the config settings as a Config on success, or a ConfigError on failure
fn load_settings(args: &Args) -> Result<config::Config, config::ConfigError> {
    let mut builder = config::Config::builder()
        // Add in config file, if there is one
        .add_source(config::File::with_name(&args.config).required(false))
        // Add in settings from the environment (with a prefix of GENESIS_RIDER)
        // Eg.. `GENESIS_RIDER_STRICT_HEADER=false genesis-rider game.bin` sets the
        // `strict_header` key
        .add_source(config::Environment::with_prefix("GENESIS_RIDER"));

    if args.lenient_header {
        builder = builder.set_override(STRICT_HEADER_KEY, false)?;
    }

    if let Some(format) = &args.format {
        builder = builder.set_override(REPORT_FORMAT_KEY, format.as_str())?;
    }

    builder.build()
}
