//! Command-line parsing.

use crate::error::CliError;
use contactgrid_core::CellRef;
use std::path::PathBuf;

#[derive(Debug, PartialEq)]
pub enum Mode {
    Help,
    List,
    /// Apply one function to one cell and print the result
    Command { function: String, text: String },
    /// Sort a CSV file into contact columns
    Batch {
        input: PathBuf,
        output: Option<PathBuf>,
    },
}

#[derive(Debug, PartialEq)]
pub struct Args {
    pub mode: Mode,
    pub contact_column: Option<usize>,
    pub company_column: Option<usize>,
    pub header: Option<bool>,
    pub case_insensitive_degrees: bool,
    pub config_file: Option<PathBuf>,
    pub no_config: bool,
}

pub fn print_usage() {
    eprintln!("Usage: contactgrid [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                        CSV file of contact cells");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <FUNC> <TEXT>   Apply one function to one cell and print the result");
    eprintln!("  -o, --output <FILE>           Write sorted columns (.md => markdown, else CSV)");
    eprintln!("  --column <COL>                Column with the contact text (default: A)");
    eprintln!("  --company-column <COL>        Column with the company name");
    eprintln!("  --header / --no-header        Whether the first row is a header");
    eprintln!("  --case-insensitive-degrees    Strip PHD/ph.d. in any case");
    eprintln!("  --config <FILE>               Load settings from a TOML file");
    eprintln!("  --no-config                   Ignore the user config file");
    eprintln!("  -l, --list                    List available functions");
    eprintln!("  -h, --help                    Print help");
}

/// Parse a column setting given as letters ("A", "ab").
pub fn parse_column(letters: &str) -> Result<usize, CliError> {
    CellRef::parse_column(letters).ok_or_else(|| CliError::InvalidColumn(letters.to_string()))
}

fn next_value<'a>(argv: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, CliError> {
    *i += 1;
    argv.get(*i)
        .map(String::as_str)
        .ok_or_else(|| CliError::MissingValue(flag.to_string()))
}

/// Parse arguments (without the program name).
pub fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut file_path: Option<PathBuf> = None;
    let mut output_file: Option<PathBuf> = None;
    let mut command: Option<(String, String)> = None;
    let mut help = false;
    let mut list = false;
    let mut args = Args {
        mode: Mode::Help,
        contact_column: None,
        company_column: None,
        header: None,
        case_insensitive_degrees: false,
        config_file: None,
        no_config: false,
    };

    let mut i = 0;
    while i < argv.len() {
        let arg = argv[i].as_str();
        match arg {
            "-h" | "--help" => help = true,
            "-l" | "--list" => list = true,
            "-c" | "--command" => {
                let function = next_value(argv, &mut i, arg)?.to_string();
                let text = next_value(argv, &mut i, arg)?.to_string();
                command = Some((function, text));
            }
            "-o" | "--output" => {
                output_file = Some(PathBuf::from(next_value(argv, &mut i, arg)?));
            }
            "--column" => {
                args.contact_column = Some(parse_column(next_value(argv, &mut i, arg)?)?);
            }
            "--company-column" => {
                args.company_column = Some(parse_column(next_value(argv, &mut i, arg)?)?);
            }
            "--header" => args.header = Some(true),
            "--no-header" => args.header = Some(false),
            "--case-insensitive-degrees" => args.case_insensitive_degrees = true,
            "--config" => {
                args.config_file = Some(PathBuf::from(next_value(argv, &mut i, arg)?));
            }
            "--no-config" => args.no_config = true,
            _ if arg.starts_with('-') && arg.len() > 1 => {
                return Err(CliError::UnknownOption(arg.to_string()));
            }
            _ => {
                if file_path.is_some() {
                    return Err(CliError::UnexpectedArgument(arg.to_string()));
                }
                file_path = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    args.mode = if help {
        Mode::Help
    } else if list {
        Mode::List
    } else if let Some((function, text)) = command {
        Mode::Command { function, text }
    } else if let Some(input) = file_path {
        Mode::Batch {
            input,
            output: output_file,
        }
    } else {
        return Err(CliError::MissingInput);
    };
    Ok(args)
}
