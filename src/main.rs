//! Contactgrid - Sort contact cells into name, email and company columns

mod args;
mod config;
mod error;

use anyhow::{Context, Result};
use args::{Args, Mode, print_usage};
use contactgrid_core::storage::write_csv_to;
use contactgrid_core::{ContactSheet, SortOptions, eval_function};
use contactgrid_engine::builtins::BUILTINS;
use contactgrid_engine::engine::{CellInput, CellOutput, ContactExtractor};
use std::env;
use std::path::Path;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn list_functions() {
    for builtin in BUILTINS {
        println!("{:<14} {}", builtin.sheet_name, builtin.description);
    }
}

fn resolve_options(args: &Args) -> Result<SortOptions> {
    let (file_config, warnings) = config::load_config(args.config_file.as_ref(), args.no_config);
    for warning in warnings {
        tracing::warn!("{}", warning);
    }
    Ok(config::sort_options(&file_config, args)?)
}

/// Print one function result. Returns the process exit code.
fn run_command(function: &str, text: &str, options: &SortOptions) -> Result<i32> {
    let extractor = ContactExtractor::new(options.normalize);
    let output = eval_function(function, &extractor, &CellInput::from(text))?;

    for row in output.to_display().rows() {
        println!("{}", row.join("\t"));
    }
    if let CellOutput::Scalar(Err(e)) = &output {
        eprintln!("Error: {}", e);
    }
    Ok(if output.error_count() > 0 { 1 } else { 0 })
}

fn run_batch(input: &Path, output: Option<&Path>, options: &SortOptions) -> Result<i32> {
    let sheet = ContactSheet::load_csv(input, options)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    match output {
        Some(path) => {
            sheet
                .save(path)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!(
                "Exported {} contacts to {}",
                sheet.rows.len(),
                path.display()
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            write_csv_to(&mut stdout, &sheet.display_rows())?;
        }
    }
    Ok(0)
}

fn run(args: &Args) -> Result<i32> {
    match &args.mode {
        Mode::Help => {
            print_usage();
            Ok(0)
        }
        Mode::List => {
            list_functions();
            Ok(0)
        }
        Mode::Command { function, text } => {
            let options = resolve_options(args)?;
            run_command(function, text, &options)
        }
        Mode::Batch { input, output } => {
            let options = resolve_options(args)?;
            run_batch(input, output.as_deref(), &options)
        }
    }
}

fn main() {
    let argv: Vec<String> = env::args().skip(1).collect();
    let args = match args::parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage();
            std::process::exit(1);
        }
    };

    init_logging();

    match run(&args) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
