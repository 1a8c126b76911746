//! redcap-codebook CLI - Convert a codebook CSV to a REDCap data dictionary
//!
//! ```bash
//! redcap-codebook codebook.csv dictionary.csv    # write dictionary file
//! redcap-codebook codebook.csv                   # write to stdout
//! redcap-codebook codebook.csv -d ';' --debug    # explicit delimiter, verbose
//! ```

use clap::Parser;
use redcap_codebook::{convert_file, write_dictionary, ConvertOptions};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "redcap-codebook")]
#[command(about = "Convert a codebook CSV export to REDCap data dictionary format", long_about = None)]
struct Cli {
    /// Input codebook CSV file
    input: PathBuf,

    /// Output dictionary file (default: stdout)
    output: Option<PathBuf>,

    /// CSV delimiter (auto-detect if not specified)
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if cli.debug {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("Converting: {}", cli.input.display());

    let options = ConvertOptions {
        delimiter: cli.delimiter,
    };
    let conversion = convert_file(&cli.input, &options)?;

    write_output(&conversion.fields, cli.output.as_deref())?;

    Ok(())
}

fn write_output(
    fields: &[redcap_codebook::FieldDef],
    path: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            let file = File::create(p)?;
            write_dictionary(fields, file)?;
            log::info!("Dictionary written to: {}", p.display());
        }
        None => {
            write_dictionary(fields, io::stdout().lock())?;
        }
    }
    Ok(())
}
