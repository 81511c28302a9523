use std::error::Error;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use whitepaper_pdf::{create_pdf, FormatterConfig, DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH};

/// Converts a plain-text whitepaper into a styled PDF.
///
/// Sections are separated by blank lines. Known section names become headings,
/// sections wrapped in `**` become sub-headings and everything else is set as
/// justified body text.
#[derive(Parser, Debug)]
#[command(name = "whitepaper-pdf", version, about, long_about = None)]
struct Cli {
    /// Input text file
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    input: PathBuf,

    /// Output PDF file
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Directory containing the LiberationSans TrueType files
    #[arg(long, value_name = "DIR")]
    fonts_dir: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let config = FormatterConfig::new().with_fonts_dir(cli.fonts_dir);

    match create_pdf(&cli.input, &cli.output, config) {
        Ok(path) => println!("PDF generated successfully: {}", path.display()),
        Err(err) if err.is_missing_input() => {
            eprintln!("Error: Input file '{}' not found!", cli.input.display());
            process::exit(1);
        }
        Err(err) => {
            eprintln!("Error generating PDF: {}", err);
            print_error_sources(&err);
            process::exit(1);
        }
    }
}

fn print_error_sources(mut error: &(dyn Error + 'static)) {
    while let Some(source) = error.source() {
        eprintln!("  caused by: {}", source);
        error = source;
    }
}
