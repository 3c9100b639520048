use std::path::PathBuf;

use clap::Parser;

use valuation_pdf::{FontConfig, Pagination, RenderOptions, ValuationReport};

#[derive(Parser)]
#[command(name = "valuation-pdf")]
#[command(version)]
#[command(
    about = "Lay out a bank property valuation report as a fixed-format A4 PDF",
    long_about = None
)]
struct Cli {
    /// Report record as JSON (the built-in sample report when omitted)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output PDF file
    #[arg(short, long, value_name = "FILE", default_value = "Valuation_Report.pdf")]
    output: PathBuf,

    /// Move content that runs past the bottom margin onto extra pages
    #[arg(long)]
    flow: bool,

    /// TrueType/OpenType file for regular text (Helvetica when omitted)
    #[arg(long, value_name = "PATH", env = "VALUATION_PDF_FONT")]
    font: Option<PathBuf>,

    /// TrueType/OpenType file for bold text (Helvetica-Bold when omitted)
    #[arg(long, value_name = "PATH", env = "VALUATION_PDF_FONT_BOLD")]
    font_bold: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let report = match &cli.input {
        Some(path) => match valuation_pdf::load_report(path) {
            Ok(report) => report,
            Err(e) => {
                log::error!("Error reading {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => ValuationReport::sample(),
    };

    let options = RenderOptions {
        pagination: if cli.flow {
            Pagination::Flow
        } else {
            Pagination::Fixed
        },
        fonts: FontConfig {
            regular: cli.font,
            bold: cli.font_bold,
        },
    };

    match valuation_pdf::generate_report(&report, &options, &cli.output) {
        Ok(_) => {
            println!("PDF generated successfully");
            println!("File: {}", cli.output.display());
        }
        Err(e) => {
            log::error!("Error: {e}");
            std::process::exit(1);
        }
    }
}
