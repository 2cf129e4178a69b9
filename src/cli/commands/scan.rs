//! `lotscan scan` command - resolve a lot code and render its label

use std::path::PathBuf;

use console::style;
use miette::{bail, IntoDiagnostic, Result};

use crate::cli::GlobalOpts;
use crate::core::config::{PaperSize, PrintConfig, PrintQuality};
use crate::core::{extract, resolve, MIN_LOT_LEN};
use crate::print::{PrintDispatcher, SpoolDispatcher};
use crate::render::{render_template, Template};

#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    /// The scanned lot code
    pub lot: String,

    /// Label template name (unknown names fall back to standard)
    #[arg(long, short = 't', default_value = "standard")]
    pub template: String,

    /// Override the scan timestamp ("YYYY-MM-DD HH:MM:SS"); defaults to now
    #[arg(long)]
    pub at: Option<String>,

    /// Spool the rendered label into this directory as a print-ready file
    #[arg(long)]
    pub spool: Option<PathBuf>,

    /// Printer name for the print command hint
    #[arg(long, default_value = "Epson_L210")]
    pub printer: String,

    /// Print quality for the print command hint
    #[arg(long, value_enum, default_value_t = PrintQuality::Normal)]
    pub quality: PrintQuality,

    /// Paper size for the print command hint
    #[arg(long, value_enum, default_value_t = PaperSize::A4)]
    pub paper: PaperSize,
}

pub fn run(args: ScanArgs, global: &GlobalOpts) -> Result<()> {
    let lot = args.lot.trim();
    if lot.is_empty() {
        bail!("no lot code given");
    }

    let store = super::utils::open_store_lenient(global);

    let Some(record) = resolve(&store, lot) else {
        if extract(lot).is_none() {
            bail!(
                "lot {:?} is too short to resolve (need at least {} characters)",
                lot,
                MIN_LOT_LEN
            );
        }
        bail!("no data found for lot {:?} in the lookup table", lot);
    };

    let timestamp = args
        .at
        .clone()
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string());

    let template = Template::from_name(&args.template);
    let label = render_template(lot, record, &timestamp, template);
    println!("{}", label);

    if let Some(dir) = args.spool {
        let stamp: String = timestamp
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect::<String>();
        let stamp = if stamp.len() == 14 {
            format!("{}_{}", &stamp[..8], &stamp[8..])
        } else {
            stamp
        };
        let dispatcher = SpoolDispatcher::new(dir, stamp);
        let path = dispatcher.dispatch(&label, template).into_diagnostic()?;

        let config = PrintConfig {
            printer: args.printer,
            quality: args.quality,
            paper: args.paper,
        };
        eprintln!(
            "{} label spooled to {}",
            style("ok:").green().bold(),
            path.display()
        );
        eprintln!("{} {}", style("print with:").dim(), config.lp_command(&path));
    }

    Ok(())
}
