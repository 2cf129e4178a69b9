//! `lotscan template` command - inspect the label template catalog

use clap::Subcommand;
use console::style;
use miette::Result;

use crate::core::record::PartRecord;
use crate::render::{render_template, Template};

/// Fixed sample data for previews
const SAMPLE_LOT: &str = "TB123Q789";
const SAMPLE_PART: &str = "J3011";
const SAMPLE_REV: &str = "Rev.04";
const SAMPLE_TIME: &str = "2024-01-15 14:30:25";

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// List the available templates
    List,

    /// Render a template with sample data
    Preview(PreviewArgs),
}

#[derive(clap::Args, Debug)]
pub struct PreviewArgs {
    /// Template name (unknown names fall back to standard)
    pub name: String,
}

pub fn run(cmd: TemplateCommands) -> Result<()> {
    match cmd {
        TemplateCommands::List => run_list(),
        TemplateCommands::Preview(args) => run_preview(args),
    }
}

fn run_list() -> Result<()> {
    for template in Template::ALL {
        println!(
            "{:<20} {}",
            style(template.name()).cyan(),
            template.description()
        );
    }
    Ok(())
}

fn run_preview(args: PreviewArgs) -> Result<()> {
    let template = Template::from_name(&args.name);
    let record = PartRecord::new(SAMPLE_PART, SAMPLE_REV);
    println!(
        "{} {}",
        style("template:").bold(),
        style(template.name()).cyan()
    );
    println!();
    println!("{}", render_template(SAMPLE_LOT, &record, SAMPLE_TIME, template));
    Ok(())
}
