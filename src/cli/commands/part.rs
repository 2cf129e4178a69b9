//! `lotscan part` command - maintenance of the part/revision lookup table

use clap::Subcommand;
use console::style;
use dialoguer::Confirm;
use miette::{bail, IntoDiagnostic, Result};
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::helpers::escape_csv;
use crate::cli::output::effective_format;
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::key::CompositeKey;
use crate::core::maintenance::add_record;
use crate::core::store::StoreError;

#[derive(Subcommand, Debug)]
pub enum PartCommands {
    /// Register a new key -> part/revision mapping
    Add(AddArgs),

    /// Update an existing mapping
    Update(UpdateArgs),

    /// Delete a mapping
    Delete(DeleteArgs),

    /// List all mappings
    List(ListArgs),
}

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Lot-code digits 2-3 (exactly 2 characters)
    #[arg(long)]
    pub digits: String,

    /// Lot-code digit 6 (exactly 1 character)
    #[arg(long)]
    pub digit: String,

    /// Part number
    #[arg(long)]
    pub part: String,

    /// Revision string (e.g. "REV.B")
    #[arg(long)]
    pub revision: String,

    /// Description; synthesized from the key when omitted
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct UpdateArgs {
    /// Key in storage form, e.g. "ST_B"
    pub key: String,

    /// New part number
    #[arg(long)]
    pub part: String,

    /// New revision string
    #[arg(long)]
    pub revision: String,

    /// New description; the stored one is kept when omitted
    #[arg(long)]
    pub description: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct DeleteArgs {
    /// Key in storage form, e.g. "ST_B"
    pub key: String,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Show count only
    #[arg(long)]
    pub count: bool,
}

pub fn run(cmd: PartCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        PartCommands::Add(args) => run_add(args, global),
        PartCommands::Update(args) => run_update(args, global),
        PartCommands::Delete(args) => run_delete(args, global),
        PartCommands::List(args) => run_list(args, global),
    }
}

fn parse_key(s: &str) -> Result<CompositeKey> {
    s.parse::<CompositeKey>().into_diagnostic()
}

fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let key = CompositeKey::new(&args.digits, &args.digit).into_diagnostic()?;
    let mut store = super::utils::open_store_strict(global)?;

    match add_record(
        &mut store,
        &key,
        &args.part,
        &args.revision,
        args.description,
    ) {
        Ok(()) => {
            println!(
                "{} registered {} -> {} {}",
                style("ok:").green().bold(),
                key,
                args.part,
                args.revision
            );
            Ok(())
        }
        Err(StoreError::KeyExists(key)) => {
            bail!("key {} is already registered; use `part update`", key)
        }
        Err(e) => Err(e).into_diagnostic(),
    }
}

fn run_update(args: UpdateArgs, global: &GlobalOpts) -> Result<()> {
    let key = parse_key(&args.key)?;
    let mut store = super::utils::open_store_strict(global)?;

    match store.update(
        &key,
        &args.part,
        &args.revision,
        args.description.as_deref(),
    ) {
        Ok(()) => {
            println!(
                "{} updated {} -> {} {}",
                style("ok:").green().bold(),
                key,
                args.part,
                args.revision
            );
            Ok(())
        }
        Err(StoreError::NotFound(key)) => bail!("no record for key {}", key),
        Err(e) => Err(e).into_diagnostic(),
    }
}

fn run_delete(args: DeleteArgs, global: &GlobalOpts) -> Result<()> {
    let key = parse_key(&args.key)?;
    let mut store = super::utils::open_store_strict(global)?;

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete mapping {}?", key))
            .default(false)
            .interact()
            .into_diagnostic()?;
        if !confirmed {
            println!("Aborted.");
            return Ok(());
        }
    }

    match store.remove(&key) {
        Ok(()) => {
            println!("{} deleted {}", style("ok:").green().bold(), key);
            Ok(())
        }
        Err(StoreError::NotFound(key)) => bail!("no record for key {}", key),
        Err(e) => Err(e).into_diagnostic(),
    }
}

#[derive(Tabled, serde::Serialize)]
struct ListRow {
    #[tabled(rename = "KEY")]
    key: String,
    #[tabled(rename = "PART")]
    part: String,
    #[tabled(rename = "REVISION")]
    revision: String,
    #[tabled(rename = "DESCRIPTION")]
    description: String,
}

fn run_list(args: ListArgs, global: &GlobalOpts) -> Result<()> {
    let store = super::utils::open_store_lenient(global);

    if args.count {
        println!("{}", store.len());
        return Ok(());
    }

    if store.is_empty() {
        println!("No mappings registered.");
        return Ok(());
    }

    // Stable listing order; the persisted mapping itself is unordered
    let mut rows: Vec<ListRow> = store
        .iter()
        .map(|(key, record)| ListRow {
            key: key.to_string(),
            part: record.part.clone(),
            revision: record.revision.clone(),
            description: record.description.clone(),
        })
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));

    match effective_format(global.output) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&rows).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            println!("key,part,revision,description");
            for row in &rows {
                println!(
                    "{},{},{},{}",
                    escape_csv(&row.key),
                    escape_csv(&row.part),
                    escape_csv(&row.revision),
                    escape_csv(&row.description)
                );
            }
        }
        OutputFormat::Table | OutputFormat::Auto => {
            let table = Table::new(&rows).with(Style::sharp()).to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
