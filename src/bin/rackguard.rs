use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use rackguard::{ClusterTopologySpec, ConfigDocument, DocumentLayout, NamespaceConfigValidator, Rack};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rackguard")]
#[command(about = "Admission and rack placement checks for rack-aware database clusters")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that a configuration update is safe for a running cluster
    Validate {
        #[arg(long)]
        old: PathBuf,
        #[arg(long)]
        new: PathBuf,
        /// JSON file overriding the document key layout
        #[arg(long)]
        layout: Option<PathBuf>,
    },
    /// Print the target size of every rack
    Distribute {
        #[arg(long)]
        size: usize,
        /// JSON array of racks, e.g. [{"id": 1}, {"id": 2, "pinnedSize": 3}]
        #[arg(long)]
        racks: PathBuf,
    },
}

fn read_document(path: &Path) -> Result<ConfigDocument> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    ConfigDocument::from_json_str(&text)
        .with_context(|| format!("failed to load configuration {}", path.display()))
}

fn read_layout(path: Option<&Path>) -> Result<DocumentLayout> {
    let Some(path) = path else {
        return Ok(DocumentLayout::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid layout {}", path.display()))
}

fn read_racks(path: &Path) -> Result<Vec<Rack>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("invalid rack list {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Validate { old, new, layout } => {
            let layout = read_layout(layout.as_deref())?;
            let old = read_document(&old)?;
            let new = read_document(&new)?;

            let validator = NamespaceConfigValidator::with_layout(layout);
            if let Err(err) = validator.validate(&old, &new) {
                bail!("configuration update rejected: {}", err);
            }
            println!("configuration update accepted");
        }
        Command::Distribute { size, racks } => {
            let racks = read_racks(&racks)?;
            let states = ClusterTopologySpec::new(size, racks)
                .rack_states()
                .context("rack size distribution failed")?;
            println!("{}", serde_json::to_string_pretty(&states)?);
        }
    }

    Ok(())
}
