use crate::prelude::*;
use clap::Parser;
use std::path::PathBuf;

mod error;
mod load;
mod merge;
mod prelude;
mod report;
mod write;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Merge Roam/Logseq JSON exports (or ZIP archives of them) into one deduplicated, import-ready graph"
)]
pub struct App {
    /// Input JSON/ZIP exports, merged in the order given
    #[clap(required = true)]
    pub exports: Vec<PathBuf>,

    /// Where to write the merged graph
    #[clap(
        short,
        long,
        env = "GRAPHMERGE_OUTPUT",
        default_value = "clean_graph.json"
    )]
    pub output: PathBuf,

    /// Keep the text of the last duplicate block instead of the first
    #[clap(long, env = "GRAPHMERGE_KEEP_LAST")]
    pub keep_last: bool,

    /// Merge and report counts, but don't write the output file
    #[clap(long)]
    pub dry_run: bool,

    /// Print every page as it is added (+) or merged (↺)
    #[clap(short, long)]
    pub verbose: bool,

    /// Seed for generated uids, for reproducible output
    #[clap(long, env = "GRAPHMERGE_SEED")]
    pub seed: Option<u64>,

    /// Pretty-print the output JSON
    #[clap(long)]
    pub pretty: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    crate::merge::run(app).map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
