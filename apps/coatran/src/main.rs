//! coatran: coalescent phylogenies along a transmission network.
//!
//! ```text
//! coatran constant   <network.tsv> <samples.tsv> <eff_pop_size>
//! coatran exp-growth <network.tsv> <samples.tsv> <init_eff_pop_size> <eff_pop_growth>
//! coatran trans-tree <network.tsv> <samples.tsv>
//! coatran inf-time   <network.tsv> <samples.tsv>
//! coatran from-config <network.tsv> <samples.tsv> --config run.json
//! ```
//!
//! One Newick line per sampled transmission seed goes to stdout; logs go to
//! stderr.

mod args;
mod config;
mod logger;


use std::fs;
use std::io::{self, BufWriter};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use ct_core::SimConfig;
use ct_network::load_network_tsv;
use ct_output::{CsvWriter, NewickWriter, SimOutputObserver};
use ct_phylo::NewickStyle;
use ct_sim::SimBuilder;

use args::{Cli, Job};
use config::{RunConfig, SEED_ENV, resolve_seed};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.level_filter())?;

    // ── Resolve the run configuration ─────────────────────────────────────
    let (inputs, run) = match cli.command.into_job() {
        Job::Model(inputs, model) => (inputs, RunConfig::from(model)),
        Job::ConfigFile(inputs, path) => (inputs, RunConfig::from_path(&path)?),
    };
    let model = run.model.build().context("invalid model parameters")?;
    log::info!("CoaTran v{} ({})", env!("CARGO_PKG_VERSION"), run.model.describe());

    let env_seed = std::env::var(SEED_ENV).ok();
    let seed = resolve_seed(cli.seed.or(run.seed), env_seed.as_deref());
    log::info!("random seed: {seed}");

    let config = SimConfig {
        seed,
        num_threads: cli.threads,
        independent_streams: cli.independent_streams || run.independent_streams.unwrap_or(false),
    };

    // ── Load inputs ───────────────────────────────────────────────────────
    let network = load_network_tsv(&inputs.network, &inputs.samples).with_context(|| {
        format!(
            "loading {} and {}",
            inputs.network.display(),
            inputs.samples.display()
        )
    })?;

    let mut sim = SimBuilder::new(config, network, model)
        .traversal(cli.traversal)
        .build()?;

    // ── Outputs ───────────────────────────────────────────────────────────
    let style = NewickStyle { precision: cli.precision };
    let newick = NewickWriter::new(BufWriter::new(io::stdout().lock()), style);
    let nodes = cli
        .nodes_csv
        .as_deref()
        .map(|dir| -> Result<CsvWriter> {
            fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            Ok(CsvWriter::new(dir)?)
        })
        .transpose()?;
    let mut observer = SimOutputObserver::new((newick, nodes));

    // ── Run ───────────────────────────────────────────────────────────────
    let start = Instant::now();
    let summary = sim.run(&mut observer)?;
    if let Some(e) = observer.take_error() {
        return Err(e).context("writing output");
    }
    log::info!(
        "{} tree(s) in {:.3}s",
        summary.trees,
        start.elapsed().as_secs_f64()
    );

    Ok(())
}
