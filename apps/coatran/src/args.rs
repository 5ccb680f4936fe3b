//! Command-line interface.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use ct_model::ModelConfig;
use ct_network::TraversalOrder;
use log::LevelFilter;

/// CoaTran: coalescent phylogenies along a transmission network.
///
/// Reads a transmission network and per-individual sample times, then
/// prints one Newick tree per transmission seed that has samples.
#[derive(Parser, Debug)]
#[command(name = "coatran")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Random seed.  Falls back to COATRAN_RNG_SEED, then the clock.
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Give every transmission seed its own random stream.
    ///
    /// Required for multi-threaded runs.  Results are reproducible for a
    /// fixed seed but differ from the default shared-stream run.
    #[arg(long, global = true)]
    pub independent_streams: bool,

    /// Worker threads for independent-stream runs (default: all logical CPUs).
    #[arg(short = 't', long, global = true)]
    pub threads: Option<usize>,

    /// Children-first visiting order ("post-order" or "reverse-index").
    ///
    /// Both orders yield valid trees, but they consume random draws in a
    /// different sequence, so a seed reproduces its trees only under the
    /// same order.
    #[arg(long, global = true, default_value_t = TraversalOrder::PostOrder)]
    pub traversal: TraversalOrder,

    /// Fixed number of decimals in the trees (default: shortest exact form).
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Also write every tree's node table to DIR/phylo_nodes.csv.
    #[arg(long, global = true, value_name = "DIR")]
    pub nodes_csv: Option<PathBuf>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn level_filter(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::Error;
        }
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// The two input files every model needs.
#[derive(Args, Debug, Clone)]
pub struct Inputs {
    /// Transmission network TSV (infector, infectee, time).
    pub network: PathBuf,

    /// Sample times TSV (individual, time).
    pub samples: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Constant effective population size.
    Constant {
        #[command(flatten)]
        inputs: Inputs,

        /// Effective population size.
        eff_pop_size: f64,
    },

    /// Exponentially growing effective population size.
    ExpGrowth {
        #[command(flatten)]
        inputs: Inputs,

        /// Effective population size at infection time.
        init_eff_pop_size: f64,

        /// Growth rate (may be negative).
        #[arg(allow_negative_numbers = true)]
        eff_pop_growth: f64,
    },

    /// Coalesce as late as possible (at transmission time).
    TransTree {
        #[command(flatten)]
        inputs: Inputs,
    },

    /// Coalesce as early as possible (at infection time).
    InfTime {
        #[command(flatten)]
        inputs: Inputs,
    },

    /// Read the model (and optionally seed and stream mode) from a JSON file.
    FromConfig {
        #[command(flatten)]
        inputs: Inputs,

        /// Run configuration, e.g. {"model": "constant", "size": 1.0, "seed": 7}.
        #[arg(long)]
        config: PathBuf,
    },
}

/// What a subcommand resolves to before any file is read.
pub enum Job {
    Model(Inputs, ModelConfig),
    ConfigFile(Inputs, PathBuf),
}

impl Command {
    pub fn into_job(self) -> Job {
        match self {
            Command::Constant { inputs, eff_pop_size } => {
                Job::Model(inputs, ModelConfig::Constant { size: eff_pop_size })
            }
            Command::ExpGrowth { inputs, init_eff_pop_size, eff_pop_growth } => Job::Model(
                inputs,
                ModelConfig::ExpGrowth {
                    initial_size: init_eff_pop_size,
                    growth_rate:  eff_pop_growth,
                },
            ),
            Command::TransTree { inputs } => Job::Model(inputs, ModelConfig::TransmissionBound),
            Command::InfTime { inputs } => Job::Model(inputs, ModelConfig::InfectionBound),
            Command::FromConfig { inputs, config } => Job::ConfigFile(inputs, config),
        }
    }
}
