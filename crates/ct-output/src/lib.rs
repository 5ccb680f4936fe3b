//! `ct-output`: writers for the phylogenies produced by `ct-sim`.
//!
//! | Writer                  | Output                                              |
//! |-------------------------|-----------------------------------------------------|
//! | [`NewickWriter`]        | one Newick line per sampled seed, to any `io::Write` |
//! | [`CsvWriter`]           | `phylo_nodes.csv`, one row per arena node           |
//!
//! All writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `ct_sim::SimObserver`.  Pairs and
//! `Option`s of writers are writers too, so several outputs can share one
//! run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ct_output::{CsvWriter, NewickWriter, SimOutputObserver};
//!
//! let newick = NewickWriter::new(std::io::stdout().lock(), NewickStyle::default());
//! let csv = CsvWriter::new(Path::new("./output")).ok();
//! let mut obs = SimOutputObserver::new((newick, csv));
//! sim.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod newick;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use newick::NewickWriter;
pub use observer::SimOutputObserver;
pub use row::{NodeRow, node_rows};
pub use writer::OutputWriter;
