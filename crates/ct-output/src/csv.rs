//! CSV output backend.
//!
//! Creates `phylo_nodes.csv` in the configured output directory, one row per
//! arena node of every written tree.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use ct_network::TransmissionNetwork;
use ct_sim::SeedTree;

use crate::OutputResult;
use crate::row::node_rows;
use crate::writer::OutputWriter;

/// File name created inside the output directory.
pub const NODES_FILE: &str = "phylo_nodes.csv";

/// Writes the node table of every tree to one CSV file.
pub struct CsvWriter {
    nodes:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create the CSV file in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut nodes = Writer::from_path(dir.join(NODES_FILE))?;
        nodes.write_record(["seed", "node", "kind", "left", "right", "time", "individual"])?;

        Ok(Self {
            nodes,
            finished: false,
        })
    }
}

fn opt(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_tree(&mut self, network: &TransmissionNetwork, tree: &SeedTree) -> OutputResult<()> {
        for row in node_rows(network, tree) {
            self.nodes.write_record(&[
                row.seed,
                row.node.to_string(),
                row.kind.as_str().to_owned(),
                opt(row.left),
                opt(row.right),
                row.time.to_string(),
                row.individual.unwrap_or_default(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.nodes.flush()?;
        Ok(())
    }
}
