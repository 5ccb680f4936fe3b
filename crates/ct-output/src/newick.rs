//! Newick text output.

use std::io::Write;

use ct_network::TransmissionNetwork;
use ct_phylo::NewickStyle;
use ct_sim::SeedTree;

use crate::OutputResult;
use crate::writer::OutputWriter;

/// Writes one Newick line per tree to `out`.
///
/// Seeds without samples never reach the writer, so they produce no line.
pub struct NewickWriter<W: Write> {
    out:   W,
    style: NewickStyle,
    trees: usize,
}

impl<W: Write> NewickWriter<W> {
    pub fn new(out: W, style: NewickStyle) -> Self {
        Self { out, style, trees: 0 }
    }

    /// Number of lines written so far.
    pub fn trees(&self) -> usize {
        self.trees
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OutputWriter for NewickWriter<W> {
    fn write_tree(&mut self, network: &TransmissionNetwork, tree: &SeedTree) -> OutputResult<()> {
        let line = tree.to_newick(&network.names, self.style)?;
        writeln!(self.out, "{line}")?;
        self.trees += 1;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.out.flush()?;
        Ok(())
    }
}
