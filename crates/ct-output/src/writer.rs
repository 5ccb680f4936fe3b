//! The `OutputWriter` trait implemented by all writers.

use ct_network::TransmissionNetwork;
use ct_sim::SeedTree;

use crate::OutputResult;

/// Trait implemented by the Newick and CSV writers.
///
/// All methods are infallible from the observer's perspective: errors are
/// stored internally and retrieved with
/// [`SimOutputObserver::take_error`][crate::SimOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one seed's tree.  `network` supplies display names.
    fn write_tree(&mut self, network: &TransmissionNetwork, tree: &SeedTree) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Both writers receive every tree; the first error wins.
impl<A: OutputWriter, B: OutputWriter> OutputWriter for (A, B) {
    fn write_tree(&mut self, network: &TransmissionNetwork, tree: &SeedTree) -> OutputResult<()> {
        let first = self.0.write_tree(network, tree);
        let second = self.1.write_tree(network, tree);
        first.and(second)
    }

    fn finish(&mut self) -> OutputResult<()> {
        let first = self.0.finish();
        let second = self.1.finish();
        first.and(second)
    }
}

/// An absent writer discards everything.
impl<W: OutputWriter> OutputWriter for Option<W> {
    fn write_tree(&mut self, network: &TransmissionNetwork, tree: &SeedTree) -> OutputResult<()> {
        match self {
            Some(w) => w.write_tree(network, tree),
            None => Ok(()),
        }
    }

    fn finish(&mut self) -> OutputResult<()> {
        match self {
            Some(w) => w.finish(),
            None => Ok(()),
        }
    }
}
