//! Integration tests for ct-output.

use ct_core::{IndividualId, SimConfig};
use ct_model::TransmissionBound;
use ct_network::{NetworkBuilder, TransmissionNetwork};
use ct_sim::{Sim, SimBuilder};

/// `A` infects `B` and `C`; only `A` and `B` are sampled.  `D` is an
/// unsampled second seed.
fn network() -> TransmissionNetwork {
    let mut b = NetworkBuilder::new();
    b.add_transmission(None, "A", 0.0).unwrap();
    b.add_transmission(Some("A"), "B", 2.0).unwrap();
    b.add_transmission(Some("A"), "C", 2.5).unwrap();
    b.add_transmission(None, "D", 1.0).unwrap();
    b.add_sample("A", 6.0).unwrap();
    b.add_sample("B", 3.0).unwrap();
    b.build().unwrap()
}

fn sim() -> Sim<TransmissionBound> {
    SimBuilder::new(SimConfig::with_seed(3), network(), TransmissionBound)
        .build()
        .unwrap()
}

#[cfg(test)]
mod row_tests {
    use ct_phylo::NodeKind;

    use super::*;
    use crate::node_rows;

    #[test]
    fn rows_follow_arena_order() {
        let mut sim = sim();
        let tree = sim.build_seed(IndividualId(0)).unwrap().unwrap();
        let rows = node_rows(&sim.network, &tree);

        let kinds: Vec<NodeKind> = rows.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            [
                NodeKind::Leaf,
                NodeKind::Transmission,
                NodeKind::Leaf,
                NodeKind::Coalescence,
                NodeKind::Transmission,
            ]
        );
        assert!(rows.iter().all(|r| r.seed == "A"));

        assert_eq!(rows[0].individual.as_deref(), Some("B"));
        assert_eq!(rows[0].left, None);
        assert_eq!(rows[1].individual.as_deref(), Some("B"));
        assert_eq!((rows[1].left, rows[1].right), (Some(0), Some(0)));
        assert_eq!(rows[1].time, 2.0);
        assert_eq!(rows[3].individual, None);
        assert_eq!(rows[4].individual.as_deref(), Some("A"));
        assert_eq!((rows[4].left, rows[4].right), (Some(3), Some(3)));
        assert_eq!(rows[4].time, 0.0);
    }
}

#[cfg(test)]
mod newick_tests {
    use std::io;

    use ct_phylo::NewickStyle;

    use super::*;
    use crate::{NewickWriter, OutputError, OutputWriter, SimOutputObserver};

    struct BrokenPipe;

    impl io::Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn one_line_per_sampled_seed() {
        let mut sim = sim();
        let mut obs = SimOutputObserver::new(NewickWriter::new(Vec::new(), NewickStyle::default()));
        sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let writer = obs.into_writer();
        assert_eq!(writer.trees(), 1);
        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("):0.0):0.0;"), "{}", lines[0]);
        assert!(lines[0].contains("(0|B|3.0:1.0):2.0"), "{}", lines[0]);
    }

    #[test]
    fn fixed_precision_style() {
        let mut sim = sim();
        let mut obs = SimOutputObserver::new(NewickWriter::new(Vec::new(), NewickStyle::FIXED6));
        sim.run(&mut obs).unwrap();
        let text = String::from_utf8(obs.into_writer().into_inner()).unwrap();
        assert!(text.trim_end().ends_with(":0.000000;"), "{text}");
        assert!(text.contains("0|B|3.000000:1.000000"), "{text}");
    }

    #[test]
    fn first_write_error_is_kept() {
        let mut sim = sim();
        let mut obs = SimOutputObserver::new(NewickWriter::new(BrokenPipe, NewickStyle::default()));
        sim.run(&mut obs).unwrap();
        assert!(matches!(obs.take_error(), Some(OutputError::Io(_))));
        assert!(obs.take_error().is_none());
    }

    #[test]
    fn absent_writer_is_a_no_op() {
        let mut sim = sim();
        let tree = sim.build_seed(IndividualId(0)).unwrap().unwrap();
        let mut none: Option<NewickWriter<Vec<u8>>> = None;
        assert!(none.write_tree(&sim.network, &tree).is_ok());
        assert!(none.finish().is_ok());
    }
}

#[cfg(test)]
mod csv_tests {
    use ct_phylo::NewickStyle;
    use tempfile::TempDir;

    use super::*;
    use crate::csv::NODES_FILE;
    use crate::{CsvWriter, NewickWriter, OutputWriter, SimOutputObserver};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_file_created_with_header() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(NODES_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["seed", "node", "kind", "left", "right", "time", "individual"]);
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_newick_and_csv() {
        let dir = tmp();
        let mut sim = sim();
        let writers = (
            NewickWriter::new(Vec::new(), NewickStyle::default()),
            Some(CsvWriter::new(dir.path()).unwrap()),
        );
        let mut obs = SimOutputObserver::new(writers);
        let summary = sim.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none());
        assert_eq!(summary.trees, 1);
        assert_eq!(summary.empty, 1);

        let (newick, _) = obs.into_writer();
        assert_eq!(newick.trees(), 1);

        let mut rdr = csv::Reader::from_path(dir.path().join(NODES_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), summary.nodes);

        assert_eq!(&rows[0][0], "A"); // seed
        assert_eq!(&rows[0][2], "leaf");
        assert_eq!(&rows[0][3], ""); // left
        assert_eq!(&rows[0][5], "3"); // time
        assert_eq!(&rows[0][6], "B"); // individual

        let root = &rows[rows.len() - 1];
        assert_eq!(&root[2], "transmission");
        assert_eq!(&root[5], "0");
        assert_eq!(&root[6], "A");
    }
}
