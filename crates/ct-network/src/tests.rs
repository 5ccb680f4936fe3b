//! Unit tests for ct-network.

#[cfg(test)]
mod builder_tests {
    use ct_core::IndividualId;

    use crate::{NetworkBuilder, NetworkError};

    #[test]
    fn ids_follow_first_appearance() {
        let mut b = NetworkBuilder::new();
        assert_eq!(b.add_transmission(None, "A", 0.0).unwrap(), Some(IndividualId(0)));
        assert_eq!(b.add_transmission(Some("A"), "B", 1.0).unwrap(), Some(IndividualId(1)));
        assert_eq!(b.add_transmission(Some("A"), "C", 1.5).unwrap(), Some(IndividualId(2)));
        let net = b.build().unwrap();

        assert_eq!(net.seeds, vec![IndividualId(0)]);
        assert_eq!(net.infected[0], vec![IndividualId(1), IndividualId(2)]);
        assert_eq!(net.infector[2], IndividualId(0));
        assert!(net.is_seed(IndividualId(0)));
        assert!(!net.is_seed(IndividualId(1)));
        assert_eq!(net.id_of("C"), Some(IndividualId(2)));
        assert_eq!(net.name(IndividualId(1)), "B");
    }

    #[test]
    fn unknown_infector_rejected() {
        let mut b = NetworkBuilder::new();
        let err = b.add_transmission(Some("X"), "A", 0.0).unwrap_err();
        assert!(matches!(err, NetworkError::UnknownInfector(n) if n == "X"));
    }

    #[test]
    fn none_cannot_be_infected() {
        let mut b = NetworkBuilder::new();
        assert!(matches!(
            b.add_transmission(None, "None", 0.0),
            Err(NetworkError::NoneInfected)
        ));
    }

    #[test]
    fn recovery_rows_are_skipped() {
        let mut b = NetworkBuilder::new();
        b.add_transmission(None, "A", 0.0).unwrap();
        assert_eq!(b.add_transmission(Some("A"), "A", 4.0).unwrap(), None);
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn reinfection_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_transmission(None, "A", 0.0).unwrap();
        b.add_transmission(None, "B", 0.0).unwrap();
        b.add_transmission(Some("A"), "C", 1.0).unwrap();
        assert!(matches!(
            b.add_transmission(Some("B"), "C", 2.0),
            Err(NetworkError::Reinfection(n)) if n == "C"
        ));
    }

    #[test]
    fn sample_rules() {
        let mut b = NetworkBuilder::new();
        b.add_transmission(None, "A", 0.0).unwrap();
        assert!(matches!(b.add_sample("None", 1.0), Err(NetworkError::NoneSampled)));
        assert!(matches!(b.add_sample("Z", 1.0), Err(NetworkError::UnknownSampled(_))));
        assert!(matches!(b.add_sample("A", f64::NAN), Err(NetworkError::NonFiniteTime { .. })));
        b.add_sample("A", 2.0).unwrap();
        b.add_sample("A", 1.0).unwrap();
        let net = b.build().unwrap();
        assert_eq!(net.sample_times[0], vec![2.0, 1.0]);
        assert_eq!(net.sample_count(), 2);
    }

    #[test]
    fn sample_before_infection_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_transmission(None, "A", 3.0).unwrap();
        b.add_sample("A", 2.0).unwrap();
        assert!(matches!(b.build(), Err(NetworkError::SampleBeforeInfection { .. })));
    }

    #[test]
    fn infection_before_infector_rejected() {
        let mut b = NetworkBuilder::new();
        b.add_transmission(None, "A", 3.0).unwrap();
        b.add_transmission(Some("A"), "B", 1.0).unwrap();
        assert!(matches!(b.build(), Err(NetworkError::InfectedBeforeInfector { .. })));
    }
}

#[cfg(test)]
mod loader_tests {
    use std::io::Cursor;

    use ct_core::IndividualId;

    use crate::{NetworkError, load_network_reader};

    const NETWORK: &str = "\
# infector\tinfectee\ttime
None\tA\t0.0
A\tB\t2.0

B\tC\t3.5
None\tD\t1.0
B\tB\t9.0
";

    const SAMPLES: &str = "\
A\t6.0
# comment
C\t4.25
C\t5.0
";

    #[test]
    fn loads_network_and_samples() {
        let net = load_network_reader(Cursor::new(NETWORK), Cursor::new(SAMPLES)).unwrap();
        assert_eq!(net.len(), 4);
        assert_eq!(net.seeds, vec![IndividualId(0), IndividualId(3)]);
        assert_eq!(net.infection_time, vec![0.0, 2.0, 3.5, 1.0]);
        assert_eq!(net.infected[1], vec![IndividualId(2)]);
        assert_eq!(net.sample_times[2], vec![4.25, 5.0]);
        assert!(net.sample_times[3].is_empty());
    }

    #[test]
    fn malformed_time_is_a_parse_error() {
        let err = load_network_reader(Cursor::new("None\tA\tsoon\n"), Cursor::new(""))
            .unwrap_err();
        assert!(matches!(err, NetworkError::Parse(_)));
    }

    #[test]
    fn wrong_column_count_is_a_parse_error() {
        let err = load_network_reader(Cursor::new("None\tA\n"), Cursor::new(""))
            .unwrap_err();
        assert!(matches!(err, NetworkError::Parse(_)));
    }

    #[test]
    fn sample_of_unknown_person_rejected() {
        let err = load_network_reader(Cursor::new("None\tA\t0\n"), Cursor::new("Q\t1\n"))
            .unwrap_err();
        assert!(matches!(err, NetworkError::UnknownSampled(n) if n == "Q"));
    }

    #[test]
    fn names_are_not_trimmed() {
        let net = load_network_reader(
            Cursor::new("None\tA \t0.0\nNone\tA\t1.0\n"),
            Cursor::new("A\t2.0\n"),
        )
        .unwrap();
        assert_eq!(net.len(), 2);
        assert_eq!(net.names, vec!["A ".to_owned(), "A".to_owned()]);
        assert!(net.sample_times[0].is_empty());
        assert_eq!(net.sample_times[1], vec![2.0]);

        let err = load_network_reader(Cursor::new("None\tA\t0\n"), Cursor::new("A \t1\n"))
            .unwrap_err();
        assert!(matches!(err, NetworkError::UnknownSampled(n) if n == "A "));
    }
}

#[cfg(test)]
mod schedule_tests {
    use ct_core::IndividualId;

    use crate::{
        NetworkBuilder, TransmissionNetwork, TraversalOrder, post_order, reverse_index_order,
        reverse_index_order_all,
    };

    /// A → {B, C}, B → {D}; separate seed E.
    fn forest() -> TransmissionNetwork {
        let mut b = NetworkBuilder::new();
        b.add_transmission(None, "A", 0.0).unwrap();
        b.add_transmission(Some("A"), "B", 1.0).unwrap();
        b.add_transmission(Some("A"), "C", 1.0).unwrap();
        b.add_transmission(Some("B"), "D", 2.0).unwrap();
        b.add_transmission(None, "E", 0.5).unwrap();
        b.build().unwrap()
    }

    fn ids(xs: &[u32]) -> Vec<IndividualId> {
        xs.iter().copied().map(IndividualId).collect()
    }

    /// Every individual appears after all of its infectees.
    fn assert_children_first(net: &TransmissionNetwork, order: &[IndividualId]) {
        let pos = |id: IndividualId| order.iter().position(|&x| x == id).unwrap();
        for &id in order {
            for &child in &net.infected[id.index()] {
                assert!(pos(child) < pos(id), "{child} visited after {id}");
            }
        }
    }

    #[test]
    fn post_order_visits_children_first() {
        let net = forest();
        let order = post_order(&net, IndividualId(0));
        assert_eq!(order, ids(&[3, 1, 2, 0]));
        assert_children_first(&net, &order);
    }

    #[test]
    fn reverse_index_is_decreasing_and_valid() {
        let net = forest();
        let order = reverse_index_order(&net, IndividualId(0));
        assert_eq!(order, ids(&[3, 2, 1, 0]));
        assert_children_first(&net, &order);
    }

    #[test]
    fn seeds_are_disjoint() {
        let net = forest();
        assert_eq!(post_order(&net, IndividualId(4)), ids(&[4]));
        assert_eq!(reverse_index_order_all(&net), ids(&[4, 3, 2, 1, 0]));
    }

    #[test]
    fn long_chain_is_iterative() {
        let mut b = NetworkBuilder::new();
        b.add_transmission(None, "p0", 0.0).unwrap();
        for i in 1..100_000 {
            let prev = format!("p{}", i - 1);
            let name = format!("p{i}");
            b.add_transmission(Some(&prev), &name, i as f64).unwrap();
        }
        let net = b.build().unwrap();
        let order = TraversalOrder::PostOrder.visit_order(&net, IndividualId(0));
        assert_eq!(order.len(), 100_000);
        assert_eq!(order[0], IndividualId(99_999));
        assert_eq!(*order.last().unwrap(), IndividualId(0));
    }

    #[test]
    fn traversal_order_parses() {
        assert_eq!("post-order".parse::<TraversalOrder>(), Ok(TraversalOrder::PostOrder));
        assert_eq!("reverse-index".parse::<TraversalOrder>(), Ok(TraversalOrder::ReverseIndex));
        assert!("sideways".parse::<TraversalOrder>().is_err());
        assert_eq!(TraversalOrder::ReverseIndex.to_string(), "reverse-index");
    }
}
