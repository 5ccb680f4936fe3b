//! Transmission forest storage and builder.
//!
//! # Data layout
//!
//! Per-individual attributes are stored as parallel `Vec`s indexed by
//! [`IndividualId`] (structure of arrays).  The merge engine touches
//! `infection_time`, `infected`, and `sample_times` of one individual at a
//! time; names are only read when rendering.

use ct_core::IndividualId;

use crate::{NetworkError, NetworkResult};

#[cfg(feature = "fx-hash")]
type NameIndex = rustc_hash::FxHashMap<String, IndividualId>;
#[cfg(not(feature = "fx-hash"))]
type NameIndex = std::collections::HashMap<String, IndividualId>;

/// Name used in input files for "no infector".
pub const NONE_NAME: &str = "None";

// ── TransmissionNetwork ───────────────────────────────────────────────────────

/// Who infected whom, when, and when each individual was sampled.
///
/// All fields are `pub` for direct indexed access.  Do not construct
/// directly; use [`NetworkBuilder`], which enforces the identity invariant.
#[derive(Clone, Debug, Default)]
pub struct TransmissionNetwork {
    /// Display name of each individual.
    pub names: Vec<String>,

    /// Infection time of each individual (seeds included).
    pub infection_time: Vec<f64>,

    /// Infector of each individual; `IndividualId::INVALID` for seeds.
    pub infector: Vec<IndividualId>,

    /// Individuals infected by each individual, in input order.
    pub infected: Vec<Vec<IndividualId>>,

    /// Sample times of each individual, in input order (possibly empty).
    pub sample_times: Vec<Vec<f64>>,

    /// Individuals with no infector, in input order.
    pub seeds: Vec<IndividualId>,

    name_index: NameIndex,
}

impl TransmissionNetwork {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Look up an individual by display name.
    pub fn id_of(&self, name: &str) -> Option<IndividualId> {
        self.name_index.get(name).copied()
    }

    #[inline]
    pub fn name(&self, id: IndividualId) -> &str {
        &self.names[id.index()]
    }

    #[inline]
    pub fn is_seed(&self, id: IndividualId) -> bool {
        !self.infector[id.index()].is_valid()
    }

    /// Total number of sample times across all individuals.
    pub fn sample_count(&self) -> usize {
        self.sample_times.iter().map(Vec::len).sum()
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Incremental builder for [`TransmissionNetwork`].
///
/// Infections must be added in an order where every infector was itself
/// infected earlier (as the rows of a transmission file are).
///
/// # Example
///
/// ```
/// use ct_network::NetworkBuilder;
///
/// let mut b = NetworkBuilder::new();
/// b.add_transmission(None, "A", 0.0).unwrap();
/// b.add_transmission(Some("A"), "B", 2.0).unwrap();
/// b.add_sample("A", 6.0).unwrap();
/// b.add_sample("B", 3.0).unwrap();
/// let network = b.build().unwrap();
///
/// assert_eq!(network.len(), 2);
/// assert_eq!(network.seeds.len(), 1);
/// ```
#[derive(Default)]
pub struct NetworkBuilder {
    network: TransmissionNetwork,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `infector` (or nobody, for a seed) infected `infectee` at
    /// `time`.
    ///
    /// A row whose infector is the infectee itself is a recovery event and
    /// is ignored (returns `Ok(None)`).  Otherwise returns the infectee's
    /// newly assigned id.
    pub fn add_transmission(
        &mut self,
        infector: Option<&str>,
        infectee: &str,
        time:     f64,
    ) -> NetworkResult<Option<IndividualId>> {
        let net = &mut self.network;

        let from = match infector {
            None => IndividualId::INVALID,
            Some(name) => net
                .id_of(name)
                .ok_or_else(|| NetworkError::UnknownInfector(name.to_owned()))?,
        };

        if infectee == NONE_NAME {
            return Err(NetworkError::NoneInfected);
        }

        if let Some(existing) = net.id_of(infectee) {
            if existing == from {
                log::debug!("skipping recovery event of {infectee} at {time}");
                return Ok(None);
            }
            return Err(NetworkError::Reinfection(infectee.to_owned()));
        }

        if !time.is_finite() {
            return Err(NetworkError::NonFiniteTime { name: infectee.to_owned(), time });
        }

        let id = IndividualId::from_index(net.len())?;
        net.names.push(infectee.to_owned());
        net.infection_time.push(time);
        net.infector.push(from);
        net.infected.push(Vec::new());
        net.sample_times.push(Vec::new());
        net.name_index.insert(infectee.to_owned(), id);

        if from.is_valid() {
            net.infected[from.index()].push(id);
        } else {
            net.seeds.push(id);
        }
        Ok(Some(id))
    }

    /// Record a lineage sample taken from `name` at `time`.
    pub fn add_sample(&mut self, name: &str, time: f64) -> NetworkResult<()> {
        if name == NONE_NAME {
            return Err(NetworkError::NoneSampled);
        }
        let id = self
            .network
            .id_of(name)
            .ok_or_else(|| NetworkError::UnknownSampled(name.to_owned()))?;
        if !time.is_finite() {
            return Err(NetworkError::NonFiniteTime { name: name.to_owned(), time });
        }
        self.network.sample_times[id.index()].push(time);
        Ok(())
    }

    /// Number of individuals added so far.
    pub fn len(&self) -> usize {
        self.network.len()
    }

    pub fn is_empty(&self) -> bool {
        self.network.is_empty()
    }

    /// Check time consistency and return the finished network.
    ///
    /// Rejects samples taken before the sampled individual was infected and
    /// infections that precede the infector's own infection; either would
    /// produce negative branch lengths.
    pub fn build(self) -> NetworkResult<TransmissionNetwork> {
        let net = self.network;

        for (i, samples) in net.sample_times.iter().enumerate() {
            let infection_time = net.infection_time[i];
            if let Some(&sample_time) = samples.iter().find(|&&t| t < infection_time) {
                return Err(NetworkError::SampleBeforeInfection {
                    name: net.names[i].clone(),
                    sample_time,
                    infection_time,
                });
            }
        }

        for (i, &infector) in net.infector.iter().enumerate() {
            if !infector.is_valid() {
                continue;
            }
            let infector_time = net.infection_time[infector.index()];
            let infectee_time = net.infection_time[i];
            if infectee_time < infector_time {
                return Err(NetworkError::InfectedBeforeInfector {
                    infector: net.names[infector.index()].clone(),
                    infector_time,
                    infectee: net.names[i].clone(),
                    infectee_time,
                });
            }
        }

        Ok(net)
    }
}
