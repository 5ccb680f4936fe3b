//! Tab-separated input loaders.
//!
//! # Transmission network format
//!
//! One infection per row, `infector<TAB>infectee<TAB>time`.  An infector of
//! `None` marks a seed.  Rows must be in an order where every infector was
//! infected on an earlier row.
//!
//! ```text
//! # u	v	t
//! None	A	0.0
//! A	B	2.0
//! B	C	3.5
//! ```
//!
//! # Sample times format
//!
//! One sample per row, `individual<TAB>time`.  Individuals may appear any
//! number of times, including zero.
//!
//! ```text
//! A	6.0
//! C	4.25
//! C	5.0
//! ```
//!
//! In both files blank lines and lines starting with `#` are skipped.  Fields
//! are split on tabs only and are not trimmed, so `A` and `A ` name different
//! individuals.

use std::io::Read;
use std::path::Path;

use crate::network::NONE_NAME;
use crate::{NetworkBuilder, NetworkError, NetworkResult, TransmissionNetwork};

// ── Public API ────────────────────────────────────────────────────────────────

/// Load both input files and build the network.
pub fn load_network_tsv(
    transmissions: &Path,
    samples:       &Path,
) -> NetworkResult<TransmissionNetwork> {
    let transmissions = std::fs::File::open(transmissions).map_err(NetworkError::Io)?;
    let samples = std::fs::File::open(samples).map_err(NetworkError::Io)?;
    load_network_reader(transmissions, samples)
}

/// Like [`load_network_tsv`] but accepts any `Read` sources.
///
/// Useful for testing (pass a `std::io::Cursor`).
pub fn load_network_reader<T: Read, S: Read>(
    transmissions: T,
    samples:       S,
) -> NetworkResult<TransmissionNetwork> {
    let mut builder = NetworkBuilder::new();
    let mut recoveries = 0usize;

    for row in tsv_reader(transmissions).deserialize::<(String, String, f64)>() {
        let (infector, infectee, time) = row.map_err(|e| NetworkError::Parse(e.to_string()))?;
        let infector = (infector != NONE_NAME).then_some(infector.as_str());
        if builder.add_transmission(infector, &infectee, time)?.is_none() {
            recoveries += 1;
        }
    }

    let sample_rows = load_samples_reader(&mut builder, samples)?;
    let network = builder.build()?;

    log::info!(
        "loaded {} individuals ({} seeds, {} recovery rows skipped) and {} sample times",
        network.len(),
        network.seeds.len(),
        recoveries,
        sample_rows,
    );
    Ok(network)
}

/// Add the sample times read from `reader` to `builder`.  Returns the number
/// of rows read.
pub fn load_samples_reader<R: Read>(
    builder: &mut NetworkBuilder,
    reader:  R,
) -> NetworkResult<usize> {
    let mut count = 0;
    for row in tsv_reader(reader).deserialize::<(String, f64)>() {
        let (name, time) = row.map_err(|e| NetworkError::Parse(e.to_string()))?;
        builder.add_sample(&name, time)?;
        count += 1;
    }
    Ok(count)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn tsv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .comment(Some(b'#'))
        .trim(csv::Trim::None)
        .from_reader(reader)
}
