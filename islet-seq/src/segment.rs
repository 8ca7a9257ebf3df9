//! Preproinsulin segmentation at fixed chain boundaries.
//!
//! Human preproinsulin is a 110-residue precursor processed into four
//! contiguous segments: the signal peptide (cleaved on translocation), the
//! B chain, the C peptide (excised during maturation), and the A chain.
//! Only the B and A chains survive into mature insulin.

use islet_core::{IsletError, Result};

use crate::seq::ProteinSequence;

/// Signal peptide length, residues 1–24.
pub const SIGNAL_LEN: usize = 24;
/// B-chain length, residues 25–54.
pub const B_CHAIN_LEN: usize = 30;
/// C-peptide length, residues 55–89.
pub const C_PEPTIDE_LEN: usize = 35;
/// A-chain length, residues 90–110.
pub const A_CHAIN_LEN: usize = 21;
/// Full precursor length.
pub const PREPROINSULIN_LEN: usize = SIGNAL_LEN + B_CHAIN_LEN + C_PEPTIDE_LEN + A_CHAIN_LEN;

/// The four segments of preproinsulin, in N-to-C order.
#[derive(Debug, Clone)]
pub struct Segments {
    /// Signal peptide (24 aa), discarded during processing.
    pub signal: ProteinSequence,
    /// B chain (30 aa), part of mature insulin.
    pub b_chain: ProteinSequence,
    /// C peptide (35 aa), excised during processing.
    pub c_peptide: ProteinSequence,
    /// A chain (21 aa), part of mature insulin.
    pub a_chain: ProteinSequence,
}

impl Segments {
    /// Concatenate the four segments back into the full precursor.
    ///
    /// For any successfully segmented input this reproduces the input
    /// sequence exactly, with no gaps or overlaps.
    pub fn reassemble(&self) -> ProteinSequence {
        let mut data = Vec::with_capacity(PREPROINSULIN_LEN);
        data.extend_from_slice(&self.signal);
        data.extend_from_slice(&self.b_chain);
        data.extend_from_slice(&self.c_peptide);
        data.extend_from_slice(&self.a_chain);
        ProteinSequence::from_validated(data)
    }
}

/// Split a cleaned preproinsulin sequence into its four segments.
///
/// # Errors
///
/// `LengthMismatch` when the input is not exactly [`PREPROINSULIN_LEN`]
/// residues; no partial segments are produced.
pub fn split_preproinsulin(seq: &ProteinSequence) -> Result<Segments> {
    if seq.len() != PREPROINSULIN_LEN {
        return Err(IsletError::LengthMismatch {
            expected: PREPROINSULIN_LEN,
            actual: seq.len(),
        });
    }

    let b_start = SIGNAL_LEN;
    let c_start = b_start + B_CHAIN_LEN;
    let a_start = c_start + C_PEPTIDE_LEN;

    Ok(Segments {
        signal: ProteinSequence::from_validated(seq[..b_start].to_vec()),
        b_chain: ProteinSequence::from_validated(seq[b_start..c_start].to_vec()),
        c_peptide: ProteinSequence::from_validated(seq[c_start..a_start].to_vec()),
        a_chain: ProteinSequence::from_validated(seq[a_start..].to_vec()),
    })
}
