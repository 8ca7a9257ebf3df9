//! Additive molecular-weight estimation for mature insulin.
//!
//! Sums free-amino-acid average masses over the combined B + A chain and
//! applies one fixed condensation correction for the whole molecule, then
//! reports the relative deviation from the literature value.

use islet_core::{IsletError, Result};

use crate::seq::{aa_index, ProteinSequence};

/// Average free-amino-acid masses (Da), indexed by `aa_index`.
const AA_MASS: [f64; 20] = [
    89.09,  // A
    121.16, // C
    133.10, // D
    147.13, // E
    165.19, // F
    75.07,  // G
    155.16, // H
    131.17, // I
    146.19, // K
    131.17, // L
    149.21, // M
    132.12, // N
    115.13, // P
    146.15, // Q
    174.20, // R
    105.09, // S
    119.12, // T
    117.15, // V
    204.23, // W
    181.19, // Y
];

/// Average mass of one water molecule (Da).
const WATER_MASS: f64 = 18.0153;

/// Average mass of one hydrogen atom (Da).
const HYDROGEN_MASS: f64 = 1.0079;

/// Fixed condensation loss for mature insulin: 49 peptide-bond waters across
/// the two chains plus the six hydrogens lost to the three disulfide
/// bridges. Applied once per molecule; the reference comparison below
/// depends on this exact constant.
const CONDENSATION_LOSS: f64 = 49.0 * WATER_MASS + 6.0 * HYDROGEN_MASS;

/// Literature molecular weight of mature two-chain human insulin (Da).
pub const INSULIN_REFERENCE_MASS: f64 = 5807.63;

/// Computed mass of the combined chain next to the literature value.
#[derive(Debug, Clone, Copy)]
pub struct MassReport {
    /// Additive mass of the combined B + A chain (Da).
    pub computed: f64,
    /// Literature value the computation is checked against (Da).
    pub reference: f64,
    /// Relative deviation, `100 * |computed - reference| / reference`.
    pub error_percent: f64,
}

/// Compute the molecular weight of the mature two-chain molecule.
///
/// # Errors
///
/// `UnknownSymbol` when a residue has no entry in the composition table
/// (extended codes such as `X`); the reported position counts over the
/// combined B + A chain.
///
/// # Example
///
/// ```
/// use islet_seq::{molecular_weight, ProteinSequence};
///
/// let b = ProteinSequence::new(b"FVNQHLCGSHLVEALYLVCGERGFFYTPKT").unwrap();
/// let a = ProteinSequence::new(b"GIVEQCCTSICSLYQLENYCN").unwrap();
/// let report = molecular_weight(&b, &a).unwrap();
/// assert!(report.error_percent < 0.01);
/// ```
pub fn molecular_weight(
    b_chain: &ProteinSequence,
    a_chain: &ProteinSequence,
) -> Result<MassReport> {
    let mut sum = 0.0;
    for (position, &aa) in b_chain.iter().chain(a_chain.iter()).enumerate() {
        let idx = aa_index(aa).ok_or(IsletError::UnknownSymbol {
            symbol: aa as char,
            position,
        })?;
        sum += AA_MASS[idx];
    }

    let computed = sum - CONDENSATION_LOSS;
    let error_percent = 100.0 * (computed - INSULIN_REFERENCE_MASS).abs() / INSULIN_REFERENCE_MASS;

    Ok(MassReport {
        computed,
        reference: INSULIN_REFERENCE_MASS,
        error_percent,
    })
}
