//! Preproinsulin sequence processing for the islet toolkit.
//!
//! A four-stage pipeline over the 110-residue human preproinsulin precursor:
//!
//! - **Record cleaning** — [`clean_record`] strips an NCBI ORIGIN-format
//!   record down to a bare uppercase residue sequence
//! - **Segmentation** — [`split_preproinsulin`] cuts the precursor into its
//!   four biological segments at fixed chain boundaries
//! - **Molecular weight** — [`molecular_weight`] sums per-residue mass
//!   contributions over the mature two-chain molecule and reports the
//!   deviation from the literature value
//! - **Titration** — [`net_charge_curve`] tabulates net charge across a pH
//!   scan and [`isoelectric_point`] estimates the pI from the curve
//!
//! Every stage is a pure function over validated, immutable inputs; file I/O
//! and artifact naming live with the caller (the `islet-cli` crate).
//!
//! # Example
//!
//! ```
//! use islet_seq::{clean_record, split_preproinsulin};
//!
//! let record = "ORIGIN\n        1 malwmrllpl\n//\n";
//! let seq = clean_record(record).unwrap();
//! assert_eq!(seq.as_bytes(), b"MALWMRLLPL");
//!
//! // Segmentation requires the full 110-residue precursor.
//! assert!(split_preproinsulin(&seq).is_err());
//! ```

pub mod charge;
pub mod mass;
pub mod record;
pub mod segment;
pub mod seq;

// Re-export the validated sequence type
pub use seq::ProteinSequence;

// Re-export record cleaning
pub use record::clean_record;

// Re-export segmentation
pub use segment::{
    split_preproinsulin, Segments, A_CHAIN_LEN, B_CHAIN_LEN, C_PEPTIDE_LEN, PREPROINSULIN_LEN,
    SIGNAL_LEN,
};

// Re-export mass estimation
pub use mass::{molecular_weight, MassReport, INSULIN_REFERENCE_MASS};

// Re-export titration
pub use charge::{isoelectric_point, net_charge, net_charge_curve, ChargePoint, PhScan};
