//! Net charge titration across a pH scan.
//!
//! Henderson–Hasselbalch fractional charges for the ionizable side chains
//! (D, E, C, Y acid-type; H, K, R base-type) plus the free termini of the
//! two chains, summed at each pH of a discrete scan. The scan is a coarse
//! table by design; a finer curve is obtained by lowering the step, not by
//! changing the algorithm.

use islet_core::{IsletError, Result};

use crate::seq::ProteinSequence;

// Side-chain and terminus pKa values (EMBOSS).
const PKA_NTERM: f64 = 9.69;
const PKA_CTERM: f64 = 2.34;
const PKA_D: f64 = 3.65;
const PKA_E: f64 = 4.25;
const PKA_C: f64 = 8.18;
const PKA_Y: f64 = 10.07;
const PKA_H: f64 = 6.00;
const PKA_K: f64 = 10.53;
const PKA_R: f64 = 12.48;

/// One point of a net-charge curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargePoint {
    /// Acidity level the charge was evaluated at.
    pub ph: f64,
    /// Net charge of the molecule at that level.
    pub net_charge: f64,
}

/// Inclusive pH scan range with a fixed step.
#[derive(Debug, Clone, Copy)]
pub struct PhScan {
    /// First pH evaluated.
    pub min: f64,
    /// Last pH evaluated (inclusive when `min + k*step` lands on it).
    pub max: f64,
    /// Increment between scan points; must be positive.
    pub step: f64,
}

impl Default for PhScan {
    /// The reference scan: pH 0 through 14 in unit steps, 15 points.
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 14.0,
            step: 1.0,
        }
    }
}

impl PhScan {
    fn point_count(&self) -> Result<usize> {
        if !(self.step > 0.0) {
            return Err(IsletError::InvalidInput(format!(
                "pH scan step must be positive, got {}",
                self.step
            )));
        }
        if self.max < self.min {
            return Err(IsletError::InvalidInput(format!(
                "pH scan range is inverted: {} > {}",
                self.min, self.max
            )));
        }
        // The epsilon tolerates binary rounding in the division, so a scan
        // like 0..14 step 0.1 still includes its endpoint.
        Ok(((self.max - self.min) / self.step + 1e-9).floor() as usize + 1)
    }
}

/// Fractional charge of one base-type group at a given pH.
fn basic(ph: f64, pka: f64) -> f64 {
    1.0 / (1.0 + 10_f64.powf(ph - pka))
}

/// Fractional charge magnitude of one acid-type group at a given pH.
fn acidic(ph: f64, pka: f64) -> f64 {
    1.0 / (1.0 + 10_f64.powf(pka - ph))
}

/// Net charge of the two-chain molecule at a single pH.
///
/// Sums fractional contributions from every ionizable side chain in the
/// combined B + A chain, the free amino terminus of the B chain, and the
/// free carboxyl terminus of the A chain. Residues without an ionizable
/// side chain contribute nothing.
pub fn net_charge(b_chain: &ProteinSequence, a_chain: &ProteinSequence, ph: f64) -> f64 {
    let mut charge = basic(ph, PKA_NTERM) - acidic(ph, PKA_CTERM);

    for &aa in b_chain.iter().chain(a_chain.iter()) {
        match aa {
            b'D' => charge -= acidic(ph, PKA_D),
            b'E' => charge -= acidic(ph, PKA_E),
            b'C' => charge -= acidic(ph, PKA_C),
            b'Y' => charge -= acidic(ph, PKA_Y),
            b'H' => charge += basic(ph, PKA_H),
            b'K' => charge += basic(ph, PKA_K),
            b'R' => charge += basic(ph, PKA_R),
            _ => {}
        }
    }
    charge
}

/// Tabulate net charge across a pH scan.
///
/// Each point sits at `min + i * step`, computed from the index so the curve
/// carries no accumulated floating-point drift.
///
/// # Errors
///
/// `InvalidInput` for a non-positive step or an inverted range.
///
/// # Example
///
/// ```
/// use islet_seq::{net_charge_curve, PhScan, ProteinSequence};
///
/// let b = ProteinSequence::new(b"FVNQHLCGSHLVEALYLVCGERGFFYTPKT").unwrap();
/// let a = ProteinSequence::new(b"GIVEQCCTSICSLYQLENYCN").unwrap();
/// let curve = net_charge_curve(&b, &a, PhScan::default()).unwrap();
/// assert_eq!(curve.len(), 15);
/// ```
pub fn net_charge_curve(
    b_chain: &ProteinSequence,
    a_chain: &ProteinSequence,
    scan: PhScan,
) -> Result<Vec<ChargePoint>> {
    let n = scan.point_count()?;
    Ok((0..n)
        .map(|i| {
            let ph = scan.min + i as f64 * scan.step;
            ChargePoint {
                ph,
                net_charge: net_charge(b_chain, a_chain, ph),
            }
        })
        .collect())
}

/// Estimate the isoelectric point from a charge curve.
///
/// Scans for the first adjacent pair of points whose net charge changes
/// sign (or a point that is exactly zero) and linearly interpolates between
/// the bracketing pair. Returns `None` when the charge keeps one sign over
/// the whole curve — an acceptable outcome for a scan that does not reach
/// the crossing, not an error.
pub fn isoelectric_point(curve: &[ChargePoint]) -> Option<f64> {
    for pair in curve.windows(2) {
        let (lo, hi) = (pair[0], pair[1]);
        if lo.net_charge == 0.0 {
            return Some(lo.ph);
        }
        if lo.net_charge.signum() != hi.net_charge.signum() {
            let slope = (hi.net_charge - lo.net_charge) / (hi.ph - lo.ph);
            return Some(lo.ph - lo.net_charge / slope);
        }
    }
    match curve.last() {
        Some(p) if p.net_charge == 0.0 => Some(p.ph),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const B_CHAIN: &[u8] = b"FVNQHLCGSHLVEALYLVCGERGFFYTPKT";
    const A_CHAIN: &[u8] = b"GIVEQCCTSICSLYQLENYCN";

    fn chains() -> (ProteinSequence, ProteinSequence) {
        (
            ProteinSequence::new(B_CHAIN).unwrap(),
            ProteinSequence::new(A_CHAIN).unwrap(),
        )
    }

    #[test]
    fn default_scan_has_fifteen_points() {
        let (b, a) = chains();
        let curve = net_charge_curve(&b, &a, PhScan::default()).unwrap();
        assert_eq!(curve.len(), 15);
        assert!((curve[0].ph - 0.0).abs() < 1e-12);
        assert!((curve[14].ph - 14.0).abs() < 1e-12);
    }

    #[test]
    fn fine_step_includes_endpoint() {
        let (b, a) = chains();
        let scan = PhScan {
            min: 0.0,
            max: 14.0,
            step: 0.1,
        };
        let curve = net_charge_curve(&b, &a, scan).unwrap();
        assert_eq!(curve.len(), 141);
        assert!((curve.last().unwrap().ph - 14.0).abs() < 1e-9);
    }

    #[test]
    fn charge_extremes_sit_at_scan_ends() {
        // All base-type groups protonated at pH 0, all acid-type groups
        // deprotonated at pH 14.
        let (b, a) = chains();
        let curve = net_charge_curve(&b, &a, PhScan::default()).unwrap();
        let max = curve
            .iter()
            .map(|p| p.net_charge)
            .fold(f64::NEG_INFINITY, f64::max);
        let min = curve
            .iter()
            .map(|p| p.net_charge)
            .fold(f64::INFINITY, f64::min);
        assert!((curve[0].net_charge - max).abs() < 1e-12);
        assert!((curve[14].net_charge - min).abs() < 1e-12);
        // 1 K + 2 H + 1 R + N-terminus, all near +1 at pH 0
        assert!(
            (curve[0].net_charge - 5.0).abs() < 0.05,
            "pH 0 charge {}",
            curve[0].net_charge
        );
        // 4 Y + 6 C + 3 E + C-terminus, all near -1 at pH 14
        assert!(
            (curve[14].net_charge + 15.0).abs() < 0.1,
            "pH 14 charge {}",
            curve[14].net_charge
        );
    }

    #[test]
    fn curve_is_monotonically_decreasing() {
        let (b, a) = chains();
        let curve = net_charge_curve(&b, &a, PhScan::default()).unwrap();
        for pair in curve.windows(2) {
            assert!(
                pair[1].net_charge < pair[0].net_charge,
                "charge rose between pH {} and {}",
                pair[0].ph,
                pair[1].ph
            );
        }
    }

    #[test]
    fn insulin_isoelectric_point() {
        // Literature pI of human insulin is about 5.3.
        let (b, a) = chains();
        let curve = net_charge_curve(&b, &a, PhScan::default()).unwrap();
        let pi = isoelectric_point(&curve).unwrap();
        assert!(pi > 0.0 && pi < 14.0);
        assert!((pi - 5.3).abs() < 0.1, "pI estimate {}", pi);
    }

    #[test]
    fn isoelectric_point_interpolates_between_brackets() {
        let curve = [
            ChargePoint {
                ph: 4.0,
                net_charge: 1.0,
            },
            ChargePoint {
                ph: 5.0,
                net_charge: -1.0,
            },
        ];
        let pi = isoelectric_point(&curve).unwrap();
        assert!((pi - 4.5).abs() < 1e-12);
    }

    #[test]
    fn isoelectric_point_exact_zero_wins() {
        let curve = [
            ChargePoint {
                ph: 3.0,
                net_charge: 0.5,
            },
            ChargePoint {
                ph: 4.0,
                net_charge: 0.0,
            },
            ChargePoint {
                ph: 5.0,
                net_charge: -0.5,
            },
        ];
        assert_eq!(isoelectric_point(&curve), Some(4.0));
    }

    #[test]
    fn isoelectric_point_none_without_crossing() {
        let curve: Vec<ChargePoint> = (0..15)
            .map(|i| ChargePoint {
                ph: i as f64,
                net_charge: -1.0 - i as f64,
            })
            .collect();
        assert_eq!(isoelectric_point(&curve), None);
    }

    #[test]
    fn rejects_bad_scan_parameters() {
        let (b, a) = chains();
        let zero_step = PhScan {
            min: 0.0,
            max: 14.0,
            step: 0.0,
        };
        assert!(matches!(
            net_charge_curve(&b, &a, zero_step),
            Err(IsletError::InvalidInput(_))
        ));
        let inverted = PhScan {
            min: 7.0,
            max: 3.0,
            step: 1.0,
        };
        assert!(matches!(
            net_charge_curve(&b, &a, inverted),
            Err(IsletError::InvalidInput(_))
        ));
    }

    #[test]
    fn nonionizable_residues_leave_termini_only() {
        let b = ProteinSequence::new(b"GGGGG").unwrap();
        let a = ProteinSequence::new(b"AAAAA").unwrap();
        // At pH 7 the N-terminus is nearly +1 and the C-terminus nearly -1.
        let q = net_charge(&b, &a, 7.0);
        assert!(q.abs() < 0.1, "poly-G/A charge at pH 7 was {}", q);
    }
}
