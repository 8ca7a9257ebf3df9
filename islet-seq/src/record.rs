//! ORIGIN flat-record cleaning.
//!
//! NCBI flat files carry the sequence in an `ORIGIN` section: numbered lines
//! of fixed-width residue chunks, terminated by `//`. Cleaning discards the
//! markers, the position numbers, and any whitespace or stray punctuation,
//! keeping only the residue letters in their original order.

use islet_core::{IsletError, Result};

use crate::seq::ProteinSequence;

/// Clean an ORIGIN-format record into a bare uppercase residue sequence.
///
/// Anything before the `ORIGIN` line (LOCUS, DEFINITION, and the rest of a
/// flat-file header) and anything after the `//` terminator is ignored.
/// Within the body, digits, whitespace, and punctuation are dropped
/// silently; this is a deliberate permissive policy toward formatting
/// noise, not an error.
///
/// # Errors
///
/// `Format` when the `ORIGIN` marker or the `//` terminator is missing,
/// `EmptyInput` when no residues remain between the markers.
///
/// # Example
///
/// ```
/// use islet_seq::clean_record;
///
/// let seq = clean_record("ORIGIN\n        1 malwmrllpl\n//\n").unwrap();
/// assert_eq!(seq.as_bytes(), b"MALWMRLLPL");
/// ```
pub fn clean_record(raw: &str) -> Result<ProteinSequence> {
    let mut residues: Vec<u8> = Vec::new();
    let mut in_origin = false;
    let mut terminated = false;

    for line in raw.lines() {
        if !in_origin {
            if line.starts_with("ORIGIN") {
                in_origin = true;
            }
            continue;
        }

        if line.starts_with("//") {
            terminated = true;
            break;
        }

        // Body lines: "        1 malwmrllpl lallalwgp ..."
        for part in line.split_whitespace() {
            // Skip the position number at the start of the line
            if part.bytes().all(|c| c.is_ascii_digit()) {
                continue;
            }
            for ch in part.bytes() {
                if ch.is_ascii_alphabetic() {
                    residues.push(ch.to_ascii_uppercase());
                }
            }
        }
    }

    if !in_origin {
        return Err(IsletError::Format(
            "record has no ORIGIN marker".to_string(),
        ));
    }
    if !terminated {
        return Err(IsletError::Format(
            "record has no '//' terminator".to_string(),
        ));
    }
    if residues.is_empty() {
        return Err(IsletError::EmptyInput(
            "record body contains no residues".to_string(),
        ));
    }

    Ok(ProteinSequence::from_validated(residues))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_simple_record() {
        let seq = clean_record("ORIGIN\n        1 malwmrllpl\n//\n").unwrap();
        assert_eq!(seq.as_bytes(), b"MALWMRLLPL");
        assert_eq!(seq.len(), 10);
    }

    #[test]
    fn clean_multi_line_body() {
        let raw = "ORIGIN\n\
                   \x20       1 malwmrllpl lallalwgpd\n\
                   \x20      21 paaa\n\
                   //\n";
        let seq = clean_record(raw).unwrap();
        assert_eq!(seq.as_bytes(), b"MALWMRLLPLLALLALWGPDPAAA");
    }

    #[test]
    fn clean_ignores_header_and_trailer() {
        let raw = "LOCUS       NP_000198                110 aa\n\
                   DEFINITION  insulin preproprotein [Homo sapiens].\n\
                   ORIGIN\n\
                   \x20       1 giveqcctsi\n\
                   //\n\
                   leftover junk after the terminator\n";
        let seq = clean_record(raw).unwrap();
        assert_eq!(seq.as_bytes(), b"GIVEQCCTSI");
    }

    #[test]
    fn clean_drops_stray_punctuation() {
        let seq = clean_record("ORIGIN\n1 mal-w, mr.llpl9\n//\n").unwrap();
        assert_eq!(seq.as_bytes(), b"MALWMRLLPL");
    }

    #[test]
    fn clean_missing_origin_marker() {
        let err = clean_record("1 malwmrllpl\n//\n").unwrap_err();
        assert!(matches!(err, IsletError::Format(_)));
        assert!(err.to_string().contains("ORIGIN"));
    }

    #[test]
    fn clean_missing_terminator() {
        let err = clean_record("ORIGIN\n1 malwmrllpl\n").unwrap_err();
        assert!(matches!(err, IsletError::Format(_)));
        assert!(err.to_string().contains("//"));
    }

    #[test]
    fn clean_empty_body() {
        let err = clean_record("ORIGIN\n//\n").unwrap_err();
        assert!(matches!(err, IsletError::EmptyInput(_)));
    }

    #[test]
    fn clean_body_with_only_numbers() {
        let err = clean_record("ORIGIN\n1 2 3\n//\n").unwrap_err();
        assert!(matches!(err, IsletError::EmptyInput(_)));
    }

    #[test]
    fn clean_is_idempotent_on_wrapped_clean_input() {
        // Wrapping an already-clean sequence in bare markers round-trips it.
        let original = "GIVEQCCTSICSLYQLENYCN";
        let raw = format!("ORIGIN\n{}\n//\n", original);
        let seq = clean_record(&raw).unwrap();
        assert_eq!(seq.as_bytes(), original.as_bytes());
    }
}
