//! Validated protein sequence type.
//!
//! [`ProteinSequence`] is a newtype over `Vec<u8>`. Construction uppercases
//! and validates every byte, so the inner data is always uppercase ASCII
//! letters and `Deref<Target=[u8]>` is safe to hand to downstream `&[u8]`
//! APIs. A zero-length sequence is never a valid value of this type.

use std::fmt;
use std::ops::Deref;

use islet_core::{IsletError, Result};

/// Map an amino acid byte to an index 0–19. Returns None for codes outside
/// the 20 standard residues.
pub(crate) fn aa_index(aa: u8) -> Option<usize> {
    match aa {
        b'A' => Some(0),
        b'C' => Some(1),
        b'D' => Some(2),
        b'E' => Some(3),
        b'F' => Some(4),
        b'G' => Some(5),
        b'H' => Some(6),
        b'I' => Some(7),
        b'K' => Some(8),
        b'L' => Some(9),
        b'M' => Some(10),
        b'N' => Some(11),
        b'P' => Some(12),
        b'Q' => Some(13),
        b'R' => Some(14),
        b'S' => Some(15),
        b'T' => Some(16),
        b'V' => Some(17),
        b'W' => Some(18),
        b'Y' => Some(19),
        _ => None,
    }
}

/// A validated, non-empty protein sequence.
///
/// Accepts the 20 standard amino acids plus the extended single-letter codes
/// (B, J, O, U, X, Z), since a cleaned flat-file record may carry ambiguity
/// codes. The reference tables in [`crate::mass`] cover only the standard 20;
/// an extended code surfaces there as an `UnknownSymbol` error.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ProteinSequence {
    data: Vec<u8>,
}

impl ProteinSequence {
    /// Create a new validated sequence from raw bytes.
    ///
    /// Input is uppercased, then every byte is checked to be an ASCII letter.
    ///
    /// # Errors
    ///
    /// `EmptyInput` for zero-length input, `Format` for any non-letter byte.
    ///
    /// # Example
    ///
    /// ```
    /// use islet_seq::ProteinSequence;
    ///
    /// let seq = ProteinSequence::new(b"givEQcc").unwrap();
    /// assert_eq!(seq.as_bytes(), b"GIVEQCC");
    /// assert!(ProteinSequence::new(b"GIV1EQ").is_err());
    /// ```
    pub fn new(bytes: impl AsRef<[u8]>) -> Result<Self> {
        let data: Vec<u8> = bytes
            .as_ref()
            .iter()
            .map(|b| b.to_ascii_uppercase())
            .collect();
        if data.is_empty() {
            return Err(IsletError::EmptyInput(
                "protein sequence has no residues".to_string(),
            ));
        }
        for (i, &b) in data.iter().enumerate() {
            if !b.is_ascii_uppercase() {
                return Err(IsletError::Format(format!(
                    "invalid residue byte '{}' (0x{:02X}) at position {}",
                    b as char, b, i
                )));
            }
        }
        Ok(Self { data })
    }

    /// Create a sequence from pre-validated bytes, skipping validation.
    ///
    /// Caller must guarantee all bytes are uppercase ASCII letters and that
    /// `data` is non-empty.
    pub(crate) fn from_validated(data: Vec<u8>) -> Self {
        debug_assert!(!data.is_empty());
        debug_assert!(data.iter().all(u8::is_ascii_uppercase));
        Self { data }
    }

    /// The sequence as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the sequence and return the inner byte vector.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

impl Deref for ProteinSequence {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.data
    }
}

impl AsRef<[u8]> for ProteinSequence {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl fmt::Debug for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        write!(f, "ProteinSequence(\"{}\")", s)
    }
}

impl fmt::Display for ProteinSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.data).unwrap_or("???");
        f.write_str(s)
    }
}
