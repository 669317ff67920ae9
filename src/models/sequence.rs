use core::str::FromStr;
use std::fmt;

use crate::utils::errors::FastaError;

/// A biological sequence of nucleotide or amino acid symbols.
///
/// Symbols are kept as their ASCII bytes, exactly as they appear in the
/// FASTA input. No alphabet is enforced, so the same type is used for CDS
/// and for protein exon fragments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sequence {
    sequence: Vec<u8>,
}

impl FromStr for Sequence {
    type Err = FastaError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_raw_bytes(s.as_bytes(), s.len())
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // only printable ASCII is ever pushed
        let s = String::from_utf8_lossy(&self.sequence);
        write!(f, "{}", s)
    }
}

impl Sequence {
    /// Creates a new, empty sequence
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exonmerge::models::Sequence;
    ///
    /// let seq = Sequence::new();
    /// assert_eq!(seq.len(), 0)
    /// ```
    pub fn new() -> Self {
        Sequence {
            sequence: Vec::new(),
        }
    }

    /// Creates a new sequence with the specified capacity
    ///
    /// Use this method if you know in advance the final size of the Sequence,
    /// e.g. when concatenating exons of known length.
    pub fn with_capacity(capacity: usize) -> Self {
        Sequence {
            sequence: Vec::with_capacity(capacity),
        }
    }

    /// Creates a new `Sequence` from raw bytes, ignoring newlines and other whitespace
    ///
    /// The `len` value is only a capacity hint.
    ///
    /// # Errors
    /// Non-ASCII and control bytes are rejected with [`FastaError::InvalidSymbol`],
    /// which reports the 1-based line of the offending byte within `bytes`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use exonmerge::models::Sequence;
    ///
    /// let seq = Sequence::from_raw_bytes("AC".as_bytes(), 2).unwrap();
    /// assert_eq!(seq.len(), 2);
    /// let seq = Sequence::from_raw_bytes("A\nC\r\nGT".as_bytes(), 2).unwrap();
    /// assert_eq!(seq.len(), 4);
    /// let protein = Sequence::from_raw_bytes("MKV*".as_bytes(), 4).unwrap();
    /// assert_eq!(protein.to_string(), "MKV*");
    /// ```
    pub fn from_raw_bytes(bytes: &[u8], len: usize) -> Result<Self, FastaError> {
        let mut seq = Self::with_capacity(len);
        for (idx, line) in bytes.split(|b| *b == b'\n').enumerate() {
            seq.extend_from_raw_bytes(line)
                .map_err(|byte| FastaError::InvalidSymbol {
                    byte,
                    line: idx + 1,
                })?;
        }
        Ok(seq)
    }

    /// Appends raw bytes to the sequence, skipping whitespace
    ///
    /// Returns the first byte that is not a printable ASCII symbol.
    pub(crate) fn extend_from_raw_bytes(&mut self, bytes: &[u8]) -> Result<(), u8> {
        for b in bytes {
            if b.is_ascii_whitespace() {
                continue;
            }
            if !b.is_ascii_graphic() {
                return Err(*b);
            }
            self.sequence.push(*b);
        }
        Ok(())
    }

    /// Returns the length of the Sequence
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Returns true if the Sequence contains no symbols.
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Moves all the symbols of `other` to the end of `Self`
    ///
    /// This is how exon fragments are concatenated, in the order
    /// they are appended.
    ///
    /// # Examples
    /// ```rust
    /// use exonmerge::models::Sequence;
    ///
    /// let mut seq = Sequence::from_raw_bytes("AC".as_bytes(), 2).unwrap();
    /// let seq_2 = Sequence::from_raw_bytes("GT".as_bytes(), 2).unwrap();
    /// seq.append(seq_2);
    /// assert_eq!(seq.to_string(), "ACGT".to_string());
    /// ```
    pub fn append(&mut self, other: Sequence) {
        self.sequence.append(&mut other.into_inner())
    }

    /// Unwraps the Sequence, returning the underlying bytes
    fn into_inner(self) -> Vec<u8> {
        self.sequence
    }

    /// Returns the Sequence as a byte slice of ASCII symbols
    pub fn as_bytes(&self) -> &[u8] {
        &self.sequence
    }

    /// Returns an iterator over `chunk_size` symbols at a time,
    /// starting at the beginning of the Sequence.
    ///
    /// The last chunk is shorter if `chunk_size` does not divide the length.
    ///
    /// # Panics
    /// Panics if chunk_size is 0.
    ///
    /// # Examples
    /// ```rust
    /// use exonmerge::models::Sequence;
    ///
    /// let seq = Sequence::from_raw_bytes("ATGCTAG".as_bytes(), 7).unwrap();
    /// let mut iter = seq.chunks(3);
    /// assert_eq!(iter.next().unwrap(), b"ATG");
    /// assert_eq!(iter.next().unwrap(), b"CTA");
    /// assert_eq!(iter.next().unwrap(), b"G");
    /// ```
    pub fn chunks(&self, chunk_size: usize) -> std::slice::Chunks<'_, u8> {
        self.sequence.chunks(chunk_size)
    }

    /// Returns true if the length is a whole number of codons
    pub fn is_in_frame(&self) -> bool {
        self.len() % 3 == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_sequence() {
        let s = "ATCGACGATCGATCGATGAGCGATCGACGATCGCGCTATCGCTA";
        let seq = Sequence::from_str(&s).unwrap();

        assert_eq!(seq.len(), 44);
        assert_eq!(seq.to_string(), s.to_string())
    }

    #[test]
    fn test_whitespace_is_dropped() {
        let seq = Sequence::from_str("ATG CC\tA\r\n").unwrap();
        assert_eq!(seq.to_string(), "ATGCCA");
        assert!(seq.is_in_frame());
    }

    #[test]
    fn test_invalid_symbol() {
        let err = Sequence::from_raw_bytes(&[b'A', 0x07, b'C'], 3).unwrap_err();
        assert!(matches!(err, FastaError::InvalidSymbol { byte: 0x07, line: 1 }));

        let err = Sequence::from_raw_bytes(b"AC\nGT\nG\xffT", 8).unwrap_err();
        assert!(matches!(err, FastaError::InvalidSymbol { byte: 0xff, line: 3 }));

        assert!(Sequence::from_str("ACGÄ").is_err());
    }

    #[test]
    fn test_append_keeps_order() {
        let mut seq = Sequence::new();
        for part in ["AAA", "TTT", "GGG"] {
            seq.append(Sequence::from_str(part).unwrap());
        }
        assert_eq!(seq.to_string(), "AAATTTGGG");
        assert_eq!(seq.len(), 9);
    }

    #[test]
    fn test_frame() {
        assert!(Sequence::new().is_in_frame());
        assert!(!Sequence::from_str("ACGT").unwrap().is_in_frame());
    }

    #[test]
    #[should_panic]
    fn test_chunks_zero() {
        let seq = Sequence::from_str("ATG").unwrap();
        let _ = seq.chunks(0);
    }
}
