use crate::utils::errors::MergeError;

/// The transcript stem and exon number encoded in an exon identifier
///
/// The identifier is split on the *last* occurrence of the delimiter,
/// so stems may themselves contain the delimiter.
///
/// # Examples
///
/// ```rust
/// use exonmerge::models::ExonKey;
///
/// let key = ExonKey::parse("cds.GPLIN_000008300.t1.11", ".").unwrap();
/// assert_eq!(key.stem(), "cds.GPLIN_000008300.t1");
/// assert_eq!(key.part(), 11);
///
/// assert!(ExonKey::parse("cds_GPLIN1", ".").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExonKey {
    stem: String,
    part: usize,
}

impl ExonKey {
    /// Splits `identifier` into stem and exon number
    ///
    /// # Errors
    /// [`MergeError::MalformedIdentifier`] if the delimiter does not occur or
    /// the suffix after it is not a positive integer.
    pub fn parse(identifier: &str, delimiter: &str) -> Result<Self, MergeError> {
        let malformed = || MergeError::MalformedIdentifier {
            id: identifier.to_string(),
            delimiter: delimiter.to_string(),
        };

        if delimiter.is_empty() {
            return Err(MergeError::EmptyDelimiter);
        }

        let (stem, part) = identifier.rsplit_once(delimiter).ok_or_else(malformed)?;
        let part = part.parse::<usize>().map_err(|_| malformed())?;
        if part == 0 {
            return Err(malformed());
        }

        Ok(ExonKey {
            stem: stem.to_string(),
            part,
        })
    }

    /// Builds the identifier of exon `part` of `stem`
    pub fn identifier(stem: &str, delimiter: &str, part: usize) -> String {
        format!("{}{}{}", stem, delimiter, part)
    }

    pub fn stem(&self) -> &str {
        &self.stem
    }

    pub fn part(&self) -> usize {
        self.part
    }

    /// Consumes the key and returns the stem
    pub fn into_stem(self) -> String {
        self.stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_last_delimiter() {
        let key = ExonKey::parse("a.b.c.3", ".").unwrap();
        assert_eq!(key.stem(), "a.b.c");
        assert_eq!(key.part(), 3);
    }

    #[test]
    fn test_multi_char_delimiter() {
        let key = ExonKey::parse("gene_exon_exon_2", "_exon_").unwrap();
        assert_eq!(key.stem(), "gene_exon");
        assert_eq!(key.part(), 2);
    }

    #[test]
    fn test_missing_delimiter() {
        let err = ExonKey::parse("cds_GPLIN1", ".").unwrap_err();
        match err {
            MergeError::MalformedIdentifier { id, delimiter } => {
                assert_eq!(id, "cds_GPLIN1");
                assert_eq!(delimiter, ".");
            }
            _ => panic!("unexpected error {:?}", err),
        }
    }

    #[test]
    fn test_non_integer_suffix() {
        assert!(matches!(
            ExonKey::parse("cds.t1", "."),
            Err(MergeError::MalformedIdentifier { .. })
        ));
        assert!(matches!(
            ExonKey::parse("cds.", "."),
            Err(MergeError::MalformedIdentifier { .. })
        ));
        assert!(matches!(
            ExonKey::parse("cds.-1", "."),
            Err(MergeError::MalformedIdentifier { .. })
        ));
    }

    #[test]
    fn test_zero_is_not_an_exon_number() {
        assert!(matches!(
            ExonKey::parse("cds.0", "."),
            Err(MergeError::MalformedIdentifier { .. })
        ));
    }

    #[test]
    fn test_empty_stem() {
        let key = ExonKey::parse(".1", ".").unwrap();
        assert_eq!(key.stem(), "");
        assert_eq!(key.part(), 1);
    }

    #[test]
    fn test_empty_delimiter() {
        assert!(matches!(
            ExonKey::parse("a.1", ""),
            Err(MergeError::EmptyDelimiter)
        ));
    }

    #[test]
    fn test_identifier() {
        assert_eq!(ExonKey::identifier("tx", ".", 4), "tx.4");
    }
}
