use crate::fasta::LINE_WIDTH;
use crate::utils::errors::MergeError;

/// Default delimiter between transcript stem and exon number
pub const DEFAULT_DELIMITER: &str = ".";

/// Settings of a merge run
///
/// # Examples
///
/// ```rust
/// use exonmerge::merge::MergeConfig;
///
/// let config = MergeConfig::default();
/// assert_eq!(config.delimiter(), ".");
/// assert_eq!(config.line_width(), 60);
///
/// let config = MergeConfig::with_delimiter("_exon").unwrap().with_line_width(80);
/// assert_eq!(config.delimiter(), "_exon");
/// assert_eq!(config.line_width(), 80);
///
/// assert!(MergeConfig::with_delimiter("").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeConfig {
    delimiter: String,
    line_width: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        MergeConfig {
            delimiter: DEFAULT_DELIMITER.to_string(),
            line_width: LINE_WIDTH,
        }
    }
}

impl MergeConfig {
    /// Creates a config with a custom, non-empty delimiter
    pub fn with_delimiter(delimiter: impl Into<String>) -> Result<Self, MergeError> {
        let delimiter = delimiter.into();
        if delimiter.is_empty() {
            return Err(MergeError::EmptyDelimiter);
        }
        Ok(MergeConfig {
            delimiter,
            ..Default::default()
        })
    }

    /// Sets the output line width, `0` disables wrapping
    pub fn with_line_width(mut self, width: usize) -> Self {
        self.line_width = width;
        self
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    pub fn line_width(&self) -> usize {
        self.line_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = MergeConfig::default();
        assert_eq!(config.delimiter(), DEFAULT_DELIMITER);
        assert_eq!(config.line_width(), 60);
    }

    #[test]
    fn test_empty_delimiter() {
        assert!(matches!(
            MergeConfig::with_delimiter(""),
            Err(MergeError::EmptyDelimiter)
        ));
    }
}
