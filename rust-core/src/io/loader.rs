//! Whitespace-delimited sample loader
//!
//! A row contributes a sample only when it splits into exactly
//! `LoaderConfig::columns` tokens; other row shapes are skipped. A row of the
//! right shape whose value token is not a number fails the whole load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::config::LoaderConfig;
use crate::error::{Result, SpectralError};

/// Parse samples from a buffered reader
///
/// # Errors
/// `Parse` for a malformed value token (1-based line number), `Io` for read
/// failures, `InvalidInput` if the config points past the last column
pub fn parse_samples<R: BufRead>(reader: R, config: &LoaderConfig) -> Result<Vec<f64>> {
    if config.value_column >= config.columns {
        return Err(SpectralError::InvalidInput(format!(
            "value column {} does not exist in {}-column rows",
            config.value_column, config.columns
        )));
    }

    let mut samples = Vec::new();
    let mut skipped = 0usize;

    // Split on raw bytes: undecodable bytes outside the value token must not fail the load
    for (line_idx, line) in reader.split(b'\n').enumerate() {
        let line = line?;
        let line = String::from_utf8_lossy(&line);
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() != config.columns {
            skipped += 1;
            continue;
        }

        let token = tokens[config.value_column];
        let value: f64 = token.parse().map_err(|_| SpectralError::Parse {
            line: line_idx + 1,
            token: token.to_string(),
        })?;
        samples.push(value);
    }

    debug!("Parsed {} samples ({} rows skipped)", samples.len(), skipped);

    Ok(samples)
}

/// Parse samples from in-memory text
pub fn parse_str(text: &str, config: &LoaderConfig) -> Result<Vec<f64>> {
    parse_samples(text.as_bytes(), config)
}

/// Load samples from a text file
pub fn load_samples<P: AsRef<Path>>(path: P, config: &LoaderConfig) -> Result<Vec<f64>> {
    let file = File::open(path.as_ref())?;
    debug!("Loading samples from {}", path.as_ref().display());
    parse_samples(BufReader::new(file), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_second_of_three_columns() {
        let text = "0 1.5 a\n1   -2.25\tb\n2 3e2 c\n";
        let samples = parse_str(text, &LoaderConfig::default()).unwrap();
        assert_eq!(samples, vec![1.5, -2.25, 300.0]);
    }

    #[test]
    fn test_skips_other_row_shapes() {
        let text = "header line here with words\n\n1 2\n0 4.0 x\n1 2 3 4\n   \n1 5.0 y\n";
        let samples = parse_str(text, &LoaderConfig::default()).unwrap();
        assert_eq!(samples, vec![4.0, 5.0]);
    }

    #[test]
    fn test_malformed_value_fails_whole_load() {
        let err = parse_str("1 5.0 x\n2 foo y\n", &LoaderConfig::default()).unwrap_err();
        match err {
            SpectralError::Parse { line, token } => {
                assert_eq!(line, 2);
                assert_eq!(token, "foo");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_utf8_outside_value_is_ignored() {
        let text: &[u8] = b"0 1.5 a\n1 2.5 \xff\r\n2 3.5 c\n";
        let samples = parse_samples(text, &LoaderConfig::default()).unwrap();
        assert_eq!(samples, vec![1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_invalid_utf8_in_value_is_parse_error() {
        let text: &[u8] = b"0 1.5 a\n1 2.\xff5 b\n";
        assert!(matches!(
            parse_samples(text, &LoaderConfig::default()),
            Err(SpectralError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_custom_columns() {
        let config = LoaderConfig {
            columns: 2,
            value_column: 0,
        };
        let samples = parse_str("7 a\n1 2 3\n8 b\n", &config).unwrap();
        assert_eq!(samples, vec![7.0, 8.0]);
    }

    #[test]
    fn test_bad_value_column() {
        let config = LoaderConfig {
            columns: 3,
            value_column: 3,
        };
        assert!(matches!(
            parse_str("1 2 3\n", &config),
            Err(SpectralError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            load_samples("/nonexistent/samples.txt", &LoaderConfig::default()),
            Err(SpectralError::Io(_))
        ));
    }
}
