//! Token input loading.
//!
//! Reads whitespace-separated numeric tokens from a file or stdin.
//! Tokenization is deliberately trivial: scraping numbers out of prose,
//! OCR and image decoding belong to upstream tools, and this CLI
//! consumes their already-extracted output.

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::error::DigitLensError;
use crate::token::NumericToken;

/// Reads tokens from a file.
pub fn load_file(path: &Path) -> Result<Vec<NumericToken>, DigitLensError> {
    let contents = fs::read_to_string(path)?;
    log::debug!("Loaded {} bytes from {:?}", contents.len(), path);
    tokens_from_str(&contents)
}

/// Reads tokens from stdin until EOF.
pub fn load_stdin() -> Result<Vec<NumericToken>, DigitLensError> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    tokens_from_str(&buffer)
}

/// Splits input on ASCII whitespace into tokens.
///
/// Errors when the input contains no tokens at all; an empty analysis
/// is always a caller mistake. Tokens that turn out to be non-numeric
/// are kept and end up in the histogram's excluded bucket.
pub fn tokens_from_str(input: &str) -> Result<Vec<NumericToken>, DigitLensError> {
    let tokens: Vec<NumericToken> = input
        .split_ascii_whitespace()
        .map(NumericToken::from)
        .collect();
    if tokens.is_empty() {
        return Err(DigitLensError::NoTokens);
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_tokens_split_on_any_whitespace() {
        let tokens = tokens_from_str("12 7.5\t0.003\n\n900  x41").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], NumericToken::from("12"));
        assert_eq!(tokens[4], NumericToken::from("x41"));
    }

    #[test]
    fn test_blank_input_is_an_error() {
        assert!(matches!(tokens_from_str(""), Err(DigitLensError::NoTokens)));
        assert!(matches!(tokens_from_str("  \n\t "), Err(DigitLensError::NoTokens)));
    }

    #[test]
    fn test_load_file_round_trip() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "123 456\n789").unwrap();

        let tokens = load_file(file.path()).unwrap();
        assert_eq!(
            tokens,
            vec![
                NumericToken::from("123"),
                NumericToken::from("456"),
                NumericToken::from("789"),
            ]
        );
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = load_file(Path::new("/nonexistent/digitlens-input.txt"));
        assert!(matches!(result, Err(DigitLensError::Io(_))));
    }
}
