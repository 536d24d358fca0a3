//! Character classifier for sequence lines.
//!
//! A sequence line is "clean" when every byte is an ASCII letter. Carriage
//! returns and line feeds are tolerated anywhere in the line, so callers may
//! pass lines with their terminator still attached.

use thiserror::Error;

/// Raised when the classifier is handed nothing to classify.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyError {
    #[error("Empty line received")]
    EmptyLine,
}

/// Returns true if `b` may appear on a sequence line.
#[inline]
pub fn is_sequence_byte(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'\n' || b == b'\r'
}

/// Checks a single sequence line.
///
/// Returns `Ok(true)` for a clean line and `Ok(false)` as soon as a byte
/// outside `A-Z`/`a-z` is seen. The position of the offending byte is not
/// reported.
///
/// # Errors
///
/// [`ClassifyError::EmptyLine`] if `line` is empty. The scanner never
/// produces empty lines, so this signals a broken line source.
pub fn is_clean(line: &[u8]) -> Result<bool, ClassifyError> {
    if line.is_empty() {
        return Err(ClassifyError::EmptyLine);
    }
    Ok(line.iter().all(|&b| is_sequence_byte(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_are_clean() {
        assert_eq!(is_clean(b"ACGT"), Ok(true));
        assert_eq!(is_clean(b"acgtNnXx"), Ok(true));
        assert_eq!(is_clean(b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"), Ok(true));
    }

    #[test]
    fn test_line_endings_tolerated() {
        assert_eq!(is_clean(b"ACGT\n"), Ok(true));
        assert_eq!(is_clean(b"ACGT\r\n"), Ok(true));
        assert_eq!(is_clean(b"\n"), Ok(true));
        assert_eq!(is_clean(b"AC\rGT"), Ok(true));
    }

    #[test]
    fn test_below_uppercase_range() {
        assert_eq!(is_clean(b"ACG1"), Ok(false));
        assert_eq!(is_clean(b"AC GT"), Ok(false));
        assert_eq!(is_clean(b"ACGT\t"), Ok(false));
        assert_eq!(is_clean(b"ACGT-"), Ok(false));
        assert_eq!(is_clean(b"@"), Ok(false));
    }

    #[test]
    fn test_between_letter_ranges() {
        for b in [b'[', b'\\', b']', b'^', b'_', b'`'] {
            assert_eq!(is_clean(&[b'A', b]), Ok(false), "byte {b}");
        }
    }

    #[test]
    fn test_above_lowercase_range() {
        assert_eq!(is_clean(b"acgt{"), Ok(false));
        assert_eq!(is_clean(b"acgt~"), Ok(false));
        assert_eq!(is_clean("acgté".as_bytes()), Ok(false));
    }

    #[test]
    fn test_empty_line_is_an_error() {
        assert_eq!(is_clean(b""), Err(ClassifyError::EmptyLine));
    }
}
