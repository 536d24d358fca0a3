//! Fault taxonomy and its translation to process exit codes.
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0    | valid FASTA |
//! | 1    | first line is not a header, or the file is unreadable |
//! | 2    | duplicate identifier |
//! | 4    | sequence line contains a disallowed character |
//! | 8    | a record (or the whole file) has no sequence |
//! | 255  | internal error |

use std::io;

use thiserror::Error;

use crate::registry::RegistryError;

pub const EXIT_VALID: u8 = 0;
pub const EXIT_MISSING_HEADER: u8 = 1;
pub const EXIT_DUPLICATE_ID: u8 = 2;
pub const EXIT_INVALID_CHARACTER: u8 = 4;
pub const EXIT_EMPTY_SEQUENCE: u8 = 8;
pub const EXIT_INTERNAL: u8 = 255;

/// Why a file is not well-formed FASTA.
///
/// Exactly one fault is reported per run: the first one found.
#[derive(Error, Debug)]
pub enum Fault {
    #[error("The first line should start with a >")]
    MissingHeader,

    #[error("Cannot read input: {0}")]
    Unreadable(#[source] io::Error),

    #[error("Found a duplicate id: |{id}| at line {line}")]
    DuplicateId { id: String, line: u64 },

    #[error("Non word character in sequence at line {line}")]
    InvalidCharacter { line: u64 },

    #[error("Empty sequence for record ending at line {line}")]
    EmptySequence { line: u64 },

    #[error("Internal error: {0}")]
    Internal(#[from] InternalError),
}

/// Failures that say nothing about the input itself.
#[derive(Error, Debug)]
pub enum InternalError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("Empty line received at line {0}")]
    EmptyLine(u64),
}

impl From<RegistryError> for Fault {
    fn from(e: RegistryError) -> Self {
        Fault::Internal(InternalError::Registry(e))
    }
}

impl Fault {
    /// The process exit status reported for this fault.
    pub fn exit_code(&self) -> u8 {
        match self {
            Fault::MissingHeader | Fault::Unreadable(_) => EXIT_MISSING_HEADER,
            Fault::DuplicateId { .. } => EXIT_DUPLICATE_ID,
            Fault::InvalidCharacter { .. } => EXIT_INVALID_CHARACTER,
            Fault::EmptySequence { .. } => EXIT_EMPTY_SEQUENCE,
            Fault::Internal(_) => EXIT_INTERNAL,
        }
    }

    /// True for faults that reflect the tool rather than the input.
    pub fn is_internal(&self) -> bool {
        matches!(self, Fault::Internal(_))
    }
}

/// Maps a validation outcome to an exit status.
pub fn exit_code<T>(outcome: &Result<T, Fault>) -> u8 {
    match outcome {
        Ok(_) => EXIT_VALID,
        Err(fault) => fault.exit_code(),
    }
}
