//! Single-pass FASTA validation.
//!
//! The scanner walks the input one line at a time and stops at the first
//! fault. It keeps one line in memory, the set of identifiers seen so far,
//! and the residue count of the current record.
//!
//! ## Rules
//!
//! - the first line must be a header (`>` as first byte)
//! - identifiers (text after `>` up to the first space) must be unique
//! - sequence lines may only hold `A-Z` and `a-z`
//! - every record, and therefore the file, must hold at least one sequence
//!   line (a blank one will do)

use std::io::BufRead;
use std::path::Path;

use tracing::{debug, error, info_span, warn};

use crate::classify::{self, ClassifyError};
use crate::config::ValidatorConfig;
use crate::fault::{Fault, InternalError};
use crate::input::{open_input, trim_line_ending, LineReader};
use crate::registry::IdRegistry;

/// Record marker that starts a header line.
pub const HEADER_MARKER: u8 = b'>';

/// Counts gathered from a well-formed file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of header lines.
    pub records: u64,
    /// Sequence bytes, line terminators excluded.
    pub residues: u64,
    /// Lines read, headers included.
    pub lines: u64,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} records, {} residues, {} lines",
            self.records, self.residues, self.lines
        )
    }
}

/// Returns true if `line` starts a new record.
#[inline]
pub fn is_header(line: &[u8]) -> bool {
    line.first() == Some(&HEADER_MARKER)
}

/// Extracts the record identifier from a header line.
///
/// The marker and the line terminator are dropped and the rest is cut at the
/// first space. Tabs are part of the identifier.
pub fn record_id(header: &[u8]) -> &[u8] {
    let rest = trim_line_ending(header.strip_prefix(&[HEADER_MARKER]).unwrap_or(header));
    match rest.iter().position(|&b| b == b' ') {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// Validates FASTA files, one at a time.
///
/// The identifier registry is cleared at the start of every run, so one
/// validator may be reused across files but never shared between threads.
#[derive(Debug)]
pub struct Validator {
    config: ValidatorConfig,
    registry: IdRegistry,
}

impl Validator {
    /// Creates a validator, reserving room for the identifier registry.
    pub fn new(config: ValidatorConfig) -> Result<Self, Fault> {
        let registry = match IdRegistry::with_capacity(config.registry_capacity) {
            Ok(registry) => registry,
            Err(e) => {
                let fault = Fault::from(e);
                report(&fault, config.verbose);
                return Err(fault);
            }
        };
        Ok(Self { config, registry })
    }

    /// Validates the file at `path`, decompressing it if it ends in `.gz`.
    pub fn validate_path<P: AsRef<Path>>(&mut self, path: P) -> Result<Summary, Fault> {
        let path = path.as_ref();
        let span = info_span!("validate", path = %path.display());
        let _guard = span.enter();
        let reader = match open_input(path) {
            Ok(reader) => reader,
            Err(e) => {
                let fault = Fault::Unreadable(e);
                report(&fault, self.config.verbose);
                return Err(fault);
            }
        };
        self.validate(reader)
    }

    /// Validates the lines produced by `reader`.
    pub fn validate<R: BufRead>(&mut self, reader: R) -> Result<Summary, Fault> {
        self.registry.reset();
        let lines = LineReader::new(reader, self.config.max_line_len);
        let outcome = Scan::new(&mut self.registry).run(lines);
        match &outcome {
            Ok(summary) => debug!(%summary, "valid FASTA"),
            Err(fault) => report(fault, self.config.verbose),
        }
        outcome
    }
}

/// Validates `reader` with a fresh registry.
pub fn validate<R: BufRead>(reader: R, config: &ValidatorConfig) -> Result<Summary, Fault> {
    Validator::new(*config)?.validate(reader)
}

/// Validates the file at `path` with a fresh registry.
pub fn validate_path<P: AsRef<Path>>(path: P, config: &ValidatorConfig) -> Result<Summary, Fault> {
    Validator::new(*config)?.validate_path(path)
}

fn report(fault: &Fault, verbose: bool) {
    if fault.is_internal() {
        error!(code = fault.exit_code(), "{fault}");
    } else if verbose {
        warn!(code = fault.exit_code(), "{fault}");
    } else {
        debug!(code = fault.exit_code(), "{fault}");
    }
}

/// State of one pass over the input.
struct Scan<'a> {
    registry: &'a mut IdRegistry,
    first_line: bool,
    sequence_len: u64,
    summary: Summary,
}

impl<'a> Scan<'a> {
    fn new(registry: &'a mut IdRegistry) -> Self {
        Self {
            registry,
            first_line: true,
            sequence_len: 0,
            summary: Summary::default(),
        }
    }

    fn run<R: BufRead>(mut self, mut lines: LineReader<R>) -> Result<Summary, Fault> {
        while let Some(line) = lines.next_line().map_err(Fault::Unreadable)? {
            self.summary.lines += 1;
            if is_header(line) {
                self.header(line)?;
            } else {
                self.sequence(line)?;
            }
        }

        if self.sequence_len == 0 {
            return Err(Fault::EmptySequence {
                line: self.summary.lines,
            });
        }
        Ok(self.summary)
    }

    fn header(&mut self, line: &[u8]) -> Result<(), Fault> {
        if !self.first_line && self.sequence_len == 0 {
            return Err(Fault::EmptySequence {
                line: self.summary.lines - 1,
            });
        }
        self.first_line = false;
        self.sequence_len = 0;

        let id = record_id(line);
        if self.registry.insert_if_absent(id)? {
            return Err(Fault::DuplicateId {
                id: String::from_utf8_lossy(id).into_owned(),
                line: self.summary.lines,
            });
        }
        self.summary.records += 1;
        Ok(())
    }

    fn sequence(&mut self, line: &[u8]) -> Result<(), Fault> {
        if self.first_line {
            return Err(Fault::MissingHeader);
        }
        match classify::is_clean(line) {
            Ok(true) => {}
            Ok(false) => {
                return Err(Fault::InvalidCharacter {
                    line: self.summary.lines,
                })
            }
            Err(ClassifyError::EmptyLine) => {
                return Err(InternalError::EmptyLine(self.summary.lines).into());
            }
        }
        // The terminator counts, so a blank line keeps its record non-empty.
        self.sequence_len += line.len() as u64;
        self.summary.residues += trim_line_ending(line).len() as u64;
        Ok(())
    }
}
