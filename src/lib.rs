//! # fasta-validate - FASTA structure checker
//!
//! Decides whether a FASTA file, plain or gzip-compressed, is well-formed,
//! and if not, which rule it breaks first. Nothing is parsed into sequences:
//! the file is streamed once, line by line.
//!
//! ## Architecture
//!
//! - `classify`: byte-level check of sequence lines
//! - `registry`: per-run set of record identifiers
//! - `scanner`: the single-pass state machine and the `Validator` entry point
//! - `fault`: what can go wrong, and the exit code for each
//! - `input`: plain/gzip selection and bounded line reading
//! - `config`: settings shared by every file of one invocation
//! - `logging`: stderr diagnostics for the binary
//!
//! ## Example
//!
//! ```
//! use std::io::Cursor;
//!
//! use fasta_validate::config::ValidatorConfig;
//! use fasta_validate::fault::{exit_code, Fault};
//! use fasta_validate::scanner::validate;
//!
//! let config = ValidatorConfig::default();
//! let outcome = validate(Cursor::new(">seq1\nACGT\n>seq1\nACGT\n"), &config);
//! assert!(matches!(outcome, Err(Fault::DuplicateId { .. })));
//! assert_eq!(exit_code(&outcome), 2);
//! ```

pub mod classify;
pub mod config;
pub mod fault;
pub mod input;
pub mod logging;
pub mod registry;
pub mod scanner;

pub use config::ValidatorConfig;
pub use fault::Fault;
pub use scanner::{validate, validate_path, Summary, Validator};
