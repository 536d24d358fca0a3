//! fasta_validate - FASTA structure checker
//!
//! ## Usage
//!
//! ```bash
//! fasta_validate reads.fasta
//! fasta_validate -v reads.fa.gz      # explain failures on stderr
//! fasta_validate a.fa b.fa.gz        # several files, first failure wins
//! ```
//!
//! The answer is the exit status; see `--help` for the codes.

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;

use fasta_validate::config::{ValidatorConfig, DEFAULT_MAX_LINE_LEN, DEFAULT_REGISTRY_CAPACITY};
use fasta_validate::fault::{exit_code, EXIT_MISSING_HEADER, EXIT_VALID};
use fasta_validate::logging;
use fasta_validate::scanner::Validator;

const EXIT_CODES: &str = "\
Exit status:
  0     this is a valid fasta file
  1     the first line does not start with a > (or the file cannot be read)
  2     the ids are not unique
  4     lines in the sequence (that do not start with >) contain characters other than [A-Za-z]
  8     there is a sequence with zero length in it
  >200  internal errors, eg. unable to allocate memory";

/// fasta_validate - Check that a FASTA file is well-formed
///
/// Files ending in .gz are decompressed on the fly. Use "-" to read standard input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, after_help = EXIT_CODES)]
struct Args {
    /// FASTA file(s) to validate
    #[arg(required = true, value_name = "FASTA_FILE")]
    files: Vec<PathBuf>,

    /// Report why a file is invalid on stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Longest accepted line in bytes; longer lines make the file unreadable
    #[arg(long = "max-line-length", value_name = "BYTES", default_value_t = DEFAULT_MAX_LINE_LEN)]
    max_line_len: usize,

    /// Number of records to reserve identifier space for
    #[arg(long = "expected-records", value_name = "N", default_value_t = DEFAULT_REGISTRY_CAPACITY)]
    expected_records: usize,
}

/// Validates every file and returns the status of the first failure.
fn run(args: &Args) -> u8 {
    let config = ValidatorConfig::default()
        .with_verbose(args.verbose)
        .with_max_line_len(args.max_line_len)
        .with_registry_capacity(args.expected_records);

    let mut validator = match Validator::new(config) {
        Ok(validator) => validator,
        Err(fault) => return fault.exit_code(),
    };

    let mut status = EXIT_VALID;
    for file in &args.files {
        let outcome = validator.validate_path(file);
        if let Ok(summary) = &outcome {
            info!(file = %file.display(), %summary, "valid FASTA");
        }
        let code = exit_code(&outcome);
        if matches!(&outcome, Err(fault) if fault.is_internal()) {
            return code;
        }
        if status == EXIT_VALID {
            status = code;
        }
    }
    status
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                // 2 means duplicate ids, so usage errors report 1
                _ => ExitCode::from(EXIT_MISSING_HEADER),
            };
        }
    };

    if let Err(e) = logging::init(args.verbose) {
        eprintln!("{e:#}");
    }

    ExitCode::from(run(&args))
}
