//! Input streams.
//!
//! Picks plain or gzip decoding from the file name and hands the scanner a
//! line source that does not know which one it got.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

/// Buffer size for file readers.
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// File name suffix that selects gzip decoding.
const GZIP_SUFFIX: &[u8] = b".gz";

/// Path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// How the bytes of an input are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Plain,
    Gzip,
}

impl std::fmt::Display for Compression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Compression::Plain => write!(f, "plain"),
            Compression::Gzip => write!(f, "gzip"),
        }
    }
}

impl Compression {
    /// Detects compression from the path: a name ending in `.gz` (exact
    /// case) means gzip.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        if path.as_ref().as_os_str().as_encoded_bytes().ends_with(GZIP_SUFFIX) {
            Compression::Gzip
        } else {
            Compression::Plain
        }
    }
}

/// Opens `path` for line reading, decompressing `.gz` files.
///
/// `-` reads standard input as plain text.
pub fn open_input<P: AsRef<Path>>(path: P) -> io::Result<Box<dyn BufRead>> {
    let path = path.as_ref();
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(io::stdin().lock()));
    }

    let file = File::open(path)?;
    match Compression::from_path(path) {
        Compression::Gzip => Ok(Box::new(BufReader::with_capacity(
            READ_BUFFER_SIZE,
            MultiGzDecoder::new(file),
        ))),
        Compression::Plain => Ok(Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, file))),
    }
}

/// Reads one line at a time into a reused buffer.
///
/// Lines keep their terminator. A line longer than `max_line_len` bytes is
/// an `InvalidData` error rather than being split.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    max_line_len: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, max_line_len: usize) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            max_line_len,
        }
    }

    /// Returns the next line, or `None` once the input is exhausted.
    pub fn next_line(&mut self) -> io::Result<Option<&[u8]>> {
        self.buf.clear();
        let limit = (self.max_line_len as u64).saturating_add(1);
        let n = (&mut self.inner).take(limit).read_until(b'\n', &mut self.buf)?;
        if n == 0 {
            return Ok(None);
        }
        if n > self.max_line_len {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line longer than {} bytes", self.max_line_len),
            ));
        }
        Ok(Some(self.buf.as_slice()))
    }
}

/// Strips a trailing `\n` or `\r\n`.
pub fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use flate2::write::GzEncoder;
    use flate2::Compression as GzLevel;
    use tempfile::Builder;

    use super::*;

    fn collect_lines<R: BufRead>(reader: &mut LineReader<R>) -> io::Result<Vec<Vec<u8>>> {
        let mut lines = Vec::new();
        while let Some(line) = reader.next_line()? {
            lines.push(line.to_vec());
        }
        Ok(lines)
    }

    #[test]
    fn test_compression_from_path() {
        assert_eq!(Compression::from_path("reads.fa.gz"), Compression::Gzip);
        assert_eq!(Compression::from_path("dir/.gz"), Compression::Gzip);
        assert_eq!(Compression::from_path("READS.FA.GZ"), Compression::Plain);
        assert_eq!(Compression::from_path("reads.fa.Gz"), Compression::Plain);
        assert_eq!(Compression::from_path("reads.fasta"), Compression::Plain);
        assert_eq!(Compression::from_path("reads.gzip"), Compression::Plain);
        assert_eq!(Compression::from_path("gz"), Compression::Plain);
    }

    #[test]
    fn test_uppercase_gz_is_read_as_plain() {
        let mut file = Builder::new().suffix(".FA.GZ").tempfile().unwrap();
        file.write_all(b">seq1\nACGT\n").unwrap();

        let mut reader = LineReader::new(open_input(file.path()).unwrap(), 100);
        let lines = collect_lines(&mut reader).unwrap();
        assert_eq!(lines, vec![b">seq1\n".to_vec(), b"ACGT\n".to_vec()]);
    }

    #[test]
    fn test_lines_keep_terminators() {
        let mut reader = LineReader::new(Cursor::new(">a\r\nAC\nGT"), 100);
        let lines = collect_lines(&mut reader).unwrap();
        assert_eq!(lines, vec![b">a\r\n".to_vec(), b"AC\n".to_vec(), b"GT".to_vec()]);
    }

    #[test]
    fn test_line_at_limit_is_accepted() {
        let mut reader = LineReader::new(Cursor::new("ACGT\n"), 5);
        assert_eq!(collect_lines(&mut reader).unwrap().len(), 1);
    }

    #[test]
    fn test_line_over_limit_is_an_error() {
        let mut reader = LineReader::new(Cursor::new("ACGTACGT\n"), 5);
        let err = reader.next_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_trim_line_ending() {
        assert_eq!(trim_line_ending(b">a\n"), b">a");
        assert_eq!(trim_line_ending(b">a\r\n"), b">a");
        assert_eq!(trim_line_ending(b">a"), b">a");
        assert_eq!(trim_line_ending(b"\n"), b"");
    }

    #[test]
    fn test_open_plain_file() {
        let mut file = Builder::new().suffix(".fa").tempfile().unwrap();
        file.write_all(b">seq1\nACGT\n").unwrap();

        let mut reader = LineReader::new(open_input(file.path()).unwrap(), 100);
        let lines = collect_lines(&mut reader).unwrap();
        assert_eq!(lines, vec![b">seq1\n".to_vec(), b"ACGT\n".to_vec()]);
    }

    #[test]
    fn test_open_gzip_file() {
        let mut file = Builder::new().suffix(".fa.gz").tempfile().unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), GzLevel::default());
        encoder.write_all(b">seq1\nACGT\n").unwrap();
        file.write_all(&encoder.finish().unwrap()).unwrap();

        let mut reader = LineReader::new(open_input(file.path()).unwrap(), 100);
        let lines = collect_lines(&mut reader).unwrap();
        assert_eq!(lines, vec![b">seq1\n".to_vec(), b"ACGT\n".to_vec()]);
    }

    #[test]
    fn test_open_missing_file() {
        assert!(open_input("/nonexistent/dir/reads.fa").is_err());
    }
}
