//! PDF header sniffing.
//!
//! Checked before a file is handed to `lopdf`, so that non-PDF input fails
//! fast with [`Error::UnknownFormat`] instead of a parser error.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";

/// Header information read from the first bytes of a PDF file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfHeader {
    /// PDF version (e.g., "1.7", "2.0")
    pub version: String,
}

impl std::fmt::Display for PdfHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PDF {}", self.version)
    }
}

/// Read and validate the header of a file on disk.
///
/// # Example
/// ```no_run
/// use pecas::detect::read_header;
///
/// let header = read_header("processo.pdf").unwrap();
/// println!("{}", header);
/// ```
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<PdfHeader> {
    let mut file = File::open(path)?;
    let mut buf = [0u8; 16];
    let read = file.read(&mut buf)?;
    parse_header(&buf[..read])
}

/// Validate a PDF header from an in-memory prefix of the file.
pub fn parse_header(data: &[u8]) -> Result<PdfHeader> {
    let rest = data.strip_prefix(PDF_MAGIC).ok_or(Error::UnknownFormat)?;

    match rest {
        [major, b'.', minor, ..] if major.is_ascii_digit() && minor.is_ascii_digit() => {
            Ok(PdfHeader {
                version: format!("{}.{}", *major as char, *minor as char),
            })
        }
        [_, _, _, ..] => Err(Error::UnsupportedVersion(
            String::from_utf8_lossy(&rest[..3]).to_string(),
        )),
        _ => Err(Error::UnknownFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_header() {
        let header = parse_header(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3").unwrap();
        assert_eq!(header.version, "1.7");
        assert_eq!(header.to_string(), "PDF 1.7");
    }

    #[test]
    fn test_parse_pdf_2_0() {
        let header = parse_header(b"%PDF-2.0\n").unwrap();
        assert_eq!(header.version, "2.0");
    }

    #[test]
    fn test_not_a_pdf() {
        assert!(matches!(
            parse_header(b"<!DOCTYPE html>"),
            Err(Error::UnknownFormat)
        ));
        assert!(matches!(parse_header(b"%PDF"), Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_bad_version() {
        assert!(matches!(
            parse_header(b"%PDF-x.y\n"),
            Err(Error::UnsupportedVersion(v)) if v == "x.y"
        ));
    }

    #[test]
    fn test_read_header_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"%PDF-1.4\n%%EOF\n").unwrap();
        assert_eq!(read_header(file.path()).unwrap().version, "1.4");
    }
}
