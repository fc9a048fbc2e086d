//! Format routing: map a filename's extension to an extractor.
//!
//! Routing is extension-driven only — no magic-byte sniffing — so the decision
//! is a pure function of the filename and stays consistent with what the
//! upload UI tells the user. A `.doc` upload is rejected before its bytes are
//! ever inspected; an unrecognised extension gets a best-effort plain-text
//! decode before the pipeline gives up.

/// Which extractor handles a given upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `txt`, `md`, or the generic `text/plain` tag.
    PlainText,
    /// `pdf`.
    Pdf,
    /// `docx`.
    WordProcessor,
    /// `xlsx` or `xls`.
    Spreadsheet,
    /// `doc` — always rejected, never parsed.
    LegacyDoc,
    /// Anything else: best-effort plain-text fallback.
    Unknown { extension: String },
}

impl DocumentFormat {
    /// Route a filename to a format. Matching is case-insensitive.
    pub fn from_filename(filename: &str) -> DocumentFormat {
        let extension = extension_of(filename);
        match extension.as_str() {
            "txt" | "md" | "text/plain" => DocumentFormat::PlainText,
            "pdf" => DocumentFormat::Pdf,
            "docx" => DocumentFormat::WordProcessor,
            "xlsx" | "xls" => DocumentFormat::Spreadsheet,
            "doc" => DocumentFormat::LegacyDoc,
            _ => DocumentFormat::Unknown { extension },
        }
    }
}

/// Lower-cased extension (text after the last `.`), or the whole name when
/// there is no dot — mirrors how the upload layer labels plain-text blobs
/// with a bare `text/plain` tag instead of a filename.
fn extension_of(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or(filename)
        .trim()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_supported_extensions() {
        assert_eq!(
            DocumentFormat::from_filename("notes.txt"),
            DocumentFormat::PlainText
        );
        assert_eq!(
            DocumentFormat::from_filename("README.md"),
            DocumentFormat::PlainText
        );
        assert_eq!(
            DocumentFormat::from_filename("report.pdf"),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_filename("letter.docx"),
            DocumentFormat::WordProcessor
        );
        assert_eq!(
            DocumentFormat::from_filename("ledger.xlsx"),
            DocumentFormat::Spreadsheet
        );
        assert_eq!(
            DocumentFormat::from_filename("old-ledger.xls"),
            DocumentFormat::Spreadsheet
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            DocumentFormat::from_filename("REPORT.PDF"),
            DocumentFormat::Pdf
        );
        assert_eq!(
            DocumentFormat::from_filename("Letter.DocX"),
            DocumentFormat::WordProcessor
        );
    }

    #[test]
    fn doc_is_legacy_regardless_of_case() {
        assert_eq!(
            DocumentFormat::from_filename("memo.DOC"),
            DocumentFormat::LegacyDoc
        );
    }

    #[test]
    fn plain_text_tag_routes_like_txt() {
        assert_eq!(
            DocumentFormat::from_filename("text/plain"),
            DocumentFormat::PlainText
        );
    }

    #[test]
    fn unknown_extension_is_preserved() {
        assert_eq!(
            DocumentFormat::from_filename("data.csv"),
            DocumentFormat::Unknown {
                extension: "csv".into()
            }
        );
    }

    #[test]
    fn extensionless_name_is_unknown() {
        assert_eq!(
            DocumentFormat::from_filename("Makefile"),
            DocumentFormat::Unknown {
                extension: "makefile".into()
            }
        );
    }
}
