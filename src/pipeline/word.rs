//! Word-processor extraction: raw text stream of a DOCX package.
//!
//! Walks the document body in reading order and keeps only text content —
//! formatting, embedded images, and drawings are ignored. Table cells are
//! walked too (their paragraphs are part of the raw text stream), including
//! tables nested inside cells. Tabs and explicit breaks inside a run map to
//! `\t` and `\n` so column-ish layouts stay legible.

use crate::error::ExtractError;
use docx_rs::{
    read_docx, DocumentChild, Paragraph, ParagraphChild, RunChild, Table, TableCellContent,
    TableChild, TableRowChild,
};

/// Extract the raw text of a DOCX package.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let docx = read_docx(bytes).map_err(|e| ExtractError::CorruptDocument {
        format: "docx",
        detail: e.to_string(),
    })?;

    let mut parts: Vec<String> = Vec::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(para) => push_paragraph(para, &mut parts),
            DocumentChild::Table(table) => push_table(table, &mut parts),
            _ => {}
        }
    }

    Ok(parts.join("\n"))
}

fn push_paragraph(para: &Paragraph, parts: &mut Vec<String>) {
    let text = paragraph_text(para);
    if !text.trim().is_empty() {
        parts.push(text);
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut out = String::new();
    collect_children(&para.children, &mut out);
    out
}

fn collect_children(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for rc in &run.children {
                    match rc {
                        RunChild::Text(t) => out.push_str(&t.text),
                        RunChild::Tab(_) => out.push('\t'),
                        RunChild::Break(_) => out.push('\n'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => collect_children(&link.children, out),
            _ => {}
        }
    }
}

fn push_table(table: &Table, parts: &mut Vec<String>) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row;
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell;
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(para) => push_paragraph(para, parts),
                    TableCellContent::Table(nested) => push_table(nested, parts),
                    _ => {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Run};
    use std::io::Cursor;

    /// Build a DOCX in memory; docx-rs is both our reader and a convenient
    /// fixture generator.
    fn docx_bytes(mut docx: Docx) -> Vec<u8> {
        let mut cursor = Cursor::new(Vec::new());
        docx.build().pack(&mut cursor).expect("pack docx");
        cursor.into_inner()
    }

    #[test]
    fn extracts_paragraphs_in_order() {
        let bytes = docx_bytes(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("First paragraph.")))
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Second paragraph."))),
        );
        let text = extract(&bytes).unwrap();
        assert_eq!(text, "First paragraph.\nSecond paragraph.");
    }

    #[test]
    fn concatenates_runs_within_a_paragraph() {
        let bytes = docx_bytes(
            Docx::new().add_paragraph(
                Paragraph::new()
                    .add_run(Run::new().add_text("Hello, "))
                    .add_run(Run::new().add_text("world")),
            ),
        );
        assert_eq!(extract(&bytes).unwrap(), "Hello, world");
    }

    #[test]
    fn empty_paragraphs_are_dropped() {
        let bytes = docx_bytes(
            Docx::new()
                .add_paragraph(Paragraph::new())
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("content"))),
        );
        assert_eq!(extract(&bytes).unwrap(), "content");
    }

    #[test]
    fn malformed_package_is_corrupt() {
        let err = extract(b"this is not a zip archive").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::CorruptDocument { format: "docx", .. }
        ));
    }
}
