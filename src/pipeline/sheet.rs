//! Spreadsheet extraction: deterministic textual rendering of a workbook.
//!
//! Sheets are walked in their stored order (never sorted by name) so the same
//! bytes always produce the same text. Each sheet renders as a `Sheet: name`
//! header followed by its rows top-to-bottom, cells joined by `", "` in column
//! order; empty cells render as empty strings rather than being skipped, which
//! keeps column alignment semantics intact for the downstream consumer. A
//! `---` separator closes each sheet.
//!
//! No per-cell type preservation: numbers, dates, and formula results all
//! render as their display string.

use crate::error::ExtractError;
use calamine::{open_workbook_auto_from_rs, Data, Range, Reader};
use std::io::Cursor;

/// Render an entire workbook (XLSX or XLS) as a single text blob.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec())).map_err(|e| {
        ExtractError::CorruptDocument {
            format: "workbook",
            detail: e.to_string(),
        }
    })?;

    let mut out = String::new();
    for (name, range) in workbook.worksheets() {
        out.push_str(&render_sheet(&name, &range));
    }
    Ok(out)
}

/// Render a single sheet. Pure; unit-tested with constructed ranges.
pub(crate) fn render_sheet(name: &str, range: &Range<Data>) -> String {
    let mut out = format!("Sheet: {name}\n\n");
    for row in range.rows() {
        let cells: Vec<String> = row.iter().map(render_cell).collect();
        out.push_str(&cells.join(", "));
        out.push('\n');
    }
    out.push_str("\n---\n\n");
    out
}

fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#ERROR: {e:?}"),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(dt) => dt.clone(),
        Data::DurationIso(d) => d.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range_from_rows(rows: &[&[Data]]) -> Range<Data> {
        let height = rows.len() as u32;
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0) as u32;
        let mut range = Range::new((0, 0), (height - 1, width - 1));
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                range.set_value((r as u32, c as u32), cell.clone());
            }
        }
        range
    }

    #[test]
    fn renders_header_rows_and_separator() {
        let range = range_from_rows(&[
            &[Data::String("x".into()), Data::String("y".into())],
            &[Data::String("1".into()), Data::String("2".into())],
        ]);
        let text = render_sheet("A", &range);
        assert!(text.starts_with("Sheet: A\n\n"));
        assert!(text.contains("x, y\n1, 2\n"));
        assert!(text.ends_with("\n---\n\n"));
    }

    #[test]
    fn empty_cells_render_as_empty_strings() {
        let range = range_from_rows(&[&[
            Data::String("a".into()),
            Data::Empty,
            Data::String("c".into()),
        ]]);
        let text = render_sheet("gaps", &range);
        assert!(text.contains("a, , c\n"), "got: {text}");
    }

    #[test]
    fn numbers_render_as_display_strings() {
        let range = range_from_rows(&[&[Data::Float(3.5), Data::Int(7), Data::Bool(true)]]);
        let text = render_sheet("types", &range);
        assert!(text.contains("3.5, 7, true\n"), "got: {text}");
    }

    #[test]
    fn unreadable_workbook_is_corrupt() {
        let err = extract(b"definitely not a workbook").unwrap_err();
        assert!(matches!(
            err,
            ExtractError::CorruptDocument {
                format: "workbook",
                ..
            }
        ));
    }
}
