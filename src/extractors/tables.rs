// src/extractors/tables.rs

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use serde::{Deserialize, Serialize};

/// A markdown table paired with the nearest preceding heading.
///
/// `headers` holds the header row (may be empty if the table had none);
/// `rows` holds the data rows and never includes the header row. Rows may
/// be shorter than `headers` — the core does not pad them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTable {
    pub title: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

// Per-table scan state while between table_open and table_close.
struct TableState {
    title: String,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    cur_row: Vec<String>,
    in_header: bool,
}

impl TableState {
    fn new(title: String) -> Self {
        Self {
            title,
            headers: Vec::new(),
            rows: Vec::new(),
            cur_row: Vec::new(),
            in_header: false,
        }
    }
}

// An open cell accumulating inline text. `has_content` distinguishes a
// cell that produced inline content from one that produced none at all:
// the latter contributes nothing to the row, not even an empty string,
// which can shift column alignment (see DESIGN.md).
struct CellState {
    text: String,
    has_content: bool,
}

/// Parses all markdown tables out of `markdown`, associating each with
/// the most recent preceding heading (H1..H6, all levels equal).
///
/// One forward pass over the pulldown-cmark event stream; a single
/// `last_heading` accumulator tracks the nearest heading, captured at
/// table-open time. Tables are returned in document order; a document
/// with no tables yields an empty vec.
///
/// Pure function: no I/O, no state, no error surface — pulldown-cmark is
/// permissive and always produces some event stream.
pub fn parse_tables(markdown: &str) -> Vec<ParsedTable> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options);

    let mut tables: Vec<ParsedTable> = Vec::new();
    let mut last_heading = String::new();

    let mut heading_buf: Option<String> = None;
    let mut table: Option<TableState> = None;
    let mut cell: Option<CellState> = None;

    for event in parser {
        match event {
            // Track nearest preceding heading.
            Event::Start(Tag::Heading { .. }) => {
                heading_buf = Some(String::new());
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(buf) = heading_buf.take() {
                    last_heading = buf.trim().to_string();
                }
            }

            // Table boundaries. The title reflects whatever heading most
            // recently preceded this table at open time.
            Event::Start(Tag::Table(_)) => {
                table = Some(TableState::new(last_heading.clone()));
            }
            Event::End(TagEnd::Table) => {
                if let Some(state) = table.take() {
                    tables.push(ParsedTable {
                        title: state.title,
                        headers: state.headers,
                        rows: state.rows,
                    });
                }
            }

            // The header section is a single row delimited by TableHead;
            // only the last header row before it closes survives.
            Event::Start(Tag::TableHead) => {
                if let Some(state) = table.as_mut() {
                    state.in_header = true;
                    state.cur_row.clear();
                }
            }
            Event::End(TagEnd::TableHead) => {
                if let Some(state) = table.as_mut() {
                    state.headers = std::mem::take(&mut state.cur_row);
                    state.in_header = false;
                }
            }

            Event::Start(Tag::TableRow) => {
                if let Some(state) = table.as_mut() {
                    state.cur_row.clear();
                }
            }
            Event::End(TagEnd::TableRow) => {
                if let Some(state) = table.as_mut() {
                    let row = std::mem::take(&mut state.cur_row);
                    if state.in_header {
                        state.headers = row;
                    } else {
                        state.rows.push(row);
                    }
                }
            }

            Event::Start(Tag::TableCell) => {
                cell = Some(CellState {
                    text: String::new(),
                    has_content: false,
                });
            }
            Event::End(TagEnd::TableCell) => {
                if let (Some(done), Some(state)) = (cell.take(), table.as_mut()) {
                    if done.has_content {
                        state.cur_row.push(done.text.trim().to_string());
                    }
                }
            }

            // Inline content routes to the open cell first, then to an
            // open heading; anywhere else it is irrelevant to tables.
            Event::Text(text) | Event::Code(text) => {
                if let Some(open) = cell.as_mut() {
                    open.text.push_str(&text);
                    open.has_content = true;
                } else if let Some(buf) = heading_buf.as_mut() {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(open) = cell.as_mut() {
                    open.text.push(' ');
                } else if let Some(buf) = heading_buf.as_mut() {
                    buf.push(' ');
                }
            }

            _ => {}
        }
    }

    tables
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn table(title: &str, headers: &[&str], rows: &[&[&str]]) -> ParsedTable {
        ParsedTable {
            title: title.to_string(),
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn no_tables_yields_empty() {
        assert!(parse_tables("# Heading\n\nJust a paragraph.\n").is_empty());
        assert!(parse_tables("").is_empty());
    }

    #[test]
    fn two_tables_under_two_headings() {
        let md = "## Title A\n\n| H1 | H2 |\n|---|---|\n| a | b |\n| c | d |\n\n## Title B\n\n| X |\n|---|\n| y |";
        let parsed = parse_tables(md);
        assert_eq!(
            parsed,
            vec![
                table("Title A", &["H1", "H2"], &[&["a", "b"], &["c", "d"]]),
                table("Title B", &["X"], &[&["y"]]),
            ]
        );
    }

    #[test]
    fn table_without_heading_has_empty_title() {
        let md = "| H |\n|---|\n| v |";
        let parsed = parse_tables(md);
        assert_eq!(parsed, vec![table("", &["H"], &[&["v"]])]);
    }

    #[test]
    fn two_tables_share_one_heading() {
        let md = "# Compound 1\n\n| A |\n|---|\n| 1 |\n\nIntervening prose.\n\n| B |\n|---|\n| 2 |";
        let parsed = parse_tables(md);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].title, "Compound 1");
        assert_eq!(parsed[1].title, "Compound 1");
    }

    #[test]
    fn later_heading_replaces_earlier() {
        let md = "# One\n\n## Two\n\n| H |\n|---|\n| v |";
        let parsed = parse_tables(md);
        assert_eq!(parsed[0].title, "Two");
    }

    #[test]
    fn heading_levels_are_equal() {
        let md = "###### Deep\n\n| H |\n|---|\n| v |";
        assert_eq!(parse_tables(md)[0].title, "Deep");
    }

    #[test]
    fn heading_with_inline_formatting() {
        let md = "## **Compound 7a** data\n\n| H |\n|---|\n| v |";
        assert_eq!(parse_tables(md)[0].title, "Compound 7a data");
    }

    #[test]
    fn short_row_is_preserved_unpadded() {
        let md = "| H1 | H2 | H3 |\n|---|---|---|\n| a |\n";
        let parsed = parse_tables(md);
        assert_eq!(parsed[0].headers, vec!["H1", "H2", "H3"]);
        assert_eq!(parsed[0].rows, vec![vec!["a".to_string()]]);
    }

    #[test]
    fn empty_cell_is_dropped() {
        // A content-free cell contributes nothing, shifting later cells
        // left. Compatibility behavior, pinned here on purpose.
        let md = "| H1 | H2 | H3 |\n|---|---|---|\n| a |  | c |\n";
        let parsed = parse_tables(md);
        assert_eq!(parsed[0].rows, vec![vec!["a".to_string(), "c".to_string()]]);
    }

    #[test]
    fn cell_text_is_trimmed() {
        let md = "| H |\n|---|\n|   spaced value   |\n";
        assert_eq!(parse_tables(md)[0].rows, vec![vec!["spaced value".to_string()]]);
    }

    #[test]
    fn inline_code_in_cell_is_kept() {
        let md = "| H |\n|---|\n| `CH3` group |\n";
        assert_eq!(parse_tables(md)[0].rows, vec![vec!["CH3 group".to_string()]]);
    }

    #[test]
    fn tables_come_back_in_document_order() {
        let md = "# First\n\n| A |\n|---|\n| 1 |\n\n# Second\n\n| B |\n|---|\n| 2 |\n\n# Third\n\n| C |\n|---|\n| 3 |";
        let titles: Vec<String> = parse_tables(md).into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn serializes_to_wire_shape() {
        let parsed = parse_tables("## T\n\n| H |\n|---|\n| v |");
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"title": "T", "headers": ["H"], "rows": [["v"]]}])
        );
    }
}
