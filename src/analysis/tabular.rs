use crate::error::FormatError;
use crate::models::associate::{columns, FieldValue};

/// Header plus the raw string fields of every data row that matched it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// 1-based positions (among non-empty data lines) of rows that were dropped.
    pub skipped_rows: Vec<usize>,
}

/// Split raw report text into header and rows, dropping rows whose field
/// count does not match the header.
pub fn parse_table(text: &str) -> Result<ParsedTable, FormatError> {
    // Spreadsheet exports often lead with a UTF-8 BOM.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let lines: Vec<&str> = text
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(FormatError::TooFewLines { found: lines.len() });
    }

    let header = split_fields(lines[0]);
    let mut rows = Vec::with_capacity(lines.len() - 1);
    let mut skipped_rows = Vec::new();

    for (index, line) in lines[1..].iter().enumerate() {
        let fields = split_fields(line);
        if fields.len() != header.len() {
            log::info!(
                "Skipping row {}: {} field(s), header has {}",
                index + 1,
                fields.len(),
                header.len()
            );
            skipped_rows.push(index + 1);
            continue;
        }
        rows.push(fields);
    }

    if rows.is_empty() {
        return Err(FormatError::NoValidRows {
            skipped: skipped_rows.len(),
        });
    }

    Ok(ParsedTable {
        header,
        rows,
        skipped_rows,
    })
}

/// Comma split with a naive quote toggle. Every `"` flips quoted mode and is
/// dropped, so `""` inside a quoted field is not an escaped quote.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());

    fields
}

pub fn is_numeric_column(header: &str) -> bool {
    columns::NUMERIC_MARKERS
        .iter()
        .any(|marker| header.contains(marker))
}

/// Coerce a field by its header. Numeric columns never fail: anything that
/// does not parse to a finite number becomes 0.
pub fn coerce_field(header: &str, raw: &str) -> FieldValue {
    if is_numeric_column(header) {
        let value = raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        FieldValue::Number(value)
    } else {
        FieldValue::Text(raw.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_plain_fields_and_trims_whitespace() {
        assert_eq!(split_fields(" a , b,c "), vec!["a", "b", "c"]);
        assert_eq!(split_fields("a,,c"), vec!["a", "", "c"]);
        assert_eq!(split_fields("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn keeps_commas_inside_quotes_and_strips_the_quotes() {
        assert_eq!(
            split_fields(r#""Doe, Jane",101,"1,500""#),
            vec!["Doe, Jane", "101", "1,500"]
        );
    }

    #[test]
    fn doubled_quotes_toggle_instead_of_escaping() {
        // `""` closes and reopens the quoted section, so no literal quote survives.
        assert_eq!(
            split_fields(r#""He said ""hi""",2"#),
            vec!["He said hi", "2"]
        );
        assert_eq!(split_fields(r#""x,""y",z"#), vec!["x,y", "z"]);
    }

    #[test]
    fn unterminated_quote_swallows_the_rest_of_the_line() {
        assert_eq!(split_fields(r#""open,a,b"#), vec!["open,a,b"]);
    }

    #[test]
    fn rejects_header_only_input() {
        assert_eq!(
            parse_table("Name,Associate ID\n"),
            Err(FormatError::TooFewLines { found: 1 })
        );
        assert_eq!(parse_table("  \n\n"), Err(FormatError::TooFewLines { found: 0 }));
    }

    #[test]
    fn blank_lines_do_not_count_as_rows() {
        let err = parse_table("Name,Associate ID\n   \n\r\n").unwrap_err();
        assert_eq!(err, FormatError::TooFewLines { found: 1 });
    }

    #[test]
    fn skips_rows_with_mismatched_field_counts() {
        let text = "A,B,C,D,E\n1,2,3\n1,2,3,4,5\n1,2,3,4,5,6\n";
        let table = parse_table(text).expect("one row survives");

        assert_eq!(table.rows.len(), 1);
        assert_eq!(table.skipped_rows, vec![1, 3]);
    }

    #[test]
    fn fails_when_every_row_is_skipped() {
        assert_eq!(
            parse_table("A,B\n1\n1,2,3\n"),
            Err(FormatError::NoValidRows { skipped: 2 })
        );
    }

    #[test]
    fn strips_a_leading_byte_order_mark_from_the_header() {
        let table = parse_table("\u{feff}Name,Associate ID\r\nJane,101\r\n").expect("parse");
        assert_eq!(table.header, vec!["Name", "Associate ID"]);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let table = parse_table("A,B\r\n1,2\r\n").expect("parse");
        assert_eq!(table.header, vec!["A", "B"]);
        assert_eq!(table.rows, vec![vec!["1".to_string(), "2".to_string()]]);
    }

    #[test]
    fn coerces_numeric_columns_by_header_keyword() {
        assert_eq!(coerce_field("Personal Premium MTD", "12.5"), FieldValue::Number(12.5));
        assert_eq!(coerce_field("Depth Level", "2"), FieldValue::Number(2.0));
        assert_eq!(coerce_field("Org Recruits PMTD", ""), FieldValue::Number(0.0));
        assert_eq!(coerce_field("Total Premium MTD", "n/a"), FieldValue::Number(0.0));
        assert_eq!(coerce_field("Level", "NaN"), FieldValue::Number(0.0));
        assert_eq!(coerce_field("Level", "inf"), FieldValue::Number(0.0));
        assert_eq!(
            coerce_field("Name", "Jane"),
            FieldValue::Text("Jane".to_string())
        );
    }
}
