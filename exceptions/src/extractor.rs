use regex::CaptureMatches;

use crate::types::{ErrorKind, ErrorRow};
use crate::utils::{normalize_name, normalize_reason, ERROR_ROW_PATTERN, TABLE_ROW_PATTERN};

const CELL_END: &str = "</td>";

/// Single pass over the `<tr>` rows of an HTML error table.
///
/// Rows that are not exactly `name | reason | status | Client/Server` are
/// skipped and counted, never reported as errors.
pub struct RowExtractor<'a> {
    rows: CaptureMatches<'static, 'a>,
    skipped: usize,
}

impl<'a> RowExtractor<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            rows: TABLE_ROW_PATTERN.captures_iter(text),
            skipped: 0,
        }
    }

    /// Number of `<tr>` rows that did not have the four-column shape so far
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    fn parse_row(body: &str) -> Option<ErrorRow> {
        let captures = ERROR_ROW_PATTERN.captures(body)?;
        let name = captures.get(1)?.as_str();
        let reason = captures.get(2)?.as_str();
        // the lazy groups stretch over cell boundaries in wider rows
        if name.contains(CELL_END) || reason.contains(CELL_END) {
            return None;
        }
        let kind = ErrorKind::from_label(captures.get(4)?.as_str())?;

        Some(ErrorRow {
            name: normalize_name(name),
            reason: normalize_reason(reason),
            status_code: captures.get(3)?.as_str().to_string(),
            kind,
        })
    }
}

impl Iterator for RowExtractor<'_> {
    type Item = ErrorRow;

    fn next(&mut self) -> Option<ErrorRow> {
        for captures in self.rows.by_ref() {
            let Some(body) = captures.get(1) else {
                continue;
            };
            match Self::parse_row(body.as_str()) {
                Some(row) => return Some(row),
                None => self.skipped += 1,
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_single_row() {
        let html = "<tr><td>NoSuchBucket</td><td>The bucket does not exist.</td><td>404</td><td>Client</td></tr>";
        let rows: Vec<_> = RowExtractor::new(html).collect();

        assert_eq!(
            rows,
            vec![ErrorRow {
                name: "NoSuchBucket".to_string(),
                reason: "The bucket does not exist.".to_string(),
                status_code: "404".to_string(),
                kind: ErrorKind::Client,
            }]
        );
    }

    #[test]
    fn test_rows_in_input_order() {
        let html = "<table>\n\
            <tr><td>B</td><td>b</td><td>500</td><td>Server</td></tr>\n\
            <tr><td>A</td><td>a</td><td>404</td><td>Client</td></tr>\n\
            </table>";
        let names: Vec<_> = RowExtractor::new(html).map(|row| row.name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn test_reason_spans_lines_and_markup() {
        let html = "<tr><td>\n  AccessDenied\n</td><td>Access\n   <b>Denied</b></td><td>403 Forbidden</td><td>Client</td></tr>";
        let row = RowExtractor::new(html).next().expect("row should match");

        assert_eq!(row.name, "AccessDenied");
        assert_eq!(row.reason, "Access <b>Denied</b>");
        assert_eq!(row.status_code, "403");
    }

    #[test]
    fn test_empty_status_code() {
        let html = "<tr><td>InternalError</td><td>Retry.</td><td>N/A</td><td>Server</td></tr>";
        let row = RowExtractor::new(html).next().expect("row should match");

        assert!(!row.has_status_code());
        assert_eq!(row.kind, ErrorKind::Server);
    }

    #[test]
    fn test_three_column_row_is_skipped() {
        let html = "<tr><td>Broken</td><td>no kind</td><td>400</td></tr>\
            <tr><td>Good</td><td>fine</td><td>500</td><td>Server</td></tr>";
        let mut extractor = RowExtractor::new(html);

        let row = extractor.next().expect("second row should match");
        assert_eq!(row.name, "Good");
        assert_eq!(row.reason, "fine");
        assert!(extractor.next().is_none());
        assert_eq!(extractor.skipped(), 1);
    }

    #[test]
    fn test_five_column_row_is_skipped() {
        let html = "<tr><td>A</td><td>B</td><td>C</td><td>400</td><td>Client</td></tr>\
            <tr><td>Good</td><td>fine</td><td>500</td><td>Server</td></tr>";
        let mut extractor = RowExtractor::new(html);

        let row = extractor.next().expect("four-column row should match");
        assert_eq!(row.name, "Good");
        assert!(extractor.next().is_none());
        assert_eq!(extractor.skipped(), 1);
    }

    #[test]
    fn test_extra_leading_cell_is_skipped() {
        let html = "<tr><td>X</td><td>A</td><td>B</td><td>400</td><td>Client</td></tr>";
        let rows: Vec<_> = RowExtractor::new(html).collect();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_unknown_kind_is_skipped() {
        let html = "<tr><td>Odd</td><td>x</td><td>400</td><td>Nobody</td></tr>";
        let mut extractor = RowExtractor::new(html);

        assert!(extractor.next().is_none());
        assert_eq!(extractor.skipped(), 1);
    }

    #[test]
    fn test_header_rows_ignored() {
        let html = "<tr><th>Error Code</th><th>Description</th></tr>";
        assert_eq!(RowExtractor::new(html).count(), 0);
    }
}
