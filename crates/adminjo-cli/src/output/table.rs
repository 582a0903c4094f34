//! Aligned text tables for session and catalog listings.
//!
//! Columns follow the sessions screen layout (id, date, time, venue,
//! description, sports, status) with catalog fields after them. Only the id
//! column is right-aligned. The status column shows `unknown` for sessions
//! whose status could not be resolved and is the only colored column.

use std::io::IsTerminal;

use adminjo_core::enums::SessionStatus;
use serde_json::{Map, Value};

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

const COLUMN_ORDER: [&str; 13] = [
    "id",
    "date",
    "time",
    "venue",
    "description",
    "sports",
    "status",
    "name",
    "label",
    "discipline",
    "gender",
    "round",
    "icon",
];

/// Free-text columns, narrowed (widest first) when the table overflows.
const ELASTIC_COLUMNS: [&str; 5] = ["description", "sports", "venue", "label", "name"];
const MIN_ELASTIC_WIDTH: usize = 12;
const GAP: &str = "  ";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableStyle {
    pub max_width: Option<usize>,
    pub color: bool,
}

impl TableStyle {
    /// Style for the current terminal: `--color`, `NO_COLOR` and `COLUMNS`.
    #[must_use]
    pub fn from_flags(flags: &GlobalFlags) -> Self {
        let table = flags.format == OutputFormat::Table;
        let color = match flags.color {
            ColorMode::Always => table,
            ColorMode::Never => false,
            ColorMode::Auto => {
                table
                    && !flags.quiet
                    && std::io::stdout().is_terminal()
                    && std::env::var_os("NO_COLOR").is_none()
            }
        };
        let max_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|value| value.parse::<usize>().ok())
            .filter(|width| *width >= 40);

        Self { max_width, color }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// One row per record, columns in screen order then first-seen order.
    #[must_use]
    pub fn from_records(records: &[&Map<String, Value>]) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for key in records.iter().flat_map(|record| record.keys()) {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
        columns.sort_by_key(|column| {
            COLUMN_ORDER
                .iter()
                .position(|known| *known == column.as_str())
                .unwrap_or(COLUMN_ORDER.len())
        });

        let rows = records
            .iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| cell(column, record.get(column)))
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Two-column `field | value` table for a single response object.
    #[must_use]
    pub fn from_fields(fields: &Map<String, Value>) -> Self {
        Self {
            columns: vec![String::from("field"), String::from("value")],
            rows: fields
                .iter()
                .map(|(key, value)| vec![key.clone(), cell(key, Some(value))])
                .collect(),
        }
    }

    #[must_use]
    pub fn render(&self, style: TableStyle) -> String {
        let widths = self.widths(style.max_width);

        let header = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(column, width)| pad(&truncate(column, *width), *width, false))
            .collect::<Vec<_>>()
            .join(GAP);
        let divider = "-".repeat(header.chars().count());

        let mut lines = vec![header, divider];
        for row in &self.rows {
            let line = self
                .columns
                .iter()
                .zip(&widths)
                .zip(row)
                .map(|((column, width), value)| {
                    let padded = pad(&truncate(value, *width), *width, column == "id");
                    if style.color && column == "status" {
                        paint_status(value, &padded)
                    } else {
                        padded
                    }
                })
                .collect::<Vec<_>>()
                .join(GAP);
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn widths(&self, max_width: Option<usize>) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                self.rows
                    .iter()
                    .map(|row| row[index].chars().count())
                    .fold(column.chars().count(), usize::max)
            })
            .collect();

        let Some(max_width) = max_width else {
            return widths;
        };
        let gaps = GAP.len() * widths.len().saturating_sub(1);
        let mut overflow = (widths.iter().sum::<usize>() + gaps).saturating_sub(max_width);

        while overflow > 0 {
            let widest = self
                .columns
                .iter()
                .enumerate()
                .filter(|(index, column)| {
                    ELASTIC_COLUMNS.contains(&column.as_str())
                        && widths[*index] > MIN_ELASTIC_WIDTH
                })
                .max_by_key(|(index, _)| widths[*index]);
            let Some((index, _)) = widest else {
                break;
            };
            widths[index] -= 1;
            overflow -= 1;
        }
        widths
    }
}

/// Text of one cell. Nested entities show their name or label.
fn cell(column: &str, value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) if column == "status" => String::from("unknown"),
        None | Some(Value::Null) => String::from("-"),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| cell(column, Some(item)))
            .collect::<Vec<_>>()
            .join(", "),
        Some(Value::Object(fields)) => ["name", "label"]
            .iter()
            .find_map(|key| fields.get(*key).and_then(Value::as_str))
            .map_or_else(|| Value::Object(fields.clone()).to_string(), str::to_string),
        Some(other) => other.to_string(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(text: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    if right_align {
        format!("{fill}{text}")
    } else {
        format!("{text}{fill}")
    }
}

fn paint_status(value: &str, padded: &str) -> String {
    let code = match SessionStatus::ALL
        .into_iter()
        .find(|status| status.as_str() == value)
    {
        Some(SessionStatus::Upcoming) => "34",
        Some(SessionStatus::Ongoing) => "32",
        Some(SessionStatus::Completed) => "90",
        None => "33",
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{Map, Value, json};

    use super::{Table, TableStyle};

    fn records(value: &Value) -> Vec<&Map<String, Value>> {
        value
            .as_array()
            .expect("array")
            .iter()
            .filter_map(Value::as_object)
            .collect()
    }

    fn plain() -> TableStyle {
        TableStyle::default()
    }

    #[test]
    fn session_columns_follow_screen_order() {
        let rows = json!([{
            "status": "ongoing",
            "sports": "100m",
            "venue": "Stade de France",
            "id": 4,
            "time": "20:30",
            "date": "2024-07-28",
            "description": "Finale",
        }]);
        let table = Table::from_records(&records(&rows)).render(plain());
        let header: Vec<&str> = table
            .lines()
            .next()
            .expect("header")
            .split_whitespace()
            .collect();
        assert_eq!(
            header,
            vec!["id", "date", "time", "venue", "description", "sports", "status"]
        );
    }

    #[test]
    fn missing_status_reads_unknown() {
        let rows = json!([{"id": 1, "status": null, "venue": null}]);
        let table = Table::from_records(&records(&rows)).render(plain());
        let last = table.lines().last().expect("row");
        assert_eq!(last.split_whitespace().collect::<Vec<_>>(), vec!["1", "-", "unknown"]);
    }

    #[test]
    fn only_ids_are_right_aligned() {
        let rows = json!([
            {"id": 7, "date": "2024-07-28"},
            {"id": 123, "date": "2024-08-01"},
        ]);
        let table = Table::from_records(&records(&rows)).render(plain());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "  7  2024-07-28");
        assert_eq!(lines[3], "123  2024-08-01");
    }

    #[test]
    fn accented_cells_pad_by_characters() {
        let rows = json!([
            {"name": "Athlétisme", "id": 1},
            {"name": "Voile", "id": 2},
        ]);
        let table = Table::from_records(&records(&rows)).render(plain());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], " 1  Athlétisme");
        assert_eq!(lines[3], " 2  Voile");
    }

    #[test]
    fn narrow_terminal_shrinks_free_text_first() {
        let rows = json!([{
            "id": 1,
            "date": "2024-07-28",
            "description": "Finale du 100m nage libre messieurs, session du soir",
        }]);
        let style = TableStyle {
            max_width: Some(40),
            color: false,
        };
        let table = Table::from_records(&records(&rows)).render(style);
        let row = table.lines().last().expect("row");
        assert!(row.chars().count() <= 40);
        assert!(row.contains("2024-07-28"));
        assert!(row.ends_with('…'));
    }

    #[test]
    fn status_cells_are_colored() {
        let rows = json!([{"status": "ongoing"}, {"status": null}]);
        let style = TableStyle {
            max_width: None,
            color: true,
        };
        let table = Table::from_records(&records(&rows)).render(style);
        assert!(table.contains("\u{1b}[32mongoing"));
        assert!(table.contains("\u{1b}[33munknown"));
    }

    #[test]
    fn fields_table_names_nested_entities() {
        let fields = json!({"id": 3, "discipline": {"id": 2, "name": "Escrime"}});
        let table = Table::from_fields(fields.as_object().expect("object")).render(plain());
        assert!(table.contains("Escrime"));
        assert!(!table.contains("\"id\""));
    }
}
