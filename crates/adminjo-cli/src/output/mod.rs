use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::{GlobalFlags, OutputFormat};

pub mod table;

use table::{Table, TableStyle};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(
    value: &T,
    format: OutputFormat,
    style: TableStyle,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => Ok(render_table(serde_json::to_value(value)?, style)),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the format selected by `flags`.
pub fn output<T: Serialize>(value: &T, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rendered = render(value, flags.format, TableStyle::from_flags(flags))?;
    println!("{rendered}");
    Ok(())
}

/// Listings (`{ "sessions": [..], "total": n }`) become a row table with the
/// scalar fields as a footer; any other object becomes a field table.
fn render_table(value: Value, style: TableStyle) -> String {
    match value {
        Value::Array(items) => render_rows(&items, style),
        Value::Object(fields) => match split_listing(&fields) {
            Some((items, footer)) => {
                let mut rendered = render_rows(items, style);
                for (key, value) in footer {
                    rendered.push_str(&format!("\n{key}: {value}"));
                }
                rendered
            }
            None => Table::from_fields(&fields).render(style),
        },
        scalar => scalar.to_string(),
    }
}

fn render_rows(items: &[Value], style: TableStyle) -> String {
    let records: Vec<&Map<String, Value>> = items.iter().filter_map(Value::as_object).collect();
    if records.is_empty() {
        return String::from("(no rows)");
    }
    Table::from_records(&records).render(style)
}

fn split_listing(fields: &Map<String, Value>) -> Option<(&[Value], Vec<(&String, &Value)>)> {
    let mut arrays = fields.values().filter_map(Value::as_array);
    let items = arrays.next()?;
    if arrays.next().is_some() {
        return None;
    }
    let footer: Vec<(&String, &Value)> = fields.iter().filter(|(_, v)| !v.is_array()).collect();
    if footer.iter().any(|(_, v)| v.is_object()) {
        return None;
    }
    Some((items.as_slice(), footer))
}
