use ninja_core::{EntitySchema, Item};
use ninja_render::{Cell, CollectionList};
use serde::Serialize;
use serde_json::Value;

use crate::cli::OutputFormat;

pub mod table;

use table::{TableOptions, render_table};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat, options: TableOptions) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?, options),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format, TableOptions::detect())?;
    println!("{rendered}");
    Ok(())
}

/// Render items of one entity. Tables use the entity's list columns and the
/// same cell text as the admin list page.
pub fn render_items(
    schema: &EntitySchema,
    items: &[Item],
    format: OutputFormat,
    media_base: &str,
    options: TableOptions,
) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&items, format, options);
    }
    if items.is_empty() {
        return Ok(String::from("(no rows)"));
    }

    let list = CollectionList::new(schema, items.to_vec(), "").with_media_base(media_base);
    let columns = list.columns();
    let mut headers = vec!["id"];
    headers.extend(columns.iter().map(|field| field.name.as_str()));

    let rows = list
        .rows()
        .into_iter()
        .map(|row| {
            let mut cells = vec![row.id.unwrap_or_else(|| String::from("-"))];
            cells.extend(row.cells.into_iter().map(cell_text));
            cells
        })
        .collect::<Vec<_>>();

    Ok(render_table(&headers, &rows, options))
}

pub fn output_items(schema: &EntitySchema, items: &[Item], format: OutputFormat, media_base: &str) -> anyhow::Result<()> {
    let rendered = render_items(schema, items, format, media_base, TableOptions::detect())?;
    println!("{rendered}");
    Ok(())
}

fn cell_text(cell: Cell) -> String {
    match cell {
        Cell::Image { src } if src.is_empty() => String::from("-"),
        Cell::Image { src } => src,
        Cell::Badge { on } => Cell::badge_label(on).to_string(),
        Cell::Text { text, .. } => text,
    }
}

fn render_value_table(value: &Value, options: TableOptions) -> anyhow::Result<String> {
    match value {
        Value::Array(items) => Ok(render_array_table(items, options)),
        Value::Object(map) => {
            let mut entries = map.iter().collect::<Vec<_>>();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let rows = entries
                .into_iter()
                .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
                .collect::<Vec<_>>();
            Ok(render_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(render_table(&["value"], &[vec![value_to_cell(scalar)]], options)),
    }
}

fn render_array_table(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items.iter().map(|item| vec![value_to_cell(item)]).collect::<Vec<_>>();
        return render_table(&["value"], &rows, options);
    }

    // Column order follows first appearance, so `id`-first payloads stay readable.
    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_table(&headers, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("null"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use ninja_core::{EntitySchema, FieldSchema, Item};
    use pretty_assertions::assert_eq;
    use serde::Serialize;
    use serde_json::json;

    use super::{TableOptions, render, render_items};
    use crate::cli::OutputFormat;

    #[derive(Serialize)]
    struct Example {
        key: &'static str,
        fields: u32,
    }

    fn faq() -> EntitySchema {
        EntitySchema::new("faq", "FAQ", "faqs")
            .field(FieldSchema::text("question", "Question").required())
            .field(FieldSchema::textarea("answer", "Answer"))
            .field(FieldSchema::active())
    }

    fn faqs() -> Vec<Item> {
        vec![
            Item::try_from(json!({"id": 3, "question": "Socks?", "answer": "a".repeat(80), "active": true}))
                .unwrap(),
        ]
    }

    #[test]
    fn json_render_is_valid_json() {
        let out = render(&Example { key: "faq", fields: 3 }, OutputFormat::Json, TableOptions::plain()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["key"], "faq");
        assert_eq!(parsed["fields"], 3);
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&Example { key: "faq", fields: 3 }, OutputFormat::Raw, TableOptions::plain()).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_object_is_key_value() {
        let out = render(&Example { key: "faq", fields: 3 }, OutputFormat::Table, TableOptions::plain()).unwrap();
        assert!(out.lines().next().is_some_and(|line| line.starts_with("key")));
        assert!(out.contains("fields"));
    }

    #[test]
    fn array_table_keeps_first_seen_column_order() {
        let value = json!([{"key": "faq", "name": "FAQ"}, {"key": "stat_card", "name": "Stat Card", "extra": 1}]);
        let out = render(&value, OutputFormat::Table, TableOptions::plain()).unwrap();
        let header = out.lines().next().unwrap();
        let positions: Vec<usize> = ["key", "name", "extra"].iter().map(|h| header.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn item_table_uses_list_columns_and_badges() {
        let out = render_items(&faq(), &faqs(), OutputFormat::Table, "", TableOptions::plain()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].starts_with("id"));
        assert!(lines[0].contains("question"));
        assert!(lines[2].contains("Socks?"));
        assert!(lines[2].contains(&format!("{}...", "a".repeat(50))));
        assert!(lines[2].ends_with("Active"));
    }

    #[test]
    fn item_json_is_the_raw_payload() {
        let out = render_items(&faq(), &faqs(), OutputFormat::Raw, "", TableOptions::plain()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed[0]["id"], 3);
    }

    #[test]
    fn empty_item_table() {
        let out = render_items(&faq(), &[], OutputFormat::Table, "", TableOptions::plain()).unwrap();
        assert_eq!(out, "(no rows)");
    }
}
