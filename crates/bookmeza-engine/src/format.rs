//! Per-type value formatting, shared verbatim by on-screen rendering and the
//! export serializer. Only the markup around the text may differ between the
//! two call sites, never the text itself.

use bookmeza_types::{BadgeTone, Cell, Column, ColumnKey, ColumnType, Record, Value, texts};

/// Format a raw value for a semantic column type.
///
/// Dispatch is exhaustive over the type tag; unknown statuses and off-type
/// values fall back to string coercion, never to an error.
pub fn format_value(value: &Value, column_type: ColumnType) -> String {
    match column_type {
        ColumnType::Boolean => match value {
            Value::Bool(true) => texts::YES.to_string(),
            Value::Bool(false) => texts::NO.to_string(),
            other => other.as_text(),
        },
        ColumnType::Currency => match value {
            Value::UInt(amount) => format_currency(*amount),
            Value::Int(amount) if *amount >= 0 => format_currency(*amount as u64),
            other => other.as_text(),
        },
        // Dates are pre-formatted strings fixed at record creation; pass
        // them through rather than re-parsing.
        ColumnType::Date => value.as_text(),
        ColumnType::Number
        | ColumnType::Badge
        | ColumnType::Custom
        | ColumnType::Text
        | ColumnType::Email
        | ColumnType::Phone => value.as_text(),
    }
}

/// Badge color category for a status value. Unrecognized statuses get the
/// neutral tone.
pub fn badge_tone(status: &str) -> BadgeTone {
    match status {
        "Aktif" => BadgeTone::Success,
        "Pasif" => BadgeTone::Danger,
        "Beklemede" => BadgeTone::Warning,
        _ => BadgeTone::Neutral,
    }
}

/// Build the display cell for one record/column pair.
///
/// A custom renderer on the column wins, for display only; otherwise the
/// text comes from [`format_value`] and the type tag adds its visual hints.
pub fn render_cell(record: &Record, column: &Column) -> Cell {
    match column.key {
        ColumnKey::User => {
            if let Some(render) = column.render {
                return render(&Value::Str(record.full_name()), record);
            }
            Cell {
                text: record.full_name(),
                secondary: Some(record.email.clone()),
                tone: None,
                indicator: None,
                avatar: Some(record.avatar.clone()),
            }
        }
        ColumnKey::Field(field) => {
            let value = record.value(field);
            if let Some(render) = column.render {
                return render(&value, record);
            }
            let column_type = column.column_type.unwrap_or(ColumnType::Text);
            let mut cell = Cell::text(format_value(&value, column_type));
            match column_type {
                ColumnType::Badge => cell.tone = Some(badge_tone(&value.as_text())),
                ColumnType::Boolean => {
                    if let Value::Bool(flag) = value {
                        cell.indicator = Some(flag);
                    }
                }
                _ => {}
            }
            cell
        }
        ColumnKey::Actions => Cell::text(""),
    }
}

/// tr-TR digit grouping with the lira sign, e.g. `₺12.500`.
fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    format!("₺{}", grouped)
}
