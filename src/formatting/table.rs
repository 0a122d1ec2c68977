use colored::*;

use super::theme::{theme_color, ThemedColorize};
use super::utils::{display_width, padding};
use crate::models::Record;
use crate::view::{Cell, Span, TableBody, TableModel, Tone, ViewModel};

fn format_span(span: &Span) -> String {
    if span.badge {
        let text = format!(" {} ", span.text);
        let badge = match span.tone {
            Tone::Gold | Tone::Silver => text.black(),
            _ => text.white(),
        };
        badge.on_color(theme_color(span.tone)).bold().to_string()
    } else {
        span.text.with_tone(span.tone).to_string()
    }
}

fn format_cell(cell: &Cell, width: usize) -> String {
    let body = cell.spans.iter().map(format_span).collect::<Vec<_>>().join(" ");
    format!("{}{}", body, padding(cell.width(), width))
}

/// Lines of the table, header first. The empty state is one row spanning
/// the full width.
pub fn format_table(table: &TableModel) -> Vec<String> {
    let widths = table.column_widths();
    let heading = &table.title;
    let badge = format!(" {} ", table.badge);
    let total = table.total_width().max(display_width(heading) + display_width(&badge) + 2);
    let rule = "─".repeat(total).dimmed().to_string();

    let gap = padding(display_width(heading) + display_width(&badge), total);

    let mut lines = vec![
        format!("{}{}{}", heading.bold(), gap, badge.on_color(theme_color(Tone::Secondary))),
        rule.clone(),
        table
            .header
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{}{}", h.bold(), padding(display_width(h), *w)))
            .collect::<Vec<_>>()
            .join(" "),
        rule.clone(),
    ];

    match &table.body {
        TableBody::Empty(message) => {
            let left = total.saturating_sub(display_width(message)) / 2;
            lines.push(format!("{}{}", " ".repeat(left), message.with_tone(Tone::Muted)));
        }
        TableBody::Rows(rows) => {
            for row in rows {
                let line = row
                    .cells
                    .iter()
                    .zip(&widths)
                    .map(|(cell, w)| format_cell(cell, *w))
                    .collect::<Vec<_>>()
                    .join(" ");
                lines.push(line.trim_end().to_string());
            }
        }
    }

    lines.push(rule);
    lines
}

pub fn format_view(model: &ViewModel) -> Vec<String> {
    match model {
        ViewModel::Loading(text) => vec![text.dimmed().to_string()],
        ViewModel::Error(message) => vec![format!("{} {}", "Error:".red().bold(), message.red())],
        ViewModel::Table(table) => format_table(table),
    }
}

pub fn print_view(model: &ViewModel) {
    for line in format_view(model) {
        println!("{}", line);
    }
}

pub fn format_records_json(records: &[Record]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
