use crate::formatting::display_width;
use crate::models::{display_value, is_truthy, Record};

use super::ViewConfig;

/// Semantic styling of a span. Each output backend maps tones to its own
/// colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Default,
    Strong,
    Muted,
    Link,
    Primary,
    Secondary,
    Info,
    Success,
    Marker,
    Gold,
    Silver,
    Bronze,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
    pub badge: bool,
}

impl Span {
    /// Badges are drawn with one column of padding on each side.
    pub fn width(&self) -> usize {
        let len = display_width(&self.text);
        if self.badge {
            len + 2
        } else {
            len
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cell {
    pub spans: Vec<Span>,
}

impl Cell {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Tone::Default)
    }

    pub fn styled(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            spans: vec![Span {
                text: text.into(),
                tone,
                badge: false,
            }],
        }
    }

    pub fn badge(text: impl Into<String>, tone: Tone) -> Self {
        Self::badges(std::iter::once(text.into()), tone)
    }

    pub fn badges<I>(texts: I, tone: Tone) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            spans: texts
                .into_iter()
                .map(|text| Span {
                    text,
                    tone,
                    badge: true,
                })
                .collect(),
        }
    }

    pub fn text(&self) -> String {
        self.spans
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn width(&self) -> usize {
        let spans: usize = self.spans.iter().map(Span::width).sum();
        spans + self.spans.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKey {
    Id(String),
    Index(usize),
}

/// First truthy `_id` or `id`, then position. Positions are stable because
/// rows are never inserted, removed or reordered.
pub fn row_key(record: &Record, index: usize) -> RowKey {
    ["_id", "id"]
        .iter()
        .filter_map(|name| record.field(name))
        .find(|value| is_truthy(value))
        .map(|value| RowKey::Id(display_value(value)))
        .unwrap_or(RowKey::Index(index))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: RowKey,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    Rows(Vec<Row>),
    /// Single full-width row shown instead of an empty body.
    Empty(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableModel {
    pub title: String,
    pub header: Vec<String>,
    pub body: TableBody,
    pub badge: String,
}

impl TableModel {
    pub fn rows(&self) -> &[Row] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            TableBody::Empty(_) => &[],
        }
    }

    /// Widest header or cell per column.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| display_width(h)).collect();
        for row in self.rows() {
            for (width, cell) in widths.iter_mut().zip(&row.cells) {
                *width = (*width).max(cell.width());
            }
        }
        widths
    }

    /// Total width of the table with single-space gutters.
    pub fn total_width(&self) -> usize {
        let widths = self.column_widths();
        widths.iter().sum::<usize>() + widths.len().saturating_sub(1)
    }
}

/// What a view shows for its current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewModel {
    Loading(String),
    Error(String),
    Table(TableModel),
}

/// Project records through the configured columns. Pure: nothing is fetched
/// or mutated.
pub fn render_table(records: &[Record], config: &ViewConfig) -> TableModel {
    let header = config.columns.iter().map(|c| c.header.to_string()).collect();
    let badge = format!("{} {}", records.len(), config.badge_noun);

    let body = if records.is_empty() {
        TableBody::Empty(format!("No {} found.", config.empty_noun))
    } else {
        TableBody::Rows(
            records
                .iter()
                .enumerate()
                .map(|(index, record)| Row {
                    key: row_key(record, index),
                    cells: config.columns.iter().map(|c| c.cell(record, index)).collect(),
                })
                .collect(),
        )
    };

    TableModel {
        title: config.heading(),
        header,
        body,
        badge,
    }
}
