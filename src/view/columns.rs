use serde_json::Value;

use crate::constants::{PLACEHOLDER_GLYPH, TEAM_MARKER};
use crate::models::{display_value, is_truthy, Record};

use super::table::{Cell, Tone};

/// Where a column reads its value from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accessor {
    Field(&'static str),
    /// First truthy field among aliases.
    FirstOf(&'static [&'static str]),
    /// The row's position; the value is not read from the record.
    Position,
}

impl Accessor {
    pub fn read<'a>(&self, record: &'a Record) -> Option<&'a Value> {
        match self {
            Accessor::Field(name) => record.field(name),
            Accessor::FirstOf(names) => record.first_field(names),
            Accessor::Position => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Formatter {
    Text(Tone),
    Badge(Tone),
    /// 1-based row number.
    RowNumber,
    Email,
    TeamBadge,
    Members,
    MemberCount,
    /// Leaderboard placing derived from row position.
    Rank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub accessor: Accessor,
    pub formatter: Formatter,
}

impl Column {
    pub fn new(header: &'static str, accessor: Accessor) -> Self {
        Self {
            header,
            accessor,
            formatter: Formatter::Text(Tone::Default),
        }
    }

    pub fn field(header: &'static str, name: &'static str) -> Self {
        Self::new(header, Accessor::Field(name))
    }

    pub fn row_number() -> Self {
        Self::new("#", Accessor::Position).with_formatter(Formatter::RowNumber)
    }

    pub fn with_formatter(mut self, formatter: Formatter) -> Self {
        self.formatter = formatter;
        self
    }

    pub fn cell(&self, record: &Record, index: usize) -> Cell {
        let value = self.accessor.read(record);
        match self.formatter {
            Formatter::Text(tone) => Cell::styled(value.map(display_value).unwrap_or_default(), tone),
            Formatter::Badge(tone) => match value.filter(|v| !v.is_null()) {
                Some(v) => Cell::badge(display_value(v), tone),
                None => Cell::empty(),
            },
            Formatter::RowNumber => Cell::styled((index + 1).to_string(), Tone::Muted),
            Formatter::Email => Cell::styled(value.map(display_value).unwrap_or_default(), Tone::Link),
            Formatter::TeamBadge => team_badge(value),
            Formatter::Members => Cell::badges(members_of(value), Tone::Info),
            Formatter::MemberCount => Cell::badge(members_of(value).len().to_string(), Tone::Secondary),
            Formatter::Rank => {
                let rank = index + 1;
                Cell::badge(rank_label(rank), rank_tone(rank))
            }
        }
    }
}

/// Sequences are used as-is, delimited strings are split on `,` and
/// trimmed, anything falsy is an empty list.
pub fn members_of(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items.iter().map(display_value).collect(),
        Some(v) if is_truthy(v) => display_value(v)
            .split(',')
            .map(|m| m.trim().to_string())
            .collect(),
        _ => Vec::new(),
    }
}

pub fn is_marker_team(name: &str) -> bool {
    name.to_lowercase().contains(TEAM_MARKER)
}

pub fn team_badge(value: Option<&Value>) -> Cell {
    match value.filter(|v| is_truthy(v)) {
        Some(v) => {
            let name = display_value(v);
            let tone = if is_marker_team(&name) {
                Tone::Marker
            } else {
                Tone::Primary
            };
            Cell::badge(name, tone)
        }
        None => Cell::styled(PLACEHOLDER_GLYPH, Tone::Muted),
    }
}

pub fn rank_label(rank: usize) -> String {
    match rank {
        1 => "🥇 1st".to_string(),
        2 => "🥈 2nd".to_string(),
        3 => "🥉 3rd".to_string(),
        n => format!("{}th", n),
    }
}

pub fn rank_tone(rank: usize) -> Tone {
    match rank {
        1 => Tone::Gold,
        2 => Tone::Silver,
        3 => Tone::Bronze,
        _ => Tone::Default,
    }
}
