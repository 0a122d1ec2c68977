//! Column layouts for the five resource screens.

use crate::models::Resource;
use crate::view::{Accessor, Column, Formatter, Tone, ViewConfig};

// The dashboard API and the backend serializers name some fields
// differently, so these columns accept either spelling.
const USER_FIELDS: &[&str] = &["user", "username", "user_email"];
const SCORE_FIELDS: &[&str] = &["score", "total_calories"];

pub fn view_config(resource: Resource) -> ViewConfig {
    match resource {
        Resource::Users => ViewConfig {
            resource,
            icon: "👤",
            loading_noun: "users",
            empty_noun: "users",
            badge_noun: "users",
            columns: vec![
                Column::row_number(),
                Column::field("Username", "username").with_formatter(Formatter::Text(Tone::Strong)),
                Column::field("Email", "email").with_formatter(Formatter::Email),
                Column::field("Team", "team").with_formatter(Formatter::TeamBadge),
            ],
        },
        Resource::Teams => ViewConfig {
            resource,
            icon: "👥",
            loading_noun: "teams",
            empty_noun: "teams",
            badge_noun: "teams",
            columns: vec![
                Column::row_number(),
                Column::field("Team Name", "name").with_formatter(Formatter::Text(Tone::Strong)),
                Column::field("Members", "members").with_formatter(Formatter::Members),
                Column::field("Count", "members").with_formatter(Formatter::MemberCount),
            ],
        },
        Resource::Activities => ViewConfig {
            resource,
            icon: "🏃",
            loading_noun: "activities",
            empty_noun: "activities",
            badge_noun: "records",
            columns: vec![
                Column::row_number(),
                Column::new("User", Accessor::FirstOf(USER_FIELDS)),
                Column::field("Activity Type", "activity_type")
                    .with_formatter(Formatter::Badge(Tone::Primary)),
                Column::field("Duration (min)", "duration"),
                Column::field("Date", "date"),
            ],
        },
        Resource::Leaderboard => ViewConfig {
            resource,
            icon: "🏆",
            loading_noun: "leaderboard",
            empty_noun: "entries",
            badge_noun: "entries",
            columns: vec![
                Column::new("Rank", Accessor::Position).with_formatter(Formatter::Rank),
                Column::new("User", Accessor::FirstOf(USER_FIELDS))
                    .with_formatter(Formatter::Text(Tone::Strong)),
                Column::new("Score", Accessor::FirstOf(SCORE_FIELDS))
                    .with_formatter(Formatter::Badge(Tone::Success)),
            ],
        },
        Resource::Workouts => ViewConfig {
            resource,
            icon: "💪",
            loading_noun: "workouts",
            empty_noun: "workouts",
            badge_noun: "workouts",
            columns: vec![
                Column::row_number(),
                Column::field("Workout Name", "name").with_formatter(Formatter::Text(Tone::Strong)),
                Column::field("Description", "description").with_formatter(Formatter::Text(Tone::Muted)),
            ],
        },
    }
}
