pub mod table;
pub mod theme;
pub mod utils;

pub use table::{format_records_json, format_table, format_view, print_view};
pub use utils::{display_width, padding};
