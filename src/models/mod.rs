pub mod record;
pub mod resource;
pub mod response;

// Re-export commonly used types
pub use record::{display_value, is_truthy, Record};
pub use resource::{Endpoint, Resource};
pub use response::{normalize, RawResponse};
