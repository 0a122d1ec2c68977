pub mod app;
pub mod event;
pub mod handlers;
pub mod layout;
pub mod ui;

pub use app::DashboardApp;
pub use handlers::run_dashboard;
