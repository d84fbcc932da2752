//! Desktop client for a laptop recommendation service.
/// HTTP client and wire types for the recommendation service.
pub mod api;
/// Per-user application directories.
pub mod app_dirs;
/// Persistent settings.
pub mod config;
/// Shared egui UI modules.
pub mod egui_app;
/// Display formatting for results.
pub mod format;
/// Tracing setup.
pub mod logging;
