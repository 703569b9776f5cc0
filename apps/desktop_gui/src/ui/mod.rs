//! UI layer for the advisor GUI: app shell, workflow panels and colours.

pub mod app;
pub mod panels;
pub mod theme;

pub use app::AdvisorApp;
