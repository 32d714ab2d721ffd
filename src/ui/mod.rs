// Module declarations
mod app;
pub mod dashboard;
mod login;
pub mod picker;
pub mod splash;
// Re-exports for external use
pub use app::{App, run};
