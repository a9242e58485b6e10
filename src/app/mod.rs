//! Standalone application: [`BrowserApp`] and the [`run_browser`] entry point.

mod browser_app;
mod run;

pub use browser_app::BrowserApp;
pub use run::run_browser;
