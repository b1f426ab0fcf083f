//! Atlas - a keyboard-driven country browser.
//!
//! Fetches the list of independent countries from the REST Countries API
//! once at startup, then lets the user filter by name and scroll through
//! the results ten at a time.

mod app;
mod domain;
mod services;
mod ui;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    app::App::run()
}
