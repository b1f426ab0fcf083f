//! Application state and lifecycle management.
//!
//! This module contains:
//! - Browser state and the filter/pagination pipeline (state.rs)
//! - Action definitions (inline via gpui::actions!)
//! - Keybinding registration

pub mod state;

pub use state::{BrowserState, PAGE_SIZE};

use anyhow::Result;
use gpui::{actions, AppContext, Application, KeyBinding, WindowOptions};

use crate::ui::MainWindow;

// Define application actions
actions!(atlas, [Quit, ClearSearch]);

/// Main application entry point
pub struct App;

impl App {
    /// Run the application
    pub fn run() -> Result<()> {
        Application::new().run(|cx: &mut gpui::App| {
            Self::register_keybindings(cx);

            cx.on_action(|_: &Quit, cx| cx.quit());

            cx.open_window(WindowOptions::default(), |window, cx| {
                cx.new(|cx| MainWindow::new(window, cx))
            })
            .expect("Failed to open window");
        });

        Ok(())
    }

    /// Register global keybindings
    fn register_keybindings(cx: &mut gpui::App) {
        cx.bind_keys([
            KeyBinding::new("cmd-q", Quit, None),
            KeyBinding::new("escape", ClearSearch, None),
        ]);
    }
}
