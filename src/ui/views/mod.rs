//! Application views.
//!
//! Views are the top-level UI components. The main window owns the
//! application state; the country list renders the visible slice and
//! reports scroll-driven load requests back to it.

mod country_list;
mod main_window;

pub use country_list::{CountryList, ListEvent, CARD_HEIGHT, SCROLL_THRESHOLD};
pub use main_window::MainWindow;
