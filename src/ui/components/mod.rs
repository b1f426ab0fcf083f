//! Reusable UI components.
//!
//! Atomic pieces shared by the views: the search input machinery and
//! list scaffolding. Components are stateless where possible, with
//! styling driven by the theme.

pub mod input;
pub mod list;

pub use input::{InputEvent, QueryBuffer, SearchField};
pub use list::{EmptyState, ListViewport, LoadingState};
