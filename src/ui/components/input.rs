//! Search input.
//!
//! gpui has no built-in text field, so the query is kept in a
//! [`QueryBuffer`] that the main window feeds from its key handler, and
//! [`SearchField`] renders the current contents.

use gpui::{
    div, px, ElementId, InteractiveElement, IntoElement, ParentElement, RenderOnce, SharedString,
    Styled,
};

use crate::ui::theme::ThemeColors;

/// A text buffer with cursor position tracking for the search query.
#[derive(Debug, Clone, Default)]
pub struct QueryBuffer {
    text: String,
    /// Cursor position in bytes, always on a char boundary.
    cursor: usize,
}

/// Outcome of feeding one keystroke into a [`QueryBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The text changed; the query must be re-applied.
    Edited,
    /// The cursor moved but the text is unchanged.
    CursorMoved,
    /// The key is not an editing key.
    Ignored,
}

impl QueryBuffer {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current query text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Empties the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Feeds one keystroke into the buffer.
    ///
    /// `key` is the gpui keystroke name ("a", "space", "backspace", ...).
    /// Designed to be called from the parent view's key handler.
    pub fn process_key(&mut self, key: &str, shift: bool, ctrl: bool) -> InputEvent {
        match key {
            "backspace" => {
                let changed = if ctrl {
                    self.delete_word_backward()
                } else {
                    self.backspace()
                };
                if changed {
                    InputEvent::Edited
                } else {
                    InputEvent::Ignored
                }
            }
            "delete" => {
                if self.delete_forward() {
                    InputEvent::Edited
                } else {
                    InputEvent::Ignored
                }
            }
            "left" => {
                self.move_left();
                InputEvent::CursorMoved
            }
            "right" => {
                self.move_right();
                InputEvent::CursorMoved
            }
            "home" => {
                self.cursor = 0;
                InputEvent::CursorMoved
            }
            "end" => {
                self.cursor = self.text.len();
                InputEvent::CursorMoved
            }
            "space" => {
                self.insert_char(' ');
                InputEvent::Edited
            }
            _ => {
                // Single printable characters arrive as their own key name.
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if !c.is_control() => {
                        let c = if shift { c.to_ascii_uppercase() } else { c };
                        self.insert_char(c);
                        InputEvent::Edited
                    }
                    _ => InputEvent::Ignored,
                }
            }
        }
    }

    fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.prev_char_boundary();
        self.text.remove(prev);
        self.cursor = prev;
        true
    }

    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.len() {
            return false;
        }
        self.text.remove(self.cursor);
        true
    }

    fn delete_word_backward(&mut self) -> bool {
        let start = self.cursor;
        while self.char_before().is_some_and(|c| c.is_whitespace()) {
            self.backspace();
        }
        while self.char_before().is_some_and(|c| !c.is_whitespace()) {
            self.backspace();
        }
        self.cursor != start
    }

    fn char_before(&self) -> Option<char> {
        self.text[..self.cursor].chars().last()
    }

    fn prev_char_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.prev_char_boundary();
        }
    }

    fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor += self.text[self.cursor..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
        }
    }
}

/// The rendered search box.
#[derive(IntoElement)]
pub struct SearchField {
    id: ElementId,
    value: SharedString,
    placeholder: SharedString,
}

impl SearchField {
    /// Creates a search field.
    pub fn new(id: impl Into<ElementId>) -> Self {
        Self {
            id: id.into(),
            value: SharedString::default(),
            placeholder: SharedString::from("Search..."),
        }
    }

    /// Sets the current query text.
    pub fn value(mut self, value: impl Into<SharedString>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<SharedString>) -> Self {
        self.placeholder = placeholder.into();
        self
    }
}

impl RenderOnce for SearchField {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::dark();

        let is_empty = self.value.is_empty();
        let display_text = if is_empty { self.placeholder } else { self.value };
        let text_color = if is_empty {
            colors.text_muted
        } else {
            colors.text_primary
        };

        div()
            .id(self.id)
            .h(px(40.0))
            .w_full()
            .px(px(12.0))
            .flex()
            .items_center()
            .gap(px(8.0))
            .bg(colors.surface)
            .border_1()
            .border_color(colors.border)
            .rounded(px(6.0))
            .cursor_text()
            .child(
                div()
                    .text_sm()
                    .text_color(colors.text_muted)
                    .child(SharedString::from("/")),
            )
            .child(div().flex_1().text_color(text_color).child(display_text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_builds_query() {
        let mut buffer = QueryBuffer::new();
        assert_eq!(buffer.process_key("g", false, false), InputEvent::Edited);
        assert_eq!(buffer.process_key("h", false, false), InputEvent::Edited);
        assert_eq!(buffer.process_key("a", false, false), InputEvent::Edited);
        assert_eq!(buffer.text(), "gha");
    }

    #[test]
    fn shift_uppercases() {
        let mut buffer = QueryBuffer::new();
        buffer.process_key("f", true, false);
        assert_eq!(buffer.text(), "F");
    }

    #[test]
    fn space_key_inserts_space() {
        let mut buffer = QueryBuffer::new();
        buffer.process_key("a", false, false);
        buffer.process_key("space", false, false);
        buffer.process_key("b", false, false);
        assert_eq!(buffer.text(), "a b");
    }

    #[test]
    fn backspace_at_start_is_ignored() {
        let mut buffer = QueryBuffer::new();
        assert_eq!(
            buffer.process_key("backspace", false, false),
            InputEvent::Ignored
        );

        buffer.process_key("x", false, false);
        assert_eq!(
            buffer.process_key("backspace", false, false),
            InputEvent::Edited
        );
        assert!(buffer.is_empty());
    }

    #[test]
    fn ctrl_backspace_deletes_word() {
        let mut buffer = QueryBuffer::new();
        for key in ["n", "e", "w", "space", "z", "e", "a"] {
            buffer.process_key(key, false, false);
        }
        buffer.process_key("backspace", false, true);
        assert_eq!(buffer.text(), "new ");
    }

    #[test]
    fn cursor_editing_mid_string() {
        let mut buffer = QueryBuffer::new();
        for key in ["c", "u", "a"] {
            buffer.process_key(key, false, false);
        }
        buffer.process_key("left", false, false);
        buffer.process_key("b", false, false);
        assert_eq!(buffer.text(), "cuba");

        buffer.process_key("home", false, false);
        buffer.process_key("delete", false, false);
        assert_eq!(buffer.text(), "uba");
    }

    #[test]
    fn navigation_keys_are_not_edits() {
        let mut buffer = QueryBuffer::new();
        buffer.process_key("a", false, false);
        assert_eq!(
            buffer.process_key("left", false, false),
            InputEvent::CursorMoved
        );
        assert_eq!(buffer.process_key("enter", false, false), InputEvent::Ignored);
        assert_eq!(buffer.process_key("tab", false, false), InputEvent::Ignored);
    }

    #[test]
    fn clear_resets_text_and_cursor() {
        let mut buffer = QueryBuffer::new();
        buffer.process_key("a", false, false);
        buffer.clear();
        assert!(buffer.is_empty());
        buffer.process_key("b", false, false);
        assert_eq!(buffer.text(), "b");
    }

    #[test]
    fn search_field_builder() {
        let field = SearchField::new("search")
            .value("fra")
            .placeholder("Search countries...");
        assert_eq!(field.value.as_ref(), "fra");
        assert_eq!(field.placeholder.as_ref(), "Search countries...");
    }
}
