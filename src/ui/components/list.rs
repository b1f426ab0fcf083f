//! List components and scroll bookkeeping.
//!
//! [`ListViewport`] tracks the scroll offset of a fixed-height list and
//! answers the question the infinite-scroll trigger cares about: how far
//! is the viewport's bottom edge from the end of the content.

use gpui::{div, px, IntoElement, ParentElement, RenderOnce, SharedString, Styled};

use crate::ui::theme::ThemeColors;

/// Scroll state for a vertically scrolling list.
#[derive(Debug, Clone, Default)]
pub struct ListViewport {
    /// Current scroll offset in pixels from the top.
    scroll_offset: f32,
    /// Height of the visible area.
    viewport_height: f32,
    /// Total height of the content.
    content_height: f32,
}

impl ListViewport {
    /// Creates a viewport of the given height with no content.
    pub fn new(viewport_height: f32) -> Self {
        Self {
            scroll_offset: 0.0,
            viewport_height,
            content_height: 0.0,
        }
    }

    /// Current scroll offset.
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Updates the visible-area height, clamping the offset.
    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
        self.clamp_offset();
    }

    /// Updates the content height, clamping the offset.
    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
        self.clamp_offset();
    }

    /// Scrolls by a pixel delta (positive scrolls toward the bottom).
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_offset += delta;
        self.clamp_offset();
    }

    /// Jumps back to the top.
    pub fn scroll_to_top(&mut self) {
        self.scroll_offset = 0.0;
    }

    /// Distance in pixels between the viewport's bottom edge and the end
    /// of the content. Negative when the content is shorter than the
    /// viewport.
    pub fn distance_to_bottom(&self) -> f32 {
        self.content_height - (self.scroll_offset + self.viewport_height)
    }

    fn max_scroll(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    fn clamp_offset(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll());
    }
}

/// Centered loading indicator.
#[derive(IntoElement)]
pub struct LoadingState {
    message: SharedString,
}

impl LoadingState {
    /// Creates a loading indicator with the default message.
    pub fn new() -> Self {
        Self {
            message: SharedString::from("Loading..."),
        }
    }

    /// Overrides the message.
    pub fn message(mut self, message: impl Into<SharedString>) -> Self {
        self.message = message.into();
        self
    }
}

impl Default for LoadingState {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderOnce for LoadingState {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::dark();
        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .child(div().text_color(colors.text_muted).child(self.message))
    }
}

/// Centered empty-list placeholder.
#[derive(IntoElement)]
pub struct EmptyState {
    title: SharedString,
    detail: Option<SharedString>,
}

impl EmptyState {
    /// Creates an empty state with a title line.
    pub fn new(title: impl Into<SharedString>) -> Self {
        Self {
            title: title.into(),
            detail: None,
        }
    }

    /// Adds a secondary line under the title.
    pub fn detail(mut self, detail: impl Into<SharedString>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl RenderOnce for EmptyState {
    fn render(self, _window: &mut gpui::Window, _cx: &mut gpui::App) -> impl IntoElement {
        let colors = ThemeColors::dark();
        let mut column = div()
            .flex()
            .flex_col()
            .items_center()
            .gap(px(8.0))
            .child(div().text_color(colors.text_primary).child(self.title));

        if let Some(detail) = self.detail {
            column = column.child(div().text_sm().text_color(colors.text_muted).child(detail));
        }

        div()
            .flex_1()
            .flex()
            .items_center()
            .justify_center()
            .child(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_clamps_to_content() {
        let mut viewport = ListViewport::new(400.0);
        viewport.set_content_height(1000.0);

        viewport.scroll_by(-50.0);
        assert_eq!(viewport.scroll_offset(), 0.0);

        viewport.scroll_by(10_000.0);
        assert_eq!(viewport.scroll_offset(), 600.0);
    }

    #[test]
    fn distance_to_bottom_shrinks_while_scrolling() {
        let mut viewport = ListViewport::new(400.0);
        viewport.set_content_height(1000.0);
        assert_eq!(viewport.distance_to_bottom(), 600.0);

        viewport.scroll_by(550.0);
        assert_eq!(viewport.distance_to_bottom(), 50.0);

        viewport.scroll_by(100.0);
        assert_eq!(viewport.distance_to_bottom(), 0.0);
    }

    #[test]
    fn short_content_has_negative_distance() {
        let mut viewport = ListViewport::new(400.0);
        viewport.set_content_height(120.0);
        assert_eq!(viewport.distance_to_bottom(), -280.0);
        // And no scroll room at all.
        viewport.scroll_by(100.0);
        assert_eq!(viewport.scroll_offset(), 0.0);
    }

    #[test]
    fn growing_content_preserves_offset() {
        let mut viewport = ListViewport::new(400.0);
        viewport.set_content_height(640.0);
        viewport.scroll_by(240.0);
        assert_eq!(viewport.scroll_offset(), 240.0);

        // Another page of results arrives.
        viewport.set_content_height(1280.0);
        assert_eq!(viewport.scroll_offset(), 240.0);
        assert_eq!(viewport.distance_to_bottom(), 640.0);
    }

    #[test]
    fn shrinking_content_pulls_offset_back() {
        let mut viewport = ListViewport::new(400.0);
        viewport.set_content_height(2000.0);
        viewport.scroll_by(1600.0);

        viewport.set_content_height(640.0);
        assert_eq!(viewport.scroll_offset(), 240.0);
    }

    #[test]
    fn scroll_to_top_resets() {
        let mut viewport = ListViewport::new(400.0);
        viewport.set_content_height(1000.0);
        viewport.scroll_by(300.0);
        viewport.scroll_to_top();
        assert_eq!(viewport.scroll_offset(), 0.0);
    }
}
