//! Country list view.
//!
//! Renders the visible slice of the filtered dataset as a scrolling
//! column of cards and emits [`ListEvent::LoadMore`] whenever the user
//! scrolls within [`SCROLL_THRESHOLD`] pixels of the bottom. The emit is
//! deliberately unthrottled; the owner's page advance is a no-op once
//! everything is visible.

use gpui::{
    div, img, prelude::FluentBuilder, px, Context, EventEmitter, FontWeight, InteractiveElement,
    IntoElement, ParentElement, Render, ScrollWheelEvent, SharedString, SharedUri,
    StatefulInteractiveElement, Styled, Window,
};

use crate::domain::Country;
use crate::ui::components::{EmptyState, ListViewport, LoadingState};
use crate::ui::theme::ThemeColors;

/// Distance from the bottom, in pixels, at which the next page loads.
pub const SCROLL_THRESHOLD: f32 = 100.0;

/// Fixed height of one country card.
pub const CARD_HEIGHT: f32 = 64.0;

/// Default height of the list's visible area.
const DEFAULT_VIEWPORT_HEIGHT: f32 = 600.0;

/// Events emitted by the country list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListEvent {
    /// The scroll position crossed the load threshold.
    LoadMore,
}

/// Scrolling list of country cards.
pub struct CountryList {
    colors: ThemeColors,
    /// Visible slice of the filtered dataset, in original order.
    visible: Vec<Country>,
    /// Size of the whole filtered dataset.
    total_matches: usize,
    loading: bool,
    viewport: ListViewport,
}

impl EventEmitter<ListEvent> for CountryList {}

impl CountryList {
    /// Creates an empty list in the loading state.
    pub fn new(_cx: &mut Context<Self>) -> Self {
        Self {
            colors: ThemeColors::dark(),
            visible: Vec::new(),
            total_matches: 0,
            loading: true,
            viewport: ListViewport::new(DEFAULT_VIEWPORT_HEIGHT),
        }
    }

    /// Replaces the visible slice and the filtered total.
    pub fn set_visible(&mut self, visible: Vec<Country>, total_matches: usize) {
        self.viewport
            .set_content_height(visible.len() as f32 * CARD_HEIGHT);
        self.visible = visible;
        self.total_matches = total_matches;
    }

    /// Sets the loading state.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Scrolls back to the top, for when the query changes.
    pub fn scroll_to_top(&mut self) {
        self.viewport.scroll_to_top();
    }

    /// Applies a scroll delta and reports whether the load threshold was
    /// crossed. Positive delta scrolls toward the bottom.
    pub fn apply_scroll(&mut self, delta: f32) -> bool {
        self.viewport.scroll_by(delta);
        self.viewport.distance_to_bottom() < SCROLL_THRESHOLD
    }

    fn handle_scroll(&mut self, event: &ScrollWheelEvent, cx: &mut Context<Self>) {
        // Wheel delta is positive when scrolling up; the viewport wants
        // distance toward the bottom.
        let delta = -f32::from(event.delta.pixel_delta(px(CARD_HEIGHT)).y);
        if self.apply_scroll(delta) {
            cx.emit(ListEvent::LoadMore);
        }
        cx.notify();
    }

    fn render_header(&self) -> impl IntoElement {
        let colors = self.colors;
        let summary = if self.loading {
            String::new()
        } else if self.visible.len() < self.total_matches {
            format!("{} of {} countries", self.visible.len(), self.total_matches)
        } else {
            format!("{} countries", self.total_matches)
        };

        div()
            .px(px(16.0))
            .py(px(8.0))
            .border_b_1()
            .border_color(colors.border)
            .child(
                div()
                    .text_sm()
                    .text_color(colors.text_muted)
                    .child(SharedString::from(summary)),
            )
    }

    fn render_card(&self, country: &Country, index: usize) -> impl IntoElement {
        let colors = self.colors;
        // Nameless records are filtered out before they get here; the
        // fallback keeps a malformed dataset from faulting the renderer.
        let name = country.display_name().unwrap_or("Unknown").to_string();
        let region = country.region().to_string();
        let flag_url = country.flag_url().map(|url| url.to_string());

        div()
            .id(SharedString::from(format!("country-{index}")))
            .h(px(CARD_HEIGHT))
            .px(px(16.0))
            .flex()
            .items_center()
            .gap(px(12.0))
            .border_b_1()
            .border_color(colors.border)
            .hover(move |style| style.bg(colors.surface))
            .child(match flag_url {
                Some(url) => img(SharedUri::from(url))
                    .w(px(40.0))
                    .h(px(28.0))
                    .rounded(px(2.0))
                    .into_any_element(),
                None => div()
                    .w(px(40.0))
                    .h(px(28.0))
                    .rounded(px(2.0))
                    .bg(colors.surface_elevated)
                    .into_any_element(),
            })
            .child(
                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .font_weight(FontWeight::SEMIBOLD)
                            .text_color(colors.text_primary)
                            .child(SharedString::from(name)),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(colors.text_secondary)
                            .child(SharedString::from(region)),
                    ),
            )
    }
}

impl Render for CountryList {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let colors = self.colors;
        let scroll_offset = self.viewport.scroll_offset();

        let cards: Vec<_> = self
            .visible
            .iter()
            .enumerate()
            .map(|(index, country)| self.render_card(country, index))
            .collect();

        div()
            .id("country-list")
            .flex_1()
            .flex()
            .flex_col()
            .bg(colors.background)
            .on_scroll_wheel(cx.listener(|this, event: &ScrollWheelEvent, _window, cx| {
                this.handle_scroll(event, cx);
            }))
            .child(self.render_header())
            .child(
                div()
                    .flex_1()
                    .relative()
                    .overflow_hidden()
                    .when(self.loading, |this| this.child(LoadingState::new()))
                    .when(!self.loading && self.visible.is_empty(), |this| {
                        this.child(
                            EmptyState::new("No countries found")
                                .detail("Try a different search"),
                        )
                    })
                    .when(!self.loading && !self.visible.is_empty(), |this| {
                        this.child(
                            div()
                                .absolute()
                                .left_0()
                                .right_0()
                                .top(px(-scroll_offset))
                                .flex()
                                .flex_col()
                                .children(cards),
                        )
                    }),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CountryName;

    fn country(name: &str) -> Country {
        Country {
            name: Some(CountryName {
                common: Some(name.to_string()),
                official: None,
            }),
            flags: None,
            region: Some("Test Region".to_string()),
        }
    }

    fn make_list(count: usize) -> CountryList {
        let mut list = CountryList {
            colors: ThemeColors::dark(),
            visible: Vec::new(),
            total_matches: 0,
            loading: false,
            viewport: ListViewport::new(DEFAULT_VIEWPORT_HEIGHT),
        };
        let visible: Vec<Country> = (0..count).map(|i| country(&format!("C{i}"))).collect();
        list.set_visible(visible, count);
        list
    }

    #[test]
    fn scroll_far_from_bottom_does_not_request_more() {
        // 20 cards = 1280px of content against a 600px viewport.
        let mut list = make_list(20);
        assert!(!list.apply_scroll(100.0));
    }

    #[test]
    fn scroll_near_bottom_requests_more() {
        let mut list = make_list(20);
        // Bottom edge is at 600; content ends at 1280. Crossing within
        // 100px of the end means an offset beyond 580.
        assert!(list.apply_scroll(600.0));
    }

    #[test]
    fn repeated_scrolls_at_bottom_keep_requesting() {
        // Every firing that satisfies the threshold attempts an advance;
        // idempotence lives in the page cursor, not here.
        let mut list = make_list(20);
        assert!(list.apply_scroll(10_000.0));
        assert!(list.apply_scroll(10.0));
        assert!(list.apply_scroll(0.0));
    }

    #[test]
    fn short_list_is_always_past_threshold() {
        let mut list = make_list(3);
        assert!(list.apply_scroll(0.0));
    }

    #[test]
    fn new_results_reset_content_height() {
        let mut list = make_list(20);
        list.apply_scroll(10_000.0);

        list.set_visible(vec![country("France")], 1);
        list.scroll_to_top();
        assert_eq!(list.viewport.scroll_offset(), 0.0);
    }
}
