//! Main application window.
//!
//! Owns the browser state and wires the three event sources together:
//! the one-time fetch on construction, query keystrokes, and the list's
//! load-more events. Every state change goes through the same explicit
//! pipeline: update state, then push the freshly derived visible slice
//! into the list view.

use gpui::{
    div, px, AppContext, Context, Entity, FocusHandle, Focusable, FontWeight, InteractiveElement,
    IntoElement,
    KeyDownEvent, ParentElement, Render, SharedString, Styled, Subscription, Task, Window,
};

use crate::app::{BrowserState, ClearSearch};
use crate::services::{self, CountriesApi, CountriesError, RestCountriesClient};
use crate::ui::components::{InputEvent, QueryBuffer, SearchField};
use crate::ui::theme::ThemeColors;
use crate::ui::views::{CountryList, ListEvent};

/// Main window: search field on top, country list below.
pub struct MainWindow {
    colors: ThemeColors,
    focus_handle: FocusHandle,
    state: BrowserState,
    query: QueryBuffer,
    country_list: Entity<CountryList>,
    _subscriptions: Vec<Subscription>,
    /// In-flight fetch. Dropped with the window, which cancels the
    /// pending state update.
    _fetch_task: Option<Task<()>>,
}

impl MainWindow {
    pub fn new(_window: &mut Window, cx: &mut Context<Self>) -> Self {
        let focus_handle = cx.focus_handle();
        let country_list = cx.new(CountryList::new);

        let subscriptions = vec![cx.subscribe(&country_list, Self::handle_list_event)];

        let mut this = Self {
            colors: ThemeColors::dark(),
            focus_handle,
            state: BrowserState::new(),
            query: QueryBuffer::new(),
            country_list,
            _subscriptions: subscriptions,
            _fetch_task: None,
        };

        this.fetch_countries(cx);

        this
    }

    /// Issues the one-time fetch for the full dataset.
    ///
    /// The HTTP future runs on the shared tokio runtime; its join handle
    /// is awaited from a gpui task owned by this view, so tearing the
    /// window down abandons the update rather than touching freed state.
    fn fetch_countries(&mut self, cx: &mut Context<Self>) {
        let client = match RestCountriesClient::new() {
            Ok(client) => client,
            Err(err) => {
                tracing::error!(error = %err, "failed to build countries client");
                self.state.load_failed();
                self.push_visible(cx);
                return;
            }
        };

        let request = services::runtime().spawn(async move { client.fetch_independent().await });

        self._fetch_task = Some(cx.spawn(async move |this, cx| {
            let result = match request.await {
                Ok(result) => result,
                Err(err) => Err(CountriesError::Aborted(err)),
            };

            this.update(cx, |this, cx| {
                match result {
                    Ok(countries) => this.state.set_countries(countries),
                    Err(err) => {
                        // The one recognized failure: log it and show
                        // an empty list. No retry.
                        tracing::error!(error = %err, "failed to fetch countries");
                        this.state.load_failed();
                    }
                }
                this.push_visible(cx);
            })
            .ok();
        }));
    }

    fn handle_list_event(
        &mut self,
        _list: Entity<CountryList>,
        event: &ListEvent,
        cx: &mut Context<Self>,
    ) {
        match event {
            ListEvent::LoadMore => {
                // No-op once the whole filtered set is visible.
                if self.state.advance_page() {
                    self.push_visible(cx);
                }
            }
        }
    }

    fn handle_key_down(
        &mut self,
        event: &KeyDownEvent,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        let keystroke = &event.keystroke;
        if keystroke.modifiers.platform {
            // cmd-combinations belong to actions, not the query.
            return;
        }

        match self.query.process_key(
            &keystroke.key,
            keystroke.modifiers.shift,
            keystroke.modifiers.control,
        ) {
            InputEvent::Edited => self.apply_query(cx),
            InputEvent::CursorMoved => cx.notify(),
            InputEvent::Ignored => {}
        }
    }

    fn handle_clear_search(
        &mut self,
        _: &ClearSearch,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        if self.query.is_empty() {
            return;
        }
        self.query.clear();
        self.apply_query(cx);
    }

    /// Re-derives the filtered set for the current query text. Resets the
    /// page cursor and the scroll position.
    fn apply_query(&mut self, cx: &mut Context<Self>) {
        self.state.set_query(self.query.text());
        self.country_list.update(cx, |list, _| list.scroll_to_top());
        self.push_visible(cx);
    }

    /// Pushes the derived visible slice into the list view.
    fn push_visible(&mut self, cx: &mut Context<Self>) {
        let visible = self.state.visible().to_vec();
        let total = self.state.filtered_len();
        let loading = self.state.is_loading();

        self.country_list.update(cx, |list, cx| {
            list.set_loading(loading);
            list.set_visible(visible, total);
            cx.notify();
        });
        cx.notify();
    }

    fn render_header(&self) -> impl IntoElement {
        let colors = self.colors;
        div()
            .px(px(16.0))
            .py(px(12.0))
            .border_b_1()
            .border_color(colors.border)
            .flex()
            .items_center()
            .gap(px(8.0))
            .child(
                div()
                    .font_weight(FontWeight::SEMIBOLD)
                    .text_color(colors.text_primary)
                    .child(SharedString::from("Countries List")),
            )
    }

    fn render_search(&self) -> impl IntoElement {
        div().px(px(16.0)).py(px(12.0)).child(
            SearchField::new("search")
                .value(self.query.text().to_string())
                .placeholder("Search countries..."),
        )
    }
}

impl Focusable for MainWindow {
    fn focus_handle(&self, _cx: &gpui::App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for MainWindow {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        div()
            .id("main-window")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(Self::handle_key_down))
            .on_action(cx.listener(Self::handle_clear_search))
            .size_full()
            .flex()
            .flex_col()
            .bg(self.colors.background)
            .text_color(self.colors.text_primary)
            .child(self.render_header())
            .child(self.render_search())
            .child(self.country_list.clone())
    }
}
