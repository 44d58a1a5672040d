//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Busy** (catalog loading, toast on screen): polls every ~100ms so the
//!   load result and toast expiry show up promptly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! ## Catalog Fetch
//!
//! The fetch is the only asynchronous work. It is spawned on the tokio
//! runtime at startup and reports back through an `mpsc` channel as
//! `Action::CatalogLoaded`; until then the catalog is empty.

mod component;
pub mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture};
use crossterm::execute;

use crate::catalog::{load_catalog, source_for};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::components::compare::{self, CompareEvent};
use crate::tui::components::{
    DetailEvent, DetailState, FavoritesEvent, FavoritesPanelState, Toast, ToolListState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Modal input mode: determines how keyboard events are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key commands act on the list.
    Browse,
    /// Typing edits the search text. Enter or Esc returns to Browse.
    Search,
}

/// Overlay drawn over the list (at most one at a time).
pub enum Overlay {
    Detail(DetailState),
    Compare,
    Favorites(FavoritesPanelState),
}

/// TUI-specific presentation state (not part of core browsing logic)
pub struct TuiState {
    pub tool_list: ToolListState,
    pub input_mode: InputMode,
    pub overlay: Option<Overlay>,
    pub toast: Option<Toast>,
    pub featured_count: usize,
}

impl TuiState {
    pub fn new(featured_count: usize) -> Self {
        Self {
            tool_list: ToolListState::new(),
            input_mode: InputMode::Browse,
            overlay: None,
            toast: None,
            featured_count,
        }
    }

    /// Drops an expired toast. Returns true if one was removed.
    pub fn expire_toast(&mut self, now: Instant) -> bool {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
            return true;
        }
        false
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, EnableBracketedPaste)?;
        info!("Terminal modes enabled (mouse, bracketed paste)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, DisableBracketedPaste);
    }
}

/// Carry out an effect returned by `update`. Returns true on quit.
fn apply_effect(tui: &mut TuiState, effect: Effect) -> bool {
    match effect {
        Effect::None => {}
        Effect::Notify(message) => tui.toast = Some(Toast::new(message)),
        Effect::OpenComparison => tui.overlay = Some(Overlay::Compare),
        Effect::CloseComparison => {
            if matches!(tui.overlay, Some(Overlay::Compare)) {
                tui.overlay = None;
            }
        }
        Effect::OpenDetail(id) => tui.overlay = Some(Overlay::Detail(DetailState::new(id))),
        Effect::Quit => return true,
    }
    false
}

fn dispatch(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    let effect = update(app, action);
    apply_effect(tui, effect)
}

/// Id of the tool under the cursor, if any.
fn current_id(app: &App, tui: &TuiState) -> Option<u32> {
    app.visible().get(tui.tool_list.selected).map(|r| r.id)
}

/// Dispatch a filter-changing action and move the cursor back to the top.
fn refilter(app: &mut App, tui: &mut TuiState, action: Action) -> bool {
    let quit = dispatch(app, tui, action);
    tui.tool_list.reset();
    quit
}

/// Route one terminal event. Returns true when the app should quit.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    if event == TuiEvent::ForceQuit {
        return dispatch(app, tui, Action::Quit);
    }
    if event == TuiEvent::Resize {
        return false;
    }

    // Overlays take all input while open
    if let Some(overlay) = tui.overlay.as_mut() {
        match overlay {
            Overlay::Detail(state) => match state.handle_event(&event) {
                Some(DetailEvent::ToggleFavorite(id)) => {
                    return dispatch(app, tui, Action::ToggleFavorite(id));
                }
                Some(DetailEvent::Dismiss) => tui.overlay = None,
                None => {}
            },
            Overlay::Compare => match compare::handle_event(&event) {
                Some(CompareEvent::Clear) => return dispatch(app, tui, Action::ClearComparison),
                Some(CompareEvent::Dismiss) => tui.overlay = None,
                None => {}
            },
            Overlay::Favorites(state) => {
                let ids: Vec<u32> = app.favorite_records().iter().map(|r| r.id).collect();
                match state.handle_event(&event, &ids) {
                    Some(FavoritesEvent::Open(id)) => {
                        tui.overlay = None;
                        return dispatch(app, tui, Action::OpenDetail(id));
                    }
                    Some(FavoritesEvent::Unfavorite(id)) => {
                        return dispatch(app, tui, Action::ToggleFavorite(id));
                    }
                    Some(FavoritesEvent::Dismiss) => tui.overlay = None,
                    None => {}
                }
            }
        }
        return false;
    }

    match tui.input_mode {
        InputMode::Search => {
            let mut text = app.filter.search.clone();
            match event {
                TuiEvent::Submit | TuiEvent::Escape => {
                    tui.input_mode = InputMode::Browse;
                    return false;
                }
                TuiEvent::InputChar(c) => text.push(c),
                TuiEvent::Paste(data) => text.extend(data.chars().filter(|c| !c.is_control())),
                TuiEvent::Backspace => {
                    text.pop();
                }
                _ => return false,
            }
            refilter(app, tui, Action::SetSearch(text))
        }
        InputMode::Browse => handle_browse_event(app, tui, event),
    }
}

fn handle_browse_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> bool {
    let len = app.visible().len();
    match event {
        TuiEvent::InputChar('q') => dispatch(app, tui, Action::Quit),
        TuiEvent::InputChar('/') => {
            tui.input_mode = InputMode::Search;
            false
        }
        TuiEvent::InputChar('c') => {
            let next = app.filter.category.next(&app.catalog.categories());
            refilter(app, tui, Action::SetCategory(next))
        }
        TuiEvent::InputChar('C') => {
            let prev = app.filter.category.prev(&app.catalog.categories());
            refilter(app, tui, Action::SetCategory(prev))
        }
        TuiEvent::InputChar('p') => {
            let next = app.filter.price.next();
            refilter(app, tui, Action::SetPrice(next))
        }
        TuiEvent::InputChar('s') => {
            let next = app.filter.sort.next();
            refilter(app, tui, Action::SetSort(next))
        }
        TuiEvent::InputChar('r') => refilter(app, tui, Action::ResetFilters),
        TuiEvent::InputChar('m') => dispatch(app, tui, Action::ToggleCompareMode),
        TuiEvent::InputChar('x') => dispatch(app, tui, Action::ClearComparison),
        TuiEvent::InputChar('v') => {
            if app.compare_mode && app.selection.ready_to_compare() {
                tui.overlay = Some(Overlay::Compare);
            }
            false
        }
        TuiEvent::InputChar('F') => {
            tui.overlay = Some(Overlay::Favorites(FavoritesPanelState::new()));
            false
        }
        TuiEvent::InputChar('f') => match current_id(app, tui) {
            Some(id) => dispatch(app, tui, Action::ToggleFavorite(id)),
            None => false,
        },
        TuiEvent::InputChar(' ') => match current_id(app, tui) {
            Some(id) => dispatch(app, tui, Action::ToggleSelection(id)),
            None => false,
        },
        TuiEvent::Submit => match current_id(app, tui) {
            Some(id) if app.compare_mode => dispatch(app, tui, Action::ToggleSelection(id)),
            Some(id) => dispatch(app, tui, Action::OpenDetail(id)),
            None => false,
        },
        TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
            tui.tool_list.move_up(1);
            false
        }
        TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
            tui.tool_list.move_down(1, len);
            false
        }
        TuiEvent::PageUp => {
            tui.tool_list.move_up(tui.tool_list.page_size);
            false
        }
        TuiEvent::PageDown => {
            let page = tui.tool_list.page_size;
            tui.tool_list.move_down(page, len);
            false
        }
        TuiEvent::Home | TuiEvent::InputChar('g') => {
            tui.tool_list.selected = 0;
            false
        }
        TuiEvent::End | TuiEvent::InputChar('G') => {
            tui.tool_list.move_to_end(len);
            false
        }
        _ => false,
    }
}

/// Fetch the catalog on the runtime and hand it back as an action.
fn spawn_catalog_fetch(location: String, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        let source = source_for(&location);
        let catalog = load_catalog(source.as_ref()).await;
        if tx.send(Action::CatalogLoaded(catalog)).is_err() {
            log::warn!("Failed to deliver catalog: receiver dropped");
        }
    });
}

pub fn run(config: &ResolvedConfig, mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new(config.featured_count);

    let (tx, rx) = mpsc::channel();
    spawn_catalog_fetch(config.catalog.clone(), tx);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let busy = !app.catalog_loaded || tui.toast.is_some();
        let timeout = if busy {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if handle_event(&mut app, &mut tui, event) {
                should_quit = true;
                break;
            }
        }

        if should_quit {
            break;
        }

        // Catalog fetch result
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if dispatch(&mut app, &mut tui, action) {
                should_quit = true;
            }
        }
        if should_quit {
            break;
        }

        if tui.expire_toast(Instant::now()) {
            needs_redraw = true;
        }
    }

    ratatui::restore();
    info!("Toolshelf exiting");
    Ok(())
}
