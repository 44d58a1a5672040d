//! # Favorites Panel
//!
//! Overlay listing favorited tools. Opened with `F`, dismissed with Esc.
//! Enter opens the tool's details, `f` unfavorites it.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FavoritesPanelState` lives in `TuiState`
//! - `FavoritesPanel` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Padding, Paragraph};

use crate::catalog::ToolRecord;
use crate::tui::component::Component;
use crate::tui::components::layout::{centered_rect, truncate_str};
use crate::tui::event::TuiEvent;

/// Persistent state for the favorites overlay.
#[derive(Debug, Default)]
pub struct FavoritesPanelState {
    pub selected: usize,
    pub list_state: ListState,
}

/// Events emitted by the favorites panel.
#[derive(Debug, PartialEq, Eq)]
pub enum FavoritesEvent {
    Open(u32),
    Unfavorite(u32),
    Dismiss,
}

impl FavoritesPanelState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a key event against the current favorites (`ids`, display order).
    pub fn handle_event(&mut self, event: &TuiEvent, ids: &[u32]) -> Option<FavoritesEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') | TuiEvent::InputChar('F') => {
                Some(FavoritesEvent::Dismiss)
            }
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.selected = self.selected.saturating_sub(1);
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                if !ids.is_empty() {
                    self.selected = (self.selected + 1).min(ids.len() - 1);
                }
                None
            }
            TuiEvent::Submit => ids.get(self.selected).map(|&id| FavoritesEvent::Open(id)),
            TuiEvent::InputChar('f') | TuiEvent::InputChar('d') => {
                ids.get(self.selected).map(|&id| FavoritesEvent::Unfavorite(id))
            }
            _ => None,
        }
    }

    fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }
}

/// Transient render wrapper for the favorites overlay.
pub struct FavoritesPanel<'a> {
    pub state: &'a mut FavoritesPanelState,
    pub records: &'a [&'a ToolRecord],
}

impl Component for FavoritesPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 60, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" ★ Favorites ({}) ", self.records.len()))
            .title_bottom(Line::from(" Enter Open  f Remove  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        self.state.clamp(self.records.len());

        if self.records.is_empty() {
            let empty = Paragraph::new("No favorites yet.\nPress f on a tool to add it.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, overlay);
            return;
        }

        let inner_width = overlay.width.saturating_sub(4) as usize; // borders + padding
        let items: Vec<ListItem> = self
            .records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(Color::Gray)
                };
                let label = truncate_str(
                    &format!("{} {}  ({})", record.icon, record.name, record.category),
                    inner_width,
                );
                ListItem::new(Line::from(Span::styled(label, style)))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, overlay, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Price;
    use crate::test_support::record;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_navigation_and_open() {
        let mut state = FavoritesPanelState::new();
        let ids = [3, 8, 9];
        assert_eq!(state.handle_event(&TuiEvent::CursorDown, &ids), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown, &ids), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown, &ids), None);
        assert_eq!(state.selected, 2);
        assert_eq!(
            state.handle_event(&TuiEvent::Submit, &ids),
            Some(FavoritesEvent::Open(9))
        );
        assert_eq!(
            state.handle_event(&TuiEvent::InputChar('f'), &ids),
            Some(FavoritesEvent::Unfavorite(9))
        );
    }

    #[test]
    fn test_empty_list_events() {
        let mut state = FavoritesPanelState::new();
        assert_eq!(state.handle_event(&TuiEvent::Submit, &[]), None);
        assert_eq!(state.handle_event(&TuiEvent::CursorDown, &[]), None);
        assert_eq!(
            state.handle_event(&TuiEvent::Escape, &[]),
            Some(FavoritesEvent::Dismiss)
        );
    }

    #[test]
    fn test_render_empty_and_filled() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = FavoritesPanelState::new();

        terminal
            .draw(|f| {
                FavoritesPanel {
                    state: &mut state,
                    records: &[],
                }
                .render(f, f.area())
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("No favorites yet."));

        let a = record(1, "Alpha", Price::Free, false);
        let records = [&a];
        terminal
            .draw(|f| {
                FavoritesPanel {
                    state: &mut state,
                    records: &records,
                }
                .render(f, f.area())
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Alpha"));
    }
}
