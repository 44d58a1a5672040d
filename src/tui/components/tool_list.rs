//! # ToolList Component
//!
//! Scrollable list of the visible tools, two rows per tool:
//!
//! ```text
//! [✓] ★ 🎨 Painter                [Freemium]  image · art, design
//!         Generates pictures from text prompts
//! ```
//!
//! `ToolList` is a transient wrapper created each frame around the
//! persistent `ToolListState` (cursor + ratatui `ListState`).

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::catalog::{Price, ToolRecord};
use crate::core::favorites::Favorites;
use crate::core::selection::SelectionSet;
use crate::tui::component::Component;
use crate::tui::components::layout::truncate_str;

/// Rows occupied by one tool entry.
const ROWS_PER_ITEM: u16 = 2;

/// Cursor position in the visible list. Lives in `TuiState`.
#[derive(Debug, Default)]
pub struct ToolListState {
    pub selected: usize,
    pub list_state: ListState,
    /// Items that fit on screen, measured on the last render.
    pub page_size: usize,
}

impl ToolListState {
    pub fn new() -> Self {
        Self {
            page_size: 10,
            ..Default::default()
        }
    }

    /// Keep the cursor inside a list of `len` items.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    pub fn reset(&mut self) {
        self.selected = 0;
        *self.list_state.offset_mut() = 0;
    }

    pub fn move_up(&mut self, by: usize) {
        self.selected = self.selected.saturating_sub(by);
    }

    pub fn move_down(&mut self, by: usize, len: usize) {
        if len > 0 {
            self.selected = (self.selected + by).min(len - 1);
        }
    }

    pub fn move_to_end(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }
}

pub struct ToolList<'a> {
    pub records: &'a [&'a ToolRecord],
    pub state: &'a mut ToolListState,
    pub favorites: &'a Favorites,
    pub selection: &'a SelectionSet,
    pub compare_mode: bool,
    /// Catalog fetch has not finished yet.
    pub loading: bool,
}

fn price_style(price: Price) -> Style {
    match price {
        Price::Free => Style::default().fg(Color::Green),
        Price::Freemium => Style::default().fg(Color::Cyan),
        Price::Paid => Style::default().fg(Color::Yellow),
        Price::Unknown => Style::default().fg(Color::DarkGray),
    }
}

impl ToolList<'_> {
    fn item(&self, record: &ToolRecord, width: usize) -> ListItem<'static> {
        let mut spans = Vec::new();
        if self.compare_mode {
            let mark = if self.selection.contains(record.id) { "[✓] " } else { "[ ] " };
            spans.push(Span::styled(mark, Style::default().fg(Color::Magenta)));
        }
        let star = if self.favorites.contains(record.id) { "★ " } else { "☆ " };
        spans.push(Span::styled(star, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!("{} ", record.icon)));
        spans.push(Span::styled(
            record.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("[{}]", record.price.label()),
            price_style(record.price),
        ));
        let tags: Vec<&str> = record.tags.iter().take(2).map(String::as_str).collect();
        let meta = if tags.is_empty() {
            format!("  {}", record.category)
        } else {
            format!("  {} · {}", record.category, tags.join(", "))
        };
        spans.push(Span::styled(meta, Style::default().fg(Color::DarkGray)));

        let description = truncate_str(&record.description, width.saturating_sub(8));
        let second = Line::from(Span::styled(
            format!("        {description}"),
            Style::default().fg(Color::Gray),
        ));

        let item = ListItem::new(vec![Line::from(spans), second]);
        if self.selection.contains(record.id) {
            item.style(Style::default().bg(Color::Rgb(40, 20, 50)))
        } else {
            item
        }
    }
}

impl Component for ToolList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title = if self.compare_mode {
            " Tools (compare mode: Enter/Space to pick) "
        } else {
            " Tools "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(title);

        let inner_height = area.height.saturating_sub(2);
        self.state.page_size = ((inner_height / ROWS_PER_ITEM) as usize).max(1);

        if self.records.is_empty() {
            let message = if self.loading {
                "Loading catalog..."
            } else {
                "No tools match these filters.\nPress r to reset."
            };
            let empty = Paragraph::new(message)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            self.state.clamp(0);
            return;
        }

        self.state.clamp(self.records.len());
        let width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self.records.iter().map(|r| self.item(r, width)).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));

        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}
