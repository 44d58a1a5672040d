//! # Detail Overlay
//!
//! Full record view for one tool. Optional sections (company, release
//! date, detailed description, pricing plans, pros, cons, recommended-for)
//! are only shown when the record has them.
//!
//! Content is pre-wrapped with `textwrap` so the scroll view knows its
//! height before rendering.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DetailState` lives in `TuiState`
//! - `Detail` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::catalog::ToolRecord;
use crate::tui::component::Component;
use crate::tui::components::layout::centered_rect;
use crate::tui::event::TuiEvent;

/// Persistent state for the detail overlay.
pub struct DetailState {
    pub id: u32,
    pub scroll: ScrollViewState,
}

/// Events emitted by the detail overlay.
#[derive(Debug, PartialEq, Eq)]
pub enum DetailEvent {
    ToggleFavorite(u32),
    Dismiss,
}

impl DetailState {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            scroll: ScrollViewState::default(),
        }
    }

    pub fn handle_event(&mut self, event: &TuiEvent) -> Option<DetailEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::InputChar('q') => Some(DetailEvent::Dismiss),
            TuiEvent::InputChar('f') => Some(DetailEvent::ToggleFavorite(self.id)),
            TuiEvent::CursorUp | TuiEvent::InputChar('k') => {
                self.scroll.scroll_up();
                None
            }
            TuiEvent::CursorDown | TuiEvent::InputChar('j') => {
                self.scroll.scroll_down();
                None
            }
            TuiEvent::PageUp => {
                self.scroll.scroll_page_up();
                None
            }
            TuiEvent::PageDown => {
                self.scroll.scroll_page_down();
                None
            }
            TuiEvent::Home => {
                self.scroll.scroll_to_top();
                None
            }
            TuiEvent::End => {
                self.scroll.scroll_to_bottom();
                None
            }
            _ => None,
        }
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn wrapped(text: &str, width: usize, indent: &str, style: Style) -> Vec<Line<'static>> {
    let options = textwrap::Options::new(width.max(1))
        .initial_indent(indent)
        .subsequent_indent("  ")
        .break_words(true);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|l| Line::from(Span::styled(l.into_owned(), style)))
        .collect()
}

fn bullet_section(lines: &mut Vec<Line<'static>>, title: &str, items: Option<&[String]>, width: usize) {
    let Some(items) = items.filter(|i| !i.is_empty()) else {
        return;
    };
    lines.push(Line::default());
    lines.push(heading(title));
    for item in items {
        lines.extend(wrapped(item, width, "• ", Style::default()));
    }
}

/// Build the wrapped content lines for `record` at `width` columns.
pub fn detail_lines(record: &ToolRecord, favorited: bool, width: usize) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let mut lines = Vec::new();

    let star = if favorited { "★" } else { "☆" };
    lines.push(Line::from(vec![
        Span::styled(
            format!("{} {}", record.icon, record.name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {star}"), Style::default().fg(Color::Yellow)),
    ]));
    lines.push(Line::from(Span::styled(
        format!(
            "{}  ·  {}  ·  {}",
            record.company.as_deref().unwrap_or("Unknown company"),
            record.release_date.as_deref().unwrap_or("Release date unknown"),
            record.price.description(),
        ),
        dim,
    )));
    lines.push(Line::default());
    lines.extend(wrapped(&record.description, width, "", Style::default()));

    if let Some(detailed) = record.detailed_description.as_deref() {
        lines.push(Line::default());
        lines.push(heading("About"));
        lines.extend(wrapped(detailed, width, "", Style::default()));
    }

    if let Some(plans) = record.pricing_details.as_deref().filter(|p| !p.is_empty()) {
        lines.push(Line::default());
        lines.push(heading("Pricing"));
        for (plan, detail) in plans {
            lines.extend(wrapped(&format!("{plan}: {detail}"), width, "• ", Style::default()));
        }
    }

    bullet_section(&mut lines, "Pros", record.pros.as_deref(), width);
    bullet_section(&mut lines, "Cons", record.cons.as_deref(), width);
    bullet_section(&mut lines, "Recommended for", record.recommended_for.as_deref(), width);

    if !record.tags.is_empty() {
        lines.push(Line::default());
        lines.extend(wrapped(
            &format!("Tags: {}", record.tags.join(", ")),
            width,
            "",
            dim,
        ));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        record.link.clone(),
        Style::default().fg(Color::Blue).add_modifier(Modifier::UNDERLINED),
    )));
    lines
}

/// Transient render wrapper for the detail overlay.
pub struct Detail<'a> {
    pub record: &'a ToolRecord,
    pub favorited: bool,
    pub state: &'a mut DetailState,
}

impl Component for Detail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(80, 80, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", self.record.name))
            .title_bottom(Line::from(" ↑↓ Scroll  f Favorite  Esc Close ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        // One column reserved for the scrollbar
        let content_width = inner.width.saturating_sub(1);
        let lines = detail_lines(self.record, self.favorited, content_width as usize);
        let height = lines.len() as u16;

        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(
            Paragraph::new(lines),
            Rect::new(0, 0, content_width, height),
        );
        frame.render_stateful_widget(scroll_view, inner, &mut self.state.scroll);
    }
}
