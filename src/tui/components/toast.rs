//! # Toast Component
//!
//! Short notice pinned above the footer, cleared after [`TOAST_DURATION`].

use std::time::{Duration, Instant};

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;

pub const TOAST_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub shown_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }
}

impl Component for Toast {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let width = (self.message.width() as u16 + 4).min(area.width);
        let height = 3.min(area.height);
        let rect = Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + area.height - height,
            width,
            height,
        };
        frame.render_widget(Clear, rect);
        let style = Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD);
        let toast = Paragraph::new(Line::from(self.message.as_str()).centered())
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(toast, rect);
    }
}
