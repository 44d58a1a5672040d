//! # TitleBar Component
//!
//! Top status bar: how many tools are showing, how many are free, compare
//! progress and the current status message.
//!
//! Purely presentational. It receives all data as props and renders a
//! single line:
//!
//! 1. **Compare mode**: `"Toolshelf | 12 of 40 tools | 25 free | Compare 2/3 | …"`
//! 2. **Status message**: `"Toolshelf | 12 of 40 tools | 25 free | Loading..."`
//! 3. **Default**: `"Toolshelf | 12 of 40 tools | 25 free"`

use crate::core::selection::COMPARE_CAPACITY;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    pub visible_count: usize,
    pub total_count: usize,
    pub free_count: usize,
    /// `Some(n)` in compare mode with `n` tools picked.
    pub compare_picked: Option<usize>,
    pub status_message: String,
}

impl TitleBar {
    pub fn text(&self) -> String {
        let mut parts = vec![
            "Toolshelf".to_string(),
            format!("{} of {} tools", self.visible_count, self.total_count),
            format!("{} free", self.free_count),
        ];
        if let Some(picked) = self.compare_picked {
            parts.push(format!("Compare {picked}/{COMPARE_CAPACITY}"));
        }
        if !self.status_message.is_empty() {
            parts.push(self.status_message.clone());
        }
        parts.join(" | ")
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.compare_picked.is_some() {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        frame.render_widget(Line::from(Span::styled(self.text(), style)), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn bar(compare_picked: Option<usize>, status: &str) -> TitleBar {
        TitleBar {
            visible_count: 12,
            total_count: 40,
            free_count: 25,
            compare_picked,
            status_message: status.to_string(),
        }
    }

    #[test]
    fn test_title_default() {
        assert_eq!(bar(None, "").text(), "Toolshelf | 12 of 40 tools | 25 free");
    }

    #[test]
    fn test_title_compare_and_status() {
        assert_eq!(
            bar(Some(2), "Compare mode").text(),
            "Toolshelf | 12 of 40 tools | 25 free | Compare 2/3 | Compare mode"
        );
    }

    #[test]
    fn test_title_renders() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut title_bar = bar(None, "Loading catalog...");

        terminal
            .draw(|f| {
                title_bar.render(f, f.area());
            })
            .unwrap();

        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("Toolshelf"));
        assert!(text.contains("Loading catalog..."));
    }
}
