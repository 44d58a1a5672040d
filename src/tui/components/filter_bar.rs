//! # FilterBar Component
//!
//! Bordered strip showing the active category, price and sort chips plus
//! the search box. When nothing narrows the list, a second line shows the
//! featured (popular) tools.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::catalog::ToolRecord;
use crate::core::filter::FilterState;
use crate::tui::component::Component;
use crate::tui::components::layout::truncate_str;

/// Rows the bar needs: borders plus one or two content lines.
pub fn filter_bar_height(show_featured: bool) -> u16 {
    if show_featured { 4 } else { 3 }
}

pub struct FilterBar<'a> {
    pub filter: &'a FilterState,
    /// Search box has keyboard focus.
    pub searching: bool,
    /// Empty slice hides the featured line.
    pub featured: &'a [&'a ToolRecord],
}

fn chip<'s>(label: &'s str, value: &str, active: bool) -> Vec<Span<'s>> {
    let value_style = if active {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };
    vec![
        Span::styled(label, Style::default().fg(Color::DarkGray)),
        Span::styled(value.to_string(), value_style),
        Span::raw("  "),
    ]
}

impl Component for FilterBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        spans.extend(chip(
            "[c] ",
            self.filter.category.label(),
            self.filter.category != Default::default(),
        ));
        spans.extend(chip(
            "[p] ",
            self.filter.price.label(),
            self.filter.price != Default::default(),
        ));
        spans.extend(chip("[s] ", self.filter.sort.label(), false));

        let search_style = if self.searching {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled("[/] ", Style::default().fg(Color::DarkGray)));
        if self.filter.search.is_empty() && !self.searching {
            spans.push(Span::styled("search...", Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::styled(self.filter.search.clone(), search_style));
        }
        if self.searching {
            spans.push(Span::styled("█", search_style));
        }

        let mut lines = vec![Line::from(spans)];

        if !self.featured.is_empty() {
            let names: Vec<String> = self
                .featured
                .iter()
                .map(|r| format!("{} {}", r.icon, r.name))
                .collect();
            let inner_width = area.width.saturating_sub(2) as usize;
            let text = truncate_str(&format!("Featured: {}", names.join(" · ")), inner_width);
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(Color::Magenta),
            )));
        }

        let border_style = if self.searching {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Filters ");

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
