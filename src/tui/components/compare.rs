//! # Compare Overlay
//!
//! Side-by-side columns for the picked tools. Each column shows the
//! company, the first two pricing plans, and up to three pros and cons.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::catalog::ToolRecord;
use crate::tui::component::Component;
use crate::tui::components::layout::centered_rect;
use crate::tui::event::TuiEvent;

const PLANS_SHOWN: usize = 2;
const POINTS_SHOWN: usize = 3;

/// Events emitted by the compare overlay.
#[derive(Debug, PartialEq, Eq)]
pub enum CompareEvent {
    Clear,
    Dismiss,
}

pub fn handle_event(event: &TuiEvent) -> Option<CompareEvent> {
    match event {
        TuiEvent::Escape | TuiEvent::InputChar('q') | TuiEvent::InputChar('v') => {
            Some(CompareEvent::Dismiss)
        }
        TuiEvent::InputChar('x') => Some(CompareEvent::Clear),
        _ => None,
    }
}

fn section(lines: &mut Vec<Line<'static>>, title: &str, points: &[String], marker: &str) {
    if points.is_empty() {
        return;
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for point in points.iter().take(POINTS_SHOWN) {
        lines.push(Line::from(format!("{marker} {point}")));
    }
}

/// Content lines for one comparison column.
pub fn column_lines(record: &ToolRecord) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", record.icon, record.name),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            record.company.clone().unwrap_or_else(|| "Unknown company".to_string()),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    if let Some(plans) = record.pricing_details.as_deref().filter(|p| !p.is_empty()) {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Pricing",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )));
        for (plan, detail) in plans.iter().take(PLANS_SHOWN) {
            lines.push(Line::from(format!("• {plan}: {detail}")));
        }
    }
    section(&mut lines, "Pros", record.pros.as_deref().unwrap_or_default(), "+");
    section(&mut lines, "Cons", record.cons.as_deref().unwrap_or_default(), "-");
    lines
}

pub struct Compare<'a> {
    pub records: &'a [&'a ToolRecord],
}

impl Component for Compare<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(90, 80, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(format!(" Compare ({}) ", self.records.len()))
            .title_bottom(Line::from(" x Clear  Esc Close ").centered())
            .padding(Padding::horizontal(1));
        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        if self.records.is_empty() {
            frame.render_widget(
                Paragraph::new("Nothing picked.").style(Style::default().fg(Color::DarkGray)),
                inner,
            );
            return;
        }

        let constraints = vec![Constraint::Fill(1); self.records.len()];
        let columns = Layout::horizontal(constraints).spacing(1).split(inner);
        for (record, column) in self.records.iter().zip(columns.iter()) {
            let card = Paragraph::new(column_lines(record))
                .wrap(Wrap { trim: true })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::DarkGray)),
                );
            frame.render_widget(card, *column);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Price;
    use crate::test_support::record;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_column_limits_plans_and_points() {
        let mut r = record(1, "Big", Price::Paid, false);
        r.pricing_details = Some(vec![
            ("Basic".into(), "$5".into()),
            ("Pro".into(), "$15".into()),
            ("Team".into(), "$40".into()),
        ]);
        r.pros = Some(vec!["a1".into(), "a2".into(), "a3".into(), "a4".into()]);
        r.cons = Some(vec!["c1".into()]);

        let text = text_of(&column_lines(&r));
        assert!(text.contains("Basic: $5"));
        assert!(text.contains("Pro: $15"));
        assert!(!text.contains("Team"));
        assert!(text.contains("+ a3"));
        assert!(!text.contains("a4"));
        assert!(text.contains("- c1"));
    }

    #[test]
    fn test_column_without_optionals() {
        let r = record(2, "Bare", Price::Free, false);
        let text = text_of(&column_lines(&r));
        assert!(text.contains("Unknown company"));
        assert!(!text.contains("Pricing"));
        assert!(!text.contains("Pros"));
    }

    #[test]
    fn test_renders_one_column_per_record() {
        let a = record(1, "Alpha", Price::Free, false);
        let b = record(2, "Beta", Price::Paid, false);
        let records = [&a, &b];
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| Compare { records: &records }.render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Compare (2)"));
        assert!(text.contains("Alpha"));
        assert!(text.contains("Beta"));
    }

    #[test]
    fn test_events() {
        assert_eq!(handle_event(&TuiEvent::InputChar('x')), Some(CompareEvent::Clear));
        assert_eq!(handle_event(&TuiEvent::Escape), Some(CompareEvent::Dismiss));
        assert_eq!(handle_event(&TuiEvent::CursorDown), None);
    }
}
