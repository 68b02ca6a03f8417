//! # ErrorPanel Component
//!
//! Shown in place of the word card when there is nothing to display yet,
//! so a failed pick reads as a message rather than a crash.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use super::{CHROME_HEIGHT, CHROME_WIDTH, content_width, to_cells, wrap_lines};
use crate::tui::component::Component;

const TITLE: &str = " Word of the Day: error ";

pub struct ErrorPanel {
    pub message: String,
    pub status: String,
}

impl ErrorPanel {
    pub fn new(message: &str, status: &str) -> Self {
        Self {
            message: message.to_string(),
            status: status.to_string(),
        }
    }

    fn wrap(&self, inner_width: usize) -> (Vec<String>, Vec<String>) {
        let status = if self.status.is_empty() {
            Vec::new()
        } else {
            wrap_lines(&self.status, inner_width)
        };
        (wrap_lines(&self.message, inner_width), status)
    }
}

impl Component for ErrorPanel {
    fn desired_size(&self, max: Size) -> Size {
        let inner_max = max.width.saturating_sub(CHROME_WIDTH).max(1) as usize;
        let (message, status) = self.wrap(inner_max);
        let extra = if status.is_empty() { 0 } else { status.len() + 1 };

        let width = to_cells(content_width(message.iter().chain(&status)))
            .saturating_add(CHROME_WIDTH)
            .max(TITLE.len() as u16 + 2)
            .min(max.width);
        let height = to_cells(message.len() + extra)
            .saturating_add(CHROME_HEIGHT)
            .min(max.height);
        Size { width, height }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(CHROME_WIDTH).max(1) as usize;
        let (message, status) = self.wrap(inner_width);

        let mut lines: Vec<Line> = message.into_iter().map(Line::raw).collect();
        if !status.is_empty() {
            lines.push(Line::default());
            lines.extend(
                status
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::DarkGray)))),
            );
        }

        let block = Block::bordered()
            .title(TITLE)
            .border_style(Style::default().fg(Color::Red))
            .title_style(Style::default().fg(Color::Red))
            .padding(Padding::horizontal(1));

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
