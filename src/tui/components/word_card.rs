//! # WordCard Component
//!
//! The overlay panel: term, definition and a one-line footer.
//!
//! ```text
//! ┌ Word of the Day ─────────┐
//! │ Petrichor                │   ← bold; clicking here speaks it
//! │                          │
//! │ The pleasant smell that  │   ← wrapped to the panel width
//! │ follows rain             │
//! │                          │
//! │ p speak · q quit         │   ← dim hint, or the last error in red
//! └──────────────────────────┘
//! ```
//!
//! The card measures itself (`desired_size`) with the same wrapping it
//! renders with, so the panel always fits its content exactly.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Padding, Paragraph};

use super::{CHROME_HEIGHT, CHROME_WIDTH, content_width, to_cells, wrap_lines};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const TITLE: &str = " Word of the Day ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footer {
    pub text: String,
    pub is_error: bool,
}

impl Footer {
    pub fn hint(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

pub struct WordCard {
    pub term: String,
    pub definition: String,
    pub footer: Option<Footer>,
    /// Screen rows holding the term, filled in by `render`.
    pub term_area: Option<Rect>,
}

struct Wrapped {
    term: Vec<String>,
    definition: Vec<String>,
    footer: Vec<String>,
}

impl Wrapped {
    fn line_count(&self) -> usize {
        let footer = if self.footer.is_empty() {
            0
        } else {
            self.footer.len() + 1
        };
        self.term.len() + 1 + self.definition.len() + footer
    }

    fn width(&self) -> usize {
        content_width(self.term.iter().chain(&self.definition).chain(&self.footer))
    }
}

impl WordCard {
    pub fn new(term: &str, definition: &str, footer: Option<Footer>) -> Self {
        Self {
            term: term.to_string(),
            definition: definition.to_string(),
            footer,
            term_area: None,
        }
    }

    fn wrap(&self, inner_width: usize) -> Wrapped {
        Wrapped {
            term: wrap_lines(&self.term, inner_width),
            definition: wrap_lines(&self.definition, inner_width),
            footer: self
                .footer
                .as_ref()
                .map(|f| wrap_lines(&f.text, inner_width))
                .unwrap_or_default(),
        }
    }

    fn min_width() -> u16 {
        TITLE.len() as u16 + 2
    }
}

impl Component for WordCard {
    fn desired_size(&self, max: Size) -> Size {
        let inner_max = max.width.saturating_sub(CHROME_WIDTH).max(1) as usize;
        let wrapped = self.wrap(inner_max);

        let width = to_cells(wrapped.width())
            .saturating_add(CHROME_WIDTH)
            .max(Self::min_width())
            .min(max.width);
        let height = to_cells(wrapped.line_count())
            .saturating_add(CHROME_HEIGHT)
            .min(max.height);
        Size { width, height }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(CHROME_WIDTH).max(1) as usize;
        let wrapped = self.wrap(inner_width);

        let term_style = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line> = wrapped
            .term
            .iter()
            .map(|l| Line::from(Span::styled(l.clone(), term_style)))
            .collect();
        lines.push(Line::default());
        lines.extend(wrapped.definition.iter().map(|l| Line::raw(l.clone())));

        if let Some(footer) = &self.footer {
            let style = if footer.is_error {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::default());
            lines.extend(
                wrapped
                    .footer
                    .iter()
                    .map(|l| Line::from(Span::styled(l.clone(), style))),
            );
        }

        let block = Block::bordered()
            .title(TITLE)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        // Term starts just inside the top border and left padding
        let term_rows =
            to_cells(wrapped.term.len()).min(area.height.saturating_sub(CHROME_HEIGHT));
        self.term_area = (term_rows > 0).then(|| Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(CHROME_WIDTH),
            height: term_rows,
        });

        frame.render_widget(Clear, area);
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// What the card asks for when the user interacts with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardEvent {
    Pronounce,
}

/// Remembers where the term was drawn so clicks can be hit-tested between frames.
#[derive(Debug, Default)]
pub struct CardHitbox {
    pub term_area: Option<Rect>,
}

impl EventHandler for CardHitbox {
    type Event = CardEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CardEvent> {
        match event {
            TuiEvent::Pronounce => Some(CardEvent::Pronounce),
            TuiEvent::Click(col, row) => {
                let area = self.term_area?;
                let hit = *col >= area.x
                    && *col < area.x + area.width
                    && *row >= area.y
                    && *row < area.y + area.height;
                hit.then_some(CardEvent::Pronounce)
            }
            _ => None,
        }
    }
}
