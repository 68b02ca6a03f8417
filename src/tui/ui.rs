use ratatui::Frame;
use ratatui::layout::{Rect, Size};

use crate::core::config::{Corner, DisplaySettings};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorPanel, Footer, WordCard};

const KEY_HINT: &str = "p speak · q quit";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    let area = frame.area();
    let settings = tui.display;
    let max = Size {
        width: settings.max_width.min(area.width),
        height: area.height,
    };

    match (&app.selection, &app.error) {
        (Some(selection), error) => {
            let footer = match error {
                Some(message) => Footer::error(status_line(message, &app.status_message)),
                None if tui.speech_enabled => Footer::hint(KEY_HINT),
                None => Footer::hint("q quit"),
            };
            let mut card = WordCard::new(
                &selection.entry.term,
                &selection.entry.definition,
                Some(footer),
            );
            let size = card.desired_size(max);
            card.render(frame, anchor(area, size, &settings));
            tui.hitbox.term_area = card.term_area;
        }
        (None, Some(message)) => {
            let mut panel = ErrorPanel::new(message, &app.status_message);
            let size = panel.desired_size(max);
            panel.render(frame, anchor(area, size, &settings));
            tui.hitbox.term_area = None;
        }
        (None, None) => {
            tui.hitbox.term_area = None;
        }
    }
}

fn status_line(error: &str, status: &str) -> String {
    if status.is_empty() {
        error.to_string()
    } else {
        format!("{error} ({status})")
    }
}

/// Place a panel of `size` in the configured corner of `area`, inset by the
/// configured offsets. Offsets shrink when the terminal is too small.
pub fn anchor(area: Rect, size: Size, settings: &DisplaySettings) -> Rect {
    let width = size.width.min(area.width);
    let height = size.height.min(area.height);
    let slack_x = area.width - width;
    let slack_y = area.height - height;
    let off_x = settings.offset_x.min(slack_x);
    let off_y = settings.offset_y.min(slack_y);

    let x = match settings.corner {
        Corner::TopLeft | Corner::BottomLeft => area.x + off_x,
        Corner::TopRight | Corner::BottomRight => area.x + slack_x - off_x,
    };
    let y = match settings.corner {
        Corner::TopLeft | Corner::TopRight => area.y + off_y,
        Corner::BottomLeft | Corner::BottomRight => area.y + slack_y - off_y,
    };
    Rect {
        x,
        y,
        width,
        height,
    }
}
