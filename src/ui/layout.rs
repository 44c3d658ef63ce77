//! Screen chrome: centered card area and status bar

use crate::app::App;
use crate::state::View;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CARD_WIDTH: u16 = 60;

/// Split the screen into the main area and a one-line status bar
pub fn split_screen(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Center a card of the given height in the available area
pub fn centered_card(area: Rect, height: u16) -> Rect {
    let width = CARD_WIDTH.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Draw the status bar: transient feedback, or the screen's key hints
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    if let Some(message) = &app.status_message {
        let status = Paragraph::new(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Green),
        )));
        frame.render_widget(status, area);
        return;
    }

    if !app.config.show_help.unwrap_or(true) {
        return;
    }

    let hint = match app.state.current_view {
        View::SignIn => {
            "Ctrl+F: forgot password  Ctrl+U: sign up  Ctrl+R: show/hide password  Ctrl+C: quit"
        }
        View::SignUp | View::ForgotPassword => {
            "Esc: back to sign in  Ctrl+R: show/hide password  Ctrl+C: quit"
        }
    };
    let status = Paragraph::new(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(status, area);
}
