//! Sign-up form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, FormState};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_card;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the registration card
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::SignUp(form) = &app.state.form else {
        return;
    };

    let height = 2 + 1 + 4 * FIELD_HEIGHT + BUTTON_HEIGHT + 1;
    let card = centered_card(area, height);

    let block = Block::default()
        .title(" SIGN UP ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(FIELD_HEIGHT), // First name
            Constraint::Length(FIELD_HEIGHT), // Last name
            Constraint::Length(FIELD_HEIGHT), // Email
            Constraint::Length(FIELD_HEIGHT), // Password
            Constraint::Length(BUTTON_HEIGHT),
            Constraint::Length(1), // Help text
        ])
        .split(inner);

    let description = Paragraph::new(Line::from(Span::styled(
        "Enter your details below to register",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(description, chunks[0]);

    draw_field(frame, chunks[1], &form.first_name, form.active_field_index == 0);
    draw_field(frame, chunks[2], &form.last_name, form.active_field_index == 1);
    draw_field(frame, chunks[3], &form.email, form.active_field_index == 2);
    draw_field(frame, chunks[4], &form.password, form.active_field_index == 3);

    render_button(frame, chunks[5], "SIGN UP", form.is_buttons_row_active());

    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": back to sign in"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[6]);
}
