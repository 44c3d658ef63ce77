//! Sign-in form rendering (credentials and MFA steps)

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, FormState, SignInStep};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::centered_card;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the sign-in card for the current step
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let FormState::SignIn(form) = &app.state.form else {
        return;
    };

    let visible_fields = (form.field_count() - 1) as u16;
    let height = 2 + 1 + visible_fields * FIELD_HEIGHT + BUTTON_HEIGHT + 1;
    let card = centered_card(area, height);

    let block = Block::default()
        .title(" SIGN IN ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    match form.step {
        SignInStep::Credentials => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Description
                    Constraint::Length(FIELD_HEIGHT), // Email
                    Constraint::Length(FIELD_HEIGHT), // Password
                    Constraint::Length(BUTTON_HEIGHT),
                    Constraint::Length(1), // Help text
                ])
                .split(inner);

            let description = Paragraph::new(Line::from(Span::styled(
                "Enter your details below to login",
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(description, chunks[0]);

            draw_field(frame, chunks[1], &form.email, form.active_field_index == 0);
            draw_field(frame, chunks[2], &form.password, form.active_field_index == 1);

            render_button(
                frame,
                chunks[3],
                form.step.submit_label(),
                form.is_buttons_row_active(),
            );

            draw_help(frame, chunks[4]);
        }
        SignInStep::Mfa => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // Description
                    Constraint::Length(FIELD_HEIGHT), // MFA code
                    Constraint::Length(BUTTON_HEIGHT),
                    Constraint::Length(1), // Help text
                ])
                .split(inner);

            let description = Paragraph::new(Line::from(Span::styled(
                "Enter the 6-digit code from your authenticator",
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(description, chunks[0]);

            draw_field(frame, chunks[1], &form.mfa_code, form.active_field_index == 0);

            render_button(
                frame,
                chunks[2],
                form.step.submit_label(),
                form.is_buttons_row_active(),
            );

            draw_help(frame, chunks[3]);
        }
    }
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(": next field  "),
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(": submit  "),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::raw(": quit"),
    ]))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
