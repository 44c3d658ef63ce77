//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (main_area, status_area) = layout::split_screen(area);

    // Draw the current screen's card
    match app.state.current_view {
        View::SignIn => forms::draw_sign_in(frame, main_area, app),
        View::SignUp => forms::draw_sign_up(frame, main_area, app),
        View::ForgotPassword => forms::draw_forgot_password(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, status_area, app);

    // Notices are modal and render above everything
    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}
