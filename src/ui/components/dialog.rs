//! Modal notice dialog

use crate::state::{Notice, NoticeLevel};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 60;

/// Render a notice as a centered overlay until the user dismisses it
pub fn render_notice_dialog(frame: &mut Frame, notice: &Notice) {
    let (title, color) = match notice.level {
        NoticeLevel::Success => ("Success", Color::Green),
        NoticeLevel::Error => ("Error", Color::Red),
    };

    let area = frame.area();
    let padding = 4u16; // 2 chars padding on each side
    let max_line_width = (MAX_WIDTH - padding) as usize;

    // Word-wrap the message
    let wrapped_lines = wrap_text(&notice.message, max_line_width);
    let line_count = wrapped_lines.len();

    let hint_text = "Press Enter or Esc to dismiss";
    let content_width = wrapped_lines
        .iter()
        .map(|l| l.len())
        .max()
        .unwrap_or(0)
        .max(title.len())
        .max(hint_text.len()) as u16;
    let dialog_width = (content_width + padding + 2).min(MAX_WIDTH); // +2 for borders

    // Height: title + blank + message lines + blank + hint + borders
    let dialog_height = (2 + line_count as u16 + 2 + 2).max(5);

    // Center the dialog
    let dialog_x = area.x + (area.width.saturating_sub(dialog_width)) / 2;
    let dialog_y = area.y + (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = Rect {
        x: dialog_x,
        y: dialog_y,
        width: dialog_width,
        height: dialog_height,
    };

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for line in wrapped_lines {
        content.push(Line::from(line));
    }

    content.push(Line::from(""));
    content.push(Line::from(vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to dismiss"),
    ]));

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

/// Word-wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            let width_with_word = if current.is_empty() {
                word.len()
            } else {
                current.len() + 1 + word.len()
            };
            if width_with_word > max_width && !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_text_splits_long_lines() {
        let lines = wrap_text("Please enter a valid 6-digit MFA code", 20);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.len() <= 20));
    }

    #[test]
    fn test_wrap_text_keeps_short_lines() {
        let lines = wrap_text("Welcome to Dashboard", 56);
        assert_eq!(lines, vec!["Welcome to Dashboard".to_string()]);
    }

    #[test]
    fn test_wrap_text_empty_input() {
        assert_eq!(wrap_text("", 20), vec![String::new()]);
    }
}
