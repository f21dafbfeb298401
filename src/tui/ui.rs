//! UI layout and rendering logic for the form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::app::{Field, FormApp, PopupState, StatusChoice};
use crate::utils::width_up_to;

/// Render the main UI
pub fn render_ui(frame: &mut Frame, app: &FormApp) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Cmd Name
            Constraint::Length(3), // Data
            Constraint::Length(3), // Range
            Constraint::Length(3), // Status selector
            Constraint::Length(3), // Submit button
            Constraint::Min(0),    // Filler
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let title = Paragraph::new("JSON Form Sender")
        .centered()
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(title, main_layout[0]);

    render_text_field(frame, app, Field::CmdName, &app.cmd_name, main_layout[1]);
    render_text_field(frame, app, Field::Data, &app.data, main_layout[2]);
    render_text_field(frame, app, Field::Range, &app.range, main_layout[3]);
    render_status_selector(frame, app, main_layout[4]);
    render_submit_button(frame, app, main_layout[5]);
    render_status_bar(frame, app, main_layout[7]);

    match &app.popup_state {
        PopupState::Warning(message) => render_popup(frame, "Input Error", message, Color::Yellow),
        PopupState::Success(message) => render_popup(frame, "Success", message, Color::Green),
        PopupState::Error(message) => render_popup(frame, "Communication Error", message, Color::Red),
        PopupState::None => {}
    }
}

fn focus_style(app: &FormApp, field: Field) -> Style {
    if app.focus == field {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Render one bordered single-line text input.
fn render_text_field(frame: &mut Frame, app: &FormApp, field: Field, text: &str, area: Rect) {
    let paragraph = Paragraph::new(text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(field.label())
                .border_style(focus_style(app, field)),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);

    // Place the terminal cursor inside the focused field.
    if app.focus == field && !app.is_popup_shown() {
        let x = area.x + 1 + width_up_to(text, app.cursor) as u16;
        let y = area.y + 1;
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), y));
    }
}

/// Render the two-option status selector.
fn render_status_selector(frame: &mut Frame, app: &FormApp, area: Rect) {
    let option = |choice: StatusChoice| -> Span<'static> {
        let marker = if app.status == choice { "(x)" } else { "( )" };
        let style = if app.status == choice {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Span::styled(format!("{} {}", marker, choice.as_str()), style)
    };

    let line = Line::from(vec![option(StatusChoice::Pass), Span::raw("   "), option(StatusChoice::Fail)]);
    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{} (←/→ to change)", Field::Status.label()))
            .border_style(focus_style(app, Field::Status)),
    );
    frame.render_widget(paragraph, area);
}

/// Render the submit button.
fn render_submit_button(frame: &mut Frame, app: &FormApp, area: Rect) {
    let label = if app.sending { "Sending..." } else { "[ Submit ]" };
    let style = if app.focus == Field::Submit {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(label, style)))
        .centered()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_style(app, Field::Submit)),
        );
    frame.render_widget(paragraph, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &FormApp, area: Rect) {
    let status_paragraph = Paragraph::new(app.status_message.as_str())
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    frame.render_widget(status_paragraph, area);
}

/// Render a modal dialog over a cleared centered rect.
fn render_popup(frame: &mut Frame, title: &str, message: &str, color: Color) {
    let area = frame.area();
    let popup_area = centered_rect(60, 30, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Message
            Constraint::Length(1), // Instructions
        ])
        .split(popup_area);

    let message_paragraph = Paragraph::new(Text::from(message))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(message_paragraph, popup_layout[0]);

    let instructions =
        Paragraph::new("Press any key to close").style(Style::default().fg(Color::Yellow));
    frame.render_widget(instructions, popup_layout[1]);
}

/// Helper function to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
