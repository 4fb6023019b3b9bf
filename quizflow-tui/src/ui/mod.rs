//! UI rendering
//!
//! Render functions draw a `ViewModel` into a frame. They read state, never
//! change it; the answer editor is the one stateful widget and is passed in
//! already synced.

pub mod answer;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::Session;
use crate::binder::{ViewModel, COMPLETION_MESSAGE, COMPLETION_TITLE};
use answer::AnswerEditor;

/// Render options that come from configuration
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub colors: bool,
}

/// Render the quiz screen and any overlay on top of it
pub fn render(
    frame: &mut Frame,
    view: &ViewModel,
    session: &Session,
    editor: &AnswerEditor,
    theme: Theme,
) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Question
            Constraint::Min(5),    // Answer editor
            Constraint::Length(3), // Buttons
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], view, theme);
    render_question(frame, chunks[1], view);
    frame.render_widget(editor.textarea(), chunks[2]);
    render_buttons(frame, chunks[3], view, theme);
    render_status_bar(frame, chunks[4], view, theme);

    if session.help_visible {
        render_help_overlay(frame, area, theme);
    } else if view.show_completion && !session.dialog_dismissed {
        render_completion_dialog(frame, area, theme);
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &ViewModel, theme: Theme) {
    let title_style = if theme.colors {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled("Question ", title_style),
        Span::styled(view.index_label(), title_style),
        Span::raw(format!(" of {}", view.total)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" Quizflow "));

    frame.render_widget(header, area);
}

fn render_question(frame: &mut Frame, area: Rect, view: &ViewModel) {
    let question = Paragraph::new(view.question_text.as_str())
        .block(Block::default().borders(Borders::ALL).title(" Question "))
        .wrap(Wrap { trim: true });

    frame.render_widget(question, area);
}

fn render_buttons(frame: &mut Frame, area: Rect, view: &ViewModel, theme: Theme) {
    let buttons = Line::from(vec![
        button("< Previous (Ctrl+P)", view.previous_enabled, theme),
        Span::raw("   "),
        button("Next (Ctrl+N) >", view.next_enabled, theme),
        Span::raw("   "),
        button("Submit (Ctrl+S)", view.submit_enabled, theme),
    ]);

    let row = Paragraph::new(buttons)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    frame.render_widget(row, area);
}

fn button(label: &'static str, enabled: bool, theme: Theme) -> Span<'static> {
    let style = match (enabled, theme.colors) {
        (true, true) => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        (true, false) => Style::default().add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::DarkGray),
        (false, false) => Style::default().add_modifier(Modifier::DIM),
    };
    Span::styled(format!("[ {} ]", label), style)
}

fn render_status_bar(frame: &mut Frame, area: Rect, view: &ViewModel, theme: Theme) {
    let complete = view.answered == view.total as i64;
    let status_style = match (complete, theme.colors) {
        (true, true) => Style::default().fg(Color::Green),
        (false, true) => Style::default().fg(Color::Yellow),
        (_, false) => Style::default(),
    };

    let hints = if view.show_completion {
        "Submitted | Enter: close"
    } else {
        "F1: Help | Ctrl+Q: Quit"
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(view.status_label(), status_style),
        Span::raw(" | "),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

fn render_help_overlay(frame: &mut Frame, area: Rect, theme: Theme) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = vec![
        Line::from(Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("  Ctrl+N / PgDn  - Next question"),
        Line::from("  Ctrl+P / PgUp  - Previous question"),
        Line::from("  Ctrl+S         - Submit (all answered)"),
        Line::from("  F1             - Toggle help"),
        Line::from("  Ctrl+Q         - Quit"),
        Line::from(""),
        Line::from("Everything else edits the answer."),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let border = if theme.colors {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(border),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

fn render_completion_dialog(frame: &mut Frame, area: Rect, theme: Theme) {
    let popup_area = centered_rect(50, 30, area);

    let border = if theme.colors {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let dialog = Paragraph::new(vec![
        Line::from(Span::styled(
            COMPLETION_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(COMPLETION_MESSAGE),
        Line::from(""),
        Line::from("[ Ok ]"),
    ])
    .block(
        Block::default()
            .title(format!(" {} ", COMPLETION_TITLE))
            .borders(Borders::ALL)
            .border_style(border),
    )
    .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(dialog, popup_area);
}

/// Helper to create centered rectangle
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
