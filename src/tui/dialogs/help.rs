//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::models::Page;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.page()))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Help lines for the current page
fn help_lines(page: Page) -> Vec<Line<'static>> {
    let mut lines = vec![
        section("Global Keys"),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("Ctrl+c", "Quit from anywhere"),
        key_line("?", "Show/hide help"),
        key_line("1 2 3", "Setup / Itinerary / Expenses"),
        Line::from(""),
    ];

    match page {
        Page::Itinerary => {
            lines.push(section("Itinerary"));
            lines.push(Line::from(""));
            lines.push(key_line("j/k", "Select day"));
            lines.push(key_line("e/Enter", "Edit the selected day"));
            lines.push(key_line("Enter/Esc", "Save and close the editor"));
        }
        Page::Expense => {
            lines.push(section("Expenses"));
            lines.push(Line::from(""));
            lines.push(key_line("a", "Focus the expense form"));
            lines.push(key_line("Tab", "Next field"));
            lines.push(key_line("Up/Down", "Change category"));
            lines.push(key_line("Enter", "Add expense"));
            lines.push(key_line("h/l [ ]", "Previous/next day"));
        }
        Page::Setup | Page::Bonuses => {
            lines.push(section("Setup"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab", "Next field"));
            lines.push(key_line("Enter", "Save the trip"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
