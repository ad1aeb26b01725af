use crate::ui::view::{ResultCard, ResultView, ViewModel};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Draw `view`. `tick` advances the spinner.
pub fn render(frame: &mut Frame, view: &ViewModel, tick: usize) {
    // Main layout: Header + Input + Body + Footer
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Header
            Constraint::Length(3), // Input row
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, view, main_chunks[0]);
    render_input_row(frame, view, main_chunks[1]);

    if let Some(result) = &view.result {
        render_result(frame, result, main_chunks[2]);
    } else if let Some(busy) = &view.busy {
        render_busy(frame, busy.message, tick, main_chunks[2]);
    } else {
        frame.render_widget(Block::default().borders(Borders::ALL), main_chunks[2]);
    }

    let footer = Paragraph::new(view.footer).style(Style::default().fg(Color::Gray));
    frame.render_widget(footer, main_chunks[3]);

    if let Some(notice) = &view.notice {
        render_notice(frame, &notice.text, notice.dismiss_hint);
    }
}

fn render_header(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let mut tabs = Vec::new();
    for tab in &view.languages {
        let style = if tab.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs.push(Span::styled(format!(" {} ", tab.label), style));
        tabs.push(Span::raw(" "));
    }

    let text = vec![
        Line::from(tabs).alignment(Alignment::Right),
        Line::from(Span::styled(
            view.title,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(view.subtitle, Style::default().fg(Color::Gray))),
    ];

    let header = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(header, area);
}

fn render_input_row(frame: &mut Frame, view: &ViewModel, area: Rect) {
    let button_width = u16::try_from(Line::from(view.button.label).width())
        .unwrap_or(u16::MAX)
        .saturating_add(6);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(button_width)])
        .split(area);

    let input_line = if view.input.text.is_empty() {
        Line::from(Span::styled(
            view.input.placeholder,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(view.input.text.as_str())
    };
    let input = Paragraph::new(input_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(view.input.label)
            .border_style(Style::default().fg(Color::White)),
    );
    frame.render_widget(input, chunks[0]);

    if view.notice.is_none() {
        let typed =
            u16::try_from(Line::from(view.input.text.as_str()).width()).unwrap_or(u16::MAX);
        let max_x = chunks[0].x + chunks[0].width.saturating_sub(2);
        let x = chunks[0].x.saturating_add(1).saturating_add(typed).min(max_x);
        frame.set_cursor_position((x, chunks[0].y + 1));
    }

    let button_style = if view.button.enabled {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let button = Paragraph::new(Line::from(Span::styled(
        format!(" {} ", view.button.label),
        button_style,
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, chunks[1]);
}

fn render_busy(frame: &mut Frame, message: &str, tick: usize, area: Rect) {
    let spinner = SPINNER_FRAMES[tick % SPINNER_FRAMES.len()];
    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner, Style::default().fg(Color::Yellow)),
            Span::raw(" "),
            Span::raw(message),
        ])
        .alignment(Alignment::Center),
    ];
    let paragraph = Paragraph::new(text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_result(frame: &mut Frame, result: &ResultView, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Profile header
            Constraint::Length(4), // Cards
            Constraint::Min(0),    // Portrait
        ])
        .split(area);

    let profile = Paragraph::new(vec![
        Line::from(Span::styled(
            result.display_name.as_str(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("@{}", result.handle),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("🖼  {}", result.avatar_url))
            .border_style(Style::default().fg(Color::Magenta)),
    );
    frame.render_widget(profile, chunks[0]);

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_card(frame, &result.mbti, cards[0]);
    render_card(frame, &result.animal, cards[1]);

    let portrait = Paragraph::new(result.description.as_str())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(result.description_label)
                .border_style(Style::default().fg(Color::Magenta)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(portrait, chunks[2]);
}

fn render_card(frame: &mut Frame, card: &ResultCard, area: Rect) {
    let paragraph = Paragraph::new(vec![
        Line::from(Span::styled(card.label, Style::default().fg(Color::Gray))),
        Line::from(Span::styled(
            card.value.as_str(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
}

fn render_notice(frame: &mut Frame, text: &str, dismiss_hint: &str) {
    let area = centered_rect(60, 30, frame.area());
    frame.render_widget(Clear, area);

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(text),
        Line::from(""),
        Line::from(Span::styled(dismiss_hint, Style::default().fg(Color::Gray))),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(paragraph, area);
}

/// A rectangle of `percent_x` by `percent_y` centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
