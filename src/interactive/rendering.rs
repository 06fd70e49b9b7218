//! TUI rendering with ratatui
//!
//! Menu and flashcard screens for the trainer.

use super::app::{App, MessageStyle, Screen};
use crate::core::Familiarity;
use crate::output::formatters::status_line;
use crate::selection::Mode;
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R: Rng>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Progress gauge
            Constraint::Min(8),    // Main content
            Constraint::Length(7), // Messages
            Constraint::Length(1), // Help bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_progress(f, app, chunks[1]);

    match app.screen {
        Screen::Menu => render_menu(f, app, chunks[2]),
        Screen::Drill { mode, current } => render_card(f, app, mode, current, chunks[2]),
    }

    render_messages(f, app, chunks[3]);
    render_help(f, app, chunks[4]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("📖 VOCABULARY TRAINER")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_progress<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let status = app.session.status();
    let percent = if status.total == 0 {
        0
    } else {
        (status.learned * 100 / status.total) as u16
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Progress "))
        .gauge_style(Style::default().fg(Color::Green))
        .percent(percent)
        .label(status_line(&status));

    f.render_widget(gauge, area);
}

fn render_menu<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let status = app.session.status();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "A little progress every day",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[l] ", Style::default().fg(Color::Green)),
            Span::raw(format!("Learn new words ({} left)", status.unlearned)),
        ]),
        Line::from(vec![
            Span::styled("[r] ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("Review words ({} learned)", status.learned)),
        ]),
        Line::from(vec![
            Span::styled("[q] ", Style::default().fg(Color::Red)),
            Span::raw("Quit"),
        ]),
    ];

    let menu = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Menu ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(menu, area);
}

fn familiarity_color(familiarity: Familiarity) -> Color {
    match familiarity {
        Familiarity::Unfamiliar => Color::Red,
        Familiarity::Moderate => Color::Yellow,
        Familiarity::Familiar => Color::Green,
    }
}

fn render_card<R: Rng>(
    f: &mut Frame,
    app: &App<R>,
    mode: Mode,
    current: Option<usize>,
    area: Rect,
) {
    let title = format!(" {} ", mode.label());
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(entry) = current.and_then(|index| app.session.entry(index).ok()) else {
        let empty = Paragraph::new(vec![Line::from(""), Line::from(mode.empty_message())])
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(empty, area);
        return;
    };

    let familiarity = entry.familiarity();
    let buttons: Vec<Span> = Familiarity::ALL
        .iter()
        .flat_map(|&tier| {
            let mut style = Style::default().fg(familiarity_color(tier));
            if tier == familiarity {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            [
                Span::styled(format!(" {} {} ", tier.value(), tier.label()), style),
                Span::raw("  "),
            ]
        })
        .collect();

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            entry.term().to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(entry.meaning().to_string()),
        Line::from(""),
        Line::from(buttons),
    ];

    let card = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(block);
    f.render_widget(card, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_help<R: Rng>(f: &mut Frame, app: &App<R>, area: Rect) {
    let help_text = match app.screen {
        Screen::Menu => "l: Learn | r: Review | q: Quit",
        Screen::Drill { current: None, .. } => "n: Try again | b: Back | q: Quit",
        Screen::Drill { .. } => "0/1/2: Rate | n: Next | b: Back | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
