//! TUI rendering with ratatui
//!
//! Panels for the question-and-answer search flow.

use super::app::{App, MessageStyle};
use crate::core::ConstraintSet;
use crate::logging::ActionLog;
use crate::session::SessionState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Words per line in the results panel
const WORDS_PER_LINE: usize = 6;

/// Main UI rendering function
pub fn ui<L: ActionLog>(f: &mut Frame, app: &App<'_, L>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Prompt and results
            Constraint::Percentage(40), // Progress, criteria, messages
        ])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔤 ПЯТЬ БУКВ - помощник")
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

fn render_main_panel<L: ActionLog>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(40), // Current question
            Constraint::Percentage(60), // Results
        ])
        .split(area);

    render_prompt(f, app, chunks[0]);
    render_results(f, app, chunks[1]);
}

fn render_prompt<L: ActionLog>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let title = match app.state().step_number() {
        Some(step) => format!(" Шаг {step} из {} ", SessionState::STEPS.len()),
        None => " Вопрос ".to_string(),
    };

    let paragraph = Paragraph::new(app.prompt.as_str())
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_results<L: ActionLog>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let content = match &app.last_search {
        None => vec![Line::from("Поиск ещё не выполнялся")],
        Some(finished) if finished.outcome.is_empty() => vec![Line::from(Span::styled(
            "😔 Слова не найдены",
            Style::default().fg(Color::Red),
        ))],
        Some(finished) => {
            let outcome = &finished.outcome;
            let mut lines = vec![Line::from(vec![
                Span::raw("Найдено: "),
                Span::styled(
                    outcome.len().to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ])];

            for row in outcome.shown().chunks(WORDS_PER_LINE) {
                let spans: Vec<Span> = row
                    .iter()
                    .map(|word| {
                        Span::styled(
                            format!("{:<6}", word.text().to_uppercase()),
                            Style::default().fg(Color::Green),
                        )
                    })
                    .collect();
                lines.push(Line::from(spans));
            }

            if outcome.remaining() > 0 {
                lines.push(Line::from(Span::styled(
                    format!("...и ещё {} слов", outcome.remaining()),
                    Style::default().fg(Color::DarkGray),
                )));
            }
            lines
        }
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Результаты ")
                .borders(Borders::ALL)
                .style(Style::default().fg(Color::Green)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_info_panel<L: ActionLog>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Step gauge
            Constraint::Percentage(50), // Criteria
            Constraint::Min(3),         // Messages
        ])
        .split(area);

    render_step_progress(f, app, chunks[0]);
    render_criteria(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_step_progress<L: ActionLog>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let total = SessionState::STEPS.len();
    let done = app.state().step_number().map_or(0, |step| step - 1);
    let percent = (done * 100 / total) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Прогресс ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{done}/{total} ответов"));

    f.render_widget(gauge, area);
}

fn render_criteria<L: ActionLog>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    // Running session first, otherwise what the last search used
    let constraints = app
        .constraints()
        .or_else(|| app.last_search.as_ref().map(|s| &s.constraints));

    let content = constraints.map_or_else(
        || vec![Line::from("-")],
        |c| criteria_lines(c, app.state()),
    );

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Критерии ")
            .borders(Borders::ALL),
    );

    f.render_widget(paragraph, area);
}

fn criteria_lines(constraints: &ConstraintSet, state: SessionState) -> Vec<Line<'static>> {
    let rows = [
        (SessionState::CollectingRequired, "Есть:     ", constraints.required().to_string()),
        (SessionState::CollectingExcluded, "Нет:      ", constraints.excluded().to_string()),
        (
            SessionState::CollectingRequiredPositions,
            "На месте: ",
            constraints.required_positions().to_string(),
        ),
        (
            SessionState::CollectingExcludedPositions,
            "Не там:   ",
            constraints.excluded_positions().to_string(),
        ),
    ];

    rows.into_iter()
        .map(|(step, label, value)| {
            let style = if step == state {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Line::from(vec![Span::styled(label, style), Span::raw(value)])
        })
        .collect()
}

fn render_messages<L: ActionLog>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
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

    let messages_list = List::new(messages).block(
        Block::default()
            .title(" Сообщения ")
            .borders(Borders::ALL),
    );

    f.render_widget(messages_list, area);
}

fn render_input<L: ActionLog>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let (title, color) = if app.state().is_collecting() {
        (" Ответ | Enter - отправить, Esc - отменить ", Color::Yellow)
    } else {
        (" Ctrl-N - новый поиск, Ctrl-C - выход ", Color::Cyan)
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<L: ActionLog>(f: &mut Frame, app: &App<'_, L>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    let dictionary = Paragraph::new(format!("Словарь: {}", app.store.dictionary().len()))
        .alignment(Alignment::Center);
    f.render_widget(dictionary, chunks[0]);

    let stats = Paragraph::new(format!(
        "Поисков: {} | Ошибок ввода: {} | Отмен: {}",
        app.stats.searches, app.stats.rejected_inputs, app.stats.cancelled
    ))
    .alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help = Paragraph::new("F1: справка | Ctrl-C: выход")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
