use std::io;

use anyhow::Result;
use crossterm::event::DisableBracketedPaste;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableBracketedPaste;
use crossterm::event::EnableMouseCapture;
use crossterm::execute;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Constraint;
use ratatui::layout::Direction;
use ratatui::layout::Layout;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::List;
use ratatui::widgets::ListItem;
use ratatui::widgets::ListState;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use ratatui::Terminal;
use tui_textarea::TextArea;

use crate::configuration::Config;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::services::AppState;
use crate::domain::services::EventsService;

/// Restores the terminal to a usable state after a panic. Normal teardown
/// happens in `start_loop`; this is only wired into the panic hook.
pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    );
    let _ = execute!(io::stdout(), crossterm::cursor::Show);
}

pub async fn start_loop() -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run(&mut terminal).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    return res;
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let mut app_state = AppState::new(Config::min_phrase_length());
    let mut events = EventsService::new();
    let mut textarea = build_textarea();

    loop {
        terminal.draw(|frame| draw(frame, &mut app_state, &mut textarea))?;

        match events.next().await? {
            Event::KeyboardCTRLC => break,
            Event::KeyboardEnter => {
                let candidate = textarea.lines().join("\n");
                if candidate.is_empty() {
                    continue;
                }

                if app_state.dispatch(Action::AddPhrase(candidate)) {
                    // Accepted: reset the compose field for the next phrase.
                    textarea = build_textarea();
                }
            }
            Event::KeyboardCharInput(input) => {
                app_state.clear_warning();
                textarea.input(input);
            }
            Event::KeyboardPaste(text) => {
                app_state.clear_warning();
                textarea.insert_str(&text);
            }
            Event::KeyboardDelete => {
                app_state.delete_selected();
            }
            Event::UIScrollUp => app_state.select_up(),
            Event::UIScrollDown => app_state.select_down(),
            Event::UITick => {}
        }
    }

    return Ok(());
}

fn build_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text("Type your phrase...");
    return textarea;
}

fn draw(frame: &mut Frame, app_state: &mut AppState, textarea: &mut TextArea) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_list(frame, app_state, layout[0]);
    draw_warning(frame, app_state, layout[1]);
    draw_compose(frame, app_state, textarea, layout[2]);
    draw_help(frame, layout[3]);
}

fn draw_list(frame: &mut Frame, app_state: &AppState, area: ratatui::layout::Rect) {
    let items = app_state
        .phrases
        .iter()
        .map(|phrase| ListItem::new(phrase.text.clone()))
        .collect::<Vec<ListItem>>();

    let title = format!("Phrases ({})", app_state.phrases.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("✕ ");

    let mut list_state = ListState::default();
    if !app_state.phrases.is_empty() {
        list_state.select(Some(app_state.selected));
    }

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_warning(frame: &mut Frame, app_state: &AppState, area: ratatui::layout::Rect) {
    let line = match &app_state.warning {
        Some(warning) => Line::styled(format!(" {warning}"), Style::default().fg(Color::Red)),
        None => Line::raw(""),
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn draw_compose(
    frame: &mut Frame,
    app_state: &AppState,
    textarea: &mut TextArea,
    area: ratatui::layout::Rect,
) {
    let typed = textarea.lines().join("\n").chars().count();
    textarea.set_block(Block::default().borders(Borders::ALL).title(format!(
        "New phrase ({typed}/{})",
        app_state.minimum
    )));

    frame.render_widget(&*textarea, area);
}

fn draw_help(frame: &mut Frame, area: ratatui::layout::Rect) {
    let help = Paragraph::new(" Enter: save  ·  Up/Down: select  ·  Delete: remove  ·  Ctrl+C: quit")
        .style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(help, area);
}
