//! Roster TUI - actor-based terminal user directory
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP fetch execution

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::{mpsc, watch};

use roster_tui::app::AppActor;
use roster_tui::constants::{APP_NAME, USERS_ENDPOINT};
use roster_tui::messages::ui_events::key_to_ui_event;
use roster_tui::messages::{FetchCommand, FetchUpdate, RenderState, UiEvent};
use roster_tui::network::FetchActor;
use roster_tui::store::FetchPhase;
use roster_tui::ui::{phase_indicator, user_row};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "roster.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (fetch_cmd_tx, fetch_cmd_rx) = mpsc::unbounded_channel::<FetchCommand>();
    let (fetch_update_tx, fetch_update_rx) = mpsc::unbounded_channel::<FetchUpdate>();
    let (render_tx, render_rx) = watch::channel(RenderState::default());

    // Spawn fetch actor
    let fetch_actor = FetchActor::new(USERS_ENDPOINT, fetch_update_tx);
    tokio::spawn(fetch_actor.run(fetch_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(fetch_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, fetch_update_rx));

    // Initial load, triggered here rather than inside any constructor
    let _ = ui_tx.send(UiEvent::Refresh);

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    mut render_rx: watch::Receiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = render_rx.borrow().clone();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(key, current_state.show_help) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Pick up the latest published state (non-blocking)
        if render_rx.has_changed().unwrap_or(false) {
            current_state = render_rx.borrow_and_update().clone();
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // User list
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, chunks[0]);
    draw_user_list(f, state, chunks[1]);
    draw_status_bar(f, state, chunks[2]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{} users", state.users.len()),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(
            phase_indicator(state.phase),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_user_list(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Users ");

    if state.users.is_empty() {
        let content = match state.phase {
            FetchPhase::Loading => "Loading users...",
            FetchPhase::Failed => "Fetch failed. Press 'r' to retry.",
            _ => "No users loaded.\n\nPress 'r' to refresh.",
        };
        let paragraph = Paragraph::new(content)
            .block(block)
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = state.users.iter().map(user_row).collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let (text, style) = match (&state.last_error, state.phase) {
        (Some(err), _) => (
            format!(" fetch failed: {} ", err),
            Style::default().fg(Color::Red),
        ),
        (None, FetchPhase::Loading) => (
            " Loading... ".to_string(),
            Style::default().fg(Color::Yellow),
        ),
        _ => (
            " ↑/↓:select | r:refresh | ?:help | q:quit ".to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 50, area);

    let help_text = r#"
 ROSTER TUI - Keyboard Shortcuts

 NAVIGATION
   ↑ / k              Previous user
   ↓ / j              Next user
   g / Home           First user
   G / End            Last user

 FETCH
   r                  Refresh user list

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

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
