use ratatui::{prelude::*, widgets::*};

use crate::models::User;
use crate::store::FetchPhase;

/// Avatar palette. Indexed by user id so a user keeps their color across
/// re-renders and refreshes.
const AVATAR_COLORS: [Color; 6] = [
    Color::Blue,
    Color::Cyan,
    Color::Green,
    Color::Magenta,
    Color::Yellow,
    Color::Red,
];

/// Color for a user's avatar badge, stable per id
pub fn avatar_color(id: i64) -> Color {
    AVATAR_COLORS[(id.unsigned_abs() as usize) % AVATAR_COLORS.len()]
}

/// Render one user as a list row: initials badge, bold name, gray email.
///
/// Purely a function of the `User` value, so equal users always produce
/// identical rows.
pub fn user_row(user: &User) -> ListItem<'static> {
    let badge = format!(" {:^4} ", user.initials());
    let line = Line::from(vec![
        Span::styled(
            badge,
            Style::default().fg(Color::Black).bg(avatar_color(user.id)).bold(),
        ),
        Span::raw("  "),
        Span::styled(user.name.clone(), Style::default().bold()),
        Span::raw("  "),
        Span::styled(user.email.clone(), Style::default().fg(Color::DarkGray)),
    ]);
    ListItem::new(line)
}

/// Title-bar loading indicator
pub fn phase_indicator(phase: FetchPhase) -> &'static str {
    match phase {
        FetchPhase::Loading => " [...]",
        FetchPhase::Failed => " [!]",
        FetchPhase::Empty | FetchPhase::Populated => "",
    }
}
