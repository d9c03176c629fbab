use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::widgets;
use crate::app::App;
use crate::constants;
use crate::state::TunnelState;
use crate::theme;

/// Render the dashboard view
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // 1. Header (1 row)
    // 2. Main Content (Flexible)
    // 3. Footer (1 row)
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .split(area);

    render_header(frame, app, chunks[0]);
    widgets::footer::render_dashboard(frame, chunks[2]);

    // Main Content: Location panel | Activity log
    let main_layout = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[1]);

    let tunnel_info_area = widgets::location_panel::render(frame, &app.display, main_layout[0]);
    app.tunnel_info_area = Some(tunnel_info_area);

    render_activity_log(frame, app, main_layout[1]);
}

fn status(state: &TunnelState) -> (&'static str, ratatui::style::Color) {
    match state {
        TunnelState::Disconnected => ("○ DISCONNECTED", theme::ERROR),
        TunnelState::Connecting { .. } => ("◐ CONNECTING", theme::WARNING),
        TunnelState::Connected { .. } => ("● CONNECTED", theme::SUCCESS),
        TunnelState::Disconnecting { .. } => ("◑ DISCONNECTING", theme::WARNING),
        TunnelState::Error { blocking: true, .. } => ("■ BLOCKED", theme::ERROR),
        TunnelState::Error { .. } => ("✕ ERROR", theme::ERROR),
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (status_text, color) = status(app.panel.tunnel_state());
    let separator = || Span::styled(" │ ", Style::default().fg(theme::NORD_POLAR_NIGHT_4));

    let feed = if app.feed_finished {
        format!("{} (done)", app.feed_name)
    } else {
        app.feed_name.clone()
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", constants::APP_NAME.to_uppercase()),
            Style::default()
                .fg(theme::ACCENT_SECONDARY)
                .add_modifier(Modifier::BOLD),
        ),
        separator(),
        Span::raw("Status: "),
        Span::styled(
            status_text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        separator(),
        Span::raw("Feed: "),
        Span::styled(feed, Style::default().fg(theme::TEXT_PRIMARY)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_activity_log(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title(constants::TITLE_ACTIVITY);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.logs.is_empty() {
        frame.render_widget(
            Paragraph::new("No activity yet").alignment(Alignment::Center),
            inner,
        );
        return;
    }

    // Newest entries at the bottom; only what fits is built.
    let visible = app.logs.len().saturating_sub(inner.height as usize);
    let logs: Vec<Line> = app.logs[visible..]
        .iter()
        .map(|msg| {
            let (timestamp, content) = msg.split_once(' ').unwrap_or(("", msg.as_str()));

            let style = if content.starts_with("ERROR") {
                Style::default().fg(theme::ERROR)
            } else if content.starts_with("SUCCESS") || content.contains("connected to") {
                Style::default().fg(theme::SUCCESS)
            } else if content.starts_with("TUNNEL") {
                Style::default().fg(theme::WARNING)
            } else if content.starts_with("LOCATION") || content.starts_with("UI") {
                Style::default().fg(theme::ACCENT_SECONDARY)
            } else {
                Style::default().fg(theme::INACTIVE)
            };

            Line::from(vec![
                Span::styled(
                    format!("[{timestamp}] "),
                    Style::default().fg(theme::TEXT_SECONDARY),
                ),
                Span::styled(content, style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(logs), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::message::Message;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_records_tunnel_info_area() {
        let mut app = App::new(&AppConfig::default(), "demo");
        app.handle_message(Message::TunnelStateChanged(TunnelState::Connecting {
            endpoint: None,
        }));

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| render(frame, &mut app)).unwrap();

        let area = app.tunnel_info_area.expect("area recorded after draw");
        assert!(area.width > 0);
        assert!(area.y > 1);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status(&TunnelState::Disconnected).0, "○ DISCONNECTED");
        assert_eq!(
            status(&TunnelState::Error {
                cause: "x".into(),
                blocking: true
            })
            .0,
            "■ BLOCKED"
        );
    }
}
