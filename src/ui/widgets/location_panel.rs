//! Location panel: where the user appears to be, plus the tunnel info.
//!
//! Paints a [`DisplayState`] as-is; all decisions were made when the state
//! was composed.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::constants;
use crate::state::{DisplayState, CHEVRON_EXPANDED_DEG};
use crate::theme;

/// Renders the panel and returns the clickable tunnel info area.
pub fn render(frame: &mut Frame, display: &DisplayState, area: Rect) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title(constants::TITLE_LOCATION);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [location_area, _, tunnel_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(inner);

    frame.render_widget(Paragraph::new(location_lines(display)), location_area);
    frame.render_widget(Paragraph::new(tunnel_lines(display)), tunnel_area);

    tunnel_area
}

fn location_lines(display: &DisplayState) -> Vec<Line<'_>> {
    vec![
        Line::from(Span::styled(
            display.country_text.as_str(),
            Style::default()
                .fg(theme::TEXT_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            display.city_text.as_str(),
            Style::default().fg(theme::TEXT_PRIMARY),
        )),
        Line::from(Span::styled(
            display.hostname_text.as_str(),
            Style::default().fg(theme::TEXT_SECONDARY),
        )),
    ]
}

/// Glyph for the chevron, blank when it is not visible.
fn chevron_glyph(display: &DisplayState) -> &'static str {
    if !display.chevron_visible {
        " "
    } else if display.chevron_rotation_deg == CHEVRON_EXPANDED_DEG {
        constants::CHEVRON_UP
    } else {
        constants::CHEVRON_DOWN
    }
}

fn tunnel_lines(display: &DisplayState) -> Vec<Line<'_>> {
    let header_style = if display.info_visible {
        Style::default()
            .fg(theme::ACCENT_PRIMARY)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::TEXT_SECONDARY)
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(chevron_glyph(display), Style::default().fg(theme::ACCENT_PRIMARY)),
        Span::raw(" "),
        Span::styled(constants::TITLE_TUNNEL_INFO, header_style),
    ])];

    if display.expanded {
        lines.extend([
            field(constants::LABEL_PROTOCOL, &display.protocol_text),
            field(constants::LABEL_IN, &display.in_address_text),
            field(constants::LABEL_OUT, &display.out_address_text),
        ]);
    }
    lines
}

fn field<'a>(label: &'static str, value: &'a str) -> Line<'a> {
    let value = if value.is_empty() {
        Span::styled(constants::MSG_NO_DATA, Style::default().fg(theme::TEXT_SECONDARY))
    } else {
        Span::styled(value, Style::default().fg(theme::TEXT_PRIMARY))
    };
    Line::from(vec![
        Span::styled(
            format!("  {label:<9}"),
            Style::default().fg(theme::ACCENT_SECONDARY),
        ),
        value,
    ])
}
