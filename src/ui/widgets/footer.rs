//! Footer widget with keybinding hints

use crate::message::KeyHint;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const HINTS: [KeyHint; 3] = [
    KeyHint {
        key: "Enter",
        label: "Tunnel info",
    },
    KeyHint {
        key: "c",
        label: "Clear log",
    },
    KeyHint {
        key: "q",
        label: "Quit",
    },
];

/// Render dashboard footer with shortcuts
pub fn render_dashboard(frame: &mut Frame, area: Rect) {
    render_hints(frame, area, &HINTS);
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &[KeyHint]) {
    let chunks = Layout::horizontal([
        Constraint::Min(0),     // Hints (left)
        Constraint::Length(20), // Branding (right)
    ])
    .split(area);

    // 1. Render hints on the left
    let mut hint_spans = vec![Span::raw(" ")];
    let mut current_width = 1;
    let max_width = chunks[0].width as usize;

    for (i, hint) in hints.iter().enumerate() {
        // "key" + " " + "label", plus " │ " before every item but the first
        let sep_width = if i > 0 { 3 } else { 0 };
        let item_width = hint.key.len() + 1 + hint.label.len() + sep_width;

        if current_width + item_width > max_width {
            break;
        }

        if i > 0 {
            hint_spans.push(Span::styled(
                " │ ",
                Style::default().fg(Color::Rgb(50, 50, 50)),
            ));
        }
        hint_spans.push(Span::styled(
            hint.key,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        hint_spans.push(Span::raw(" "));
        hint_spans.push(Span::styled(
            hint.label,
            Style::default().fg(Color::DarkGray),
        ));

        current_width += item_width;
    }
    frame.render_widget(Paragraph::new(Line::from(hint_spans)), chunks[0]);

    // 2. Render branding on the right
    let branding = Line::from(vec![Span::styled(
        format!(
            "{} v{} ",
            crate::constants::APP_NAME,
            crate::constants::APP_VERSION
        ),
        Style::default().fg(crate::theme::NORD_POLAR_NIGHT_4),
    )]);
    frame.render_widget(
        Paragraph::new(branding).alignment(Alignment::Right),
        chunks[1],
    );
}
