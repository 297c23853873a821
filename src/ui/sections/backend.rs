use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::{App, InsightsState};
use crate::insights::InsightsClient;
use crate::ui::sections::card;
use crate::ui::style::palette;

pub fn render_backend(app: &App, area: Rect, buf: &mut Buffer) {
    let colors = palette(app.current_theme());
    let base_url = app.backend_url();

    let status = match app.insights() {
        InsightsState::Loading => Span::styled("checking…", Style::default().fg(colors.muted)),
        InsightsState::Ready(resolution) if resolution.is_live() => Span::styled(
            "✔ live data",
            Style::default().fg(colors.success).add_modifier(Modifier::BOLD),
        ),
        InsightsState::Ready(_) => Span::styled(
            "✖ unreachable, showing demo data",
            Style::default().fg(colors.danger).add_modifier(Modifier::BOLD),
        ),
    };

    let text = Text::from(vec![
        Line::from(vec![
            Span::styled("Backend   ", Style::default().fg(colors.muted)),
            Span::raw(base_url.clone()),
        ]),
        Line::from(vec![
            Span::styled("Endpoint  ", Style::default().fg(colors.muted)),
            Span::raw(InsightsClient::endpoint(&base_url)),
        ]),
        Line::from(vec![Span::styled("Status    ", Style::default().fg(colors.muted)), status]),
        Line::from(""),
        Line::styled("Press r to check again", Style::default().fg(colors.muted)),
    ]);

    Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(card(format!(" {} ", app.strings().test_backend), &colors))
        .render(area, buf);
}
