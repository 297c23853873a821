use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::brand::PLATFORM_NOTES;
use crate::ui::sections::card;
use crate::ui::style::palette;

pub fn render_onboarding(app: &App, area: Rect, buf: &mut Buffer) {
    let colors = palette(app.current_theme());

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut lines = vec![Line::from("")];
    if let Some(step) = app.carousel.current() {
        lines.push(Line::styled(step.icon, Style::default().fg(colors.primary)));
        lines.push(Line::from(""));
        lines.push(Line::styled(step.title, Style::default().add_modifier(Modifier::BOLD)));
        lines.push(Line::styled(step.text, Style::default().fg(colors.muted)));
    }
    lines.push(Line::from(""));

    let dots: Vec<Span> = (0..app.carousel.len())
        .map(|i| {
            if i == app.carousel.index() {
                Span::styled("━━ ", Style::default().fg(colors.primary))
            } else {
                Span::styled("• ", Style::default().fg(colors.border))
            }
        })
        .collect();
    lines.push(Line::from(dots));
    lines.push(Line::styled(
        format!("every {:.1}s", app.carousel.interval().as_secs_f64()),
        Style::default().fg(colors.muted),
    ));

    Paragraph::new(Text::from(lines))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(card(format!(" {} ", app.strings().onboarding), &colors))
        .render(layout[0], buf);

    let mut notes: Vec<Line> = PLATFORM_NOTES
        .iter()
        .map(|note| Line::from(format!("• {}", note)))
        .collect();
    notes.push(Line::from(""));
    notes.push(Line::from(vec![
        Span::styled(" ⤓ Download Prototype ", Style::default().fg(colors.bg).bg(colors.primary)),
        Span::raw("  "),
        Span::styled(" Export Branding ", Style::default().fg(colors.muted)),
    ]));

    Paragraph::new(Text::from(notes))
        .wrap(Wrap { trim: true })
        .block(card(" Multi-platform ", &colors))
        .render(layout[1], buf);
}
