use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::brand::{BrandFonts, BRAND};
use crate::ui::sections::card;
use crate::ui::style::{hex_color, palette};

pub fn render_brand(app: &App, area: Rect, buf: &mut Buffer) {
    let colors = palette(app.current_theme());

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let swatch = |hex: &'static str, label: &'static str| {
        vec![
            Span::styled("██████", Style::default().fg(hex_color(hex))),
            Span::raw(format!(" {:<10} {}", label, hex)),
        ]
    };

    let text = Text::from(vec![
        Line::from(vec![
            Span::styled("▰▰ ", Style::default().fg(colors.secondary)),
            Span::styled(BRAND.name, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::styled(BRAND.vibe, Style::default().fg(colors.muted)),
        Line::from(""),
        Line::from(swatch(BRAND.colors.primary, "Primary")),
        Line::from(swatch(BRAND.colors.secondary, "Secondary")),
        Line::from(swatch(BRAND.colors.accent, "Accent")),
        Line::from(""),
        Line::styled(font_summary(&BRAND.fonts), Style::default().fg(colors.muted)),
    ]);

    Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(card(format!(" {} ", app.strings().brand), &colors))
        .render(layout[0], buf);

    let logo = Text::from(vec![
        Line::from(""),
        Line::styled("Logo Motion", Style::default().fg(colors.muted)),
        Line::from(""),
        Line::from(vec![
            Span::styled("( ", Style::default().fg(colors.secondary)),
            Span::styled("■ ", Style::default().fg(colors.primary)),
            Span::styled(BRAND.name, Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(" )", Style::default().fg(colors.secondary)),
        ]),
    ]);
    Paragraph::new(logo)
        .alignment(Alignment::Center)
        .block(card("", &colors))
        .render(layout[1], buf);
}

/// One line when heading and body share a stack, otherwise both named.
fn font_summary(fonts: &BrandFonts) -> String {
    if fonts.heading == fonts.body {
        format!("Fonts: {}", fonts.heading)
    } else {
        format!("Headings: {} · Body: {}", fonts.heading, fonts.body)
    }
}
