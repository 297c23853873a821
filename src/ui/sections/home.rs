use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::brand::HERO_BADGES;
use crate::ui::sections::card;
use crate::ui::style::palette;

pub fn render_home(app: &App, area: Rect, buf: &mut Buffer) {
    let colors = palette(app.current_theme());
    let strings = app.strings();

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .margin(1)
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            strings.hero_title,
            Style::default().fg(colors.fg).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(strings.hero_sub, Style::default().fg(colors.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" ✦ {} [g] ", strings.get_started),
                Style::default().fg(colors.bg).bg(colors.primary).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} → [d] ", strings.see_demo),
                Style::default().fg(colors.fg).add_modifier(Modifier::REVERSED),
            ),
        ]),
        Line::from(""),
    ];
    let badges: Vec<Span> = HERO_BADGES
        .iter()
        .flat_map(|badge| {
            [
                Span::styled("✔ ", Style::default().fg(colors.success)),
                Span::styled(format!("{}   ", badge), Style::default().fg(colors.muted)),
            ]
        })
        .collect();
    lines.push(Line::from(badges));

    Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .render(layout[0], buf);

    // Stand-in for the 3D hero scene
    let scene = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled("╭──────────╮", Style::default().fg(colors.primary))),
        Line::from(Span::styled("│  ▂▃▅▆█   │", Style::default().fg(colors.accent))),
        Line::from(Span::styled("│  ₹ ↗ 34% │", Style::default().fg(colors.secondary))),
        Line::from(Span::styled("╰──────────╯", Style::default().fg(colors.primary))),
    ]);
    Paragraph::new(scene)
        .alignment(Alignment::Center)
        .block(card("", &colors))
        .render(layout[1], buf);
}
