use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Widget},
};

use crate::app::{App, Section};
use crate::theme::Theme;
use crate::ui::style::palette;

pub fn render_nav(app: &App, area: Rect, buf: &mut Buffer) {
    let colors = palette(app.current_theme());
    let strings = app.strings();

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);
    block.render(area, buf);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12), // Logo
            Constraint::Min(1),     // Sections
            Constraint::Length(18), // Language + theme
        ])
        .split(inner);

    let logo = Line::from(vec![
        Span::styled("■ ", Style::default().fg(colors.secondary)),
        Span::styled("Biz", Style::default().fg(colors.primary).add_modifier(Modifier::BOLD)),
        Span::styled("Edge", Style::default().add_modifier(Modifier::BOLD)),
    ]);
    Paragraph::new(logo).render(layout[0], buf);

    let titles: Vec<Line> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| Line::from(format!("{} {}", i + 1, section.title(strings))))
        .collect();
    let selected = Section::ALL
        .iter()
        .position(|s| *s == app.section)
        .unwrap_or(0);
    Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(colors.muted))
        .highlight_style(Style::default().fg(colors.primary).add_modifier(Modifier::BOLD))
        .divider("│")
        .render(layout[1], buf);

    let theme_icon = match app.current_theme() {
        Theme::Dark => "☀",
        Theme::Light => "☾",
    };
    let toggles = Line::from(vec![
        Span::styled(format!("🌐 {} ", app.language.code()), Style::default().fg(colors.fg)),
        Span::styled("[l] ", Style::default().fg(colors.muted)),
        Span::styled(format!("{} ", theme_icon), Style::default().fg(colors.fg)),
        Span::styled("[t]", Style::default().fg(colors.muted)),
    ]);
    Paragraph::new(toggles)
        .alignment(Alignment::Right)
        .render(layout[2], buf);
}
