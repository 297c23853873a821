use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::brand::FEATURES;
use crate::ui::sections::card;
use crate::ui::style::palette;

const COLUMNS: usize = 3;

pub fn render_features(app: &App, area: Rect, buf: &mut Buffer) {
    let colors = palette(app.current_theme());

    let outer = card(format!(" ◈ {} ", app.strings().features), &colors);
    let inner = outer.inner(area);
    outer.render(area, buf);

    let rows = FEATURES.len().div_ceil(COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(inner);

    for (row, chunk) in FEATURES.chunks(COLUMNS).enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(row_areas[row]);

        for (feature, cell) in chunk.iter().zip(cells.iter()) {
            let text = Text::from(vec![
                Line::from(vec![
                    Span::styled(format!("{} ", feature.icon), Style::default().fg(colors.secondary)),
                    Span::styled(feature.title, Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(feature.desc, Style::default().fg(colors.muted))),
            ]);
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .block(card("", &colors))
                .render(*cell, buf);
        }
    }
}
