use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Gauge, Paragraph, Widget, Wrap},
};

use crate::app::{App, InsightsState};
use crate::insights::{InsightsSummary, Resolution};
use crate::ui::sections::card;
use crate::ui::style::{palette, Palette};
use crate::util::string::StringUtils;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Fixed marketing deltas on the stat cards.
const SALES_DELTA: i32 = 8;
const PROFIT_DELTA: i32 = 12;
const EXPENSES_DELTA: i32 = -3;

pub fn render_dashboard(app: &App, area: Rect, buf: &mut Buffer) {
    let colors = palette(app.current_theme());

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(8)])
        .split(area);

    let summary = match app.insights() {
        InsightsState::Ready(resolution) => Some(&resolution.summary),
        InsightsState::Loading => None,
    };

    render_stat_cards(summary, &colors, layout[0], buf);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(layout[1]);

    match app.insights() {
        InsightsState::Ready(resolution) => {
            render_performance(resolution, &colors, body[0], buf);
            render_low_stock(&resolution.summary, &colors, body[1], buf);
        }
        InsightsState::Loading => {
            let frame = SPINNER[app.spinner_frame / 4 % SPINNER.len()];
            Paragraph::new(format!("{} Loading insights…", frame))
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors.muted))
                .block(card(" Monthly Performance ", &colors))
                .render(body[0], buf);
            card(" Low Stock Alerts ", &colors).render(body[1], buf);
        }
    }
}

fn render_stat_cards(summary: Option<&InsightsSummary>, colors: &Palette, area: Rect, buf: &mut Buffer) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    let totals = summary.map(|s| s.totals);
    let cards = [
        ("▇ Sales (₹)", totals.map(|t| t.sales), SALES_DELTA),
        ("↗ Profit (₹)", totals.map(|t| t.profit), PROFIT_DELTA),
        ("⛨ Expenses (₹)", totals.map(|t| t.expenses()), EXPENSES_DELTA),
    ];

    for ((label, value, delta), cell) in cards.into_iter().zip(cells.iter()) {
        let value = value
            .map(StringUtils::format_amount)
            .unwrap_or_else(|| "—".to_string());
        let delta_color = if delta >= 0 { colors.success } else { colors.danger };

        let text = Text::from(vec![Line::from(vec![
            Span::styled(value, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(StringUtils::format_delta(delta), Style::default().fg(delta_color)),
        ])]);
        Paragraph::new(text)
            .block(card(Line::styled(label, Style::default().fg(colors.muted)), colors))
            .render(*cell, buf);
    }
}

fn render_performance(resolution: &Resolution, colors: &Palette, area: Rect, buf: &mut Buffer) {
    let block = card(" Monthly Performance ", colors);
    let inner = block.inner(area);
    block.render(area, buf);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Sales label
            Constraint::Length(1), // Sales gauge
            Constraint::Length(1), // Margin label
            Constraint::Length(1), // Margin gauge
            Constraint::Min(3),    // Top products
            Constraint::Length(1), // Warning
        ])
        .split(inner);

    let metrics = resolution.metrics();

    Paragraph::new("Sales Achievement").render(layout[0], buf);
    Gauge::default()
        .gauge_style(Style::default().fg(colors.primary))
        .percent(metrics.sales_achievement_pct)
        .render(layout[1], buf);

    Paragraph::new("Profit Margin").render(layout[2], buf);
    Gauge::default()
        .gauge_style(Style::default().fg(colors.success))
        .percent(metrics.profit_margin_pct)
        .render(layout[3], buf);

    let products = &resolution.summary.top_products;
    if !products.is_empty() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, products.len() as u32); products.len()])
            .split(layout[4]);

        for (product, cell) in products.iter().zip(cells.iter()) {
            let text = Text::from(vec![
                Line::styled("Top Product", Style::default().fg(colors.muted)),
                Line::styled(product.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Line::styled(
                    format!("Revenue: ₹{}", StringUtils::format_amount(product.revenue)),
                    Style::default().fg(colors.muted),
                ),
            ]);
            Paragraph::new(text)
                .wrap(Wrap { trim: true })
                .render(*cell, buf);
        }
    }

    if let Some(warning) = &resolution.warning {
        Paragraph::new(warning.as_str())
            .style(Style::default().fg(colors.warning))
            .render(layout[5], buf);
    }
}

fn render_low_stock(summary: &InsightsSummary, colors: &Palette, area: Rect, buf: &mut Buffer) {
    let width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = summary
        .low_stock_items
        .iter()
        .map(|item| {
            let left = item
                .stock_quantity
                .map(|qty| qty.to_string())
                .unwrap_or_else(|| "—".to_string());
            let left = format!("{} left", left);
            let pad = width.saturating_sub(item.name.chars().count() + left.chars().count());
            Line::from(vec![
                Span::raw(item.name.clone()),
                Span::raw(" ".repeat(pad)),
                Span::styled(left, Style::default().fg(colors.danger)),
            ])
        })
        .collect();

    Paragraph::new(lines)
        .block(card(" Low Stock Alerts ", colors))
        .render(area, buf);
}
