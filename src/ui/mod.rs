pub mod chat;
pub mod nav;
pub mod sections;
pub mod style;

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Paragraph, Widget},
};

use crate::app::{App, Section};
use crate::ui::style::palette;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = palette(self.current_theme());
        Block::default()
            .style(Style::default().bg(colors.bg).fg(colors.fg))
            .render(area, buf);

        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Nav
                Constraint::Min(1),    // Section
                Constraint::Length(1), // Footer
            ])
            .split(area);

        nav::render_nav(self, main_layout[0], buf);

        let body = main_layout[1];
        match self.section {
            Section::Home => sections::home::render_home(self, body, buf),
            Section::Features => sections::features::render_features(self, body, buf),
            Section::Dashboard => sections::dashboard::render_dashboard(self, body, buf),
            Section::Onboarding => sections::onboarding::render_onboarding(self, body, buf),
            Section::Brand => sections::brand::render_brand(self, body, buf),
            Section::BackendTest => sections::backend::render_backend(self, body, buf),
        }

        let footer = Paragraph::new(format!(
            "© {} BizEdge — Modern Accounting & Billing",
            chrono::Local::now().year()
        ))
        .style(Style::default().fg(colors.muted))
        .alignment(Alignment::Center);
        footer.render(main_layout[2], buf);

        if self.chat.open {
            chat::render_chat(self, chat::chat_rect(area), buf);
        }
    }
}

/// A `width` x `height` box pinned to the bottom-right corner of `r`, shrunk to fit.
pub(crate) fn bottom_right_rect(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    Rect {
        x: r.x + r.width - width,
        y: r.y + r.height - height,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_right_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(bottom_right_rect(44, 18, area), Rect::new(56, 22, 44, 18));

        let tiny = Rect::new(2, 3, 10, 5);
        assert_eq!(bottom_right_rect(44, 18, tiny), tiny);
    }
}
