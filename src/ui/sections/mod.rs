pub mod backend;
pub mod brand;
pub mod dashboard;
pub mod features;
pub mod home;
pub mod onboarding;

use ratatui::{
    style::Style,
    widgets::{Block, BorderType},
};

use crate::ui::style::Palette;

/// Rounded card used by every section.
pub(crate) fn card<'a>(title: impl Into<ratatui::text::Line<'a>>, colors: &Palette) -> Block<'a> {
    Block::bordered()
        .title(title)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.border))
}
