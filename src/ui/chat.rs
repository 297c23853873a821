use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::app::App;
use crate::chat::Role;
use crate::ui::bottom_right_rect;
use crate::ui::style::palette;

const CHAT_WIDTH: u16 = 48;
const CHAT_HEIGHT: u16 = 20;
const TYPING: &str = "Assistant is typing…";

pub fn chat_rect(area: Rect) -> Rect {
    // Leave the footer row visible
    let above_footer = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    bottom_right_rect(CHAT_WIDTH, CHAT_HEIGHT, above_footer)
}

pub fn render_chat(app: &App, area: Rect, buf: &mut Buffer) {
    let colors = palette(app.current_theme());
    Clear.render(area, buf);

    let outer = Block::bordered()
        .title(Line::from(vec![
            Span::styled(" ✦ ", Style::default().fg(colors.primary)),
            Span::styled("BizEdge Assistant ", Style::default().add_modifier(Modifier::BOLD)),
        ]))
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.primary))
        .style(Style::default().bg(colors.bg).fg(colors.fg));
    let inner = outer.inner(area);
    outer.render(area, buf);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // History
            Constraint::Length(3), // Input box
        ])
        .split(inner);

    // Keep the newest messages in view
    let messages = app.chat.conversation().snapshot();
    let width = layout[0].width.max(1) as usize;
    let typing = app.chat.pending_replies() > 0;
    let mut budget = (layout[0].height as usize).saturating_sub(usize::from(typing));
    let mut first_visible = messages.len();
    for (i, message) in messages.iter().enumerate().rev() {
        let height = message_height(message.role, &message.text, width);
        if height > budget {
            break;
        }
        budget -= height;
        first_visible = i;
    }

    let mut lines = Vec::new();
    for message in &messages[first_visible..] {
        let style = match message.role {
            Role::User => Style::default().fg(colors.fg),
            Role::Assistant => Style::default().fg(colors.primary),
        };
        lines.push(Line::from(vec![
            Span::styled(prefix_for(message.role), style.add_modifier(Modifier::BOLD)),
            Span::styled(message.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }
    if typing {
        lines.push(Line::styled(TYPING, Style::default().fg(colors.muted)));
    }

    Paragraph::new(Text::from(lines))
        .wrap(Wrap { trim: true })
        .render(layout[0], buf);

    let input = if app.chat.input().is_empty() {
        Span::styled("Ask anything...", Style::default().fg(colors.muted))
    } else {
        Span::raw(app.chat.input().to_string())
    };
    Paragraph::new(Line::from(vec![Span::raw("> "), input]))
        .block(
            Block::bordered()
                .title(" Enter: Send • Esc: Close ")
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(colors.border)),
        )
        .render(layout[1], buf);
}

fn prefix_for(role: Role) -> &'static str {
    match role {
        Role::User => "You: ",
        Role::Assistant => "Assistant: ",
    }
}

/// Rows a message occupies when wrapped to `width`, plus the blank spacer.
fn message_height(role: Role, text: &str, width: usize) -> usize {
    let chars = prefix_for(role).chars().count() + text.chars().count();
    chars.div_ceil(width.max(1)).max(1) + 1
}
