//! Application rendering.
//!
//! Rendering is a pure projection of controller state into the buffer; it
//! never mutates the model.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use dlmv_core::ViewportModel;

use crate::event::{get_help_sections, legend};
use crate::theme::Theme;

use super::input::InputState;
use super::state::{AppMode, MessageLevel, StatusMessage};

/// Render context containing all the state needed for rendering.
pub struct RenderContext<'a> {
    pub theme: &'a Theme,
    pub mode: AppMode,
    pub model: &'a ViewportModel,
    pub message: Option<&'a StatusMessage>,
    pub input: Option<&'a InputState>,
    pub clone_source: Option<&'a str>,
}

/// Main render function for the application.
pub fn render_app(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let base_style = Style::default()
        .bg(ctx.theme.background)
        .fg(ctx.theme.foreground);
    buf.set_style(area, base_style);

    // Below the minimum geometry the file list is unrenderable; degrade to a
    // banner and leave the rest of the state alone.
    if ctx.model.is_viewport_too_small() {
        render_too_small(ctx, area, buf);
        return;
    }

    let [header, content, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(2),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(ctx, header, buf);
    render_entries(ctx, content, buf);
    render_footer(ctx, footer, buf);

    match ctx.mode {
        AppMode::Help => render_help(ctx, area, buf),
        AppMode::PathInput => render_path_prompt(ctx, area, buf),
        AppMode::Cloning => render_cloning(ctx, area, buf),
        _ => {}
    }
}

fn render_too_small(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let banner = Line::from(Span::styled(
        "Terminal too small",
        Style::default().fg(ctx.theme.error),
    ));
    Paragraph::new(banner).render(area, buf);
}

fn render_header(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, ctx.theme.header);

    let title = " dlmv ";
    let path = ctx.model.current_path().display().to_string();
    let avail = usize::from(area.width).saturating_sub(title.width() + 1);

    let line = Line::from(vec![
        Span::styled(title, ctx.theme.title),
        Span::raw(truncate_left(&path, avail)),
    ]);
    Paragraph::new(line).render(area, buf);
}

fn render_entries(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let total = ctx.model.entries().len();
    let block = Block::bordered()
        .border_style(ctx.theme.border)
        .title(Span::styled(format!(" {total} entries "), ctx.theme.title));

    let visible = ctx.model.visible_slice();
    let mut lines = Vec::with_capacity(visible.len().max(1));

    if visible.is_empty() {
        lines.push(Line::from(Span::styled(
            " (empty directory)",
            Style::default().fg(ctx.theme.muted),
        )));
    } else {
        for (row, entry) in visible.iter().enumerate() {
            let index = ctx.model.scroll_offset() + row;
            let is_selected = index == ctx.model.selected();

            let marker = if is_selected { "▶ " } else { "  " };
            let entry_style = if entry.is_dir {
                ctx.theme.directory
            } else {
                ctx.theme.file
            };
            let name = if entry.is_dir {
                format!("{}/", entry.name)
            } else {
                entry.name.clone()
            };

            let mut line = Line::from(vec![
                Span::raw(marker),
                Span::styled(name, entry_style),
            ]);
            if is_selected {
                line = line.style(ctx.theme.selected);
            }
            lines.push(line);
        }
    }

    Paragraph::new(lines).block(block).render(area, buf);
}

fn render_footer(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    buf.set_style(area, ctx.theme.footer);

    // A transient message takes over the footer until it expires
    if let Some(message) = ctx.message {
        let color = match message.level {
            MessageLevel::Info => ctx.theme.success,
            MessageLevel::Error => ctx.theme.error,
        };
        let line = Line::from(Span::styled(
            format!(" {}", message.text),
            Style::default().fg(color),
        ));
        Paragraph::new(line).render(area, buf);
        return;
    }

    let mut spans = Vec::new();
    for (keys, description) in legend(ctx.clone_source.is_some()) {
        spans.push(Span::styled(format!(" {keys}"), ctx.theme.help_key));
        spans.push(Span::styled(format!(" {description} "), ctx.theme.help_desc));
    }
    Paragraph::new(Line::from(spans)).render(area, buf);
}

fn render_help(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let sections = get_help_sections();
    let rows: u16 = sections
        .iter()
        .map(|s| s.bindings.len() as u16 + 2)
        .sum::<u16>()
        + 1;
    let popup = centered_rect(44, rows + 2, area);

    Clear.render(popup, buf);
    buf.set_style(
        popup,
        Style::default()
            .bg(ctx.theme.background)
            .fg(ctx.theme.foreground),
    );

    let mut lines = Vec::new();
    for section in sections {
        lines.push(Line::from(Span::styled(section.title, ctx.theme.title)));
        for binding in section.bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<12}", binding.keys), ctx.theme.help_key),
                Span::styled(binding.description, ctx.theme.help_desc),
            ]));
        }
        lines.push(Line::raw(""));
    }
    lines.push(Line::from(Span::styled(
        "press ? or Esc to close",
        Style::default().fg(ctx.theme.muted),
    )));

    let block = Block::bordered()
        .border_style(ctx.theme.border)
        .title(Span::styled(" Help ", ctx.theme.title));
    Paragraph::new(lines).block(block).render(popup, buf);
}

fn render_path_prompt(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let Some(input) = ctx.input else {
        return;
    };

    let popup = centered_rect(area.width.saturating_sub(8).min(60), 3, area);
    Clear.render(popup, buf);
    buf.set_style(
        popup,
        Style::default()
            .bg(ctx.theme.background)
            .fg(ctx.theme.foreground),
    );

    // Buffer with a block cursor; cursor at end renders over a space
    let buffer = input.buffer();
    let cursor = input.cursor();
    let before = &buffer[..cursor];
    let (at, after) = match buffer[cursor..].chars().next() {
        Some(c) => (c.to_string(), &buffer[cursor + c.len_utf8()..]),
        None => (" ".to_string(), ""),
    };

    let line = Line::from(vec![
        Span::styled("Path: ", ctx.theme.prompt),
        Span::styled(before.to_string(), ctx.theme.input),
        Span::styled(at, ctx.theme.input_cursor),
        Span::styled(after.to_string(), ctx.theme.input),
    ]);

    let block = Block::bordered()
        .border_style(ctx.theme.border)
        .title(Span::styled(" Go to path ", ctx.theme.title));
    Paragraph::new(line).block(block).render(popup, buf);
}

fn render_cloning(ctx: &RenderContext, area: Rect, buf: &mut Buffer) {
    let source = ctx.clone_source.unwrap_or("");
    let width = (source.width() as u16 + 6).clamp(30, area.width.saturating_sub(4));
    let popup = centered_rect(width, 4, area);

    Clear.render(popup, buf);
    buf.set_style(
        popup,
        Style::default()
            .bg(ctx.theme.background)
            .fg(ctx.theme.foreground),
    );

    let lines = vec![
        Line::from(Span::styled(
            "Cloning... please wait",
            Style::default().fg(ctx.theme.info),
        )),
        Line::from(Span::styled(
            source.to_string(),
            Style::default().fg(ctx.theme.muted),
        )),
    ];

    let block = Block::bordered()
        .border_style(ctx.theme.border)
        .title(Span::styled(" Clone ", ctx.theme.title));
    Paragraph::new(lines).block(block).render(popup, buf);
}

/// Center a `width` x `height` rectangle within `area`, clipped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width - w) / 2;
    let y = area.y + (area.height - h) / 2;
    Rect::new(x, y, w, h)
}

/// Truncate a string to `max` display columns, keeping the tail.
fn truncate_left(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut tail = String::new();
    let mut used = 1; // reserve one column for the ellipsis
    for c in s.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        tail.push(c);
    }
    let tail: String = tail.chars().rev().collect();
    format!("…{tail}")
}
