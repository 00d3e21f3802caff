//! TUI views.
//!
//! Renders the browse list, search bar with suggestion dropdown, detail
//! overlay, and help overlay. Everything rendered here is derived from
//! `App` state; there is no other rendering side channel.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

use super::app::App;
use super::state::Mode;
use crate::catalog::Tool;
use crate::i18n;
use crate::theme::Palette;

/// Render the whole frame.
pub fn render(app: &App, frame: &mut Frame) {
    let palette = app.theme().palette();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(3), // search bar
            Constraint::Min(3),    // tool list
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0], &palette);
    render_search_bar(app, frame, chunks[1], &palette);
    render_tool_list(app, frame, chunks[2], &palette);
    render_footer(app, frame, chunks[3], &palette);

    if app.state().mode == Mode::Search && !app.state().suggestions.is_empty() {
        render_suggestions(app, frame, chunks[1], &palette);
    }

    match app.state().mode {
        Mode::Detail => render_detail(app, frame, &palette),
        Mode::Help => render_help(app, frame, &palette),
        _ => {}
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let pack = app.pack();
    let count = app.state().visible.len();

    let mut spans = vec![
        Span::styled(
            pack.get("app-title"),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} {}", count, pack.get("tools-count")),
            Style::default().fg(palette.text),
        ),
    ];

    let filter = &app.state().filter;
    if let Some(category) = &filter.category {
        spans.push(Span::styled(
            format!("  [{}]", category),
            Style::default().fg(palette.category),
        ));
    }
    if let Some(platform) = &filter.platform {
        spans.push(Span::styled(format!("  [{}]", platform), Style::default().fg(palette.badge)));
    }
    if let Some(developer) = &filter.developer {
        spans.push(Span::styled(format!("  [{}]", developer), Style::default().fg(palette.badge)));
    }
    if filter.favorites_only {
        spans.push(Span::styled(
            format!("  ♥ {}", pack.get("favorites")),
            Style::default().fg(palette.favorite),
        ));
    }

    spans.push(Span::styled(
        format!("  {}: {}  {}: {}", pack.get("theme"), app.theme(), pack.get("language"), app.language()),
        Style::default().fg(palette.dim),
    ));

    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_search_bar(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let pack = app.pack();
    let content = app.state().search.content();

    let text = if content.is_empty() && app.state().mode != Mode::Search {
        Span::styled(pack.get("search"), Style::default().fg(palette.dim))
    } else {
        Span::styled(content, Style::default().fg(palette.text))
    };

    let style = if app.state().mode == Mode::Search {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.dim)
    };

    let search = Paragraph::new(Line::from(text)).block(Block::default().borders(Borders::ALL).border_style(style));
    frame.render_widget(search, area);
}

fn render_suggestions(app: &App, frame: &mut Frame, search_area: Rect, palette: &Palette) {
    let suggestions = &app.state().suggestions;
    let height = suggestions.len() as u16 + 2;
    // Keep the dropdown inside the frame on short terminals
    let area = Rect {
        x: search_area.x + 1,
        y: search_area.y + search_area.height.saturating_sub(1),
        width: search_area.width.saturating_sub(2).min(40),
        height,
    }
    .intersection(frame.area());

    let items: Vec<ListItem> = suggestions
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let style = if app.state().suggestion_selected == Some(i) {
                Style::default().bg(palette.highlight_bg).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(name.as_str()).style(style)
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    frame.render_widget(Clear, area);
    frame.render_widget(list, area);
}

fn render_tool_list(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    if app.state().visible.is_empty() {
        render_empty_state(app, frame, area, palette);
        return;
    }

    let items: Vec<ListItem> = app
        .state()
        .visible
        .iter()
        .enumerate()
        .filter_map(|(i, id)| {
            app.store()
                .get(id)
                .map(|tool| format_tool_row(tool, app, i, palette))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn format_tool_row<'a>(tool: &'a Tool, app: &App, index: usize, palette: &Palette) -> ListItem<'a> {
    let selected = app.state().selected == Some(index);
    let favorite = app.store().is_favorite(&tool.id);

    let marker = if favorite { "♥ " } else { "  " };
    let usage = if tool.personal_usage { "*" } else { "" };
    let description = tool.short_description.get(app.language().code());

    let style = if selected {
        Style::default().bg(palette.highlight_bg).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(palette.favorite)),
        Span::styled(format!("{}{}", tool.name, usage), Style::default().fg(palette.text)),
        Span::styled(format!("  [{}]", tool.category), Style::default().fg(palette.category)),
        Span::styled(format!("  {}", description), Style::default().fg(palette.dim)),
    ]);

    ListItem::new(line).style(style)
}

fn render_empty_state(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let pack = app.pack();
    // Favorites-only gets its own message, matching the catalog's two
    // distinct empty states
    let (title, desc) = if app.state().filter.favorites_only {
        (pack.get("no-favorites-title"), pack.get("no-favorites-desc"))
    } else {
        (pack.get("no-results-title"), pack.get("no-results-desc"))
    };

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(desc, Style::default().fg(palette.dim))),
    ];

    let empty = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(empty, area);
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect, palette: &Palette) {
    let text = match &app.state().status_message {
        Some(message) => message.clone(),
        None => match app.state().mode {
            Mode::Search => "enter: apply  esc: back  ↑/↓: suggestions".to_string(),
            Mode::Detail => "←/→: screenshots  f: favorite  esc: close".to_string(),
            Mode::Help => "esc: close".to_string(),
            Mode::Browse => "/: search  enter: details  f: favorite  F: favorites  c/p/d: filters  t: theme  l: language  ?: help  q: quit".to_string(),
        },
    };

    let footer = Paragraph::new(Span::styled(text, Style::default().fg(palette.dim)));
    frame.render_widget(footer, area);
}

fn render_detail(app: &App, frame: &mut Frame, palette: &Palette) {
    let Some(detail) = &app.state().detail else {
        return;
    };
    let Some(tool) = app.store().get(&detail.tool_id) else {
        return;
    };

    let pack = app.pack();
    let lang = app.language();
    let area = centered_rect(frame.area(), 80, 80);

    let mut lines = vec![
        Line::from(Span::styled(
            tool.name.clone(),
            Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(format!("{}: ", pack.get("developer")), Style::default().fg(palette.dim)),
            Span::raw(tool.developer.clone()),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", pack.get("category")), Style::default().fg(palette.dim)),
            Span::styled(tool.category.clone(), Style::default().fg(palette.category)),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", pack.get("release-date")), Style::default().fg(palette.dim)),
            Span::raw(i18n::format_date(&tool.release_date, lang)),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", pack.get("license")), Style::default().fg(palette.dim)),
            Span::raw(tool.license.clone()),
        ]),
        Line::from(vec![
            Span::styled(format!("{}: ", pack.get("platforms")), Style::default().fg(palette.dim)),
            Span::styled(tool.platforms.join(", "), Style::default().fg(palette.badge)),
        ]),
    ];

    if !tool.pricing.is_empty() {
        let badges: Vec<String> = tool
            .pricing
            .iter()
            .map(|price| pack.get(&pricing_key(price)).to_string())
            .collect();
        lines.push(Line::from(vec![
            Span::styled(format!("{}: ", pack.get("pricing")), Style::default().fg(palette.dim)),
            Span::styled(badges.join(", "), Style::default().fg(palette.badge)),
        ]));
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::raw(tool.description.get(lang.code()).to_string())));

    if !tool.links.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            pack.get("links").to_string(),
            Style::default().fg(palette.dim),
        )));
        for (kind, url) in &tool.links {
            lines.push(Line::from(vec![
                Span::styled(format!("  {}: ", pack.get(kind)), Style::default().fg(palette.accent)),
                Span::raw(url.clone()),
            ]));
        }
    }

    if !tool.screenshots.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} {} / {}: ", pack.get("screenshots"), detail.screenshot_index + 1, tool.screenshots.len()),
                Style::default().fg(palette.dim),
            ),
            Span::raw(tool.screenshots[detail.screenshot_index].clone()),
        ]));
    }

    let favorite_marker = if app.store().is_favorite(&tool.id) { " ♥ " } else { " " };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{}{}", favorite_marker, tool.name));

    let content = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(Clear, area);
    frame.render_widget(content, area);
}

fn render_help(app: &App, frame: &mut Frame, palette: &Palette) {
    let pack = app.pack();
    let area = centered_rect(frame.area(), 60, 60);

    let bindings = [
        ("/", "search"),
        ("enter", "details"),
        ("f", "favorite"),
        ("F", pack.get("favorites")),
        ("c", pack.get("category")),
        ("p", pack.get("platforms")),
        ("d", pack.get("developer")),
        ("x", "reset"),
        ("t", pack.get("theme")),
        ("l", pack.get("language")),
        ("q", pack.get("quit")),
    ];

    let lines: Vec<Line> = bindings
        .iter()
        .map(|(key, label)| {
            Line::from(vec![
                Span::styled(format!("  {:<6}", key), Style::default().fg(palette.accent)),
                Span::styled(label.to_string(), Style::default().fg(palette.text)),
            ])
        })
        .collect();

    let help = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(format!(" {} ", pack.get("help"))));
    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

/// Translation key for a pricing tag, e.g. "One-time payment" → "one-time-payment".
fn pricing_key(price: &str) -> String {
    price.to_lowercase().replace(char::is_whitespace, "-")
}

/// Centered sub-rectangle taking the given percentages of the frame.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
