//! UI rendering

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use shelf_core::html::{NO_RESULTS_HINT, NO_RESULTS_TITLE};
use shelf_core::views::COPIED_LABEL;
use shelf_core::Surface;

use super::app::{App, FormField, InputMode};

/// Main UI rendering function
pub fn draw(frame: &mut Frame, app: &App) {
    // Search box on top, status bar at the bottom
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_search_box(frame, app, outer_chunks[0]);

    // The detail pane only exists while the fragment names a record
    if app.surface().detail.is_some() {
        let pane_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(outer_chunks[1]);
        draw_results_pane(frame, app, pane_chunks[0]);
        draw_detail_pane(frame, app, pane_chunks[1]);
    } else {
        draw_results_pane(frame, app, outer_chunks[1]);
    }

    match app.input_mode {
        InputMode::Goto => draw_goto_input(frame, app, outer_chunks[2]),
        _ => draw_status_bar(frame, app, outer_chunks[2]),
    }

    if app.input_mode == InputMode::Form {
        draw_form_popup(frame, app);
    }

    if app.show_help {
        draw_help_overlay(frame);
    }

    if let Some(message) = app.surface().current_alert() {
        draw_alert(frame, message);
    }
}

/// Draw the search box (top)
fn draw_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let is_active = app.input_mode == InputMode::Search;

    let border_style = if is_active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let location = match app.surface().fragment() {
        Some(fragment) => format!(" Search  #{} ", fragment),
        None => " Search ".to_string(),
    };

    let block = Block::default()
        .title(location)
        .borders(Borders::ALL)
        .border_style(border_style);

    let text = if app.surface().search.is_empty() && !is_active {
        Line::from(Span::styled(
            "Search by title, author, or ISBN",
            Style::default().add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(app.surface().search.as_str())
    };

    frame.render_widget(Paragraph::new(text).block(block), area);

    if is_active {
        let cursor_x = cursor_offset(
            area.x.saturating_add(1),
            app.surface().search.chars().count(),
            area.right().saturating_sub(2),
        );
        frame.set_cursor_position((cursor_x, area.y.saturating_add(1)));
    }
}

/// Draw the results listing
fn draw_results_pane(frame: &mut Frame, app: &App, area: Rect) {
    let surface = app.surface();
    let is_active = app.input_mode == InputMode::Normal && surface.detail.is_none();

    let border_style = if is_active {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let block = Block::default()
        .title(format!(" Results ({}) ", surface.cards.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if surface.cards.is_empty() {
        let placeholder = vec![
            Line::from(""),
            Line::from(Span::styled(
                NO_RESULTS_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                NO_RESULTS_HINT,
                Style::default().add_modifier(Modifier::DIM),
            )),
        ];
        let paragraph = Paragraph::new(placeholder)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
        return;
    }

    let max_len = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = surface
        .cards
        .iter()
        .map(|card| {
            let label = surface.copy_label(&card.id);
            let label_style = if label == COPIED_LABEL {
                Style::default().fg(Color::Green)
            } else if card.has_isbn() {
                Style::default().fg(Color::Cyan)
            } else {
                Style::default().add_modifier(Modifier::DIM)
            };

            ListItem::new(vec![
                Line::from(truncate(&card.title, max_len)),
                Line::from(Span::styled(
                    truncate(&card.meta, max_len),
                    Style::default().add_modifier(Modifier::DIM),
                )),
                Line::from(vec![
                    Span::styled(format!("[{}]", label), label_style),
                    Span::styled(
                        format!("  #book-{}", card.id),
                        Style::default().add_modifier(Modifier::DIM),
                    ),
                ]),
            ])
        })
        .collect();

    let highlight_style = if is_active {
        Style::default()
            .add_modifier(Modifier::BOLD)
            .add_modifier(Modifier::REVERSED)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(highlight_style);

    let mut state = ListState::default();
    state.select(Some(surface.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Draw the detail pane of the open record
fn draw_detail_pane(frame: &mut Frame, app: &App, area: Rect) {
    let Some(detail) = app.surface().detail.as_ref() else {
        return;
    };

    let block = Block::default()
        .title(" Detail ")
        .borders(Borders::ALL)
        .border_style(Style::default().add_modifier(Modifier::BOLD));

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let dim = Style::default().add_modifier(Modifier::DIM);

    let mut lines = vec![
        Line::from(Span::styled("← Back to results (b)", dim)),
        Line::from(""),
        Line::from(Span::styled(detail.title.as_str(), bold)),
        Line::from(Span::styled(detail.meta.as_str(), dim)),
        Line::from(""),
        Line::from(vec![
            Span::styled("ISBN: ", bold),
            Span::raw(detail.isbn.as_str()),
        ]),
    ];

    if !detail.cover.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Cover: ", bold),
            Span::styled(detail.cover.as_str(), dim),
        ]));
    }

    lines.push(Line::from(""));
    for paragraph in detail.description.lines() {
        lines.push(Line::from(paragraph));
    }

    if let Some(url) = &detail.external_url {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("View on Open Library (o): ", bold),
            Span::styled(url.as_str(), Style::default().fg(Color::Cyan)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true })
        .scroll((app.surface().detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

/// Draw the status bar at the bottom
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let content = if let Some(msg) = &app.status_message {
        msg.clone()
    } else {
        match app.input_mode {
            InputMode::Search => "type to search  Enter/Esc:done".to_string(),
            InputMode::Form => "Tab:next field  Enter:add  Esc:cancel".to_string(),
            _ if app.route().is_detail() => {
                "b:back  y:copy  o:open  /:search  ?:help  q:quit".to_string()
            }
            _ => "/:search  Enter:open  y:copy  a:add  g:goto  c:clear  ?:help  q:quit"
                .to_string(),
        }
    };

    let paragraph = Paragraph::new(content).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Draw goto input at the bottom
fn draw_goto_input(frame: &mut Frame, app: &App, area: Rect) {
    let prefix = "go to ";
    let input = &app.goto_input;

    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(Color::Yellow)),
        Span::raw(input.as_str()),
    ]);

    frame.render_widget(Paragraph::new(line), area);

    let cursor_x = cursor_offset(
        area.x,
        prefix.len() + input.chars().count(),
        area.right().saturating_sub(1),
    );
    frame.set_cursor_position((cursor_x, area.y));
}

/// Draw the add-book form as a centered popup
fn draw_form_popup(frame: &mut Frame, app: &App) {
    let popup_area = centered(frame.area(), 60, FormField::ALL.len() as u16 + 6);

    frame.render_widget(Clear, popup_area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Add a sample book",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    let mut cursor = None;
    for field in FormField::ALL.iter() {
        let focused = *field == app.form_field;
        let label = format!("{:>10}: ", field.label());
        let value = app.form_value(*field);

        let label_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().add_modifier(Modifier::DIM)
        };

        if focused {
            cursor = Some((label.chars().count() + value.chars().count(), lines.len()));
        }

        lines.push(Line::from(vec![
            Span::styled(label, label_style),
            Span::raw(value),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Tab:next  Enter:add  Esc:cancel",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let block = Block::default()
        .title(" Add Book ")
        .borders(Borders::ALL)
        .border_style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);

    if let Some((x, row)) = cursor {
        let y = cursor_offset(
            popup_area.y.saturating_add(1),
            row,
            popup_area.bottom().saturating_sub(2),
        );
        let x = cursor_offset(
            popup_area.x.saturating_add(1),
            x,
            popup_area.right().saturating_sub(2),
        );
        frame.set_cursor_position((x, y));
    }
}

/// Draw help overlay
fn draw_help_overlay(frame: &mut Frame) {
    let popup_area = centered(frame.area(), 50, 22);

    frame.render_widget(Clear, popup_area);

    let help_text = vec![
        Line::from(vec![Span::styled(
            "Keyboard Shortcuts",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from("Navigation:"),
        Line::from("  j/k, ↑/↓    Move up/down"),
        Line::from("  Home/G      Jump to first/last book"),
        Line::from("  Enter       Open book"),
        Line::from("  b, Esc      Back to results"),
        Line::from("  PgUp/PgDn   Scroll detail"),
        Line::from(""),
        Line::from("Commands:"),
        Line::from("  /           Search"),
        Line::from("  y           Copy ISBN"),
        Line::from("  o           Open external page"),
        Line::from("  c           Clear search"),
        Line::from("  a           Add book"),
        Line::from("  g           Go to #book-<id>"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
}

/// Draw a blocking alert
fn draw_alert(frame: &mut Frame, message: &str) {
    let popup_area = centered(frame.area(), 50, 7);

    frame.render_widget(Clear, popup_area);

    let text = vec![
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to continue",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Alert ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

    let paragraph = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}

/// Centered popup area of at most `width` x `height`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(area.width.saturating_sub(4));
    let popup_height = height.min(area.height.saturating_sub(4));
    let popup_x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

/// `start` moved right by `offset` cells, never past `last`
fn cursor_offset(start: u16, offset: usize, last: u16) -> u16 {
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    start.saturating_add(offset).min(last)
}

/// Truncate to `max_len` characters with an ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
