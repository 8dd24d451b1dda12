use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::admin::{NoticeKind, UserDialog};
use crate::model::User;

use super::super::view::{centered, code_cell};
use super::super::{ActiveModal, App, FormField};

pub(in crate::tui_shell) fn draw_modal(frame: &mut ratatui::Frame, app: &App) {
    match app.active_modal() {
        Some(ActiveModal::Notice) => draw_notice(frame, app),
        Some(ActiveModal::ConfirmDelete) => draw_confirm_delete(frame, app),
        Some(ActiveModal::Details) => {
            if let Some(user) = app.view.shown() {
                draw_details(frame, user);
            }
        }
        Some(ActiveModal::ViewEditor) => draw_form(frame, app, app.view.editor()),
        Some(ActiveModal::Form) => draw_form(frame, app, &app.form),
        None => {}
    }
}

fn modal_box(frame: &mut ratatui::Frame, width: u16, height: u16, title: Span<'_>) -> Rect {
    let area = centered(frame.area(), width, height);
    frame.render_widget(Clear, area);
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

fn hint(text: &str) -> Line<'_> {
    Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
}

fn draw_notice(frame: &mut ratatui::Frame, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };
    let (title, color) = match notice.kind {
        NoticeKind::Success => ("Success", Color::Green),
        NoticeKind::Error => ("Error", Color::Red),
    };
    let inner = modal_box(
        frame,
        60,
        7,
        Span::styled(title, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    );
    let lines = vec![
        Line::from(notice.message.as_str()),
        Line::from(""),
        hint("Enter to dismiss"),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_confirm_delete(frame: &mut ratatui::Frame, app: &App) {
    let Some(user) = app.delete.target() else {
        return;
    };
    let inner = modal_box(
        frame,
        56,
        8,
        Span::styled("Delete User", Style::default().fg(Color::Red)),
    );
    let lines = vec![
        Line::from(vec![
            Span::raw("Are you sure you want to delete "),
            Span::styled(
                user.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("?"),
        ]),
        Line::from("This action cannot be undone."),
        Line::from(""),
        hint("y delete  n cancel"),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn draw_details(frame: &mut ratatui::Frame, user: &User) {
    let label = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(vec![Span::styled("ID         ", label), Span::raw(user.id.to_string())]),
        Line::from(vec![Span::styled("User Name  ", label), Span::raw(user.name.as_str())]),
        Line::from(vec![
            Span::styled("User Code  ", label),
            Span::raw(code_cell(&user.code)),
        ]),
        Line::from(Span::styled("Countries", label)),
    ];
    if user.countries.is_empty() {
        lines.push(Line::from("  No countries"));
    } else {
        lines.extend(user.countries.iter().map(|c| Line::from(format!("  {}", c))));
    }
    lines.push(Line::from(""));
    lines.push(hint("e edit  Esc close"));

    let height = lines.len() as u16 + 2;
    let inner = modal_box(frame, 50, height, Span::raw("User Details"));
    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_form(frame: &mut ratatui::Frame, app: &App, dialog: &UserDialog) {
    let state = &app.form_state;
    let title = if dialog.is_edit() { "Edit User" } else { "Add User" };
    let height = app.catalog.len() as u16 + 13;
    let inner = modal_box(frame, 60, height, Span::raw(title));

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(state.name.as_str()).block(field_block(
            "User Name *".to_string(),
            state.focus == FormField::Name,
        )),
        parts[0],
    );
    frame.render_widget(
        Paragraph::new(state.code.as_str()).block(field_block(
            "User Code".to_string(),
            state.focus == FormField::Code,
        )),
        parts[1],
    );

    let draft = dialog.draft();
    let lines: Vec<Line> = app
        .catalog
        .names()
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mark = if draft.has_country(name) { "[x]" } else { "[ ]" };
            let text = format!("{} {}", mark, name);
            if state.focus == FormField::Countries && i == state.country_cursor {
                Line::from(Span::styled(text, Style::default().bg(Color::DarkGray)))
            } else {
                Line::from(text)
            }
        })
        .collect();
    let countries_title = format!("Countries ({} selected)", draft.countries.len());
    frame.render_widget(
        Paragraph::new(lines).block(field_block(
            countries_title,
            state.focus == FormField::Countries,
        )),
        parts[2],
    );

    let error = state.error.as_deref().unwrap_or("");
    frame.render_widget(
        Paragraph::new(Span::styled(error, Style::default().fg(Color::Red))),
        parts[3],
    );

    let keys = if dialog.is_edit() {
        "Tab field  Space toggle  Enter save  Ctrl-L clear  Esc cancel"
    } else {
        "Tab field  Space toggle  Enter save  Esc cancel"
    };
    frame.render_widget(Paragraph::new(hint(keys)), parts[4]);

    let cursor_target = match state.focus {
        FormField::Name => Some((parts[0], state.name.cursor)),
        FormField::Code => Some((parts[1], state.code.cursor)),
        FormField::Countries => None,
    };
    if let Some((area, cursor)) = cursor_target {
        frame.set_cursor_position((area.x + 1 + cursor as u16, area.y + 1));
    }
}

fn field_block(title: String, focused: bool) -> Block<'static> {
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    Block::default().borders(Borders::ALL).title(title).border_style(style)
}
