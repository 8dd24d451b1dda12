use super::*;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);
    draw_filter_bar(frame, app, chunks[1]);
    draw_body(frame, app, chunks[2]);
    draw_pagination(frame, app, chunks[3]);
    draw_status(frame, app, chunks[4]);

    if app.active_modal().is_some() {
        modal::draw_modal(frame, app);
    }
}

fn draw_header(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let mut spans = vec![
        Span::styled(
            "User Admin",
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(app.base_url.as_str(), Style::default().fg(Color::Gray)),
    ];
    if *app.table.state() == LoadState::Ready {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} users", app.table.collection().len()),
            Style::default().fg(Color::Green),
        ));
    }
    if let Some(ts) = app.loaded_at {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("updated {} UTC", fmt_clock(ts)),
            Style::default().fg(Color::Gray),
        ));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn draw_filter_bar(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let title_style = if app.filter_editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Filter", title_style));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(inner);

    let fields = [FilterField::Name, FilterField::Code, FilterField::Country];
    for (field, col) in fields.into_iter().zip(cols.iter()) {
        let focused = app.filter_editing && app.filter_focus == field;
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let input = &app.filter_inputs[field as usize];
        let label = format!("{}: ", field.label());
        let cursor_x = col.x + (label.chars().count() + input.cursor) as u16;
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(label, label_style),
                Span::raw(input.as_str()),
            ])),
            *col,
        );
        if focused {
            frame.set_cursor_position((cursor_x, col.y));
        }
    }
}

fn draw_body(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    match app.table.state() {
        LoadState::Loading => {
            draw_message(frame, area, "Users", vec![Line::from("Loading users...")]);
        }
        LoadState::Failed(msg) => {
            draw_message(
                frame,
                area,
                "Error",
                vec![
                    Line::from(Span::styled(msg.as_str(), Style::default().fg(Color::Red))),
                    Line::from(""),
                    Line::from("Press r to retry, q to quit."),
                ],
            );
        }
        LoadState::Ready if app.table.collection().is_empty() => {
            draw_message(
                frame,
                area,
                "Users",
                vec![
                    Line::from("No users yet."),
                    Line::from("Press a to add the first one."),
                ],
            );
        }
        LoadState::Ready if app.table.filtered().is_empty() => {
            draw_message(
                frame,
                area,
                "Users",
                vec![
                    Line::from("No users match the filter."),
                    Line::from("Press r to reset it."),
                ],
            );
        }
        LoadState::Ready => draw_table(frame, app, area),
    }
}

fn draw_table(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let rows = app.table.visible().iter().map(|u| {
        Row::new(vec![
            u.id.to_string(),
            u.name.clone(),
            code_cell(&u.code).to_string(),
            countries_cell(&u.countries),
        ])
    });
    let header = Row::new(vec!["ID", "User Name", "User Code", "Countries"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Percentage(30),
            Constraint::Percentage(20),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title("Users"))
    .row_highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = TableState::default();
    state.select(Some(app.selected));
    frame.render_stateful_widget(table, area, &mut state);
}

fn draw_message(
    frame: &mut ratatui::Frame,
    area: ratatui::layout::Rect,
    title: &str,
    lines: Vec<Line<'_>>,
) {
    let block = Block::default().borders(Borders::ALL).title(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let height = lines.len() as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .wrap(Wrap { trim: false }),
        centered(inner, inner.width, height),
    );
}

/// Only drawn when there is more than one page.
fn draw_pagination(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    if *app.table.state() != LoadState::Ready || app.table.total_pages() <= 1 {
        return;
    }
    let len = app.table.filtered().len();
    let pager = app.table.pager();
    let Some((first, last, total)) = pager.showing(len) else {
        return;
    };

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(32), Constraint::Min(0)])
        .split(area);
    frame.render_widget(
        Paragraph::new(format!("Showing {} to {} of {}", first, last, total)),
        cols[0],
    );
    frame.render_widget(
        Paragraph::new(page_buttons_line(
            &pager.buttons(len),
            pager.page(),
            pager.has_prev(),
            pager.has_next(len),
        )),
        cols[1],
    );
}

fn draw_status(frame: &mut ratatui::Frame, app: &App, area: ratatui::layout::Rect) {
    let hint = if app.filter_editing {
        "Tab next field  Enter apply  Ctrl-R reset  Esc done"
    } else {
        "a add  Enter view  e edit  d delete  / filter  r reset  </> page  g reload  q quit"
    };
    let mut spans = Vec::new();
    if let Some(status) = &app.status {
        spans.push(Span::styled(status.as_str(), Style::default().fg(Color::Cyan)));
        spans.push(Span::raw("  "));
    }
    spans.push(Span::styled(hint, Style::default().fg(Color::Gray)));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
