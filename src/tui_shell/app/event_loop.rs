use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if app.take_pending_load() {
            app.load();
            continue;
        }

        if event::poll(Duration::from_millis(250)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

pub(in crate::tui_shell) fn handle_key(app: &mut App, key: KeyEvent) {
    if app.active_modal().is_some() {
        modal::handle_modal_key(app, key);
        return;
    }
    if app.filter_editing {
        handle_filter_key(app, key);
        return;
    }

    match app.table.state() {
        LoadState::Loading => {
            if key.code == KeyCode::Char('q') {
                app.quit = true;
            }
            return;
        }
        LoadState::Failed(_) => {
            match key.code {
                KeyCode::Char('r') => app.reload(),
                KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
                _ => {}
            }
            return;
        }
        LoadState::Ready => {}
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,

        KeyCode::Char('r') => app.reset_filter(),
        KeyCode::Char('g') | KeyCode::F(5) => app.reload(),

        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Left | KeyCode::Char('h') => app.prev_page(),
        KeyCode::Right | KeyCode::Char('l') => app.next_page(),

        KeyCode::Char('a') => app.open_add(),
        KeyCode::Enter | KeyCode::Char('v') => app.open_view_selected(),
        KeyCode::Char('e') => app.open_edit_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_selected(),

        KeyCode::Char('/') => {
            app.filter_editing = true;
            app.filter_focus = FilterField::Name;
        }

        _ => {}
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    let idx = app.filter_focus as usize;
    match key.code {
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => app.reset_filter(),
        KeyCode::Esc => app.filter_editing = false,
        KeyCode::Enter => app.apply_filter(),
        KeyCode::Tab => app.filter_focus = app.filter_focus.next(),
        KeyCode::BackTab => app.filter_focus = app.filter_focus.prev(),
        KeyCode::Backspace => app.filter_inputs[idx].backspace(),
        KeyCode::Delete => app.filter_inputs[idx].delete(),
        KeyCode::Left => app.filter_inputs[idx].move_left(),
        KeyCode::Right => app.filter_inputs[idx].move_right(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.filter_inputs[idx].insert_char(c)
        }
        _ => {}
    }
}
