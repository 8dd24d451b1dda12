use super::*;
use crate::cli_commands::users::{AddArgs, EditArgs, ListArgs};

pub(super) fn handle_list_command(ctx: &RunContext, args: ListArgs) -> Result<()> {
    let (_, client) = ctx.client()?;
    let mut table = UserTable::new(client);
    table.load()?;

    let filter = UserFilter::new(
        args.name.as_deref().unwrap_or(""),
        args.code.as_deref().unwrap_or(""),
        args.country.as_deref().unwrap_or(""),
    );
    // A blank filter would still drop records without countries.
    if !filter.is_blank() {
        table.apply_filter(filter);
    }

    if args.page != 1 && !table.go_to_page(args.page) {
        anyhow::bail!(
            "page {} out of range (1..={})",
            args.page,
            table.total_pages().max(1)
        );
    }

    if args.json {
        return print_json(table.visible(), "users");
    }

    if table.filtered().is_empty() {
        if table.collection().is_empty() {
            println!("No users");
        } else {
            println!("No users match the filter");
        }
        return Ok(());
    }

    println!("{:<8} {:<24} {:<12} COUNTRIES", "ID", "USER NAME", "USER CODE");
    for u in table.visible() {
        println!(
            "{:<8} {:<24} {:<12} {}",
            u.id.to_string(),
            u.name,
            if u.code.is_empty() { "-" } else { u.code.as_str() },
            if u.countries.is_empty() {
                "No countries".to_string()
            } else {
                u.countries.join(", ")
            }
        );
    }
    if table.total_pages() > 1
        && let Some((first, last, total)) = table.pager().showing(table.filtered().len())
    {
        println!(
            "Showing {} to {} of {} (page {}/{})",
            first,
            last,
            total,
            table.page(),
            table.total_pages()
        );
    }
    Ok(())
}

pub(super) fn handle_show_command(ctx: &RunContext, id: &str, json: bool) -> Result<()> {
    let (_, client) = ctx.client()?;
    let user = client
        .get_user(&UserId::parse(id))
        .with_context(|| format!("fetch user {}", id))?;

    if json {
        return print_json(&user, "user");
    }
    println!("id: {}", user.id);
    println!("name: {}", user.name);
    println!("code: {}", if user.code.is_empty() { "-" } else { user.code.as_str() });
    if user.countries.is_empty() {
        println!("countries: No countries");
    } else {
        println!("countries: {}", user.countries.join(", "));
    }
    Ok(())
}

pub(super) fn handle_add_command(ctx: &RunContext, args: AddArgs) -> Result<()> {
    let (cfg, client) = ctx.client()?;
    let mut dialog = UserDialog::default();
    dialog.open_add();
    dialog.set_name(&args.name);
    dialog.set_code(&args.code);
    for country in &args.countries {
        require_country(&cfg.countries, country)?;
        if !dialog.draft().has_country(country) {
            dialog.toggle_country(country);
        }
    }
    let submission = dialog.submit()?;

    let mut table = UserTable::new(client);
    let user = table.dispatch(submission)?;
    if args.json {
        return print_json(&user, "user");
    }
    println!("Created user {}", user.id);
    Ok(())
}

pub(super) fn handle_edit_command(ctx: &RunContext, args: EditArgs) -> Result<()> {
    let (cfg, client) = ctx.client()?;
    let mut table = UserTable::new(client);
    table.load()?;
    let user = find_user(&table, &args.id)?.clone();

    let mut dialog = UserDialog::default();
    dialog.open_edit(&user);
    if args.clear {
        dialog.clear_draft();
    }
    if let Some(name) = &args.name {
        dialog.set_name(name);
    }
    if let Some(code) = &args.code {
        dialog.set_code(code);
    }
    for country in &args.toggle_countries {
        require_country(&cfg.countries, country)?;
        dialog.toggle_country(country);
    }
    let submission = dialog.submit()?;

    let saved = table.dispatch(submission)?;
    if args.json {
        return print_json(&saved, "user");
    }
    println!("Updated user {}", saved.id);
    Ok(())
}

pub(super) fn handle_delete_command(ctx: &RunContext, id: &str, yes: bool) -> Result<()> {
    let (_, client) = ctx.client()?;
    let mut table = UserTable::new(client);
    table.load()?;
    let user = find_user(&table, id)?.clone();

    let mut confirm = DeleteConfirm::default();
    confirm.open(&user);
    if !yes {
        confirm.cancel();
        anyhow::bail!(
            "refusing to delete {} ({}) without --yes; this action cannot be undone",
            user.name,
            user.id
        );
    }
    let Some(id) = confirm.confirm() else {
        return Ok(());
    };
    table.delete(&id)?;
    println!("Deleted user {}", id);
    Ok(())
}

fn find_user<'a, S: useradmin::admin::UserStore>(
    table: &'a UserTable<S>,
    raw_id: &str,
) -> Result<&'a User> {
    table
        .find(&UserId::parse(raw_id))
        .with_context(|| format!("user {} not found", raw_id))
}

fn require_country(catalog: &CountryCatalog, country: &str) -> Result<()> {
    if !catalog.contains(country) {
        anyhow::bail!(
            "unknown country {:?} (expected one of: {})",
            country,
            catalog.names().join(", ")
        );
    }
    Ok(())
}
