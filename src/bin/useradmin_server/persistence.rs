use std::path::Path;

use super::*;

/// Reads the db file, creating it with an empty `users` collection first if
/// it does not exist.
pub(super) fn load_or_init_db(path: &Path) -> Result<Db> {
    if !path.exists() {
        let db = Db::default();
        persist_db(path, &db).context("create db file")?;
        return Ok(db);
    }

    let bytes = std::fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let db: Db =
        serde_json::from_slice(&bytes).with_context(|| format!("parse {}", path.display()))?;
    Ok(db)
}

pub(super) fn persist_db(path: &Path, db: &Db) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(db).context("serialize db")?;
    useradmin::config::write_atomic(path, &bytes)?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/bin/useradmin_server/persistence_tests.rs"]
mod tests;
