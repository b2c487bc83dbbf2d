use rusqlite::Connection;
use anyhow::Result;

pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch("
        -- Origin-scoped key/value storage (no expiry)
        CREATE TABLE IF NOT EXISTS storage (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at INTEGER NOT NULL
        );
    ")?;
    Ok(())
}
