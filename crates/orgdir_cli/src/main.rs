//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `orgdir_core` linkage and
//!   migration/seed health.
//! - Keep output deterministic for quick local sanity checks.

use orgdir_core::db::open_db_in_memory;
use rusqlite::Connection;
use std::error::Error;

fn main() {
    if let Err(err) = run() {
        eprintln!("orgdir smoke probe failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("orgdir_core version={}", orgdir_core::core_version());

    let conn = open_db_in_memory()?;
    let schema_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    println!("schema_version={schema_version}");

    for table in ["countries", "cities", "employees"] {
        println!("{table}={}", count_rows(&conn, table)?);
    }

    Ok(())
}

fn count_rows(conn: &Connection, table: &str) -> Result<i64, rusqlite::Error> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
}
