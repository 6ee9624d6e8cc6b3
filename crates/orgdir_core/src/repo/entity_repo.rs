//! Generic entity repository over SQLite.
//!
//! # Responsibility
//! - Provide uniform CRUD and filtered-search access for any entity type
//!   implementing the [`Entity`] capability.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Identity is assigned by the store on `create` and never reassigned.
//! - Soft delete only flips the tombstone flag; tombstoned rows stay
//!   visible to every read operation.
//! - Every write is a single immediate execute; no retries, no
//!   cross-operation transactions.

use crate::db::migrations::latest_version;
use crate::db::DbError;
use crate::model::EntityId;
use rusqlite::types::Value;
use rusqlite::{params_from_iter, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entity persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    /// Caller misuse: identity missing where required, or already assigned.
    InvalidArgument(&'static str),
    /// Lookup by identity yielded no row.
    NotFound {
        entity: &'static str,
        id: EntityId,
    },
    /// Underlying store rejected the operation.
    Db(DbError),
    /// Persisted data cannot be converted to a valid entity.
    InvalidData(String),
    /// Connection schema is not at the expected migrated version.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Required table is missing.
    MissingRequiredTable(&'static str),
    /// Required column is missing from the expected table.
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidArgument(message) => write!(f, "invalid argument: {message}"),
            Self::NotFound { entity, id } => write!(f, "{entity} not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted row: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence capability every repository-managed entity provides.
///
/// The associated constants bind an entity type to its table so that one
/// generic repository serves all entity types; nothing here names a
/// concrete entity.
pub trait Entity: Sized {
    /// Backing table name.
    const TABLE: &'static str;
    /// Entity label used in error reporting.
    const KIND: &'static str;
    /// Insert/update column order, excluding `id`.
    const DATA_COLUMNS: &'static [&'static str];
    /// Name-like column targeted by substring search.
    const SEARCH_COLUMN: &'static str;

    /// Store-assigned identity, `None` before the first persist.
    fn id(&self) -> Option<EntityId>;
    /// Records the identity assigned by the store.
    fn assign_id(&mut self, id: EntityId);
    /// Bind values matching [`Entity::DATA_COLUMNS`] order.
    fn data_values(&self) -> Vec<Value>;
    /// Decodes one row into an entity.
    fn from_row(row: &Row<'_>) -> RepoResult<Self>;
}

/// Generic SQLite-backed repository, parameterized over the entity type.
pub struct SqliteRepository<'conn, T: Entity> {
    conn: &'conn Connection,
    _entity: PhantomData<T>,
}

impl<'conn, T: Entity> SqliteRepository<'conn, T> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready::<T>(conn)?;
        Ok(Self {
            conn,
            _entity: PhantomData,
        })
    }

    /// Persists a new entity and assigns its identity as a side effect.
    pub fn create(&self, entity: &mut T) -> RepoResult<EntityId> {
        if entity.id().is_some() {
            return Err(RepoError::InvalidArgument(
                "create requires an entity without an assigned id",
            ));
        }

        let placeholders = (1..=T::DATA_COLUMNS.len())
            .map(|position| format!("?{position}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "INSERT INTO {} ({}) VALUES ({});",
            T::TABLE,
            T::DATA_COLUMNS.join(", "),
            placeholders
        );
        self.conn
            .execute(&sql, params_from_iter(entity.data_values()))?;

        let id = self.conn.last_insert_rowid();
        entity.assign_id(id);
        Ok(id)
    }

    /// Physically removes the entity's row.
    pub fn delete(&self, entity: &T) -> RepoResult<()> {
        let id = require_id(entity, "delete requires an entity with an assigned id")?;
        let changed = self
            .conn
            .execute(&format!("DELETE FROM {} WHERE id = ?1;", T::TABLE), [id])?;

        if changed == 0 {
            return Err(not_found::<T>(id));
        }

        Ok(())
    }

    /// Returns all rows of the entity type, tombstoned rows included, in
    /// store scan order.
    pub fn get_all(&self) -> RepoResult<Vec<T>> {
        self.query_rows(&format!("{};", select_sql::<T>()), Vec::new())
    }

    /// Returns the single entity with the given identity.
    pub fn get_by_id(&self, id: EntityId) -> RepoResult<T> {
        let sql = format!("{} WHERE id = ?1;", select_sql::<T>());
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query([id])?;

        match rows.next()? {
            Some(row) => T::from_row(row),
            None => Err(not_found::<T>(id)),
        }
    }

    /// Persists all data columns of the given entity over the existing row.
    pub fn update(&self, entity: &T) -> RepoResult<()> {
        let id = require_id(entity, "update requires an entity with an assigned id")?;

        let assignments = T::DATA_COLUMNS
            .iter()
            .enumerate()
            .map(|(index, column)| format!("{column} = ?{}", index + 1))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{};",
            T::TABLE,
            assignments,
            T::DATA_COLUMNS.len() + 1
        );

        let mut bind_values = entity.data_values();
        bind_values.push(Value::Integer(id));
        let changed = self.conn.execute(&sql, params_from_iter(bind_values))?;

        if changed == 0 {
            return Err(not_found::<T>(id));
        }

        Ok(())
    }

    /// Sets the soft-delete flag on the current row by identity.
    ///
    /// The row stays retrievable by every read operation afterwards.
    pub fn soft_delete(&self, entity: &T) -> RepoResult<()> {
        let id = require_id(entity, "soft delete requires an entity with an assigned id")?;
        let changed = self.conn.execute(
            &format!("UPDATE {} SET soft_delete = 1 WHERE id = ?1;", T::TABLE),
            [id],
        )?;

        if changed == 0 {
            return Err(not_found::<T>(id));
        }

        Ok(())
    }

    /// Case-sensitive substring filter on the entity's search column.
    ///
    /// A `None` or empty needle returns all rows. `instr` is used instead
    /// of `LIKE` because SQLite `LIKE` is ASCII-case-insensitive.
    pub fn search_by_name(&self, needle: Option<&str>) -> RepoResult<Vec<T>> {
        match needle {
            Some(value) if !value.is_empty() => {
                let sql = format!(
                    "{} WHERE instr({}, ?1) > 0;",
                    select_sql::<T>(),
                    T::SEARCH_COLUMN
                );
                self.query_rows(&sql, vec![Value::Text(value.to_string())])
            }
            _ => self.get_all(),
        }
    }

    /// Returns all rows matching an optional predicate; all rows when the
    /// predicate is absent.
    pub fn find_all(&self, predicate: Option<&dyn Fn(&T) -> bool>) -> RepoResult<Vec<T>> {
        let entities = self.get_all()?;
        match predicate {
            Some(keep) => Ok(entities.into_iter().filter(|entity| keep(entity)).collect()),
            None => Ok(entities),
        }
    }

    fn query_rows(&self, sql: &str, bind_values: Vec<Value>) -> RepoResult<Vec<T>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut entities = Vec::new();

        while let Some(row) = rows.next()? {
            entities.push(T::from_row(row)?);
        }

        Ok(entities)
    }
}

fn select_sql<T: Entity>() -> String {
    format!("SELECT id, {} FROM {}", T::DATA_COLUMNS.join(", "), T::TABLE)
}

fn require_id<T: Entity>(entity: &T, message: &'static str) -> RepoResult<EntityId> {
    entity.id().ok_or(RepoError::InvalidArgument(message))
}

fn not_found<T: Entity>(id: EntityId) -> RepoError {
    RepoError::NotFound {
        entity: T::KIND,
        id,
    }
}

fn ensure_connection_ready<T: Entity>(conn: &Connection) -> RepoResult<()> {
    let expected_version = latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, T::TABLE)? {
        return Err(RepoError::MissingRequiredTable(T::TABLE));
    }

    if !table_has_column(conn, T::TABLE, "id")? {
        return Err(RepoError::MissingRequiredColumn {
            table: T::TABLE,
            column: "id",
        });
    }
    for &column in T::DATA_COLUMNS {
        if !table_has_column(conn, T::TABLE, column)? {
            return Err(RepoError::MissingRequiredColumn {
                table: T::TABLE,
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
