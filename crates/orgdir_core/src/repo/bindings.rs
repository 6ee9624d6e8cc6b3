//! Table bindings for the directory entity types.
//!
//! # Responsibility
//! - Implement the [`Entity`] capability for `Country`, `City` and
//!   `Employee` so the generic repository can persist them.
//! - Keep row encoding/decoding rules next to the repository they serve.
//!
//! # Invariants
//! - `data_values` order matches `DATA_COLUMNS` order exactly.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::model::{City, Country, Employee, EntityId};
use crate::repo::entity_repo::{Entity, RepoError, RepoResult};
use rusqlite::types::Value;
use rusqlite::Row;

impl Entity for Country {
    const TABLE: &'static str = "countries";
    const KIND: &'static str = "country";
    const DATA_COLUMNS: &'static [&'static str] = &["name", "created_at", "soft_delete"];
    const SEARCH_COLUMN: &'static str = "name";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    fn data_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            Value::Integer(self.created_at),
            Value::Integer(i64::from(self.soft_delete)),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            name: row.get("name")?,
            created_at: row.get("created_at")?,
            soft_delete: flag_from_db(row.get("soft_delete")?, "countries.soft_delete")?,
        })
    }
}

impl Entity for City {
    const TABLE: &'static str = "cities";
    const KIND: &'static str = "city";
    const DATA_COLUMNS: &'static [&'static str] =
        &["name", "country_id", "created_at", "soft_delete"];
    const SEARCH_COLUMN: &'static str = "name";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    fn data_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.name.clone()),
            Value::Integer(self.country_id),
            Value::Integer(self.created_at),
            Value::Integer(i64::from(self.soft_delete)),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            name: row.get("name")?,
            country_id: row.get("country_id")?,
            created_at: row.get("created_at")?,
            soft_delete: flag_from_db(row.get("soft_delete")?, "cities.soft_delete")?,
        })
    }
}

impl Entity for Employee {
    const TABLE: &'static str = "employees";
    const KIND: &'static str = "employee";
    const DATA_COLUMNS: &'static [&'static str] = &["full_name", "created_at", "soft_delete"];
    const SEARCH_COLUMN: &'static str = "full_name";

    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn assign_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }

    fn data_values(&self) -> Vec<Value> {
        vec![
            Value::Text(self.full_name.clone()),
            Value::Integer(self.created_at),
            Value::Integer(i64::from(self.soft_delete)),
        ]
    }

    fn from_row(row: &Row<'_>) -> RepoResult<Self> {
        Ok(Self {
            id: Some(row.get("id")?),
            full_name: row.get("full_name")?,
            created_at: row.get("created_at")?,
            soft_delete: flag_from_db(row.get("soft_delete")?, "employees.soft_delete")?,
        })
    }
}

fn flag_from_db(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid soft-delete value `{other}` in {column}"
        ))),
    }
}
