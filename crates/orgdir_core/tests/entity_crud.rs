use orgdir_core::db::migrations::latest_version;
use orgdir_core::db::open_db_in_memory;
use orgdir_core::{City, Country, Employee, RepoError, SqliteRepository};
use rusqlite::Connection;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRepository::<Country>::try_new(&conn).unwrap();

    let mut country = Country::new("Japan");
    let id = repo.create(&mut country).unwrap();

    // Three countries are seeded, so the store hands out the next rowid.
    assert_eq!(id, 4);
    assert_eq!(country.id, Some(4));

    let loaded = repo.get_by_id(id).unwrap();
    assert_eq!(loaded, country);
}

#[test]
fn create_with_assigned_id_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRepository::<Country>::try_new(&conn).unwrap();

    let mut country = Country::new("Japan");
    country.id = Some(42);

    let err = repo.create(&mut country).unwrap_err();
    assert!(matches!(err, RepoError::InvalidArgument(_)));
}

#[test]
fn get_by_id_missing_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRepository::<Country>::try_new(&conn).unwrap();

    let err = repo.get_by_id(999).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "country",
            id: 999
        }
    ));
}

#[test]
fn update_overwrites_all_data_columns() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRepository::<Employee>::try_new(&conn).unwrap();

    let mut employee = repo.get_by_id(1).unwrap();
    employee.full_name = "Ahmet Kaya".to_string();
    employee.created_at = 1;
    employee.soft_delete = true;
    repo.update(&employee).unwrap();

    let loaded = repo.get_by_id(1).unwrap();
    assert_eq!(loaded.full_name, "Ahmet Kaya");
    assert_eq!(loaded.created_at, 1);
    assert!(loaded.soft_delete);
}

#[test]
fn writes_require_an_assigned_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRepository::<Employee>::try_new(&conn).unwrap();

    let unsaved = Employee::new("No Identity");

    assert!(matches!(
        repo.update(&unsaved).unwrap_err(),
        RepoError::InvalidArgument(_)
    ));
    assert!(matches!(
        repo.delete(&unsaved).unwrap_err(),
        RepoError::InvalidArgument(_)
    ));
    assert!(matches!(
        repo.soft_delete(&unsaved).unwrap_err(),
        RepoError::InvalidArgument(_)
    ));
}

#[test]
fn update_missing_row_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRepository::<Employee>::try_new(&conn).unwrap();

    let mut ghost = Employee::new("Ghost");
    ghost.id = Some(999);

    let err = repo.update(&ghost).unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "employee",
            id: 999
        }
    ));
}

#[test]
fn soft_delete_keeps_row_visible_everywhere() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRepository::<Employee>::try_new(&conn).unwrap();

    let employee = repo.get_by_id(2).unwrap();
    repo.soft_delete(&employee).unwrap();

    // Soft delete only flips the flag: the row stays in every read path.
    let loaded = repo.get_by_id(2).unwrap();
    assert!(loaded.soft_delete);

    let all = repo.get_all().unwrap();
    assert!(all.iter().any(|row| row.id == Some(2)));

    let searched = repo.search_by_name(Some("Ayse")).unwrap();
    assert!(searched.iter().any(|row| row.id == Some(2)));
}

#[test]
fn soft_delete_is_repeatable() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRepository::<Employee>::try_new(&conn).unwrap();

    let employee = repo.get_by_id(3).unwrap();
    repo.soft_delete(&employee).unwrap();
    repo.soft_delete(&employee).unwrap();

    assert!(repo.get_by_id(3).unwrap().soft_delete);
}

#[test]
fn find_all_without_predicate_matches_get_all() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRepository::<City>::try_new(&conn).unwrap();

    let all = repo.get_all().unwrap();
    let found = repo.find_all(None).unwrap();

    assert_eq!(found, all);
    assert_eq!(found.len(), 3);
}

#[test]
fn find_all_with_predicate_filters_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRepository::<City>::try_new(&conn).unwrap();

    let predicate = |city: &City| city.country_id == 1;
    let found = repo.find_all(Some(&predicate)).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Seki");
}

#[test]
fn search_is_case_sensitive_substring() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRepository::<Country>::try_new(&conn).unwrap();

    let hits = repo.search_by_name(Some("Turk")).unwrap();
    assert_eq!(hits.len(), 2);

    let misses = repo.search_by_name(Some("turk")).unwrap();
    assert!(misses.is_empty());
}

#[test]
fn search_without_needle_returns_all_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteRepository::<Country>::try_new(&conn).unwrap();

    assert_eq!(repo.search_by_name(None).unwrap().len(), 3);
    assert_eq!(repo.search_by_name(Some("")).unwrap().len(), 3);
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteRepository::<Country>::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteRepository::<Country>::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("countries"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE countries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteRepository::<Country>::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "countries",
            column: "soft_delete"
        })
    ));
}
