use rusqlite::Connection;
use userbook_core::db::migrations::latest_version;
use userbook_core::db::open_db_in_memory;
use userbook_core::{
    RepoError, SqliteUserRepository, User, UserListQuery, UserRepository, UserService,
    ADDRESS_MAX_CHARS, EMAIL_MAX_CHARS, NAME_MAX_CHARS,
};

fn ada() -> User {
    User::new("Ada Lovelace", "ada@example.com", "12 Analytical Engine Way")
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let id = repo.create_user(&ada()).unwrap();

    let loaded = repo.get_user(id).unwrap().unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.user, ada());
    assert_eq!(loaded.to_string(), "Ada Lovelace");
}

#[test]
fn roundtrip_preserves_whitespace_and_unicode() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let user = User::new("  Zoë Ångström ", "", "Straße 1\nBerlin");
    let id = repo.create_user(&user).unwrap();

    assert_eq!(repo.get_user(id).unwrap().unwrap().user, user);
}

#[test]
fn get_missing_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    assert!(repo.get_user(42).unwrap().is_none());
}

#[test]
fn update_existing_user() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let mut user = ada();
    let id = repo.create_user(&user).unwrap();

    user.address = "Ockham Park".to_string();
    repo.update_user(id, &user).unwrap();

    let loaded = repo.get_user(id).unwrap().unwrap();
    assert_eq!(loaded.user.address, "Ockham Park");
    assert_eq!(loaded.user.name, "Ada Lovelace");
}

#[test]
fn update_and_delete_missing_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let update_err = repo.update_user(7, &ada()).unwrap_err();
    assert!(matches!(update_err, RepoError::NotFound(7)));

    let delete_err = repo.delete_user(7).unwrap_err();
    assert!(matches!(delete_err, RepoError::NotFound(7)));
}

#[test]
fn delete_removes_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let id = repo.create_user(&ada()).unwrap();
    repo.delete_user(id).unwrap();

    assert!(repo.get_user(id).unwrap().is_none());
    assert_eq!(repo.count_users().unwrap(), 0);
}

#[test]
fn length_limits_are_enforced_on_write() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let too_long = User::new("Ada", "e".repeat(EMAIL_MAX_CHARS + 1), "");
    let create_err = repo.create_user(&too_long).unwrap_err();
    assert!(matches!(create_err, RepoError::Validation(_)));
    assert_eq!(repo.count_users().unwrap(), 0);

    let id = repo.create_user(&ada()).unwrap();
    let update_err = repo.update_user(id, &too_long).unwrap_err();
    assert!(matches!(update_err, RepoError::Validation(_)));
    assert_eq!(repo.get_user(id).unwrap().unwrap().user, ada());
}

#[test]
fn values_exactly_at_limits_are_stored_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let address = format!("{}xx", "a\0b".repeat(66));
    let user = User::new("é".repeat(NAME_MAX_CHARS), "ü".repeat(EMAIL_MAX_CHARS), address);
    assert_eq!(user.address.chars().count(), ADDRESS_MAX_CHARS);

    let id = repo.create_user(&user).unwrap();

    assert_eq!(repo.get_user(id).unwrap().unwrap().user, user);
}

#[test]
fn find_by_email_matches_exactly() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let first = repo.create_user(&ada()).unwrap();
    let second = repo
        .create_user(&User::new("Ada King", "ada@example.com", ""))
        .unwrap();
    repo.create_user(&User::new("Grace", "grace@example.com", ""))
        .unwrap();

    let ids: Vec<_> = repo
        .find_by_email("ada@example.com")
        .unwrap()
        .into_iter()
        .map(|stored| stored.id)
        .collect();
    assert_eq!(ids, [first, second]);
    assert!(repo.find_by_email("ADA@example.com").unwrap().is_empty());
}

#[test]
fn list_pagination_is_ordered_by_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();

    let ids: Vec<_> = ["a", "b", "c"]
        .into_iter()
        .map(|name| repo.create_user(&User::new(name, "", "")).unwrap())
        .collect();

    let all = repo.list_users(&UserListQuery::default()).unwrap();
    assert_eq!(all.len(), 3);

    let page = repo
        .list_users(&UserListQuery {
            limit: Some(1),
            offset: 1,
        })
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, ids[1]);

    let tail = repo
        .list_users(&UserListQuery {
            limit: None,
            offset: 1,
        })
        .unwrap();
    let tail_names: Vec<_> = tail.iter().map(|stored| stored.user.name.as_str()).collect();
    assert_eq!(tail_names, ["b", "c"]);
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::try_new(&conn).unwrap();
    let service = UserService::new(repo);

    let id = service
        .register_user("Ada Lovelace", "ada@example.com", "12 Analytical Engine Way")
        .unwrap();
    assert_eq!(service.get_user(id).unwrap().unwrap().user, ada());
    assert_eq!(service.count_users().unwrap(), 1);
    assert_eq!(service.find_by_email("ada@example.com").unwrap().len(), 1);

    let renamed = User::new("Augusta Ada King", "ada@example.com", "");
    service.update_user(id, &renamed).unwrap();
    assert_eq!(
        service.list_users(&UserListQuery::default()).unwrap()[0].user,
        renamed
    );

    service.delete_user(id).unwrap();
    assert!(service.get_user(id).unwrap().is_none());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteUserRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_users_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteUserRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("users"))
    ));
}

#[test]
fn repository_rejects_users_table_missing_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    assert!(matches!(
        SqliteUserRepository::try_new(&conn),
        Err(RepoError::MissingRequiredColumn {
            table: "users",
            column: "address"
        })
    ));
}
