use std::fs;
use std::path::Path;
use userbook_core::db::open_db_in_memory;
use userbook_core::{init_logging, logging_status, SqliteUserRepository, UserService};

#[test]
fn service_events_reach_log_file_after_init() {
    let log_dir = tempfile::tempdir().unwrap();
    init_logging("debug", log_dir.path().to_str().unwrap()).unwrap();
    assert_eq!(logging_status().unwrap().0, "debug");

    let conn = open_db_in_memory().unwrap();
    let service = UserService::new(SqliteUserRepository::try_new(&conn).unwrap());
    let id = service
        .register_user("Ada Lovelace", "ada@example.com", "12 Analytical Engine Way")
        .unwrap();
    service.delete_user(id).unwrap();
    assert!(service.delete_user(id).is_err());
    log::logger().flush();

    let contents = read_log_files(log_dir.path());
    assert!(contents.contains("event=db_open module=db status=ok mode=memory"));
    assert!(contents.contains(&format!(
        "event=user_create module=service status=ok user_id={id}"
    )));
    assert!(contents.contains(&format!(
        "event=user_delete module=service status=ok user_id={id}"
    )));
    assert!(contents.contains(&format!(
        "event=user_delete module=service status=error user_id={id}"
    )));
    assert!(!contents.contains("ada@example.com"));
}

fn read_log_files(dir: &Path) -> String {
    let mut contents = String::new();
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        let is_log = path.extension().is_some_and(|ext| ext == "log");
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        if is_log && name.starts_with("userbook") {
            contents.push_str(&fs::read_to_string(&path).unwrap());
        }
    }
    assert!(!contents.is_empty(), "no userbook log file in {}", dir.display());
    contents
}
