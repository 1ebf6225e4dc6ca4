use phonebook_core::db::open_db_in_memory;
use phonebook_core::{
    NewRecord, NewUser, RecordService, ServiceError, SqliteRecordRepository, SqliteUserRepository,
    UserId, UserService,
};
use rusqlite::Connection;

const USER_NOT_FOUND_MESSAGE: &str = "user not found";
const RECORD_NOT_FOUND_MESSAGE: &str = "record not found";

fn record_service(
    conn: &Connection,
) -> RecordService<SqliteUserRepository<'_>, SqliteRecordRepository<'_>> {
    RecordService::new(
        SqliteUserRepository::new(conn),
        SqliteRecordRepository::new(conn),
    )
}

fn add_user(conn: &Connection, name: &str) -> UserId {
    UserService::new(SqliteUserRepository::new(conn))
        .add_user(&NewUser::new(name))
        .unwrap()
        .id
}

#[test]
fn add_record_links_to_owner_and_rejects_unknown_user() {
    let conn = open_db_in_memory().unwrap();
    let user_id = add_user(&conn, "owner");
    let service = record_service(&conn);

    let added = service
        .add_record(&NewRecord::new("abcde", "01234567891"), user_id)
        .unwrap();
    assert_eq!(added.phone_owner, "abcde");
    assert_eq!(added.phone_number, "01234567891");
    assert_eq!(added.user_id, user_id);

    let second = service
        .add_record(&NewRecord::new("abcdefghijklmno", "12345678901"), user_id)
        .unwrap();
    assert_ne!(second.id, added.id, "ids must be fresh per record");

    let err = service
        .add_record(&NewRecord::new("abcde", "01234567891"), 0)
        .unwrap_err();
    assert!(matches!(err, ServiceError::UserNotFound));
    assert_eq!(err.to_string(), USER_NOT_FOUND_MESSAGE);
}

#[test]
fn get_user_records_lists_only_the_owners_records() {
    let conn = open_db_in_memory().unwrap();
    let owner = add_user(&conn, "owner");
    let other = add_user(&conn, "other");
    let service = record_service(&conn);

    service
        .add_record(&NewRecord::new("a", "01234567891"), owner)
        .unwrap();
    service
        .add_record(&NewRecord::new("b", "12345678901"), owner)
        .unwrap();
    service
        .add_record(&NewRecord::new("c", "00000000000"), other)
        .unwrap();

    let records = service.get_user_records(owner).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|record| record.user_id == owner));

    let err = service.get_user_records(0).unwrap_err();
    assert!(matches!(err, ServiceError::UserNotFound));
    assert_eq!(err.to_string(), USER_NOT_FOUND_MESSAGE);
}

#[test]
fn get_user_record_roundtrips_ids() {
    let conn = open_db_in_memory().unwrap();
    let user_id = add_user(&conn, "owner");
    let service = record_service(&conn);

    let added = service
        .add_record(&NewRecord::new("abcde", "01234567891"), user_id)
        .unwrap();
    let loaded = service.get_user_record(added.id, user_id).unwrap();

    assert_eq!(loaded.id, added.id);
    assert_eq!(loaded.user_id, user_id);
    assert_eq!(loaded.phone_owner, "abcde");
    assert_eq!(loaded.phone_number, "01234567891");
}

#[test]
fn user_check_precedes_record_check() {
    let conn = open_db_in_memory().unwrap();
    let user_id = add_user(&conn, "owner");
    let service = record_service(&conn);

    let added = service
        .add_record(&NewRecord::new("abcde", "01234567891"), user_id)
        .unwrap();

    // Valid record under an unknown user: user resolution fails first.
    let err = service.get_user_record(added.id, 0).unwrap_err();
    assert!(matches!(err, ServiceError::UserNotFound));
    assert_eq!(err.to_string(), USER_NOT_FOUND_MESSAGE);

    // Unknown record AND unknown user: still the user failure.
    let err = service.get_user_record(0, 0).unwrap_err();
    assert!(matches!(err, ServiceError::UserNotFound));

    // Unknown record under a valid user.
    let err = service.get_user_record(0, user_id).unwrap_err();
    assert!(matches!(err, ServiceError::RecordNotFound));
    assert_eq!(err.to_string(), RECORD_NOT_FOUND_MESSAGE);
}

#[test]
fn ownership_mismatch_is_indistinguishable_from_nonexistence() {
    let conn = open_db_in_memory().unwrap();
    let owner = add_user(&conn, "owner");
    let other = add_user(&conn, "other");
    let service = record_service(&conn);

    let added = service
        .add_record(&NewRecord::new("abcde", "01234567891"), owner)
        .unwrap();

    let err = service.get_user_record(added.id, other).unwrap_err();
    assert!(matches!(err, ServiceError::RecordNotFound));
    assert_eq!(err.to_string(), RECORD_NOT_FOUND_MESSAGE);

    let err = service
        .update_user_record(added.id, other, &NewRecord::new("updated", "00000000000"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::RecordNotFound));

    let err = service.delete_user_record(added.id, other).unwrap_err();
    assert!(matches!(err, ServiceError::RecordNotFound));

    // The foreign record is untouched by the failed update/delete.
    let intact = service.get_user_record(added.id, owner).unwrap();
    assert_eq!(intact.phone_owner, "abcde");
    assert_eq!(intact.phone_number, "01234567891");
}

#[test]
fn update_user_record_roundtrip_preserves_ids() {
    let conn = open_db_in_memory().unwrap();
    let user_id = add_user(&conn, "owner");
    let service = record_service(&conn);

    let added = service
        .add_record(&NewRecord::new("abcde", "01234567891"), user_id)
        .unwrap();
    let updated = service
        .update_user_record(added.id, user_id, &NewRecord::new("updated", "00000000000"))
        .unwrap();

    assert_eq!(updated.id, added.id);
    assert_eq!(updated.user_id, user_id);
    assert_eq!(updated.phone_owner, "updated");
    assert_eq!(updated.phone_number, "00000000000");

    let loaded = service.get_user_record(added.id, user_id).unwrap();
    assert_eq!(loaded, updated);

    let err = service
        .update_user_record(added.id, 0, &NewRecord::new("updated", "00000000000"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::UserNotFound));

    let err = service
        .update_user_record(0, user_id, &NewRecord::new("updated", "00000000000"))
        .unwrap_err();
    assert!(matches!(err, ServiceError::RecordNotFound));
}

#[test]
fn delete_user_record_returns_last_state_and_removes_the_row() {
    let conn = open_db_in_memory().unwrap();
    let user_id = add_user(&conn, "owner");
    let service = record_service(&conn);

    let added = service
        .add_record(&NewRecord::new("abcde", "01234567891"), user_id)
        .unwrap();
    let deleted = service.delete_user_record(added.id, user_id).unwrap();

    assert_eq!(deleted.id, added.id);
    assert_eq!(deleted.user_id, user_id);
    assert_eq!(deleted.phone_owner, "abcde");
    assert_eq!(deleted.phone_number, "01234567891");

    let err = service.get_user_record(added.id, user_id).unwrap_err();
    assert!(matches!(err, ServiceError::RecordNotFound));

    let err = service.delete_user_record(added.id, 0).unwrap_err();
    assert!(matches!(err, ServiceError::UserNotFound));

    let err = service.delete_user_record(0, user_id).unwrap_err();
    assert!(matches!(err, ServiceError::RecordNotFound));
}

#[test]
fn get_user_record_by_phone_number_matches_exactly() {
    let conn = open_db_in_memory().unwrap();
    let owner = add_user(&conn, "owner");
    let other = add_user(&conn, "other");
    let service = record_service(&conn);

    service
        .add_record(&NewRecord::new("abcde", "01234567891"), owner)
        .unwrap();
    service
        .add_record(&NewRecord::new("fghij", "01234567891"), owner)
        .unwrap();
    service
        .add_record(&NewRecord::new("klmno", "12345678901"), owner)
        .unwrap();
    service
        .add_record(&NewRecord::new("pqrst", "01234567891"), other)
        .unwrap();

    let hits = service
        .get_user_record_by_phone_number("01234567891", owner)
        .unwrap();
    assert_eq!(hits.len(), 2);
    assert!(hits.iter().all(|record| record.phone_number == "01234567891"));
    assert!(hits.iter().all(|record| record.user_id == owner));

    assert!(service
        .get_user_record_by_phone_number("99999999999", owner)
        .unwrap()
        .is_empty());

    let err = service
        .get_user_record_by_phone_number("01234567891", 0)
        .unwrap_err();
    assert!(matches!(err, ServiceError::UserNotFound));
    assert_eq!(err.to_string(), USER_NOT_FOUND_MESSAGE);
}
