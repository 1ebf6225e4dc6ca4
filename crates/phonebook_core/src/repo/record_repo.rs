//! Record repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide user-scoped CRUD APIs over the `records` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Every scoped query constrains both `user_id` and `id`, so a record
//!   owned by another user is indistinguishable from a missing record.
//! - `update` and `delete` report a missing row as `None` without side
//!   effects.

use crate::db::DbResult;
use crate::model::record::{NewRecord, RecordEntity, RecordId};
use crate::model::user::UserId;
use rusqlite::{params, Connection, OptionalExtension, Row};

const RECORD_SELECT_SQL: &str = "SELECT id, phone_owner, phone_number, user_id FROM records";

/// Repository interface for user-scoped record CRUD operations.
pub trait RecordRepository {
    /// Persists a new record owned by `user_id` and returns the stored row.
    fn save(&self, user_id: UserId, record: &NewRecord) -> DbResult<RecordEntity>;
    /// Lists all records owned by `user_id`.
    fn find_by_user_id(&self, user_id: UserId) -> DbResult<Vec<RecordEntity>>;
    /// Fetches one record by id, constrained to the owning user.
    fn find_by_user_id_and_id(
        &self,
        user_id: UserId,
        record_id: RecordId,
    ) -> DbResult<Option<RecordEntity>>;
    /// Lists records owned by `user_id` with an exact phone number match.
    fn find_by_user_id_and_phone_number(
        &self,
        user_id: UserId,
        phone_number: &str,
    ) -> DbResult<Vec<RecordEntity>>;
    /// Overwrites mutable fields of an owned record; `None` when the record
    /// is missing or owned by another user.
    fn update(
        &self,
        user_id: UserId,
        record_id: RecordId,
        record: &NewRecord,
    ) -> DbResult<Option<RecordEntity>>;
    /// Removes an owned record and returns its pre-deletion row; `None` when
    /// the record is missing or owned by another user.
    fn delete(&self, user_id: UserId, record_id: RecordId) -> DbResult<Option<RecordEntity>>;
}

/// SQLite-backed record repository.
pub struct SqliteRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRecordRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl RecordRepository for SqliteRecordRepository<'_> {
    fn save(&self, user_id: UserId, record: &NewRecord) -> DbResult<RecordEntity> {
        self.conn.execute(
            "INSERT INTO records (phone_owner, phone_number, user_id)
             VALUES (?1, ?2, ?3);",
            params![
                record.phone_owner.as_str(),
                record.phone_number.as_str(),
                user_id,
            ],
        )?;

        Ok(RecordEntity {
            id: self.conn.last_insert_rowid(),
            phone_owner: record.phone_owner.clone(),
            phone_number: record.phone_number.clone(),
            user_id,
        })
    }

    fn find_by_user_id(&self, user_id: UserId) -> DbResult<Vec<RecordEntity>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{RECORD_SELECT_SQL} WHERE user_id = ?1;"))?;
        let mut rows = stmt.query(params![user_id])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_record_row(row)?);
        }

        Ok(records)
    }

    fn find_by_user_id_and_id(
        &self,
        user_id: UserId,
        record_id: RecordId,
    ) -> DbResult<Option<RecordEntity>> {
        let entity = self
            .conn
            .query_row(
                &format!("{RECORD_SELECT_SQL} WHERE user_id = ?1 AND id = ?2;"),
                params![user_id, record_id],
                parse_record_row,
            )
            .optional()?;

        Ok(entity)
    }

    fn find_by_user_id_and_phone_number(
        &self,
        user_id: UserId,
        phone_number: &str,
    ) -> DbResult<Vec<RecordEntity>> {
        let mut stmt = self.conn.prepare(&format!(
            "{RECORD_SELECT_SQL} WHERE user_id = ?1 AND phone_number = ?2;"
        ))?;
        let mut rows = stmt.query(params![user_id, phone_number])?;
        let mut records = Vec::new();

        while let Some(row) = rows.next()? {
            records.push(parse_record_row(row)?);
        }

        Ok(records)
    }

    fn update(
        &self,
        user_id: UserId,
        record_id: RecordId,
        record: &NewRecord,
    ) -> DbResult<Option<RecordEntity>> {
        let tx = self.conn.unchecked_transaction()?;

        let changed = tx.execute(
            "UPDATE records
             SET phone_owner = ?1, phone_number = ?2
             WHERE user_id = ?3 AND id = ?4;",
            params![
                record.phone_owner.as_str(),
                record.phone_number.as_str(),
                user_id,
                record_id,
            ],
        )?;
        if changed == 0 {
            return Ok(None);
        }

        tx.commit()?;
        Ok(Some(RecordEntity {
            id: record_id,
            phone_owner: record.phone_owner.clone(),
            phone_number: record.phone_number.clone(),
            user_id,
        }))
    }

    fn delete(&self, user_id: UserId, record_id: RecordId) -> DbResult<Option<RecordEntity>> {
        let tx = self.conn.unchecked_transaction()?;

        let entity = tx
            .query_row(
                &format!("{RECORD_SELECT_SQL} WHERE user_id = ?1 AND id = ?2;"),
                params![user_id, record_id],
                parse_record_row,
            )
            .optional()?;
        let Some(entity) = entity else {
            return Ok(None);
        };

        tx.execute(
            "DELETE FROM records WHERE user_id = ?1 AND id = ?2;",
            params![user_id, record_id],
        )?;
        tx.commit()?;
        Ok(Some(entity))
    }
}

fn parse_record_row(row: &Row<'_>) -> rusqlite::Result<RecordEntity> {
    Ok(RecordEntity {
        id: row.get("id")?,
        phone_owner: row.get("phone_owner")?,
        phone_number: row.get("phone_number")?,
        user_id: row.get("user_id")?,
    })
}
