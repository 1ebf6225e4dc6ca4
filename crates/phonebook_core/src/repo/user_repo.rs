//! User repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `users` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `update` and `delete` report a missing row as `None` without side
//!   effects.
//! - `delete` removes owned records through the schema-level cascade.

use crate::db::DbResult;
use crate::model::user::{NewUser, UserEntity, UserId};
use rusqlite::{params, Connection, OptionalExtension, Row};

const USER_SELECT_SQL: &str = "SELECT id, name FROM users";

/// Repository interface for user CRUD operations.
pub trait UserRepository {
    /// Persists a new user and returns the stored row with its assigned id.
    fn save(&self, user: &NewUser) -> DbResult<UserEntity>;
    /// Fetches one user by id.
    fn find_by_id(&self, id: UserId) -> DbResult<Option<UserEntity>>;
    /// Cheap existence probe used by record operations.
    fn exists(&self, id: UserId) -> DbResult<bool>;
    /// Lists all users in no specified order.
    fn find_all(&self) -> DbResult<Vec<UserEntity>>;
    /// Lists users whose name contains `fragment` (case-sensitive).
    fn find_by_name_containing(&self, fragment: &str) -> DbResult<Vec<UserEntity>>;
    /// Overwrites mutable fields of an existing user; `None` when missing.
    fn update(&self, id: UserId, user: &NewUser) -> DbResult<Option<UserEntity>>;
    /// Removes a user and returns its pre-deletion row; `None` when missing.
    fn delete(&self, id: UserId) -> DbResult<Option<UserEntity>>;
}

/// SQLite-backed user repository.
pub struct SqliteUserRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteUserRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl UserRepository for SqliteUserRepository<'_> {
    fn save(&self, user: &NewUser) -> DbResult<UserEntity> {
        self.conn.execute(
            "INSERT INTO users (name) VALUES (?1);",
            params![user.name.as_str()],
        )?;

        Ok(UserEntity {
            id: self.conn.last_insert_rowid(),
            name: user.name.clone(),
        })
    }

    fn find_by_id(&self, id: UserId) -> DbResult<Option<UserEntity>> {
        let entity = self
            .conn
            .query_row(
                &format!("{USER_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_user_row,
            )
            .optional()?;

        Ok(entity)
    }

    fn exists(&self, id: UserId) -> DbResult<bool> {
        let found: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = ?1);",
            params![id],
            |row| row.get(0),
        )?;

        Ok(found == 1)
    }

    fn find_all(&self) -> DbResult<Vec<UserEntity>> {
        let mut stmt = self.conn.prepare(&format!("{USER_SELECT_SQL};"))?;
        let mut rows = stmt.query([])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn find_by_name_containing(&self, fragment: &str) -> DbResult<Vec<UserEntity>> {
        // instr() is a plain byte search, so matching stays case-sensitive
        // regardless of the connection's LIKE configuration.
        let mut stmt = self
            .conn
            .prepare(&format!("{USER_SELECT_SQL} WHERE instr(name, ?1) > 0;"))?;
        let mut rows = stmt.query(params![fragment])?;
        let mut users = Vec::new();

        while let Some(row) = rows.next()? {
            users.push(parse_user_row(row)?);
        }

        Ok(users)
    }

    fn update(&self, id: UserId, user: &NewUser) -> DbResult<Option<UserEntity>> {
        let tx = self.conn.unchecked_transaction()?;

        let changed = tx.execute(
            "UPDATE users SET name = ?1 WHERE id = ?2;",
            params![user.name.as_str(), id],
        )?;
        if changed == 0 {
            return Ok(None);
        }

        tx.commit()?;
        Ok(Some(UserEntity {
            id,
            name: user.name.clone(),
        }))
    }

    fn delete(&self, id: UserId) -> DbResult<Option<UserEntity>> {
        let tx = self.conn.unchecked_transaction()?;

        let entity = tx
            .query_row(
                &format!("{USER_SELECT_SQL} WHERE id = ?1;"),
                params![id],
                parse_user_row,
            )
            .optional()?;
        let Some(entity) = entity else {
            return Ok(None);
        };

        tx.execute("DELETE FROM users WHERE id = ?1;", params![id])?;
        tx.commit()?;
        Ok(Some(entity))
    }
}

fn parse_user_row(row: &Row<'_>) -> rusqlite::Result<UserEntity> {
    Ok(UserEntity {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}
