//! Insert and query operations for telemetry records.
//!
//! One table per record kind (`repl_commands`, `editor_contents`,
//! `error_instances`). Every fetch orders by `timestamp, id` so repeated
//! report runs over the same data see records in an identical order --
//! timestamps are caller-supplied and may collide, and the serial id
//! breaks ties by insertion order.

use sqlx::PgPool;
use starlog_types::{EditorContent, ErrorInstance, ReplCommand};

use crate::error::DbError;

/// Operations on the telemetry record tables.
pub struct RecordStore<'a> {
    pool: &'a PgPool,
}

impl<'a> RecordStore<'a> {
    /// Create a new record store bound to a connection pool.
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a REPL command record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert_command(&self, record: &ReplCommand) -> Result<(), DbError> {
        sqlx::query(
            r#"INSERT INTO repl_commands (uid, "timestamp", command) VALUES ($1, $2, $3)"#,
        )
        .bind(&record.uid)
        .bind(record.timestamp)
        .bind(&record.command)
        .execute(self.pool)
        .await?;

        tracing::debug!(uid = %record.uid, "Inserted REPL command");
        Ok(())
    }

    /// Insert an editor save record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert_editor_save(&self, record: &EditorContent) -> Result<(), DbError> {
        sqlx::query(
            r#"INSERT INTO editor_contents (uid, "timestamp", content) VALUES ($1, $2, $3)"#,
        )
        .bind(&record.uid)
        .bind(record.timestamp)
        .bind(&record.content)
        .execute(self.pool)
        .await?;

        tracing::debug!(uid = %record.uid, "Inserted editor save");
        Ok(())
    }

    /// Insert an error record.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the insert fails.
    pub async fn insert_error(&self, record: &ErrorInstance) -> Result<(), DbError> {
        sqlx::query(
            r#"INSERT INTO error_instances (uid, "timestamp", description) VALUES ($1, $2, $3)"#,
        )
        .bind(&record.uid)
        .bind(record.timestamp)
        .bind(&record.description)
        .execute(self.pool)
        .await?;

        tracing::debug!(uid = %record.uid, "Inserted error instance");
        Ok(())
    }

    /// Fetch every REPL command record in deterministic order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn fetch_commands(&self) -> Result<Vec<ReplCommand>, DbError> {
        let rows = sqlx::query_as::<_, CommandRow>(
            r#"SELECT id, uid, "timestamp", command, created_at
               FROM repl_commands
               ORDER BY "timestamp", id"#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(CommandRow::into_record).collect())
    }

    /// Fetch the REPL command records for a single user.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn fetch_commands_for_user(&self, uid: &str) -> Result<Vec<ReplCommand>, DbError> {
        let rows = sqlx::query_as::<_, CommandRow>(
            r#"SELECT id, uid, "timestamp", command, created_at
               FROM repl_commands
               WHERE uid = $1
               ORDER BY "timestamp", id"#,
        )
        .bind(uid)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(CommandRow::into_record).collect())
    }

    /// Fetch the editor save records for a single user.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn fetch_editor_saves_for_user(
        &self,
        uid: &str,
    ) -> Result<Vec<EditorContent>, DbError> {
        let rows = sqlx::query_as::<_, EditorSaveRow>(
            r#"SELECT id, uid, "timestamp", content, created_at
               FROM editor_contents
               WHERE uid = $1
               ORDER BY "timestamp", id"#,
        )
        .bind(uid)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(EditorSaveRow::into_record).collect())
    }

    /// Fetch every error record in deterministic order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn fetch_errors(&self) -> Result<Vec<ErrorInstance>, DbError> {
        let rows = sqlx::query_as::<_, ErrorRow>(
            r#"SELECT id, uid, "timestamp", description, created_at
               FROM error_instances
               ORDER BY "timestamp", id"#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ErrorRow::into_record).collect())
    }

    /// Fetch the error records for a single user.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn fetch_errors_for_user(&self, uid: &str) -> Result<Vec<ErrorInstance>, DbError> {
        let rows = sqlx::query_as::<_, ErrorRow>(
            r#"SELECT id, uid, "timestamp", description, created_at
               FROM error_instances
               WHERE uid = $1
               ORDER BY "timestamp", id"#,
        )
        .bind(uid)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ErrorRow::into_record).collect())
    }

    /// Count the editor save records for a single user.
    ///
    /// Used by the adoption report, which only needs to know whether a
    /// user ever saved the editor, not what they saved.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Postgres`] if the query fails.
    pub async fn count_editor_saves(&self, uid: &str) -> Result<u64, DbError> {
        let count: i64 =
            sqlx::query_scalar(r"SELECT COUNT(*) FROM editor_contents WHERE uid = $1")
                .bind(uid)
                .fetch_one(self.pool)
                .await?;

        Ok(u64::try_from(count).unwrap_or(0))
    }
}

/// A row from the `repl_commands` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CommandRow {
    /// Auto-incremented row id (insertion order).
    pub id: i64,
    /// Opaque user id.
    pub uid: String,
    /// Caller-supplied epoch timestamp.
    pub timestamp: i64,
    /// The command text.
    pub command: String,
    /// Server-side receipt time.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl CommandRow {
    /// Strip the storage columns down to the wire record shape.
    pub fn into_record(self) -> ReplCommand {
        ReplCommand {
            uid: self.uid,
            timestamp: self.timestamp,
            command: self.command,
        }
    }
}

/// A row from the `editor_contents` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct EditorSaveRow {
    /// Auto-incremented row id (insertion order).
    pub id: i64,
    /// Opaque user id.
    pub uid: String,
    /// Caller-supplied epoch timestamp.
    pub timestamp: i64,
    /// The saved buffer content.
    pub content: String,
    /// Server-side receipt time.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl EditorSaveRow {
    /// Strip the storage columns down to the wire record shape.
    pub fn into_record(self) -> EditorContent {
        EditorContent {
            uid: self.uid,
            timestamp: self.timestamp,
            content: self.content,
        }
    }
}

/// A row from the `error_instances` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ErrorRow {
    /// Auto-incremented row id (insertion order).
    pub id: i64,
    /// Opaque user id.
    pub uid: String,
    /// Caller-supplied epoch timestamp.
    pub timestamp: i64,
    /// The free-text error description.
    pub description: String,
    /// Server-side receipt time.
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl ErrorRow {
    /// Strip the storage columns down to the wire record shape.
    pub fn into_record(self) -> ErrorInstance {
        ErrorInstance {
            uid: self.uid,
            timestamp: self.timestamp,
            description: self.description,
        }
    }
}
