//! Database connection, migrations and the per-request transaction scope.

use std::future::Future;
use std::path::Path;
use std::pin::Pin;
use std::time::Duration;

use sea_orm::{
    ConnectOptions, Database as SeaDatabase, DatabaseConnection, DatabaseTransaction, DbErr,
    TransactionTrait,
};
use sea_orm_migration::MigratorTrait;

use crate::config::DatabaseConfig;
use crate::error::{AppError, AppResult};

/// Database wrapper for connection management
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Initialize database connection and run the migrator's pending migrations.
    pub async fn connect<M: MigratorTrait>(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let db = Self::connect_without_migrations(config).await?;

        // Run pending migrations
        M::up(&db.connection, None).await?;
        tracing::info!("Database connected and migrations applied");

        Ok(db)
    }

    /// Connect without running migrations (for CLI commands).
    pub async fn connect_without_migrations(config: &DatabaseConfig) -> Result<Self, DbErr> {
        ensure_sqlite_parent(&config.url)?;

        let mut options = ConnectOptions::new(config.url.clone());
        options
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);

        let connection = SeaDatabase::connect(options).await?;
        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Run pending migrations.
    pub async fn run_migrations<M: MigratorTrait>(&self) -> Result<(), DbErr> {
        M::up(&self.connection, None).await
    }

    /// Rollback the last migration.
    pub async fn rollback_migration<M: MigratorTrait>(&self) -> Result<(), DbErr> {
        M::down(&self.connection, Some(1)).await
    }

    /// Get migration status (list all migrations with applied status).
    pub async fn migration_status<M: MigratorTrait>(&self) -> Result<Vec<(String, bool)>, DbErr> {
        use sea_orm::{EntityTrait, QueryOrder};
        use sea_orm_migration::seaql_migrations;

        // Get applied migrations from database
        let applied: std::collections::HashSet<String> = seaql_migrations::Entity::find()
            .order_by_asc(seaql_migrations::Column::Version)
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|m| m.version)
            .collect();

        let migrations: Vec<(String, bool)> = M::migrations()
            .iter()
            .map(|m| {
                let name = m.name().to_string();
                let is_applied = applied.contains(&name);
                (name, is_applied)
            })
            .collect();

        Ok(migrations)
    }

    /// Reset database and run all migrations fresh.
    pub async fn fresh_migrations<M: MigratorTrait>(&self) -> Result<(), DbErr> {
        M::fresh(&self.connection).await
    }
}

/// SQLite will not create missing directories for a `?mode=rwc` file.
fn ensure_sqlite_parent(url: &str) -> Result<(), DbErr> {
    let Some(rest) = url.strip_prefix("sqlite://") else {
        return Ok(());
    };
    let path = rest.split('?').next().unwrap_or(rest);
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DbErr::Custom(format!("cannot create {}: {}", parent.display(), e)))?;
        }
    }
    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Apply a migration action against one service's store.
pub async fn run_migration_action<M: MigratorTrait>(
    config: &DatabaseConfig,
    action: MigrateAction,
) -> Result<(), DbErr> {
    let db = Database::connect_without_migrations(config).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations::<M>().await?;
            tracing::info!(url = %config.url, "Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration::<M>().await?;
            tracing::info!(url = %config.url, "Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status::<M>().await?;
            println!("{}", config.url);
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations::<M>().await?;
            tracing::info!(url = %config.url, "Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Run `f` inside one database transaction.
///
/// Commits when `f` returns `Ok`, rolls back when it returns `Err`.
pub async fn transaction<F, T>(db: &DatabaseConnection, f: F) -> AppResult<T>
where
    F: for<'a> FnOnce(
            &'a DatabaseTransaction,
        ) -> Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>
        + Send,
    T: Send,
{
    let txn = db.begin().await.map_err(AppError::from)?;

    match f(&txn).await {
        Ok(result) => {
            txn.commit().await.map_err(AppError::from)?;
            Ok(result)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{ConnectionTrait, QueryResult, Statement};

    async fn memory_db() -> DatabaseConnection {
        let db = Database::connect_without_migrations(&DatabaseConfig::in_memory())
            .await
            .unwrap();
        let conn = db.get_connection();
        conn.execute_unprepared("CREATE TABLE items (id INTEGER PRIMARY KEY, name TEXT NOT NULL)")
            .await
            .unwrap();
        conn
    }

    async fn count(conn: &DatabaseConnection) -> i64 {
        let row: Option<QueryResult> = conn
            .query_one(Statement::from_string(
                conn.get_database_backend(),
                "SELECT COUNT(*) AS n FROM items".to_string(),
            ))
            .await
            .unwrap();
        row.unwrap().try_get("", "n").unwrap()
    }

    #[tokio::test]
    async fn transaction_commits_on_success() {
        let conn = memory_db().await;

        transaction(&conn, |txn| {
            Box::pin(async move {
                txn.execute_unprepared("INSERT INTO items (name) VALUES ('a')")
                    .await?;
                Ok(())
            })
        })
        .await
        .unwrap();

        assert_eq!(count(&conn).await, 1);
    }

    #[tokio::test]
    async fn transaction_rolls_back_on_error() {
        let conn = memory_db().await;

        let result: AppResult<()> = transaction(&conn, |txn| {
            Box::pin(async move {
                txn.execute_unprepared("INSERT INTO items (name) VALUES ('a')")
                    .await?;
                Err(AppError::validation("abort"))
            })
        })
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(count(&conn).await, 0);
    }

    #[test]
    fn memory_urls_skip_directory_creation() {
        assert!(ensure_sqlite_parent("sqlite::memory:").is_ok());
        assert!(ensure_sqlite_parent("postgres://localhost/db").is_ok());
    }
}
