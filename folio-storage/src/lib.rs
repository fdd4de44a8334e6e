mod migration;
mod sql;

use folio_error::{storage::StorageError, FolioError, FolioResult};
use folio_models::{
    initializer::{initializers, InitContext},
    settings::Settings,
};
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, TransactionTrait};
use sql::sqlite;
use std::sync::Arc;
use tracing::{info, instrument};

/// Global database manager struct
pub struct DbManager {
    db_conn: Option<DatabaseConnection>,
}

impl DbManager {
    #[instrument(name = "init-db-manager", skip_all)]
    pub async fn init(settings: &Settings) -> FolioResult<Arc<Self>> {
        let db_conn = {
            let db = sqlite::init_db(&settings.db.sqlite).await.map_err(|e| {
                FolioError::InitializationError(format!("Failed to init SQLite database: {e}"))
            })?;

            // Run database migrations
            Migrator::up(&db, None).await.map_err(|e| {
                FolioError::InitializationError(format!("Failed to migrate SQLite database: {e}"))
            })?;

            seed_database(&db, settings).await.map_err(|e| {
                FolioError::InitializationError(format!("Failed to seed SQLite database: {e}"))
            })?;

            db
        };

        let db_manager = Arc::new(DbManager {
            db_conn: Some(db_conn),
        });

        info!("Database manager initialized successfully");
        Ok(db_manager)
    }

    #[inline]
    pub fn get_connection(&self) -> FolioResult<DatabaseConnection, StorageError> {
        self.db_conn
            .as_ref()
            .ok_or(StorageError::StorageUnavailable)
            .cloned()
    }

    #[inline]
    #[instrument(name = "db_close", skip_all)]
    pub async fn close(&self) -> FolioResult<()> {
        info!("🛑 Closing database connections...");
        if let Some(db) = &self.db_conn {
            db.clone().close().await?;
        }
        info!("✅ Database connections closed successfully");
        Ok(())
    }
}

/// Run every registered initializer's seeding step, one transaction each.
///
/// Seeding lives outside the migration because seed content is derived from
/// the resolved settings (the admin account and contact email come from
/// configuration), and `MigrationTrait` has no access to those.
#[instrument(name = "seeding-data", skip_all)]
async fn seed_database(db: &DatabaseConnection, settings: &Settings) -> FolioResult<()> {
    let mut ctx = InitContext::new(settings.clone());
    for initializer in initializers() {
        let transaction = db.begin().await?;
        info!(initializer = initializer.name(), "start seeding data");
        initializer.seeding_data(&transaction, &mut ctx).await?;
        transaction.commit().await?;
        info!(initializer = initializer.name(), "seeding data success");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_models::{
        entities::prelude::{About, User},
        enums::common::Role,
        settings::{Admin, Inner},
    };
    use folio_utils::hash;
    use sea_orm::{ConnectOptions, Database, EntityTrait, PaginatorTrait};

    fn test_settings() -> Settings {
        Settings::from(Inner {
            admin: Admin {
                email: "admin@example.com".into(),
                password: "s3cret!".into(),
                name: "Admin".into(),
            },
            ..Default::default()
        })
    }

    async fn memory_db() -> DatabaseConnection {
        // A single pooled connection keeps every query on the same in-memory
        // database
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    #[tokio::test]
    async fn test_seed_creates_admin_account() {
        let db = memory_db().await;
        seed_database(&db, &test_settings()).await.unwrap();

        let user = User::find().one(&db).await.unwrap().unwrap();
        assert_eq!(user.email, "admin@example.com");
        assert_eq!(user.role, Role::Admin);
        assert!(hash::bcrypt_check("s3cret!", &user.password));
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let db = memory_db().await;
        let settings = test_settings();
        seed_database(&db, &settings).await.unwrap();
        seed_database(&db, &settings).await.unwrap();

        assert_eq!(User::find().count(&db).await.unwrap(), 1);
        assert_eq!(About::find().count(&db).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_seed_fails_without_admin_credentials() {
        let db = memory_db().await;
        let settings = Settings::from(Inner::default());

        assert!(seed_database(&db, &settings).await.is_err());
    }

    #[tokio::test]
    async fn test_about_seed_takes_name_from_admin() {
        let db = memory_db().await;
        seed_database(&db, &test_settings()).await.unwrap();

        let about = About::find().one(&db).await.unwrap().unwrap();
        assert_eq!(about.id, 1);
        assert_eq!(about.name, "Admin");
    }
}
