use folio_models::initializer::initializers;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};

/// Fresh in-memory SQLite carrying the full schema and no rows.
pub(crate) async fn memory_db() -> DatabaseConnection {
    // A single pooled connection keeps every query on the same in-memory
    // database
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.unwrap();

    let backend = db.get_database_backend();
    for initializer in initializers() {
        db.execute(backend.build(&initializer.to_create_table_stmt(backend)))
            .await
            .unwrap();
        for stmt in initializer
            .to_create_indexes_stmt(backend)
            .unwrap_or_default()
        {
            db.execute(backend.build(&stmt)).await.unwrap();
        }
    }

    db
}
