use crate::{idens, settings::Settings};
use async_trait::async_trait;
use folio_error::{init::InitContextError, FolioError, FolioResult};
use sea_orm::{
    sea_query::{IndexCreateStatement, TableCreateStatement, TableDropStatement},
    ActiveModelTrait, DatabaseBackend, DatabaseTransaction, DbErr, EntityTrait,
};
use std::{any::Any, collections::HashMap};

#[async_trait]
pub trait FolioInitializer: Send + Sync {
    fn order(&self) -> i32;

    fn name(&self) -> &str;

    fn has_update_col(&self) -> bool;

    fn to_create_table_stmt(&self, backend: DatabaseBackend) -> TableCreateStatement;

    fn to_drop_table_stmt(&self, backend: DatabaseBackend) -> TableDropStatement;

    fn to_create_indexes_stmt(&self, backend: DatabaseBackend)
        -> Option<Vec<IndexCreateStatement>>;

    async fn seeding_data(
        &self,
        transaction: &DatabaseTransaction,
        ctx: &mut InitContext,
    ) -> Result<(), DbErr>;
}

/// Trait for types that can be seeded into the database
pub trait SeedableTrait: Send + Sync + 'static {
    /// The active model type for database insertion
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>;
    /// The entity type for database operations
    type Entity: EntityTrait;

    /// Convert self into an active model
    fn get_active_model(&self) -> Self::ActiveModel;
}

/// Trait for database initializers that can seed data
#[async_trait]
pub trait DataSeederTrait<T: SeedableTrait + Clone> {
    /// Get the initial seed data
    async fn get_seed_data(&self, ctx: &mut InitContext) -> Result<Option<Vec<T>>, DbErr>;
}

/// Helper trait that combines FolioInitializer and DataSeeder
#[async_trait]
pub trait SeedableInitializerTrait<T: SeedableTrait + Clone>:
    FolioInitializer + DataSeederTrait<T>
{
    /// Default implementation for seeding data
    async fn seed_data(
        &self,
        transaction: &DatabaseTransaction,
        ctx: &mut InitContext,
    ) -> Result<(), DbErr> {
        // A non-empty table was seeded on an earlier boot; never re-insert
        if T::Entity::find().one(transaction).await?.is_some() {
            return Ok(());
        }

        if let Some(seed_data) = self.get_seed_data(ctx).await? {
            // Skip when there is no data to seed to avoid empty INSERTs
            if seed_data.is_empty() {
                return Ok(());
            }

            let active_models: Vec<T::ActiveModel> = seed_data
                .clone()
                .into_iter()
                .map(|d| d.get_active_model())
                .collect();

            T::Entity::insert_many(active_models)
                .exec(transaction)
                .await?;

            ctx.set(self.name(), seed_data);
        }
        Ok(())
    }
}

pub fn initializers() -> Vec<Box<dyn FolioInitializer>> {
    let mut initializers: Vec<Box<dyn FolioInitializer>> = vec![
        Box::new(idens::user::User::Table),
        Box::new(idens::about::About::Table),
        Box::new(idens::project::Project::Table),
        Box::new(idens::service::Service::Table),
        Box::new(idens::skill::Skill::Table),
        Box::new(idens::experience::Experience::Table),
        Box::new(idens::contact_method::ContactMethod::Table),
        Box::new(idens::social_link::SocialLink::Table),
        Box::new(idens::contact::Contact::Table),
    ];

    initializers.sort_by_key(|init| init.order());
    initializers
}

/// A context for storing initialization data between different initializers
///
/// This struct provides a type-safe way to store and retrieve vectors of initialization data
/// that can be shared between different initialization steps. It also carries the resolved
/// settings so seeders can derive records from configuration (e.g. the admin account).
pub struct InitContext {
    settings: Settings,
    /// Internal storage using type-erased vectors of data
    data: HashMap<String, Vec<Box<dyn Any + Send + Sync>>>,
}

impl InitContext {
    /// Creates a new initialization context over the resolved settings
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            data: HashMap::new(),
        }
    }

    /// Returns the settings the process was started with
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Stores a vector of initialization data under the specified key
    ///
    /// # Arguments
    /// * `key` - The key under which to store the data
    /// * `values` - A vector of values to store
    pub fn set<T: 'static + Send + Sync>(&mut self, key: &str, values: Vec<T>) {
        let boxed_values: Vec<Box<dyn Any + Send + Sync>> = values
            .into_iter()
            .map(|v| Box::new(v) as Box<dyn Any + Send + Sync>)
            .collect();
        self.data.insert(key.into(), boxed_values);
    }

    /// Retrieves a vector of previously stored data for the specified key and type
    ///
    /// # Arguments
    /// * `key` - The key to lookup
    ///
    /// # Returns
    /// * `Result<Vec<&T>, InitContextError>` - A vector of references to the stored data if found and all elements match the expected type
    pub fn get<T: 'static>(&self, key: &str) -> FolioResult<Vec<&T>> {
        let values =
            self.data
                .get(key)
                .ok_or(FolioError::InitContextError(InitContextError::KeyNotFound(
                    key.into(),
                )))?;

        values
            .iter()
            .map(|value| {
                value.downcast_ref::<T>().ok_or(FolioError::InitContextError(
                    InitContextError::TypeMismatch(key.into()),
                ))
            })
            .collect()
    }
}
