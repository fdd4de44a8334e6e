//! Repository for the profile singleton.
//!
//! The about record is stored as a single row (id = 1). Creating a second
//! row is rejected so the profile stays unambiguous.

use folio_error::{storage::StorageError, StorageResult};
use folio_models::entities::prelude::{About, AboutActiveModel, AboutModel};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, Set};

/// Fixed primary key used for the profile singleton row.
pub const ABOUT_SINGLETON_ID: i32 = 1;

pub struct AboutRepository;

impl AboutRepository {
    /// Load the profile singleton row.
    pub async fn get<C>(db: &C) -> StorageResult<Option<AboutModel>>
    where
        C: ConnectionTrait,
    {
        Ok(About::find_by_id(ABOUT_SINGLETON_ID).one(db).await?)
    }

    /// Create the profile row; fails with `AlreadyExists` when one is present.
    pub async fn create<C>(mut about: AboutActiveModel, db: &C) -> StorageResult<AboutModel>
    where
        C: ConnectionTrait,
    {
        if About::find().count(db).await? > 0 {
            return Err(StorageError::AlreadyExists("about".into()));
        }

        about.id = Set(ABOUT_SINGLETON_ID);
        Ok(about.insert(db).await?)
    }

    /// Apply a partial update to the profile row.
    pub async fn update<C>(mut about: AboutActiveModel, db: &C) -> StorageResult<AboutModel>
    where
        C: ConnectionTrait,
    {
        if !about.is_changed() {
            return Self::get(db)
                .await?
                .ok_or_else(|| StorageError::EntityNotFound("about".into()));
        }

        about.id = Set(ABOUT_SINGLETON_ID);
        match about.update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => Err(StorageError::EntityNotFound("about".into())),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete<C>(db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let result = About::delete_by_id(ABOUT_SINGLETON_ID).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(StorageError::EntityNotFound("about".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;
    use folio_models::domain::prelude::{NewAbout, UpdateAbout};
    use sea_orm::IntoActiveModel;

    fn sample() -> NewAbout {
        NewAbout {
            name: "Sam".into(),
            title: "Developer".into(),
            subtitle: None,
            bio: "bio".into(),
            description: None,
            avatar: None,
            resume: None,
            years_experience: 2,
            projects_completed: 5,
            open_source_contributions: 1,
            global_reach_text: None,
        }
    }

    #[tokio::test]
    async fn test_second_create_is_rejected() {
        let db = memory_db().await;
        AboutRepository::create(sample().into_active_model(), &db)
            .await
            .unwrap();

        let err = AboutRepository::create(sample().into_active_model(), &db)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::AlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_update_absent_row_is_entity_not_found() {
        let db = memory_db().await;
        let patch = UpdateAbout {
            title: Some("Engineer".into()),
            ..Default::default()
        };

        let err = AboutRepository::update(patch.into_active_model(), &db)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn test_create_get_delete_roundtrip() {
        let db = memory_db().await;
        let created = AboutRepository::create(sample().into_active_model(), &db)
            .await
            .unwrap();
        assert_eq!(created.id, ABOUT_SINGLETON_ID);

        assert!(AboutRepository::get(&db).await.unwrap().is_some());
        AboutRepository::delete(&db).await.unwrap();
        assert!(AboutRepository::get(&db).await.unwrap().is_none());
    }
}
