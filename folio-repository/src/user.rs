use folio_error::StorageResult;
use folio_models::{
    domain::prelude::UserInfo,
    entities::prelude::{User, UserColumn, UserModel},
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

pub struct UserRepository;

impl UserRepository {
    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<UserModel>>
    where
        C: ConnectionTrait,
    {
        Ok(User::find_by_id(id).one(db).await?)
    }

    pub async fn find_by_email<C>(email: &str, db: &C) -> StorageResult<Option<UserModel>>
    where
        C: ConnectionTrait,
    {
        Ok(User::find()
            .filter(UserColumn::Email.eq(email))
            .one(db)
            .await?)
    }

    /// Sanitized projection; never exposes the password hash.
    pub async fn find_user_info<C>(id: i32, db: &C) -> StorageResult<Option<UserInfo>>
    where
        C: ConnectionTrait,
    {
        Ok(User::find_by_id(id)
            .into_partial_model::<UserInfo>()
            .one(db)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;
    use folio_models::{domain::prelude::NewUserWithId, enums::common::Role};
    use sea_orm::{ActiveModelTrait, IntoActiveModel};

    async fn seed_user(db: &sea_orm::DatabaseConnection) {
        NewUserWithId {
            id: 1,
            email: "owner@example.com".into(),
            name: "Owner".into(),
            password: "$2b$08$hash".into(),
            role: Role::Admin,
        }
        .into_active_model()
        .insert(db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let db = memory_db().await;
        seed_user(&db).await;

        let found = UserRepository::find_by_email("owner@example.com", &db)
            .await
            .unwrap();
        assert!(found.is_some());
        assert!(UserRepository::find_by_email("nobody@example.com", &db)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_find_user_info_is_sanitized() {
        let db = memory_db().await;
        seed_user(&db).await;

        let info = UserRepository::find_user_info(1, &db).await.unwrap().unwrap();
        assert_eq!(info.email, "owner@example.com");
        assert_eq!(info.role, Role::Admin);
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("password").is_none());
    }
}
