use crate::{
    entities::user::{ActiveModel, Entity as UserEntity, Model as UserModel},
    enums::common::Role,
    initializer::SeedableTrait,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    DeriveIntoActiveModel, DerivePartialModel, FromQueryResult, IntoActiveModel, ModelTrait,
};
use serde::{Deserialize, Serialize};

/// Sanitized account view. The password hash never leaves the API.
#[derive(Debug, Clone, Serialize, Deserialize, DerivePartialModel, FromQueryResult)]
#[serde(rename_all = "camelCase")]
#[sea_orm(entity = "<crate::entities::prelude::UserModel as ModelTrait>::Entity")]
pub struct UserInfo {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<UserModel> for UserInfo {
    fn from(user: UserModel) -> Self {
        UserInfo {
            id: user.id,
            email: user.email,
            name: user.name,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveIntoActiveModel)]
pub struct NewUserWithId {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub password: String,
    pub role: Role,
}

impl SeedableTrait for NewUserWithId {
    type ActiveModel = ActiveModel;
    type Entity = UserEntity;

    fn get_active_model(&self) -> Self::ActiveModel {
        self.clone().into_active_model()
    }
}
