use super::common::{deserialize_double_option, deserialize_option_bool_from_string, PageParams};
use crate::{
    entities::contact_method::{
        ActiveModel, Entity as ContactMethodEntity, Model as ContactMethodModel,
    },
    initializer::SeedableTrait,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::NotSet, DeriveIntoActiveModel, DerivePartialModel, FromQueryResult,
    IntoActiveModel, ModelTrait, Set,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactMethodPageParams {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_bool_from_string")]
    pub is_active: Option<bool>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

/// Contact method information
#[derive(Debug, Clone, Serialize, Deserialize, DerivePartialModel, FromQueryResult)]
#[serde(rename_all = "camelCase")]
#[sea_orm(entity = "<crate::entities::prelude::ContactMethodModel as ModelTrait>::Entity")]
pub struct ContactMethodInfo {
    pub id: i32,
    pub icon: String,
    pub title: String,
    pub value: String,
    pub description: Option<String>,
    pub gradient: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ContactMethodModel> for ContactMethodInfo {
    fn from(method: ContactMethodModel) -> Self {
        ContactMethodInfo {
            id: method.id,
            icon: method.icon,
            title: method.title,
            value: method.value,
            description: method.description,
            gradient: method.gradient,
            sort_order: method.sort_order,
            is_active: method.is_active,
            created_at: method.created_at,
            updated_at: method.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewContactMethod {
    #[validate(length(min = 1, max = 50, message = "Icon is required"))]
    pub icon: String,
    #[validate(length(min = 1, max = 100, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 255, message = "Value is required"))]
    pub value: String,
    pub description: Option<String>,
    pub gradient: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, DeriveIntoActiveModel)]
pub struct NewContactMethodWithId {
    pub id: i32,
    pub icon: String,
    pub title: String,
    pub value: String,
    pub description: Option<String>,
    pub gradient: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

impl SeedableTrait for NewContactMethodWithId {
    type ActiveModel = ActiveModel;
    type Entity = ContactMethodEntity;

    fn get_active_model(&self) -> Self::ActiveModel {
        self.clone().into_active_model()
    }
}

/// Partial update; absent fields keep their stored values.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateContactMethod {
    #[validate(length(min = 1, max = 50, message = "Icon is required"))]
    pub icon: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 255, message = "Value is required"))]
    pub value: Option<String>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub gradient: Option<Option<String>>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl IntoActiveModel<ActiveModel> for UpdateContactMethod {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            icon: self.icon.map_or(NotSet, Set),
            title: self.title.map_or(NotSet, Set),
            value: self.value.map_or(NotSet, Set),
            description: self.description.map_or(NotSet, Set),
            gradient: self.gradient.map_or(NotSet, Set),
            sort_order: self.sort_order.map_or(NotSet, Set),
            is_active: self.is_active.map_or(NotSet, Set),
            ..Default::default()
        }
    }
}

fn default_true() -> bool {
    true
}
