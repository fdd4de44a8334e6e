use super::common::{deserialize_option_bool_from_string, PageParams};
use crate::{
    entities::service::{ActiveModel, Entity as ServiceEntity, Features, Model as ServiceModel},
    initializer::SeedableTrait,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::NotSet, DeriveIntoActiveModel, DerivePartialModel, FromQueryResult,
    IntoActiveModel, ModelTrait, Set,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

impl validator::ValidateLength<u64> for Features {
    fn length(&self) -> Option<u64> {
        Some(self.0.len() as u64)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServicePageParams {
    #[serde(default, deserialize_with = "deserialize_option_bool_from_string")]
    pub is_active: Option<bool>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

/// Service information
#[derive(Debug, Clone, Serialize, Deserialize, DerivePartialModel, FromQueryResult)]
#[serde(rename_all = "camelCase")]
#[sea_orm(entity = "<crate::entities::prelude::ServiceModel as ModelTrait>::Entity")]
pub struct ServiceInfo {
    pub id: i32,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub features: Features,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ServiceModel> for ServiceInfo {
    fn from(service: ServiceModel) -> Self {
        ServiceInfo {
            id: service.id,
            icon: service.icon,
            title: service.title,
            description: service.description,
            features: service.features,
            sort_order: service.sort_order,
            is_active: service.is_active,
            created_at: service.created_at,
            updated_at: service.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewService {
    #[validate(length(min = 1, max = 50, message = "Icon is required"))]
    pub icon: String,
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "At least one feature is required"))]
    pub features: Features,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, DeriveIntoActiveModel)]
pub struct NewServiceWithId {
    pub id: i32,
    pub icon: String,
    pub title: String,
    pub description: String,
    pub features: Features,
    pub sort_order: i32,
    pub is_active: bool,
}

impl SeedableTrait for NewServiceWithId {
    type ActiveModel = ActiveModel;
    type Entity = ServiceEntity;

    fn get_active_model(&self) -> Self::ActiveModel {
        self.clone().into_active_model()
    }
}

/// Partial update; absent fields keep their stored values.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateService {
    #[validate(length(min = 1, max = 50, message = "Icon is required"))]
    pub icon: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    #[validate(length(min = 1, message = "At least one feature is required"))]
    pub features: Option<Features>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl IntoActiveModel<ActiveModel> for UpdateService {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            icon: self.icon.map_or(NotSet, Set),
            title: self.title.map_or(NotSet, Set),
            description: self.description.map_or(NotSet, Set),
            features: self.features.map_or(NotSet, Set),
            sort_order: self.sort_order.map_or(NotSet, Set),
            is_active: self.is_active.map_or(NotSet, Set),
            ..Default::default()
        }
    }
}

fn default_true() -> bool {
    true
}
