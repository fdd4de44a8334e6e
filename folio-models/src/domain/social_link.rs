use super::common::{deserialize_double_option, deserialize_option_bool_from_string, PageParams};
use crate::{
    entities::social_link::{ActiveModel, Entity as SocialLinkEntity, Model as SocialLinkModel},
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
pub struct SocialLinkPageParams {
    pub label: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_bool_from_string")]
    pub is_active: Option<bool>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

/// Social link information
#[derive(Debug, Clone, Serialize, Deserialize, DerivePartialModel, FromQueryResult)]
#[serde(rename_all = "camelCase")]
#[sea_orm(entity = "<crate::entities::prelude::SocialLinkModel as ModelTrait>::Entity")]
pub struct SocialLinkInfo {
    pub id: i32,
    pub icon: String,
    pub label: String,
    pub url: String,
    pub color: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<SocialLinkModel> for SocialLinkInfo {
    fn from(link: SocialLinkModel) -> Self {
        SocialLinkInfo {
            id: link.id,
            icon: link.icon,
            label: link.label,
            url: link.url,
            color: link.color,
            sort_order: link.sort_order,
            is_active: link.is_active,
            created_at: link.created_at,
            updated_at: link.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSocialLink {
    #[validate(length(min = 1, max = 50, message = "Icon is required"))]
    pub icon: String,
    #[validate(length(min = 1, max = 100, message = "Label is required"))]
    pub label: String,
    #[validate(url(message = "URL must be valid"))]
    pub url: String,
    pub color: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, DeriveIntoActiveModel)]
pub struct NewSocialLinkWithId {
    pub id: i32,
    pub icon: String,
    pub label: String,
    pub url: String,
    pub color: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
}

impl SeedableTrait for NewSocialLinkWithId {
    type ActiveModel = ActiveModel;
    type Entity = SocialLinkEntity;

    fn get_active_model(&self) -> Self::ActiveModel {
        self.clone().into_active_model()
    }
}

/// Partial update; absent fields keep their stored values.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSocialLink {
    #[validate(length(min = 1, max = 50, message = "Icon is required"))]
    pub icon: Option<String>,
    #[validate(length(min = 1, max = 100, message = "Label is required"))]
    pub label: Option<String>,
    #[validate(url(message = "URL must be valid"))]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub color: Option<Option<String>>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl IntoActiveModel<ActiveModel> for UpdateSocialLink {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            icon: self.icon.map_or(NotSet, Set),
            label: self.label.map_or(NotSet, Set),
            url: self.url.map_or(NotSet, Set),
            color: self.color.map_or(NotSet, Set),
            sort_order: self.sort_order.map_or(NotSet, Set),
            is_active: self.is_active.map_or(NotSet, Set),
            ..Default::default()
        }
    }
}

fn default_true() -> bool {
    true
}
