use super::common::{deserialize_option_bool_from_string, PageParams};
use crate::{
    entities::experience::{ActiveModel, Entity as ExperienceEntity, Model as ExperienceModel},
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
pub struct ExperiencePageParams {
    pub title: Option<String>,
    pub company: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_bool_from_string")]
    pub is_active: Option<bool>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

/// Experience information
#[derive(Debug, Clone, Serialize, Deserialize, DerivePartialModel, FromQueryResult)]
#[serde(rename_all = "camelCase")]
#[sea_orm(entity = "<crate::entities::prelude::ExperienceModel as ModelTrait>::Entity")]
pub struct ExperienceInfo {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ExperienceModel> for ExperienceInfo {
    fn from(experience: ExperienceModel) -> Self {
        ExperienceInfo {
            id: experience.id,
            title: experience.title,
            company: experience.company,
            period: experience.period,
            description: experience.description,
            sort_order: experience.sort_order,
            is_active: experience.is_active,
            created_at: experience.created_at,
            updated_at: experience.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewExperience {
    #[validate(length(min = 1, max = 150, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, max = 150, message = "Company is required"))]
    pub company: String,
    #[validate(length(min = 1, max = 50, message = "Period is required"))]
    pub period: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, DeriveIntoActiveModel)]
pub struct NewExperienceWithId {
    pub id: i32,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub sort_order: i32,
    pub is_active: bool,
}

impl SeedableTrait for NewExperienceWithId {
    type ActiveModel = ActiveModel;
    type Entity = ExperienceEntity;

    fn get_active_model(&self) -> Self::ActiveModel {
        self.clone().into_active_model()
    }
}

/// Partial update; absent fields keep their stored values.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExperience {
    #[validate(length(min = 1, max = 150, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 150, message = "Company is required"))]
    pub company: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Period is required"))]
    pub period: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl IntoActiveModel<ActiveModel> for UpdateExperience {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            title: self.title.map_or(NotSet, Set),
            company: self.company.map_or(NotSet, Set),
            period: self.period.map_or(NotSet, Set),
            description: self.description.map_or(NotSet, Set),
            sort_order: self.sort_order.map_or(NotSet, Set),
            is_active: self.is_active.map_or(NotSet, Set),
            ..Default::default()
        }
    }
}

fn default_true() -> bool {
    true
}
