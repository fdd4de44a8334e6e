use super::common::deserialize_double_option;
use crate::{
    entities::about::{ActiveModel, Entity as AboutEntity, Model as AboutModel},
    initializer::SeedableTrait,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::NotSet, DeriveIntoActiveModel, DerivePartialModel, FromQueryResult,
    IntoActiveModel, ModelTrait, Set,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Profile information
#[derive(Debug, Clone, Serialize, Deserialize, DerivePartialModel, FromQueryResult)]
#[serde(rename_all = "camelCase")]
#[sea_orm(entity = "<crate::entities::prelude::AboutModel as ModelTrait>::Entity")]
pub struct AboutInfo {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub bio: String,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub resume: Option<String>,
    pub years_experience: i32,
    pub projects_completed: i32,
    pub open_source_contributions: i32,
    pub global_reach_text: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<AboutModel> for AboutInfo {
    fn from(about: AboutModel) -> Self {
        AboutInfo {
            id: about.id,
            name: about.name,
            title: about.title,
            subtitle: about.subtitle,
            bio: about.bio,
            description: about.description,
            avatar: about.avatar,
            resume: about.resume,
            years_experience: about.years_experience,
            projects_completed: about.projects_completed,
            open_source_contributions: about.open_source_contributions,
            global_reach_text: about.global_reach_text,
            created_at: about.created_at,
            updated_at: about.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAbout {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub subtitle: Option<String>,
    #[validate(length(min = 1, message = "Bio is required"))]
    pub bio: String,
    pub description: Option<String>,
    #[validate(url(message = "Avatar must be a valid URL"))]
    pub avatar: Option<String>,
    #[validate(url(message = "Resume must be a valid URL"))]
    pub resume: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Years of experience cannot be negative"))]
    pub years_experience: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Projects completed cannot be negative"))]
    pub projects_completed: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Open source contributions cannot be negative"))]
    pub open_source_contributions: i32,
    pub global_reach_text: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, DeriveIntoActiveModel)]
pub struct NewAboutWithId {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub bio: String,
    pub description: Option<String>,
    pub avatar: Option<String>,
    pub resume: Option<String>,
    pub years_experience: i32,
    pub projects_completed: i32,
    pub open_source_contributions: i32,
    pub global_reach_text: Option<String>,
}

impl SeedableTrait for NewAboutWithId {
    type ActiveModel = ActiveModel;
    type Entity = AboutEntity;

    fn get_active_model(&self) -> Self::ActiveModel {
        self.clone().into_active_model()
    }
}

/// Partial update; absent fields keep their stored values.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAbout {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub subtitle: Option<Option<String>>,
    #[validate(length(min = 1, message = "Bio is required"))]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub avatar: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub resume: Option<Option<String>>,
    #[validate(range(min = 0, message = "Years of experience cannot be negative"))]
    pub years_experience: Option<i32>,
    #[validate(range(min = 0, message = "Projects completed cannot be negative"))]
    pub projects_completed: Option<i32>,
    #[validate(range(min = 0, message = "Open source contributions cannot be negative"))]
    pub open_source_contributions: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub global_reach_text: Option<Option<String>>,
}

impl IntoActiveModel<ActiveModel> for UpdateAbout {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: self.name.map_or(NotSet, Set),
            title: self.title.map_or(NotSet, Set),
            subtitle: self.subtitle.map_or(NotSet, Set),
            bio: self.bio.map_or(NotSet, Set),
            description: self.description.map_or(NotSet, Set),
            avatar: self.avatar.map_or(NotSet, Set),
            resume: self.resume.map_or(NotSet, Set),
            years_experience: self.years_experience.map_or(NotSet, Set),
            projects_completed: self.projects_completed.map_or(NotSet, Set),
            open_source_contributions: self.open_source_contributions.map_or(NotSet, Set),
            global_reach_text: self.global_reach_text.map_or(NotSet, Set),
            ..Default::default()
        }
    }
}
