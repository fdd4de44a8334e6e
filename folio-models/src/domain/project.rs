use super::common::{deserialize_double_option, deserialize_option_bool_from_string, PageParams};
use crate::{
    entities::project::{ActiveModel, Entity as ProjectEntity, Model as ProjectModel, Tags},
    initializer::SeedableTrait,
};
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveValue::NotSet, DeriveIntoActiveModel, DerivePartialModel, FromQueryResult,
    IntoActiveModel, ModelTrait, Set,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

impl validator::ValidateLength<u64> for Tags {
    fn length(&self) -> Option<u64> {
        Some(self.0.len() as u64)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPageParams {
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_bool_from_string")]
    pub is_featured: Option<bool>,
    #[serde(default, deserialize_with = "deserialize_option_bool_from_string")]
    pub is_active: Option<bool>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

/// Project information
#[derive(Debug, Clone, Serialize, Deserialize, DerivePartialModel, FromQueryResult)]
#[serde(rename_all = "camelCase")]
#[sea_orm(entity = "<crate::entities::prelude::ProjectModel as ModelTrait>::Entity")]
pub struct ProjectInfo {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub category: String,
    pub tags: Tags,
    pub live_demo: Option<String>,
    pub github: Option<String>,
    pub date: Option<String>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ProjectModel> for ProjectInfo {
    fn from(project: ProjectModel) -> Self {
        ProjectInfo {
            id: project.id,
            title: project.title,
            description: project.description,
            image: project.image,
            category: project.category,
            tags: project.tags,
            live_demo: project.live_demo,
            github: project.github,
            date: project.date,
            is_featured: project.is_featured,
            sort_order: project.sort_order,
            is_active: project.is_active,
            created_at: project.created_at,
            updated_at: project.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    #[validate(length(min = 1, max = 150, message = "Title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub image: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Category is required"))]
    pub category: String,
    #[validate(length(min = 1, message = "At least one tag is required"))]
    pub tags: Tags,
    #[validate(url(message = "Live demo must be a valid URL"))]
    pub live_demo: Option<String>,
    #[validate(url(message = "GitHub must be a valid URL"))]
    pub github: Option<String>,
    #[validate(length(max = 50, message = "Date must be at most 50 characters"))]
    pub date: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, DeriveIntoActiveModel)]
pub struct NewProjectWithId {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    pub category: String,
    pub tags: Tags,
    pub live_demo: Option<String>,
    pub github: Option<String>,
    pub date: Option<String>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub is_active: bool,
}

impl SeedableTrait for NewProjectWithId {
    type ActiveModel = ActiveModel;
    type Entity = ProjectEntity;

    fn get_active_model(&self) -> Self::ActiveModel {
        self.clone().into_active_model()
    }
}

/// Partial update; absent fields keep their stored values.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProject {
    #[validate(length(min = 1, max = 150, message = "Title is required"))]
    pub title: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub image: Option<Option<String>>,
    #[validate(length(min = 1, max = 50, message = "Category is required"))]
    pub category: Option<String>,
    #[validate(length(min = 1, message = "At least one tag is required"))]
    pub tags: Option<Tags>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub live_demo: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub github: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub date: Option<Option<String>>,
    pub is_featured: Option<bool>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl IntoActiveModel<ActiveModel> for UpdateProject {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            title: self.title.map_or(NotSet, Set),
            description: self.description.map_or(NotSet, Set),
            image: self.image.map_or(NotSet, Set),
            category: self.category.map_or(NotSet, Set),
            tags: self.tags.map_or(NotSet, Set),
            live_demo: self.live_demo.map_or(NotSet, Set),
            github: self.github.map_or(NotSet, Set),
            date: self.date.map_or(NotSet, Set),
            is_featured: self.is_featured.map_or(NotSet, Set),
            sort_order: self.sort_order.map_or(NotSet, Set),
            is_active: self.is_active.map_or(NotSet, Set),
            ..Default::default()
        }
    }
}

fn default_true() -> bool {
    true
}
