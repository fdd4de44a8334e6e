use super::common::{deserialize_double_option, deserialize_option_bool_from_string, PageParams};
use crate::{
    entities::skill::{ActiveModel, Entity as SkillEntity, Model as SkillModel},
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
pub struct SkillPageParams {
    pub name: Option<String>,
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_bool_from_string")]
    pub is_active: Option<bool>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

/// Skill information
#[derive(Debug, Clone, Serialize, Deserialize, DerivePartialModel, FromQueryResult)]
#[serde(rename_all = "camelCase")]
#[sea_orm(entity = "<crate::entities::prelude::SkillModel as ModelTrait>::Entity")]
pub struct SkillInfo {
    pub id: i32,
    pub name: String,
    pub level: i32,
    pub icon: String,
    pub color: Option<String>,
    pub category: String,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<SkillModel> for SkillInfo {
    fn from(skill: SkillModel) -> Self {
        SkillInfo {
            id: skill.id,
            name: skill.name,
            level: skill.level,
            icon: skill.icon,
            color: skill.color,
            category: skill.category,
            sort_order: skill.sort_order,
            is_active: skill.is_active,
            created_at: skill.created_at,
            updated_at: skill.updated_at,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewSkill {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: String,
    #[validate(range(min = 0, max = 100, message = "Level must be between 0 and 100"))]
    pub level: i32,
    #[validate(length(min = 1, max = 50, message = "Icon is required"))]
    pub icon: String,
    pub color: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Category is required"))]
    pub category: String,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

#[derive(Clone, Debug, Default, PartialEq, DeriveIntoActiveModel)]
pub struct NewSkillWithId {
    pub id: i32,
    pub name: String,
    pub level: i32,
    pub icon: String,
    pub color: Option<String>,
    pub category: String,
    pub sort_order: i32,
    pub is_active: bool,
}

impl SeedableTrait for NewSkillWithId {
    type ActiveModel = ActiveModel;
    type Entity = SkillEntity;

    fn get_active_model(&self) -> Self::ActiveModel {
        self.clone().into_active_model()
    }
}

/// Partial update; absent fields keep their stored values.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSkill {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: Option<String>,
    #[validate(range(min = 0, max = 100, message = "Level must be between 0 and 100"))]
    pub level: Option<i32>,
    #[validate(length(min = 1, max = 50, message = "Icon is required"))]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "deserialize_double_option")]
    pub color: Option<Option<String>>,
    #[validate(length(min = 1, max = 50, message = "Category is required"))]
    pub category: Option<String>,
    pub sort_order: Option<i32>,
    pub is_active: Option<bool>,
}

impl IntoActiveModel<ActiveModel> for UpdateSkill {
    fn into_active_model(self) -> ActiveModel {
        ActiveModel {
            name: self.name.map_or(NotSet, Set),
            level: self.level.map_or(NotSet, Set),
            icon: self.icon.map_or(NotSet, Set),
            color: self.color.map_or(NotSet, Set),
            category: self.category.map_or(NotSet, Set),
            sort_order: self.sort_order.map_or(NotSet, Set),
            is_active: self.is_active.map_or(NotSet, Set),
            ..Default::default()
        }
    }
}

fn default_true() -> bool {
    true
}
