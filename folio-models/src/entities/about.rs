//! `SeaORM` Entity for the profile singleton.
//!
//! At most one row exists (id = 1); the repository refuses a second insert.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "about")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// Professional title shown in the hero section.
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
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
