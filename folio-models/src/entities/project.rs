//! `SeaORM` Entity for portfolio projects.

use folio_macros::IntoActiveValue;
use sea_orm::{entity::prelude::*, FromJsonQueryResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub image: Option<String>,
    /// Free-form category used by the public filter bar.
    pub category: String,
    pub tags: Tags,
    pub live_demo: Option<String>,
    pub github: Option<String>,
    /// Display date, e.g. "2025".
    pub date: Option<String>,
    pub is_featured: bool,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

/// Tag list stored as a JSON string array.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, IntoActiveValue, Deserialize,
    FromJsonQueryResult,
)]
pub struct Tags(pub Vec<String>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
