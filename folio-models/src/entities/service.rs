//! `SeaORM` Entity for offered services.

use folio_macros::IntoActiveValue;
use sea_orm::{entity::prelude::*, FromJsonQueryResult};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "service")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Icon name rendered by the frontend icon set.
    pub icon: String,
    pub title: String,
    pub description: String,
    pub features: Features,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

/// Feature list stored as a JSON string array.
#[derive(
    Clone, Debug, Default, PartialEq, Eq, Serialize, IntoActiveValue, Deserialize,
    FromJsonQueryResult,
)]
pub struct Features(pub Vec<String>);

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
