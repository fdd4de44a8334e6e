//! `SeaORM` Entity for social links.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "social_link")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub icon: String,
    pub label: String,
    pub url: String,
    /// Hover color class applied by the frontend.
    pub color: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
