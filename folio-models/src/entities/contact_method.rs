//! `SeaORM` Entity for contact methods shown on the contact page.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "contact_method")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub icon: String,
    pub title: String,
    /// Displayed value (address, handle, city, ...).
    pub value: String,
    pub description: Option<String>,
    pub gradient: Option<String>,
    pub sort_order: i32,
    pub is_active: bool,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
