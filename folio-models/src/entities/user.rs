//! `SeaORM` Entity for the admin account table.
//!
//! The password column always holds a bcrypt hash and is stripped before
//! anything leaves the API (see `UserInfo`).

use crate::enums::common::Role;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Login email, unique.
    pub email: String,
    pub name: String,
    /// Bcrypt hash, never the plaintext.
    pub password: String,
    pub role: Role,
    pub created_at: Option<DateTimeUtc>,
    pub updated_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
