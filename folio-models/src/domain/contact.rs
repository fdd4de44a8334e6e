use super::common::{deserialize_option_bool_from_string, PageParams};
use crate::entities::contact::{ActiveModel, Model as ContactModel};
use chrono::{DateTime, Utc};
use sea_orm::{DeriveIntoActiveModel, DerivePartialModel, FromQueryResult, ModelTrait};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ContactPageParams {
    #[serde(default, deserialize_with = "deserialize_option_bool_from_string")]
    pub is_read: Option<bool>,
    #[serde(flatten)]
    #[validate(nested)]
    pub page: PageParams,
}

/// Contact message information
#[derive(Debug, Clone, Serialize, Deserialize, DerivePartialModel, FromQueryResult)]
#[serde(rename_all = "camelCase")]
#[sea_orm(entity = "<crate::entities::prelude::ContactModel as ModelTrait>::Entity")]
pub struct ContactInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<ContactModel> for ContactInfo {
    fn from(contact: ContactModel) -> Self {
        ContactInfo {
            id: contact.id,
            name: contact.name,
            email: contact.email,
            subject: contact.subject,
            message: contact.message,
            is_read: contact.is_read,
            created_at: contact.created_at,
            updated_at: contact.updated_at,
        }
    }
}

/// Public contact form payload.
#[derive(Clone, Debug, PartialEq, Deserialize, DeriveIntoActiveModel, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    #[validate(length(min = 2, max = 50, message = "Name must be 2-50 characters"))]
    pub name: String,
    #[validate(
        email(message = "Email must be a valid email address"),
        length(max = 150, message = "Email must be at most 150 characters")
    )]
    pub email: String,
    #[validate(length(min = 3, max = 100, message = "Subject must be 3-100 characters"))]
    pub subject: String,
    #[validate(length(min = 10, max = 2000, message = "Message must be 10-2000 characters"))]
    pub message: String,
}
