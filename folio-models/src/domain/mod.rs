#[allow(clippy::needless_update)]
mod about;
#[allow(clippy::needless_update)]
mod auth;
#[allow(clippy::needless_update)]
mod common;
#[allow(clippy::needless_update)]
mod contact;
#[allow(clippy::needless_update)]
mod contact_method;
#[allow(clippy::needless_update)]
mod experience;
pub mod prelude;
#[allow(clippy::needless_update)]
mod project;
#[allow(clippy::needless_update)]
mod service;
#[allow(clippy::needless_update)]
mod skill;
#[allow(clippy::needless_update)]
mod social_link;
#[allow(clippy::needless_update)]
mod user;
