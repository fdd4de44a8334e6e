pub mod about;
pub mod contact;
pub mod contact_method;
pub mod experience;
pub mod prelude;
pub mod project;
pub mod service;
pub mod skill;
pub mod social_link;
pub mod user;
