pub mod constants;
pub mod domain;
pub mod entities;
pub mod enums;
mod idens;
pub mod initializer;
pub mod settings;
pub mod web;
