pub mod about;
pub mod contact;
pub mod contact_method;
pub mod experience;
pub mod project;
pub mod service;
pub mod skill;
pub mod social_link;
pub mod user;

#[allow(unused)]
const INIT_SYSTEM_ORDER: i32 = 0;
const INIT_USER_ORDER: i32 = INIT_SYSTEM_ORDER + 1;
const INIT_ABOUT_ORDER: i32 = INIT_USER_ORDER + 1;

const INIT_CONTENT_ORDER: i32 = 100;
const INIT_PROJECT_ORDER: i32 = INIT_CONTENT_ORDER + 1;
const INIT_SERVICE_ORDER: i32 = INIT_PROJECT_ORDER + 1;
const INIT_SKILL_ORDER: i32 = INIT_SERVICE_ORDER + 1;
const INIT_EXPERIENCE_ORDER: i32 = INIT_SKILL_ORDER + 1;
const INIT_CONTACT_METHOD_ORDER: i32 = INIT_EXPERIENCE_ORDER + 1;
const INIT_SOCIAL_LINK_ORDER: i32 = INIT_CONTACT_METHOD_ORDER + 1;

#[allow(unused)]
const INIT_LATEST_ORDER: i32 = 10000;
const INIT_CONTACT_ORDER: i32 = INIT_LATEST_ORDER + 1;
