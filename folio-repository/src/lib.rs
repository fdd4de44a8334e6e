pub mod about;
pub mod contact;
pub mod contact_method;
pub mod experience;
pub mod project;
pub mod service;
pub mod skill;
pub mod social_link;
pub mod user;

pub use about::AboutRepository;
pub use contact::ContactRepository;
pub use contact_method::ContactMethodRepository;
pub use experience::ExperienceRepository;
pub use project::ProjectRepository;
pub use service::ServiceRepository;
pub use skill::SkillRepository;
pub use social_link::SocialLinkRepository;
pub use user::UserRepository;

#[cfg(test)]
pub(crate) mod test_support;
