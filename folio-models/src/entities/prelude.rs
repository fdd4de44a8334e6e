pub use super::about::{
    ActiveModel as AboutActiveModel, Column as AboutColumn, Entity as About, Model as AboutModel,
};
pub use super::contact::{
    ActiveModel as ContactActiveModel, Column as ContactColumn, Entity as Contact,
    Model as ContactModel,
};
pub use super::contact_method::{
    ActiveModel as ContactMethodActiveModel, Column as ContactMethodColumn,
    Entity as ContactMethod, Model as ContactMethodModel,
};
pub use super::experience::{
    ActiveModel as ExperienceActiveModel, Column as ExperienceColumn, Entity as Experience,
    Model as ExperienceModel,
};
pub use super::project::{
    ActiveModel as ProjectActiveModel, Column as ProjectColumn, Entity as Project,
    Model as ProjectModel,
};
pub use super::service::{
    ActiveModel as ServiceActiveModel, Column as ServiceColumn, Entity as Service,
    Model as ServiceModel,
};
pub use super::skill::{
    ActiveModel as SkillActiveModel, Column as SkillColumn, Entity as Skill, Model as SkillModel,
};
pub use super::social_link::{
    ActiveModel as SocialLinkActiveModel, Column as SocialLinkColumn, Entity as SocialLink,
    Model as SocialLinkModel,
};
pub use super::user::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as User, Model as UserModel,
};
