use serde::{Deserialize, Serialize};
use validator::Validate;

pub use crate::domain::{
    about::{AboutInfo, NewAbout, NewAboutWithId, UpdateAbout},
    auth::{Claims, LoginRequest, LoginResponse},
    common::{Page, PageParams, Pagination},
    contact::{ContactInfo, ContactPageParams, NewContact},
    contact_method::{
        ContactMethodInfo, ContactMethodPageParams, NewContactMethod, NewContactMethodWithId,
        UpdateContactMethod,
    },
    experience::{
        ExperienceInfo, ExperiencePageParams, NewExperience, NewExperienceWithId, UpdateExperience,
    },
    project::{NewProject, NewProjectWithId, ProjectInfo, ProjectPageParams, UpdateProject},
    service::{NewService, NewServiceWithId, ServiceInfo, ServicePageParams, UpdateService},
    skill::{NewSkill, NewSkillWithId, SkillInfo, SkillPageParams, UpdateSkill},
    social_link::{
        NewSocialLink, NewSocialLinkWithId, SocialLinkInfo, SocialLinkPageParams, UpdateSocialLink,
    },
    user::{NewUserWithId, UserInfo},
};

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct PathId {
    pub id: i32,
}
