//! Migration identifiers and seeding for the profile singleton.
//!
//! The about record is inserted as a **single row** (id = 1) during database
//! initialization, carrying the administrator's display name.

use crate::{
    domain::prelude::{NewAboutWithId, NewUserWithId},
    idens,
    initializer::{
        DataSeederTrait, FolioInitializer, InitContext, SeedableInitializerTrait, SeedableTrait,
    },
};
use folio_macros::SeedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

const DEFAULT_TITLE: &str = "Full Stack Developer";

const DEFAULT_BIO: &str = "I build modern, scalable web applications with a focus on \
clean architecture and user-friendly interfaces.";

#[derive(DeriveIden, SeedableInitializer)]
#[seedable(meta(
    model = NewAboutWithId,
    order = super::INIT_ABOUT_ORDER,
    create_table = create_about_table,
    seed_data = get_about_seed_data
))]
pub enum About {
    Table,
    Id,
    Name,
    Title,
    Subtitle,
    Bio,
    Description,
    Avatar,
    Resume,
    YearsExperience,
    ProjectsCompleted,
    OpenSourceContributions,
    GlobalReachText,
    CreatedAt,
    UpdatedAt,
}

fn create_about_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(About::Table)
        .if_not_exists()
        .col(pk_auto(About::Id))
        .col(
            ColumnDef::new(About::Name)
                .string_len(100)
                .not_null()
                .comment("Display name"),
        )
        .col(
            ColumnDef::new(About::Title)
                .string_len(150)
                .not_null()
                .comment("Professional title"),
        )
        .col(
            ColumnDef::new(About::Subtitle)
                .string_len(255)
                .comment("Hero subtitle"),
        )
        .col(ColumnDef::new(About::Bio).text().not_null().comment("Bio"))
        .col(
            ColumnDef::new(About::Description)
                .text()
                .comment("Long-form description"),
        )
        .col(
            ColumnDef::new(About::Avatar)
                .string_len(255)
                .comment("Avatar URL"),
        )
        .col(
            ColumnDef::new(About::Resume)
                .string_len(255)
                .comment("Resume URL"),
        )
        .col(
            ColumnDef::new(About::YearsExperience)
                .integer()
                .default(0)
                .not_null()
                .comment("Years of experience"),
        )
        .col(
            ColumnDef::new(About::ProjectsCompleted)
                .integer()
                .default(0)
                .not_null()
                .comment("Completed project count"),
        )
        .col(
            ColumnDef::new(About::OpenSourceContributions)
                .integer()
                .default(0)
                .not_null()
                .comment("Open source contribution count"),
        )
        .col(
            ColumnDef::new(About::GlobalReachText)
                .string_len(255)
                .comment("Global reach tagline"),
        )
        .col(
            ColumnDef::new(About::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(About::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .to_owned()
}

async fn get_about_seed_data(ctx: &mut InitContext) -> Result<Option<Vec<NewAboutWithId>>, DbErr> {
    // Prefer the admin seeded in this same boot; fall back to configuration
    // when the users table was populated on an earlier one.
    let user_key = idens::user::User::Table.name().to_owned();
    let name = ctx
        .get::<NewUserWithId>(&user_key)
        .ok()
        .and_then(|users| users.first().map(|u| u.name.clone()))
        .unwrap_or_else(|| ctx.settings().admin.name.clone());

    Ok(Some(vec![NewAboutWithId {
        id: 1,
        name,
        title: DEFAULT_TITLE.into(),
        bio: DEFAULT_BIO.into(),
        ..Default::default()
    }]))
}
