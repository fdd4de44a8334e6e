use crate::{
    domain::prelude::NewSocialLinkWithId,
    initializer::{
        DataSeederTrait, FolioInitializer, InitContext, SeedableInitializerTrait, SeedableTrait,
    },
};
use folio_macros::SeedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, SeedableInitializer)]
#[seedable(meta(
    model = NewSocialLinkWithId,
    order = super::INIT_SOCIAL_LINK_ORDER,
    create_table = create_social_link_table,
    seed_data = get_social_link_seed_data
))]
pub enum SocialLink {
    Table,
    Id,
    Icon,
    Label,
    Url,
    Color,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

fn create_social_link_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(SocialLink::Table)
        .if_not_exists()
        .col(pk_auto(SocialLink::Id))
        .col(
            ColumnDef::new(SocialLink::Icon)
                .string_len(50)
                .not_null()
                .comment("Icon name"),
        )
        .col(
            ColumnDef::new(SocialLink::Label)
                .string_len(100)
                .not_null()
                .comment("Link label"),
        )
        .col(
            ColumnDef::new(SocialLink::Url)
                .string_len(255)
                .not_null()
                .comment("Target URL"),
        )
        .col(
            ColumnDef::new(SocialLink::Color)
                .string_len(100)
                .comment("Hover color class"),
        )
        .col(
            ColumnDef::new(SocialLink::SortOrder)
                .integer()
                .default(0)
                .not_null()
                .comment("Display order"),
        )
        .col(
            ColumnDef::new(SocialLink::IsActive)
                .boolean()
                .default(true)
                .not_null()
                .comment("Visible on the public site"),
        )
        .col(
            ColumnDef::new(SocialLink::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(SocialLink::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .to_owned()
}

async fn get_social_link_seed_data(
    _: &mut InitContext,
) -> Result<Option<Vec<NewSocialLinkWithId>>, DbErr> {
    Ok(Some(vec![
        NewSocialLinkWithId {
            id: 1,
            icon: "Github".into(),
            label: "GitHub".into(),
            url: "https://github.com".into(),
            color: Some("hover:bg-purple-500".into()),
            sort_order: 1,
            ..Default::default()
        },
        NewSocialLinkWithId {
            id: 2,
            icon: "Linkedin".into(),
            label: "LinkedIn".into(),
            url: "https://www.linkedin.com".into(),
            color: Some("hover:bg-blue-500".into()),
            sort_order: 2,
            ..Default::default()
        },
    ]))
}
