use crate::{
    domain::prelude::NewExperienceWithId,
    initializer::{
        DataSeederTrait, FolioInitializer, InitContext, SeedableInitializerTrait, SeedableTrait,
    },
};
use folio_macros::SeedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, SeedableInitializer)]
#[seedable(meta(
    model = NewExperienceWithId,
    order = super::INIT_EXPERIENCE_ORDER,
    create_table = create_experience_table,
    seed_data = get_experience_seed_data
))]
pub enum Experience {
    Table,
    Id,
    Title,
    Company,
    Period,
    Description,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

fn create_experience_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Experience::Table)
        .if_not_exists()
        .col(pk_auto(Experience::Id))
        .col(
            ColumnDef::new(Experience::Title)
                .string_len(150)
                .not_null()
                .comment("Position title"),
        )
        .col(
            ColumnDef::new(Experience::Company)
                .string_len(150)
                .not_null()
                .comment("Company or context"),
        )
        .col(
            ColumnDef::new(Experience::Period)
                .string_len(50)
                .not_null()
                .comment("Display period, e.g. 2024 - Present"),
        )
        .col(
            ColumnDef::new(Experience::Description)
                .text()
                .not_null()
                .comment("Role description"),
        )
        .col(
            ColumnDef::new(Experience::SortOrder)
                .integer()
                .default(0)
                .not_null()
                .comment("Display order"),
        )
        .col(
            ColumnDef::new(Experience::IsActive)
                .boolean()
                .default(true)
                .not_null()
                .comment("Visible on the public site"),
        )
        .col(
            ColumnDef::new(Experience::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(Experience::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .to_owned()
}

async fn get_experience_seed_data(
    _: &mut InitContext,
) -> Result<Option<Vec<NewExperienceWithId>>, DbErr> {
    Ok(Some(vec![
        NewExperienceWithId {
            id: 1,
            title: "Frontend Developer".into(),
            company: "Personal Projects".into(),
            period: "2024 - Present".into(),
            description: "Built multiple frontend projects with React and Tailwind \
                          CSS, focusing on responsive design and user experience."
                .into(),
            sort_order: 1,
            ..Default::default()
        },
        NewExperienceWithId {
            id: 2,
            title: "Open Source Contributor".into(),
            company: "GitHub".into(),
            period: "2024".into(),
            description: "Contributed bug fixes and small features to frontend \
                          projects, learning collaborative workflows with Git."
                .into(),
            sort_order: 2,
            ..Default::default()
        },
    ]))
}
