use crate::{
    domain::prelude::NewProjectWithId,
    entities::project::Tags,
    initializer::{
        DataSeederTrait, FolioInitializer, InitContext, SeedableInitializerTrait, SeedableTrait,
    },
};
use folio_macros::SeedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, SeedableInitializer)]
#[seedable(meta(
    model = NewProjectWithId,
    order = super::INIT_PROJECT_ORDER,
    create_table = create_project_table,
    create_indexes = create_project_indexes,
    seed_data = get_project_seed_data
))]
pub enum Project {
    Table,
    Id,
    Title,
    Description,
    Image,
    Category,
    Tags,
    LiveDemo,
    Github,
    Date,
    IsFeatured,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

fn create_project_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Project::Table)
        .if_not_exists()
        .col(pk_auto(Project::Id))
        .col(
            ColumnDef::new(Project::Title)
                .string_len(150)
                .not_null()
                .comment("Project title"),
        )
        .col(
            ColumnDef::new(Project::Description)
                .text()
                .not_null()
                .comment("Project description"),
        )
        .col(
            ColumnDef::new(Project::Image)
                .string_len(255)
                .comment("Cover image URL"),
        )
        .col(
            ColumnDef::new(Project::Category)
                .string_len(50)
                .not_null()
                .comment("Filter category"),
        )
        .col(
            ColumnDef::new(Project::Tags)
                .json()
                .not_null()
                .comment("Tag list JSON"),
        )
        .col(
            ColumnDef::new(Project::LiveDemo)
                .string_len(255)
                .comment("Live demo URL"),
        )
        .col(
            ColumnDef::new(Project::Github)
                .string_len(255)
                .comment("Repository URL"),
        )
        .col(
            ColumnDef::new(Project::Date)
                .string_len(50)
                .comment("Display date"),
        )
        .col(
            ColumnDef::new(Project::IsFeatured)
                .boolean()
                .default(false)
                .not_null()
                .comment("Featured on the landing page"),
        )
        .col(
            ColumnDef::new(Project::SortOrder)
                .integer()
                .default(0)
                .not_null()
                .comment("Display order"),
        )
        .col(
            ColumnDef::new(Project::IsActive)
                .boolean()
                .default(true)
                .not_null()
                .comment("Visible on the public site"),
        )
        .col(
            ColumnDef::new(Project::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(Project::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .to_owned()
}

fn create_project_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_project_category")
        .table(Project::Table)
        .col(Project::Category)
        .to_owned()])
}

async fn get_project_seed_data(
    _: &mut InitContext,
) -> Result<Option<Vec<NewProjectWithId>>, DbErr> {
    Ok(Some(vec![
        NewProjectWithId {
            id: 1,
            title: "Movie Finder".into(),
            description: "A responsive movie search app with debounced live search, \
                          watchlist persistence and keyboard navigation."
                .into(),
            image: Some("/images/movie-finder.png".into()),
            category: "react".into(),
            tags: Tags(vec!["React".into(), "Tailwind CSS".into(), "REST".into()]),
            live_demo: Some("https://movie-finder.example.com".into()),
            github: Some("https://github.com/example/movie-finder".into()),
            date: Some("2025".into()),
            is_featured: true,
            sort_order: 1,
            ..Default::default()
        },
        NewProjectWithId {
            id: 2,
            title: "Weather Dashboard".into(),
            description: "Location-aware forecasts with unit toggling and offline \
                          caching, built against a public weather API."
                .into(),
            image: Some("/images/weather-dashboard.png".into()),
            category: "react".into(),
            tags: Tags(vec!["React".into(), "PWA".into()]),
            live_demo: Some("https://weather.example.com".into()),
            github: Some("https://github.com/example/weather-dashboard".into()),
            date: Some("2025".into()),
            sort_order: 2,
            ..Default::default()
        },
        NewProjectWithId {
            id: 3,
            title: "Landing Page Kit".into(),
            description: "A framework-free landing page template with smooth \
                          scrolling and a component-based file layout."
                .into(),
            image: Some("/images/landing-kit.png".into()),
            category: "vanilla".into(),
            tags: Tags(vec!["HTML".into(), "CSS".into(), "JavaScript".into()]),
            github: Some("https://github.com/example/landing-kit".into()),
            date: Some("2024".into()),
            sort_order: 3,
            ..Default::default()
        },
    ]))
}
