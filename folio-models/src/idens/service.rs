use crate::{
    domain::prelude::NewServiceWithId,
    entities::service::Features,
    initializer::{
        DataSeederTrait, FolioInitializer, InitContext, SeedableInitializerTrait, SeedableTrait,
    },
};
use folio_macros::SeedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, SeedableInitializer)]
#[seedable(meta(
    model = NewServiceWithId,
    order = super::INIT_SERVICE_ORDER,
    create_table = create_service_table,
    seed_data = get_service_seed_data
))]
pub enum Service {
    Table,
    Id,
    Icon,
    Title,
    Description,
    Features,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

fn create_service_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Service::Table)
        .if_not_exists()
        .col(pk_auto(Service::Id))
        .col(
            ColumnDef::new(Service::Icon)
                .string_len(50)
                .not_null()
                .comment("Icon name"),
        )
        .col(
            ColumnDef::new(Service::Title)
                .string_len(100)
                .not_null()
                .comment("Service title"),
        )
        .col(
            ColumnDef::new(Service::Description)
                .text()
                .not_null()
                .comment("Service description"),
        )
        .col(
            ColumnDef::new(Service::Features)
                .json()
                .not_null()
                .comment("Feature list JSON"),
        )
        .col(
            ColumnDef::new(Service::SortOrder)
                .integer()
                .default(0)
                .not_null()
                .comment("Display order"),
        )
        .col(
            ColumnDef::new(Service::IsActive)
                .boolean()
                .default(true)
                .not_null()
                .comment("Visible on the public site"),
        )
        .col(
            ColumnDef::new(Service::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(Service::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .to_owned()
}

async fn get_service_seed_data(
    _: &mut InitContext,
) -> Result<Option<Vec<NewServiceWithId>>, DbErr> {
    Ok(Some(vec![
        NewServiceWithId {
            id: 1,
            icon: "Code".into(),
            title: "Frontend Development".into(),
            description: "Responsive and accessible websites built with modern \
                          frontend technologies."
                .into(),
            features: Features(vec![
                "HTML & CSS".into(),
                "Tailwind CSS".into(),
                "JavaScript".into(),
                "React".into(),
            ]),
            sort_order: 1,
            ..Default::default()
        },
        NewServiceWithId {
            id: 2,
            icon: "Smartphone".into(),
            title: "Responsive Design".into(),
            description: "Web interfaces that look great on all screen sizes and devices.".into(),
            features: Features(vec![
                "Mobile-First Approach".into(),
                "Media Queries".into(),
                "Flexbox & Grid".into(),
            ]),
            sort_order: 2,
            ..Default::default()
        },
        NewServiceWithId {
            id: 3,
            icon: "Zap".into(),
            title: "Performance Optimization".into(),
            description: "Faster load times and smoother interactions for a better \
                          user experience."
                .into(),
            features: Features(vec![
                "Lazy Loading".into(),
                "Code Splitting".into(),
                "Optimized Assets".into(),
            ]),
            sort_order: 3,
            ..Default::default()
        },
    ]))
}
