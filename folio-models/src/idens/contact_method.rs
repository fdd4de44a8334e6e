use crate::{
    domain::prelude::NewContactMethodWithId,
    initializer::{
        DataSeederTrait, FolioInitializer, InitContext, SeedableInitializerTrait, SeedableTrait,
    },
};
use folio_macros::SeedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, SeedableInitializer)]
#[seedable(meta(
    model = NewContactMethodWithId,
    order = super::INIT_CONTACT_METHOD_ORDER,
    create_table = create_contact_method_table,
    seed_data = get_contact_method_seed_data
))]
pub enum ContactMethod {
    Table,
    Id,
    Icon,
    Title,
    Value,
    Description,
    Gradient,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

fn create_contact_method_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(ContactMethod::Table)
        .if_not_exists()
        .col(pk_auto(ContactMethod::Id))
        .col(
            ColumnDef::new(ContactMethod::Icon)
                .string_len(50)
                .not_null()
                .comment("Icon name"),
        )
        .col(
            ColumnDef::new(ContactMethod::Title)
                .string_len(100)
                .not_null()
                .comment("Method title"),
        )
        .col(
            ColumnDef::new(ContactMethod::Value)
                .string_len(255)
                .not_null()
                .comment("Displayed value"),
        )
        .col(
            ColumnDef::new(ContactMethod::Description)
                .string_len(255)
                .comment("Helper text"),
        )
        .col(
            ColumnDef::new(ContactMethod::Gradient)
                .string_len(100)
                .comment("Gradient class"),
        )
        .col(
            ColumnDef::new(ContactMethod::SortOrder)
                .integer()
                .default(0)
                .not_null()
                .comment("Display order"),
        )
        .col(
            ColumnDef::new(ContactMethod::IsActive)
                .boolean()
                .default(true)
                .not_null()
                .comment("Visible on the public site"),
        )
        .col(
            ColumnDef::new(ContactMethod::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(ContactMethod::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .to_owned()
}

async fn get_contact_method_seed_data(
    ctx: &mut InitContext,
) -> Result<Option<Vec<NewContactMethodWithId>>, DbErr> {
    let admin_email = ctx.settings().admin.email.clone();

    let mut methods = Vec::new();
    if !admin_email.trim().is_empty() {
        methods.push(NewContactMethodWithId {
            id: 1,
            icon: "Mail".into(),
            title: "Email".into(),
            value: admin_email,
            description: Some("Send me an email anytime".into()),
            gradient: Some("from-blue-500 to-cyan-500".into()),
            sort_order: 1,
            ..Default::default()
        });
    }
    methods.push(NewContactMethodWithId {
        id: 2,
        icon: "MapPin".into(),
        title: "Location".into(),
        value: "Remote".into(),
        description: Some("Available for remote work worldwide".into()),
        gradient: Some("from-red-500 to-pink-500".into()),
        sort_order: 2,
        ..Default::default()
    });

    Ok(Some(methods))
}
