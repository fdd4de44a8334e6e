use crate::initializer::{FolioInitializer, InitContext};
use folio_macros::UnseedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, UnseedableInitializer)]
#[unseedable(meta(
    order = super::INIT_CONTACT_ORDER,
    create_table = create_contact_table,
    create_indexes = create_contact_indexes,
))]
pub enum Contact {
    Table,
    Id,
    Name,
    Email,
    Subject,
    Message,
    IsRead,
    CreatedAt,
    UpdatedAt,
}

fn create_contact_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Contact::Table)
        .if_not_exists()
        .col(pk_auto(Contact::Id))
        .col(
            ColumnDef::new(Contact::Name)
                .string_len(50)
                .not_null()
                .comment("Sender name"),
        )
        .col(
            ColumnDef::new(Contact::Email)
                .string_len(150)
                .not_null()
                .comment("Sender email"),
        )
        .col(
            ColumnDef::new(Contact::Subject)
                .string_len(100)
                .not_null()
                .comment("Message subject"),
        )
        .col(
            ColumnDef::new(Contact::Message)
                .text()
                .not_null()
                .comment("Message body"),
        )
        .col(
            ColumnDef::new(Contact::IsRead)
                .boolean()
                .default(false)
                .not_null()
                .comment("Read by the admin"),
        )
        .col(
            ColumnDef::new(Contact::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(Contact::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .to_owned()
}

fn create_contact_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("idx_contact_is_read")
        .table(Contact::Table)
        .col(Contact::IsRead)
        .to_owned()])
}
