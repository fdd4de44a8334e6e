//! Migration identifiers and seeding for the admin account.
//!
//! The single administrator is created from the `admin` configuration section
//! on first startup; credentials are never hardcoded.

use crate::{
    domain::prelude::NewUserWithId,
    enums::common::Role,
    initializer::{
        DataSeederTrait, FolioInitializer, InitContext, SeedableInitializerTrait, SeedableTrait,
    },
};
use folio_macros::SeedableInitializer;
use folio_utils::hash;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, SeedableInitializer)]
#[seedable(meta(
    model = NewUserWithId,
    order = super::INIT_USER_ORDER,
    create_table = create_user_table,
    create_indexes = create_user_indexes,
    seed_data = get_user_seed_data
))]
pub enum User {
    Table,
    Id,
    Email,
    Name,
    Password,
    Role,
    CreatedAt,
    UpdatedAt,
}

fn create_user_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(User::Table)
        .if_not_exists()
        .col(pk_auto(User::Id))
        .col(
            ColumnDef::new(User::Email)
                .string_len(150)
                .not_null()
                .comment("Login email"),
        )
        .col(
            ColumnDef::new(User::Name)
                .string_len(100)
                .not_null()
                .comment("Display name"),
        )
        .col(
            ColumnDef::new(User::Password)
                .string_len(255)
                .not_null()
                .comment("Bcrypt password hash"),
        )
        .col(
            ColumnDef::new(User::Role)
                .string_len(20)
                .default(Role::Admin)
                .not_null()
                .comment("Role: ADMIN or USER"),
        )
        .col(
            ColumnDef::new(User::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(User::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .to_owned()
}

fn create_user_indexes(_: DatabaseBackend) -> Option<Vec<IndexCreateStatement>> {
    Some(vec![Index::create()
        .name("ux_user_email")
        .table(User::Table)
        .col(User::Email)
        .unique()
        .to_owned()])
}

async fn get_user_seed_data(ctx: &mut InitContext) -> Result<Option<Vec<NewUserWithId>>, DbErr> {
    let admin = &ctx.settings().admin;
    if admin.email.trim().is_empty() || admin.password.trim().is_empty() {
        return Err(DbErr::Custom(
            "admin.email and admin.password must be set to seed the admin account".into(),
        ));
    }

    Ok(Some(vec![NewUserWithId {
        id: 1,
        email: admin.email.clone(),
        name: admin.name.clone(),
        password: hash::bcrypt_hash(&admin.password),
        role: Role::Admin,
    }]))
}
