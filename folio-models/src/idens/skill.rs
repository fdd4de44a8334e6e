use crate::{
    domain::prelude::NewSkillWithId,
    initializer::{
        DataSeederTrait, FolioInitializer, InitContext, SeedableInitializerTrait, SeedableTrait,
    },
};
use folio_macros::SeedableInitializer;
use sea_orm::{DatabaseBackend, DeriveIden};
use sea_orm_migration::{prelude::*, schema::pk_auto};

#[derive(DeriveIden, SeedableInitializer)]
#[seedable(meta(
    model = NewSkillWithId,
    order = super::INIT_SKILL_ORDER,
    create_table = create_skill_table,
    seed_data = get_skill_seed_data
))]
pub enum Skill {
    Table,
    Id,
    Name,
    Level,
    Icon,
    Color,
    Category,
    SortOrder,
    IsActive,
    CreatedAt,
    UpdatedAt,
}

fn create_skill_table(_backend: DatabaseBackend) -> TableCreateStatement {
    Table::create()
        .table(Skill::Table)
        .if_not_exists()
        .col(pk_auto(Skill::Id))
        .col(
            ColumnDef::new(Skill::Name)
                .string_len(100)
                .not_null()
                .comment("Skill name"),
        )
        .col(
            ColumnDef::new(Skill::Level)
                .integer()
                .default(0)
                .not_null()
                .comment("Proficiency 0-100"),
        )
        .col(
            ColumnDef::new(Skill::Icon)
                .string_len(50)
                .not_null()
                .comment("Icon name"),
        )
        .col(
            ColumnDef::new(Skill::Color)
                .string_len(100)
                .comment("Gradient class"),
        )
        .col(
            ColumnDef::new(Skill::Category)
                .string_len(50)
                .not_null()
                .comment("Filter category"),
        )
        .col(
            ColumnDef::new(Skill::SortOrder)
                .integer()
                .default(0)
                .not_null()
                .comment("Display order"),
        )
        .col(
            ColumnDef::new(Skill::IsActive)
                .boolean()
                .default(true)
                .not_null()
                .comment("Visible on the public site"),
        )
        .col(
            ColumnDef::new(Skill::CreatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Created at"),
        )
        .col(
            ColumnDef::new(Skill::UpdatedAt)
                .timestamp()
                .default(Expr::current_timestamp())
                .comment("Updated at"),
        )
        .to_owned()
}

async fn get_skill_seed_data(_: &mut InitContext) -> Result<Option<Vec<NewSkillWithId>>, DbErr> {
    Ok(Some(vec![
        NewSkillWithId {
            id: 1,
            name: "CSS / Tailwind".into(),
            level: 70,
            icon: "Palette".into(),
            color: Some("from-pink-500 to-purple-500".into()),
            category: "technical".into(),
            sort_order: 1,
            ..Default::default()
        },
        NewSkillWithId {
            id: 2,
            name: "JavaScript".into(),
            level: 75,
            icon: "Zap".into(),
            color: Some("from-yellow-500 to-orange-500".into()),
            category: "technical".into(),
            sort_order: 2,
            ..Default::default()
        },
        NewSkillWithId {
            id: 3,
            name: "React".into(),
            level: 65,
            icon: "Code".into(),
            color: Some("from-blue-500 to-cyan-500".into()),
            category: "technical".into(),
            sort_order: 3,
            ..Default::default()
        },
        NewSkillWithId {
            id: 4,
            name: "Node.js".into(),
            level: 40,
            icon: "BookOpen".into(),
            color: Some("from-green-500 to-teal-500".into()),
            category: "technical".into(),
            sort_order: 4,
            ..Default::default()
        },
    ]))
}
