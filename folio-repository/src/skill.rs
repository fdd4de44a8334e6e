use folio_error::{storage::StorageError, StorageResult};
use folio_models::{
    domain::prelude::{Page, SkillInfo, SkillPageParams},
    entities::prelude::{Skill, SkillActiveModel, SkillColumn, SkillModel},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QueryTrait, Set,
};

/// Repository for skills
pub struct SkillRepository;

impl SkillRepository {
    pub async fn create<C>(skill: SkillActiveModel, db: &C) -> StorageResult<SkillModel>
    where
        C: ConnectionTrait,
    {
        Ok(skill.insert(db).await?)
    }

    pub async fn update<C>(
        id: i32,
        mut skill: SkillActiveModel,
        db: &C,
    ) -> StorageResult<SkillModel>
    where
        C: ConnectionTrait,
    {
        if !skill.is_changed() {
            return Self::find_by_id(id, db)
                .await?
                .ok_or_else(|| StorageError::EntityNotFound(format!("skill {id}")));
        }

        skill.id = Set(id);
        match skill.update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => {
                Err(StorageError::EntityNotFound(format!("skill {id}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let result = Skill::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(StorageError::EntityNotFound(format!("skill {id}")));
        }
        Ok(())
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<SkillModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Skill::find_by_id(id).one(db).await?)
    }

    pub async fn page<C>(params: SkillPageParams, db: &C) -> StorageResult<Page<SkillInfo>>
    where
        C: ConnectionTrait,
    {
        let query = Skill::find()
            .apply_if(params.name.as_ref(), |q, name| {
                q.filter(SkillColumn::Name.like(format!("%{name}%")))
            })
            .apply_if(params.category.clone(), |q, category| {
                q.filter(SkillColumn::Category.eq(category))
            })
            .apply_if(params.is_active, |q, is_active| {
                q.filter(SkillColumn::IsActive.eq(is_active))
            })
            .order_by(SkillColumn::SortOrder, Order::Asc)
            .order_by(SkillColumn::Id, Order::Asc);
        let (page, limit) = (params.page.page(), params.page.limit());
        let total = query.clone().count(db).await?;
        let items = query
            .into_partial_model::<SkillInfo>()
            .paginate(db, limit as u64)
            .fetch_page((page - 1) as u64)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;
    use folio_models::domain::prelude::{NewSkill, PageParams};
    use sea_orm::IntoActiveModel;

    fn sample(name: &str, category: &str) -> NewSkill {
        NewSkill {
            name: name.into(),
            level: 60,
            icon: "star".into(),
            color: None,
            category: category.into(),
            sort_order: 0,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_page_name_filter_matches_substring() {
        let db = memory_db().await;
        SkillRepository::create(sample("JavaScript", "technical").into_active_model(), &db)
            .await
            .unwrap();
        SkillRepository::create(sample("TypeScript", "technical").into_active_model(), &db)
            .await
            .unwrap();
        SkillRepository::create(sample("Figma", "design").into_active_model(), &db)
            .await
            .unwrap();

        let page = SkillRepository::page(
            SkillPageParams {
                name: Some("Script".into()),
                category: Some("technical".into()),
                is_active: None,
                page: PageParams::default(),
            },
            &db,
        )
        .await
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.total, 2);
    }
}
