use folio_error::{storage::StorageError, StorageResult};
use folio_models::{
    domain::prelude::{ExperienceInfo, ExperiencePageParams, Page},
    entities::prelude::{Experience, ExperienceActiveModel, ExperienceColumn, ExperienceModel},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QueryTrait, Set,
};

/// Repository for work experience entries
pub struct ExperienceRepository;

impl ExperienceRepository {
    pub async fn create<C>(
        experience: ExperienceActiveModel,
        db: &C,
    ) -> StorageResult<ExperienceModel>
    where
        C: ConnectionTrait,
    {
        Ok(experience.insert(db).await?)
    }

    pub async fn update<C>(
        id: i32,
        mut experience: ExperienceActiveModel,
        db: &C,
    ) -> StorageResult<ExperienceModel>
    where
        C: ConnectionTrait,
    {
        if !experience.is_changed() {
            return Self::find_by_id(id, db)
                .await?
                .ok_or_else(|| StorageError::EntityNotFound(format!("experience {id}")));
        }

        experience.id = Set(id);
        match experience.update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => {
                Err(StorageError::EntityNotFound(format!("experience {id}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let result = Experience::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(StorageError::EntityNotFound(format!("experience {id}")));
        }
        Ok(())
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<ExperienceModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Experience::find_by_id(id).one(db).await?)
    }

    pub async fn page<C>(
        params: ExperiencePageParams,
        db: &C,
    ) -> StorageResult<Page<ExperienceInfo>>
    where
        C: ConnectionTrait,
    {
        let query = Experience::find()
            .apply_if(params.title.as_ref(), |q, title| {
                q.filter(ExperienceColumn::Title.like(format!("%{title}%")))
            })
            .apply_if(params.company.as_ref(), |q, company| {
                q.filter(ExperienceColumn::Company.like(format!("%{company}%")))
            })
            .apply_if(params.is_active, |q, is_active| {
                q.filter(ExperienceColumn::IsActive.eq(is_active))
            })
            .order_by(ExperienceColumn::SortOrder, Order::Asc)
            .order_by(ExperienceColumn::Id, Order::Asc);
        let (page, limit) = (params.page.page(), params.page.limit());
        let total = query.clone().count(db).await?;
        let items = query
            .into_partial_model::<ExperienceInfo>()
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
    use folio_models::domain::prelude::{NewExperience, PageParams};
    use sea_orm::IntoActiveModel;

    fn sample(title: &str, company: &str) -> NewExperience {
        NewExperience {
            title: title.into(),
            company: company.into(),
            period: "2023 - Present".into(),
            description: "what the role covered".into(),
            sort_order: 0,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn test_page_company_filter_matches_substring() {
        let db = memory_db().await;
        ExperienceRepository::create(
            sample("Frontend Developer", "Acme Studio").into_active_model(),
            &db,
        )
        .await
        .unwrap();
        ExperienceRepository::create(
            sample("Open Source Contributor", "GitHub").into_active_model(),
            &db,
        )
        .await
        .unwrap();

        let page = ExperienceRepository::page(
            ExperiencePageParams {
                title: None,
                company: Some("Acme".into()),
                is_active: None,
                page: PageParams::default(),
            },
            &db,
        )
        .await
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].company, "Acme Studio");
    }
}
