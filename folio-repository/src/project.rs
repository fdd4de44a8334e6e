use folio_error::{storage::StorageError, StorageResult};
use folio_models::{
    domain::prelude::{Page, ProjectInfo, ProjectPageParams},
    entities::prelude::{Project, ProjectActiveModel, ProjectColumn, ProjectModel},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, Set,
};

/// Repository for portfolio projects
pub struct ProjectRepository;

impl ProjectRepository {
    pub async fn create<C>(project: ProjectActiveModel, db: &C) -> StorageResult<ProjectModel>
    where
        C: ConnectionTrait,
    {
        Ok(project.insert(db).await?)
    }

    /// Apply a partial update to the project with the given id.
    ///
    /// An all-`NotSet` patch skips the UPDATE and returns the stored record,
    /// so an empty request body stays a valid no-op.
    pub async fn update<C>(
        id: i32,
        mut project: ProjectActiveModel,
        db: &C,
    ) -> StorageResult<ProjectModel>
    where
        C: ConnectionTrait,
    {
        if !project.is_changed() {
            return Self::find_by_id(id, db)
                .await?
                .ok_or_else(|| StorageError::EntityNotFound(format!("project {id}")));
        }

        project.id = Set(id);
        match project.update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => {
                Err(StorageError::EntityNotFound(format!("project {id}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let result = Project::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(StorageError::EntityNotFound(format!("project {id}")));
        }
        Ok(())
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<ProjectModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Project::find_by_id(id).one(db).await?)
    }

    pub async fn page<C>(params: ProjectPageParams, db: &C) -> StorageResult<Page<ProjectInfo>>
    where
        C: ConnectionTrait,
    {
        let query = Project::find()
            .apply_if(params.category.clone(), |q, category| {
                q.filter(ProjectColumn::Category.eq(category))
            })
            .apply_if(params.is_featured, |q, is_featured| {
                q.filter(ProjectColumn::IsFeatured.eq(is_featured))
            })
            .apply_if(params.is_active, |q, is_active| {
                q.filter(ProjectColumn::IsActive.eq(is_active))
            })
            .order_by(ProjectColumn::SortOrder, Order::Asc)
            .order_by(ProjectColumn::Id, Order::Asc);
        let (page, limit) = (params.page.page(), params.page.limit());
        let total = query.clone().count(db).await?;
        let items = query
            .into_partial_model::<ProjectInfo>()
            .paginate(db, limit as u64)
            .fetch_page((page - 1) as u64)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }

    /// Distinct stored categories with the `"all"` pseudo-category prepended.
    pub async fn categories<C>(db: &C) -> StorageResult<Vec<String>>
    where
        C: ConnectionTrait,
    {
        let mut categories: Vec<String> = Project::find()
            .select_only()
            .column(ProjectColumn::Category)
            .distinct()
            .order_by(ProjectColumn::Category, Order::Asc)
            .into_tuple()
            .all(db)
            .await?;
        categories.insert(0, "all".into());
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;
    use folio_models::{
        domain::prelude::{NewProject, PageParams, UpdateProject},
        entities::project::Tags,
    };
    use sea_orm::IntoActiveModel;

    fn sample(title: &str, category: &str, sort_order: i32) -> NewProject {
        NewProject {
            title: title.into(),
            description: "built for testing".into(),
            image: None,
            category: category.into(),
            tags: Tags(vec!["rust".into()]),
            live_demo: None,
            github: None,
            date: None,
            is_featured: false,
            sort_order,
            is_active: true,
        }
    }

    fn no_filters() -> ProjectPageParams {
        ProjectPageParams {
            category: None,
            is_featured: None,
            is_active: None,
            page: PageParams::default(),
        }
    }

    #[tokio::test]
    async fn test_page_filters_by_category_and_paginates() {
        let db = memory_db().await;
        for (i, title) in ["one", "two", "three"].iter().enumerate() {
            ProjectRepository::create(sample(title, "react", i as i32).into_active_model(), &db)
                .await
                .unwrap();
        }
        ProjectRepository::create(sample("other", "vue", 9).into_active_model(), &db)
            .await
            .unwrap();

        let params = ProjectPageParams {
            category: Some("react".into()),
            page: PageParams {
                page: Some(1),
                limit: Some(2),
            },
            ..no_filters()
        };
        let page = ProjectRepository::page(params, &db).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.pagination.total, 3);
        assert_eq!(page.pagination.total_pages, 2);
    }

    #[tokio::test]
    async fn test_page_orders_by_sort_order() {
        let db = memory_db().await;
        ProjectRepository::create(sample("last", "react", 5).into_active_model(), &db)
            .await
            .unwrap();
        ProjectRepository::create(sample("first", "react", 1).into_active_model(), &db)
            .await
            .unwrap();

        let page = ProjectRepository::page(no_filters(), &db).await.unwrap();
        let titles: Vec<&str> = page.items.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["first", "last"]);
    }

    #[tokio::test]
    async fn test_categories_are_distinct_with_all_prepended() {
        let db = memory_db().await;
        ProjectRepository::create(sample("a", "react", 0).into_active_model(), &db)
            .await
            .unwrap();
        ProjectRepository::create(sample("b", "react", 1).into_active_model(), &db)
            .await
            .unwrap();
        ProjectRepository::create(sample("c", "vanilla", 2).into_active_model(), &db)
            .await
            .unwrap();

        let categories = ProjectRepository::categories(&db).await.unwrap();
        assert_eq!(categories, ["all", "react", "vanilla"]);
    }

    #[tokio::test]
    async fn test_update_touches_only_supplied_fields() {
        let db = memory_db().await;
        let created =
            ProjectRepository::create(sample("site", "react", 0).into_active_model(), &db)
                .await
                .unwrap();

        let patch = UpdateProject {
            title: Some("renamed".into()),
            ..Default::default()
        };
        let updated = ProjectRepository::update(created.id, patch.into_active_model(), &db)
            .await
            .unwrap();
        assert_eq!(updated.title, "renamed");
        assert_eq!(updated.category, "react");
        assert_eq!(updated.tags, Tags(vec!["rust".into()]));
    }

    #[tokio::test]
    async fn test_empty_update_returns_stored_record() {
        let db = memory_db().await;
        let created =
            ProjectRepository::create(sample("site", "react", 0).into_active_model(), &db)
                .await
                .unwrap();

        let updated =
            ProjectRepository::update(created.id, UpdateProject::default().into_active_model(), &db)
                .await
                .unwrap();
        assert_eq!(updated.title, "site");
    }

    #[tokio::test]
    async fn test_update_missing_id_is_entity_not_found() {
        let db = memory_db().await;
        let patch = UpdateProject {
            title: Some("x".into()),
            ..Default::default()
        };

        let err = ProjectRepository::update(42, patch.into_active_model(), &db)
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_entity_not_found() {
        let db = memory_db().await;
        let err = ProjectRepository::delete(42, &db).await.unwrap_err();
        assert!(matches!(err, StorageError::EntityNotFound(_)));
    }
}
