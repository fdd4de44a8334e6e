use folio_error::{storage::StorageError, StorageResult};
use folio_models::{
    domain::prelude::{Page, ServiceInfo, ServicePageParams},
    entities::prelude::{Service, ServiceActiveModel, ServiceColumn, ServiceModel},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QueryTrait, Set,
};

/// Repository for offered services
pub struct ServiceRepository;

impl ServiceRepository {
    pub async fn create<C>(service: ServiceActiveModel, db: &C) -> StorageResult<ServiceModel>
    where
        C: ConnectionTrait,
    {
        Ok(service.insert(db).await?)
    }

    pub async fn update<C>(
        id: i32,
        mut service: ServiceActiveModel,
        db: &C,
    ) -> StorageResult<ServiceModel>
    where
        C: ConnectionTrait,
    {
        if !service.is_changed() {
            return Self::find_by_id(id, db)
                .await?
                .ok_or_else(|| StorageError::EntityNotFound(format!("service {id}")));
        }

        service.id = Set(id);
        match service.update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => {
                Err(StorageError::EntityNotFound(format!("service {id}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let result = Service::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(StorageError::EntityNotFound(format!("service {id}")));
        }
        Ok(())
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<ServiceModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Service::find_by_id(id).one(db).await?)
    }

    pub async fn page<C>(params: ServicePageParams, db: &C) -> StorageResult<Page<ServiceInfo>>
    where
        C: ConnectionTrait,
    {
        let query = Service::find()
            .apply_if(params.is_active, |q, is_active| {
                q.filter(ServiceColumn::IsActive.eq(is_active))
            })
            .order_by(ServiceColumn::SortOrder, Order::Asc)
            .order_by(ServiceColumn::Id, Order::Asc);
        let (page, limit) = (params.page.page(), params.page.limit());
        let total = query.clone().count(db).await?;
        let items = query
            .into_partial_model::<ServiceInfo>()
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
    use folio_models::{
        domain::prelude::{NewService, PageParams, UpdateService},
        entities::service::Features,
    };
    use sea_orm::IntoActiveModel;

    fn sample(title: &str, is_active: bool) -> NewService {
        NewService {
            icon: "code".into(),
            title: title.into(),
            description: "what it covers".into(),
            features: Features(vec!["one".into(), "two".into()]),
            sort_order: 0,
            is_active,
        }
    }

    #[tokio::test]
    async fn test_page_filters_by_is_active() {
        let db = memory_db().await;
        ServiceRepository::create(sample("Frontend", true).into_active_model(), &db)
            .await
            .unwrap();
        ServiceRepository::create(sample("Retired", false).into_active_model(), &db)
            .await
            .unwrap();

        let page = ServiceRepository::page(
            ServicePageParams {
                is_active: Some(true),
                page: PageParams::default(),
            },
            &db,
        )
        .await
        .unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].title, "Frontend");
    }

    #[tokio::test]
    async fn test_update_replaces_features_list() {
        let db = memory_db().await;
        let created = ServiceRepository::create(sample("Frontend", true).into_active_model(), &db)
            .await
            .unwrap();

        let patch = UpdateService {
            features: Some(Features(vec!["three".into()])),
            ..Default::default()
        };
        let updated = ServiceRepository::update(created.id, patch.into_active_model(), &db)
            .await
            .unwrap();
        assert_eq!(updated.features, Features(vec!["three".into()]));
        assert_eq!(updated.title, "Frontend");
    }
}
