use folio_error::{storage::StorageError, StorageResult};
use folio_models::{
    domain::prelude::{ContactMethodInfo, ContactMethodPageParams, Page},
    entities::prelude::{
        ContactMethod, ContactMethodActiveModel, ContactMethodColumn, ContactMethodModel,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QueryTrait, Set,
};

/// Repository for ways of getting in touch
pub struct ContactMethodRepository;

impl ContactMethodRepository {
    pub async fn create<C>(
        method: ContactMethodActiveModel,
        db: &C,
    ) -> StorageResult<ContactMethodModel>
    where
        C: ConnectionTrait,
    {
        Ok(method.insert(db).await?)
    }

    pub async fn update<C>(
        id: i32,
        mut method: ContactMethodActiveModel,
        db: &C,
    ) -> StorageResult<ContactMethodModel>
    where
        C: ConnectionTrait,
    {
        if !method.is_changed() {
            return Self::find_by_id(id, db)
                .await?
                .ok_or_else(|| StorageError::EntityNotFound(format!("contact method {id}")));
        }

        method.id = Set(id);
        match method.update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => {
                Err(StorageError::EntityNotFound(format!("contact method {id}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let result = ContactMethod::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(StorageError::EntityNotFound(format!("contact method {id}")));
        }
        Ok(())
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<ContactMethodModel>>
    where
        C: ConnectionTrait,
    {
        Ok(ContactMethod::find_by_id(id).one(db).await?)
    }

    pub async fn page<C>(
        params: ContactMethodPageParams,
        db: &C,
    ) -> StorageResult<Page<ContactMethodInfo>>
    where
        C: ConnectionTrait,
    {
        let query = ContactMethod::find()
            .apply_if(params.title.as_ref(), |q, title| {
                q.filter(ContactMethodColumn::Title.like(format!("%{title}%")))
            })
            .apply_if(params.is_active, |q, is_active| {
                q.filter(ContactMethodColumn::IsActive.eq(is_active))
            })
            .order_by(ContactMethodColumn::SortOrder, Order::Asc)
            .order_by(ContactMethodColumn::Id, Order::Asc);
        let (page, limit) = (params.page.page(), params.page.limit());
        let total = query.clone().count(db).await?;
        let items = query
            .into_partial_model::<ContactMethodInfo>()
            .paginate(db, limit as u64)
            .fetch_page((page - 1) as u64)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }
}
