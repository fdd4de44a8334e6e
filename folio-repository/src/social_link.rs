use folio_error::{storage::StorageError, StorageResult};
use folio_models::{
    domain::prelude::{Page, SocialLinkInfo, SocialLinkPageParams},
    entities::prelude::{SocialLink, SocialLinkActiveModel, SocialLinkColumn, SocialLinkModel},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QueryTrait, Set,
};

/// Repository for social profile links
pub struct SocialLinkRepository;

impl SocialLinkRepository {
    pub async fn create<C>(link: SocialLinkActiveModel, db: &C) -> StorageResult<SocialLinkModel>
    where
        C: ConnectionTrait,
    {
        Ok(link.insert(db).await?)
    }

    pub async fn update<C>(
        id: i32,
        mut link: SocialLinkActiveModel,
        db: &C,
    ) -> StorageResult<SocialLinkModel>
    where
        C: ConnectionTrait,
    {
        if !link.is_changed() {
            return Self::find_by_id(id, db)
                .await?
                .ok_or_else(|| StorageError::EntityNotFound(format!("social link {id}")));
        }

        link.id = Set(id);
        match link.update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => {
                Err(StorageError::EntityNotFound(format!("social link {id}")))
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let result = SocialLink::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(StorageError::EntityNotFound(format!("social link {id}")));
        }
        Ok(())
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<SocialLinkModel>>
    where
        C: ConnectionTrait,
    {
        Ok(SocialLink::find_by_id(id).one(db).await?)
    }

    pub async fn page<C>(
        params: SocialLinkPageParams,
        db: &C,
    ) -> StorageResult<Page<SocialLinkInfo>>
    where
        C: ConnectionTrait,
    {
        let query = SocialLink::find()
            .apply_if(params.label.as_ref(), |q, label| {
                q.filter(SocialLinkColumn::Label.like(format!("%{label}%")))
            })
            .apply_if(params.is_active, |q, is_active| {
                q.filter(SocialLinkColumn::IsActive.eq(is_active))
            })
            .order_by(SocialLinkColumn::SortOrder, Order::Asc)
            .order_by(SocialLinkColumn::Id, Order::Asc);
        let (page, limit) = (params.page.page(), params.page.limit());
        let total = query.clone().count(db).await?;
        let items = query
            .into_partial_model::<SocialLinkInfo>()
            .paginate(db, limit as u64)
            .fetch_page((page - 1) as u64)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }
}
