use folio_error::{storage::StorageError, StorageResult};
use folio_models::{
    domain::prelude::{ContactInfo, ContactPageParams, Page},
    entities::prelude::{Contact, ContactActiveModel, ContactColumn, ContactModel},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, QueryTrait, Set,
};

/// Repository for contact form messages
pub struct ContactRepository;

impl ContactRepository {
    pub async fn create<C>(contact: ContactActiveModel, db: &C) -> StorageResult<ContactModel>
    where
        C: ConnectionTrait,
    {
        Ok(contact.insert(db).await?)
    }

    pub async fn delete<C>(id: i32, db: &C) -> StorageResult<()>
    where
        C: ConnectionTrait,
    {
        let result = Contact::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(StorageError::EntityNotFound(format!("contact {id}")));
        }
        Ok(())
    }

    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<ContactModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Contact::find_by_id(id).one(db).await?)
    }

    /// Newest messages first; unread/read filter via `is_read`.
    pub async fn page<C>(params: ContactPageParams, db: &C) -> StorageResult<Page<ContactInfo>>
    where
        C: ConnectionTrait,
    {
        let query = Contact::find()
            .apply_if(params.is_read, |q, is_read| {
                q.filter(ContactColumn::IsRead.eq(is_read))
            })
            .order_by(ContactColumn::CreatedAt, Order::Desc)
            .order_by(ContactColumn::Id, Order::Desc);
        let (page, limit) = (params.page.page(), params.page.limit());
        let total = query.clone().count(db).await?;
        let items = query
            .into_partial_model::<ContactInfo>()
            .paginate(db, limit as u64)
            .fetch_page((page - 1) as u64)
            .await?;

        Ok(Page::new(items, total, page, limit))
    }

    /// Flag a message as read and return the updated record.
    pub async fn mark_read<C>(id: i32, db: &C) -> StorageResult<ContactModel>
    where
        C: ConnectionTrait,
    {
        let contact = ContactActiveModel {
            id: Set(id),
            is_read: Set(true),
            ..Default::default()
        };
        match contact.update(db).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => {
                Err(StorageError::EntityNotFound(format!("contact {id}")))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;
    use folio_models::domain::prelude::{NewContact, PageParams};
    use sea_orm::IntoActiveModel;

    fn sample(name: &str) -> NewContact {
        NewContact {
            name: name.into(),
            email: "visitor@example.com".into(),
            subject: "Hello".into(),
            message: "A long enough message body.".into(),
        }
    }

    #[tokio::test]
    async fn test_mark_read_flips_flag() {
        let db = memory_db().await;
        let created = ContactRepository::create(sample("Ann").into_active_model(), &db)
            .await
            .unwrap();
        assert!(!created.is_read);

        let updated = ContactRepository::mark_read(created.id, &db).await.unwrap();
        assert!(updated.is_read);
    }

    #[tokio::test]
    async fn test_mark_read_missing_id_is_entity_not_found() {
        let db = memory_db().await;
        let err = ContactRepository::mark_read(7, &db).await.unwrap_err();
        assert!(matches!(err, StorageError::EntityNotFound(_)));
    }

    #[tokio::test]
    async fn test_page_filters_unread_and_orders_newest_first() {
        let db = memory_db().await;
        let first = ContactRepository::create(sample("First").into_active_model(), &db)
            .await
            .unwrap();
        ContactRepository::create(sample("Second").into_active_model(), &db)
            .await
            .unwrap();
        ContactRepository::mark_read(first.id, &db).await.unwrap();

        let unread = ContactRepository::page(
            ContactPageParams {
                is_read: Some(false),
                page: PageParams::default(),
            },
            &db,
        )
        .await
        .unwrap();
        assert_eq!(unread.items.len(), 1);
        assert_eq!(unread.items[0].name, "Second");

        let all = ContactRepository::page(
            ContactPageParams {
                is_read: None,
                page: PageParams::default(),
            },
            &db,
        )
        .await
        .unwrap();
        let names: Vec<&str> = all.items.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Second", "First"]);
    }
}
