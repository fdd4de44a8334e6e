use crate::{middleware::AdminContext, AppState};
use actix_web::web::{self, Data, ServiceConfig};
use actix_web_validator::{Json, Path, Query};
use folio_error::{web::WebError, WebResult};
use folio_models::{
    domain::prelude::{ContactInfo, ContactPageParams, NewContact, Page, PathId},
    web::ApiResponse,
};
use folio_notify::Notification;
use folio_repository::ContactRepository;
use sea_orm::IntoActiveModel;

pub(super) const ROUTER_PREFIX: &str = "/contacts";

/// Configure contact message routes
///
/// # Routes
/// - POST ``: Submit a contact message (public)
/// - GET ``: Paginated inbox with read filter (admin)
/// - GET `/{id}`: Message details (admin)
/// - PUT `/{id}/read`: Mark a message as read (admin)
/// - DELETE `/{id}`: Delete a message (admin)
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::post().to(create))
        .route("", web::get().to(page))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}/read", web::put().to(mark_read))
        .route("/{id}", web::delete().to(delete));
}

/// Submit a contact message
///
/// # Endpoint
/// `POST /api/contacts`
///
/// # Description
/// Stores the message, then queues the owner notification mail. Delivery is
/// fire-and-forget; the visitor gets their answer from the database write
/// alone.
pub async fn create(
    contact: Json<NewContact>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<ContactInfo>> {
    let stored =
        ContactRepository::create(contact.into_inner().into_active_model(), &state.db).await?;
    let info = ContactInfo::from(stored);

    state
        .notifier
        .dispatch(Notification::ContactReceived(info.clone()))
        .await;

    Ok(ApiResponse::created_with_message(
        "Message sent successfully",
        info,
    ))
}

/// Retrieve paginated inbox
///
/// # Endpoint
/// `GET /api/contacts`
///
/// # Authorization
/// Admin only
pub async fn page(
    params: Query<ContactPageParams>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<Page<ContactInfo>>> {
    let result = ContactRepository::page(params.into_inner(), &state.db).await?;
    Ok(ApiResponse::ok(result))
}

/// Retrieve message details by ID
///
/// # Endpoint
/// `GET /api/contacts/{id}`
///
/// # Authorization
/// Admin only
pub async fn get_by_id(
    params: Path<PathId>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<ContactInfo>> {
    let contact = ContactRepository::find_by_id(params.id, &state.db)
        .await?
        .ok_or_else(|| WebError::NotFound("Message".into()))?;
    Ok(ApiResponse::ok(contact.into()))
}

/// Mark a message as read
///
/// # Endpoint
/// `PUT /api/contacts/{id}/read`
///
/// # Authorization
/// Admin only
pub async fn mark_read(
    params: Path<PathId>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<ContactInfo>> {
    let contact = ContactRepository::mark_read(params.id, &state.db).await?;
    Ok(ApiResponse::ok_with_message(
        "Message marked as read",
        contact.into(),
    ))
}

/// Delete a message
///
/// # Endpoint
/// `DELETE /api/contacts/{id}`
///
/// # Authorization
/// Admin only
pub async fn delete(
    params: Path<PathId>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<()>> {
    ContactRepository::delete(params.id, &state.db).await?;
    Ok(ApiResponse::ok_message("Message deleted successfully"))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    fn submission(subject: &str) -> serde_json::Value {
        json!({
            "name": "Ann Visitor",
            "email": "ann@example.com",
            "subject": subject,
            "message": "I would like to talk about a project."
        })
    }

    #[actix_web::test]
    async fn test_visitor_submission_is_stored() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(submission("Hello"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::CREATED);
        let body = body_json(res).await;
        assert_eq!(body["message"], json!("Message sent successfully"));
        assert_eq!(body["data"]["isRead"], json!(false));

        let req = test::TestRequest::get()
            .uri("/api/contacts")
            .insert_header(("Authorization", token))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["data"]["pagination"]["total"], json!(1));
        assert_eq!(body["data"]["items"][0]["name"], json!("Ann Visitor"));
    }

    #[actix_web::test]
    async fn test_submission_validates_message_length() {
        let app = test::init_service(test_app(test_state().await)).await;

        let req = test::TestRequest::post()
            .uri("/api/contacts")
            .set_json(json!({
                "name": "Ann Visitor",
                "email": "ann@example.com",
                "subject": "Hello",
                "message": "short"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        assert!(body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["field"] == json!("message")));
    }

    #[actix_web::test]
    async fn test_inbox_is_admin_only() {
        let state = test_state().await;
        let user_token = user_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/api/contacts").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::get()
            .uri("/api/contacts")
            .insert_header(("Authorization", user_token))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_mark_read_and_unread_filter() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        for subject in ["First", "Second"] {
            let req = test::TestRequest::post()
                .uri("/api/contacts")
                .set_json(submission(subject))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::put()
            .uri("/api/contacts/1/read")
            .insert_header(("Authorization", token.clone()))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["message"], json!("Message marked as read"));
        assert_eq!(body["data"]["isRead"], json!(true));

        let req = test::TestRequest::get()
            .uri("/api/contacts?isRead=false")
            .insert_header(("Authorization", token))
            .to_request();
        let res = test::call_service(&app, req).await;
        let body = body_json(res).await;
        assert_eq!(body["data"]["pagination"]["total"], json!(1));
        assert_eq!(body["data"]["items"][0]["subject"], json!("Second"));
    }

    #[actix_web::test]
    async fn test_mark_read_missing_message_is_not_found() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::put()
            .uri("/api/contacts/999/read")
            .insert_header(("Authorization", token))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
