use crate::{middleware::AdminContext, AppState};
use actix_web::web::{self, Data, ServiceConfig};
use actix_web_validator::{Json, Path, Query};
use folio_error::{web::WebError, WebResult};
use folio_models::{
    domain::prelude::{NewService, Page, PathId, ServiceInfo, ServicePageParams, UpdateService},
    web::ApiResponse,
};
use folio_repository::ServiceRepository;
use sea_orm::IntoActiveModel;

pub(super) const ROUTER_PREFIX: &str = "/services";

/// Configure service routes
///
/// # Routes
/// - GET ``: Paginated service list (public)
/// - GET `/{id}`: Service details (public)
/// - POST ``: Create a service (admin)
/// - PUT `/{id}`: Partially update a service (admin)
/// - DELETE `/{id}`: Delete a service (admin)
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::get().to(page))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// `GET /api/services` (public)
pub async fn page(
    params: Query<ServicePageParams>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<Page<ServiceInfo>>> {
    let result = ServiceRepository::page(params.into_inner(), &state.db).await?;
    Ok(ApiResponse::ok(result))
}

/// `GET /api/services/{id}` (public)
pub async fn get_by_id(
    params: Path<PathId>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<ServiceInfo>> {
    let service = ServiceRepository::find_by_id(params.id, &state.db)
        .await?
        .ok_or_else(|| WebError::NotFound("Service".into()))?;
    Ok(ApiResponse::ok(service.into()))
}

/// `POST /api/services` (admin)
pub async fn create(
    service: Json<NewService>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<ServiceInfo>> {
    let created =
        ServiceRepository::create(service.into_inner().into_active_model(), &state.db).await?;
    Ok(ApiResponse::created_with_message(
        "Service created successfully",
        created.into(),
    ))
}

/// `PUT /api/services/{id}` (admin)
pub async fn update(
    params: Path<PathId>,
    service: Json<UpdateService>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<ServiceInfo>> {
    let updated =
        ServiceRepository::update(params.id, service.into_inner().into_active_model(), &state.db)
            .await?;
    Ok(ApiResponse::ok_with_message(
        "Service updated successfully",
        updated.into(),
    ))
}

/// `DELETE /api/services/{id}` (admin)
pub async fn delete(
    params: Path<PathId>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<()>> {
    ServiceRepository::delete(params.id, &state.db).await?;
    Ok(ApiResponse::ok_message("Service deleted successfully"))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_create_then_public_read() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/services")
            .insert_header(("Authorization", token))
            .set_json(json!({
                "icon": "code",
                "title": "Web Development",
                "description": "Responsive sites",
                "features": ["Design", "Hosting"]
            }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let res =
            test::call_service(&app, test::TestRequest::get().uri("/api/services").to_request())
                .await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["data"]["items"][0]["title"], json!("Web Development"));
        assert_eq!(body["data"]["items"][0]["features"], json!(["Design", "Hosting"]));
    }
}
