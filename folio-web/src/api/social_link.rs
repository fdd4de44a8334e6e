use crate::{middleware::AdminContext, AppState};
use actix_web::web::{self, Data, ServiceConfig};
use actix_web_validator::{Json, Path, Query};
use folio_error::{web::WebError, WebResult};
use folio_models::{
    domain::prelude::{
        NewSocialLink, Page, PathId, SocialLinkInfo, SocialLinkPageParams, UpdateSocialLink,
    },
    web::ApiResponse,
};
use folio_repository::SocialLinkRepository;
use sea_orm::IntoActiveModel;

pub(super) const ROUTER_PREFIX: &str = "/social-links";

/// Configure social link routes
///
/// # Routes
/// - GET ``: Paginated social link list with label filter (public)
/// - GET `/{id}`: Social link details (public)
/// - POST ``: Create a social link (admin)
/// - PUT `/{id}`: Partially update a social link (admin)
/// - DELETE `/{id}`: Delete a social link (admin)
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::get().to(page))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// `GET /api/social-links` (public)
pub async fn page(
    params: Query<SocialLinkPageParams>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<Page<SocialLinkInfo>>> {
    let result = SocialLinkRepository::page(params.into_inner(), &state.db).await?;
    Ok(ApiResponse::ok(result))
}

/// `GET /api/social-links/{id}` (public)
pub async fn get_by_id(
    params: Path<PathId>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<SocialLinkInfo>> {
    let link = SocialLinkRepository::find_by_id(params.id, &state.db)
        .await?
        .ok_or_else(|| WebError::NotFound("Social link".into()))?;
    Ok(ApiResponse::ok(link.into()))
}

/// `POST /api/social-links` (admin)
pub async fn create(
    link: Json<NewSocialLink>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<SocialLinkInfo>> {
    let created =
        SocialLinkRepository::create(link.into_inner().into_active_model(), &state.db).await?;
    Ok(ApiResponse::created_with_message(
        "Social link created successfully",
        created.into(),
    ))
}

/// `PUT /api/social-links/{id}` (admin)
pub async fn update(
    params: Path<PathId>,
    link: Json<UpdateSocialLink>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<SocialLinkInfo>> {
    let updated =
        SocialLinkRepository::update(params.id, link.into_inner().into_active_model(), &state.db)
            .await?;
    Ok(ApiResponse::ok_with_message(
        "Social link updated successfully",
        updated.into(),
    ))
}

/// `DELETE /api/social-links/{id}` (admin)
pub async fn delete(
    params: Path<PathId>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<()>> {
    SocialLinkRepository::delete(params.id, &state.db).await?;
    Ok(ApiResponse::ok_message("Social link deleted successfully"))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_malformed_url_is_rejected() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/social-links")
            .insert_header(("Authorization", token))
            .set_json(json!({
                "icon": "github",
                "label": "GitHub",
                "url": "not a url"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        let errors = body["errors"].as_array().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0]["field"], json!("url"));
        assert_eq!(errors[0]["message"], json!("URL must be valid"));
    }
}
