use crate::{middleware::AdminContext, AppState};
use actix_web::web::{self, Data, ServiceConfig};
use actix_web_validator::Json;
use folio_error::{storage::StorageError, web::WebError, WebResult};
use folio_models::{
    domain::prelude::{AboutInfo, NewAbout, UpdateAbout},
    web::ApiResponse,
};
use folio_repository::AboutRepository;
use sea_orm::IntoActiveModel;

pub(super) const ROUTER_PREFIX: &str = "/about";

/// Configure profile routes
///
/// The profile is a singleton, so none of the routes carry an id.
///
/// # Routes
/// - GET ``: Retrieve the profile (public)
/// - POST ``: Create the profile once (admin)
/// - PUT ``: Partially update the profile (admin)
/// - DELETE ``: Delete the profile (admin)
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::get().to(get))
        .route("", web::post().to(create))
        .route("", web::put().to(update))
        .route("", web::delete().to(delete));
}

/// Retrieve the profile
///
/// # Endpoint
/// `GET /api/about`
pub async fn get(state: Data<AppState>) -> WebResult<ApiResponse<AboutInfo>> {
    let about = AboutRepository::get(&state.db)
        .await?
        .ok_or_else(|| WebError::NotFound("About information".into()))?;
    Ok(ApiResponse::ok(about.into()))
}

/// Create the profile
///
/// # Endpoint
/// `POST /api/about`
///
/// # Authorization
/// Admin only
///
/// # Errors
/// - Bad Request (400): When a profile already exists
pub async fn create(
    about: Json<NewAbout>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<AboutInfo>> {
    let created = AboutRepository::create(about.into_inner().into_active_model(), &state.db)
        .await
        .map_err(|e| match e {
            StorageError::AlreadyExists(_) => {
                WebError::BadRequest("About information already exists. Use PUT to update.".into())
            }
            other => other.into(),
        })?;
    Ok(ApiResponse::created_with_message(
        "About information created successfully",
        created.into(),
    ))
}

/// Update the profile
///
/// # Endpoint
/// `PUT /api/about`
///
/// # Authorization
/// Admin only
pub async fn update(
    about: Json<UpdateAbout>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<AboutInfo>> {
    let updated = AboutRepository::update(about.into_inner().into_active_model(), &state.db)
        .await
        .map_err(about_not_found)?;
    Ok(ApiResponse::ok_with_message(
        "About information updated successfully",
        updated.into(),
    ))
}

/// Delete the profile
///
/// # Endpoint
/// `DELETE /api/about`
///
/// # Authorization
/// Admin only
pub async fn delete(state: Data<AppState>, _admin: AdminContext) -> WebResult<ApiResponse<()>> {
    AboutRepository::delete(&state.db)
        .await
        .map_err(about_not_found)?;
    Ok(ApiResponse::ok_message(
        "About information deleted successfully",
    ))
}

fn about_not_found(e: StorageError) -> WebError {
    match e {
        StorageError::EntityNotFound(_) => WebError::NotFound("About information".into()),
        other => other.into(),
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::{json, Value};

    fn profile() -> Value {
        json!({
            "name": "Jordan Example",
            "title": "Full Stack Developer",
            "subtitle": "Building for the web",
            "bio": "I build web applications.",
            "yearsExperience": 5
        })
    }

    #[actix_web::test]
    async fn test_singleton_lifecycle() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/about").to_request())
            .await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::post()
            .uri("/api/about")
            .insert_header(("Authorization", token.clone()))
            .set_json(profile())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);

        let res = test::call_service(&app, test::TestRequest::get().uri("/api/about").to_request())
            .await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["data"]["name"], json!("Jordan Example"));

        let req = test::TestRequest::post()
            .uri("/api/about")
            .insert_header(("Authorization", token))
            .set_json(profile())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(res).await["message"],
            json!("About information already exists. Use PUT to update.")
        );
    }

    #[actix_web::test]
    async fn test_put_patches_and_null_clears() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/about")
            .insert_header(("Authorization", token.clone()))
            .set_json(profile())
            .to_request();
        test::call_service(&app, req).await;

        // Explicit null clears the column
        let req = test::TestRequest::put()
            .uri("/api/about")
            .insert_header(("Authorization", token.clone()))
            .set_json(json!({ "subtitle": null }))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["data"]["subtitle"], Value::Null);
        assert_eq!(body["data"]["name"], json!("Jordan Example"));

        // An empty patch is a no-op, not an error
        let req = test::TestRequest::put()
            .uri("/api/about")
            .insert_header(("Authorization", token))
            .set_json(json!({}))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body_json(res).await["data"]["name"], json!("Jordan Example"));
    }

    #[actix_web::test]
    async fn test_update_without_profile_is_not_found() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::put()
            .uri("/api/about")
            .insert_header(("Authorization", token))
            .set_json(json!({ "name": "Someone" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(res).await["message"],
            json!("About information not found")
        );
    }

    #[actix_web::test]
    async fn test_mutations_require_admin() {
        let state = test_state().await;
        let user_token = user_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/about")
            .set_json(profile())
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let req = test::TestRequest::delete()
            .uri("/api/about")
            .insert_header(("Authorization", user_token))
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
    }
}
