use crate::{middleware::RequestContext, AppState};
use actix_web::web::{self, Data, ServiceConfig};
use actix_web_validator::Json;
use folio_error::{web::WebError, WebResult};
use folio_models::{
    domain::prelude::{Claims, LoginRequest, LoginResponse, UserInfo},
    web::ApiResponse,
};
use folio_repository::UserRepository;
use folio_utils::{hash::bcrypt_check, jwt::encode_jwt};

pub(super) const ROUTER_PREFIX: &str = "/auth";

/// Configure authentication routes
///
/// # Routes
/// - POST `/login`: Exchange credentials for a bearer token
/// - GET `/me`: Current account behind the token
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("/login", web::post().to(login))
        .route("/me", web::get().to(me));
}

/// Login endpoint
///
/// # Endpoint
/// `POST /api/auth/login`
///
/// # Description
/// Verifies the credentials and issues a signed JWT. Unknown accounts and
/// wrong passwords get the same answer so the endpoint does not leak which
/// addresses exist.
///
/// # Returns
/// - `WebResult<ApiResponse<LoginResponse>>`: Token and sanitized account on
///   success, 401 otherwise
pub async fn login(
    req: Json<LoginRequest>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<LoginResponse>> {
    let email = req.email.as_ref().unwrap();
    let password = req.password.as_ref().unwrap();

    let user = match UserRepository::find_by_email(email, &state.db).await? {
        Some(user) => user,
        None => return Err(WebError::Unauthorized("Invalid email or password".into())),
    };

    if !bcrypt_check(password, &user.password) {
        return Err(WebError::Unauthorized("Invalid email or password".into()));
    }

    let claims = Claims::new(
        state.settings.web.jwt.issuer.clone(),
        user.id,
        user.email.clone(),
        user.role,
        state.settings.web.jwt.expire,
    );

    let token = encode_jwt(&claims, state.settings.web.jwt.secret.as_bytes(), None)
        .map_err(|_| WebError::InternalError("Failed to encode JWT".to_string()))?;

    Ok(ApiResponse::ok(LoginResponse {
        token,
        user: user.into(),
    }))
}

/// Current account endpoint
///
/// # Endpoint
/// `GET /api/auth/me`
///
/// # Description
/// Returns the account behind the presented token
///
/// # Returns
/// - `WebResult<ApiResponse<UserInfo>>`: Sanitized account view or error
pub async fn me(ctx: RequestContext, state: Data<AppState>) -> WebResult<ApiResponse<UserInfo>> {
    let user_id = ctx
        .claims
        .user_id()
        .ok_or_else(|| WebError::Unauthorized("Authentication required".into()))?;

    let user = UserRepository::find_user_info(user_id, &state.db)
        .await?
        .ok_or_else(|| WebError::NotFound("User".into()))?;

    Ok(ApiResponse::ok(user))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_login_returns_token_and_sanitized_user() {
        let app = test::init_service(test_app(test_state().await)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["success"], json!(true));
        assert!(!body["data"]["token"].as_str().unwrap().is_empty());
        assert_eq!(body["data"]["user"]["email"], json!(ADMIN_EMAIL));
        assert!(body["data"]["user"].get("password").is_none());
    }

    #[actix_web::test]
    async fn test_login_rejects_bad_password() {
        let app = test::init_service(test_app(test_state().await)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": ADMIN_EMAIL, "password": "wrong" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(res).await;
        assert_eq!(body["message"], json!("Invalid email or password"));
    }

    #[actix_web::test]
    async fn test_login_rejects_unknown_account_identically() {
        let app = test::init_service(test_app(test_state().await)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "nobody@example.com", "password": "wrong" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(res).await;
        assert_eq!(body["message"], json!("Invalid email or password"));
    }

    #[actix_web::test]
    async fn test_login_validates_email_shape() {
        let app = test::init_service(test_app(test_state().await)).await;

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "not-an-email", "password": "x" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        assert!(body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["field"] == json!("email")));
    }

    #[actix_web::test]
    async fn test_me_returns_current_account() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(("Authorization", token))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["data"]["email"], json!(ADMIN_EMAIL));
        assert_eq!(body["data"]["role"], json!("ADMIN"));
    }

    #[actix_web::test]
    async fn test_me_requires_a_token() {
        let app = test::init_service(test_app(test_state().await)).await;

        let req = test::TestRequest::get().uri("/api/auth/me").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(res).await;
        assert_eq!(body["message"], json!("Authentication required"));
    }

    #[actix_web::test]
    async fn test_me_rejects_a_garbage_token() {
        let app = test::init_service(test_app(test_state().await)).await;

        let req = test::TestRequest::get()
            .uri("/api/auth/me")
            .insert_header(("Authorization", "Bearer not-a-jwt"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(res).await;
        assert_eq!(body["message"], json!("Invalid token, please login again"));
    }
}
