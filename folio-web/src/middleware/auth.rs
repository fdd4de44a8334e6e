//! Authentication middleware for handling bearer token authentication.
//! This module validates bearer tokens and attaches the verified claims to requests.

use crate::AppState;
use actix_service::{Service, Transform};
use actix_web::{
    body::{EitherBody, MessageBody},
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    http::{header::AUTHORIZATION, Method},
    web::Data,
    Error, HttpMessage, ResponseError,
};
use folio_error::web::WebError;
use folio_models::{constants::BEARER_TOKEN, domain::prelude::Claims, settings::Jwt};
use folio_utils::jwt::decode_jwt;
use futures::{
    future::{ok, LocalBoxFuture, Ready},
    FutureExt,
};
use jsonwebtoken::{Algorithm, Validation};
use std::{
    cell::RefCell,
    rc::Rc,
    task::{Context, Poll},
};

/// Authentication middleware factory.
///
/// This struct is used to create new instances of the authentication middleware.
/// It implements the `Transform` trait to transform services into authenticated services.
pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AuthenticationMiddleware {
            service: Rc::new(RefCell::new(service)),
        })
    }
}

/// Authentication middleware implementation.
///
/// This middleware handles bearer token authentication by:
/// 1. Extracting the bearer token from the Authorization header
/// 2. Verifying signature, expiry and issuer against the configured secret
/// 3. Attaching the verified claims for the context extractors downstream
///
/// Requests without an Authorization header pass through untouched: public
/// and admin routes share the same scope, and the context extractors decide
/// per handler whether identity is required.
pub struct AuthenticationMiddleware<S> {
    service: Rc<RefCell<S>>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: MessageBody,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = S::Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        async move {
            // Fast path for OPTIONS requests
            if Method::OPTIONS == req.method() {
                return srv.call(req).await.map(|res| res.map_into_left_body());
            }
            // No credentials offered; continue anonymously
            let token = match extract_bearer_token(&req) {
                Some(token) => token,
                None => return srv.call(req).await.map(|res| res.map_into_left_body()),
            };

            let jwt = get_jwt_settings(&req)?;

            let mut validation = Validation::new(Algorithm::HS256);
            validation.validate_aud = false;
            validation.set_issuer(&[&jwt.issuer]);

            let claims =
                match decode_jwt::<Claims>(token, jwt.secret.as_bytes(), Some(validation)) {
                    Ok(td) => td.claims,
                    Err(_) => {
                        return Ok(req
                            .into_response(
                                WebError::Unauthorized("Invalid token, please login again".into())
                                    .error_response(),
                            )
                            .map_into_right_body())
                    }
                };

            // Insert identity for the context extractors
            req.extensions_mut().insert(claims);

            srv.call(req).await.map(|res| res.map_into_left_body())
        }
        .boxed_local()
    }
}

/// Extracts the bearer token from the request headers.
///
/// # Arguments
/// * `req` - The service request containing the headers
///
/// # Returns
/// * `Option<&str>` - The bearer token if present and valid, None otherwise
#[inline]
fn extract_bearer_token(req: &ServiceRequest) -> Option<&str> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_TOKEN)
        .map(str::trim)
}

/// Retrieves the JWT configuration from the shared application state.
///
/// # Arguments
/// * `req` - The service request carrying the application data
///
/// # Returns
/// * `Result<Jwt, Error>` - The JWT settings if the state is registered,
///   or an error if it is missing
#[inline]
fn get_jwt_settings(req: &ServiceRequest) -> Result<Jwt, Error> {
    req.app_data::<Data<AppState>>()
        .map(|state| state.settings.web.jwt.clone())
        .ok_or_else(|| ErrorInternalServerError("Application state not initialized"))
}
