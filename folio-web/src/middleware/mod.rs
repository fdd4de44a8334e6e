pub(crate) mod auth;
pub(crate) mod cors;

use actix_web::{dev::Payload, FromRequest, HttpMessage, HttpRequest};
use folio_error::web::WebError;
use folio_models::domain::prelude::Claims;
use futures::future::{ready, Ready};

/// Verified identity of the caller, populated by the [`auth::Authentication`]
/// middleware. Extracting it from an anonymous request fails with 401.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub claims: Claims,
}

impl FromRequest for RequestContext {
    type Error = WebError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<Claims>()
                .cloned()
                .map(|claims| RequestContext { claims })
                .ok_or_else(|| WebError::Unauthorized("Authentication required".into())),
        )
    }
}

/// Like [`RequestContext`], but additionally requires the admin role.
///
/// Anonymous callers get 401, authenticated non-admins get 403.
#[derive(Debug, Clone)]
pub struct AdminContext {
    pub claims: Claims,
}

impl FromRequest for AdminContext {
    type Error = WebError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let result = match req.extensions().get::<Claims>().cloned() {
            None => Err(WebError::Unauthorized("Authentication required".into())),
            Some(claims) if !claims.is_admin() => {
                Err(WebError::Forbidden("Permission denied".into()))
            }
            Some(claims) => Ok(AdminContext { claims }),
        };
        ready(result)
    }
}
