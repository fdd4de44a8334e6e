use crate::{middleware::AdminContext, AppState};
use actix_web::web::{self, Data, ServiceConfig};
use actix_web_validator::{Json, Path, Query};
use folio_error::{web::WebError, WebResult};
use folio_models::{
    domain::prelude::{
        ContactMethodInfo, ContactMethodPageParams, NewContactMethod, Page, PathId,
        UpdateContactMethod,
    },
    web::ApiResponse,
};
use folio_repository::ContactMethodRepository;
use sea_orm::IntoActiveModel;

pub(super) const ROUTER_PREFIX: &str = "/contact-methods";

/// Configure contact method routes
///
/// # Routes
/// - GET ``: Paginated contact method list with title filter (public)
/// - GET `/{id}`: Contact method details (public)
/// - POST ``: Create a contact method (admin)
/// - PUT `/{id}`: Partially update a contact method (admin)
/// - DELETE `/{id}`: Delete a contact method (admin)
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::get().to(page))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// `GET /api/contact-methods` (public)
pub async fn page(
    params: Query<ContactMethodPageParams>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<Page<ContactMethodInfo>>> {
    let result = ContactMethodRepository::page(params.into_inner(), &state.db).await?;
    Ok(ApiResponse::ok(result))
}

/// `GET /api/contact-methods/{id}` (public)
pub async fn get_by_id(
    params: Path<PathId>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<ContactMethodInfo>> {
    let method = ContactMethodRepository::find_by_id(params.id, &state.db)
        .await?
        .ok_or_else(|| WebError::NotFound("Contact method".into()))?;
    Ok(ApiResponse::ok(method.into()))
}

/// `POST /api/contact-methods` (admin)
pub async fn create(
    method: Json<NewContactMethod>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<ContactMethodInfo>> {
    let created =
        ContactMethodRepository::create(method.into_inner().into_active_model(), &state.db)
            .await?;
    Ok(ApiResponse::created_with_message(
        "Contact method created successfully",
        created.into(),
    ))
}

/// `PUT /api/contact-methods/{id}` (admin)
pub async fn update(
    params: Path<PathId>,
    method: Json<UpdateContactMethod>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<ContactMethodInfo>> {
    let updated = ContactMethodRepository::update(
        params.id,
        method.into_inner().into_active_model(),
        &state.db,
    )
    .await?;
    Ok(ApiResponse::ok_with_message(
        "Contact method updated successfully",
        updated.into(),
    ))
}

/// `DELETE /api/contact-methods/{id}` (admin)
pub async fn delete(
    params: Path<PathId>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<()>> {
    ContactMethodRepository::delete(params.id, &state.db).await?;
    Ok(ApiResponse::ok_message("Contact method deleted successfully"))
}
