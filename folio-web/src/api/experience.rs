use crate::{middleware::AdminContext, AppState};
use actix_web::web::{self, Data, ServiceConfig};
use actix_web_validator::{Json, Path, Query};
use folio_error::{web::WebError, WebResult};
use folio_models::{
    domain::prelude::{
        ExperienceInfo, ExperiencePageParams, NewExperience, Page, PathId, UpdateExperience,
    },
    web::ApiResponse,
};
use folio_repository::ExperienceRepository;
use sea_orm::IntoActiveModel;

pub(super) const ROUTER_PREFIX: &str = "/experiences";

/// Configure experience routes
///
/// # Routes
/// - GET ``: Paginated experience list with title/company filters (public)
/// - GET `/{id}`: Experience details (public)
/// - POST ``: Create an experience entry (admin)
/// - PUT `/{id}`: Partially update an experience entry (admin)
/// - DELETE `/{id}`: Delete an experience entry (admin)
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::get().to(page))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// `GET /api/experiences` (public)
pub async fn page(
    params: Query<ExperiencePageParams>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<Page<ExperienceInfo>>> {
    let result = ExperienceRepository::page(params.into_inner(), &state.db).await?;
    Ok(ApiResponse::ok(result))
}

/// `GET /api/experiences/{id}` (public)
pub async fn get_by_id(
    params: Path<PathId>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<ExperienceInfo>> {
    let experience = ExperienceRepository::find_by_id(params.id, &state.db)
        .await?
        .ok_or_else(|| WebError::NotFound("Experience".into()))?;
    Ok(ApiResponse::ok(experience.into()))
}

/// `POST /api/experiences` (admin)
pub async fn create(
    experience: Json<NewExperience>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<ExperienceInfo>> {
    let created =
        ExperienceRepository::create(experience.into_inner().into_active_model(), &state.db)
            .await?;
    Ok(ApiResponse::created_with_message(
        "Experience created successfully",
        created.into(),
    ))
}

/// `PUT /api/experiences/{id}` (admin)
pub async fn update(
    params: Path<PathId>,
    experience: Json<UpdateExperience>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<ExperienceInfo>> {
    let updated = ExperienceRepository::update(
        params.id,
        experience.into_inner().into_active_model(),
        &state.db,
    )
    .await?;
    Ok(ApiResponse::ok_with_message(
        "Experience updated successfully",
        updated.into(),
    ))
}

/// `DELETE /api/experiences/{id}` (admin)
pub async fn delete(
    params: Path<PathId>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<()>> {
    ExperienceRepository::delete(params.id, &state.db).await?;
    Ok(ApiResponse::ok_message("Experience deleted successfully"))
}
