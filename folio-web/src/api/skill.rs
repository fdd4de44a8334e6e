use crate::{middleware::AdminContext, AppState};
use actix_web::web::{self, Data, ServiceConfig};
use actix_web_validator::{Json, Path, Query};
use folio_error::{web::WebError, WebResult};
use folio_models::{
    domain::prelude::{NewSkill, Page, PathId, SkillInfo, SkillPageParams, UpdateSkill},
    web::ApiResponse,
};
use folio_repository::SkillRepository;
use sea_orm::IntoActiveModel;

pub(super) const ROUTER_PREFIX: &str = "/skills";

/// Configure skill routes
///
/// # Routes
/// - GET ``: Paginated skill list with name/category filters (public)
/// - GET `/{id}`: Skill details (public)
/// - POST ``: Create a skill (admin)
/// - PUT `/{id}`: Partially update a skill (admin)
/// - DELETE `/{id}`: Delete a skill (admin)
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::get().to(page))
        .route("", web::post().to(create))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// `GET /api/skills` (public)
pub async fn page(
    params: Query<SkillPageParams>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<Page<SkillInfo>>> {
    let result = SkillRepository::page(params.into_inner(), &state.db).await?;
    Ok(ApiResponse::ok(result))
}

/// `GET /api/skills/{id}` (public)
pub async fn get_by_id(
    params: Path<PathId>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<SkillInfo>> {
    let skill = SkillRepository::find_by_id(params.id, &state.db)
        .await?
        .ok_or_else(|| WebError::NotFound("Skill".into()))?;
    Ok(ApiResponse::ok(skill.into()))
}

/// `POST /api/skills` (admin)
pub async fn create(
    skill: Json<NewSkill>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<SkillInfo>> {
    let created =
        SkillRepository::create(skill.into_inner().into_active_model(), &state.db).await?;
    Ok(ApiResponse::created_with_message(
        "Skill created successfully",
        created.into(),
    ))
}

/// `PUT /api/skills/{id}` (admin)
pub async fn update(
    params: Path<PathId>,
    skill: Json<UpdateSkill>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<SkillInfo>> {
    let updated =
        SkillRepository::update(params.id, skill.into_inner().into_active_model(), &state.db)
            .await?;
    Ok(ApiResponse::ok_with_message(
        "Skill updated successfully",
        updated.into(),
    ))
}

/// `DELETE /api/skills/{id}` (admin)
pub async fn delete(
    params: Path<PathId>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<()>> {
    SkillRepository::delete(params.id, &state.db).await?;
    Ok(ApiResponse::ok_message("Skill deleted successfully"))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use actix_web::{http::StatusCode, test};
    use serde_json::json;

    #[actix_web::test]
    async fn test_level_outside_range_is_rejected() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/skills")
            .insert_header(("Authorization", token))
            .set_json(json!({
                "name": "Rust",
                "level": 150,
                "icon": "gear",
                "category": "backend"
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = body_json(res).await;
        assert!(body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["field"] == json!("level")));
    }

    #[actix_web::test]
    async fn test_name_filter_via_query_string() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        for (name, category) in [("Rust", "backend"), ("React", "frontend"), ("Sqlite", "db")] {
            let req = test::TestRequest::post()
                .uri("/api/skills")
                .insert_header(("Authorization", token.clone()))
                .set_json(json!({
                    "name": name,
                    "level": 80,
                    "icon": "gear",
                    "category": category
                }))
                .to_request();
            test::call_service(&app, req).await;
        }

        let req = test::TestRequest::get().uri("/api/skills?name=r").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        let names: Vec<&str> = body["data"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Rust", "React"]);
    }
}
