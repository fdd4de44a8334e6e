use crate::{middleware::AdminContext, AppState};
use actix_web::web::{self, Data, ServiceConfig};
use actix_web_validator::{Json, Path, Query};
use folio_error::{web::WebError, WebResult};
use folio_models::{
    domain::prelude::{NewProject, Page, PathId, ProjectInfo, ProjectPageParams, UpdateProject},
    web::ApiResponse,
};
use folio_repository::ProjectRepository;
use sea_orm::IntoActiveModel;

pub(super) const ROUTER_PREFIX: &str = "/projects";

/// Configure project routes
///
/// # Routes
/// - GET ``: Paginated project list with filters (public)
/// - GET `/categories`: Distinct categories for the filter bar (public)
/// - GET `/{id}`: Project details (public)
/// - POST ``: Create a project (admin)
/// - PUT `/{id}`: Partially update a project (admin)
/// - DELETE `/{id}`: Delete a project (admin)
pub(crate) fn configure_routes(cfg: &mut ServiceConfig) {
    cfg.route("", web::get().to(page))
        .route("", web::post().to(create))
        .route("/categories", web::get().to(categories))
        .route("/{id}", web::get().to(get_by_id))
        .route("/{id}", web::put().to(update))
        .route("/{id}", web::delete().to(delete));
}

/// Retrieve paginated list of projects
///
/// # Endpoint
/// `GET /api/projects`
///
/// # Description
/// Filters by `category`, `isFeatured` and `isActive`; paginates with
/// `page`/`limit`
pub async fn page(
    params: Query<ProjectPageParams>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<Page<ProjectInfo>>> {
    let result = ProjectRepository::page(params.into_inner(), &state.db).await?;
    Ok(ApiResponse::ok(result))
}

/// Retrieve distinct project categories
///
/// # Endpoint
/// `GET /api/projects/categories`
pub async fn categories(state: Data<AppState>) -> WebResult<ApiResponse<Vec<String>>> {
    let categories = ProjectRepository::categories(&state.db).await?;
    Ok(ApiResponse::ok(categories))
}

/// Retrieve project details by ID
///
/// # Endpoint
/// `GET /api/projects/{id}`
pub async fn get_by_id(
    params: Path<PathId>,
    state: Data<AppState>,
) -> WebResult<ApiResponse<ProjectInfo>> {
    let project = ProjectRepository::find_by_id(params.id, &state.db)
        .await?
        .ok_or_else(|| WebError::NotFound("Project".into()))?;
    Ok(ApiResponse::ok(project.into()))
}

/// Create a new project
///
/// # Endpoint
/// `POST /api/projects`
///
/// # Authorization
/// Admin only
pub async fn create(
    project: Json<NewProject>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<ProjectInfo>> {
    let created =
        ProjectRepository::create(project.into_inner().into_active_model(), &state.db).await?;
    Ok(ApiResponse::created_with_message(
        "Project created successfully",
        created.into(),
    ))
}

/// Update project information
///
/// # Endpoint
/// `PUT /api/projects/{id}`
///
/// # Authorization
/// Admin only
pub async fn update(
    params: Path<PathId>,
    project: Json<UpdateProject>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<ProjectInfo>> {
    let updated =
        ProjectRepository::update(params.id, project.into_inner().into_active_model(), &state.db)
            .await?;
    Ok(ApiResponse::ok_with_message(
        "Project updated successfully",
        updated.into(),
    ))
}

/// Delete project
///
/// # Endpoint
/// `DELETE /api/projects/{id}`
///
/// # Authorization
/// Admin only
pub async fn delete(
    params: Path<PathId>,
    state: Data<AppState>,
    _admin: AdminContext,
) -> WebResult<ApiResponse<()>> {
    ProjectRepository::delete(params.id, &state.db).await?;
    Ok(ApiResponse::ok_message("Project deleted successfully"))
}

#[cfg(test)]
mod tests {
    use crate::test_support::*;
    use actix_web::{http::StatusCode, test};
    use folio_models::{domain::prelude::NewProject, entities::project::Tags};
    use folio_repository::ProjectRepository;
    use sea_orm::{DatabaseConnection, IntoActiveModel};
    use serde_json::json;

    async fn seed(db: &DatabaseConnection, title: &str, category: &str, sort_order: i32) {
        let project = NewProject {
            title: title.into(),
            description: "built for testing".into(),
            image: None,
            category: category.into(),
            tags: Tags(vec!["rust".into()]),
            live_demo: None,
            github: None,
            date: None,
            is_featured: false,
            sort_order,
            is_active: true,
        };
        ProjectRepository::create(project.into_active_model(), db)
            .await
            .unwrap();
    }

    #[actix_web::test]
    async fn test_create_requires_admin() {
        let state = test_state().await;
        let user_token = user_bearer(&state);
        let admin_token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;
        let payload = json!({
            "title": "Portfolio",
            "description": "Personal site",
            "category": "web",
            "tags": ["rust"]
        });

        let anonymous = test::TestRequest::post()
            .uri("/api/projects")
            .set_json(&payload)
            .to_request();
        let res = test::call_service(&app, anonymous).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let as_user = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("Authorization", user_token))
            .set_json(&payload)
            .to_request();
        let res = test::call_service(&app, as_user).await;
        assert_eq!(res.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_json(res).await["message"], json!("Permission denied"));

        let as_admin = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("Authorization", admin_token))
            .set_json(&payload)
            .to_request();
        let res = test::call_service(&app, as_admin).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body = body_json(res).await;
        assert_eq!(body["message"], json!("Project created successfully"));
        assert_eq!(body["data"]["title"], json!("Portfolio"));
    }

    #[actix_web::test]
    async fn test_page_is_public_and_coerces_query_text() {
        let state = test_state().await;
        for (i, title) in ["one", "two", "three"].iter().enumerate() {
            seed(&state.db, title, "react", i as i32).await;
        }
        seed(&state.db, "other", "vue", 9).await;
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects?category=react&page=1&limit=2&isActive=true")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["data"]["items"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"]["pagination"]["total"], json!(3));
        assert_eq!(body["data"]["pagination"]["totalPages"], json!(2));
    }

    #[actix_web::test]
    async fn test_categories_listed_before_id_route() {
        let state = test_state().await;
        seed(&state.db, "a", "react", 0).await;
        seed(&state.db, "b", "vanilla", 1).await;
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/api/projects/categories")
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = body_json(res).await;
        assert_eq!(body["data"], json!(["all", "react", "vanilla"]));
    }

    #[actix_web::test]
    async fn test_missing_project_is_not_found() {
        let app = test::init_service(test_app(test_state().await)).await;

        let req = test::TestRequest::get().uri("/api/projects/999").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body = body_json(res).await;
        assert_eq!(body["success"], json!(false));
        assert_eq!(body["message"], json!("Project not found"));
    }

    #[actix_web::test]
    async fn test_update_missing_project_is_not_found() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::put()
            .uri("/api/projects/999")
            .insert_header(("Authorization", token))
            .set_json(json!({ "title": "renamed" }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = test::init_service(test_app(test_state().await)).await;

        let req = test::TestRequest::get().uri("/api/projects/abc").to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_create_validation_names_offending_fields() {
        let state = test_state().await;
        let token = admin_bearer(&state);
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/api/projects")
            .insert_header(("Authorization", token))
            .set_json(json!({
                "title": "",
                "description": "Personal site",
                "category": "web",
                "tags": []
            }))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let fields: Vec<String> = body_json(res).await["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["field"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(fields, ["tags", "title"]);
    }
}
