use crate::AppState;
use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web::{self, Data},
    App, Error,
};
use folio_models::{
    domain::prelude::{Claims, NewUserWithId},
    enums::common::Role,
    initializer::initializers,
    settings::{Inner, Jwt, Settings, Web},
};
use folio_notify::Notifier;
use folio_utils::{hash::bcrypt_hash, jwt::encode_jwt};
use sea_orm::{
    ActiveModelTrait, ConnectOptions, ConnectionTrait, Database, DatabaseConnection,
    IntoActiveModel,
};
use std::sync::Arc;

pub(crate) const ADMIN_EMAIL: &str = "admin@example.com";
pub(crate) const ADMIN_PASSWORD: &str = "s3cret-admin";
pub(crate) const USER_EMAIL: &str = "visitor@example.com";

/// Fresh in-memory SQLite carrying the full schema and no rows.
pub(crate) async fn memory_db() -> DatabaseConnection {
    // A single pooled connection keeps every query on the same in-memory
    // database
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.unwrap();

    let backend = db.get_database_backend();
    for initializer in initializers() {
        db.execute(backend.build(&initializer.to_create_table_stmt(backend)))
            .await
            .unwrap();
        for stmt in initializer
            .to_create_indexes_stmt(backend)
            .unwrap_or_default()
        {
            db.execute(backend.build(&stmt)).await.unwrap();
        }
    }

    db
}

fn test_settings() -> Settings {
    Settings::from(Inner {
        web: Web {
            jwt: Jwt {
                secret: "web-test-secret".into(),
                ..Default::default()
            },
            ..Default::default()
        },
        ..Default::default()
    })
}

/// State over a fresh database holding one admin and one regular account.
pub(crate) async fn test_state() -> AppState {
    let db = memory_db().await;

    NewUserWithId {
        id: 1,
        email: ADMIN_EMAIL.into(),
        name: "Admin".into(),
        password: bcrypt_hash(ADMIN_PASSWORD),
        role: Role::Admin,
    }
    .into_active_model()
    .insert(&db)
    .await
    .unwrap();

    NewUserWithId {
        id: 2,
        email: USER_EMAIL.into(),
        name: "Visitor".into(),
        password: bcrypt_hash("visitor-pass"),
        role: Role::User,
    }
    .into_active_model()
    .insert(&db)
    .await
    .unwrap();

    let settings = test_settings();
    let notifier = Notifier::with_transport(settings.clone(), None);

    AppState {
        db,
        settings,
        notifier: Arc::new(notifier),
    }
}

/// Authorization header value for the given identity.
pub(crate) fn bearer(state: &AppState, user_id: i32, email: &str, role: Role) -> String {
    let jwt = &state.settings.web.jwt;
    let claims = Claims::new(jwt.issuer.clone(), user_id, email.into(), role, jwt.expire);
    let token = encode_jwt(&claims, jwt.secret.as_bytes(), None).unwrap();
    format!("Bearer {token}")
}

pub(crate) fn admin_bearer(state: &AppState) -> String {
    bearer(state, 1, ADMIN_EMAIL, Role::Admin)
}

pub(crate) fn user_bearer(state: &AppState) -> String {
    bearer(state, 2, USER_EMAIL, Role::User)
}

/// The application exactly as served, minus the listener and CORS.
pub(crate) fn test_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(Data::new(state))
        .app_data(crate::validation::json_config())
        .app_data(crate::validation::query_config())
        .app_data(crate::validation::path_config())
        .configure(crate::api::configure_public_routes)
        .service(
            web::scope("/api")
                .wrap(crate::middleware::auth::Authentication)
                .configure(crate::api::configure_routes),
        )
}

/// Parse a response body as JSON.
pub(crate) async fn body_json<B: MessageBody>(res: ServiceResponse<B>) -> serde_json::Value {
    let bytes = actix_web::test::read_body(res).await;
    serde_json::from_slice(&bytes).unwrap()
}
