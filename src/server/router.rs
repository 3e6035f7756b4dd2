use axum::Router;
use tower_http::trace::TraceLayer;
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{activity, exp_history, level, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    modifiers(&InternalKeyAddon),
    tags(
        (name = "level", description = "Level table and badge configuration"),
        (name = "user", description = "User EXP, level and leaderboard"),
        (name = "exp_history", description = "EXP award history"),
        (name = "activity", description = "EXP-granting activities")
    )
)]
struct ApiDoc;

/// Registers the shared-key scheme used by internal endpoints.
struct InternalKeyAddon;

impl Modify for InternalKeyAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "internal_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
        );
    }
}

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(level::get_levels))
        .routes(routes!(level::get_level))
        .routes(routes!(level::create_level))
        .routes(routes!(level::update_level, level::delete_level))
        .routes(routes!(user::get_user_level))
        .routes(routes!(user::get_leaderboard))
        .routes(routes!(exp_history::get_exp_history))
        .routes(routes!(exp_history::get_activity_types))
        .routes(routes!(activity::get_activities))
        .routes(routes!(activity::record_activity))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
        .layer(TraceLayer::new_for_http())
}
