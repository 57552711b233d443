use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto, UnexpectedErrorDto, ValidationErrorDto},
        auth::{AuthResponseDto, LoginDto, RegisterDto},
        difficulty::DifficultyDto,
        region::{AddRegionDto, RegionDto, UpdateRegionDto},
        walk::{AddWalkDto, UpdateWalkDto, WalkDto, WalkV1Dto, WalkV2Dto},
    },
    server::{
        controller::{
            auth::{self as auth_controller},
            difficulty::{self as difficulty_controller},
            health::{self as health_controller},
            region::{self as region_controller},
            walk::{self as walk_controller},
        },
        error::{config::ConfigError, AppError},
        middleware::failure::handle_panic,
        state::AppState,
    },
};

/// Routes for every API endpoint, before state and layers are attached.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_controller::health))
        .route(
            "/api/regions",
            get(region_controller::get_all_regions).post(region_controller::create_region),
        )
        .route(
            "/api/regions/{id}",
            get(region_controller::get_region_by_id)
                .put(region_controller::update_region)
                .delete(region_controller::delete_region),
        )
        .route(
            "/api/walks",
            get(walk_controller::get_all_walks).post(walk_controller::create_walk),
        )
        .route(
            "/api/walks/{id}",
            get(walk_controller::get_walk_by_id)
                .put(walk_controller::update_walk)
                .delete(walk_controller::delete_walk),
        )
        .route("/api/v1/walks", get(walk_controller::get_walks_v1))
        .route("/api/v2/walks", get(walk_controller::get_walks_v2))
        .route(
            "/api/{version}/walks",
            get(walk_controller::unsupported_walks_version),
        )
        .route(
            "/api/difficulties",
            get(difficulty_controller::get_all_difficulties),
        )
        .route("/api/auth/register", post(auth_controller::register))
        .route("/api/auth/login", post(auth_controller::login))
}

/// Builds the complete application: routes, docs, tracing, panic recovery and CORS.
///
/// # Arguments
/// - `state` - Shared application state
/// - `cors_origin` - Allowed browser origin; `None` allows any origin
///
/// # Returns
/// - `Ok(Router)` - Router ready to be served
/// - `Err(AppError::ConfigErr)` - `cors_origin` is not a valid header value
pub fn app(state: AppState, cors_origin: Option<&str>) -> Result<Router, AppError> {
    let cors = match cors_origin {
        Some(origin) => {
            let origin = origin.parse().map_err(|_| ConfigError::InvalidValue {
                name: "CORS_ORIGIN".to_string(),
                reason: format!("'{}' is not a valid origin", origin),
            })?;

            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(origin))
                .allow_methods(Any)
                .allow_headers(Any)
        }
        None => CorsLayer::permissive(),
    };

    let router = router()
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(router)
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Trails API",
        description = "Regions, walks and difficulties of Indian hiking trails"
    ),
    paths(
        health_controller::health,
        region_controller::get_all_regions,
        region_controller::get_region_by_id,
        region_controller::create_region,
        region_controller::update_region,
        region_controller::delete_region,
        walk_controller::get_all_walks,
        walk_controller::get_walk_by_id,
        walk_controller::create_walk,
        walk_controller::update_walk,
        walk_controller::delete_walk,
        walk_controller::get_walks_v1,
        walk_controller::get_walks_v2,
        difficulty_controller::get_all_difficulties,
        auth_controller::register,
        auth_controller::login,
    ),
    components(schemas(
        ErrorDto,
        ValidationErrorDto,
        UnexpectedErrorDto,
        HealthDto,
        RegionDto,
        AddRegionDto,
        UpdateRegionDto,
        WalkDto,
        WalkV1Dto,
        WalkV2Dto,
        AddWalkDto,
        UpdateWalkDto,
        DifficultyDto,
        RegisterDto,
        LoginDto,
        AuthResponseDto,
    )),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "region", description = "Region management"),
        (name = "walk", description = "Walk management and versioned listings"),
        (name = "difficulty", description = "Difficulty lookup"),
        (name = "auth", description = "Registration and login")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};

        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}
