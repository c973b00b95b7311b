use axum::{
    routing::{get, patch, post, put},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, TokenDto},
        football_match::{MatchDto, MatchRequestDto},
        match_result::{GoalDto, GoalRequestDto, MatchResultDto, MatchResultRequestDto, SideDto},
        player::{PlayerDto, PlayerRequestDto, PositionDto},
        team::{TeamDto, TeamRequestDto},
    },
    server::{
        controller::{
            auth::{self, AUTH_TAG},
            football_match::{self, MATCH_TAG},
            match_result::{self, MATCH_RESULT_TAG},
            ping::{self, PING_TAG},
            player::{self, PLAYER_TAG},
            team::{self, TEAM_TAG},
        },
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Football Manager API", description = "Teams, players, matches and results"),
    paths(
        ping::ping,
        auth::login,
        team::create_team,
        team::get_teams,
        team::update_team,
        team::delete_team,
        team::restore_team,
        player::create_player,
        player::get_players,
        player::get_players_by_team,
        player::get_player,
        player::update_player,
        player::delete_player,
        player::restore_player,
        football_match::create_match,
        football_match::get_matches,
        football_match::get_matches_by_team,
        football_match::get_match,
        football_match::update_match,
        football_match::delete_match,
        football_match::restore_match,
        match_result::create_match_result,
        match_result::get_match_results,
        match_result::get_match_result,
        match_result::get_match_result_by_match,
        match_result::update_match_result,
        match_result::delete_match_result,
        match_result::restore_match_result,
    ),
    components(schemas(
        ErrorDto,
        MessageDto,
        LoginDto,
        TokenDto,
        TeamDto,
        TeamRequestDto,
        PlayerDto,
        PlayerRequestDto,
        PositionDto,
        MatchDto,
        MatchRequestDto,
        GoalDto,
        GoalRequestDto,
        SideDto,
        MatchResultDto,
        MatchResultRequestDto,
    )),
    modifiers(&BearerAuth),
    tags(
        (name = PING_TAG, description = "Liveness"),
        (name = AUTH_TAG, description = "Token issuance"),
        (name = TEAM_TAG, description = "Team management"),
        (name = PLAYER_TAG, description = "Player management"),
        (name = MATCH_TAG, description = "Match scheduling"),
        (name = MATCH_RESULT_TAG, description = "Match results and goals"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
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
}

/// Builds the API router with Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/ping", get(ping::ping))
        .route("/api/v1/login", post(auth::login))
        .route("/api/v1/teams", post(team::create_team).get(team::get_teams))
        .route(
            "/api/v1/teams/{name}",
            put(team::update_team).delete(team::delete_team),
        )
        .route("/api/v1/teams/{name}/restore", patch(team::restore_team))
        .route(
            "/api/v1/players",
            post(player::create_player).get(player::get_players),
        )
        .route(
            "/api/v1/players/team/{team}",
            get(player::get_players_by_team),
        )
        .route("/api/v1/player/{name}", get(player::get_player))
        .route(
            "/api/v1/players/{name}",
            put(player::update_player).delete(player::delete_player),
        )
        .route(
            "/api/v1/players/{name}/restore",
            patch(player::restore_player),
        )
        .route(
            "/api/v1/matches",
            post(football_match::create_match).get(football_match::get_matches),
        )
        .route(
            "/api/v1/matches/team/{team}",
            get(football_match::get_matches_by_team),
        )
        .route("/api/v1/match/{id}", get(football_match::get_match))
        .route(
            "/api/v1/matches/{id}",
            put(football_match::update_match).delete(football_match::delete_match),
        )
        .route(
            "/api/v1/matches/{id}/restore",
            patch(football_match::restore_match),
        )
        .route(
            "/api/v1/match-results",
            post(match_result::create_match_result).get(match_result::get_match_results),
        )
        .route(
            "/api/v1/match-results/match/{match_id}",
            get(match_result::get_match_result_by_match),
        )
        .route(
            "/api/v1/match-result/{id}",
            get(match_result::get_match_result),
        )
        .route(
            "/api/v1/match-results/{id}",
            put(match_result::update_match_result).delete(match_result::delete_match_result),
        )
        .route(
            "/api/v1/match-results/{id}/restore",
            patch(match_result::restore_match_result),
        )
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
