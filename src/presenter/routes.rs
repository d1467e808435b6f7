//! HTTP handlers for the dashboard and its JSON API.

use axum::{
    Form, Json,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use super::SharedState;
use super::pages;

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
}

pub async fn home(State(state): State<SharedState>) -> Html<String> {
    let mut session = state.session.write().await;
    let Some(user) = session.user().map(str::to_string) else {
        return Html(pages::login_page(None));
    };

    session.record("view_dashboard");
    Html(pages::dashboard_page(&user, &state.zones))
}

pub async fn login(State(state): State<SharedState>, Form(form): Form<LoginForm>) -> Response {
    let mut session = state.session.write().await;
    if !session.login(&form.username) {
        return (
            StatusCode::BAD_REQUEST,
            Html(pages::login_page(Some("Please enter a name to continue."))),
        )
            .into_response();
    }

    info!(user = %form.username.trim(), "Dashboard opened");
    Redirect::to("/").into_response()
}

pub async fn logout(State(state): State<SharedState>) -> Redirect {
    state.session.write().await.logout();
    Redirect::to("/")
}

pub async fn zones(State(state): State<SharedState>) -> Response {
    state.session.write().await.record("view_zones");
    Json(&state.zones).into_response()
}

pub async fn zone_detail(State(state): State<SharedState>, Path(zone): Path<String>) -> Response {
    match state.zones.iter().find(|z| z.summary.zone == zone) {
        Some(view) => {
            state
                .session
                .write()
                .await
                .record(format!("view_zone:{zone}"));
            Json(view).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": format!("unknown zone '{zone}'") })),
        )
            .into_response(),
    }
}

pub async fn activity(State(state): State<SharedState>) -> Response {
    let session = state.session.read().await;
    Json(session.activity()).into_response()
}
