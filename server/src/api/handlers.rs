use axum::Json;
use axum::extract::{Path, State};
use axum::response::Html;
use serde::Serialize;

use super::errors::ApiError;
use super::server::AppState;
use crate::badge::{COMPONENT_DESCRIPTION, COMPONENT_NAME};
use crate::metrics_exporter::render_metrics;
use crate::person::{PersonRecord, db::fetch_person_by_id};

#[derive(Debug, Serialize)]
pub struct BadgeSummary {
    pub id: i64,
    pub name: String,
    pub component: &'static str,
    pub description: &'static str,
}

pub async fn list_badges(State(state): State<AppState>) -> Json<Vec<BadgeSummary>> {
    let badges = state
        .registry
        .iter()
        .map(|badge| BadgeSummary {
            id: badge.renderer.badge_id(),
            name: badge.name.clone(),
            component: COMPONENT_NAME,
            description: COMPONENT_DESCRIPTION,
        })
        .collect();
    Json(badges)
}

/// Every configured badge for one person, as the profile page would show them.
pub async fn render_profile_badges(
    State(state): State<AppState>,
    Path(person_id): Path<i64>,
) -> Result<Html<String>, ApiError> {
    let person = load_person(&state, person_id).await?;

    let mut html = String::new();
    for badge in state.registry.iter() {
        if let Some(fragment) = badge.renderer.render(&state.pool, &person).await? {
            html.push_str(&fragment.to_html());
        }
    }

    Ok(Html(html))
}

pub async fn render_profile_badge(
    State(state): State<AppState>,
    Path((person_id, badge_id)): Path<(i64, i64)>,
) -> Result<Html<String>, ApiError> {
    let badge = state
        .registry
        .get(badge_id)
        .ok_or_else(|| ApiError::not_found(format!("badge {badge_id} not found")))?;
    let person = load_person(&state, person_id).await?;

    let html = badge
        .renderer
        .render(&state.pool, &person)
        .await?
        .map(|fragment| fragment.to_html())
        .unwrap_or_default();

    Ok(Html(html))
}

pub async fn metrics() -> String {
    render_metrics()
}

async fn load_person(state: &AppState, person_id: i64) -> Result<PersonRecord, ApiError> {
    fetch_person_by_id(&state.pool, person_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("person {person_id} not found")))
}
