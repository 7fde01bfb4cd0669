use axum::{extract::State, http::StatusCode, Json};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::{CreateSpeaker, Speaker};

/// All speakers in storage order
pub async fn fetch_speakers(pool: &PgPool) -> Result<Vec<Speaker>, ApiError> {
    let speakers = sqlx::query_as::<_, Speaker>(
        r#"
        SELECT
            id, name, position, company, avatar_url,
            bio, speech_topic, social_links,
            created_at, updated_at
        FROM speakers
        ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(speakers)
}

#[utoipa::path(
    get,
    path = "/speakers",
    tag = "speakers",
    responses(
        (status = 200, description = "List all speakers", body = Vec<Speaker>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_speakers(State(pool): State<PgPool>) -> Result<Json<Vec<Speaker>>, ApiError> {
    Ok(Json(fetch_speakers(&pool).await?))
}

#[utoipa::path(
    post,
    path = "/speakers",
    tag = "speakers",
    request_body = CreateSpeaker,
    responses(
        (status = 201, description = "Speaker created", body = Speaker),
        (status = 400, description = "Invalid speaker payload"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_speaker(
    State(pool): State<PgPool>,
    Json(new_speaker): Json<CreateSpeaker>,
) -> Result<(StatusCode, Json<Speaker>), ApiError> {
    new_speaker.validate()?;

    let speaker = sqlx::query_as::<_, Speaker>(
        r#"
        INSERT INTO speakers (
            name, position, company, avatar_url,
            bio, speech_topic, social_links
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        RETURNING
            id, name, position, company, avatar_url,
            bio, speech_topic, social_links,
            created_at, updated_at
        "#,
    )
    .bind(&new_speaker.name)
    .bind(&new_speaker.position)
    .bind(&new_speaker.company)
    .bind(&new_speaker.avatar_url)
    .bind(&new_speaker.bio)
    .bind(&new_speaker.speech_topic)
    .bind(&new_speaker.social_links)
    .fetch_one(&pool)
    .await?;

    tracing::info!(speaker_id = speaker.id, "Created speaker");
    Ok((StatusCode::CREATED, Json(speaker)))
}
