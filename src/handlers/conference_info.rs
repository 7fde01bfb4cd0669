use axum::{
    extract::{Query, State},
    Json,
};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::{ConferenceInfo, ConferenceInfoQuery, UpdateConferenceInfo};

#[utoipa::path(
    get,
    path = "/conference-info",
    tag = "conference-info",
    params(ConferenceInfoQuery),
    responses(
        (status = 200, description = "All entries, or those matching key", body = Vec<ConferenceInfo>),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn get_conference_info(
    State(pool): State<PgPool>,
    Query(filter): Query<ConferenceInfoQuery>,
) -> Result<Json<Vec<ConferenceInfo>>, ApiError> {
    let entries = match filter.key.as_deref().filter(|k| !k.is_empty()) {
        Some(key) => {
            sqlx::query_as::<_, ConferenceInfo>(
                r#"
                SELECT id, key, title, content, metadata, created_at, updated_at
                FROM conference_info
                WHERE key = $1
                "#,
            )
            .bind(key)
            .fetch_all(&pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, ConferenceInfo>(
                r#"
                SELECT id, key, title, content, metadata, created_at, updated_at
                FROM conference_info
                ORDER BY id
                "#,
            )
            .fetch_all(&pool)
            .await?
        }
    };

    Ok(Json(entries))
}

#[utoipa::path(
    put,
    path = "/conference-info",
    tag = "conference-info",
    request_body = UpdateConferenceInfo,
    responses(
        (status = 200, description = "Entry created or updated", body = ConferenceInfo),
        (status = 400, description = "New entry without title and content"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn update_conference_info(
    State(pool): State<PgPool>,
    Json(update): Json<UpdateConferenceInfo>,
) -> Result<Json<ConferenceInfo>, ApiError> {
    update.validate()?;

    let existing = sqlx::query_as::<_, ConferenceInfo>(
        r#"
        SELECT id, key, title, content, metadata, created_at, updated_at
        FROM conference_info
        WHERE key = $1
        "#,
    )
    .bind(&update.key)
    .fetch_optional(&pool)
    .await?;

    let entry = match existing {
        Some(existing) => {
            let id = existing.id;
            let patch = update.merge_onto(existing);

            // updated_at moves forward even when the clock has not
            sqlx::query_as::<_, ConferenceInfo>(
                r#"
                UPDATE conference_info
                SET
                    title = $1,
                    content = $2,
                    metadata = $3,
                    updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
                WHERE id = $4
                RETURNING id, key, title, content, metadata, created_at, updated_at
                "#,
            )
            .bind(&patch.title)
            .bind(&patch.content)
            .bind(&patch.metadata)
            .bind(id)
            .fetch_one(&pool)
            .await?
        }
        None => {
            let new = update.as_new()?;

            // A concurrent creator of the same key loses to this full write
            sqlx::query_as::<_, ConferenceInfo>(
                r#"
                INSERT INTO conference_info (key, title, content, metadata)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (key) DO UPDATE
                SET
                    title = EXCLUDED.title,
                    content = EXCLUDED.content,
                    metadata = EXCLUDED.metadata,
                    updated_at = GREATEST(
                        NOW(),
                        conference_info.updated_at + INTERVAL '1 microsecond'
                    )
                RETURNING id, key, title, content, metadata, created_at, updated_at
                "#,
            )
            .bind(new.key)
            .bind(new.title)
            .bind(new.content)
            .bind(new.metadata)
            .fetch_one(&pool)
            .await?
        }
    };

    tracing::info!(key = %entry.key, "Upserted conference info");
    Ok(Json(entry))
}
