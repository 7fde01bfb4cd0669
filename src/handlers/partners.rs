use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::{CreatePartner, Partner, PartnerQuery};

/// Partners by tier rank (title first), then by name within a tier.
///
/// Names compare byte-wise so the order does not depend on the database
/// collation.
pub async fn fetch_partners(
    pool: &PgPool,
    filter: &PartnerQuery,
) -> Result<Vec<Partner>, ApiError> {
    let partners = if let Some(tier) = filter.tier {
        sqlx::query_as::<_, Partner>(
            r#"
            SELECT
                id, name, logo_url, website_url, tier, description,
                created_at, updated_at
            FROM partners
            WHERE tier = $1
            ORDER BY name COLLATE "C", id
            "#,
        )
        .bind(tier)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query_as::<_, Partner>(
            r#"
            SELECT
                id, name, logo_url, website_url, tier, description,
                created_at, updated_at
            FROM partners
            ORDER BY
                CASE tier
                    WHEN 'title' THEN 1
                    WHEN 'platinum' THEN 2
                    WHEN 'gold' THEN 3
                    WHEN 'silver' THEN 4
                    WHEN 'community' THEN 5
                    ELSE 6
                END,
                name COLLATE "C",
                id
            "#,
        )
        .fetch_all(pool)
        .await?
    };

    Ok(partners)
}

#[utoipa::path(
    get,
    path = "/partners",
    tag = "partners",
    params(PartnerQuery),
    responses(
        (status = 200, description = "Partners ordered by tier, then name", body = Vec<Partner>),
        (status = 400, description = "Unknown tier"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn list_partners(
    State(pool): State<PgPool>,
    Query(filter): Query<PartnerQuery>,
) -> Result<Json<Vec<Partner>>, ApiError> {
    Ok(Json(fetch_partners(&pool, &filter).await?))
}

#[utoipa::path(
    post,
    path = "/partners",
    tag = "partners",
    request_body = CreatePartner,
    responses(
        (status = 201, description = "Partner created", body = Partner),
        (status = 400, description = "Invalid partner payload"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn create_partner(
    State(pool): State<PgPool>,
    Json(new_partner): Json<CreatePartner>,
) -> Result<(StatusCode, Json<Partner>), ApiError> {
    new_partner.validate()?;

    let partner = sqlx::query_as::<_, Partner>(
        r#"
        INSERT INTO partners (name, logo_url, website_url, tier, description)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING
            id, name, logo_url, website_url, tier, description,
            created_at, updated_at
        "#,
    )
    .bind(&new_partner.name)
    .bind(&new_partner.logo_url)
    .bind(&new_partner.website_url)
    .bind(new_partner.tier)
    .bind(&new_partner.description)
    .fetch_one(&pool)
    .await?;

    tracing::info!(partner_id = partner.id, tier = ?partner.tier, "Created partner");
    Ok((StatusCode::CREATED, Json(partner)))
}
