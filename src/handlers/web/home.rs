use askama::Template;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use chrono::{FixedOffset, Utc};

use crate::error::ApiError;
use crate::handlers::{fetch_agenda, fetch_partners, fetch_speakers};
use crate::models::{
    AgendaQuery, Countdown, PartnerQuery, PartnerTier, Speaker, TShirtSize, TicketType,
};
use crate::state::AppState;
use crate::utils::compute_countdown;

use super::placeholder;

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    countdown: Countdown,
    conference_start: String,
    speakers: Vec<SpeakerCard>,
    agenda: Vec<AgendaRow>,
    partner_tiers: Vec<PartnerTierSection>,
    showing_placeholders: bool,
    ticket_options: Vec<FormOption>,
    shirt_sizes: Vec<FormOption>,
}

/// `<option>` entry for the registration form
struct FormOption {
    value: &'static str,
    label: &'static str,
}

struct SpeakerCard {
    name: String,
    position: String,
    company: String,
    avatar_url: String,
    bio: String,
    speech_topic: String,
}

struct AgendaRow {
    day: String,
    time_range: String,
    title: String,
    description: String,
    track: String,
    location: String,
    speaker_name: String,
}

struct PartnerTierSection {
    label: String,
    partners: Vec<PartnerCard>,
}

struct PartnerCard {
    name: String,
    logo_url: String,
    website_url: String,
    description: String,
}

/// Keep a non-empty listing; otherwise substitute the placeholder content.
///
/// Returns whether the placeholder was used. A failed read is logged and
/// treated like an empty one.
fn or_placeholder<T>(
    section: &str,
    loaded: Result<Vec<T>, ApiError>,
    placeholder: impl FnOnce() -> Vec<T>,
) -> (Vec<T>, bool) {
    match loaded {
        Ok(rows) if !rows.is_empty() => (rows, false),
        Ok(_) => (placeholder(), true),
        Err(e) => {
            tracing::warn!("Failed to load {section}, showing placeholder content: {e}");
            (placeholder(), true)
        }
    }
}

fn speaker_name(speakers: &[Speaker], id: Option<i32>) -> String {
    id.and_then(|id| speakers.iter().find(|s| s.id == id))
        .map(|s| s.name.clone())
        .unwrap_or_default()
}

pub async fn home(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let now = Utc::now();
    let offset: FixedOffset = *state.conference_start.offset();

    let (speakers, speakers_placeholder) = or_placeholder(
        "speakers",
        fetch_speakers(&state.pool).await,
        || placeholder::speakers(now),
    );
    let (agenda, agenda_placeholder) = or_placeholder(
        "agenda",
        fetch_agenda(&state.pool, &AgendaQuery::default(), offset).await,
        || placeholder::agenda(state.conference_start, now),
    );
    let (partners, partners_placeholder) = or_placeholder(
        "partners",
        fetch_partners(&state.pool, &PartnerQuery::default()).await,
        || placeholder::partners(now),
    );

    let agenda: Vec<AgendaRow> = agenda
        .iter()
        .map(|item| {
            let start = item.start_time.with_timezone(&offset);
            let end = item.end_time.with_timezone(&offset);
            AgendaRow {
                day: start.format("%Y-%m-%d").to_string(),
                time_range: format!("{} - {}", start.format("%H:%M"), end.format("%H:%M")),
                title: item.title.clone(),
                description: item.description.clone(),
                track: item.agenda_type.label().to_string(),
                location: item.location.clone(),
                speaker_name: speaker_name(&speakers, item.speaker_id),
            }
        })
        .collect();

    // Listing order is already tier-then-name, so grouping keeps it
    let partner_tiers: Vec<PartnerTierSection> = PartnerTier::ALL
        .iter()
        .map(|tier| PartnerTierSection {
            label: tier.label().to_string(),
            partners: partners
                .iter()
                .filter(|p| p.tier == *tier)
                .map(|p| PartnerCard {
                    name: p.name.clone(),
                    logo_url: p.logo_url.clone(),
                    website_url: p.website_url.clone().unwrap_or_default(),
                    description: p.description.clone().unwrap_or_default(),
                })
                .collect(),
        })
        .filter(|section| !section.partners.is_empty())
        .collect();

    let speakers: Vec<SpeakerCard> = speakers
        .into_iter()
        .map(|s| SpeakerCard {
            name: s.name,
            position: s.position,
            company: s.company,
            avatar_url: s.avatar_url,
            bio: s.bio,
            speech_topic: s.speech_topic,
        })
        .collect();

    let template = HomeTemplate {
        countdown: compute_countdown(now, state.conference_start.with_timezone(&Utc)),
        conference_start: state.conference_start.format("%Y-%m-%d %H:%M (UTC%:z)").to_string(),
        speakers,
        agenda,
        partner_tiers,
        showing_placeholders: speakers_placeholder || agenda_placeholder || partners_placeholder,
        ticket_options: TicketType::SELF_SERVICE
            .iter()
            .map(|t| FormOption { value: t.as_str(), label: t.label() })
            .collect(),
        shirt_sizes: TShirtSize::ALL
            .iter()
            .map(|s| FormOption { value: s.as_str(), label: s.as_str() })
            .collect(),
    };

    match template.render() {
        Ok(html) => Ok(Html(html).into_response()),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
