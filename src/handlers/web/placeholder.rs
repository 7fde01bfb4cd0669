//! Demo content shown when a listing comes back empty.
//!
//! This is display-only substitution for the landing page. None of it is
//! written to storage or returned by the JSON API.

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};

use crate::models::{AgendaItem, AgendaType, Partner, PartnerTier, Speaker};

struct SpeakerSeed {
    name: &'static str,
    position: &'static str,
    company: &'static str,
    avatar_url: &'static str,
    bio: &'static str,
    speech_topic: &'static str,
    social_links: &'static str,
}

const SPEAKERS: [SpeakerSeed; 3] = [
    SpeakerSeed {
        name: "Zhang San",
        position: "Chief Technology Officer",
        company: "TechCorp",
        avatar_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e\
            ?w=300&h=300&fit=crop&crop=face",
        bio: "Ten years of front-end engineering, focused on the React ecosystem and performance.",
        speech_topic: "React 19: new features and what comes next",
        social_links: r#"{"twitter": "@zhangsan", "github": "@zhangsan"}"#,
    },
    SpeakerSeed {
        name: "Sarah Johnson",
        position: "Senior Frontend Architect",
        company: "Google",
        avatar_url: "https://images.unsplash.com/photo-1494790108755-2616b2e26b3a\
            ?w=300&h=300&fit=crop&crop=face",
        bio: "Leading Chrome DevTools team, passionate about developer experience",
        speech_topic: "The Future of Web Development Tools",
        social_links: r#"{"twitter": "@sarahj", "linkedin": "/in/sarahj"}"#,
    },
    SpeakerSeed {
        name: "Li Ming",
        position: "Front-end Architect",
        company: "ByteDance",
        avatar_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d\
            ?w=300&h=300&fit=crop&crop=face",
        bio: "Large-scale front-end engineering and micro-frontend architecture.",
        speech_topic: "Micro-frontends in enterprise applications",
        social_links: r#"{"github": "@liming"}"#,
    },
];

/// A session, in minutes after the conference opens
struct SlotSeed {
    title: &'static str,
    description: &'static str,
    from_min: i64,
    to_min: i64,
    agenda_type: AgendaType,
    speaker_id: Option<i32>,
    location: &'static str,
}

const SLOTS: [SlotSeed; 4] = [
    SlotSeed {
        title: "Opening & Keynote",
        description: "See Conf opens with a look at where front-end technology is heading",
        from_min: 0,
        to_min: 90,
        agenda_type: AgendaType::MainForum,
        speaker_id: Some(1),
        location: "Main Hall",
    },
    SlotSeed {
        title: "Engineering Great Experiences",
        description: "Technical approaches to outstanding user experience",
        from_min: 120,
        to_min: 180,
        agenda_type: AgendaType::DesignForum,
        speaker_id: Some(2),
        location: "Design Hall",
    },
    SlotSeed {
        title: "Front-end Engineering in Practice",
        description: "Tooling and practices for large front-end codebases",
        from_min: 300,
        to_min: 390,
        agenda_type: AgendaType::EngineeringForum,
        speaker_id: Some(3),
        location: "Engineering Hall",
    },
    SlotSeed {
        title: "Hands-on Workshop",
        description: "Working session with the modern front-end toolchain",
        from_min: 420,
        to_min: 540,
        agenda_type: AgendaType::Workshop,
        speaker_id: None,
        location: "Practice Area",
    },
];

// (name, domain, tier, description)
const PARTNERS: [(&str, &str, PartnerTier, &str); 4] = [
    ("Google", "google.com", PartnerTier::Title, "A global technology leader"),
    ("Microsoft", "microsoft.com", PartnerTier::Platinum, "Cloud computing and developer tools"),
    ("Meta", "meta.com", PartnerTier::Gold, "Creators of React"),
    ("Vercel", "vercel.com", PartnerTier::Silver, "A modern web development platform"),
];

/// Ids are 1-based positions in the seed table
fn seed_id(index: usize) -> i32 {
    index as i32 + 1
}

pub fn speakers(now: DateTime<Utc>) -> Vec<Speaker> {
    SPEAKERS
        .iter()
        .enumerate()
        .map(|(i, seed)| Speaker {
            id: seed_id(i),
            name: seed.name.into(),
            position: seed.position.into(),
            company: seed.company.into(),
            avatar_url: seed.avatar_url.into(),
            bio: seed.bio.into(),
            speech_topic: seed.speech_topic.into(),
            social_links: Some(seed.social_links.into()),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

/// Opening-day sessions laid out relative to the conference start
pub fn agenda(conference_start: DateTime<FixedOffset>, now: DateTime<Utc>) -> Vec<AgendaItem> {
    let opening = conference_start.with_timezone(&Utc);

    SLOTS
        .iter()
        .enumerate()
        .map(|(i, seed)| AgendaItem {
            id: seed_id(i),
            title: seed.title.into(),
            description: seed.description.into(),
            start_time: opening + TimeDelta::minutes(seed.from_min),
            end_time: opening + TimeDelta::minutes(seed.to_min),
            agenda_type: seed.agenda_type,
            speaker_id: seed.speaker_id,
            location: seed.location.into(),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

pub fn partners(now: DateTime<Utc>) -> Vec<Partner> {
    PARTNERS
        .iter()
        .enumerate()
        .map(|(i, &(name, domain, tier, description))| Partner {
            id: seed_id(i),
            name: name.into(),
            logo_url: format!("https://logo.clearbit.com/{domain}"),
            website_url: Some(format!("https://{domain}")),
            tier,
            description: Some(description.into()),
            created_at: now,
            updated_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2025-11-22T09:00:00+08:00").unwrap()
    }

    #[test]
    fn test_agenda_is_chronological_and_well_formed() {
        let items = agenda(start(), Utc::now());
        assert_eq!(items.len(), 4);
        assert!(items.windows(2).all(|w| w[0].start_time <= w[1].start_time));
        assert!(items.iter().all(|i| i.start_time < i.end_time));
        assert_eq!(items[0].start_time, start().with_timezone(&Utc));
    }

    #[test]
    fn test_agenda_speakers_exist_in_placeholder_speakers() {
        let now = Utc::now();
        let ids: Vec<i32> = speakers(now).iter().map(|s| s.id).collect();
        for item in agenda(start(), now) {
            if let Some(id) = item.speaker_id {
                assert!(ids.contains(&id));
            }
        }
    }

    #[test]
    fn test_partners_in_display_order() {
        let list = partners(Utc::now());
        assert!(list.windows(2).all(|w| w[0].display_key() <= w[1].display_key()));
    }
}
