//! The wedding configuration document and the values derived from it.
//!
//! The configuration is read once at startup (either [`WeddingConfig::default`]
//! or an operator-supplied JSON file via [`WeddingConfig::from_json`]) and is
//! never mutated afterwards.

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Ceremony start of the built-in configuration (Antipolo, UTC+8).
const BUILTIN_STARTS_AT: &str = "2026-02-26T10:00:00+08:00";

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeddingConfig {
    pub couple: Couple,
    pub date: WeddingDate,
    pub venue: Venues,
    pub details: EventDetails,
    pub schedule: Vec<ScheduleItem>,
    pub love_story: Vec<StoryMilestone>,
    pub gallery: Vec<GalleryImage>,
    #[serde(default)]
    pub social: Social,
    #[serde(default)]
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Couple {
    pub partner1: Partner,
    pub partner2: Partner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeddingDate {
    /// Ceremony start, with the venue's UTC offset.
    pub starts_at: DateTime<FixedOffset>,
    pub display_date: String,
    pub display_time: String,
    pub day_of_week: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venues {
    pub ceremony: Venue,
    pub reception: Venue,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub google_maps_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDetails {
    pub dress_code: String,
    pub colors: String,
    pub ceremony: String,
    pub cocktail_hour: String,
    pub reception: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub time: String,
    pub activity: String,
}

/// One entry of the love story timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoryMilestone {
    pub date: String,
    pub title: String,
    pub description: String,
    /// Icon key understood by the front end (`heart`, `ring`, ...).
    pub icon: String,
}

/// A gallery asset served from `/gallery`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtag: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Footer {
    /// Left empty to derive from the couple's first names.
    #[serde(default)]
    pub initials: String,
    pub message: String,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            initials: String::new(),
            message: "Made with love".into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

/// Display strings computed from the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedDetails {
    pub couple_names: String,
    pub initials: String,
    pub venue_location: String,
    pub page_title: String,
    pub page_description: String,
}

impl WeddingConfig {
    /// Parse an operator-supplied configuration document.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let config: Self =
            serde_json::from_str(raw).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), CoreError> {
        for (label, partner) in [
            ("partner1", &self.couple.partner1),
            ("partner2", &self.couple.partner2),
        ] {
            if partner.first_name.trim().is_empty() {
                return Err(CoreError::Config(format!(
                    "couple.{label}.first_name must not be empty"
                )));
            }
        }
        Ok(())
    }

    /// Ceremony start in UTC.
    pub fn starts_at_utc(&self) -> DateTime<Utc> {
        self.date.starts_at.with_timezone(&Utc)
    }

    /// `"Shiela & Erwin"`.
    pub fn couple_names(&self) -> String {
        format!(
            "{} & {}",
            self.couple.partner1.first_name, self.couple.partner2.first_name
        )
    }

    /// Footer initials, derived from first names when not configured.
    pub fn initials(&self) -> String {
        if !self.footer.initials.trim().is_empty() {
            return self.footer.initials.clone();
        }
        let first = |p: &Partner| p.first_name.chars().next().unwrap_or_default();
        format!(
            "{}&{}",
            first(&self.couple.partner1),
            first(&self.couple.partner2)
        )
    }

    /// `"Antipolo, Rizal"`.
    pub fn venue_location(&self) -> String {
        let ceremony = &self.venue.ceremony;
        format!("{}, {}", ceremony.city, ceremony.state)
    }

    pub fn derived(&self) -> DerivedDetails {
        let couple_names = self.couple_names();
        let venue_location = self.venue_location();
        DerivedDetails {
            page_title: format!("{couple_names} | Wedding"),
            page_description: format!(
                "Join us as we celebrate our love. {} in {venue_location}.",
                self.date.display_date
            ),
            initials: self.initials(),
            couple_names,
            venue_location,
        }
    }
}

// ---------------------------------------------------------------------------
// Built-in configuration
// ---------------------------------------------------------------------------

impl Default for WeddingConfig {
    fn default() -> Self {
        let starts_at = DateTime::parse_from_rfc3339(BUILTIN_STARTS_AT)
            .expect("built-in ceremony start is valid RFC 3339");

        Self {
            couple: Couple {
                partner1: partner("Shiela", "Teves"),
                partner2: partner("Erwin", "Flores"),
            },
            date: WeddingDate {
                starts_at,
                display_date: "February 26, 2026".into(),
                display_time: "09:30 AM".into(),
                day_of_week: "Wednesday".into(),
            },
            venue: Venues {
                ceremony: Venue {
                    name: "Immaculate Heart of Mary Parish Church".into(),
                    address: "Daang Bakal Rd".into(),
                    city: "Antipolo".into(),
                    state: "Rizal".into(),
                    zip: "1870".into(),
                    description: Some(
                        "Join us at the historic Immaculate Heart of Mary Parish Church \
                         for our wedding ceremony."
                            .into(),
                    ),
                    google_maps_url: "https://www.google.com/maps/search/?api=1&query=\
                         Immaculate+Heart+of+Mary+Parish+Church+Antipolo+Rizal"
                        .into(),
                    coordinates: Some(Coordinates {
                        lat: 14.5914,
                        lng: 121.1583,
                    }),
                },
                reception: Venue {
                    name: "Wood Lane Forest Events Place and Resort".into(),
                    address: "Brgy, Inarawan Marcos Highway".into(),
                    city: "Antipolo".into(),
                    state: "Rizal".into(),
                    zip: "1870".into(),
                    description: None,
                    google_maps_url: "https://www.google.com/maps/search/?api=1&query=\
                         Wood+Lane+Forest+Events+Place+and+Resort+Antipolo+Rizal"
                        .into(),
                    coordinates: None,
                },
            },
            details: EventDetails {
                dress_code: "Semi-Formal / Garden Attire".into(),
                colors: "Sage green, blush, and champagne".into(),
                ceremony: "Catholic ceremony at the historic parish church".into(),
                cocktail_hour: "4:00 PM - 5:00 PM at Wood Lane Forest Events Place and Resort"
                    .into(),
                reception: "5:00 PM - 10:00 PM at Wood Lane Forest Events Place and Resort"
                    .into(),
            },
            schedule: vec![
                schedule_item("10:00 AM", "Ceremony"),
                schedule_item("4:00 PM", "Cocktail Hour"),
                schedule_item("5:00 PM", "Reception"),
            ],
            love_story: vec![
                milestone(
                    "September 2018",
                    "First Met",
                    "We met at a mutual friend's birthday party. Little did we know that \
                     night would change our lives forever.",
                    "heart",
                ),
                milestone(
                    "December 2018",
                    "First Date",
                    "Our first official date was at a cozy Italian restaurant downtown. \
                     We talked for hours and didn't want the night to end.",
                    "coffee",
                ),
                milestone(
                    "June 2019",
                    "Said 'I Love You'",
                    "During a sunset picnic at the beach, we finally said those three \
                     magical words to each other.",
                    "sparkles",
                ),
                milestone(
                    "March 2020",
                    "Moved In Together",
                    "We took the leap and moved into our first apartment together. \
                     Every day felt like an adventure.",
                    "home",
                ),
                milestone(
                    "August 2024",
                    "The Proposal",
                    "Under the stars at the same beach where we first said 'I love you,' \
                     he got down on one knee.",
                    "ring",
                ),
                milestone(
                    "June 2025",
                    "Forever Begins",
                    "We can't wait to celebrate our love with all of you and begin this \
                     beautiful new chapter.",
                    "calendar",
                ),
            ],
            gallery: [
                (800, 1200),
                (1200, 800),
                (800, 800),
                (1200, 800),
                (800, 1200),
                (800, 800),
                (1200, 800),
                (800, 1200),
            ]
            .into_iter()
            .enumerate()
            .map(|(i, (width, height))| GalleryImage {
                src: format!("/gallery/photo{}.jpg", i + 1),
                alt: format!("Couple photo {}", i + 1),
                width,
                height,
            })
            .collect(),
            social: Social {
                instagram: Some("https://instagram.com/shielaanderwin".into()),
                hashtag: Some("#ShielaAnnAndErwinForever".into()),
            },
            footer: Footer::default(),
        }
    }
}

fn partner(first_name: &str, last_name: &str) -> Partner {
    Partner {
        first_name: first_name.into(),
        last_name: last_name.into(),
    }
}

fn schedule_item(time: &str, activity: &str) -> ScheduleItem {
    ScheduleItem {
        time: time.into(),
        activity: activity.into(),
    }
}

fn milestone(date: &str, title: &str, description: &str, icon: &str) -> StoryMilestone {
    StoryMilestone {
        date: date.into(),
        title: title.into(),
        description: description.into(),
        icon: icon.into(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
