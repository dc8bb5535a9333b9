use super::{CtaButton, Hero, InfoCard, TitledList};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoryIntro {
    pub badge: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItineraryDay {
    pub day: u32,
    pub title: String,
    pub description: String,
    pub dives: Vec<String>,
    pub highlights: Vec<String>,
    pub image: String,
    pub overlay_direction: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Itinerary {
    pub title: String,
    pub days: Vec<ItineraryDay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RouteCta {
    pub title: String,
    pub description: String,
    pub background_image: String,
    pub primary_cta: CtaButton,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<CtaButton>,
}

/// A multi-day liveaboard itinerary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Route {
    pub slug: String,
    pub title: String,
    pub hero: Hero,
    pub story_intro: StoryIntro,
    pub info_cards: Vec<InfoCard>,
    pub itinerary: Itinerary,
    pub includes: TitledList,
    pub cta: RouteCta,
}
