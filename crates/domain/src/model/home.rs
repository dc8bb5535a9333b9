use super::{CtaButton, CtaSection, LeadForm};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomePage {
    pub slug: String,
    pub title: String,
    pub hero: HomeHero,
    pub why_section: WhySection,
    pub dive_sites: DiveSites,
    pub program_section: ProgramSection,
    pub spec_section: SpecSection,
    pub lead_form: LeadForm,
    pub cta_section: CtaSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroBadge {
    pub text: String,
    pub background_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroCta {
    pub text: String,
    pub variant: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomeHero {
    pub background_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<HeroBadge>,
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_cta: Option<CtaButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<CtaButton>,
    pub ctas: Vec<HeroCta>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_line: Option<String>,
}

/// Loosely shaped promo card. The homepage mixes several card designs in one
/// row; `variant` tells the template which one, unused fields stay empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Card {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sublabel: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WhySection {
    pub title: String,
    pub subtitle: String,
    pub top_row: Vec<Card>,
    pub bottom_row: Vec<Card>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiveSite {
    pub name: String,
    pub image: String,
    pub depth: String,
    pub highlight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiveSites {
    pub title: String,
    pub subtitle: String,
    pub sites: Vec<DiveSite>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceTag {
    pub amount: String,
    pub badge: String,
    pub per_person: String,
    pub highlight: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProgramSection {
    pub title: String,
    pub subtitle: String,
    pub includes: Vec<String>,
    pub price: PriceTag,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecCta {
    pub price: String,
    pub details: String,
    pub button_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpecSection {
    pub section_label: String,
    pub big_card: Card,
    pub specialty_cards: Vec<Card>,
    pub main_title: String,
    pub nav_cards: Vec<Card>,
    pub cta: SpecCta,
}
