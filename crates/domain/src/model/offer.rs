use super::{CtaSection, Hero};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Urgency {
    /// Local timestamp the countdown runs to, as authored in the CMS.
    pub countdown_to: String,
    pub seats_available: u32,
    pub viewers: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Price {
    pub original: f64,
    pub discount: f64,
    pub current: f64,
    pub currency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub name: String,
    pub text: String,
    pub avatar: String,
    pub rating: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Offer {
    pub slug: String,
    pub title: String,
    pub badge: String,
    pub hero: Hero,
    pub urgency: Urgency,
    pub price: Price,
    pub benefits: Vec<String>,
    pub testimonials: Vec<Testimonial>,
    pub cta: CtaSection,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_route: Option<String>,
}
