//! Internal content model consumed by page templates.
//!
//! Everything here is an immutable value produced by mapping a CMS page (or
//! read from the static fallback set). Types serialise camelCase, which is
//! also the shape of the fallback JSON files.

pub mod blog;
pub mod course;
pub mod experience;
pub mod home;
pub mod offer;
pub mod route;

pub use blog::BlogPost;
pub use course::Course;
pub use experience::Experience;
pub use home::HomePage;
pub use offer::Offer;
pub use route::Route;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaButton {
    pub text: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}

/// Hero block shared by routes, experiences and offers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub background_image: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_cta: Option<CtaButton>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<CtaButton>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub trust_line: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfoCard {
    pub icon: String,
    pub value: String,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormField {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: String,
    pub placeholder: String,
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
}

impl FormField {
    pub fn new(name: &str, input_type: &str, placeholder: &str, required: bool) -> Self {
        Self {
            name: name.to_owned(),
            input_type: input_type.to_owned(),
            placeholder: placeholder.to_owned(),
            required,
            options: Vec::new(),
        }
    }
}

/// Lead-capture form rendered in a modal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeadForm {
    pub title: String,
    pub subtitle: String,
    pub fields: Vec<FormField>,
    pub submit_button: String,
    pub privacy_text: String,
    pub success_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaSection {
    pub title: String,
    pub description: String,
    pub primary_cta: CtaButton,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_cta: Option<CtaButton>,
}

/// A titled list of plain strings ("what's included", requirements, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TitledList {
    pub title: String,
    pub items: Vec<String>,
}
