use super::{Hero, LeadForm};
use crate::block::ContentBlock;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Seo {
    pub meta_title: String,
    pub meta_description: String,
    pub keywords: Vec<String>,
}

/// Long-form themed landing page built from experience blocks.
///
/// `primary_route` is a weak reference: the slug of a [`super::Route`] that
/// is fetched on its own when the template needs it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub hero: Hero,
    pub sections: Vec<ContentBlock>,
    pub primary_route: String,
    pub alternative_routes: Vec<String>,
    pub lead_form: LeadForm,
    pub seo: Seo,
}
