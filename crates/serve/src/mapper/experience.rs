use super::{home::lead_form, map_blocks, stream_hero, Fields};
use crate::source::RawPage;
use domain::model::{experience::Seo, Experience, FormField};

/// Form used when the page does not define its own fields.
fn default_lead_fields() -> Vec<FormField> {
    vec![
        FormField::new("name", "text", "Tu nombre completo", true),
        FormField::new("email", "email", "Tu email", true),
        FormField::new("phone", "tel", "Tu teléfono (opcional)", false),
    ]
}

pub fn map_experience_page(page: &RawPage) -> Experience {
    let f = Fields::of(page);

    Experience {
        slug: page.slug().to_owned(),
        title: page.title.clone(),
        description: f.str("description"),
        hero: stream_hero(page),
        sections: map_blocks(f.list("sections")),
        primary_route: f.page_slug("primary_route").unwrap_or_default(),
        alternative_routes: f
            .list("alternative_routes")
            .iter()
            .filter_map(|r| Fields::from_value(Some(r)).page_slug("page"))
            .collect(),
        lead_form: lead_form(&f, default_lead_fields()),
        seo: Seo {
            meta_title: f.str("seo_meta_title"),
            meta_description: f.str("seo_meta_description"),
            keywords: split_keywords(&f.str("seo_keywords")),
        },
    }
}

fn split_keywords(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_owned)
        .collect()
}
