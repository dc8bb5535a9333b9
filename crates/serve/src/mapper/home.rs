use super::Fields;
use crate::source::RawPage;
use domain::model::{
    home::{
        Card, DiveSite, DiveSites, HeroBadge, HeroCta, HomeHero, PriceTag, ProgramSection,
        SpecCta, SpecSection, WhySection,
    },
    CtaSection, FormField, HomePage, LeadForm, SelectOption,
};

pub fn map_home_page(page: &RawPage) -> HomePage {
    let f = Fields::of(page);

    let primary_cta = f.flat_cta("hero_primary_cta_text", "hero_primary_cta_link");
    let secondary_cta = f.flat_cta("hero_secondary_cta_text", "hero_secondary_cta_link");
    let ctas = primary_cta
        .iter()
        .map(|c| HeroCta {
            text: c.text.clone(),
            variant: "primary".into(),
        })
        .chain(secondary_cta.iter().map(|c| HeroCta {
            text: c.text.clone(),
            variant: "outline".into(),
        }))
        .collect();

    let badge = f.obj("hero_badge");
    let why_cards: Vec<Card> = f.items("why_section_cards").iter().map(card).collect();
    let (top_row, bottom_row) = split_rows(why_cards);

    HomePage {
        slug: page.slug().to_owned(),
        title: page.title.clone(),
        hero: HomeHero {
            background_image: f.image("hero_background_image"),
            badge: badge.opt_str("text").map(|text| HeroBadge {
                text,
                background_color: badge.str("background_color"),
            }),
            title: f.str("hero_title"),
            subtitle: f.str("hero_subtitle"),
            primary_cta,
            secondary_cta,
            ctas,
            trust_line: f.opt_str("hero_trust_line"),
        },
        why_section: WhySection {
            title: f.str("why_section_title"),
            subtitle: f.str("why_section_subtitle"),
            top_row,
            bottom_row,
        },
        dive_sites: DiveSites {
            title: f.str("dive_sites_title"),
            subtitle: f.str("dive_sites_subtitle"),
            sites: f
                .items("dive_sites")
                .iter()
                .map(|site| DiveSite {
                    name: site.str("name"),
                    image: site.image("image"),
                    depth: site.str("depth"),
                    highlight: site.str("highlight"),
                })
                .collect(),
        },
        program_section: ProgramSection {
            title: f.str("program_section_title"),
            subtitle: f.str("program_section_subtitle"),
            includes: f.strings("program_section_includes"),
            price: PriceTag {
                amount: f.str("program_section_price_amount"),
                badge: f.str("program_section_price_badge"),
                per_person: f.str("program_section_price_per_person"),
                highlight: f.str("program_section_price_highlight"),
            },
        },
        spec_section: SpecSection {
            section_label: f.str("spec_section_label"),
            big_card: card(&f.single("spec_big_card")),
            specialty_cards: f.items("spec_specialty_cards").iter().map(card).collect(),
            main_title: f.str("spec_main_title"),
            nav_cards: f.items("spec_nav_cards").iter().map(card).collect(),
            cta: SpecCta {
                price: f.str("spec_cta_price"),
                details: f.str("spec_cta_details"),
                button_text: f.str("spec_cta_button_text"),
            },
        },
        lead_form: lead_form(&f, Vec::new()),
        cta_section: CtaSection {
            title: f.str("cta_title"),
            description: f.str("cta_description"),
            primary_cta: f
                .flat_cta("cta_primary_text", "cta_primary_link")
                .unwrap_or_default(),
            secondary_cta: None,
        },
    }
}

/// First two cards on top, the rest below.
fn split_rows(mut cards: Vec<Card>) -> (Vec<Card>, Vec<Card>) {
    let bottom = cards.split_off(cards.len().min(2));
    (cards, bottom)
}

fn card(c: &Fields<'_>) -> Card {
    Card {
        variant: c.opt_str("type"),
        image: c.opt_image("image"),
        icon: c.opt_str("icon"),
        badge: c.opt_str("badge"),
        title: c.opt_str("title"),
        subtitle: c.opt_str("subtitle"),
        description: c.opt_str("description"),
        highlight: c.opt_str("highlight"),
        label: c.opt_str("label"),
        value: c.opt_str("value"),
        number: c.opt_str("number"),
        sublabel: c.opt_str("sublabel"),
    }
}

/// `lead_form_*` fields. `default_fields` stands in when the page defines
/// no form fields of its own.
pub(crate) fn lead_form(f: &Fields<'_>, default_fields: Vec<FormField>) -> LeadForm {
    let fields: Vec<FormField> = f
        .items("lead_form_fields")
        .iter()
        .map(|field| FormField {
            name: field.str("name"),
            input_type: field.opt_str("type").unwrap_or_else(|| "text".into()),
            placeholder: field.str("placeholder"),
            required: field.bool("required"),
            options: field
                .items("options")
                .iter()
                .map(|o| SelectOption {
                    value: o.str("value"),
                    label: o.str("label"),
                })
                .collect(),
        })
        .collect();

    LeadForm {
        title: f.str("lead_form_title"),
        subtitle: f.str("lead_form_subtitle"),
        fields: if fields.is_empty() { default_fields } else { fields },
        submit_button: f.str("lead_form_submit_button"),
        privacy_text: f.str("lead_form_privacy_text"),
        success_message: f.str("lead_form_success_message"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_hero_ctas_and_card_rows() {
        let page: RawPage = serde_json::from_value(json!({
            "id": 3,
            "meta": { "type": "home.HomePage", "slug": "home" },
            "title": "Inicio",
            "hero_title": "Bucea el Mar Rojo",
            "hero_badge": { "text": "Plazas limitadas", "background_color": "#FF6B35" },
            "hero_primary_cta_text": "Reservar",
            "hero_secondary_cta_text": "Ver rutas",
            "hero_secondary_cta_link": "/rutas",
            "why_section_cards": [
                { "type": "feature", "value": { "type": "feature", "title": "A" } },
                { "type": "stats", "value": { "type": "stats", "number": 500 } },
                { "type": "feature", "value": { "title": "C", "image": { "url": "/c.jpg" } } }
            ],
            "spec_big_card": { "type": "big", "value": { "title": "Nitrox" } }
        }))
        .unwrap();

        let home = map_home_page(&page);
        assert_eq!(home.slug, "home");
        assert_eq!(home.hero.title, "Bucea el Mar Rojo");
        assert_eq!(home.hero.badge.as_ref().unwrap().background_color, "#FF6B35");
        assert_eq!(home.hero.primary_cta.as_ref().unwrap().href, "#");
        assert_eq!(home.hero.secondary_cta.as_ref().unwrap().href, "/rutas");
        let variants: Vec<_> = home.hero.ctas.iter().map(|c| c.variant.as_str()).collect();
        assert_eq!(variants, vec!["primary", "outline"]);

        assert_eq!(home.why_section.top_row.len(), 2);
        assert_eq!(home.why_section.top_row[1].number.as_deref(), Some("500"));
        assert_eq!(home.why_section.bottom_row.len(), 1);
        assert_eq!(home.why_section.bottom_row[0].image.as_deref(), Some("/c.jpg"));
        assert_eq!(home.spec_section.big_card.title.as_deref(), Some("Nitrox"));
    }

    #[test]
    fn empty_page_still_maps() {
        let page = RawPage::default();
        let home = map_home_page(&page);
        assert!(home.hero.badge.is_none());
        assert!(home.hero.ctas.is_empty());
        assert!(home.why_section.top_row.is_empty());
        assert_eq!(home.cta_section.primary_cta.text, "");
    }
}
