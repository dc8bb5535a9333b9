use super::{stream_hero, Fields};
use crate::source::RawPage;
use domain::model::{
    offer::{Price, Testimonial, Urgency},
    CtaButton, CtaSection, Offer,
};

pub fn map_offer_page(page: &RawPage) -> Offer {
    let f = Fields::of(page);

    Offer {
        slug: page.slug().to_owned(),
        title: page.title.clone(),
        badge: f.str("badge"),
        hero: stream_hero(page),
        urgency: Urgency {
            countdown_to: f.str("countdown_to"),
            seats_available: f.u32("plazas_disponibles"),
            viewers: f.u32("personas_viendo"),
        },
        price: Price {
            original: f.f64("precio_original"),
            discount: f.f64("precio_descuento"),
            current: f.f64("precio_actual"),
            currency: f.str("precio_moneda"),
        },
        benefits: f.strings("beneficios"),
        testimonials: f
            .items("testimonios")
            .iter()
            .map(|t| Testimonial {
                name: t.str("name"),
                text: t.str("text"),
                avatar: t.image("avatar"),
                rating: t.u32("rating").min(5) as u8,
            })
            .collect(),
        // The booking modal owns the CTA target.
        cta: CtaSection {
            title: f.str("cta_title"),
            description: f.str("cta_description"),
            primary_cta: CtaButton {
                text: f.str("cta_primary_text"),
                href: "#".into(),
                variant: None,
            },
            secondary_cta: None,
        },
        primary_route: f.page_slug("primary_route"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_prices_and_urgency() {
        let page: RawPage = serde_json::from_value(json!({
            "id": 40,
            "meta": { "type": "ofertas.OfertaPage", "slug": "early-bird" },
            "title": "Early Bird 2026",
            "badge": "-200€",
            "hero": [],
            "countdown_to": "2026-03-15T23:59:59",
            "plazas_disponibles": 8,
            "personas_viendo": "23",
            "precio_original": "1495.00",
            "precio_descuento": 200,
            "precio_actual": 1295.0,
            "precio_moneda": "€",
            "beneficios": [{ "type": "item", "value": "Nitrox gratis" }],
            "testimonios": [{ "name": "Laura", "text": "Increíble", "rating": 9 }],
            "cta_title": "No te quedes sin plaza",
            "cta_primary_text": "Reservar"
        }))
        .unwrap();

        let offer = map_offer_page(&page);
        assert_eq!(offer.hero.title, "Early Bird 2026");
        assert_eq!(offer.urgency.seats_available, 8);
        assert_eq!(offer.urgency.viewers, 23);
        assert_eq!(offer.price.original, 1495.0);
        assert_eq!(offer.price.discount, 200.0);
        assert_eq!(offer.price.current, 1295.0);
        assert_eq!(offer.benefits, vec!["Nitrox gratis"]);
        assert_eq!(offer.testimonials[0].rating, 5);
        assert_eq!(offer.cta.primary_cta.href, "#");
        assert!(offer.primary_route.is_none());
    }
}
