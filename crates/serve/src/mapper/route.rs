use super::{block::info_card, stream_hero, Fields};
use crate::source::RawPage;
use domain::model::{
    route::{Itinerary, ItineraryDay, RouteCta, StoryIntro},
    Route, TitledList,
};

pub fn map_route_page(page: &RawPage) -> Route {
    let f = Fields::of(page);

    Route {
        slug: page.slug().to_owned(),
        title: page.title.clone(),
        hero: stream_hero(page),
        story_intro: StoryIntro {
            badge: f.str("story_intro_badge"),
            title: f.str("story_intro_title"),
            description: f.str("story_intro_description"),
        },
        info_cards: f.items("info_cards").iter().map(info_card).collect(),
        itinerary: Itinerary {
            title: f.str("itinerary_title"),
            days: f
                .items("itinerary_days")
                .iter()
                .map(|day| ItineraryDay {
                    day: day.u32("day"),
                    title: day.str("title"),
                    description: day.str("description"),
                    dives: day.strings("dives"),
                    highlights: day.strings("highlights"),
                    image: day.image("image"),
                    overlay_direction: day.str("overlay_direction"),
                })
                .collect(),
        },
        includes: TitledList {
            title: f.str("incluye_title"),
            items: f.strings("incluye_items"),
        },
        cta: RouteCta {
            title: f.str("cta_title"),
            description: f.str("cta_description"),
            background_image: f.image("cta_background_image"),
            primary_cta: f
                .flat_cta("cta_primary_text", "cta_primary_link")
                .unwrap_or_default(),
            secondary_cta: f.flat_cta("cta_secondary_text", "cta_secondary_link"),
        },
    }
}
