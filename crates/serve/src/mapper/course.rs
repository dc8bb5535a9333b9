use super::Fields;
use crate::source::RawPage;
use domain::model::{
    course::{
        CourseHero, CourseModule, IconItem, IconList, InfoBar, Learn, LearnItem, Modules,
        Requirements,
    },
    Course, CtaSection,
};

pub fn map_course_page(page: &RawPage) -> Course {
    let f = Fields::of(page);

    Course {
        slug: page.slug().to_owned(),
        title: page.title.clone(),
        badge: f.str("badge"),
        hero: CourseHero {
            image: f.image("hero_image"),
            title: f.str("hero_title"),
            subtitle: f.str("hero_subtitle"),
        },
        info_bars: f
            .items("info_bars")
            .iter()
            .map(|bar| InfoBar {
                label: bar.str("label"),
                value: bar.str("value"),
                color: bar.str("color"),
            })
            .collect(),
        learn: Learn {
            title: f.str("que_aprendes_title"),
            items: f
                .items("que_aprendes_items")
                .iter()
                .map(|item| LearnItem {
                    icon: item.str("icon"),
                    title: item.str("title"),
                    description: item.str("description"),
                })
                .collect(),
        },
        modules: Modules {
            title: f.str("modulos_title"),
            items: f
                .items("modulos")
                .iter()
                .map(|m| CourseModule {
                    number: m.u32("number"),
                    title: m.str("title"),
                    description: m.str("description"),
                })
                .collect(),
        },
        requirements: Requirements {
            title: f.str("requisitos_title"),
            intro: f.str("requisitos_intro"),
            items: f.strings("requisitos_items"),
        },
        includes: IconList {
            title: f.str("incluye_title"),
            items: f
                .items("incluye_items")
                .iter()
                .map(|item| IconItem {
                    icon: item.str("icon"),
                    title: item.str("title"),
                })
                .collect(),
        },
        cta: CtaSection {
            title: f.str("cta_title"),
            description: f.str("cta_description"),
            primary_cta: f
                .flat_cta("cta_primary_text", "cta_primary_link")
                .unwrap_or_default(),
            secondary_cta: None,
        },
        primary_route: f.page_slug("primary_route"),
    }
}
