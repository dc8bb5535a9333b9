use super::Fields;
use domain::{
    block::{
        BlockValue, ContentBlock, CtaBlock, Depth, Gallery, GalleryImage, GridImage, Heading,
        Image, ImageColumn, ImageGrid, InfoCards, Overlay, Quote, RequirementsBlock, RichText,
        SplitImmersive, TextColumn, TextOverlayFull, TwoColumn, Year,
    },
    model::{CtaButton, InfoCard},
};
use serde_json::Value as Json;
use tracing::warn;

/// Map a StreamField list, dropping block types the site cannot render.
pub fn map_blocks(raw: &[Json]) -> Vec<ContentBlock> {
    raw.iter().filter_map(map_block).collect()
}

pub fn map_block(raw: &Json) -> Option<ContentBlock> {
    let block = Fields::from_value(Some(raw));
    let block_type = block.str("type");
    let id = block.str("id");
    let raw_value = block.get("value");
    let v = Fields::from_value(raw_value);

    let value = match block_type.as_str() {
        "rich_text" | "paragraph" => BlockValue::RichText(RichText {
            content: match raw_value {
                Some(Json::String(html)) => html.clone(),
                _ => v.str("content"),
            },
        }),
        "heading" => BlockValue::Heading(match raw_value {
            Some(Json::String(text)) => Heading {
                level: 2,
                text: text.clone(),
            },
            _ => Heading {
                level: heading_level(v.u32("level")),
                text: v.str("text"),
            },
        }),
        "image" => BlockValue::Image(Image {
            url: v.opt_image("image").unwrap_or_else(|| v.image("url")),
            alt: v.str("alt"),
            caption: v.opt_str("caption"),
        }),
        "quote" => BlockValue::Quote(Quote {
            text: v.opt_str("text").unwrap_or_else(|| v.str("quote")),
            author: v.opt_str("author"),
            role: v.opt_str("role"),
        }),
        "info_cards" => BlockValue::InfoCards(InfoCards {
            cards: v.items("cards").iter().map(info_card).collect(),
        }),
        "gallery" => BlockValue::Gallery(Gallery {
            images: v
                .items("images")
                .iter()
                .map(|img| GalleryImage {
                    url: img.opt_image("image").unwrap_or_else(|| img.image("url")),
                    alt: img.str("alt"),
                })
                .collect(),
        }),
        "two_column" => {
            let left = v.obj("left_column");
            let right = v.obj("right_column");
            BlockValue::TwoColumn(TwoColumn {
                left_column: ImageColumn {
                    image: left.image("image"),
                    alt: left.str("alt"),
                },
                right_column: TextColumn {
                    title: right.str("title"),
                    content: right.str("content"),
                },
            })
        }
        "cta" => BlockValue::Cta(CtaBlock {
            title: v.str("title"),
            description: v.str("description"),
            primary_cta: v
                .cta("primary_cta")
                .or_else(|| v.flat_cta("button_text", "button_link"))
                .unwrap_or_default(),
        }),
        "year" => BlockValue::Year(Year {
            year: v.str("year"),
            title: v.str("title"),
            description: v.str("description"),
            image: v.image("image"),
            background_color: v.str("background_color"),
        }),
        "split_immersive" => BlockValue::SplitImmersive(SplitImmersive {
            layout: v.str("layout"),
            image: v.image("image"),
            title: v.str("title"),
            content: v.str("content"),
            cta_button: section_button(&v),
            background_color: v.str("background_color"),
        }),
        "depth" => BlockValue::Depth(Depth {
            depth: v.f64("depth"),
            unit: v.str("unit"),
            subtitle: v.str("subtitle"),
            image: v.image("image"),
            overlay_gradient: v.str("overlay_gradient"),
        }),
        "image_grid" => BlockValue::ImageGrid(ImageGrid {
            images: v
                .items("images")
                .iter()
                .map(|img| GridImage {
                    url: img.image("image"),
                    alt: img.str("alt"),
                    overlay: img.opt_str("overlay_title").map(|title| Overlay {
                        title,
                        description: img.str("overlay_description"),
                    }),
                })
                .collect(),
            layout: v.str("layout"),
        }),
        "requirements" => BlockValue::Requirements(RequirementsBlock {
            title: v.str("title"),
            subtitle: v.str("subtitle"),
            background_color: v.str("background_color"),
        }),
        "text_overlay_full" => BlockValue::TextOverlayFull(TextOverlayFull {
            image: v.image("image"),
            title: v.str("title"),
            subtitle: v.str("subtitle"),
            alignment: v.str("alignment"),
            overlay_gradient: v.str("overlay_gradient"),
            cta_button: section_button(&v),
        }),
        other => {
            warn!(block_type = other, id = %id, "dropping unsupported content block");
            return None;
        }
    };

    Some(ContentBlock::new(id, value))
}

pub(crate) fn info_card(card: &Fields<'_>) -> InfoCard {
    InfoCard {
        icon: card.str("icon"),
        value: card.str("value"),
        label: card.str("label"),
        color: card.str("color"),
    }
}

fn section_button(v: &Fields<'_>) -> Option<CtaButton> {
    v.flat_cta("cta_button_text", "cta_button_link")
}

fn heading_level(level: u32) -> u8 {
    match level {
        1..=6 => level as u8,
        _ => 2,
    }
}
