//! Typed rich-content blocks.
//!
//! Blog bodies and experience sections are ordered lists of blocks. On the
//! wire (and in the fallback files) a block is `{ "type", "id", "value" }`;
//! here the `type` tag selects a [`BlockValue`] variant so templates can
//! match exhaustively instead of poking at untyped JSON.

use crate::model::{CtaButton, InfoCard};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub id: String,
    #[serde(flatten)]
    pub value: BlockValue,
}

impl ContentBlock {
    pub fn new(id: impl Into<String>, value: BlockValue) -> Self {
        Self {
            id: id.into(),
            value,
        }
    }

    /// The wire tag of this block (`rich_text`, `year`, ...).
    pub fn block_type(&self) -> &'static str {
        self.value.block_type()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum BlockValue {
    // ---- body blocks ----
    RichText(RichText),
    Heading(Heading),
    Image(Image),
    Quote(Quote),
    InfoCards(InfoCards),
    Gallery(Gallery),
    TwoColumn(TwoColumn),
    Cta(CtaBlock),
    // ---- experience sections ----
    Year(Year),
    SplitImmersive(SplitImmersive),
    Depth(Depth),
    ImageGrid(ImageGrid),
    Requirements(RequirementsBlock),
    TextOverlayFull(TextOverlayFull),
}

impl BlockValue {
    pub const TYPES: [&'static str; 14] = [
        "rich_text",
        "heading",
        "image",
        "quote",
        "info_cards",
        "gallery",
        "two_column",
        "cta",
        "year",
        "split_immersive",
        "depth",
        "image_grid",
        "requirements",
        "text_overlay_full",
    ];

    pub fn block_type(&self) -> &'static str {
        match self {
            BlockValue::RichText(_) => "rich_text",
            BlockValue::Heading(_) => "heading",
            BlockValue::Image(_) => "image",
            BlockValue::Quote(_) => "quote",
            BlockValue::InfoCards(_) => "info_cards",
            BlockValue::Gallery(_) => "gallery",
            BlockValue::TwoColumn(_) => "two_column",
            BlockValue::Cta(_) => "cta",
            BlockValue::Year(_) => "year",
            BlockValue::SplitImmersive(_) => "split_immersive",
            BlockValue::Depth(_) => "depth",
            BlockValue::ImageGrid(_) => "image_grid",
            BlockValue::Requirements(_) => "requirements",
            BlockValue::TextOverlayFull(_) => "text_overlay_full",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RichText {
    /// Trusted HTML authored in the CMS.
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Heading {
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Image {
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Quote {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InfoCards {
    pub cards: Vec<InfoCard>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GalleryImage {
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Gallery {
    pub images: Vec<GalleryImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageColumn {
    pub image: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextColumn {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TwoColumn {
    pub left_column: ImageColumn,
    pub right_column: TextColumn,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CtaBlock {
    pub title: String,
    pub description: String,
    pub primary_cta: CtaButton,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Year {
    pub year: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub background_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SplitImmersive {
    /// `image-left` or `image-right`.
    pub layout: String,
    pub image: String,
    pub title: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_button: Option<CtaButton>,
    pub background_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Depth {
    /// Metres (or `unit`); fractional depths are kept as given.
    pub depth: f64,
    pub unit: String,
    pub subtitle: String,
    pub image: String,
    pub overlay_gradient: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Overlay {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GridImage {
    pub url: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay: Option<Overlay>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageGrid {
    pub images: Vec<GridImage>,
    pub layout: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequirementsBlock {
    pub title: String,
    pub subtitle: String,
    pub background_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextOverlayFull {
    pub image: String,
    pub title: String,
    pub subtitle: String,
    pub alignment: String,
    pub overlay_gradient: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cta_button: Option<CtaButton>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serialises_as_type_id_value() {
        let block = ContentBlock::new(
            "h1",
            BlockValue::Heading(Heading {
                level: 2,
                text: "Historia".into(),
            }),
        );
        let v = serde_json::to_value(&block).unwrap();
        assert_eq!(
            v,
            json!({ "id": "h1", "type": "heading", "value": { "level": 2, "text": "Historia" } })
        );
    }

    #[test]
    fn reads_experience_section() {
        let raw = json!({
            "type": "depth",
            "id": "depth-50m",
            "value": { "depth": 50, "unit": "m", "subtitle": "Profundidad máxima" }
        });
        let block: ContentBlock = serde_json::from_value(raw).unwrap();
        assert_eq!(block.block_type(), "depth");
        match block.value {
            BlockValue::Depth(d) => {
                assert_eq!(d.depth, 50.0);
                assert_eq!(d.image, "");
            }
            other => panic!("unexpected block {other:?}"),
        }
    }

    #[test]
    fn unknown_type_is_a_decode_error() {
        let raw = json!({ "type": "video", "id": "x", "value": {} });
        assert!(serde_json::from_value::<ContentBlock>(raw).is_err());
    }

    #[test]
    fn type_table_matches_variants() {
        let block = BlockValue::TextOverlayFull(TextOverlayFull::default());
        assert!(BlockValue::TYPES.contains(&block.block_type()));
        assert_eq!(BlockValue::TYPES.len(), 14);
    }
}
