use super::{map_blocks, Fields};
use crate::source::RawPage;
use domain::model::{
    blog::{Author, Category, HeroImage},
    BlogPost,
};

pub fn map_blog_post(page: &RawPage) -> BlogPost {
    let f = Fields::of(page);
    let author = f.obj("author");
    let category = f.obj("category");

    BlogPost {
        slug: page.slug().to_owned(),
        title: page.title.clone(),
        excerpt: f.str("excerpt"),
        published_at: f.str("published_at"),
        author: Author {
            name: author.str("name"),
            avatar: author.image("avatar"),
        },
        hero: HeroImage {
            image: f.image("hero_image"),
            alt: f.str("hero_alt"),
        },
        body: map_blocks(f.list("body")),
        category: Category {
            name: category.str("name"),
            color: category.str("color"),
        },
        read_time: f.opt_str("read_time"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::block::BlockValue;
    use serde_json::json;

    #[test]
    fn maps_post_with_body() {
        let page: RawPage = serde_json::from_value(json!({
            "id": 12,
            "meta": { "type": "blog.BlogPostPage", "slug": "ss-thistlegorm-guia-completa" },
            "title": "SS Thistlegorm",
            "excerpt": "El pecio más famoso",
            "published_at": "2026-01-15",
            "read_time": "8 min",
            "author": { "name": "Carlos", "avatar": { "meta": { "download_url": "/carlos.jpg" } } },
            "category": { "name": "Pecios", "color": "#FF6B35" },
            "hero_image": { "url": "/thistlegorm.jpg" },
            "hero_alt": "Thistlegorm",
            "body": [
                { "type": "rich_text", "id": "1", "value": { "content": "<p>...</p>" } },
                { "type": "quote", "id": "2", "value": { "text": "Viajar en el tiempo", "author": "Cousteau" } }
            ]
        }))
        .unwrap();

        let post = map_blog_post(&page);
        assert_eq!(post.slug, "ss-thistlegorm-guia-completa");
        assert_eq!(post.author.avatar, "/carlos.jpg");
        assert_eq!(post.hero.image, "/thistlegorm.jpg");
        assert_eq!(post.read_time.as_deref(), Some("8 min"));
        assert_eq!(post.body.len(), 2);
        assert!(matches!(post.body[1].value, BlockValue::Quote(_)));
    }

    #[test]
    fn missing_author_and_body_are_empty() {
        let page: RawPage = serde_json::from_value(json!({
            "meta": { "slug": "borrador" },
            "title": "Borrador"
        }))
        .unwrap();
        let post = map_blog_post(&page);
        assert_eq!(post.author.name, "");
        assert!(post.body.is_empty());
        assert!(post.read_time.is_none());
    }
}
