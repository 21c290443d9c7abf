//! HTML markup for the view-models.
//!
//! The browser binding writes these strings with `innerHTML`, and the preview
//! binary prints them. All record text is escaped.

use std::fmt::Write as _;

use super::{CardView, ThumbView};
use crate::constants::{ARROW_GLYPH, EMBED_VERSION};
use crate::embeds::EmbedCell;

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

fn active_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} is-active")
    } else {
        base.to_string()
    }
}

/// Attributes of the card's own `<article>` element, as name/value pairs.
pub fn card_attributes(card: &CardView) -> Vec<(&'static str, String)> {
    vec![
        ("class", "project".to_string()),
        ("tabindex", "0".to_string()),
        ("role", "button".to_string()),
        ("aria-label", card.aria_label.clone()),
        ("data-category", card.category.clone()),
        ("data-index", card.index.to_string()),
    ]
}

/// Inner markup of a card: carousel region and body.
pub fn card_inner_html(card: &CardView) -> String {
    let carousel = &card.carousel;
    let hidden = if carousel.controls_visible {
        ""
    } else {
        r#" style="display: none""#
    };

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="project__media" aria-label="{}">"#,
        escape(&carousel.label)
    );
    for image in &carousel.images {
        let _ = write!(
            html,
            r#"<img class="{}" src="{}" alt="{}" loading="lazy" />"#,
            active_class("carousel__img", image.active),
            escape(&image.src),
            escape(&image.alt)
        );
    }
    let _ = write!(
        html,
        r#"<button class="carousel__btn prev" type="button" aria-label="Previous image"{hidden}>‹</button>"#
    );
    let _ = write!(
        html,
        r#"<button class="carousel__btn next" type="button" aria-label="Next image"{hidden}>›</button>"#
    );
    let _ = write!(html, r#"<div class="carousel__dots"{hidden}>"#);
    for (i, dot) in carousel.indicators.iter().enumerate() {
        let _ = write!(
            html,
            r#"<button type="button" class="{}" data-index="{}" aria-label="{}"></button>"#,
            active_class("carousel__dot", dot.active),
            i,
            escape(&dot.label)
        );
    }
    html.push_str("</div></div>");

    let _ = write!(
        html,
        r#"<div class="project__body"><h3 class="project__title">{}</h3><p class="project__subtitle">{}</p><div class="project__meta"><span class="badge">{}</span><span class="arrow">{}</span></div></div>"#,
        escape(&card.title),
        escape(&card.subtitle),
        escape(&card.badge),
        ARROW_GLYPH
    );
    html
}

/// A complete card `<article>`.
pub fn card_html(card: &CardView) -> String {
    let attributes: String = card_attributes(card)
        .iter()
        .map(|(name, value)| format!(r#" {}="{}""#, name, escape(value)))
        .collect();
    format!("<article{}>{}</article>", attributes, card_inner_html(card))
}

/// Every card of a grid, in order.
pub fn grid_html(cards: &[CardView]) -> String {
    cards.iter().map(card_html).collect::<Vec<_>>().join("\n")
}

/// Thumbnail strip of the detail modal.
pub fn thumbs_html(thumbs: &[ThumbView]) -> String {
    thumbs
        .iter()
        .enumerate()
        .map(|(i, thumb)| {
            format!(
                r#"<button class="{}" type="button" data-index="{}"><img src="{}" alt="{}" loading="lazy" /></button>"#,
                active_class("thumb", thumb.active),
                i,
                escape(&thumb.src),
                escape(&thumb.alt)
            )
        })
        .collect()
}

/// Inner markup of one embed cell; the caller wraps it in `.ig__cell`.
pub fn embed_cell_html(cell: &EmbedCell) -> String {
    match cell {
        EmbedCell::Post { permalink } => format!(
            r#"<blockquote class="instagram-media ig__embed" data-instgrm-permalink="{}" data-instgrm-version="{}"></blockquote>"#,
            escape(permalink),
            EMBED_VERSION
        ),
        EmbedCell::Placeholder => r#"<div class="ig__placeholder">Add an Instagram post URL to <strong>embed_posts</strong> in the site config<br/>to render an embed here.</div>"#.to_string(),
    }
}

/// Every embed cell, each wrapped in its `.ig__cell`.
pub fn embeds_html(cells: &[EmbedCell]) -> String {
    cells
        .iter()
        .map(|cell| format!(r#"<div class="ig__cell">{}</div>"#, embed_cell_html(cell)))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProjectRecord;
    use crate::views::DetailView;
    use zeta_ui::CarouselState;

    fn card(record: &ProjectRecord) -> CardView {
        CardView::build(3, record, &CarouselState::new(record.card_images().len()))
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & 'Jo'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jo&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_card_markup_structure() {
        let record = ProjectRecord::new("Casa <Lina>", "c.jpg").with_category("Residential");
        let html = card_html(&card(&record));

        assert!(html.starts_with("<article class=\"project\""));
        assert!(html.contains(r#"aria-label="Open project: Casa &lt;Lina&gt;""#));
        assert!(html.contains(r#"data-index="3""#));
        assert_eq!(html.matches("<img ").count(), 2);
        assert_eq!(html.matches("carousel__img is-active").count(), 1);
        assert_eq!(html.matches("carousel__dot is-active").count(), 1);
        assert!(html.contains(r#"<span class="badge">Residential</span>"#));
        assert!(!html.contains("undefined"));
        assert!(!html.contains("display: none"));
    }

    #[test]
    fn test_hidden_controls_markup() {
        let record = ProjectRecord::new("Solo", "s.jpg");
        let view = CardView::build(0, &record, &CarouselState::new(1));
        let html = card_inner_html(&view);
        assert_eq!(html.matches(r#" style="display: none""#).count(), 3);
    }

    #[test]
    fn test_thumbs_markup() {
        let record = ProjectRecord::new("A", "c.jpg").with_gallery(["1.jpg", "2.jpg", "3.jpg"]);
        let view = DetailView::build(&record, &CarouselState::new(3));
        let html = thumbs_html(&view.thumbs);
        assert_eq!(html.matches("<button class=\"thumb").count(), 3);
        assert_eq!(html.matches("thumb is-active").count(), 1);
        assert!(html.contains(r#"data-index="2""#));
    }

    #[test]
    fn test_embed_markup() {
        let post = embed_cell_html(&EmbedCell::Post {
            permalink: "https://www.instagram.com/p/abc/?img_index=1".to_string(),
        });
        let permalink = r#"data-instgrm-permalink="https://www.instagram.com/p/abc/?img_index=1""#;
        assert!(post.contains(permalink));
        assert!(post.contains(r#"data-instgrm-version="14""#));

        let all = embeds_html(&[EmbedCell::Placeholder, EmbedCell::Placeholder]);
        assert_eq!(all.matches("ig__placeholder").count(), 2);
    }
}
