//! Detail modal view-model.

use zeta_ui::CarouselState;

use crate::constants::UNTITLED;
use crate::model::ProjectRecord;

/// One thumbnail button in the modal strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbView {
    pub src: String,
    pub alt: String,
    pub active: bool,
}

/// The large image above the thumbnail strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainImage {
    pub src: String,
    pub alt: String,
}

/// Content of the detail modal for one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub category: String,
    /// `location • year`
    pub meta: String,
    pub description: String,
    pub main_image: MainImage,
    pub thumbs: Vec<ThumbView>,
}

impl DetailView {
    pub fn build(record: &ProjectRecord, thumbs: &CarouselState) -> Self {
        let images = record.modal_images();
        let main_image = main_image(record, images.get(thumbs.active()).copied().unwrap_or(""));
        let thumbs = images
            .iter()
            .zip(thumbs.marks())
            .enumerate()
            .map(|(i, (src, active))| ThumbView {
                src: src.to_string(),
                alt: format!("Thumbnail {} for {}", i + 1, record.title),
                active,
            })
            .collect();

        Self {
            title: record.title.clone(),
            category: record.category().to_string(),
            meta: record.meta_line(),
            description: record.description().to_string(),
            main_image,
            thumbs,
        }
    }
}

/// The main image for `src`, alt text falling back when the title is blank.
pub fn main_image(record: &ProjectRecord, src: &str) -> MainImage {
    let title = if record.title.is_empty() {
        UNTITLED
    } else {
        record.title.as_str()
    };
    MainImage {
        src: src.to_string(),
        alt: format!("{} image", title),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Year;

    #[test]
    fn test_detail_shows_whole_gallery() {
        let gallery: Vec<String> = (1..=7).map(|i| format!("{i}.jpg")).collect();
        let record = ProjectRecord::new("Atelier", "c.jpg").with_gallery(gallery);
        let state = CarouselState::new(record.modal_images().len());
        let view = DetailView::build(&record, &state);

        assert_eq!(view.thumbs.len(), 7);
        assert_eq!(view.main_image.src, "1.jpg");
        assert_eq!(view.main_image.alt, "Atelier image");
        assert_eq!(view.thumbs[6].alt, "Thumbnail 7 for Atelier");
        assert_eq!(view.thumbs.iter().filter(|t| t.active).count(), 1);
        assert!(view.thumbs[0].active);
    }

    #[test]
    fn test_detail_text_fields() {
        let mut record = ProjectRecord::new("Atelier", "c.jpg").with_category("Interior");
        record.location = Some("CDMX".to_string());
        record.year = Some(Year::Text("2022".to_string()));
        let view = DetailView::build(&record, &CarouselState::new(2));

        assert_eq!(view.category, "Interior");
        assert_eq!(view.meta, "CDMX • 2022");
        assert_eq!(view.description, "");
        assert_eq!(view.thumbs.len(), 2);
    }

    #[test]
    fn test_main_image_follows_selected_thumb() {
        let record = ProjectRecord::new("A", "c.jpg").with_gallery(["x.jpg", "y.jpg", "z.jpg"]);
        let mut state = CarouselState::new(3);
        state.goto(2);
        let view = DetailView::build(&record, &state);
        assert_eq!(view.main_image.src, "z.jpg");
        assert!(view.thumbs[2].active);
    }

    #[test]
    fn test_untitled_alt_text() {
        let record = ProjectRecord::new("", "c.jpg");
        assert_eq!(main_image(&record, "c.jpg").alt, "Project image");
    }
}
