//! Project record data model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_CARD_IMAGES, META_SEPARATOR, MIN_CAROUSEL_IMAGES};

/// Project year, given either as text or as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Year {
    Number(serde_json::Number),
    Text(String),
}

impl Year {
    /// Whether the year has anything worth showing.
    pub fn is_present(&self) -> bool {
        match self {
            Year::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
            Year::Text(s) => !s.trim().is_empty(),
        }
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole floats print without the fraction, as the browser does
            Year::Number(n) if n.is_f64() => match n.as_f64() {
                Some(v) => write!(f, "{}", v),
                None => write!(f, "{}", n),
            },
            Year::Number(n) => write!(f, "{}", n),
            Year::Text(s) => f.write_str(s),
        }
    }
}

/// One portfolio project, as supplied by the page.
///
/// Page data is hand-written, so every field reads leniently: a missing field
/// or a value of the wrong type is treated as absent instead of rejecting the
/// whole record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Display title, used in labels and alt text
    #[serde(default, deserialize_with = "lenient::string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub subtitle: Option<String>,
    /// Badge text and filter key
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub category: Option<String>,
    /// Fallback image when there is no gallery
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub cover: Option<String>,
    #[serde(default, deserialize_with = "lenient::gallery")]
    pub gallery: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::year")]
    pub year: Option<Year>,
    #[serde(default, deserialize_with = "lenient::optional_string")]
    pub description: Option<String>,
}

/// Field readers that map unexpected JSON types to "absent".
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::Year;

    pub fn optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(Year::Number(n).to_string()),
            _ => None,
        })
    }

    pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(optional_string(deserializer)?.unwrap_or_default())
    }

    /// String entries only; anything else in the list is dropped.
    pub fn gallery<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Array(items) => Some(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => None,
        })
    }

    pub fn year<'de, D>(deserializer: D) -> Result<Option<Year>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::Number(n) => Some(Year::Number(n)),
            Value::String(s) => Some(Year::Text(s)),
            _ => None,
        })
    }
}

impl ProjectRecord {
    /// Create a record with just a title and cover image.
    pub fn new(title: impl Into<String>, cover: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cover: Some(cover.into()),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_gallery<I, S>(mut self, gallery: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.gallery = Some(gallery.into_iter().map(Into::into).collect());
        self
    }

    pub fn subtitle(&self) -> &str {
        self.subtitle.as_deref().unwrap_or("")
    }

    pub fn category(&self) -> &str {
        self.category.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// The gallery when it has entries, otherwise the cover alone.
    fn sources(&self) -> Vec<&str> {
        match self.gallery.as_deref() {
            Some(gallery) if !gallery.is_empty() => gallery.iter().map(String::as_str).collect(),
            _ => vec![self.cover.as_deref().unwrap_or("")],
        }
    }

    /// Images for a card carousel: at least two, at most five.
    pub fn card_images(&self) -> Vec<&str> {
        let mut images = self.modal_images();
        images.truncate(MAX_CARD_IMAGES);
        images
    }

    /// Images for the detail modal: at least two, uncapped.
    ///
    /// A single source is repeated so every carousel has something to cycle.
    pub fn modal_images(&self) -> Vec<&str> {
        let mut images = self.sources();
        if let Some(&first) = images.first()
            && images.len() < MIN_CAROUSEL_IMAGES
        {
            images.resize(MIN_CAROUSEL_IMAGES, first);
        }
        images
    }

    /// `location • year`, with only the parts that are present.
    pub fn meta_line(&self) -> String {
        let location = self
            .location
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .map(str::to_string);
        let year = self
            .year
            .as_ref()
            .filter(|y| y.is_present())
            .map(ToString::to_string);
        [location, year]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(META_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_gallery_duplicates_cover() {
        let record = ProjectRecord::new("Casa Lina", "cover.jpg");
        assert_eq!(record.card_images(), vec!["cover.jpg", "cover.jpg"]);
        assert_eq!(record.modal_images(), vec!["cover.jpg", "cover.jpg"]);
    }

    #[test]
    fn test_empty_gallery_falls_back_to_cover() {
        let record =
            ProjectRecord::new("Casa Lina", "cover.jpg").with_gallery(Vec::<String>::new());
        assert_eq!(record.card_images(), vec!["cover.jpg", "cover.jpg"]);
    }

    #[test]
    fn test_single_gallery_entry_duplicated() {
        let record = ProjectRecord::new("Casa Lina", "cover.jpg").with_gallery(["a.jpg"]);
        assert_eq!(record.card_images(), vec!["a.jpg", "a.jpg"]);
    }

    #[test]
    fn test_card_caps_at_five_modal_does_not() {
        let gallery: Vec<String> = (1..=8).map(|i| format!("{i}.jpg")).collect();
        let record = ProjectRecord::new("Loft", "cover.jpg").with_gallery(gallery.clone());
        let first_five: Vec<&str> = gallery[..5].iter().map(String::as_str).collect();
        assert_eq!(record.card_images(), first_five);
        assert_eq!(record.modal_images().len(), 8);
        assert_eq!(record.modal_images()[7], "8.jpg");
    }

    #[test]
    fn test_two_to_five_kept_in_order() {
        for len in 2..=5 {
            let gallery: Vec<String> = (0..len).map(|i| format!("g{i}.png")).collect();
            let record = ProjectRecord::new("T", "c.png").with_gallery(gallery.clone());
            let expected: Vec<&str> = gallery.iter().map(String::as_str).collect();
            assert_eq!(record.card_images(), expected);
        }
    }

    #[test]
    fn test_meta_line() {
        let mut record = ProjectRecord::new("T", "c.png");
        assert_eq!(record.meta_line(), "");

        record.location = Some("Monterrey".to_string());
        assert_eq!(record.meta_line(), "Monterrey");

        record.year = Some(Year::Number(2024.into()));
        assert_eq!(record.meta_line(), "Monterrey • 2024");

        record.location = None;
        record.year = Some(Year::Text("2023".to_string()));
        assert_eq!(record.meta_line(), "2023");
    }

    #[test]
    fn test_deserialize_loose_record() {
        let record: ProjectRecord = serde_json::from_str(
            r#"{ "title": "Patio", "cover": "p.jpg", "gallery": null, "year": 2021, "category": "Residential" }"#,
        )
        .unwrap();
        assert_eq!(record.gallery, None);
        assert_eq!(record.year.as_ref().map(ToString::to_string).as_deref(), Some("2021"));
        assert_eq!(record.subtitle(), "");
        assert_eq!(record.category(), "Residential");
    }

    #[test]
    fn test_wrong_field_types_read_as_absent() {
        let record: ProjectRecord = serde_json::from_str(
            r#"{ "cover": 7, "year": true, "gallery": ["1.jpg", null, 3, "2.jpg"], "location": {} }"#,
        )
        .unwrap();
        assert_eq!(record.title, "");
        assert_eq!(record.year, None);
        assert_eq!(record.location, None);
        assert_eq!(record.cover.as_deref(), Some("7"));
        assert_eq!(record.modal_images(), vec!["1.jpg", "2.jpg"]);
    }

    #[test]
    fn test_whole_float_year_prints_as_integer() {
        let whole: Year = serde_json::from_str("2024.0").unwrap();
        let fractional: Year = serde_json::from_str("2024.5").unwrap();
        assert_eq!(whole.to_string(), "2024");
        assert_eq!(fractional.to_string(), "2024.5");
        assert_eq!(Year::Number(2021.into()).to_string(), "2021");
    }

    #[test]
    fn test_missing_cover_yields_empty_sources() {
        let record = ProjectRecord {
            title: "Bare".to_string(),
            ..Default::default()
        };
        assert_eq!(record.card_images(), vec!["", ""]);
    }
}
