/// Shared data structures for the application state
///
/// These structs mirror the JSON the portfolio backend returns and flow
/// unchanged from the API layer into the UI layer. They are never mutated
/// after a load completes.

use serde::Deserialize;

/// A portfolio category. Identity is the name; filter keys are the
/// case-folded name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    /// The key used to address this category in filter state and queries.
    pub fn filter_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// One image in the portfolio grid
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImageRecord {
    /// Processed asset filename served under the asset prefix
    pub filename: String,
    /// Optional display title (may be present but empty)
    #[serde(default)]
    pub title: Option<String>,
    /// The filename the image was uploaded with
    pub original_filename: String,
    /// Optional caption text (may be present but empty)
    #[serde(default)]
    pub description: Option<String>,
    /// Categories this image is tagged with
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl ImageRecord {
    /// Title shown on the tile and in the lightbox.
    /// An absent or empty title falls back to the original filename.
    pub fn display_title(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.original_filename,
        }
    }

    /// Caption text, if any. Absent and empty descriptions are both "none":
    /// the lightbox omits the caption entirely rather than render an empty
    /// one.
    pub fn caption(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// Whether this image is tagged with the given filter key
    /// (case-insensitive).
    pub fn has_category(&self, key: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.filter_key() == key.to_lowercase())
    }
}

/// The active hero background, as reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackgroundImage {
    pub filename: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(title: Option<&str>, description: Option<&str>) -> ImageRecord {
        ImageRecord {
            filename: "abc123.jpg".into(),
            title: title.map(String::from),
            original_filename: "DSC_0001.jpg".into(),
            description: description.map(String::from),
            categories: vec![Category { name: "Weddings".into() }],
        }
    }

    #[test]
    fn title_falls_back_to_original_filename() {
        assert_eq!(record(None, None).display_title(), "DSC_0001.jpg");
        assert_eq!(record(Some(""), None).display_title(), "DSC_0001.jpg");
        assert_eq!(record(Some("First dance"), None).display_title(), "First dance");
    }

    #[test]
    fn empty_description_yields_no_caption() {
        assert_eq!(record(None, None).caption(), None);
        assert_eq!(record(None, Some("")).caption(), None);
        assert_eq!(record(None, Some("Golden hour")).caption(), Some("Golden hour"));
    }

    #[test]
    fn category_match_is_case_insensitive() {
        let rec = record(None, None);
        assert!(rec.has_category("weddings"));
        assert!(rec.has_category("Weddings"));
        assert!(!rec.has_category("events"));
    }

    #[test]
    fn deserializes_backend_shape() {
        let json = r#"{
            "filename": "a1b2.jpg",
            "title": null,
            "original_filename": "IMG_1020.jpg",
            "description": "At the old pier",
            "categories": [{"name": "Events"}]
        }"#;
        let rec: ImageRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.display_title(), "IMG_1020.jpg");
        assert_eq!(rec.caption(), Some("At the old pier"));
        assert_eq!(rec.categories.len(), 1);
    }
}
