/// Modal lightbox state machine
///
/// `Closed -> Open -> Closed`, with at most one overlay alive at any time by
/// construction: opening replaces whatever was open before instead of
/// stacking a second overlay. The Escape-key subscription is derived from
/// `is_open()` by the application, so the listener exists exactly as long as
/// an overlay does and every exit path releases it.

use super::data::ImageRecord;

/// What an open lightbox displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxContent {
    /// Asset filename, resolved against the asset prefix at view time
    pub filename: String,
    pub title: String,
    /// `None` when the record has no description; the caption is omitted
    /// entirely in that case
    pub caption: Option<String>,
}

impl LightboxContent {
    pub fn from_record(record: &ImageRecord) -> Self {
        LightboxContent {
            filename: record.filename.clone(),
            title: record.display_title().to_string(),
            caption: record.caption().map(String::from),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(LightboxContent),
}

impl Lightbox {
    /// Open the overlay for `record`, replacing any overlay already open.
    pub fn open(&mut self, record: &ImageRecord) {
        *self = Lightbox::Open(LightboxContent::from_record(record));
    }

    /// Close the overlay. Safe to call when already closed.
    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }

    pub fn content(&self) -> Option<&LightboxContent> {
        match self {
            Lightbox::Open(content) => Some(content),
            Lightbox::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::Category;
    use pretty_assertions::assert_eq;

    fn record(name: &str, description: Option<&str>) -> ImageRecord {
        ImageRecord {
            filename: format!("{name}.jpg"),
            title: Some(name.to_string()),
            original_filename: format!("{name}_orig.jpg"),
            description: description.map(String::from),
            categories: vec![Category { name: "Weddings".into() }],
        }
    }

    #[test]
    fn open_then_close_leaves_nothing_behind() {
        let mut lightbox = Lightbox::default();
        for _ in 0..5 {
            lightbox.open(&record("a", Some("caption")));
            assert!(lightbox.is_open());
            lightbox.close();
            assert!(!lightbox.is_open());
        }
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn reopening_replaces_the_overlay() {
        let mut lightbox = Lightbox::default();
        lightbox.open(&record("first", None));
        lightbox.open(&record("second", None));

        let content = lightbox.content().unwrap();
        assert_eq!(content.title, "second");
    }

    #[test]
    fn close_is_safe_when_already_closed() {
        let mut lightbox = Lightbox::default();
        lightbox.close();
        assert_eq!(lightbox, Lightbox::Closed);
    }

    #[test]
    fn empty_description_omits_caption() {
        let mut lightbox = Lightbox::default();
        lightbox.open(&record("a", Some("")));
        assert_eq!(lightbox.content().unwrap().caption, None);

        lightbox.open(&record("b", Some("the caption")));
        assert_eq!(lightbox.content().unwrap().caption.as_deref(), Some("the caption"));
    }
}
