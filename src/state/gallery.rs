/// Portfolio grid state
///
/// One load is in flight or settled at any time. A failed load always
/// presents the error placeholder, even when a previous load had produced
/// images; an empty successful load presents the "no images" placeholder,
/// which is a normal outcome and deliberately distinct from the error one.

use crate::api::ApiError;

use super::data::ImageRecord;

#[derive(Debug, Clone, Default)]
pub enum Gallery {
    /// A load is in flight and nothing has settled yet
    #[default]
    Loading,
    /// The last load completed with these records (possibly zero)
    Loaded(Vec<ImageRecord>),
    /// The last load failed
    Failed(ApiError),
}

/// What the grid should show, derived from the settled state
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation<'a> {
    Loading,
    Tiles(&'a [ImageRecord]),
    NoResults,
    Error,
}

impl Gallery {
    /// A new load has started; previous results stay visible in `Loaded`
    /// until the new ones settle, so this only clears a failed state.
    pub fn begin_load(&mut self) {
        if matches!(self, Gallery::Failed(_)) {
            *self = Gallery::Loading;
        }
    }

    /// A load settled. An error result always wins, regardless of what was
    /// on screen before.
    pub fn finish(&mut self, result: Result<Vec<ImageRecord>, ApiError>) {
        *self = match result {
            Ok(images) => Gallery::Loaded(images),
            Err(err) => Gallery::Failed(err),
        };
    }

    pub fn presentation(&self) -> Presentation<'_> {
        match self {
            Gallery::Loading => Presentation::Loading,
            Gallery::Loaded(images) if images.is_empty() => Presentation::NoResults,
            Gallery::Loaded(images) => Presentation::Tiles(images),
            Gallery::Failed(_) => Presentation::Error,
        }
    }

    /// Records of the last successful load, if any
    pub fn images(&self) -> &[ImageRecord] {
        match self {
            Gallery::Loaded(images) => images,
            _ => &[],
        }
    }
}
