/// Hero banner state
///
/// Owns the decorative background and the decoration layers stacked over it.
/// Applying a background is idempotent: each decoration layer is inserted at
/// most once no matter how often the backend response is re-applied, and a
/// missing background is a no-op rather than an error. Heading content is
/// always composited above the scrim by the view's explicit stacking order,
/// never by relying on insertion order here.

use iced::widget::image;

/// A decoration inserted over the hero background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroLayer {
    /// Darkening layer for text readability (35% black)
    Scrim,
    /// Frosted panel behind the heading so the logo text pops
    LogoBackdrop,
}

#[derive(Debug, Clone, Default)]
pub struct HeroState {
    background: Option<String>,
    handle: Option<image::Handle>,
    layers: Vec<HeroLayer>,
}

impl HeroState {
    /// Apply the backend-reported background filename.
    ///
    /// `None` leaves the banner untouched. A filename sets the background
    /// and inserts the scrim and logo backdrop, each only if not already
    /// present.
    pub fn apply_background(&mut self, filename: Option<&str>) {
        let Some(filename) = filename else {
            return;
        };

        self.background = Some(filename.to_string());
        self.insert_layer(HeroLayer::Scrim);
        self.insert_layer(HeroLayer::LogoBackdrop);
    }

    fn insert_layer(&mut self, layer: HeroLayer) {
        if !self.layers.contains(&layer) {
            self.layers.push(layer);
        }
    }

    /// Decoded pixels arrived for the current background
    pub fn set_handle(&mut self, handle: image::Handle) {
        self.handle = Some(handle);
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    pub fn handle(&self) -> Option<&image::Handle> {
        self.handle.as_ref()
    }

    pub fn layers(&self) -> &[HeroLayer] {
        &self.layers
    }

    pub fn has_layer(&self, layer: HeroLayer) -> bool {
        self.layers.contains(&layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_background_is_a_noop() {
        let mut hero = HeroState::default();
        hero.apply_background(None);
        assert_eq!(hero.background(), None);
        assert!(hero.layers().is_empty());
    }

    #[test]
    fn applying_inserts_each_layer_once() {
        let mut hero = HeroState::default();
        hero.apply_background(Some("sunset.jpg"));
        assert_eq!(hero.layers(), &[HeroLayer::Scrim, HeroLayer::LogoBackdrop]);
    }

    #[test]
    fn reapplying_does_not_duplicate_layers() {
        let mut hero = HeroState::default();
        hero.apply_background(Some("sunset.jpg"));
        hero.apply_background(Some("sunset.jpg"));
        hero.apply_background(Some("dunes.jpg"));

        let scrims = hero.layers().iter().filter(|l| **l == HeroLayer::Scrim).count();
        let backdrops = hero
            .layers()
            .iter()
            .filter(|l| **l == HeroLayer::LogoBackdrop)
            .count();
        assert_eq!((scrims, backdrops), (1, 1));
        assert_eq!(hero.background(), Some("dunes.jpg"));
    }
}
