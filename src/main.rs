use std::collections::HashMap;

use iced::widget::{column, container, image, scrollable, text};
use iced::{keyboard, Element, Length, Subscription, Task, Theme};
use tracing::{debug, info, warn};

mod api;
mod state;
mod ui;
mod viewer;

use api::{ApiClient, ApiError};
use state::data::{BackgroundImage, Category, ImageRecord};
use state::filter::FilterState;
use state::gallery::Gallery;
use state::hero::HeroState;
use state::lightbox::Lightbox;

/// Main application state
struct Portfolio {
    /// Backend access
    api: ApiClient,
    /// Category filter controls and the single active key
    filters: FilterState,
    /// Grid load lifecycle
    gallery: Gallery,
    /// Hero banner background and decorations
    hero: HeroState,
    /// Modal overlay, at most one open
    lightbox: Lightbox,
    /// Fetched asset bytes, keyed by filename
    thumbnails: HashMap<String, image::Handle>,
    /// Monotonic counter for portfolio loads; completions from an older
    /// generation are discarded so a slow response can never overwrite a
    /// newer filter's results
    generation: u64,
    /// Status line shown under the grid
    status: String,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Category metadata settled
    CategoriesLoaded(Result<Vec<Category>, ApiError>),
    /// A portfolio load settled; `generation` identifies which request
    PortfolioLoaded {
        generation: u64,
        result: Result<Vec<ImageRecord>, ApiError>,
    },
    /// Background metadata settled
    BackgroundLoaded(Result<Option<BackgroundImage>, ApiError>),
    /// Pixel bytes arrived for one grid asset
    ThumbnailFetched {
        filename: String,
        result: Result<Vec<u8>, ApiError>,
    },
    /// Pixel bytes arrived for the hero background
    BackgroundFetched(Result<Vec<u8>, ApiError>),
    /// User clicked a filter control
    FilterSelected(String),
    /// User clicked a grid tile
    ImageClicked(ImageRecord),
    /// Backdrop click, close button, or Escape
    LightboxDismissed,
    /// User asked for the external full-resolution view
    OpenHighRes { url: String, title: String },
    /// The external view either opened or failed; never fatal
    HighResOpened(Result<(), String>),
}

impl Portfolio {
    /// Create the application and kick off the three initial loads.
    /// They are independent and may settle in any order.
    fn new() -> (Self, Task<Message>) {
        let api = ApiClient::from_env();

        let mut portfolio = Portfolio {
            api,
            filters: FilterState::new(),
            gallery: Gallery::default(),
            hero: HeroState::default(),
            lightbox: Lightbox::default(),
            thumbnails: HashMap::new(),
            generation: 0,
            status: "Loading portfolio...".to_string(),
        };

        let categories = {
            let api = portfolio.api.clone();
            Task::perform(async move { api.categories().await }, Message::CategoriesLoaded)
        };
        let background = {
            let api = portfolio.api.clone();
            Task::perform(async move { api.background().await }, Message::BackgroundLoaded)
        };
        let portfolio_load = portfolio.load_portfolio();

        (portfolio, Task::batch([categories, portfolio_load, background]))
    }

    /// Start a portfolio load scoped to the active filter
    fn load_portfolio(&mut self) -> Task<Message> {
        self.generation += 1;
        let generation = self.generation;
        self.gallery.begin_load();

        let api = self.api.clone();
        let filter = self.filters.active().to_string();
        debug!(%filter, generation, "loading portfolio");

        Task::perform(async move { api.portfolio(&filter).await }, move |result| {
            Message::PortfolioLoaded { generation, result }
        })
    }

    /// Fetch bytes for any loaded record whose thumbnail is not cached yet
    fn fetch_missing_thumbnails(&self) -> Task<Message> {
        let pending: Vec<String> = self
            .gallery
            .images()
            .iter()
            .map(|record| record.filename.clone())
            .filter(|filename| !self.thumbnails.contains_key(filename))
            .collect();

        Task::batch(pending.into_iter().map(|filename| {
            let api = self.api.clone();
            let name = filename.clone();
            Task::perform(async move { api.fetch_asset(&name).await }, move |result| {
                Message::ThumbnailFetched {
                    filename: filename.clone(),
                    result,
                }
            })
        }))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CategoriesLoaded(Ok(categories)) => {
                info!(count = categories.len(), "categories loaded");
                self.filters.register_categories(&categories);
                Task::none()
            }
            Message::CategoriesLoaded(Err(err)) => {
                // The grid still works unfiltered; only the controls are
                // missing
                warn!(%err, "failed to load categories");
                Task::none()
            }

            Message::PortfolioLoaded { generation, result } => {
                if generation != self.generation {
                    debug!(generation, current = self.generation, "discarding stale portfolio response");
                    return Task::none();
                }
                match &result {
                    Ok(images) => {
                        info!(count = images.len(), "portfolio loaded");
                        self.status = format!("{} images", images.len());
                    }
                    Err(err) => {
                        warn!(%err, "failed to load portfolio");
                        self.status = "Unable to load portfolio".to_string();
                    }
                }
                self.gallery.finish(result);
                self.fetch_missing_thumbnails()
            }

            Message::BackgroundLoaded(Ok(Some(background))) => {
                self.hero.apply_background(Some(&background.filename));
                let api = self.api.clone();
                Task::perform(
                    async move { api.fetch_asset(&background.filename).await },
                    Message::BackgroundFetched,
                )
            }
            Message::BackgroundLoaded(Ok(None)) => Task::none(),
            Message::BackgroundLoaded(Err(err)) => {
                // A missing banner never blocks the gallery
                warn!(%err, "failed to load background");
                Task::none()
            }

            Message::ThumbnailFetched { filename, result } => {
                match result {
                    Ok(bytes) => {
                        self.thumbnails
                            .insert(filename, image::Handle::from_bytes(bytes));
                    }
                    Err(err) => warn!(%filename, %err, "failed to fetch thumbnail"),
                }
                Task::none()
            }
            Message::BackgroundFetched(Ok(bytes)) => {
                self.hero.set_handle(image::Handle::from_bytes(bytes));
                Task::none()
            }
            Message::BackgroundFetched(Err(err)) => {
                warn!(%err, "failed to fetch background asset");
                Task::none()
            }

            Message::FilterSelected(key) => match self.filters.activate(&key) {
                Ok(()) => self.load_portfolio(),
                Err(err) => {
                    // Unknown control; leave the page as it is
                    warn!(%err, "ignoring filter selection");
                    Task::none()
                }
            },

            Message::ImageClicked(record) => {
                self.lightbox.open(&record);
                Task::none()
            }
            Message::LightboxDismissed => {
                self.lightbox.close();
                Task::none()
            }

            Message::OpenHighRes { url, title } => {
                Task::perform(viewer::open_high_res(url, title), Message::HighResOpened)
            }
            Message::HighResOpened(Ok(())) => Task::none(),
            Message::HighResOpened(Err(err)) => {
                warn!(%err, "failed to open high-resolution view");
                Task::none()
            }
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let grid = ui::gallery::view(&self.gallery, self.filters.active(), &self.thumbnails);

        let base: Element<'_, Message> = column![
            ui::hero::view(&self.hero),
            container(ui::filters::view(&self.filters))
                .padding([16.0, 24.0])
                .center_x(Length::Fill),
            scrollable(container(grid).padding(24).width(Length::Fill)).height(Length::Fill),
            container(text(&self.status).size(13).color(ui::MUTED)).padding([6.0, 24.0]),
        ]
        .into();

        match self.lightbox.content() {
            Some(content) => ui::lightbox::overlay(
                base,
                content,
                self.thumbnails.get(&content.filename),
                self.api.asset_url(&content.filename),
            ),
            None => base,
        }
    }

    /// The Escape listener exists exactly while an overlay does; closing by
    /// any path drops it with the state it watched.
    fn subscription(&self) -> Subscription<Message> {
        if self.lightbox.is_open() {
            keyboard::on_key_press(|key, _modifiers| match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => {
                    Some(Message::LightboxDismissed)
                }
                _ => None,
            })
        } else {
            Subscription::none()
        }
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("portfolio_gallery=info")),
        )
        .init();

    iced::application("Portfolio Gallery", Portfolio::update, Portfolio::view)
        .subscription(Portfolio::subscription)
        .theme(Portfolio::theme)
        .window_size((1280.0, 900.0))
        .centered()
        .run_with(Portfolio::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::gallery::Presentation;

    fn category(name: &str) -> Category {
        Category { name: name.into() }
    }

    fn record(name: &str, categories: &[&str]) -> ImageRecord {
        ImageRecord {
            filename: format!("{name}.jpg"),
            title: Some(name.to_string()),
            original_filename: format!("{name}_orig.jpg"),
            description: Some(format!("{name} description")),
            categories: categories.iter().map(|c| category(c)).collect(),
        }
    }

    fn app() -> Portfolio {
        let (app, _tasks) = Portfolio::new();
        app
    }

    #[test]
    fn filter_click_scopes_grid_then_lightbox_opens_and_escape_clears_it() {
        let mut app = app();
        let weddings_a = record("first-dance", &["Weddings"]);
        let weddings_b = record("bouquet", &["Weddings"]);
        let event = record("keynote", &["Events"]);

        let _ = app.update(Message::CategoriesLoaded(Ok(vec![
            category("Weddings"),
            category("Events"),
        ])));
        let _ = app.update(Message::PortfolioLoaded {
            generation: app.generation,
            result: Ok(vec![weddings_a.clone(), weddings_b.clone(), event]),
        });
        assert_eq!(app.gallery.images().len(), 3);

        let _ = app.update(Message::FilterSelected("weddings".into()));
        assert_eq!(app.filters.active(), "weddings");
        let _ = app.update(Message::PortfolioLoaded {
            generation: app.generation,
            result: Ok(vec![weddings_a.clone(), weddings_b]),
        });

        let tiles = app.gallery.images();
        assert_eq!(tiles.len(), 2);
        assert!(tiles.iter().all(|tile| tile.has_category("weddings")));

        let _ = app.update(Message::ImageClicked(weddings_a.clone()));
        assert!(app.lightbox.is_open());
        let content = app.lightbox.content().unwrap();
        assert_eq!(content.title, "first-dance");
        assert_eq!(content.caption.as_deref(), Some("first-dance description"));

        // Escape routes to dismissal through the keyboard subscription
        let _ = app.update(Message::LightboxDismissed);
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn stale_portfolio_response_is_discarded() {
        let mut app = app();
        let _ = app.update(Message::CategoriesLoaded(Ok(vec![
            category("Weddings"),
            category("Events"),
        ])));
        let first_generation = app.generation;

        // Second filter click before the first load settled
        let _ = app.update(Message::FilterSelected("events".into()));
        let _ = app.update(Message::PortfolioLoaded {
            generation: app.generation,
            result: Ok(vec![record("keynote", &["Events"])]),
        });

        // The older response arrives last and must not win
        let _ = app.update(Message::PortfolioLoaded {
            generation: first_generation,
            result: Ok(vec![
                record("first-dance", &["Weddings"]),
                record("bouquet", &["Weddings"]),
                record("keynote", &["Events"]),
            ]),
        });

        assert_eq!(app.gallery.images().len(), 1);
        assert!(app.gallery.images()[0].has_category("events"));
    }

    #[test]
    fn unknown_filter_key_leaves_page_intact() {
        let mut app = app();
        let _ = app.update(Message::CategoriesLoaded(Ok(vec![category("Weddings")])));
        let _ = app.update(Message::PortfolioLoaded {
            generation: app.generation,
            result: Ok(vec![record("first-dance", &["Weddings"])]),
        });

        let _ = app.update(Message::FilterSelected("landscapes".into()));

        assert_eq!(app.filters.active(), "all");
        assert_eq!(app.gallery.images().len(), 1);
    }

    #[test]
    fn background_failure_does_not_block_the_gallery() {
        let mut app = app();
        let _ = app.update(Message::BackgroundLoaded(Err(ApiError::Status(500))));
        let _ = app.update(Message::PortfolioLoaded {
            generation: app.generation,
            result: Ok(vec![record("first-dance", &["Weddings"])]),
        });

        assert!(matches!(app.gallery.presentation(), Presentation::Tiles(_)));
        assert!(app.hero.background().is_none());
    }

    #[test]
    fn repeated_background_responses_keep_one_of_each_layer() {
        let mut app = app();
        for _ in 0..3 {
            let _ = app.update(Message::BackgroundLoaded(Ok(Some(BackgroundImage {
                filename: "sunset.jpg".into(),
            }))));
        }
        assert_eq!(app.hero.layers().len(), 2);
    }

    #[test]
    fn lightbox_cycles_end_closed_with_no_keyboard_listener_needed() {
        let mut app = app();
        let rec = record("first-dance", &["Weddings"]);
        for _ in 0..4 {
            let _ = app.update(Message::ImageClicked(rec.clone()));
            assert!(app.lightbox.is_open());
            let _ = app.update(Message::LightboxDismissed);
            // Subscription is derived from this flag, so no listener
            // outlives the overlay
            assert!(!app.lightbox.is_open());
        }
    }

    #[test]
    fn thumbnail_bytes_are_cached_by_filename() {
        let mut app = app();
        let _ = app.update(Message::ThumbnailFetched {
            filename: "a.jpg".into(),
            result: Ok(vec![0xFF, 0xD8, 0xFF]),
        });
        assert!(app.thumbnails.contains_key("a.jpg"));

        let _ = app.update(Message::ThumbnailFetched {
            filename: "b.jpg".into(),
            result: Err(ApiError::Network("connection reset".into())),
        });
        assert!(!app.thumbnails.contains_key("b.jpg"));
    }
}
