/// State management module
///
/// This module owns all page-level state as explicit values, including:
/// - Wire data structures shared with the API layer (data.rs)
/// - The active category filter (filter.rs)
/// - The grid's load/empty/error lifecycle (gallery.rs)
/// - Hero banner background and decoration layers (hero.rs)
/// - The modal lightbox state machine (lightbox.rs)

pub mod data;
pub mod filter;
pub mod gallery;
pub mod hero;
pub mod lightbox;
