//! Gallery navigation for the scripture art gallery.
//!
//! Artworks are grouped by book and ordered by the canonical book table
//! ([`grouping`], [`ordering`], [`gallery`]). A single lightbox selection
//! moves within a book group ([`selection`]), the grid grows as the user
//! scrolls ([`reveal`]), and the open artwork is mirrored into a shareable
//! query parameter ([`url_sync`]). [`component`] wires these together behind
//! UI events.

pub mod component;
pub mod config;
pub mod context;
pub mod gallery;
pub mod grouping;
pub mod matching;
pub mod ordering;
pub mod reveal;
pub mod selection;
pub mod url_sync;

pub use component::{GalleryComponent, GalleryView, LightboxView, Notice, SectionView};
pub use config::{ConfigError, GalleryConfig, RevealConfig, UrlConfig};
pub use context::{ContextError, GalleryContext};
pub use gallery::{Gallery, Location};
pub use grouping::group_by_book;
pub use matching::{match_episode, match_playlist, normalize_title, titles_match};
pub use ordering::{arrange, sort_canonical};
pub use reveal::RevealController;
pub use selection::{OpenSelection, Selection, Step, Transition};
pub use url_sync::{MemoryNavigator, NavigationError, Navigator, Query, SyncGuard, UrlSync};
