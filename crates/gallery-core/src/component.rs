//! The gallery navigation component.
//!
//! Owns the arranged gallery, the lightbox selection, the reveal controller
//! and the URL synchronizer, and turns UI events into state changes. Rendering
//! is left to the caller; [`GalleryComponent::view`] produces a plain render
//! model.

use gallery_content::Translator;
use gallery_model::{ArtworkId, BookId};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::context::GalleryContext;
use crate::gallery::Gallery;
use crate::reveal::RevealController;
use crate::selection::{Selection, Step, Transition};
use crate::url_sync::{Navigator, UrlSync};

pub const CONTENT_UNAVAILABLE_KEY: &str = "gallery.errors.content";
const CONTENT_UNAVAILABLE_TEXT: &str = "Artworks could not be loaded. Please try again later.";

/// User-visible notice shown above the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The content source failed; the gallery is empty.
    ContentUnavailable { detail: String },
}

pub struct GalleryComponent<N: Navigator> {
    gallery: Gallery,
    selection: Selection,
    reveal: RevealController,
    url: UrlSync,
    navigator: N,
    notice: Option<Notice>,
    is_member: bool,
}

impl<N: Navigator> GalleryComponent<N> {
    /// Loads content, arranges it, and applies any selection named in the URL.
    ///
    /// A content failure does not fail the mount: the gallery renders empty
    /// with a [`Notice`].
    pub fn mount(context: &GalleryContext, navigator: N, is_member: bool) -> Self {
        let (gallery, notice) = match context.content().fetch_artworks() {
            Ok(records) => (Gallery::arrange(records, context.order()), None),
            Err(error) => {
                warn!(%error, "failed to load gallery content");
                (
                    Gallery::empty(),
                    Some(Notice::ContentUnavailable {
                        detail: error.to_string(),
                    }),
                )
            }
        };
        let config = context.config();
        let reveal = RevealController::new(
            config.reveal.initial,
            config.reveal.step,
            gallery.artwork_count(),
        );
        let mut component = Self {
            gallery,
            selection: Selection::Closed,
            reveal,
            url: UrlSync::new(&config.url),
            navigator,
            notice,
            is_member,
        };
        component.navigation_event();
        info!(
            book_count = component.gallery.groups().len(),
            artwork_count = component.gallery.artwork_count(),
            selected = component.selection.artwork_id().map(ArtworkId::as_str),
            "gallery mounted"
        );
        component
    }

    /// Thumbnail click.
    pub fn click(&mut self, id: &ArtworkId) -> Transition {
        let transition = self.selection.select(&self.gallery, id);
        self.sync_url(transition);
        transition
    }

    /// Lightbox arrow or keyboard navigation.
    pub fn advance(&mut self, step: Step) -> Transition {
        let transition = self.selection.advance(&self.gallery, step);
        self.sync_url(transition);
        transition
    }

    /// The carousel settled on `index` after a drag or swipe.
    pub fn carousel_settled(&mut self, index: usize) -> Transition {
        let transition = self.selection.carousel_settled(&self.gallery, index);
        self.sync_url(transition);
        transition
    }

    pub fn close(&mut self) -> Transition {
        let transition = self.selection.close();
        self.sync_url(transition);
        transition
    }

    /// The sentinel below the grid entered the viewport.
    pub fn sentinel_visible(&mut self) -> bool {
        let grew = self.reveal.on_sentinel_visible();
        if grew {
            debug!(
                visible = self.reveal.visible_count(),
                total = self.reveal.total(),
                "revealed more artworks"
            );
        }
        grew
    }

    /// The router reported a navigation (query change).
    pub fn navigation_event(&mut self) -> Transition {
        self.url
            .on_navigation(&self.navigator, &self.gallery, &mut self.selection)
    }

    /// Stops the component and hands the router back. Selection is dropped.
    pub fn unmount(self) -> N {
        debug!(
            selected = self.selection.artwork_id().map(ArtworkId::as_str),
            "gallery unmounted"
        );
        self.navigator
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn reveal(&self) -> &RevealController {
        &self.reveal
    }

    pub fn url_sync(&self) -> &UrlSync {
        &self.url
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_member(&self) -> bool {
        self.is_member
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    fn sync_url(&mut self, transition: Transition) {
        if transition.is_changed() {
            self.url
                .on_selection_changed(&mut self.navigator, &self.selection);
        }
    }

    /// Builds the render model for the current state.
    pub fn view(&self, context: &GalleryContext) -> GalleryView {
        let translator = context.translator();
        let config = context.config();
        let mut sections: Vec<SectionView> = Vec::new();
        for (group, artwork) in self.gallery.iter().take(self.reveal.visible_count()) {
            let needs_section = sections.last().is_none_or(|section| section.book != group.book);
            if needs_section {
                sections.push(SectionView {
                    book: group.book.clone(),
                    label: book_label(translator, &group.book),
                    items: Vec::new(),
                });
            }
            if let Some(section) = sections.last_mut() {
                section.items.push(ThumbnailView {
                    id: artwork.id.clone(),
                    title: artwork.title.clone(),
                    section: artwork.section.clone(),
                    image: artwork.image.clone(),
                });
            }
        }

        let lightbox = self.selection.open().and_then(|open| {
            let group = self.gallery.group(open.group)?;
            let artwork = group.get(open.index)?;
            Some(LightboxView {
                id: artwork.id.clone(),
                title: artwork.title.clone(),
                book_label: book_label(translator, &artwork.book),
                section: artwork.section.clone(),
                image: artwork.image.clone(),
                scripture: artwork
                    .scripture
                    .get(&config.locale, &config.fallback_locale)
                    .map(str::to_string),
                position: open.index + 1,
                count: group.len(),
            })
        });

        let notice = self.notice.as_ref().map(|notice| match notice {
            Notice::ContentUnavailable { .. } => {
                translator.t_or(CONTENT_UNAVAILABLE_KEY, CONTENT_UNAVAILABLE_TEXT)
            }
        });

        GalleryView {
            sections,
            lightbox,
            notice,
            is_member: self.is_member,
            visible_count: self.reveal.visible_count(),
            total_count: self.reveal.total(),
            has_more: self.reveal.has_more(),
        }
    }
}

/// Translated book label, falling back to the book id.
pub fn book_label(translator: &dyn Translator, book: &BookId) -> String {
    translator.t_or(&book.label_key(), book.as_str())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalleryView {
    pub sections: Vec<SectionView>,
    pub lightbox: Option<LightboxView>,
    pub notice: Option<String>,
    pub is_member: bool,
    pub visible_count: usize,
    pub total_count: usize,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub book: BookId,
    pub label: String,
    pub items: Vec<ThumbnailView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThumbnailView {
    pub id: ArtworkId,
    pub title: String,
    pub section: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightboxView {
    pub id: ArtworkId,
    pub title: String,
    pub book_label: String,
    pub section: String,
    pub image: String,
    pub scripture: Option<String>,
    /// 1-based position within the book.
    pub position: usize,
    pub count: usize,
}
