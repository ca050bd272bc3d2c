//! Scripted gallery sessions against the in-memory router.

use std::fmt;
use std::str::FromStr;

use gallery_core::url_sync::render_url;
use gallery_core::{
    GalleryComponent, GalleryContext, GalleryView, MemoryNavigator, Step, Transition,
};
use gallery_model::ArtworkId;
use serde::Serialize;

/// One user or router event in a scripted session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Open(ArtworkId),
    Next,
    Previous,
    Close,
    Swipe(usize),
    Reveal,
    /// Deliver one pending navigation event from the router.
    Navigate,
}

impl FromStr for SessionEvent {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if let Some(id) = raw.strip_prefix("open:") {
            return ArtworkId::new(id)
                .map(Self::Open)
                .map_err(|error| error.to_string());
        }
        if let Some(index) = raw.strip_prefix("swipe:") {
            return index
                .trim()
                .parse()
                .map(Self::Swipe)
                .map_err(|_| format!("invalid swipe index '{index}'"));
        }
        match raw {
            "next" => Ok(Self::Next),
            "prev" | "previous" => Ok(Self::Previous),
            "close" => Ok(Self::Close),
            "reveal" => Ok(Self::Reveal),
            "nav" => Ok(Self::Navigate),
            other => Err(format!(
                "unknown event '{other}' (expected open:<id>, next, prev, close, swipe:<index>, reveal, nav)"
            )),
        }
    }
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open(id) => write!(f, "open:{id}"),
            Self::Next => f.write_str("next"),
            Self::Previous => f.write_str("prev"),
            Self::Close => f.write_str("close"),
            Self::Swipe(index) => write!(f, "swipe:{index}"),
            Self::Reveal => f.write_str("reveal"),
            Self::Navigate => f.write_str("nav"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionStep {
    pub event: String,
    pub changed: bool,
    /// URL shown by the router after the event.
    pub url: String,
    pub view: GalleryView,
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub initial_url: String,
    pub initial: GalleryView,
    pub steps: Vec<SessionStep>,
    pub history: Vec<String>,
}

/// Mounts a component with `query` as the starting URL and applies `events`.
pub fn run_session(
    context: &GalleryContext,
    query: &[(String, String)],
    is_member: bool,
    events: &[SessionEvent],
) -> SessionReport {
    let navigator = MemoryNavigator::with_query(query.iter().cloned());
    let mut component = GalleryComponent::mount(context, navigator, is_member);
    let path = context.config().url.path.as_str();
    let initial_url = current_url(component.navigator(), path);
    let initial = component.view(context);
    let mut steps = Vec::with_capacity(events.len());
    for event in events {
        let changed = apply_event(&mut component, event);
        let url = current_url(component.navigator(), path);
        steps.push(SessionStep {
            event: event.to_string(),
            changed,
            url,
            view: component.view(context),
        });
    }
    let navigator = component.unmount();
    SessionReport {
        initial_url,
        initial,
        steps,
        history: navigator.history().to_vec(),
    }
}

/// Applies one event; returns whether visible state changed.
pub fn apply_event(component: &mut GalleryComponent<MemoryNavigator>, event: &SessionEvent) -> bool {
    let transition = match event {
        SessionEvent::Open(id) => component.click(id),
        SessionEvent::Next => component.advance(Step::Next),
        SessionEvent::Previous => component.advance(Step::Previous),
        SessionEvent::Close => component.close(),
        SessionEvent::Swipe(index) => component.carousel_settled(*index),
        SessionEvent::Reveal => return component.sentinel_visible(),
        SessionEvent::Navigate => {
            if component.navigator_mut().take_event() {
                component.navigation_event()
            } else {
                Transition::Unchanged
            }
        }
    };
    transition.is_changed()
}

/// The URL the router currently shows.
pub fn current_url(navigator: &MemoryNavigator, path: &str) -> String {
    render_url(path, navigator.query())
}

/// Plain-text rendering of a view.
pub fn describe_view(view: &GalleryView) -> String {
    let mut out = String::new();
    if let Some(notice) = &view.notice {
        out.push_str(&format!("! {notice}\n"));
    }
    for section in &view.sections {
        out.push_str(&format!("{} ({})\n", section.label, section.items.len()));
        for item in &section.items {
            out.push_str(&format!("  {}  {}\n", item.id, item.title));
        }
    }
    out.push_str(&format!(
        "showing {} of {}{}\n",
        view.visible_count,
        view.total_count,
        if view.has_more { " (more below)" } else { "" }
    ));
    match &view.lightbox {
        Some(lightbox) => {
            out.push_str(&format!(
                "lightbox: {} [{} {}/{}] {}\n",
                lightbox.title, lightbox.book_label, lightbox.position, lightbox.count, lightbox.image
            ));
            if let Some(scripture) = &lightbox.scripture {
                out.push_str(&format!("  {scripture}\n"));
            }
        }
        None => out.push_str("lightbox: closed\n"),
    }
    out
}
