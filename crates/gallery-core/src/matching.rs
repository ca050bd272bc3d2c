//! Playlist-to-episode title matching.
//!
//! Playlist titles from the video host rarely equal episode titles exactly
//! ("Ep. 3: The Flood | Official" vs "The Flood"), so both are normalized and
//! compared by substring containment in either direction.
//!
//! This is a heuristic. Known failure modes:
//! - false positives when a short episode title is a substring of an
//!   unrelated longer title ("Ruth" inside "Truth Be Told");
//! - false negatives when the two titles are worded differently.
//!
//! Episodes are tried in the order given and the first hit wins, so callers
//! that care about the first failure mode should list longer titles first.

use gallery_model::{Episode, PlaylistItem};

/// Lowercases, replaces every non-alphanumeric character with a space,
/// collapses whitespace runs, and trims.
pub fn normalize_title(title: &str) -> String {
    let mut spaced = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            spaced.extend(c.to_lowercase());
        } else {
            spaced.push(' ');
        }
    }
    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Whether two titles match after normalization. Empty titles never match.
pub fn titles_match(left: &str, right: &str) -> bool {
    let left = normalize_title(left);
    let right = normalize_title(right);
    if left.is_empty() || right.is_empty() {
        return false;
    }
    left.contains(&right) || right.contains(&left)
}

/// First episode whose title matches the playlist item's title.
pub fn match_episode<'a>(item: &PlaylistItem, episodes: &'a [Episode]) -> Option<&'a Episode> {
    episodes
        .iter()
        .find(|episode| titles_match(&item.title, &episode.title))
}

/// Pairs each playlist item with its matching episode, if any.
pub fn match_playlist<'a, 'b>(
    items: &'a [PlaylistItem],
    episodes: &'b [Episode],
) -> Vec<(&'a PlaylistItem, Option<&'b Episode>)> {
    items
        .iter()
        .map(|item| (item, match_episode(item, episodes)))
        .collect()
}
