//! Playback queue controller.
//!
//! The controller owns the ordered list of records an adapter produced, the
//! play-order permutation over it and a cursor into that permutation. It
//! never talks to the audio path: navigation hands back stream URLs obtained
//! from the adapter, and the caller plays them.
//!
//! State model:
//!   - `items`: records in insertion order,
//!   - `order`: a permutation of `0..items.len()`, identity in NORMAL mode,
//!     a fresh random draw in SHUFFLE mode,
//!   - `cursor`: `None` before the first entry, `Some(k)` on `order[k]`.
//!
//! `order` is rebuilt from scratch after every mutation (enqueue, removal,
//! filter purge, mode change). Under SHUFFLE this re-draws the remaining
//! order each time; callers must not memoize upcoming entries.

use mspsource::{MediaItem, ProviderAdapter, SearchQuery};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};
use std::fmt;
use tracing::{debug, info, warn};

use crate::errors::{QueueError, Result};
use crate::mode::{ExplicitFilter, PlayMode};
use crate::snapshot::{QueueEntry, QueueSnapshot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Forward,
    Backward,
}

pub struct QueueController<A: ProviderAdapter> {
    adapter: A,
    items: Vec<MediaItem>,
    order: Vec<usize>,
    cursor: Option<usize>,
    mode: PlayMode,
    explicit_filter: ExplicitFilter,
    now_playing: Option<MediaItem>,
    rng: StdRng,
}

impl<A: ProviderAdapter> QueueController<A> {
    /// Creates an empty queue in NORMAL mode with explicit records disallowed.
    pub fn new(adapter: A) -> Self {
        Self::with_rng(adapter, StdRng::from_os_rng())
    }

    /// Same as [`QueueController::new`] with a caller-provided random
    /// generator, for reproducible shuffles.
    pub fn with_rng(adapter: A, rng: StdRng) -> Self {
        Self {
            adapter,
            items: Vec::new(),
            order: Vec::new(),
            cursor: None,
            mode: PlayMode::default(),
            explicit_filter: ExplicitFilter::default(),
            now_playing: None,
            rng,
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    pub fn explicit_filter(&self) -> ExplicitFilter {
        self.explicit_filter
    }

    /// Records in insertion order.
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    /// Current play-order permutation.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Position in `order`, `None` before the first entry.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn now_playing(&self) -> Option<&MediaItem> {
        self.now_playing.as_ref()
    }

    pub fn length(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // =====================================================================
    //  ENQUEUE
    // =====================================================================

    /// Appends records produced by the adapter.
    ///
    /// Non-streamable records are rejected, and so are explicit ones while
    /// the filter is DISALLOW. Returns how many records were admitted, or
    /// [`QueueError::EmptyResult`] when none was; the queue is then left as
    /// it was.
    pub fn enqueue(&mut self, items: Vec<MediaItem>) -> Result<usize> {
        let offered = items.len();
        match self.admit(items) {
            0 => Err(QueueError::EmptyResult(format!("{offered} offered item(s)"))),
            admitted => Ok(admitted),
        }
    }

    /// Searches the adapter and enqueues what it returns.
    ///
    /// Search failures are returned unchanged.
    pub fn enqueue_from(&mut self, query: &SearchQuery) -> Result<usize> {
        let found = self.adapter.search(query)?;
        debug!(
            provider = self.adapter.id(),
            query = %query,
            found = found.len(),
            "Search returned"
        );

        match self.admit(found) {
            0 => Err(QueueError::empty_result(query)),
            admitted => Ok(admitted),
        }
    }

    fn admit(&mut self, candidates: Vec<MediaItem>) -> usize {
        let offered = candidates.len();
        let before = self.items.len();

        for item in candidates {
            if !item.streamable {
                debug!(id = item.id.as_str(), "Rejecting non-streamable item");
                continue;
            }
            if !self.explicit_filter.admits(item.explicit) {
                debug!(id = item.id.as_str(), "Rejecting explicit item");
                continue;
            }
            self.items.push(item);
        }

        let admitted = self.items.len() - before;
        if admitted > 0 {
            self.rebuild_order();
        }

        info!(
            provider = self.adapter.id(),
            offered,
            admitted,
            len = self.items.len(),
            "Enqueued items"
        );
        admitted
    }

    // =====================================================================
    //  SETTINGS
    // =====================================================================

    /// Switches between NORMAL and SHUFFLE.
    ///
    /// The cursor is not moved: it keeps its position in the new order, which
    /// generally designates another record than before.
    pub fn set_mode(&mut self, mode: PlayMode) {
        self.mode = mode;
        self.rebuild_order();
    }

    /// Switches the explicit filter.
    ///
    /// Moving to DISALLOW purges the explicit records already queued; moving
    /// to ALLOW does not bring back what was purged or rejected.
    pub fn set_explicit_filter(&mut self, filter: ExplicitFilter) {
        self.explicit_filter = filter;
        if filter == ExplicitFilter::Allow {
            return;
        }

        let before = self.items.len();
        self.items.retain(|item| !item.explicit);
        let removed = before - self.items.len();

        if self.now_playing.as_ref().is_some_and(|item| item.explicit) {
            self.now_playing = None;
        }

        if removed == 0 {
            return;
        }

        self.rebuild_order();
        let len = self.items.len();
        self.cursor = match self.cursor {
            _ if len == 0 => None,
            Some(k) if k >= len => Some(0),
            other => other,
        };
        info!(removed, len, "Purged explicit items");
    }

    fn rebuild_order(&mut self) {
        self.order = (0..self.items.len()).collect();
        if self.mode == PlayMode::Shuffle {
            self.order.shuffle(&mut self.rng);
        }
        debug!(mode = %self.mode, len = self.order.len(), "Rebuilt play order");
    }

    // =====================================================================
    //  NAVIGATION
    // =====================================================================

    /// Advances to the next entry and returns its stream URL.
    ///
    /// Returns `""` on an empty queue, and once after the last entry (the
    /// cursor then goes back before the first entry, so the following call
    /// starts over). Records the adapter fails to resolve with a transient or
    /// invalid error are dropped from the queue and the walk goes on.
    pub fn next_url(&mut self) -> Result<String> {
        self.navigate(Direction::Forward)
    }

    /// Steps back to the previous entry and returns its stream URL.
    ///
    /// Mirror of [`QueueController::next_url`]: returns `""` once when
    /// stepping back from the first entry; from before the first entry it
    /// wraps to the last one.
    pub fn previous_url(&mut self) -> Result<String> {
        self.navigate(Direction::Backward)
    }

    /// Resolves the entry at 1-based `position` in play order and moves the
    /// cursor there, or resolves the current entry when `position` is `None`.
    pub fn get_url(&mut self, position: Option<usize>) -> Result<String> {
        let len = self.items.len();
        if len == 0 {
            return Ok(String::new());
        }

        let target = match position {
            Some(p) if (1..=len).contains(&p) => p - 1,
            Some(p) => return Err(QueueError::InvalidPosition { position: p, len }),
            None => match self.cursor {
                Some(k) if k < len => k,
                _ => return Ok(String::new()),
            },
        };

        self.cursor = Some(target);
        match self.resolve_at(target, Direction::Forward)? {
            Some(url) => Ok(url),
            // The record was dropped; carry on with the one that followed it.
            None => self.navigate(Direction::Forward),
        }
    }

    fn navigate(&mut self, direction: Direction) -> Result<String> {
        // Every failed attempt removes one record, so this runs at most
        // `len` resolutions before the queue is exhausted.
        loop {
            let len = self.items.len();
            if len == 0 {
                self.cursor = None;
                self.now_playing = None;
                return Ok(String::new());
            }

            let step = match (direction, self.cursor) {
                (Direction::Forward, None) => Some(0),
                (Direction::Forward, Some(k)) => (k + 1 < len).then_some(k + 1),
                (Direction::Backward, None) => Some(len - 1),
                (Direction::Backward, Some(k)) => (k > 0).then(|| (k - 1).min(len - 1)),
            };
            self.cursor = step;

            let Some(position) = step else {
                debug!(?direction, len, "Crossed queue boundary, wrapping");
                self.now_playing = None;
                return Ok(String::new());
            };

            if let Some(url) = self.resolve_at(position, direction)? {
                return Ok(url);
            }
        }
    }

    /// Resolves `order[position]`.
    ///
    /// `Ok(None)` means the record was skipped: it has been removed and the
    /// cursor placed so that the next step in `direction` lands on the record
    /// that followed it.
    fn resolve_at(&mut self, position: usize, direction: Direction) -> Result<Option<String>> {
        let index = self.order[position];
        let record = self.items[index].clone();
        self.now_playing = Some(record.clone());

        match self.adapter.resolve(&record) {
            Ok(resolution) => {
                let stored = &mut self.items[index];
                if let Some(update) = &resolution.record {
                    stored.merge_display(update);
                }
                stored.resolved_url = Some(resolution.url.clone());
                self.now_playing = Some(stored.clone());

                debug!(
                    position,
                    index,
                    id = record.id.as_str(),
                    "Resolved queue entry"
                );
                Ok(Some(resolution.url))
            }
            Err(err) if err.is_skippable() => {
                warn!(
                    provider = self.adapter.id(),
                    id = record.id.as_str(),
                    title = record.title.as_str(),
                    error = %err,
                    "Dropping unresolvable item"
                );
                self.items.remove(index);
                self.now_playing = None;
                self.rebuild_order();

                let len = self.items.len();
                self.cursor = match direction {
                    Direction::Forward => position.checked_sub(1),
                    Direction::Backward if len == 0 => None,
                    Direction::Backward => Some(position),
                };
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    // =====================================================================
    //  EDITING
    // =====================================================================

    /// Removes the record currently designated by the cursor.
    ///
    /// The cursor steps back by one so that the next `next_url` plays the
    /// record that followed the removed one (in NORMAL mode). Removing the
    /// first entry in play order returns the cursor to before-first, even
    /// when other entries remain. Returns `None` when the cursor is not on
    /// an entry.
    pub fn remove_current(&mut self) -> Option<MediaItem> {
        let position = self.cursor.filter(|&k| k < self.items.len())?;
        let index = self.order[position];
        let removed = self.items.remove(index);

        self.cursor = position.checked_sub(1);
        self.now_playing = None;
        self.rebuild_order();

        info!(
            id = removed.id.as_str(),
            position,
            len = self.items.len(),
            "Removed current item"
        );
        Some(removed)
    }

    /// Empties the queue. Play mode and filter are kept.
    pub fn clear(&mut self) {
        self.items.clear();
        self.order.clear();
        self.cursor = None;
        self.now_playing = None;
        debug!("Cleared queue");
    }

    // =====================================================================
    //  NOW PLAYING
    // =====================================================================

    /// Asks the adapter for fresher display metadata about the current
    /// record and merges it in. Returns whether anything was merged.
    pub fn refresh_now_playing(&mut self) -> Result<bool> {
        let Some(current) = self.now_playing.clone() else {
            return Ok(false);
        };
        let Some(update) = self.adapter.describe_now_playing(&current)? else {
            return Ok(false);
        };

        if let Some(index) = self.cursor.and_then(|k| self.order.get(k).copied()) {
            if self.items[index].id == current.id {
                self.items[index].merge_display(&update);
            }
        }
        if let Some(now_playing) = self.now_playing.as_mut() {
            now_playing.merge_display(&update);
        }
        Ok(true)
    }

    /// 1-based insertion position of the record under the cursor, 0 when
    /// the cursor is not on an entry.
    pub fn queue_position_one_based(&self) -> usize {
        self.cursor
            .and_then(|k| self.order.get(k))
            .map_or(0, |index| index + 1)
    }

    fn current<T: Default>(&self, field: impl FnOnce(&MediaItem) -> Option<T>) -> T {
        self.now_playing
            .as_ref()
            .and_then(field)
            .unwrap_or_default()
    }

    pub fn current_id(&self) -> String {
        self.current(|item| Some(item.id.clone()))
    }

    pub fn current_title(&self) -> String {
        self.current(|item| Some(item.title.clone()))
    }

    pub fn current_artist(&self) -> String {
        self.current(|item| Some(item.artist.clone()))
    }

    pub fn current_album(&self) -> String {
        self.current(|item| item.container.clone())
    }

    pub fn current_duration_ms(&self) -> u64 {
        self.current(|item| item.duration_ms)
    }

    pub fn current_year(&self) -> u32 {
        self.current(MediaItem::year)
    }

    pub fn current_release_date(&self) -> String {
        self.current(|item| item.release_date.clone())
    }

    pub fn current_thumbnail_url(&self) -> String {
        self.current(|item| item.thumbnail_url.clone())
    }

    pub fn current_description(&self) -> String {
        self.current(|item| item.description.clone())
    }

    pub fn current_genre(&self) -> String {
        self.current(|item| item.genre.clone())
    }

    pub fn current_codec(&self) -> String {
        self.current(|item| item.codec.clone())
    }

    pub fn current_bitrate(&self) -> u32 {
        self.current(|item| item.bitrate_kbps)
    }

    pub fn current_explicit(&self) -> bool {
        self.current(|item| Some(item.explicit))
    }

    /// Stream URL the adapter produced for the current record.
    pub fn current_url(&self) -> String {
        self.current(|item| item.resolved_url.clone())
    }

    pub fn current_station_name(&self) -> String {
        self.current(|item| item.station_name().map(str::to_string))
    }

    pub fn current_station_city(&self) -> String {
        self.current(|item| item.origin.city.clone())
    }

    pub fn current_station_state(&self) -> String {
        self.current(|item| item.origin.state.clone())
    }

    pub fn current_station_country(&self) -> String {
        self.current(|item| item.origin.country.clone())
    }

    pub fn current_station_website(&self) -> String {
        self.current(|item| item.origin.website.clone())
    }

    /// Provider-specific display field (`permalink`, `license`, ...).
    pub fn current_extra(&self, key: &str) -> String {
        self.current(|item| item.extra.get(key).cloned())
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        let entries = self
            .order
            .iter()
            .enumerate()
            .map(|(position, &index)| QueueEntry {
                position: position + 1,
                queue_position: index + 1,
                item: self.items[index].clone(),
            })
            .collect();

        QueueSnapshot {
            entries,
            current_index: self.cursor.filter(|&k| k < self.items.len()),
            mode: self.mode,
            explicit_filter: self.explicit_filter,
        }
    }
}

impl<A: ProviderAdapter> fmt::Debug for QueueController<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueueController")
            .field("adapter", &self.adapter)
            .field("len", &self.items.len())
            .field("order", &self.order)
            .field("cursor", &self.cursor)
            .field("mode", &self.mode)
            .field("explicit_filter", &self.explicit_filter)
            .field("now_playing", &self.now_playing.as_ref().map(|i| i.id.as_str()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mspsource::{Resolution, SourceError};
    use std::cell::RefCell;
    use std::collections::HashSet;

    #[derive(Debug, Default)]
    struct Stub {
        fatal: HashSet<String>,
        gone: HashSet<String>,
        calls: RefCell<Vec<String>>,
    }

    impl ProviderAdapter for Stub {
        fn name(&self) -> &str {
            "Stub"
        }

        fn id(&self) -> &str {
            "stub"
        }

        fn search(&self, _query: &SearchQuery) -> mspsource::Result<Vec<MediaItem>> {
            Ok(Vec::new())
        }

        fn resolve(&self, item: &MediaItem) -> mspsource::Result<Resolution> {
            self.calls.borrow_mut().push(item.id.clone());
            if self.fatal.contains(&item.id) {
                return Err(SourceError::AuthenticationFailed("token expired".into()));
            }
            if self.gone.contains(&item.id) {
                return Err(SourceError::invalid(item.id.clone()));
            }
            Ok(Resolution::url(format!("url:{}", item.id)))
        }
    }

    fn item(id: &str) -> MediaItem {
        MediaItem::new(id, format!("Title {id}"), "Artist")
    }

    fn items(ids: &[&str]) -> Vec<MediaItem> {
        ids.iter().map(|id| item(id)).collect()
    }

    fn controller(stub: Stub) -> QueueController<Stub> {
        QueueController::with_rng(stub, StdRng::seed_from_u64(7))
    }

    #[test]
    fn new_queue_is_empty_and_before_first() {
        let mut q = controller(Stub::default());
        assert_eq!(q.length(), 0);
        assert_eq!(q.cursor(), None);
        assert_eq!(q.mode(), PlayMode::Normal);
        assert_eq!(q.explicit_filter(), ExplicitFilter::Disallow);
        assert_eq!(q.next_url().unwrap(), "");
        assert_eq!(q.previous_url().unwrap(), "");
        assert_eq!(q.get_url(None).unwrap(), "");
        assert_eq!(q.current_title(), "");
        assert_eq!(q.current_duration_ms(), 0);
        assert_eq!(q.queue_position_one_based(), 0);
    }

    #[test]
    fn enqueue_rejects_non_streamable() {
        let mut q = controller(Stub::default());
        let mut batch = items(&["a", "b"]);
        batch[1].streamable = false;

        assert_eq!(q.enqueue(batch).unwrap(), 1);
        assert!(q.items().iter().all(|i| i.streamable));
        assert_eq!(q.cursor(), None);
    }

    #[test]
    fn enqueue_of_nothing_is_an_empty_result() {
        let mut q = controller(Stub::default());
        q.enqueue(items(&["a"])).unwrap();
        q.next_url().unwrap();

        let err = q.enqueue(vec![item("x").with_streamable(false)]).unwrap_err();
        assert!(err.is_empty_result());
        assert_eq!(q.length(), 1);
        assert_eq!(q.cursor(), Some(0));
    }

    #[test]
    fn previous_wraps_symmetrically() {
        let mut q = controller(Stub::default());
        q.enqueue(items(&["a", "b", "c"])).unwrap();

        assert_eq!(q.previous_url().unwrap(), "url:c");
        assert_eq!(q.previous_url().unwrap(), "url:b");
        assert_eq!(q.previous_url().unwrap(), "url:a");
        assert_eq!(q.previous_url().unwrap(), "");
        assert_eq!(q.cursor(), None);
        assert_eq!(q.current_title(), "");
        assert_eq!(q.previous_url().unwrap(), "url:c");
    }

    #[test]
    fn get_url_moves_cursor() {
        let mut q = controller(Stub::default());
        q.enqueue(items(&["a", "b", "c"])).unwrap();

        assert_eq!(q.get_url(Some(2)).unwrap(), "url:b");
        assert_eq!(q.cursor(), Some(1));
        assert_eq!(q.get_url(None).unwrap(), "url:b");
        assert_eq!(q.next_url().unwrap(), "url:c");

        let err = q.get_url(Some(4)).unwrap_err();
        assert!(matches!(err, QueueError::InvalidPosition { position: 4, len: 3 }));
        let err = q.get_url(Some(0)).unwrap_err();
        assert!(matches!(err, QueueError::InvalidPosition { position: 0, .. }));
        assert_eq!(q.cursor(), Some(2));
    }

    #[test]
    fn get_url_skips_to_following_item() {
        let mut stub = Stub::default();
        stub.gone.insert("b".into());
        let mut q = controller(stub);
        q.enqueue(items(&["a", "b", "c"])).unwrap();

        assert_eq!(q.get_url(Some(2)).unwrap(), "url:c");
        assert_eq!(q.length(), 2);
        assert_eq!(q.queue_position_one_based(), 2);
    }

    #[test]
    fn backward_skip_continues_backward() {
        let mut stub = Stub::default();
        stub.gone.insert("b".into());
        let mut q = controller(stub);
        q.enqueue(items(&["a", "b", "c"])).unwrap();

        assert_eq!(q.previous_url().unwrap(), "url:c");
        assert_eq!(q.previous_url().unwrap(), "url:a");
        assert_eq!(q.length(), 2);
    }

    #[test]
    fn backward_skip_of_last_item() {
        let mut stub = Stub::default();
        stub.gone.insert("c".into());
        let mut q = controller(stub);
        q.enqueue(items(&["a", "b", "c"])).unwrap();

        assert_eq!(q.previous_url().unwrap(), "url:b");
        assert_eq!(q.cursor(), Some(1));
        assert_eq!(q.length(), 2);
    }

    #[test]
    fn fatal_resolution_propagates_without_dropping() {
        let mut stub = Stub::default();
        stub.fatal.insert("b".into());
        let mut q = controller(stub);
        q.enqueue(items(&["a", "b", "c"])).unwrap();

        q.next_url().unwrap();
        let err = q.next_url().unwrap_err();
        assert!(err.is_auth_error());
        assert_eq!(q.length(), 3);
        assert_eq!(q.cursor(), Some(1));
        assert_eq!(q.current_id(), "b");
    }

    #[test]
    fn resolved_url_is_recorded() {
        let mut q = controller(Stub::default());
        q.enqueue(items(&["a"])).unwrap();
        q.next_url().unwrap();

        assert_eq!(q.current_url(), "url:a");
        assert_eq!(q.items()[0].resolved_url.as_deref(), Some("url:a"));
    }

    #[test]
    fn disallow_purge_clamps_cursor() {
        let mut q = controller(Stub::default());
        q.set_explicit_filter(ExplicitFilter::Allow);
        let mut batch = items(&["a", "b", "c", "d"]);
        batch[2].explicit = true;
        batch[3].explicit = true;
        q.enqueue(batch).unwrap();

        q.get_url(Some(4)).unwrap();
        assert_eq!(q.cursor(), Some(3));

        q.set_explicit_filter(ExplicitFilter::Disallow);
        assert_eq!(q.length(), 2);
        assert_eq!(q.cursor(), Some(0));
        assert_eq!(q.current_title(), "");
        assert!(q.items().iter().all(|i| !i.explicit));
    }

    #[test]
    fn disallow_purge_of_everything_resets_cursor() {
        let mut q = controller(Stub::default());
        q.set_explicit_filter(ExplicitFilter::Allow);
        q.enqueue(vec![item("a").with_explicit(true)]).unwrap();
        q.next_url().unwrap();

        q.set_explicit_filter(ExplicitFilter::Disallow);
        assert!(q.is_empty());
        assert_eq!(q.cursor(), None);
        assert_eq!(q.order(), &[] as &[usize]);
    }

    #[test]
    fn remove_current_takes_the_playing_record_under_shuffle() {
        let mut q = controller(Stub::default());
        q.enqueue(items(&["a", "b", "c", "d", "e"])).unwrap();
        q.set_mode(PlayMode::Shuffle);

        q.next_url().unwrap();
        q.next_url().unwrap();
        let playing = q.current_id();

        let removed = q.remove_current().unwrap();
        assert_eq!(removed.id, playing);
        assert_eq!(q.length(), 4);
        assert!(q.items().iter().all(|i| i.id != playing));
        assert_eq!(q.cursor(), Some(0));
        assert_eq!(q.current_id(), "");
    }

    #[test]
    fn remove_current_without_cursor_is_a_no_op() {
        let mut q = controller(Stub::default());
        q.enqueue(items(&["a"])).unwrap();
        assert!(q.remove_current().is_none());
        assert_eq!(q.length(), 1);

        q.next_url().unwrap();
        assert!(q.remove_current().is_some());
        assert!(q.is_empty());
        assert_eq!(q.cursor(), None);
    }

    #[test]
    fn set_mode_keeps_cursor_position() {
        let mut q = controller(Stub::default());
        q.enqueue(items(&["a", "b", "c", "d"])).unwrap();
        q.next_url().unwrap();
        q.next_url().unwrap();

        q.set_mode(PlayMode::Shuffle);
        assert_eq!(q.cursor(), Some(1));

        let mut sorted = q.order().to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![0, 1, 2, 3]);
    }

    #[test]
    fn snapshot_follows_play_order() {
        let mut q = controller(Stub::default());
        q.enqueue(items(&["a", "b", "c"])).unwrap();
        q.set_mode(PlayMode::Shuffle);
        q.next_url().unwrap();

        let snapshot = q.snapshot();
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.current_index, Some(0));
        let first = snapshot.current().unwrap();
        assert_eq!(first.item.id, q.current_id());
        assert_eq!(first.queue_position, q.queue_position_one_based());
        for (entry, &index) in snapshot.entries.iter().zip(q.order()) {
            assert_eq!(entry.item.id, q.items()[index].id);
        }
        assert!(snapshot.to_json().unwrap().contains("\"SHUFFLE\""));
        assert!(snapshot.lines()[0].starts_with('>'));
    }

    #[test]
    fn snapshot_json_uses_the_queue_error_type() -> Result<()> {
        let mut q = controller(Stub::default());
        q.enqueue(items(&["a"]))?;

        let json: String = q.snapshot().to_json()?;
        let value: serde_json::Value = serde_json::from_str(&json).map_err(QueueError::from)?;
        assert_eq!(value["mode"], "NORMAL");
        assert_eq!(value["entries"][0]["item"]["id"], "a");
        assert!(value["current_index"].is_null());
        Ok(())
    }
}
