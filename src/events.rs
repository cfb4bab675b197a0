//! Event notifications for scatter views.
//!
//! Embedding code subscribes to what the callbacks did via
//! [`EventController`]. Each event carries a set of [`EventKind`] flags so a
//! single occurrence can match several categories (a search that changed the
//! selection is both `SEARCH` and `SELECTION_CHANGED`).
//!
//! An [`EventFilter`] is a simple OR mask: an event is delivered when
//! `(event.kinds & filter) != 0`.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};

// ─────────────────────────────────────────────────────────────────────────────
// EventKind – bitflags
// ─────────────────────────────────────────────────────────────────────────────

/// Bitflags describing the categories an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventKind(pub u64);

impl EventKind {
    // ── Triggers ────────────────────────────────────────────────────────
    /// The search box text changed.
    pub const SEARCH: Self = Self(1 << 0);
    /// A boolean subset was picked from the subset menu.
    pub const SUBSET: Self = Self(1 << 1);
    /// The plotted X/Y columns were switched.
    pub const AXES_CHANGED: Self = Self(1 << 2);
    /// The scatter data was replaced or edited.
    pub const DATA_CHANGED: Self = Self(1 << 3);

    // ── Results ─────────────────────────────────────────────────────────
    /// The selection of the scatter source was replaced.
    pub const SELECTION_CHANGED: Self = Self(1 << 4);
    /// At least one axis range moved.
    pub const RANGE_CHANGED: Self = Self(1 << 5);
    /// The view was fit to the data on request ("zoom to data limits").
    pub const FIT_TO_VIEW: Self = Self(1 << 6);
    /// The selection table was written to a file.
    pub const EXPORT: Self = Self(1 << 7);

    /// Wildcard: matches every event kind.
    pub const ALL: Self = Self(u64::MAX);

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `self` contains all bits in `other`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether `self` has at least one bit in common with `other`.
    #[inline]
    pub const fn intersects(self, other: Self) -> bool {
        (self.0 & other.0) != 0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for EventKind {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for EventKind {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl std::ops::BitAnd for EventKind {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "EMPTY");
        }
        if *self == EventKind::ALL {
            return write!(f, "ALL");
        }

        let pairs: &[(EventKind, &str)] = &[
            (EventKind::SEARCH, "SEARCH"),
            (EventKind::SUBSET, "SUBSET"),
            (EventKind::AXES_CHANGED, "AXES_CHANGED"),
            (EventKind::DATA_CHANGED, "DATA_CHANGED"),
            (EventKind::SELECTION_CHANGED, "SELECTION_CHANGED"),
            (EventKind::RANGE_CHANGED, "RANGE_CHANGED"),
            (EventKind::FIT_TO_VIEW, "FIT_TO_VIEW"),
            (EventKind::EXPORT, "EXPORT"),
        ];

        let mut names = Vec::new();
        let mut known_bits: u64 = 0;
        for (kind, name) in pairs {
            known_bits |= kind.0;
            if self.contains(*kind) {
                names.push((*name).to_string());
            }
        }

        // bits that are not in the list above
        let extra = self.0 & !known_bits;
        if extra != 0 {
            names.push(format!("0x{:x}", extra));
        }
        write!(f, "{}", names.join("|"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Metadata – per-event-type payloads
// ─────────────────────────────────────────────────────────────────────────────

/// Search box contents and what they matched.
#[derive(Debug, Clone)]
pub struct SearchMeta {
    pub query: String,
    pub matches: usize,
}

/// New selection of a data source.
#[derive(Debug, Clone)]
pub struct SelectionMeta {
    pub source: String,
    pub rows: Vec<usize>,
}

/// Axis ranges after a rescale. `None` for an axis that was left unchanged.
#[derive(Debug, Clone)]
pub struct RangeMeta {
    pub x_range: Option<(f64, f64)>,
    pub y_range: Option<(f64, f64)>,
}

/// Columns now plotted on each axis.
#[derive(Debug, Clone)]
pub struct AxesMeta {
    pub x: String,
    pub y: String,
}

#[derive(Debug, Clone)]
pub struct SubsetMeta {
    /// Boolean column, empty for the blank menu entry.
    pub column: String,
}

#[derive(Debug, Clone)]
pub struct ExportMeta {
    pub path: String,
    pub rows: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// ScatterEvent
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct ScatterEvent {
    pub kinds: EventKind,
    /// Seconds since the controller was created; set on emit.
    pub timestamp: f64,

    pub search: Option<SearchMeta>,
    pub selection: Option<SelectionMeta>,
    pub range: Option<RangeMeta>,
    pub axes: Option<AxesMeta>,
    pub subset: Option<SubsetMeta>,
    pub export: Option<ExportMeta>,
}

impl ScatterEvent {
    pub fn new(kinds: EventKind) -> Self {
        Self {
            kinds,
            timestamp: 0.0,
            search: None,
            selection: None,
            range: None,
            axes: None,
            subset: None,
            export: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventFilter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct EventFilter {
    pub mask: EventKind,
}

impl EventFilter {
    pub const fn all() -> Self {
        Self {
            mask: EventKind::ALL,
        }
    }

    pub const fn only(mask: EventKind) -> Self {
        Self { mask }
    }

    #[inline]
    pub fn matches(&self, event: &ScatterEvent) -> bool {
        event.kinds.intersects(self.mask)
    }
}

impl Default for EventFilter {
    fn default() -> Self {
        Self::all()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// EventController
// ─────────────────────────────────────────────────────────────────────────────

struct Subscriber {
    filter: EventFilter,
    sender: Sender<ScatterEvent>,
}

struct EventCtrlInner {
    subscribers: Vec<Subscriber>,
    start_instant: std::time::Instant,
}

/// Fan-out of [`ScatterEvent`]s to channel subscribers.
///
/// Cloning shares the subscriber list, so subscribers may sit on other
/// threads while the callbacks run on the UI thread.
#[derive(Clone)]
pub struct EventController {
    inner: Arc<Mutex<EventCtrlInner>>,
}

impl EventController {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(EventCtrlInner {
                subscribers: Vec::new(),
                start_instant: std::time::Instant::now(),
            })),
        }
    }

    /// Subscribe to events whose kinds intersect the filter mask.
    pub fn subscribe(&self, filter: EventFilter) -> Receiver<ScatterEvent> {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.subscribers.push(Subscriber { filter, sender: tx });
        rx
    }

    pub fn subscribe_all(&self) -> Receiver<ScatterEvent> {
        self.subscribe(EventFilter::all())
    }

    /// Stamp `event` and send it to every matching subscriber.
    ///
    /// Subscribers whose receiver was dropped are pruned the next time an
    /// event matches them.
    pub fn emit(&self, mut event: ScatterEvent) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        event.timestamp = inner.start_instant.elapsed().as_secs_f64();
        inner.subscribers.retain(|sub| {
            if sub.filter.matches(&event) {
                sub.sender.send(event.clone()).is_ok()
            } else {
                true
            }
        });
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .subscribers
            .len()
    }
}

impl Default for EventController {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit tests
// ─────────────────────────────────────────────────────────────────────────────
