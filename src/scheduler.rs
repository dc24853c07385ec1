//! Deferred task scheduling on a virtual clock
//!
//! Every delayed visual step (fade-in, removal from layout, button revert,
//! scroll) is queued here as a `Deferred` task instead of a callback. Time
//! only moves when the owner advances the clock, so sequences are
//! deterministic and testable without sleeping.
//!
//! Each task has a target element. When superseding is on, scheduling a task
//! cancels whatever was still pending for the same target.

use std::time::Duration;

use crate::models::{ActionButtonId, CardId, SectionId};

/// Handle identifying one scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// Element a deferred task acts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerTarget {
    Card(CardId),
    Button(ActionButtonId),
    Section(SectionId),
}

/// A delayed visual step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deferred {
    /// Fade a card in and move it to its resting transform
    RevealCard(CardId),
    /// Take a faded-out card out of layout
    CollapseCard(CardId),
    /// Restore a button's resting face and style
    RevertButton(ActionButtonId),
    /// Scroll an expanded section into view
    ScrollIntoView(SectionId),
}

impl Deferred {
    pub fn target(&self) -> TimerTarget {
        match self {
            Self::RevealCard(id) | Self::CollapseCard(id) => TimerTarget::Card(*id),
            Self::RevertButton(id) => TimerTarget::Button(*id),
            Self::ScrollIntoView(id) => TimerTarget::Section(*id),
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    handle: TimerHandle,
    due: Duration,
    task: Deferred,
}

#[derive(Debug, Clone)]
pub struct Scheduler {
    now: Duration,
    next_handle: u64,
    entries: Vec<Entry>,
    supersede: bool,
}

impl Scheduler {
    pub fn new(supersede: bool) -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 0,
            entries: Vec::new(),
            supersede,
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Whether scheduling cancels a target's pending task
    pub fn supersedes(&self) -> bool {
        self.supersede
    }

    /// Queue a task to run `delay` from now
    pub fn schedule(&mut self, delay: Duration, task: Deferred) -> TimerHandle {
        if self.supersede {
            self.cancel_target(task.target());
        }

        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            due: self.now + delay,
            task,
        });
        handle
    }

    /// Cancel one task; returns false if it already ran or was cancelled
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    /// Cancel every pending task aimed at a target
    pub fn cancel_target(&mut self, target: TimerTarget) -> usize {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.task.target() != target);
        before - self.entries.len()
    }

    pub fn has_pending(&self, target: TimerTarget) -> bool {
        self.entries.iter().any(|entry| entry.task.target() == target)
    }

    /// Pending tasks aimed at a target, earliest first
    pub fn pending_for(&self, target: TimerTarget) -> Vec<Deferred> {
        let mut entries: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|entry| entry.task.target() == target)
            .collect();
        entries.sort_by_key(|entry| (entry.due, entry.handle));
        entries.into_iter().map(|entry| entry.task).collect()
    }

    pub fn pending(&self) -> usize {
        self.entries.len()
    }

    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }

    /// Due time of the earliest pending task
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    /// Remove and return the earliest task due at or before `until`,
    /// moving the clock to its due time. Ties run in scheduling order.
    pub fn pop_due(&mut self, until: Duration) -> Option<Deferred> {
        let idx = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= until)
            .min_by_key(|(_, entry)| (entry.due, entry.handle))
            .map(|(idx, _)| idx)?;

        let entry = self.entries.remove(idx);
        self.now = self.now.max(entry.due);
        Some(entry.task)
    }

    /// Move the clock forward without running anything
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(true)
    }
}
