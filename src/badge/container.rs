// SPDX-License-Identifier: MPL-2.0
//! Attach capability for views that can host badges.

use super::handle::BadgeId;

/// A view badges can be attached to.
pub trait BadgeContainer {
    /// Adds the badge's group to this view's children.
    fn add_badge(&mut self, id: BadgeId);

    /// Removes the badge's group from this view's children.
    fn remove_badge(&mut self, id: BadgeId);

    /// Whether this view accepts children at all. Attach and detach are
    /// no-ops on views that return `false`.
    fn can_host_badges(&self) -> bool {
        true
    }
}

/// Ordered list of attached badges, for views that only need bookkeeping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeSlots {
    attached: Vec<BadgeId>,
}

impl BadgeSlots {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attached badges in attach order (last is drawn on top).
    #[must_use]
    pub fn ids(&self) -> &[BadgeId] {
        &self.attached
    }

    #[must_use]
    pub fn contains(&self, id: BadgeId) -> bool {
        self.attached.contains(&id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }
}

impl BadgeContainer for BadgeSlots {
    fn add_badge(&mut self, id: BadgeId) {
        // Re-adding moves the badge to the front, like re-adding a child view.
        self.attached.retain(|attached| *attached != id);
        self.attached.push(id);
    }

    fn remove_badge(&mut self, id: BadgeId) {
        self.attached.retain(|attached| *attached != id);
    }
}
