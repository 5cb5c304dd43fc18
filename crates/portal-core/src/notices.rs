use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notice {
    pub uuid: Uuid,
    pub message: String,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl Notice {
    pub fn new(message: impl Into<String>, created: DateTime<Utc>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            message: message.into(),
            created,
            read: false,
        }
    }

    /// Coarse relative age for the notification dropdown.
    pub fn age_label(&self, now: DateTime<Utc>) -> String {
        let elapsed = now.signed_duration_since(self.created);
        let minutes = elapsed.num_minutes();
        if minutes < 1 {
            return "just now".to_string();
        }
        if minutes < 60 {
            return format!("{minutes}m ago");
        }
        let hours = elapsed.num_hours();
        if hours < 24 {
            return format!("{hours}h ago");
        }
        format!("{}d ago", elapsed.num_days())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeFeed {
    items: Vec<Notice>,
}

impl NoticeFeed {
    pub fn seeded(items: Vec<Notice>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }

    pub fn push(&mut self, notice: Notice) {
        self.items.push(notice);
    }

    /// Marks one notice read. Idempotent: re-reading an already-read
    /// notice reports no change and leaves the unread count alone.
    pub fn mark_read(&mut self, uuid: Uuid) -> bool {
        let Some(notice) = self.items.iter_mut().find(|n| n.uuid == uuid) else {
            return false;
        };
        if notice.read {
            return false;
        }
        notice.read = true;
        debug!(%uuid, unread = self.unread_count(), "notice marked read");
        true
    }

    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for notice in &mut self.items {
            if !notice.read {
                notice.read = true;
                changed += 1;
            }
        }
        changed
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Badge text, or `None` when the badge should be hidden outright
    /// rather than showing a zero.
    pub fn badge_label(&self) -> Option<String> {
        match self.unread_count() {
            0 => None,
            count => Some(count.to_string()),
        }
    }
}
