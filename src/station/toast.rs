// SPDX-License-Identifier: GPL-3.0-only

//! Self-expiring toast notifications

use crate::constants::timing::{TOAST_FADE_IN, TOAST_LIFETIME};
use serde::Serialize;
use std::time::{Duration, Instant};
use tracing::debug;

/// A message shown briefly at the bottom of the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub created: Instant,
}

/// Serializable view of a live toast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToastView {
    pub message: String,
    pub opacity: f32,
}

/// Ordered toasts, oldest first
#[derive(Debug, Clone)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
    lifetime: Duration,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(TOAST_LIFETIME)
    }
}

impl ToastQueue {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            lifetime,
        }
    }

    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }

    pub fn set_lifetime(&mut self, lifetime: Duration) {
        self.lifetime = lifetime;
    }

    /// Append a toast created at `now`
    pub fn push(&mut self, message: impl Into<String>, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let message = message.into();
        debug!(id, %message, "Showing toast");
        self.toasts.push(Toast {
            id,
            message,
            created: now,
        });
        id
    }

    /// Drop every toast whose lifetime has elapsed at `now`
    pub fn expire(&mut self, now: Instant) -> usize {
        let lifetime = self.lifetime;
        let before = self.toasts.len();
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.created) < lifetime);
        before - self.toasts.len()
    }

    pub fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Fade-in opacity in `0.0..=1.0`
    pub fn opacity(toast: &Toast, now: Instant) -> f32 {
        let age = now.saturating_duration_since(toast.created);
        (age.as_secs_f32() / TOAST_FADE_IN.as_secs_f32()).min(1.0)
    }

    pub fn views(&self, now: Instant) -> Vec<ToastView> {
        self.toasts
            .iter()
            .map(|toast| ToastView {
                message: toast.message.clone(),
                opacity: Self::opacity(toast, now),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_lives_exactly_its_lifetime() {
        let start = Instant::now();
        let mut queue = ToastQueue::default();
        queue.push("Restarting...", start);

        assert_eq!(queue.expire(start + Duration::from_millis(1999)), 0);
        assert_eq!(queue.visible().len(), 1);
        assert_eq!(queue.expire(start + Duration::from_millis(2000)), 1);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_expire_keeps_younger_toasts() {
        let start = Instant::now();
        let mut queue = ToastQueue::new(Duration::from_secs(1));
        queue.push("first", start);
        queue.push("second", start + Duration::from_millis(600));

        queue.expire(start + Duration::from_secs(1));
        let left: Vec<&str> = queue.visible().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(left, vec!["second"]);
    }

    #[test]
    fn test_fade_in() {
        let start = Instant::now();
        let mut queue = ToastQueue::default();
        queue.push("hello", start);
        let toast = &queue.visible()[0];

        assert_eq!(ToastQueue::opacity(toast, start), 0.0);
        assert!((ToastQueue::opacity(toast, start + Duration::from_millis(150)) - 0.5).abs() < 0.01);
        assert_eq!(ToastQueue::opacity(toast, start + Duration::from_secs(1)), 1.0);
    }
}
