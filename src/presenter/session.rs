//! Dashboard session state: the login gate and the activity log.
//!
//! The gate does not validate anything; any non-empty name opens it. State
//! lives in memory for the lifetime of the server.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One user action recorded by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEntry {
    pub at: DateTime<Utc>,
    pub user: Option<String>,
    pub action: String,
}

#[derive(Debug, Default)]
pub struct Session {
    user: Option<String>,
    activity: Vec<ActivityEntry>,
}

impl Session {
    /// Opens the gate for `user`. Returns `false`, leaving the gate as it
    /// was, when the name is blank.
    pub fn login(&mut self, user: &str) -> bool {
        let user = user.trim();
        if user.is_empty() {
            return false;
        }
        self.user = Some(user.to_string());
        self.record("login");
        true
    }

    pub fn logout(&mut self) {
        if self.user.is_some() {
            self.record("logout");
        }
        self.user = None;
    }

    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    pub fn record(&mut self, action: impl Into<String>) {
        self.activity.push(ActivityEntry {
            at: Utc::now(),
            user: self.user.clone(),
            action: action.into(),
        });
    }

    pub fn activity(&self) -> &[ActivityEntry] {
        &self.activity
    }
}
