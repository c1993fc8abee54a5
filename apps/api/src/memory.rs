#![allow(dead_code)]

//! Session memory — an append-only ordered event log keyed by session,
//! with readers tracking their own last-read offset.
//!
//! Explicit log + cursor structure instead of ambient shared mutable state:
//! writers only append, readers only advance their own cursor.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryEvent {
    /// Position in the session log, starting at 0.
    pub seq: usize,
    pub recorded_at: DateTime<Utc>,
    /// Event kind, e.g. "tool_call".
    pub kind: String,
    pub detail: Value,
}

#[derive(Debug, Default)]
struct SessionLog {
    events: Vec<MemoryEvent>,
    /// reader name → index of the next unread event.
    cursors: HashMap<String, usize>,
}

/// In-process session memory shared via `Arc` in `AppState`.
#[derive(Debug, Default)]
pub struct SessionMemory {
    sessions: Mutex<HashMap<Uuid, SessionLog>>,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event to the session log, returning its sequence number.
    pub fn append(&self, session: Uuid, kind: &str, detail: Value) -> usize {
        let mut sessions = self.sessions.lock().expect("session memory poisoned");
        let log = sessions.entry(session).or_default();
        let seq = log.events.len();
        log.events.push(MemoryEvent {
            seq,
            recorded_at: Utc::now(),
            kind: kind.to_string(),
            detail,
        });
        seq
    }

    /// Everything appended to the session so far, in order.
    pub fn events(&self, session: Uuid) -> Vec<MemoryEvent> {
        let sessions = self.sessions.lock().expect("session memory poisoned");
        sessions
            .get(&session)
            .map(|log| log.events.clone())
            .unwrap_or_default()
    }

    /// Events the named reader has not yet seen; advances that reader's
    /// cursor past them. Other readers are unaffected.
    pub fn read_new(&self, session: Uuid, reader: &str) -> Vec<MemoryEvent> {
        let mut sessions = self.sessions.lock().expect("session memory poisoned");
        let log = sessions.entry(session).or_default();
        let cursor = log.cursors.entry(reader.to_string()).or_insert(0);
        let unread = log.events[*cursor..].to_vec();
        *cursor = log.events.len();
        unread
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_append_assigns_increasing_seq() {
        let memory = SessionMemory::new();
        let session = Uuid::new_v4();
        assert_eq!(memory.append(session, "tool_call", json!({"n": 1})), 0);
        assert_eq!(memory.append(session, "tool_call", json!({"n": 2})), 1);
        let events = memory.events(session);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].seq, 0);
        assert_eq!(events[1].seq, 1);
    }

    #[test]
    fn test_readers_track_their_own_cursor() {
        let memory = SessionMemory::new();
        let session = Uuid::new_v4();
        memory.append(session, "tool_call", json!({"n": 1}));
        memory.append(session, "tool_call", json!({"n": 2}));

        assert_eq!(memory.read_new(session, "agent-a").len(), 2);
        // agent-a is caught up; agent-b has seen nothing.
        assert!(memory.read_new(session, "agent-a").is_empty());
        assert_eq!(memory.read_new(session, "agent-b").len(), 2);

        memory.append(session, "tool_call", json!({"n": 3}));
        let fresh = memory.read_new(session, "agent-a");
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].seq, 2);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let memory = SessionMemory::new();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        memory.append(a, "tool_call", json!({}));
        assert!(memory.events(b).is_empty());
        assert_eq!(memory.events(a).len(), 1);
    }

    #[test]
    fn test_unknown_session_reads_empty() {
        let memory = SessionMemory::new();
        assert!(memory.events(Uuid::new_v4()).is_empty());
        assert!(memory.read_new(Uuid::new_v4(), "anyone").is_empty());
    }
}
