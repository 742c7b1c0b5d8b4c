//! Capped local history of submitted contact forms.
//!
//! Stored in `localStorage` as a JSON array of records. Once `capacity` is
//! reached the oldest records are evicted first.

use std::collections::VecDeque;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::form::ContactForm;

/// One logged submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedMessage {
	pub name: String,
	pub email: String,
	pub subject: String,
	pub message: String,
	/// ISO-8601 submission time.
	pub timestamp: String,
}

impl LoggedMessage {
	pub fn new(form: &ContactForm, timestamp: impl Into<String>) -> Self {
		Self {
			name: form.name.clone(),
			email: form.email.clone(),
			subject: form.subject.clone(),
			message: form.message.clone(),
			timestamp: timestamp.into(),
		}
	}
}

/// Bounded ring of logged submissions, oldest first.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageLog {
	entries: VecDeque<LoggedMessage>,
	capacity: usize,
}

impl MessageLog {
	pub fn new(capacity: usize) -> Self {
		Self {
			entries: VecDeque::with_capacity(capacity),
			capacity,
		}
	}

	/// Build from stored records, keeping only the newest `capacity`.
	pub fn from_entries(entries: Vec<LoggedMessage>, capacity: usize) -> Self {
		let mut log = Self::new(capacity);
		for entry in entries {
			log.append(entry);
		}
		log
	}

	/// Parse the stored JSON array. Invalid JSON yields an empty log.
	pub fn from_json(json: &str, capacity: usize) -> Self {
		match serde_json::from_str::<Vec<LoggedMessage>>(json) {
			Ok(entries) => Self::from_entries(entries, capacity),
			Err(e) => {
				warn!("contact: discarding unreadable message log: {}", e);
				Self::new(capacity)
			}
		}
	}

	pub fn to_json(&self) -> serde_json::Result<String> {
		serde_json::to_string(&self.entries)
	}

	/// Append a record and return how many old records were evicted.
	pub fn append(&mut self, entry: LoggedMessage) -> usize {
		if self.capacity == 0 {
			return 1;
		}
		let mut evicted = 0;
		while self.entries.len() >= self.capacity {
			self.entries.pop_front();
			evicted += 1;
		}
		self.entries.push_back(entry);
		evicted
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn iter(&self) -> impl Iterator<Item = &LoggedMessage> {
		self.entries.iter()
	}

	/// Read the log stored under `key`. Missing storage or key yields an empty log.
	pub fn load(key: &str, capacity: usize) -> Self {
		match storage().and_then(|s| s.get_item(key).ok().flatten()) {
			Some(json) => Self::from_json(&json, capacity),
			None => Self::new(capacity),
		}
	}

	/// Write the log under `key`, best effort.
	pub fn save(&self, key: &str) {
		let Some(storage) = storage() else {
			return;
		};
		let json = match self.to_json() {
			Ok(json) => json,
			Err(e) => {
				warn!("contact: failed to serialize message log: {}", e);
				return;
			}
		};
		match storage.set_item(key, &json) {
			Ok(()) => debug!("contact: saved {} logged messages", self.len()),
			Err(e) => warn!("contact: failed to persist message log: {:?}", e),
		}
	}
}

fn storage() -> Option<web_sys::Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}

/// Append `entry` to the log under `key` and persist it.
pub fn record_submission(key: &str, capacity: usize, entry: LoggedMessage) {
	let mut log = MessageLog::load(key, capacity);
	let evicted = log.append(entry);
	if evicted > 0 {
		debug!("contact: evicted {} old logged messages", evicted);
	}
	log.save(key);
}

#[cfg(test)]
mod tests {
	use super::*;

	fn entry(n: usize) -> LoggedMessage {
		LoggedMessage {
			name: format!("name-{n}"),
			email: format!("u{n}@x.com"),
			subject: "s".into(),
			message: "m".into(),
			timestamp: format!("2026-01-01T00:00:{n:02}.000Z"),
		}
	}

	#[test]
	fn append_evicts_oldest_at_capacity() {
		let mut log = MessageLog::new(3);
		for n in 0..3 {
			assert_eq!(log.append(entry(n)), 0);
		}
		assert_eq!(log.append(entry(3)), 1);
		assert_eq!(log.len(), 3);
		let names: Vec<_> = log.iter().map(|e| e.name.as_str()).collect();
		assert_eq!(names, ["name-1", "name-2", "name-3"]);
	}

	#[test]
	fn zero_capacity_keeps_nothing() {
		let mut log = MessageLog::new(0);
		assert_eq!(log.append(entry(0)), 1);
		assert!(log.is_empty());
	}

	#[test]
	fn json_uses_flat_record_array() {
		let mut log = MessageLog::new(5);
		log.append(entry(1));
		let json = log.to_json().unwrap();
		let value: serde_json::Value = serde_json::from_str(&json).unwrap();
		assert_eq!(
			value,
			serde_json::json!([{
				"name": "name-1",
				"email": "u1@x.com",
				"subject": "s",
				"message": "m",
				"timestamp": "2026-01-01T00:00:01.000Z",
			}])
		);
	}

	#[test]
	fn oversized_stored_log_keeps_newest() {
		let stored: Vec<_> = (0..10).map(entry).collect();
		let json = serde_json::to_string(&stored).unwrap();
		let log = MessageLog::from_json(&json, 4);
		assert_eq!(log.len(), 4);
		assert_eq!(log.iter().next().unwrap().name, "name-6");
		assert_eq!(log.iter().last().unwrap().name, "name-9");
	}

	#[test]
	fn unreadable_json_starts_fresh() {
		let log = MessageLog::from_json("null", 4);
		assert!(log.is_empty());
		assert_eq!(log.capacity(), 4);
	}

	#[test]
	fn logged_message_copies_form() {
		let form = ContactForm {
			name: "Ama".into(),
			email: "ama@x.com".into(),
			subject: "Hi".into(),
			message: "Hello".into(),
		};
		let logged = LoggedMessage::new(&form, "t");
		assert_eq!(logged.name, "Ama");
		assert_eq!(logged.message, "Hello");
		assert_eq!(logged.timestamp, "t");
	}
}
