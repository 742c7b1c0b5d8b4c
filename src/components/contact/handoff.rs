//! Messaging-app handoff: a compose link with the message pre-filled.
//!
//! Nothing is sent from the page. The visitor lands on the messaging app's
//! compose screen and presses send there.

use log::{info, warn};
use wasm_bindgen::JsValue;

use super::form::ContactForm;
use crate::config::ContactConfig;

/// Format the outbound text for a validated form.
pub fn compose_message(form: &ContactForm, timestamp: &str) -> String {
	format!(
		"Hello B-TECH! 👋\n\
		 \n\
		 I'm interested in your services and would like to discuss a project.\n\
		 \n\
		 *Name:* {}\n\
		 *Email:* {}\n\
		 *Subject:* {}\n\
		 \n\
		 *Message:*\n\
		 {}\n\
		 \n\
		 This message was sent from your portfolio website on {}.",
		form.name, form.email, form.subject, form.message, timestamp
	)
}

/// Percent-encode `s` the way `encodeURIComponent` does.
pub fn encode_uri_component(s: &str) -> String {
	const HEX: &[u8; 16] = b"0123456789ABCDEF";

	let mut out = String::with_capacity(s.len());
	for &b in s.as_bytes() {
		match b {
			b'A'..=b'Z'
			| b'a'..=b'z'
			| b'0'..=b'9'
			| b'-'
			| b'_'
			| b'.'
			| b'!'
			| b'~'
			| b'*'
			| b'\''
			| b'('
			| b')' => out.push(b as char),
			_ => {
				out.push('%');
				out.push(HEX[(b >> 4) as usize] as char);
				out.push(HEX[(b & 0x0f) as usize] as char);
			}
		}
	}
	out
}

/// Compose link for `text`: `https://{host}/{recipient}?text={encoded}`.
pub fn handoff_url(config: &ContactConfig, text: &str) -> String {
	format!(
		"https://{}/{}?text={}",
		config.messaging_host,
		config.recipient_id,
		encode_uri_component(text)
	)
}

/// Compose link pre-filled with the configured direct-message greeting.
pub fn direct_message_url(config: &ContactConfig) -> String {
	handoff_url(config, &config.direct_message)
}

/// Current time in the visitor's locale, as shown in the message footer.
pub fn local_timestamp() -> String {
	js_sys::Date::new_0()
		.to_locale_string("default", &JsValue::UNDEFINED)
		.into()
}

/// Open `url` in a new browsing context.
///
/// A blocked pop-up is logged and otherwise ignored.
pub fn open_in_new_context(url: &str) {
	let Some(window) = web_sys::window() else {
		return;
	};
	match window.open_with_url_and_target(url, "_blank") {
		Ok(Some(_)) => info!("contact: opened messaging handoff"),
		Ok(None) => warn!("contact: messaging handoff window was blocked"),
		Err(e) => warn!("contact: failed to open messaging handoff: {:?}", e),
	}
}
