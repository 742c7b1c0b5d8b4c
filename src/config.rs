//! Site-wide configuration.
//!
//! All tunables live in [`SiteConfig`]. The host page may override any subset
//! through a `<script id="site-config" type="application/json">` element;
//! missing fields keep their defaults.

use log::{info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

use crate::components::particle_field::Theme;

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// A navigable page section.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Section {
	/// DOM id, also used as the URL fragment.
	pub id: String,
	/// Navigation link text.
	pub label: String,
	/// Document title while this section is the majority-visible one.
	pub title: String,
}

impl Section {
	fn new(id: &str, label: &str, title: &str) -> Self {
		Self {
			id: id.to_string(),
			label: label.to_string(),
			title: title.to_string(),
		}
	}
}

/// Contact form, messaging handoff and local log settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
	/// Host of the external messaging app's compose link.
	pub messaging_host: String,
	/// Recipient identifier in the compose link path.
	pub recipient_id: String,
	/// Greeting used by the direct-message link.
	pub direct_message: String,
	/// `localStorage` key for the submitted-form log.
	pub log_key: String,
	/// Maximum number of logged submissions; oldest are evicted first.
	pub log_capacity: usize,
	/// Success popup lifetime.
	pub popup_auto_close_ms: u32,
	/// How long invalid fields stay highlighted.
	pub error_highlight_ms: u32,
}

impl Default for ContactConfig {
	fn default() -> Self {
		Self {
			messaging_host: "wa.me".to_string(),
			recipient_id: "233241360585".to_string(),
			direct_message: "Hello B-TECH! I visited your portfolio and would like to get in touch."
				.to_string(),
			log_key: "btechMessages".to_string(),
			log_capacity: 50,
			popup_auto_close_ms: 8000,
			error_highlight_ms: 3000,
		}
	}
}

/// Loading screen and hero typing effect timings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
	pub loading_fade_after_ms: u32,
	pub loading_remove_after_ms: u32,
	pub typing_text: String,
	pub typing_start_ms: u32,
	pub typing_step_ms: u32,
}

impl Default for IntroConfig {
	fn default() -> Self {
		Self {
			loading_fade_after_ms: 2000,
			loading_remove_after_ms: 500,
			typing_text: "Built by B-TECH".to_string(),
			typing_start_ms: 500,
			typing_step_ms: 100,
		}
	}
}

/// Complete site configuration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Canonical site URL, used for structured data.
	pub site_url: String,
	/// Fixed header height subtracted from scroll targets.
	pub header_offset: f64,
	/// Scroll position past which the navigation bar turns opaque.
	pub nav_solid_after: f64,
	/// Minimum visible ratio for a section to count as the current one.
	pub section_threshold: f64,
	/// Page sections in document order.
	pub sections: Vec<Section>,
	/// Tilt divisor; larger values give a subtler tilt.
	pub tilt_divisor: f64,
	/// Viewports at or below this width get no tilt effect.
	pub tilt_min_width: f64,
	pub contact: ContactConfig,
	pub intro: IntroConfig,
	pub theme: Theme,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			site_url: "https://b-tech-ghana.com/".to_string(),
			header_offset: 80.0,
			nav_solid_after: 100.0,
			section_threshold: 0.5,
			sections: vec![
				Section::new("home", "Home", "B-TECH | Building Tomorrow's Technology Today"),
				Section::new(
					"about",
					"About",
					"About B-TECH | Benjamin Sekyere - Ghana Software Developer",
				),
				Section::new(
					"projects",
					"Projects",
					"B-TECH Projects | Software Development Portfolio",
				),
				Section::new(
					"services",
					"Services",
					"B-TECH Services | Web Development & AI Solutions",
				),
				Section::new("contact", "Contact", "Contact B-TECH | Get in Touch"),
			],
			tilt_divisor: 25.0,
			tilt_min_width: 768.0,
			contact: ContactConfig::default(),
			intro: IntroConfig::default(),
			theme: Theme::default(),
		}
	}
}

impl SiteConfig {
	/// Parse a JSON override, keeping defaults for absent fields.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}

	/// Load the override block from the host document, or fall back to defaults.
	pub fn load() -> Self {
		let Some(json) = config_text() else {
			return Self::default();
		};

		match Self::from_json(&json) {
			Ok(config) => {
				info!("btech-site: loaded config with {} sections", config.sections.len());
				config
			}
			Err(e) => {
				warn!("btech-site: failed to parse site config: {}", e);
				Self::default()
			}
		}
	}

	/// Title configured for `section_id`, if any.
	pub fn title_for(&self, section_id: &str) -> Option<&str> {
		section_title(&self.sections, section_id)
	}
}

/// Title of the section with id `section_id` in `sections`.
pub fn section_title<'a>(sections: &'a [Section], section_id: &str) -> Option<&'a str> {
	sections
		.iter()
		.find(|s| s.id == section_id)
		.map(|s| s.title.as_str())
}

fn config_text() -> Option<String> {
	let document = web_sys::window()?.document()?;
	let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	script.text().ok()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_titles_are_exact() {
		let config = SiteConfig::default();
		assert_eq!(
			config.title_for("projects"),
			Some("B-TECH Projects | Software Development Portfolio")
		);
		assert_eq!(config.title_for("contact"), Some("Contact B-TECH | Get in Touch"));
		assert_eq!(config.title_for("footer"), None);
	}

	#[test]
	fn override_keeps_unspecified_defaults() {
		let config = SiteConfig::from_json(
			r#"{
				"contact": { "recipient_id": "15550001111", "log_capacity": 5 },
				"theme": { "particles": { "count": 80 } }
			}"#,
		)
		.unwrap();

		assert_eq!(config.contact.recipient_id, "15550001111");
		assert_eq!(config.contact.log_capacity, 5);
		assert_eq!(config.contact.messaging_host, "wa.me");
		assert_eq!(config.theme.particles.count, 80);
		assert_eq!(config.header_offset, 80.0);
		assert_eq!(config.sections.len(), 5);
	}

	#[test]
	fn custom_sections_replace_defaults() {
		let config = SiteConfig::from_json(
			r#"{ "sections": [ { "id": "work", "label": "Work", "title": "Work | Me" } ] }"#,
		)
		.unwrap();
		assert_eq!(config.sections.len(), 1);
		assert_eq!(config.title_for("work"), Some("Work | Me"));
		assert_eq!(config.title_for("projects"), None);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(SiteConfig::from_json("{ not json").is_err());
	}
}
