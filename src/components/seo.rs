//! Document title and URL fragment follow the section being read.
//!
//! Every section's visible ratio is tracked; the section with the largest
//! ratio at or above the majority threshold is the current one. Breadcrumb
//! structured data is emitted once for search engines.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Script, Title};
use log::debug;
use serde_json::json;
use wasm_bindgen::JsValue;

use super::observer::ViewportObserver;
use crate::config::{Section, section_title};

/// Ratios reported to the observer callback.
const RATIO_STEPS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Latest visible ratio per section, in document order.
#[derive(Clone, Debug)]
pub struct SectionTracker {
	ratios: Vec<(String, f64)>,
	threshold: f64,
}

impl SectionTracker {
	pub fn new<'a>(ids: impl IntoIterator<Item = &'a str>, threshold: f64) -> Self {
		Self {
			ratios: ids.into_iter().map(|id| (id.to_string(), 0.0)).collect(),
			threshold,
		}
	}

	/// Record a new ratio. Unknown ids are ignored.
	pub fn update(&mut self, id: &str, ratio: f64) {
		if let Some(entry) = self.ratios.iter_mut().find(|(known, _)| known == id) {
			entry.1 = ratio;
		}
	}

	/// The majority-visible section; ties go to the earlier section.
	pub fn active(&self) -> Option<&str> {
		let mut best: Option<&(String, f64)> = None;
		for entry in &self.ratios {
			if entry.1 >= self.threshold && best.is_none_or(|b| entry.1 > b.1) {
				best = Some(entry);
			}
		}
		best.map(|(id, _)| id.as_str())
	}
}

/// Title for the active section, falling back to the first section's title.
pub fn document_title(sections: &[Section], active: Option<&str>) -> String {
	active
		.and_then(|id| section_title(sections, id))
		.or_else(|| sections.first().map(|s| s.title.as_str()))
		.unwrap_or_default()
		.to_string()
}

/// `BreadcrumbList` structured data for the site root and portfolio.
pub fn breadcrumb_json(site_url: &str) -> serde_json::Value {
	json!({
		"@context": "https://schema.org",
		"@type": "BreadcrumbList",
		"itemListElement": [
			{
				"@type": "ListItem",
				"position": 1,
				"name": "Home",
				"item": site_url,
			},
			{
				"@type": "ListItem",
				"position": 2,
				"name": "Portfolio",
				"item": format!("{site_url}#projects"),
			}
		]
	})
}

fn replace_fragment(id: &str) {
	if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
		let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(format!("#{id}").as_str()));
	}
}

/// Keeps `<title>` and the URL fragment in sync with the visible section.
#[component]
pub fn SectionTitles(sections: Vec<Section>, threshold: f64) -> impl IntoView {
	let active = RwSignal::new(None::<String>);
	let sections = StoredValue::new(sections);

	Effect::new(move |_| {
		let ids = sections.with_value(|s| s.iter().map(|s| s.id.clone()).collect::<Vec<_>>());
		let tracker = Rc::new(RefCell::new(SectionTracker::new(
			ids.iter().map(String::as_str),
			threshold,
		)));

		let observer = ViewportObserver::new(&RATIO_STEPS, None, move |entry, _| {
			let id = entry.target().id();
			let mut tracker = tracker.borrow_mut();
			tracker.update(&id, entry.intersection_ratio());

			let current = tracker.active().map(str::to_string);
			if current.is_some() && active.get_untracked() != current {
				if let Some(ref id) = current {
					debug!("seo: section #{} in view", id);
					replace_fragment(id);
				}
				active.set(current);
			}
		});

		if let Some(observer) = observer {
			observer.observe_all("section[id]");
			observer.retain_in_owner();
		}
	});

	let title = move || sections.with_value(|s| document_title(s, active.get().as_deref()));

	view! { <Title text=title /> }
}

/// JSON-LD breadcrumb block in `<head>`.
#[component]
pub fn BreadcrumbData(site_url: String) -> impl IntoView {
	let json = breadcrumb_json(&site_url).to_string();
	view! { <Script type_="application/ld+json">{json}</Script> }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::SiteConfig;

	fn tracker() -> SectionTracker {
		SectionTracker::new(["home", "about", "projects", "services", "contact"], 0.5)
	}

	#[test]
	fn nothing_is_active_below_majority() {
		let mut t = tracker();
		t.update("home", 0.3);
		t.update("about", 0.49);
		assert_eq!(t.active(), None);
	}

	#[test]
	fn majority_section_wins() {
		let mut t = tracker();
		t.update("about", 0.5);
		t.update("projects", 0.8);
		assert_eq!(t.active(), Some("projects"));
		t.update("projects", 0.1);
		assert_eq!(t.active(), Some("about"));
	}

	#[test]
	fn ties_go_to_document_order() {
		let mut t = tracker();
		t.update("services", 1.0);
		t.update("about", 1.0);
		assert_eq!(t.active(), Some("about"));
	}

	#[test]
	fn unknown_sections_are_ignored() {
		let mut t = tracker();
		t.update("footer", 1.0);
		assert_eq!(t.active(), None);
	}

	#[test]
	fn scrolling_to_projects_sets_its_title() {
		let config = SiteConfig::default();
		let mut t = SectionTracker::new(config.sections.iter().map(|s| s.id.as_str()), 0.5);
		t.update("about", 0.6);
		t.update("about", 0.2);
		t.update("projects", 0.75);
		assert_eq!(
			document_title(&config.sections, t.active()),
			"B-TECH Projects | Software Development Portfolio"
		);
	}

	#[test]
	fn title_falls_back_to_first_section() {
		let config = SiteConfig::default();
		assert_eq!(
			document_title(&config.sections, None),
			"B-TECH | Building Tomorrow's Technology Today"
		);
		assert_eq!(document_title(&[], Some("home")), "");
	}

	#[test]
	fn breadcrumbs_point_at_projects() {
		let value = breadcrumb_json("https://b-tech-ghana.com/");
		assert_eq!(value["@type"], "BreadcrumbList");
		assert_eq!(
			value["itemListElement"][1]["item"],
			"https://b-tech-ghana.com/#projects"
		);
		assert_eq!(value["itemListElement"][0]["position"], 1);
	}
}
