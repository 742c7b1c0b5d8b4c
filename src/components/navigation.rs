//! Fixed navigation bar with smooth section scrolling and a mobile menu.

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};

use crate::config::Section;

/// Scroll position that puts a section just below the fixed header.
pub fn scroll_target(section_offset_top: f64, header_offset: f64) -> f64 {
	section_offset_top - header_offset
}

/// Navigation bar backdrop for a given scroll position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavBackdrop {
	pub alpha: f64,
	pub blur_px: f64,
}

impl NavBackdrop {
	pub fn style(self) -> String {
		format!(
			"background: rgba(10, 15, 26, {}); backdrop-filter: blur({}px);",
			self.alpha, self.blur_px
		)
	}
}

/// Opaque, blurrier backdrop once the page has scrolled past `solid_after`.
pub fn nav_backdrop(scroll_y: f64, solid_after: f64) -> NavBackdrop {
	if scroll_y > solid_after {
		NavBackdrop {
			alpha: 0.95,
			blur_px: 20.0,
		}
	} else {
		NavBackdrop {
			alpha: 0.8,
			blur_px: 15.0,
		}
	}
}

/// Smooth-scroll to the section with DOM id `id`. Returns false if it is missing.
pub fn scroll_to_section(id: &str, header_offset: f64) -> bool {
	let Some(window) = web_sys::window() else {
		return false;
	};
	let Some(section) = window
		.document()
		.and_then(|d| d.get_element_by_id(id))
		.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	else {
		debug!("navigation: no section #{}", id);
		return false;
	};

	let options = ScrollToOptions::new();
	options.set_top(scroll_target(section.offset_top() as f64, header_offset));
	options.set_behavior(ScrollBehavior::Smooth);
	window.scroll_to_with_scroll_to_options(&options);
	true
}

fn scroll_y() -> f64 {
	web_sys::window()
		.and_then(|w| w.scroll_y().ok())
		.unwrap_or(0.0)
}

/// Top navigation with one link per section.
#[component]
pub fn NavBar(sections: Vec<Section>, header_offset: f64, solid_after: f64) -> impl IntoView {
	let menu_open = RwSignal::new(false);
	let scrolled = RwSignal::new(scroll_y());

	let listener = window_event_listener(leptos::ev::scroll, move |_| scrolled.set(scroll_y()));
	on_cleanup(move || listener.remove());

	let links = sections
		.into_iter()
		.map(|section| {
			let href = format!("#{}", section.id);
			let id = section.id;
			let on_click = move |ev: MouseEvent| {
				ev.prevent_default();
				if scroll_to_section(&id, header_offset) {
					menu_open.set(false);
				}
			};
			view! {
				<li>
					<a class="nav-link" href=href on:click=on_click>
						{section.label}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<nav
			class="glass-nav"
			style=move || nav_backdrop(scrolled.get(), solid_after).style()
		>
			<a class="logo" href="#home">"B-TECH"</a>
			<ul class=move || if menu_open.get() { "nav-links active" } else { "nav-links" }>
				{links}
			</ul>
			<button
				class=move || if menu_open.get() { "mobile-menu active" } else { "mobile-menu" }
				aria-label="Toggle navigation"
				on:click=move |_| menu_open.update(|open| *open = !*open)
			>
				<span></span>
				<span></span>
				<span></span>
			</button>
		</nav>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn target_sits_below_header() {
		assert_eq!(scroll_target(1200.0, 80.0), 1120.0);
		assert_eq!(scroll_target(0.0, 80.0), -80.0);
	}

	#[test]
	fn backdrop_turns_solid_past_threshold() {
		assert_eq!(nav_backdrop(100.0, 100.0).alpha, 0.8);
		assert_eq!(nav_backdrop(100.5, 100.0).alpha, 0.95);
		assert_eq!(nav_backdrop(400.0, 100.0).blur_px, 20.0);
	}

	#[test]
	fn backdrop_style_string() {
		assert_eq!(
			nav_backdrop(0.0, 100.0).style(),
			"background: rgba(10, 15, 26, 0.8); backdrop-filter: blur(15px);"
		);
	}
}
