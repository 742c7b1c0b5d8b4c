//! Scroll-triggered reveal animations and lazy image loading.

use leptos::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

use super::observer::ViewportObserver;

/// Elements that fade in the first time they scroll into view.
pub const REVEAL_SELECTOR: &str = ".section, .project-card, .service-card";
/// Class added on reveal.
pub const REVEAL_CLASS: &str = "fade-in";
/// Images whose real source waits in `data-src`.
pub const LAZY_SELECTOR: &str = "img[data-src]";

/// Attaches the reveal and lazy-image observers once the page has rendered.
#[component]
pub fn ScrollReveal() -> impl IntoView {
	Effect::new(move |_| {
		let reveal = ViewportObserver::new(&[0.1], Some("0px 0px -50px 0px"), |entry, _| {
			if entry.is_intersecting() {
				let _ = entry.target().class_list().add_1(REVEAL_CLASS);
			}
		});
		if let Some(reveal) = reveal {
			let count = reveal.observe_all(REVEAL_SELECTOR);
			debug!("reveal: observing {} elements", count);
			reveal.retain_in_owner();
		}

		let lazy = ViewportObserver::new(&[0.0], None, |entry, observer| {
			if !entry.is_intersecting() {
				return;
			}
			let target = entry.target();
			if let Ok(img) = target.clone().dyn_into::<HtmlImageElement>() {
				if let Some(src) = img.get_attribute("data-src") {
					img.set_src(&src);
				}
				let _ = img.class_list().remove_1("lazy");
			}
			observer.unobserve(&target);
		});
		if let Some(lazy) = lazy {
			lazy.observe_all(LAZY_SELECTOR);
			lazy.retain_in_owner();
		}
	});
}
