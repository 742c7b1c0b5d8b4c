//! Thin wrapper over `IntersectionObserver`.

use js_sys::Array;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// An intersection observer together with the closure it calls.
///
/// Dropping it disconnects the observer.
pub struct ViewportObserver {
	observer: IntersectionObserver,
	_callback: EntryCallback,
}

impl ViewportObserver {
	/// Create an observer that calls `on_entry` for each reported entry.
	pub fn new(
		thresholds: &[f64],
		root_margin: Option<&str>,
		mut on_entry: impl FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
	) -> Option<Self> {
		let callback: EntryCallback = Closure::new(move |entries: Array, observer: IntersectionObserver| {
			for entry in entries.iter() {
				let entry: IntersectionObserverEntry = entry.unchecked_into();
				on_entry(&entry, &observer);
			}
		});

		let init = IntersectionObserverInit::new();
		let threshold: Array = thresholds.iter().copied().map(JsValue::from_f64).collect();
		init.set_threshold(&threshold);
		if let Some(margin) = root_margin {
			init.set_root_margin(margin);
		}

		let observer =
			IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
		Some(Self {
			observer,
			_callback: callback,
		})
	}

	/// Observe every element matching `selector`; returns how many were found.
	pub fn observe_all(&self, selector: &str) -> u32 {
		let Some(nodes) = web_sys::window()
			.and_then(|w| w.document())
			.and_then(|d| d.query_selector_all(selector).ok())
		else {
			return 0;
		};

		let mut count = 0;
		for i in 0..nodes.length() {
			if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) {
				self.observer.observe(&el);
				count += 1;
			}
		}
		count
	}

	/// Tie the observer's lifetime to the current reactive owner.
	pub fn retain_in_owner(self) {
		let _ = StoredValue::new_local(self);
	}
}

impl Drop for ViewportObserver {
	fn drop(&mut self) {
		self.observer.disconnect();
	}
}
