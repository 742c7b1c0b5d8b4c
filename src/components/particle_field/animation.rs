//! Cancellable `requestAnimationFrame` loop.
//!
//! The loop reschedules itself after every frame until stopped. [`StopHandle`]
//! is `Send + Sync` so it can be moved into reactive cleanup hooks, which the
//! `Rc`-based loop itself cannot.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gloo_timers::callback::Timeout;
use log::debug;
use wasm_bindgen::prelude::*;

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Thread-safe stop flag shared with a running [`AnimationLoop`].
#[derive(Clone, Debug)]
pub struct StopHandle {
	running: Arc<AtomicBool>,
}

impl StopHandle {
	pub fn new() -> Self {
		Self {
			running: Arc::new(AtomicBool::new(true)),
		}
	}

	/// Ask the loop to stop. The pending frame, if any, becomes a no-op and
	/// releases the frame callback.
	pub fn stop(&self) {
		self.running.store(false, Ordering::Relaxed);
	}

	pub fn is_running(&self) -> bool {
		self.running.load(Ordering::Relaxed)
	}
}

impl Default for StopHandle {
	fn default() -> Self {
		Self::new()
	}
}

/// A per-frame callback registration with an explicit stop.
///
/// Dropping the loop stops it, unless it was [`detach`](Self::detach)ed, in
/// which case only the returned [`StopHandle`] can end it.
pub struct AnimationLoop {
	handle: StopHandle,
	frame_id: Rc<Cell<Option<i32>>>,
	slot: FrameSlot,
	detached: bool,
}

impl AnimationLoop {
	/// Start a loop that calls `on_frame` once per display refresh.
	pub fn start(on_frame: impl FnMut() + 'static) -> Option<Self> {
		Self::with_handle(StopHandle::new(), on_frame)
	}

	/// Start a loop controlled by an existing stop handle.
	///
	/// Returns `None` outside a browser window or when `handle` is already
	/// stopped.
	pub fn with_handle(handle: StopHandle, mut on_frame: impl FnMut() + 'static) -> Option<Self> {
		if !handle.is_running() {
			return None;
		}
		let window = web_sys::window()?;
		let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
		let slot: FrameSlot = Rc::new(RefCell::new(None));

		let (running, id_inner, slot_inner) = (handle.clone(), frame_id.clone(), slot.clone());
		*slot.borrow_mut() = Some(Closure::new(move || {
			id_inner.set(None);
			if !running.is_running() {
				release_later(slot_inner.clone());
				return;
			}

			on_frame();

			if let Some(ref cb) = *slot_inner.borrow() {
				if let Some(win) = web_sys::window() {
					id_inner.set(win.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
				}
			}
		}));

		if let Some(ref cb) = *slot.borrow() {
			frame_id.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}

		Some(Self {
			handle,
			frame_id,
			slot,
			detached: false,
		})
	}

	pub fn stop_handle(&self) -> StopHandle {
		self.handle.clone()
	}

	/// Cancel the pending frame and release the callback immediately.
	pub fn stop(&self) {
		self.handle.stop();
		if let Some(id) = self.frame_id.take() {
			if let Some(win) = web_sys::window() {
				let _ = win.cancel_animation_frame(id);
			}
		}
		self.slot.borrow_mut().take();
		debug!("animation loop stopped");
	}

	/// Keep the loop running after this value is dropped.
	pub fn detach(mut self) -> StopHandle {
		self.detached = true;
		self.handle.clone()
	}
}

impl Drop for AnimationLoop {
	fn drop(&mut self) {
		if !self.detached {
			self.stop();
		}
	}
}

/// A closure cannot be dropped while it is executing, so release on the next tick.
fn release_later(slot: FrameSlot) {
	Timeout::new(0, move || {
		slot.borrow_mut().take();
		debug!("animation loop released");
	})
	.forget();
}
