//! Contact section: form, messaging handoff link, and result popup.

use gloo_timers::callback::Timeout;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use log::info;

use super::form::{ContactForm, FormField, validate};
use super::handoff::{
	compose_message, direct_message_url, handoff_url, local_timestamp, open_in_new_context,
};
use super::history::{LoggedMessage, record_submission};
use super::popup::{MessagePopup, PopupState};
use crate::components::ripple::{RippleButton, RippleLink};
use crate::config::ContactConfig;

/// Generation of a delayed UI update. A timer only applies its change if no
/// newer update has started since it was scheduled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct Epoch(u32);

impl Epoch {
	fn next(self) -> Self {
		Epoch(self.0.wrapping_add(1))
	}
}

/// Start a new generation in `slot` and return it.
fn bump(slot: StoredValue<Epoch>) -> Epoch {
	slot.update_value(|e| *e = e.next());
	slot.get_value()
}

/// Whether `epoch` is still the latest generation in `slot`.
fn is_current(slot: StoredValue<Epoch>, epoch: Epoch) -> bool {
	slot.try_get_value() == Some(epoch)
}

fn iso_timestamp() -> String {
	js_sys::Date::new_0().to_iso_string().into()
}

/// Contact form wired to the messaging handoff.
#[component]
pub fn ContactSection(config: ContactConfig) -> impl IntoView {
	let name = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let subject = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());

	let popup = RwSignal::new(PopupState::Hidden);
	let popup_epoch = StoredValue::new(Epoch::default());
	let highlighted = RwSignal::new(Vec::<FormField>::new());
	let highlight_epoch = StoredValue::new(Epoch::default());

	let direct_url = direct_message_url(&config);
	let config = StoredValue::new(config);

	let show_popup = move |state: PopupState| -> Epoch {
		let epoch = bump(popup_epoch);
		popup.set(state);
		epoch
	};

	let on_submit = move |ev: SubmitEvent| {
		ev.prevent_default();

		let form = ContactForm {
			name: name.get_untracked(),
			email: email.get_untracked(),
			subject: subject.get_untracked(),
			message: message.get_untracked(),
		}
		.trimmed();
		let config = config.get_value();

		if let Err(errors) = validate(&form) {
			info!("contact: rejected submission with {} errors", errors.0.len());
			highlighted.set(errors.fields());
			let epoch = bump(highlight_epoch);
			Timeout::new(config.error_highlight_ms, move || {
				if is_current(highlight_epoch, epoch) {
					let _ = highlighted.try_set(Vec::new());
				}
			})
			.forget();
			show_popup(PopupState::ShowingErrors(errors.messages()));
			return;
		}

		let text = compose_message(&form, &local_timestamp());
		open_in_new_context(&handoff_url(&config, &text));
		record_submission(
			&config.log_key,
			config.log_capacity,
			LoggedMessage::new(&form, iso_timestamp()),
		);

		let epoch = show_popup(PopupState::ShowingSuccess);
		Timeout::new(config.popup_auto_close_ms, move || {
			let current = is_current(popup_epoch, epoch);
			if current && popup.try_get_untracked() == Some(PopupState::ShowingSuccess) {
				let _ = popup.try_set(PopupState::Hidden);
			}
		})
		.forget();

		for field in [name, email, subject, message] {
			field.set(String::new());
		}
	};

	let field_class = move |field: FormField| {
		move || {
			if highlighted.with(|h| h.contains(&field)) {
				"glass-input input-error"
			} else {
				"glass-input"
			}
		}
	};

	view! {
		<form id="contactForm" class="contact-form" on:submit=on_submit novalidate=true>
			<input
				id=FormField::Name.id()
				type="text"
				placeholder="Your Name"
				class=field_class(FormField::Name)
				bind:value=name
			/>
			<input
				id=FormField::Email.id()
				type="email"
				placeholder="Your Email"
				class=field_class(FormField::Email)
				bind:value=email
			/>
			<input
				id=FormField::Subject.id()
				type="text"
				placeholder="Subject"
				class=field_class(FormField::Subject)
				bind:value=subject
			/>
			<textarea
				id=FormField::Message.id()
				rows="5"
				placeholder="Your Message"
				class=field_class(FormField::Message)
				bind:value=message
			></textarea>
			<RippleButton class="submit-btn" kind="submit">
				"Send via WhatsApp"
			</RippleButton>
		</form>
		<RippleLink id="whatsapp-direct" class="glass-btn" href=direct_url>
			"Message us directly"
		</RippleLink>
		<MessagePopup state=popup />
	}
}
