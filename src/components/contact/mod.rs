//! Contact form with a messaging-app handoff.
//!
//! On submit the form is trimmed and validated as a whole. Valid submissions
//! open the messaging app's compose screen with a pre-filled text, are
//! appended to a capped local log, and show a success popup. Invalid ones show
//! every problem in a single error popup and highlight the offending fields.

mod component;
pub mod form;
pub mod handoff;
pub mod history;
mod popup;

pub use component::ContactSection;
pub use form::{ContactForm, FormField, ValidationError, ValidationErrors, is_valid_email, validate};
pub use handoff::{compose_message, direct_message_url, encode_uri_component, handoff_url};
pub use history::{LoggedMessage, MessageLog};
pub use popup::{MessagePopup, PopupState, PopupView};
