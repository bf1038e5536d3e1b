use leptos::prelude::*;
use log::error;

use super::animator::{self, AnimationHandle};
use super::types::{FieldConfig, FieldError};

/// Animated "blockchain" backdrop: drifting nodes joined by faint lines.
///
/// Fills its parent; the canvas is created once the container is mounted and
/// is removed again when this component is cleaned up.
#[component]
pub fn BlockchainBackground(#[prop(optional)] config: Option<FieldConfig>) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let handle = StoredValue::new_local(None::<AnimationHandle>);

	Effect::new(move |_| {
		let started = match container_ref.get() {
			Some(container) => animator::start(&container, config.clone().unwrap_or_default()),
			None => Err(FieldError::MissingContainer),
		};
		match started {
			Ok(h) => handle.set_value(Some(h)),
			Err(FieldError::MissingContainer) => {}
			Err(err) => error!("blockchain background not started: {err}"),
		}
	});

	on_cleanup(move || {
		if let Some(h) = handle.try_update_value(Option::take).flatten() {
			h.stop();
		}
	});

	view! { <div node_ref=container_ref class="blockchain-bg" aria-hidden="true"></div> }
}
