use leptos::prelude::*;
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of the element that must be on screen before it animates in.
const REVEAL_THRESHOLD: f64 = 0.1;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Fades and slides its children in the first time they scroll into view.
///
/// Sections start hidden via the `reveal` class; `animate` is added once and
/// the element is then no longer observed.
#[component]
pub fn Reveal(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
	let node_ref = NodeRef::<leptos::html::Div>::new();
	let shown = RwSignal::new(false);
	let observer = StoredValue::new_local(None::<(IntersectionObserver, ObserverCallback)>);

	Effect::new(move |_| {
		let Some(el) = node_ref.get() else {
			return;
		};
		let callback: ObserverCallback = Closure::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					if entry.is_intersecting() {
						shown.set(true);
						observer.unobserve(&entry.target());
					}
				}
			},
		);
		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
		match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
			Ok(io) => {
				io.observe(&el);
				observer.set_value(Some((io, callback)));
			}
			Err(err) => {
				warn!("IntersectionObserver unavailable, showing section: {err:?}");
				shown.set(true);
			}
		}
	});

	on_cleanup(move || {
		if let Some((io, _callback)) = observer.try_update_value(Option::take).flatten() {
			io.disconnect();
		}
	});

	view! {
		<div node_ref=node_ref class=format!("reveal {class}") class:animate=move || shown.get()>
			{children()}
		</div>
	}
}
