use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlCanvasElement, HtmlElement};

use super::*;

wasm_bindgen_test_configure!(run_in_browser);

// =============================================================
// Helpers
// =============================================================

/// A `<div>` attached to the body so layout gives it an offset size.
fn container(width: &str, height: &str) -> HtmlElement {
	let document = web_sys::window().unwrap().document().unwrap();
	let div: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
	let style = div.style();
	style.set_property("position", "relative").unwrap();
	style.set_property("width", width).unwrap();
	style.set_property("height", height).unwrap();
	document.body().unwrap().append_child(&div).unwrap();
	div
}

fn canvas_in(container: &HtmlElement) -> Option<HtmlCanvasElement> {
	container
		.first_element_child()
		.and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
}

// =============================================================
// start
// =============================================================

#[wasm_bindgen_test]
fn zero_height_container_is_rejected_without_a_canvas() {
	let div = container("300px", "0px");
	let err = start(&div, FieldConfig::default()).err().unwrap();

	assert_eq!(
		err,
		FieldError::EmptySurface {
			width: 300.0,
			height: 0.0
		}
	);
	assert_eq!(div.child_element_count(), 0);
	div.remove();
}

#[wasm_bindgen_test]
fn invalid_config_appends_nothing() {
	let div = container("300px", "200px");
	let config = FieldConfig {
		link_distance: 0.0,
		..FieldConfig::default()
	};
	assert!(matches!(start(&div, config), Err(FieldError::InvalidConfig(_))));
	assert_eq!(div.child_element_count(), 0);
	div.remove();
}

#[wasm_bindgen_test]
fn start_overlays_one_canvas_sized_to_container() {
	let div = container("300px", "200px");
	let handle = start(&div, FieldConfig::default()).unwrap();

	assert!(handle.is_running());
	assert_eq!(div.child_element_count(), 1);
	let canvas = canvas_in(&div).expect("canvas child");
	assert_eq!((canvas.width(), canvas.height()), (300, 200));
	assert_eq!(canvas.style().get_property_value("position").unwrap(), "absolute");

	handle.stop();
	div.remove();
}

// =============================================================
// Teardown
// =============================================================

#[wasm_bindgen_test]
fn stop_removes_the_canvas() {
	let div = container("300px", "200px");
	let handle = start(&div, FieldConfig::default()).unwrap();

	handle.stop();

	assert_eq!(div.child_element_count(), 0);
	div.remove();
}

#[wasm_bindgen_test]
fn dropping_the_handle_tears_down() {
	let div = container("300px", "200px");
	let handle = start(&div, FieldConfig::default()).unwrap();

	drop(handle);

	assert!(canvas_in(&div).is_none());
	div.remove();
}

#[wasm_bindgen_test]
fn teardown_runs_once() {
	let div = container("300px", "200px");
	let mut handle = start(&div, FieldConfig::default()).unwrap();

	handle.teardown();
	assert!(!handle.is_running());
	assert_eq!(div.child_element_count(), 0);

	// A sibling added after teardown must survive the handle's own drop.
	let marker = web_sys::window()
		.unwrap()
		.document()
		.unwrap()
		.create_element("span")
		.unwrap();
	div.append_child(&marker).unwrap();
	drop(handle);

	assert_eq!(div.child_element_count(), 1);
	div.remove();
}

#[wasm_bindgen_test]
fn handles_on_separate_containers_are_independent() {
	let (a, b) = (container("120px", "80px"), container("160px", "90px"));
	let first = start(&a, FieldConfig::default()).unwrap();
	let second = start(&b, FieldConfig::default()).unwrap();

	first.stop();

	assert!(second.is_running());
	assert_eq!(a.child_element_count(), 0);
	assert_eq!(b.child_element_count(), 1);

	second.stop();
	a.remove();
	b.remove();
}
