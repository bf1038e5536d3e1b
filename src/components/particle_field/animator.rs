use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlElement, ResizeObserver};

use super::state::ParticleField;
use super::types::{FieldConfig, FieldError};

#[cfg(all(test, target_arch = "wasm32"))]
#[path = "animator_test.rs"]
mod animator_test;

/// State shared between the frame callback and the handle.
struct FrameLoop {
	field: RefCell<ParticleField>,
	running: Cell<bool>,
	frame_id: Cell<Option<i32>>,
	callback: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
	fn schedule(&self) {
		let Some(window) = web_sys::window() else {
			warn!("no window; particle loop halted");
			self.running.set(false);
			return;
		};
		if let Some(ref cb) = *self.callback.borrow() {
			match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
				Ok(id) => self.frame_id.set(Some(id)),
				Err(err) => {
					warn!("requestAnimationFrame failed: {err:?}");
					self.running.set(false);
				}
			}
		}
	}
}

/// Owns a running particle animation. Dropping it tears everything down.
pub struct AnimationHandle {
	frame: Rc<FrameLoop>,
	canvas: HtmlCanvasElement,
	observer: Option<ResizeObserver>,
	on_resize: Option<Closure<dyn FnMut()>>,
}

impl AnimationHandle {
	/// Whether the frame loop is still scheduling frames.
	pub fn is_running(&self) -> bool {
		self.frame.running.get()
	}

	/// Stop the loop and remove the canvas from its container.
	pub fn stop(mut self) {
		self.teardown();
	}

	fn teardown(&mut self) {
		// `on_resize` is only taken here, so its absence marks a finished teardown.
		if self.on_resize.is_none() {
			return;
		}
		self.frame.running.set(false);
		if let (Some(id), Some(window)) = (self.frame.frame_id.take(), web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
		// The callback holds an Rc to `frame`; dropping it breaks the cycle.
		self.frame.callback.borrow_mut().take();
		if let Some(observer) = self.observer.take() {
			observer.disconnect();
		}
		self.on_resize.take();
		self.canvas.remove();
		info!("particle field stopped");
	}
}

impl Drop for AnimationHandle {
	fn drop(&mut self) {
		self.teardown();
	}
}

fn container_size(container: &HtmlElement) -> (f64, f64) {
	(
		f64::from(container.offset_width()),
		f64::from(container.offset_height()),
	)
}

/// Overlay a canvas on `container` and animate a particle field on it until
/// the returned handle is stopped or dropped.
pub fn start(container: &HtmlElement, config: FieldConfig) -> Result<AnimationHandle, FieldError> {
	let (w, h) = container_size(container);
	if w <= 0.0 || h <= 0.0 {
		return Err(FieldError::EmptySurface {
			width: w,
			height: h,
		});
	}

	let document = web_sys::window()
		.and_then(|win| win.document())
		.ok_or_else(|| FieldError::Js("document unavailable".into()))?;
	let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into().map_err(|_| {
		FieldError::Js("created element is not a canvas".into())
	})?;
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);
	let style = canvas.style();
	style.set_property("position", "absolute")?;
	style.set_property("top", "0")?;
	style.set_property("left", "0")?;
	style.set_property("z-index", "1")?;

	let ctx: CanvasRenderingContext2d = canvas
		.get_context("2d")?
		.ok_or(FieldError::ContextUnavailable)?
		.dyn_into()
		.map_err(|_| FieldError::ContextUnavailable)?;

	let field = ParticleField::new(config, w, h, &mut js_sys::Math::random)?;
	container.append_child(&canvas)?;

	let frame = Rc::new(FrameLoop {
		field: RefCell::new(field),
		running: Cell::new(true),
		frame_id: Cell::new(None),
		callback: RefCell::new(None),
	});

	let (frame_cb, mut ctx) = (frame.clone(), ctx);
	*frame.callback.borrow_mut() = Some(Closure::new(move || {
		frame_cb.frame_id.set(None);
		if !frame_cb.running.get() {
			return;
		}
		frame_cb.field.borrow_mut().step(&mut ctx);
		frame_cb.schedule();
	}));

	let (frame_rs, canvas_rs, container_rs) = (frame.clone(), canvas.clone(), container.clone());
	let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
		let (nw, nh) = container_size(&container_rs);
		canvas_rs.set_width(nw as u32);
		canvas_rs.set_height(nh as u32);
		frame_rs.field.borrow_mut().resize(nw, nh);
		debug!("particle field resized to {nw}x{nh}");
	});
	let observer = match ResizeObserver::new(on_resize.as_ref().unchecked_ref()) {
		Ok(observer) => {
			observer.observe(container);
			Some(observer)
		}
		Err(err) => {
			warn!("ResizeObserver unavailable, canvas will not follow its container: {err:?}");
			None
		}
	};

	frame.schedule();
	info!(
		"particle field started: {} nodes on {w}x{h}",
		frame.field.borrow().nodes().len()
	);

	Ok(AnimationHandle {
		frame,
		canvas,
		observer,
		on_resize: Some(on_resize),
	})
}
