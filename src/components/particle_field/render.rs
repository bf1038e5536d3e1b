use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

/// Line color for connections; alpha is supplied per line.
const LINK_RGB: &str = "255, 255, 255";
const LINK_WIDTH: f64 = 1.0;

/// The 2d drawing calls the particle field needs.
///
/// Implemented for the browser canvas context; tests record calls instead.
pub trait Surface {
	/// Erase the whole `width` x `height` area.
	fn clear(&mut self, width: f64, height: f64);
	/// Fill a circle centered on `(x, y)`.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str);
	/// Stroke a connection line from `from` to `to` at the given alpha.
	fn stroke_link(&mut self, from: (f64, f64), to: (f64, f64), opacity: f64);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64) {
		self.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
		self.begin_path();
		let _ = self.arc(x, y, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(color);
		self.fill();
	}

	fn stroke_link(&mut self, (x1, y1): (f64, f64), (x2, y2): (f64, f64), opacity: f64) {
		self.begin_path();
		self.move_to(x1, y1);
		self.line_to(x2, y2);
		self.set_stroke_style_str(&format!("rgba({LINK_RGB}, {opacity})"));
		self.set_line_width(LINK_WIDTH);
		self.stroke();
	}
}
