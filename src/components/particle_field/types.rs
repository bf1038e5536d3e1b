use thiserror::Error;
use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Default three-color palette, assigned round-robin by node index.
pub const PALETTE: [&str; 3] = ["#00c2ff", "#7928ca", "#00f090"];

/// Errors raised while bringing up a particle field.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
	/// No container element was available to host the canvas.
	#[error("particle field container is missing")]
	MissingContainer,
	/// The container (or requested surface) has no drawable area.
	#[error("particle field surface is empty ({width}x{height})")]
	EmptySurface {
		/// Requested width in pixels.
		width: f64,
		/// Requested height in pixels.
		height: f64,
	},
	/// A tunable is out of range.
	#[error("invalid particle field config: {0}")]
	InvalidConfig(String),
	/// The canvas refused to hand out a 2d context.
	#[error("2d canvas context unavailable")]
	ContextUnavailable,
	/// A browser API call threw.
	#[error("browser call failed: {0}")]
	Js(String),
}

impl From<JsValue> for FieldError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
	}
}

/// Tunables for the particle field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
	/// Number of nodes, fixed for the field's lifetime.
	pub node_count: usize,
	/// Smallest node radius.
	pub radius_min: f64,
	/// Upper bound (exclusive) of the node radius.
	pub radius_max: f64,
	/// Per-axis speed bound, in surface units per frame.
	pub max_speed: f64,
	/// Pairs closer than this are joined by a line.
	pub link_distance: f64,
	/// Opacity of a line between two coincident nodes.
	pub link_opacity: f64,
	/// CSS colors, assigned by `index % palette.len()`.
	pub palette: Vec<String>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			node_count: 30,
			radius_min: 2.0,
			radius_max: 5.0,
			max_speed: 0.25,
			link_distance: 150.0,
			link_opacity: 0.1,
			palette: PALETTE.iter().map(|c| (*c).to_string()).collect(),
		}
	}
}

impl FieldConfig {
	/// Reject configs that cannot produce a sensible field.
	pub fn validate(&self) -> Result<(), FieldError> {
		let invalid = |msg: &str| Err(FieldError::InvalidConfig(msg.into()));
		if self.node_count == 0 {
			return invalid("node_count must be at least 1");
		}
		if self.palette.is_empty() {
			return invalid("palette must not be empty");
		}
		if !(self.link_distance > 0.0) {
			return invalid("link_distance must be positive");
		}
		if !(self.radius_min > 0.0) || self.radius_min > self.radius_max {
			return invalid("radius range must be positive and ordered");
		}
		if !(self.max_speed >= 0.0) {
			return invalid("max_speed must not be negative");
		}
		if !(0.0..=1.0).contains(&self.link_opacity) {
			return invalid("link_opacity must be within 0..=1");
		}
		Ok(())
	}

	/// Palette entry for the node at `index`.
	pub fn color_for(&self, index: usize) -> &str {
		&self.palette[index % self.palette.len()]
	}
}

/// A single animated point.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Circle radius.
	pub radius: f64,
	/// Horizontal velocity per frame.
	pub vx: f64,
	/// Vertical velocity per frame.
	pub vy: f64,
	/// CSS fill color.
	pub color: String,
}

impl Node {
	/// Move one frame, then flip any velocity component whose axis left the
	/// surface. Position is never clamped.
	pub fn advance(&mut self, width: f64, height: f64) {
		self.x += self.vx;
		self.y += self.vy;
		if self.x < 0.0 || self.x > width {
			self.vx = -self.vx;
		}
		if self.y < 0.0 || self.y > height {
			self.vy = -self.vy;
		}
	}

	/// Euclidean distance between two nodes.
	pub fn distance_to(&self, other: &Node) -> f64 {
		let (dx, dy) = (other.x - self.x, other.y - self.y);
		(dx * dx + dy * dy).sqrt()
	}
}
