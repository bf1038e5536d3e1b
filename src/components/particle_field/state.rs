use super::render::Surface;
use super::types::{FieldConfig, FieldError, Node};

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

/// A connection between two nodes that are within the link distance.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
	/// Lower node index.
	pub a: usize,
	/// Higher node index.
	pub b: usize,
	/// Line alpha, shrinking to 0 at the link distance.
	pub opacity: f64,
}

/// A fixed set of drifting nodes on a `width` x `height` surface.
pub struct ParticleField {
	config: FieldConfig,
	nodes: Vec<Node>,
	width: f64,
	height: f64,
}

impl ParticleField {
	/// Seed `config.node_count` nodes from `rng`, a uniform source in `[0, 1)`.
	pub fn new(
		config: FieldConfig,
		width: f64,
		height: f64,
		rng: &mut impl FnMut() -> f64,
	) -> Result<Self, FieldError> {
		check_surface(width, height)?;
		config.validate()?;

		let speed = config.max_speed;
		let nodes = (0..config.node_count)
			.map(|i| Node {
				x: rng() * width,
				y: rng() * height,
				radius: config.radius_min + rng() * (config.radius_max - config.radius_min),
				vx: (rng() - 0.5) * 2.0 * speed,
				vy: (rng() - 0.5) * 2.0 * speed,
				color: config.color_for(i).to_string(),
			})
			.collect();

		Ok(Self {
			config,
			nodes,
			width,
			height,
		})
	}

	/// Build a field around explicit nodes instead of random ones.
	pub fn from_nodes(
		config: FieldConfig,
		width: f64,
		height: f64,
		nodes: Vec<Node>,
	) -> Result<Self, FieldError> {
		check_surface(width, height)?;
		if nodes.is_empty() {
			return Err(FieldError::InvalidConfig("field needs at least one node".into()));
		}
		let config = FieldConfig {
			node_count: nodes.len(),
			..config
		};
		config.validate()?;
		Ok(Self {
			config,
			nodes,
			width,
			height,
		})
	}

	/// Nodes in index order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// The (validated) config in use.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Current surface `(width, height)`.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Line alpha for two nodes `distance` apart, or `None` when they are too
	/// far apart to connect.
	pub fn link_opacity(&self, distance: f64) -> Option<f64> {
		let max = self.config.link_distance;
		(distance < max).then(|| self.config.link_opacity * (1.0 - distance / max))
	}

	/// Every unordered pair currently within the link distance.
	pub fn links(&self) -> Vec<Link> {
		let mut links = Vec::new();
		for (i, a) in self.nodes.iter().enumerate() {
			for (j, b) in self.nodes.iter().enumerate().skip(i + 1) {
				if let Some(opacity) = self.link_opacity(a.distance_to(b)) {
					links.push(Link { a: i, b: j, opacity });
				}
			}
		}
		links
	}

	/// Render one frame.
	///
	/// Nodes are processed in index order: each one moves and bounces, is
	/// drawn, then links to every higher-indexed node. Those nodes have not
	/// moved yet this frame, so lines use their previous positions.
	pub fn step(&mut self, surface: &mut impl Surface) {
		let (width, height) = (self.width, self.height);
		surface.clear(width, height);

		for i in 0..self.nodes.len() {
			self.nodes[i].advance(width, height);

			let node = &self.nodes[i];
			surface.fill_circle(node.x, node.y, node.radius, &node.color);

			for other in &self.nodes[i + 1..] {
				if let Some(opacity) = self.link_opacity(node.distance_to(other)) {
					surface.stroke_link((node.x, node.y), (other.x, other.y), opacity);
				}
			}
		}
	}

	/// Adopt new surface dimensions. Nodes keep their positions and
	/// velocities; the next step bounces them against the new bounds.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}

fn check_surface(width: f64, height: f64) -> Result<(), FieldError> {
	if width > 0.0 && height > 0.0 {
		Ok(())
	} else {
		Err(FieldError::EmptySurface { width, height })
	}
}
