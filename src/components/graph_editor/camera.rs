use super::types::Point;

pub const MIN_SCALE: f64 = 0.1;
pub const MAX_SCALE: f64 = 5.0;
pub const ZOOM_SENSITIVITY: f64 = 0.001;

/// World-to-screen transform: `screen = world * k + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

impl Default for ViewTransform {
	fn default() -> Self {
		Self { x: 0.0, y: 0.0, k: 1.0 }
	}
}

impl ViewTransform {
	pub fn to_world(&self, screen: Point) -> Point {
		Point::new((screen.x - self.x) / self.k, (screen.y - self.y) / self.k)
	}

	pub fn to_screen(&self, world: Point) -> Point {
		Point::new(world.x * self.k + self.x, world.y * self.k + self.y)
	}

	pub fn pan(&mut self, delta: Point) {
		self.x += delta.x;
		self.y += delta.y;
	}

	/// Changes the scale by `delta_scale`, keeping the world point under
	/// `anchor` (screen space) fixed.
	pub fn zoom(&mut self, anchor: Point, delta_scale: f64) {
		let new_k = (self.k + delta_scale).clamp(MIN_SCALE, MAX_SCALE);
		let ratio = new_k / self.k;
		self.x = anchor.x - (anchor.x - self.x) * ratio;
		self.y = anchor.y - (anchor.y - self.y) * ratio;
		self.k = new_k;
	}

	pub fn zoom_by_wheel(&mut self, anchor: Point, wheel_delta_y: f64) {
		self.zoom(anchor, -wheel_delta_y * ZOOM_SENSITIVITY);
	}

	pub fn visible_world_rect(&self, width: f64, height: f64) -> (Point, Point) {
		(
			self.to_world(Point::new(0.0, 0.0)),
			self.to_world(Point::new(width, height)),
		)
	}
}
