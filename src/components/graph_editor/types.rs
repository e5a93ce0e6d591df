use std::ops::{Add, Div, Mul, Sub};

use serde::{Deserialize, Serialize};

pub type NodeId = u64;
pub type EdgeId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn length(self) -> f64 {
		self.x.hypot(self.y)
	}
}

impl Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl Mul<f64> for Point {
	type Output = Point;

	fn mul(self, rhs: f64) -> Point {
		Point::new(self.x * rhs, self.y * rhs)
	}
}

impl Div<f64> for Point {
	type Output = Point;

	fn div(self, rhs: f64) -> Point {
		Point::new(self.x / rhs, self.y / rhs)
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	/// Creation order within the store. Ranking never relies on `Vec` order.
	pub seq: u64,
	pub x: f64,
	pub y: f64,
	pub label: String,
	pub color: Option<String>,
}

impl Node {
	pub fn position(&self) -> Point {
		Point::new(self.x, self.y)
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Curvature {
	#[default]
	Auto,
	Explicit(f64),
	/// Pulled back onto the chord; stays straight even inside a fan.
	Straight,
}

impl Curvature {
	pub fn stored(self) -> f64 {
		match self {
			Curvature::Explicit(value) => value,
			Curvature::Auto | Curvature::Straight => 0.0,
		}
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	pub id: EdgeId,
	pub seq: u64,
	pub from: NodeId,
	pub to: NodeId,
	pub weight: f64,
	pub has_weight: bool,
	pub curvature: Curvature,
	pub is_directed: bool,
}

impl Edge {
	pub fn is_loop(&self) -> bool {
		self.from == self.to
	}

	pub fn same_pair(&self, other: &Edge) -> bool {
		(self.from == other.from && self.to == other.to)
			|| (self.from == other.to && self.to == other.from)
	}

	pub fn touches(&self, node: NodeId) -> bool {
		self.from == node || self.to == node
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tool {
	#[default]
	PlaceVertex,
	ConnectUndirected,
	ConnectDirected,
	Select,
	Eraser,
	SetWeight,
	Rename,
	SelfLoop,
	Hand,
}

impl Tool {
	pub const ALL: [Tool; 9] = [
		Tool::PlaceVertex,
		Tool::ConnectUndirected,
		Tool::ConnectDirected,
		Tool::Select,
		Tool::Eraser,
		Tool::SetWeight,
		Tool::Rename,
		Tool::SelfLoop,
		Tool::Hand,
	];

	pub fn label(self) -> &'static str {
		match self {
			Tool::PlaceVertex => "Vertex",
			Tool::ConnectUndirected => "Edge",
			Tool::ConnectDirected => "Arc",
			Tool::Select => "Move",
			Tool::Eraser => "Erase",
			Tool::SetWeight => "Weight",
			Tool::Rename => "Rename",
			Tool::SelfLoop => "Loop",
			Tool::Hand => "Pan",
		}
	}

	pub fn is_connect(self) -> bool {
		matches!(self, Tool::ConnectUndirected | Tool::ConnectDirected)
	}
}
