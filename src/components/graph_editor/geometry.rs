use super::types::{Curvature, Edge, Point};

pub const CURVE_STEP: f64 = 50.0;
pub const LOOP_BASE_HEIGHT: f64 = 85.0;
pub const LOOP_HEIGHT_STEP: f64 = 30.0;
pub const LOOP_BASE_HALF_WIDTH: f64 = 35.0;
pub const LOOP_WIDTH_STEP: f64 = 20.0;
pub const LABEL_OFFSET: f64 = 18.0;
pub const LOOP_LABEL_RISE: f64 = 100.0;

const CURVE_SAMPLES: usize = 32;

pub fn distance(a: Point, b: Point) -> f64 {
	(b - a).length()
}

pub fn midpoint(a: Point, b: Point) -> Point {
	(a + b) / 2.0
}

// Coincident endpoints have no direction; dividing by 1 keeps the result
// finite and collapses the offset onto the midpoint.
fn safe_length(v: Point) -> f64 {
	let len = v.length();
	if len == 0.0 { 1.0 } else { len }
}

/// Unit vector perpendicular to `from -> to` on the side positive curvature
/// bends towards.
pub fn chord_normal(from: Point, to: Point) -> Point {
	let d = to - from;
	let len = safe_length(d);
	Point::new(d.y / len, -d.x / len)
}

pub fn control_point(from: Point, to: Point, c: f64) -> Point {
	midpoint(from, to) + chord_normal(from, to) * c
}

pub fn adjusted_endpoints(from: Point, to: Point, radius: f64) -> (Point, Point) {
	let d = to - from;
	let dist = d.length();
	if dist == 0.0 {
		return (from, to);
	}
	let step = d * (radius / dist);
	(from + step, to - step)
}

pub fn is_left(a: Point, b: Point, c: Point) -> bool {
	(b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x) > 0.0
}

pub fn pulled_curvature(from: Point, to: Point, pointer: Point) -> f64 {
	let magnitude = distance(pointer, midpoint(from, to)) * 2.0;
	if is_left(from, to, pointer) { -magnitude } else { magnitude }
}

/// Rank of `edge` among the edges sharing its unordered endpoint pair, and the
/// size of that group. Ordered by creation sequence.
pub fn parallel_rank(edge: &Edge, edges: &[Edge]) -> (usize, usize) {
	let mut group: Vec<&Edge> = edges.iter().filter(|e| e.same_pair(edge)).collect();
	group.sort_by_key(|e| e.seq);
	let rank = group.iter().position(|e| e.id == edge.id).unwrap_or(0);
	(rank, group.len())
}

pub fn fan_curvature(rank: usize, count: usize) -> f64 {
	if count <= 1 {
		return 0.0;
	}
	CURVE_STEP * (rank as f64 - (count - 1) as f64 / 2.0)
}

/// The curvature actually drawn. A lone edge is always straight.
pub fn effective_curvature(edge: &Edge, edges: &[Edge]) -> f64 {
	let (rank, count) = parallel_rank(edge, edges);
	if count <= 1 {
		return 0.0;
	}
	match edge.curvature {
		Curvature::Auto => fan_curvature(rank, count),
		Curvature::Explicit(value) => value,
		Curvature::Straight => 0.0,
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoopShape {
	pub height: f64,
	pub half_width: f64,
}

pub fn loop_shape(edge: &Edge, edges: &[Edge]) -> LoopShape {
	let (rank, _) = parallel_rank(edge, edges);
	let rank = rank as f64;
	LoopShape {
		height: LOOP_BASE_HEIGHT + edge.curvature.stored() + rank * LOOP_HEIGHT_STEP,
		half_width: LOOP_BASE_HALF_WIDTH + rank * LOOP_WIDTH_STEP,
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EdgePath {
	Line { from: Point, to: Point },
	Quadratic { from: Point, ctrl: Point, to: Point },
	Loop { origin: Point, c1: Point, c2: Point },
}

impl EdgePath {
	pub fn start(&self) -> Point {
		match *self {
			EdgePath::Line { from, .. } | EdgePath::Quadratic { from, .. } => from,
			EdgePath::Loop { origin, .. } => origin,
		}
	}

	pub fn end(&self) -> Point {
		match *self {
			EdgePath::Line { to, .. } | EdgePath::Quadratic { to, .. } => to,
			EdgePath::Loop { origin, .. } => origin,
		}
	}

	pub fn end_direction(&self) -> Point {
		let d = match *self {
			EdgePath::Line { from, to } => to - from,
			EdgePath::Quadratic { ctrl, to, .. } => to - ctrl,
			EdgePath::Loop { origin, c2, .. } => origin - c2,
		};
		d / safe_length(d)
	}

	pub fn point_at(&self, t: f64) -> Point {
		match *self {
			EdgePath::Line { from, to } => from + (to - from) * t,
			EdgePath::Quadratic { from, ctrl, to } => quadratic_point(t, from, ctrl, to),
			EdgePath::Loop { origin, c1, c2 } => cubic_point(t, origin, c1, c2, origin),
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeGeometry {
	pub path: EdgePath,
	pub label: Point,
	pub directed: bool,
}

pub fn edge_geometry(edge: &Edge, edges: &[Edge], from: Point, to: Point) -> EdgeGeometry {
	let (path, label) = if edge.is_loop() {
		let shape = loop_shape(edge, edges);
		let c1 = Point::new(from.x - shape.half_width, from.y - shape.height);
		let c2 = Point::new(from.x + shape.half_width, from.y - shape.height);
		(
			EdgePath::Loop { origin: from, c1, c2 },
			Point::new(from.x, from.y - LOOP_LABEL_RISE),
		)
	} else {
		let c = effective_curvature(edge, edges);
		if c == 0.0 {
			(EdgePath::Line { from, to }, midpoint(from, to))
		} else {
			let ctrl = control_point(from, to, c);
			(
				EdgePath::Quadratic { from, ctrl, to },
				curved_label_anchor(from, ctrl, to),
			)
		}
	};
	EdgeGeometry {
		path,
		label,
		directed: edge.is_directed,
	}
}

/// Midpoint of the quadratic, pushed outward so the label clears the stroke.
pub fn curved_label_anchor(from: Point, ctrl: Point, to: Point) -> Point {
	let curve_mid = (from + ctrl * 2.0 + to) / 4.0;
	let outward = curve_mid - midpoint(from, to);
	let len = outward.length();
	if len > 1.0 {
		return curve_mid + outward / len * LABEL_OFFSET;
	}
	let d = to - from;
	let chord_len = safe_length(d);
	let normal = Point::new(-d.y / chord_len, d.x / chord_len);
	curve_mid + normal * LABEL_OFFSET
}

pub fn quadratic_point(t: f64, p0: Point, p1: Point, p2: Point) -> Point {
	let u = 1.0 - t;
	p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

pub fn cubic_point(t: f64, p0: Point, p1: Point, p2: Point, p3: Point) -> Point {
	let u = 1.0 - t;
	p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
}

pub fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
	let v = b - a;
	let w = p - a;
	let vv = v.x * v.x + v.y * v.y;
	let t = if vv > 0.0 {
		((w.x * v.x + w.y * v.y) / vv).clamp(0.0, 1.0)
	} else {
		0.0
	};
	distance(p, a + v * t)
}

pub fn distance_to_path(p: Point, path: &EdgePath) -> f64 {
	if let EdgePath::Line { from, to } = *path {
		return segment_distance(p, from, to);
	}
	let mut best = f64::INFINITY;
	let mut prev = path.start();
	for i in 1..=CURVE_SAMPLES {
		let next = path.point_at(i as f64 / CURVE_SAMPLES as f64);
		best = best.min(segment_distance(p, prev, next));
		prev = next;
	}
	best
}
