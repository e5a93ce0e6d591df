use log::debug;

use super::camera::ViewTransform;
use super::geometry::{distance, edge_geometry, distance_to_path, midpoint, pulled_curvature};
use super::store::GraphStore;
use super::types::{Curvature, EdgeId, NodeId, Point, Tool};

/// Pulling an edge back this close to its chord midpoint snaps it straight.
pub const STRAIGHT_SNAP: f64 = 4.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PickTolerance {
	pub node_radius: f64,
	pub edge_distance: f64,
}

impl Default for PickTolerance {
	fn default() -> Self {
		Self {
			node_radius: 22.0,
			edge_distance: 10.0,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
	Primary,
	Middle,
	Secondary,
}

impl PointerButton {
	pub fn from_code(code: i16) -> Self {
		match code {
			0 => PointerButton::Primary,
			1 => PointerButton::Middle,
			_ => PointerButton::Secondary,
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
	Down { screen: Point, button: PointerButton },
	Move { screen: Point },
	Up { screen: Point },
	Leave,
	Wheel { screen: Point, delta_y: f64 },
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragMode {
	#[default]
	Idle,
	Panning,
	DraggingNode(NodeId),
	PullingCurvature(EdgeId),
	DrawingConnection { source: NodeId, directed: bool },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Hit {
	Node(NodeId),
	Edge(EdgeId),
	Canvas,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
	Pan(Point),
	Zoom { anchor: Point, wheel_delta: f64 },
	AddNode(Point),
	MoveNode { node: NodeId, to: Point },
	RemoveNode(NodeId),
	AddEdge { from: NodeId, to: NodeId, directed: bool },
	AddSelfLoop { node: NodeId, directed: bool },
	RemoveEdge(EdgeId),
	SetCurvature { edge: EdgeId, curvature: Curvature },
	RequestRename { node: NodeId, label: String },
	RequestWeight { edge: EdgeId, weight: f64 },
}

#[derive(Clone, Copy)]
pub struct Scene<'a> {
	pub store: &'a GraphStore,
	pub camera: &'a ViewTransform,
	pub is_directed: bool,
	pub pick: PickTolerance,
}

impl Scene<'_> {
	/// Oldest node (lowest `seq`) whose centre is within the pick radius.
	pub fn node_at(&self, world: Point) -> Option<NodeId> {
		self.store
			.nodes()
			.iter()
			.filter(|n| distance(n.position(), world) < self.pick.node_radius)
			.min_by_key(|n| n.seq)
			.map(|n| n.id)
	}

	pub fn edge_at(&self, world: Point) -> Option<EdgeId> {
		let edges = self.store.edges();
		edges
			.iter()
			.find(|e| {
				let (Some(from), Some(to)) = (self.store.position(e.from), self.store.position(e.to)) else {
					return false;
				};
				let geometry = edge_geometry(e, edges, from, to);
				distance_to_path(world, &geometry.path) <= self.pick.edge_distance
			})
			.map(|e| e.id)
	}

	pub fn hit_test(&self, world: Point) -> Hit {
		if let Some(id) = self.node_at(world) {
			return Hit::Node(id);
		}
		if let Some(id) = self.edge_at(world) {
			return Hit::Edge(id);
		}
		Hit::Canvas
	}
}

#[derive(Clone, Debug, Default)]
pub struct Interaction {
	tool: Tool,
	mode: DragMode,
	pointer: Point,
	last_screen: Point,
}

impl Interaction {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn tool(&self) -> Tool {
		self.tool
	}

	pub fn mode(&self) -> DragMode {
		self.mode
	}

	pub fn pointer(&self) -> Point {
		self.pointer
	}

	/// Switching tools abandons whatever gesture was in progress.
	pub fn set_tool(&mut self, tool: Tool) {
		debug!("tool -> {tool:?}");
		self.tool = tool;
		self.mode = DragMode::Idle;
	}

	pub fn connection_source(&self) -> Option<NodeId> {
		match self.mode {
			DragMode::DrawingConnection { source, .. } => Some(source),
			_ => None,
		}
	}

	pub fn handle(&mut self, event: &PointerEvent, scene: &Scene) -> Vec<Effect> {
		match *event {
			PointerEvent::Down { screen, button } => self.pointer_down(screen, button, scene),
			PointerEvent::Move { screen } => self.pointer_move(screen, scene),
			PointerEvent::Up { screen } => self.pointer_up(screen, scene),
			PointerEvent::Leave => {
				self.mode = DragMode::Idle;
				Vec::new()
			}
			PointerEvent::Wheel { screen, delta_y } => vec![Effect::Zoom {
				anchor: screen,
				wheel_delta: delta_y,
			}],
		}
	}

	fn pointer_down(&mut self, screen: Point, button: PointerButton, scene: &Scene) -> Vec<Effect> {
		let world = scene.camera.to_world(screen);
		self.pointer = world;
		self.last_screen = screen;

		if button == PointerButton::Middle || self.tool == Tool::Hand {
			self.mode = DragMode::Panning;
			return Vec::new();
		}
		if button == PointerButton::Secondary {
			return Vec::new();
		}

		match (scene.hit_test(world), self.tool) {
			(Hit::Canvas, Tool::PlaceVertex) => vec![Effect::AddNode(world)],
			(Hit::Canvas, _) => {
				self.mode = DragMode::Panning;
				Vec::new()
			}
			(Hit::Node(source), Tool::ConnectUndirected) => {
				self.mode = DragMode::DrawingConnection {
					source,
					directed: scene.is_directed,
				};
				Vec::new()
			}
			(Hit::Node(source), Tool::ConnectDirected) => {
				self.mode = DragMode::DrawingConnection {
					source,
					directed: true,
				};
				Vec::new()
			}
			(Hit::Node(node), Tool::Select) => {
				self.mode = DragMode::DraggingNode(node);
				Vec::new()
			}
			(Hit::Node(node), Tool::Rename) => match scene.store.node(node) {
				Some(n) => vec![Effect::RequestRename {
					node,
					label: n.label.clone(),
				}],
				None => Vec::new(),
			},
			(Hit::Node(node), Tool::SelfLoop) => vec![Effect::AddSelfLoop {
				node,
				directed: scene.is_directed,
			}],
			(Hit::Node(node), Tool::Eraser) => vec![Effect::RemoveNode(node)],
			(Hit::Edge(edge), Tool::Eraser) => vec![Effect::RemoveEdge(edge)],
			(Hit::Edge(edge), Tool::SetWeight) => match scene.store.edge(edge) {
				Some(e) => vec![Effect::RequestWeight { edge, weight: e.weight }],
				None => Vec::new(),
			},
			(Hit::Edge(edge), Tool::Select) => {
				self.mode = DragMode::PullingCurvature(edge);
				Vec::new()
			}
			_ => Vec::new(),
		}
	}

	fn pointer_move(&mut self, screen: Point, scene: &Scene) -> Vec<Effect> {
		let world = scene.camera.to_world(screen);
		let delta = screen - self.last_screen;
		self.last_screen = screen;
		self.pointer = world;

		match self.mode {
			DragMode::Panning => vec![Effect::Pan(delta)],
			DragMode::DraggingNode(node) => vec![Effect::MoveNode { node, to: world }],
			DragMode::PullingCurvature(edge) => {
				let Some(e) = scene.store.edge(edge) else {
					return Vec::new();
				};
				let (Some(from), Some(to)) = (scene.store.position(e.from), scene.store.position(e.to)) else {
					return Vec::new();
				};
				let curvature = if distance(world, midpoint(from, to)) <= STRAIGHT_SNAP {
					Curvature::Straight
				} else {
					Curvature::Explicit(pulled_curvature(from, to, world))
				};
				vec![Effect::SetCurvature { edge, curvature }]
			}
			DragMode::DrawingConnection { .. } | DragMode::Idle => Vec::new(),
		}
	}

	fn pointer_up(&mut self, screen: Point, scene: &Scene) -> Vec<Effect> {
		let world = scene.camera.to_world(screen);
		self.pointer = world;
		let effects = match self.mode {
			DragMode::DrawingConnection { source, directed } => match scene.node_at(world) {
				Some(target) if target != source => vec![Effect::AddEdge {
					from: source,
					to: target,
					directed,
				}],
				_ => {
					debug!("connection from #{source} abandoned");
					Vec::new()
				}
			},
			_ => Vec::new(),
		};
		self.mode = DragMode::Idle;
		effects
	}
}
