use log::{debug, info, warn};
use serde_json::Value;

use super::api::{
	AnalysisRequest, ResultSlots, SlotKind, SlotOutcome, Ticket, cycle_info, parse_coloring,
	shortest_path_highlight, summarize, traversal_highlight,
};
use super::camera::ViewTransform;
use super::config::EditorConfig;
use super::error::{ApiError, EditError};
use super::highlight::{HighlightKind, HighlightOverlay, HighlightSet};
use super::interaction::{Effect, Interaction, PointerEvent, Scene};
use super::store::{GraphStore, parse_weight};
use super::types::{EdgeId, NodeId, Point, Tool};

/// Input the editor needs from the user before it can finish an edit.
#[derive(Clone, Debug, PartialEq)]
pub enum Prompt {
	Rename { node: NodeId, label: String },
	Weight { edge: EdgeId, weight: f64 },
}

pub fn highlight_kind(slot: SlotKind) -> Option<HighlightKind> {
	match slot {
		SlotKind::ShortestPath => Some(HighlightKind::ShortestPath),
		SlotKind::DepthFirst => Some(HighlightKind::DepthFirst),
		SlotKind::BreadthFirst => Some(HighlightKind::BreadthFirst),
		_ => None,
	}
}

fn highlight_from(slot: SlotKind, value: &Value) -> Option<HighlightSet> {
	match slot {
		SlotKind::ShortestPath => shortest_path_highlight(value),
		SlotKind::DepthFirst => traversal_highlight(value, HighlightKind::DepthFirst),
		SlotKind::BreadthFirst => traversal_highlight(value, HighlightKind::BreadthFirst),
		_ => None,
	}
}

pub struct EditorState {
	pub store: GraphStore,
	pub transform: ViewTransform,
	pub interaction: Interaction,
	pub overlay: HighlightOverlay,
	pub results: ResultSlots,
	pub config: EditorConfig,
	pub is_directed: bool,
	pub width: f64,
	pub height: f64,
}

impl EditorState {
	pub fn new(config: EditorConfig, width: f64, height: f64) -> Self {
		Self {
			store: GraphStore::new(),
			transform: ViewTransform::default(),
			interaction: Interaction::new(),
			overlay: HighlightOverlay::new(),
			results: ResultSlots::new(),
			config,
			is_directed: false,
			width,
			height,
		}
	}

	/// Runs one pointer event through the state machine and applies the
	/// resulting effects. Returns the dialogs the UI must open.
	pub fn dispatch(&mut self, event: PointerEvent) -> Vec<Prompt> {
		let scene = Scene {
			store: &self.store,
			camera: &self.transform,
			is_directed: self.is_directed,
			pick: self.config.pick,
		};
		let effects = self.interaction.handle(&event, &scene);
		effects.into_iter().filter_map(|e| self.apply(e)).collect()
	}

	pub fn apply(&mut self, effect: Effect) -> Option<Prompt> {
		let result = match effect {
			Effect::Pan(delta) => {
				self.transform.pan(delta);
				Ok(())
			}
			Effect::Zoom { anchor, wheel_delta } => {
				self.transform.zoom_by_wheel(anchor, wheel_delta);
				Ok(())
			}
			Effect::AddNode(at) => {
				self.store.add_node(at);
				self.graph_changed();
				Ok(())
			}
			Effect::MoveNode { node, to } => self.store.move_node(node, to),
			Effect::RemoveNode(node) => self.store.remove_node(node).map(|_| self.graph_changed()),
			Effect::AddEdge { from, to, directed } => self
				.store
				.add_edge(from, to, directed)
				.map(|_| self.graph_changed()),
			Effect::AddSelfLoop { node, directed } => self
				.store
				.add_self_loop(node, directed)
				.map(|_| self.graph_changed()),
			Effect::RemoveEdge(edge) => self.store.remove_edge(edge).map(|_| self.graph_changed()),
			Effect::SetCurvature { edge, curvature } => self.store.set_curvature(edge, curvature),
			Effect::RequestRename { node, label } => return Some(Prompt::Rename { node, label }),
			Effect::RequestWeight { edge, weight } => return Some(Prompt::Weight { edge, weight }),
		};
		if let Err(err) = result {
			warn!("edit rejected: {err}");
		}
		None
	}

	/// Highlights refer to the graph they were computed on.
	fn graph_changed(&mut self) {
		if self.overlay.active_kind().is_some() {
			debug!("graph edited, dropping highlight");
			self.overlay.clear();
		}
	}

	pub fn set_tool(&mut self, tool: Tool) {
		self.interaction.set_tool(tool);
	}

	pub fn set_directed(&mut self, directed: bool) {
		info!("graph is now {}", if directed { "directed" } else { "undirected" });
		self.is_directed = directed;
	}

	pub fn rename_node(&mut self, node: NodeId, label: &str) -> Result<(), EditError> {
		self.store.rename_node(node, label)
	}

	pub fn set_weight(&mut self, edge: EdgeId, input: &str) -> Result<(), EditError> {
		let weight = parse_weight(input)?;
		self.store.set_weight(edge, weight)?;
		self.graph_changed();
		Ok(())
	}

	pub fn node_by_label(&self, label: &str) -> Option<NodeId> {
		let label = label.trim();
		self.store.nodes().iter().find(|n| n.label == label).map(|n| n.id)
	}

	pub fn connection_preview(&self) -> Option<(Point, Point)> {
		let source = self.interaction.connection_source()?;
		Some((self.store.position(source)?, self.interaction.pointer()))
	}

	/// Issues a ticket and builds the body for `request`. Running an algorithm
	/// drops whatever highlight is showing.
	pub fn begin_request(&mut self, request: AnalysisRequest) -> Result<(Ticket, String), ApiError> {
		let body = request.body(&self.store, self.is_directed)?;
		if highlight_kind(request.slot()).is_some() {
			self.overlay.clear();
		}
		Ok((self.results.begin(request.slot()), body))
	}

	/// Stores a response and derives highlights or coloring from it. Returns
	/// false when a newer request of the same kind made it stale.
	pub fn finish_request(&mut self, ticket: Ticket, outcome: Result<Value, ApiError>) -> bool {
		if !self.results.complete(ticket, &outcome) {
			return false;
		}
		let Ok(value) = outcome else {
			return true;
		};
		match ticket.kind {
			SlotKind::Solutions => {
				let coloring = parse_coloring(&value);
				debug!("coloring covers {} vertices", coloring.len());
				self.overlay.set_coloring(coloring);
			}
			kind => {
				if let Some(set) = highlight_from(kind, &value) {
					self.overlay.replace(set);
				}
			}
		}
		true
	}

	/// Shows the highlight stored for `kind` again, or hides it if it is the
	/// one already showing.
	pub fn show_result(&mut self, kind: SlotKind) {
		let Some(set) = self.results.ready(kind).and_then(|v| highlight_from(kind, v)) else {
			return;
		};
		self.overlay.toggle(set);
	}

	/// Toggles the shortest cycle from the last analysis. The service names
	/// its vertices by label.
	pub fn show_cycle(&mut self) {
		let Some(cycle) = self.results.ready(SlotKind::Analysis).and_then(cycle_info) else {
			return;
		};
		let nodes: Vec<NodeId> = cycle.labels.iter().filter_map(|l| self.node_by_label(l)).collect();
		self.overlay
			.toggle(HighlightSet::new(HighlightKind::Cycle, nodes, cycle.edge_ids));
	}

	pub fn clear_result(&mut self, kind: SlotKind) {
		self.results.clear(kind);
		if highlight_kind(kind).is_some_and(|k| self.overlay.active_kind() == Some(k)) {
			self.overlay.clear();
		}
		if kind == SlotKind::Solutions {
			self.overlay.set_coloring(Default::default());
			self.overlay.set_coloring_visible(false);
		}
	}

	pub fn slot_text(&self, kind: SlotKind) -> String {
		match self.results.get(kind) {
			None => String::new(),
			Some(SlotOutcome::Pending) => "running…".to_string(),
			Some(SlotOutcome::Failed(message)) => format!("error: {message}"),
			Some(SlotOutcome::Ready(value)) => summarize(kind, value, &self.store),
		}
	}

	pub fn toggle_coloring(&mut self) -> bool {
		self.overlay.toggle_coloring()
	}

	pub fn clear(&mut self) {
		info!("clearing canvas");
		self.store.clear();
		self.overlay.reset();
		self.results.clear_all();
		self.interaction.set_tool(self.interaction.tool());
		self.transform = ViewTransform::default();
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}
}
