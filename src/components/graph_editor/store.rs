use log::{debug, warn};

use super::error::EditError;
use super::types::{Curvature, Edge, EdgeId, Node, NodeId, Point};

pub const LABEL_PREFIX: &str = "v";
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Authoritative node and edge collections. All mutation goes through here so
/// label uniqueness and cascading deletes cannot be bypassed.
#[derive(Clone, Debug, Default)]
pub struct GraphStore {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
	next_id: u64,
	next_seq: u64,
}

impl GraphStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
		self.edges.iter().find(|e| e.id == id)
	}

	pub fn position(&self, id: NodeId) -> Option<Point> {
		self.node(id).map(Node::position)
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}

	fn allocate(&mut self) -> (u64, u64) {
		let ids = (self.next_id, self.next_seq);
		self.next_id += 1;
		self.next_seq += 1;
		ids
	}

	fn label_in_use(&self, label: &str, except: Option<NodeId>) -> bool {
		self.nodes
			.iter()
			.any(|n| n.label == label && Some(n.id) != except)
	}

	pub fn next_label(&self) -> String {
		let mut i = 0usize;
		loop {
			let label = format!("{LABEL_PREFIX}{i}");
			if !self.label_in_use(&label, None) {
				return label;
			}
			i += 1;
		}
	}

	pub fn add_node(&mut self, at: Point) -> NodeId {
		let label = self.next_label();
		let (id, seq) = self.allocate();
		debug!("add vertex {label} (#{id}) at ({:.1}, {:.1})", at.x, at.y);
		self.nodes.push(Node {
			id,
			seq,
			x: at.x,
			y: at.y,
			label,
			color: None,
		});
		id
	}

	pub fn move_node(&mut self, id: NodeId, to: Point) -> Result<(), EditError> {
		let node = self
			.nodes
			.iter_mut()
			.find(|n| n.id == id)
			.ok_or(EditError::UnknownNode(id))?;
		node.x = to.x;
		node.y = to.y;
		Ok(())
	}

	pub fn rename_node(&mut self, id: NodeId, label: &str) -> Result<(), EditError> {
		let label = label.trim();
		if label.is_empty() {
			return Err(EditError::EmptyLabel);
		}
		if self.node(id).is_none() {
			return Err(EditError::UnknownNode(id));
		}
		if self.label_in_use(label, Some(id)) {
			warn!("rename of #{id} rejected: \"{label}\" already in use");
			return Err(EditError::DuplicateLabel(label.to_string()));
		}
		if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
			node.label = label.to_string();
		}
		Ok(())
	}

	/// Removes the node and every edge touching it. Returns the removed edges.
	pub fn remove_node(&mut self, id: NodeId) -> Result<Vec<Edge>, EditError> {
		let idx = self
			.nodes
			.iter()
			.position(|n| n.id == id)
			.ok_or(EditError::UnknownNode(id))?;
		let node = self.nodes.remove(idx);
		let (removed, kept): (Vec<Edge>, Vec<Edge>) = std::mem::take(&mut self.edges)
			.into_iter()
			.partition(|e| e.touches(id));
		self.edges = kept;
		debug!("removed vertex {} with {} incident edges", node.label, removed.len());
		Ok(removed)
	}

	pub fn add_edge(&mut self, from: NodeId, to: NodeId, is_directed: bool) -> Result<EdgeId, EditError> {
		for end in [from, to] {
			if self.node(end).is_none() {
				return Err(EditError::UnknownNode(end));
			}
		}
		let (id, seq) = self.allocate();
		debug!("add edge #{id}: #{from} -> #{to} (directed: {is_directed})");
		self.edges.push(Edge {
			id,
			seq,
			from,
			to,
			weight: DEFAULT_WEIGHT,
			has_weight: false,
			curvature: Curvature::Auto,
			is_directed,
		});
		Ok(id)
	}

	pub fn add_self_loop(&mut self, node: NodeId, is_directed: bool) -> Result<EdgeId, EditError> {
		self.add_edge(node, node, is_directed)
	}

	pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge, EditError> {
		let idx = self
			.edges
			.iter()
			.position(|e| e.id == id)
			.ok_or(EditError::UnknownEdge(id))?;
		Ok(self.edges.remove(idx))
	}

	fn edge_mut(&mut self, id: EdgeId) -> Result<&mut Edge, EditError> {
		self.edges
			.iter_mut()
			.find(|e| e.id == id)
			.ok_or(EditError::UnknownEdge(id))
	}

	pub fn set_weight(&mut self, id: EdgeId, weight: f64) -> Result<(), EditError> {
		if !weight.is_finite() {
			return Err(EditError::InvalidWeight(weight.to_string()));
		}
		let edge = self.edge_mut(id)?;
		edge.weight = weight;
		edge.has_weight = true;
		Ok(())
	}

	pub fn set_curvature(&mut self, id: EdgeId, curvature: Curvature) -> Result<(), EditError> {
		self.edge_mut(id)?.curvature = curvature;
		Ok(())
	}

	/// Drops every node and edge. Ids keep counting so stale references from
	/// in-flight results never match new entities.
	pub fn clear(&mut self) {
		self.nodes.clear();
		self.edges.clear();
	}
}

pub fn parse_weight(input: &str) -> Result<f64, EditError> {
	let trimmed = input.trim();
	match trimmed.replace(',', ".").parse::<f64>() {
		Ok(w) if w.is_finite() => Ok(w),
		_ => Err(EditError::InvalidWeight(trimmed.to_string())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn store_with(n: usize) -> (GraphStore, Vec<NodeId>) {
		let mut store = GraphStore::new();
		let ids = (0..n)
			.map(|i| store.add_node(Point::new(i as f64 * 100.0, 0.0)))
			.collect();
		(store, ids)
	}

	#[test]
	fn test_overlapping_nodes_pick_the_oldest() {
		use super::super::camera::ViewTransform;
		use super::super::interaction::{PickTolerance, Scene};

		let mut store = GraphStore::new();
		let first = store.add_node(Point::new(0.0, 0.0));
		let second = store.add_node(Point::new(5.0, 0.0));
		store.nodes.swap(0, 1);
		assert_eq!(store.nodes()[0].id, second);

		let camera = ViewTransform::default();
		let scene = Scene {
			store: &store,
			camera: &camera,
			is_directed: false,
			pick: PickTolerance::default(),
		};
		assert_eq!(scene.node_at(Point::new(3.0, 0.0)), Some(first));
		assert_eq!(scene.node_at(Point::new(26.0, 0.0)), Some(second));
	}

	#[test]
	fn test_auto_labels_count_up() {
		let (store, _) = store_with(3);
		let labels: Vec<&str> = store.nodes().iter().map(|n| n.label.as_str()).collect();
		assert_eq!(labels, vec!["v0", "v1", "v2"]);
		assert_eq!(store.next_label(), "v3");
	}

	#[test]
	fn test_lowest_free_label_is_reused() {
		let (mut store, ids) = store_with(2);
		store.remove_node(ids[0]).unwrap();
		let id = store.add_node(Point::new(5.0, 5.0));
		assert_eq!(store.node(id).unwrap().label, "v0");
		assert_ne!(id, ids[0]);
	}

	#[test]
	fn test_label_probe_skips_renamed_labels() {
		let (mut store, ids) = store_with(1);
		store.rename_node(ids[0], "v1").unwrap();
		assert_eq!(store.next_label(), "v0");
		store.add_node(Point::default());
		assert_eq!(store.next_label(), "v2");
	}

	#[test]
	fn test_remove_node_cascades_only_incident_edges() {
		let (mut store, ids) = store_with(3);
		let ab = store.add_edge(ids[0], ids[1], false).unwrap();
		let aa = store.add_self_loop(ids[0], false).unwrap();
		let bc = store.add_edge(ids[1], ids[2], true).unwrap();
		let ca = store.add_edge(ids[2], ids[0], false).unwrap();

		let removed: Vec<EdgeId> = store.remove_node(ids[0]).unwrap().iter().map(|e| e.id).collect();
		assert_eq!(removed, vec![ab, aa, ca]);
		let left: Vec<EdgeId> = store.edges().iter().map(|e| e.id).collect();
		assert_eq!(left, vec![bc]);
		assert_eq!(store.nodes().len(), 2);
	}

	#[test]
	fn test_duplicate_rename_is_rejected() {
		let (mut store, ids) = store_with(2);
		let err = store.rename_node(ids[1], "v0").unwrap_err();
		assert_eq!(err, EditError::DuplicateLabel("v0".into()));
		assert_eq!(store.node(ids[0]).unwrap().label, "v0");
		assert_eq!(store.node(ids[1]).unwrap().label, "v1");
	}

	#[test]
	fn test_rename_to_own_label_and_trimmed() {
		let (mut store, ids) = store_with(1);
		store.rename_node(ids[0], "v0").unwrap();
		store.rename_node(ids[0], "  start ").unwrap();
		assert_eq!(store.node(ids[0]).unwrap().label, "start");
		assert_eq!(store.rename_node(ids[0], "   "), Err(EditError::EmptyLabel));
		assert_eq!(store.rename_node(99, "x"), Err(EditError::UnknownNode(99)));
	}

	#[test]
	fn test_new_edges_have_defaults_and_increasing_seq() {
		let (mut store, ids) = store_with(2);
		let e1 = store.add_edge(ids[0], ids[1], false).unwrap();
		let e2 = store.add_edge(ids[1], ids[0], true).unwrap();
		let first = store.edge(e1).unwrap();
		assert_eq!(first.weight, DEFAULT_WEIGHT);
		assert!(!first.has_weight);
		assert_eq!(first.curvature, Curvature::Auto);
		assert!(store.edge(e2).unwrap().seq > first.seq);
	}

	#[test]
	fn test_edge_to_missing_node_is_rejected() {
		let (mut store, ids) = store_with(1);
		assert_eq!(store.add_edge(ids[0], 42, false), Err(EditError::UnknownNode(42)));
		assert!(store.edges().is_empty());
	}

	#[test]
	fn test_set_weight_marks_edge_weighted() {
		let (mut store, ids) = store_with(2);
		let e = store.add_edge(ids[0], ids[1], false).unwrap();
		store.set_weight(e, 7.5).unwrap();
		let edge = store.edge(e).unwrap();
		assert_eq!(edge.weight, 7.5);
		assert!(edge.has_weight);
		assert!(store.set_weight(e, f64::NAN).is_err());
		assert_eq!(store.edge(e).unwrap().weight, 7.5);
	}

	#[test]
	fn test_parse_weight() {
		assert_eq!(parse_weight(" 3 "), Ok(3.0));
		assert_eq!(parse_weight("2,5"), Ok(2.5));
		assert_eq!(parse_weight("-1"), Ok(-1.0));
		assert!(parse_weight("abc").is_err());
		assert!(parse_weight("inf").is_err());
	}

	#[test]
	fn test_clear_keeps_ids_unique() {
		let (mut store, ids) = store_with(2);
		store.clear();
		assert!(store.is_empty());
		let fresh = store.add_node(Point::default());
		assert!(!ids.contains(&fresh));
		assert_eq!(store.node(fresh).unwrap().label, "v0");
	}
}
