use std::collections::{HashMap, HashSet};

use super::types::{EdgeId, Node, NodeId};

pub const PALETTE: [&str; 8] = [
	"#3b82f6", "#ef4444", "#10b981", "#f59e0b", "#8b5cf6", "#ec4899", "#06b6d4", "#14b8a6",
];

pub fn palette_color(index: usize) -> &'static str {
	PALETTE[index % PALETTE.len()]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HighlightKind {
	ShortestPath,
	DepthFirst,
	BreadthFirst,
	Cycle,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HighlightSet {
	pub kind: HighlightKind,
	pub node_ids: HashSet<NodeId>,
	pub edge_ids: HashSet<EdgeId>,
}

impl HighlightSet {
	pub fn new(
		kind: HighlightKind,
		nodes: impl IntoIterator<Item = NodeId>,
		edges: impl IntoIterator<Item = EdgeId>,
	) -> Self {
		Self {
			kind,
			node_ids: nodes.into_iter().collect(),
			edge_ids: edges.into_iter().collect(),
		}
	}
}

/// Emphasis layered over the graph at render time. Never mutates the graph.
#[derive(Clone, Debug, Default)]
pub struct HighlightOverlay {
	active: Option<HighlightSet>,
	coloring: HashMap<NodeId, usize>,
	coloring_visible: bool,
}

impl HighlightOverlay {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn replace(&mut self, set: HighlightSet) {
		self.active = Some(set);
	}

	/// Shows `set`, or hides it if a set of the same kind is already shown.
	pub fn toggle(&mut self, set: HighlightSet) {
		if self.active_kind() == Some(set.kind) {
			self.active = None;
		} else {
			self.active = Some(set);
		}
	}

	pub fn clear(&mut self) {
		self.active = None;
	}

	pub fn active_kind(&self) -> Option<HighlightKind> {
		self.active.as_ref().map(|s| s.kind)
	}

	pub fn is_node_highlighted(&self, id: NodeId) -> bool {
		self.active.as_ref().is_some_and(|s| s.node_ids.contains(&id))
	}

	pub fn is_edge_highlighted(&self, id: EdgeId) -> bool {
		self.active.as_ref().is_some_and(|s| s.edge_ids.contains(&id))
	}

	pub fn set_coloring(&mut self, coloring: HashMap<NodeId, usize>) {
		self.coloring = coloring;
	}

	pub fn has_coloring(&self) -> bool {
		!self.coloring.is_empty()
	}

	pub fn coloring_visible(&self) -> bool {
		self.coloring_visible
	}

	pub fn set_coloring_visible(&mut self, visible: bool) {
		self.coloring_visible = visible;
	}

	pub fn toggle_coloring(&mut self) -> bool {
		self.coloring_visible = !self.coloring_visible;
		self.coloring_visible
	}

	pub fn display_color<'a>(&self, node: &'a Node) -> Option<&'a str> {
		if self.coloring_visible {
			if let Some(&class) = self.coloring.get(&node.id) {
				return Some(palette_color(class));
			}
		}
		node.color.as_deref()
	}

	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn node(id: NodeId) -> Node {
		Node {
			id,
			seq: id,
			x: 0.0,
			y: 0.0,
			label: format!("v{id}"),
			color: None,
		}
	}

	#[test]
	fn test_membership() {
		let mut overlay = HighlightOverlay::new();
		assert!(!overlay.is_node_highlighted(1));
		overlay.replace(HighlightSet::new(HighlightKind::ShortestPath, [1, 2], [10]));
		assert!(overlay.is_node_highlighted(1));
		assert!(!overlay.is_node_highlighted(3));
		assert!(overlay.is_edge_highlighted(10));
		assert!(!overlay.is_edge_highlighted(1));
	}

	#[test]
	fn test_replace_does_not_merge() {
		let mut overlay = HighlightOverlay::new();
		overlay.replace(HighlightSet::new(HighlightKind::DepthFirst, [], [1, 2]));
		overlay.replace(HighlightSet::new(HighlightKind::BreadthFirst, [], [3]));
		assert!(!overlay.is_edge_highlighted(1));
		assert!(overlay.is_edge_highlighted(3));
		assert_eq!(overlay.active_kind(), Some(HighlightKind::BreadthFirst));
	}

	#[test]
	fn test_toggle_same_kind_hides() {
		let mut overlay = HighlightOverlay::new();
		let set = HighlightSet::new(HighlightKind::Cycle, [4], []);
		overlay.toggle(set.clone());
		assert!(overlay.is_node_highlighted(4));
		overlay.toggle(set);
		assert_eq!(overlay.active_kind(), None);
	}

	#[test]
	fn test_coloring_toggle() {
		let mut overlay = HighlightOverlay::new();
		overlay.set_coloring(HashMap::from([(0, 0), (1, 1)]));
		let (n0, n1, n2) = (node(0), node(1), node(2));

		assert!(overlay.toggle_coloring());
		assert_eq!(overlay.display_color(&n0), Some(PALETTE[0]));
		assert_eq!(overlay.display_color(&n1), Some(PALETTE[1]));
		assert_eq!(overlay.display_color(&n2), None);

		assert!(!overlay.toggle_coloring());
		assert_eq!(overlay.display_color(&n0), None);
		assert_eq!(overlay.display_color(&n1), None);
	}

	#[test]
	fn test_palette_wraps() {
		assert_eq!(palette_color(8), PALETTE[0]);
		assert_eq!(palette_color(11), PALETTE[3]);
	}

	#[test]
	fn test_own_color_survives_when_uncolored() {
		let mut overlay = HighlightOverlay::new();
		let mut n = node(5);
		n.color = Some("#000000".into());
		overlay.set_coloring_visible(true);
		assert_eq!(overlay.display_color(&n), Some("#000000"));
		overlay.reset();
		assert!(!overlay.coloring_visible());
		assert!(!overlay.has_coloring());
	}
}
