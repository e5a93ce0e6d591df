use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ApiError;
use super::highlight::{HighlightKind, HighlightSet};
use super::store::GraphStore;
use super::types::{EdgeId, NodeId};

#[derive(Debug, Serialize)]
pub struct NodePayload {
	pub id: NodeId,
	pub label: String,
}

#[derive(Debug, Serialize)]
pub struct EdgePayload {
	pub id: EdgeId,
	pub from: NodeId,
	pub to: NodeId,
	pub weight: f64,
	#[serde(rename = "hasWeight", skip_serializing_if = "Option::is_none")]
	pub has_weight: Option<bool>,
}

#[derive(Debug, Serialize)]
pub struct GraphPayload {
	pub nodes: Vec<NodePayload>,
	pub edges: Vec<EdgePayload>,
	pub is_directed: bool,
}

impl GraphPayload {
	pub fn from_store(store: &GraphStore, is_directed: bool, with_weight_flags: bool) -> Self {
		Self {
			nodes: store
				.nodes()
				.iter()
				.map(|n| NodePayload {
					id: n.id,
					label: n.label.clone(),
				})
				.collect(),
			edges: store
				.edges()
				.iter()
				.map(|e| EdgePayload {
					id: e.id,
					from: e.from,
					to: e.to,
					weight: e.weight,
					has_weight: with_weight_flags.then_some(e.has_weight),
				})
				.collect(),
			is_directed,
		}
	}
}

#[derive(Debug, Serialize)]
struct RequestBody {
	#[serde(flatten)]
	graph: GraphPayload,
	#[serde(skip_serializing_if = "Option::is_none")]
	start_node: Option<NodeId>,
	#[serde(skip_serializing_if = "Option::is_none")]
	end_node: Option<NodeId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
	Analysis,
	Solutions,
	ShortestPath,
	AllPairs,
	DepthFirst,
	BreadthFirst,
}

impl SlotKind {
	pub fn title(self) -> &'static str {
		match self {
			SlotKind::Analysis => "Properties",
			SlotKind::Solutions => "Invariants",
			SlotKind::ShortestPath => "Shortest path",
			SlotKind::AllPairs => "All pairs",
			SlotKind::DepthFirst => "Depth-first",
			SlotKind::BreadthFirst => "Breadth-first",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisRequest {
	Analyze,
	Solve,
	ShortestPath { start: NodeId, end: NodeId },
	AllPairs,
	DepthFirst { start: NodeId },
	BreadthFirst { start: NodeId },
}

impl AnalysisRequest {
	pub fn slot(self) -> SlotKind {
		match self {
			AnalysisRequest::Analyze => SlotKind::Analysis,
			AnalysisRequest::Solve => SlotKind::Solutions,
			AnalysisRequest::ShortestPath { .. } => SlotKind::ShortestPath,
			AnalysisRequest::AllPairs => SlotKind::AllPairs,
			AnalysisRequest::DepthFirst { .. } => SlotKind::DepthFirst,
			AnalysisRequest::BreadthFirst { .. } => SlotKind::BreadthFirst,
		}
	}

	pub fn path(self) -> &'static str {
		match self {
			AnalysisRequest::Analyze => "/analyze/",
			AnalysisRequest::Solve => "/solve/",
			AnalysisRequest::ShortestPath { .. } => "/dijkstra/",
			AnalysisRequest::AllPairs => "/floyd/",
			AnalysisRequest::DepthFirst { .. } => "/traverse/dfs/",
			AnalysisRequest::BreadthFirst { .. } => "/traverse/bfs/",
		}
	}

	pub fn body(self, store: &GraphStore, is_directed: bool) -> Result<String, ApiError> {
		let (start_node, end_node) = match self {
			AnalysisRequest::ShortestPath { start, end } => (Some(start), Some(end)),
			AnalysisRequest::DepthFirst { start } | AnalysisRequest::BreadthFirst { start } => {
				(Some(start), None)
			}
			_ => (None, None),
		};
		let with_flags = matches!(self, AnalysisRequest::ShortestPath { .. });
		let body = RequestBody {
			graph: GraphPayload::from_store(store, is_directed, with_flags),
			start_node,
			end_node,
		};
		serde_json::to_string(&body).map_err(|e| ApiError::Encode(e.to_string()))
	}
}

/// Identifiers come back as numbers from some endpoints and as strings from
/// others. Anything else is kept as `Other` and resolves to no id.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum WireId {
	Number(u64),
	Text(String),
	Other(Value),
}

impl WireId {
	pub fn as_id(&self) -> Option<u64> {
		match self {
			WireId::Number(n) => Some(*n),
			WireId::Text(s) => s.trim().parse().ok(),
			WireId::Other(_) => None,
		}
	}

	fn text(&self) -> String {
		match self {
			WireId::Number(n) => n.to_string(),
			WireId::Text(s) => s.clone(),
			WireId::Other(_) => "—".to_string(),
		}
	}
}

#[derive(Clone, Debug, Deserialize)]
pub struct EdgeRef {
	#[serde(default)]
	pub id: Option<WireId>,
}

impl EdgeRef {
	fn edge_id(&self) -> Option<EdgeId> {
		self.id.as_ref().and_then(WireId::as_id)
	}
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Frontier {
	Items(Vec<String>),
	Marker(String),
}

impl Default for Frontier {
	fn default() -> Self {
		Frontier::Items(Vec::new())
	}
}

impl std::fmt::Display for Frontier {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Frontier::Items(items) if items.is_empty() => write!(f, "∅"),
			Frontier::Items(items) => write!(f, "{}", items.join(", ")),
			Frontier::Marker(marker) => write!(f, "{marker}"),
		}
	}
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TraversalStep {
	pub vertex: String,
	#[serde(alias = "dfs_num", alias = "bfs_num")]
	pub number: Option<WireId>,
	#[serde(alias = "stack", alias = "queue")]
	pub frontier: Frontier,
	pub tree_edge: String,
}

impl TraversalStep {
	fn line(&self) -> String {
		let number = self.number.as_ref().map(WireId::text).unwrap_or_else(|| "—".to_string());
		format!("{number:>2}  {:<4} {:<12} [{}]", self.vertex, self.tree_edge, self.frontier)
	}
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ShortestPathResponse {
	pub success: bool,
	pub path_nodes_ids: Vec<WireId>,
	pub path_edges: Vec<EdgeRef>,
	pub total_weight: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TraversalResponse {
	pub protocol: Vec<TraversalStep>,
	pub tree_edges: Option<Vec<EdgeRef>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Invariants {
	coloring: Option<HashMap<String, usize>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SolveResponse {
	invariants: Option<Invariants>,
	coloring: Option<HashMap<String, usize>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AnalysisResponse {
	cycle_path: Vec<String>,
	cycle_edges: Vec<Option<WireId>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cycle {
	pub labels: Vec<String>,
	pub edge_ids: Vec<EdgeId>,
}

pub fn cycle_info(value: &Value) -> Option<Cycle> {
	let resp: AnalysisResponse = serde_json::from_value(value.clone()).ok()?;
	if resp.cycle_path.is_empty() {
		return None;
	}
	Some(Cycle {
		labels: resp.cycle_path,
		edge_ids: resp
			.cycle_edges
			.iter()
			.flatten()
			.filter_map(WireId::as_id)
			.collect(),
	})
}

pub fn service_error(value: &Value) -> Option<String> {
	value.get("error").and_then(Value::as_str).map(str::to_string)
}

pub fn shortest_path_highlight(value: &Value) -> Option<HighlightSet> {
	let resp: ShortestPathResponse = serde_json::from_value(value.clone()).ok()?;
	if !resp.success {
		return None;
	}
	Some(HighlightSet::new(
		HighlightKind::ShortestPath,
		resp.path_nodes_ids.iter().filter_map(WireId::as_id),
		resp.path_edges.iter().filter_map(EdgeRef::edge_id),
	))
}

pub fn traversal_highlight(value: &Value, kind: HighlightKind) -> Option<HighlightSet> {
	let resp: TraversalResponse = serde_json::from_value(value.clone()).ok()?;
	let edges = resp.tree_edges?;
	Some(HighlightSet::new(
		kind,
		std::iter::empty(),
		edges.iter().filter_map(EdgeRef::edge_id),
	))
}

/// Vertex color classes from a solve response. Keys that are not vertex ids
/// are skipped.
pub fn parse_coloring(value: &Value) -> HashMap<NodeId, usize> {
	let Ok(resp) = serde_json::from_value::<SolveResponse>(value.clone()) else {
		return HashMap::new();
	};
	resp.invariants
		.and_then(|inv| inv.coloring)
		.or(resp.coloring)
		.unwrap_or_default()
		.into_iter()
		.filter_map(|(k, class)| Some((k.trim().parse().ok()?, class)))
		.collect()
}

pub fn summarize(kind: SlotKind, value: &Value, store: &GraphStore) -> String {
	match kind {
		SlotKind::ShortestPath => {
			let Ok(resp) = serde_json::from_value::<ShortestPathResponse>(value.clone()) else {
				return "no path".to_string();
			};
			if !resp.success {
				return "no path".to_string();
			}
			let labels: Vec<String> = resp
				.path_nodes_ids
				.iter()
				.filter_map(WireId::as_id)
				.map(|id| {
					store
						.node(id)
						.map(|n| n.label.clone())
						.unwrap_or_else(|| format!("#{id}"))
				})
				.collect();
			match resp.total_weight {
				Some(w) => format!("{} (total {w})", labels.join(" → ")),
				None => labels.join(" → "),
			}
		}
		SlotKind::DepthFirst | SlotKind::BreadthFirst => {
			let Ok(resp) = serde_json::from_value::<TraversalResponse>(value.clone()) else {
				return "no traversal tree".to_string();
			};
			if !resp.protocol.is_empty() {
				return resp.protocol.iter().map(TraversalStep::line).collect::<Vec<_>>().join("\n");
			}
			match resp.tree_edges {
				Some(edges) => format!("{} tree edges", edges.len()),
				None => "no traversal tree".to_string(),
			}
		}
		_ => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
	}
}

#[derive(Clone, Debug, PartialEq)]
pub enum SlotOutcome {
	Pending,
	Ready(Value),
	Failed(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket {
	pub kind: SlotKind,
	seq: u64,
}

#[derive(Clone, Debug, Default)]
pub struct ResultSlots {
	issued: HashMap<SlotKind, u64>,
	outcomes: HashMap<SlotKind, SlotOutcome>,
}

impl ResultSlots {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn begin(&mut self, kind: SlotKind) -> Ticket {
		let seq = self.issued.entry(kind).or_insert(0);
		*seq += 1;
		self.outcomes.insert(kind, SlotOutcome::Pending);
		Ticket { kind, seq: *seq }
	}

	/// Stores the outcome if `ticket` is the latest for its kind. Returns
	/// whether it was accepted.
	pub fn complete(&mut self, ticket: Ticket, outcome: &Result<Value, ApiError>) -> bool {
		if self.issued.get(&ticket.kind) != Some(&ticket.seq) {
			debug!("discarding stale {:?} response #{}", ticket.kind, ticket.seq);
			return false;
		}
		let stored = match outcome {
			Ok(value) => SlotOutcome::Ready(value.clone()),
			Err(err) => {
				warn!("{:?} request failed: {err}", ticket.kind);
				SlotOutcome::Failed(err.to_string())
			}
		};
		self.outcomes.insert(ticket.kind, stored);
		true
	}

	pub fn get(&self, kind: SlotKind) -> Option<&SlotOutcome> {
		self.outcomes.get(&kind)
	}

	pub fn ready(&self, kind: SlotKind) -> Option<&Value> {
		match self.outcomes.get(&kind) {
			Some(SlotOutcome::Ready(value)) => Some(value),
			_ => None,
		}
	}

	/// Empties the slot. A request still in flight for it is ignored when it
	/// lands.
	pub fn clear(&mut self, kind: SlotKind) {
		*self.issued.entry(kind).or_insert(0) += 1;
		self.outcomes.remove(&kind);
	}

	pub fn clear_all(&mut self) {
		for seq in self.issued.values_mut() {
			*seq += 1;
		}
		self.outcomes.clear();
	}
}

#[derive(Clone, Debug)]
pub struct AnalysisClient {
	base_url: String,
}

impl AnalysisClient {
	pub fn new(base_url: &str) -> Self {
		Self {
			base_url: base_url.trim_end_matches('/').to_string(),
		}
	}

	pub fn url(&self, request: AnalysisRequest) -> String {
		format!("{}{}", self.base_url, request.path())
	}

	/// POSTs `body` and returns the decoded JSON. A response carrying an
	/// `error` field is reported as [`ApiError::Service`].
	pub async fn send(&self, request: AnalysisRequest, body: String) -> Result<Value, ApiError> {
		use wasm_bindgen::{JsCast, JsValue};
		use wasm_bindgen_futures::JsFuture;
		use web_sys::{Request, RequestInit, RequestMode, Response};

		let url = self.url(request);
		debug!("POST {url}");

		let opts = RequestInit::new();
		opts.set_method("POST");
		opts.set_mode(RequestMode::Cors);
		opts.set_body(&JsValue::from_str(&body));

		let req = Request::new_with_str_and_init(&url, &opts)
			.map_err(|e| ApiError::Network(format!("{e:?}")))?;
		req.headers()
			.set("Content-Type", "application/json")
			.map_err(|e| ApiError::Network(format!("{e:?}")))?;

		let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
		let resp_value = JsFuture::from(window.fetch_with_request(&req))
			.await
			.map_err(|e| ApiError::Network(format!("{e:?}")))?;
		let resp: Response = resp_value
			.dyn_into()
			.map_err(|_| ApiError::Network("response is not a Response".into()))?;

		let text = JsFuture::from(resp.text().map_err(|e| ApiError::Decode(format!("{e:?}")))?)
			.await
			.map_err(|e| ApiError::Decode(format!("{e:?}")))?
			.as_string()
			.unwrap_or_default();

		let parsed: Result<Value, _> = serde_json::from_str(&text);
		match parsed {
			Ok(value) => match service_error(&value) {
				Some(message) => Err(ApiError::Service(message)),
				None if !resp.ok() => Err(ApiError::Status(resp.status())),
				None => Ok(value),
			},
			Err(_) if !resp.ok() => Err(ApiError::Status(resp.status())),
			Err(e) => Err(ApiError::Decode(e.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use super::super::types::Point;
	use serde_json::json;

	fn sample_store() -> (GraphStore, NodeId, NodeId) {
		let mut store = GraphStore::new();
		let a = store.add_node(Point::new(0.0, 0.0));
		let b = store.add_node(Point::new(10.0, 0.0));
		let e = store.add_edge(a, b, false).unwrap();
		store.set_weight(e, 3.0).unwrap();
		(store, a, b)
	}

	#[test]
	fn test_analyze_body_shape() {
		let (store, a, b) = sample_store();
		let body: Value =
			serde_json::from_str(&AnalysisRequest::Analyze.body(&store, true).unwrap()).unwrap();
		assert_eq!(
			body,
			json!({
				"nodes": [{"id": a, "label": "v0"}, {"id": b, "label": "v1"}],
				"edges": [{"id": 2, "from": a, "to": b, "weight": 3.0}],
				"is_directed": true,
			})
		);
	}

	#[test]
	fn test_shortest_path_body_adds_endpoints_and_flags() {
		let (store, a, b) = sample_store();
		let req = AnalysisRequest::ShortestPath { start: a, end: b };
		let body: Value = serde_json::from_str(&req.body(&store, false).unwrap()).unwrap();
		assert_eq!(body["start_node"], json!(a));
		assert_eq!(body["end_node"], json!(b));
		assert_eq!(body["edges"][0]["hasWeight"], json!(true));
		assert_eq!(req.path(), "/dijkstra/");
	}

	#[test]
	fn test_traversal_body_has_start_only() {
		let (store, a, _) = sample_store();
		let req = AnalysisRequest::BreadthFirst { start: a };
		let body: Value = serde_json::from_str(&req.body(&store, false).unwrap()).unwrap();
		assert_eq!(body["start_node"], json!(a));
		assert!(body.get("end_node").is_none());
		assert!(body["edges"][0].get("hasWeight").is_none());
		assert_eq!(req.slot(), SlotKind::BreadthFirst);
	}

	#[test]
	fn test_client_url_joins_base() {
		let client = AnalysisClient::new("http://localhost:8000/api/");
		assert_eq!(client.url(AnalysisRequest::Solve), "http://localhost:8000/api/solve/");
		assert_eq!(
			client.url(AnalysisRequest::DepthFirst { start: 1 }),
			"http://localhost:8000/api/traverse/dfs/"
		);
	}

	#[test]
	fn test_shortest_path_accepts_string_ids() {
		let value = json!({
			"success": true,
			"path_nodes_ids": ["0", 1, "x"],
			"path_edges": [{"id": 2, "from": "0", "to": "1"}],
			"total_weight": 3.0,
		});
		let set = shortest_path_highlight(&value).unwrap();
		assert_eq!(set.kind, HighlightKind::ShortestPath);
		assert_eq!(set.node_ids.len(), 2);
		assert!(set.node_ids.contains(&0) && set.node_ids.contains(&1));
		assert!(set.edge_ids.contains(&2));
	}

	#[test]
	fn test_failed_or_malformed_paths_give_no_highlight() {
		assert!(shortest_path_highlight(&json!({"success": false, "error": "no"})).is_none());
		assert!(shortest_path_highlight(&json!({"success": true, "path_edges": [{"weight": 1}]})).is_none());
		assert!(shortest_path_highlight(&json!("garbage")).is_none());
	}

	#[test]
	fn test_traversal_highlight_requires_tree_edges() {
		let set = traversal_highlight(&json!({"tree_edges": [{"id": 4}, {"id": "5"}]}), HighlightKind::DepthFirst)
			.unwrap();
		assert_eq!(set.edge_ids.len(), 2);
		assert!(set.node_ids.is_empty());
		assert!(traversal_highlight(&json!({"error": "disconnected"}), HighlightKind::BreadthFirst).is_none());
	}

	#[test]
	fn test_parse_coloring_from_invariants_or_top_level() {
		let nested = parse_coloring(&json!({"invariants": {"coloring": {"0": 0, "1": 1}, "chromatic": 2}}));
		assert_eq!(nested, HashMap::from([(0, 0), (1, 1)]));
		let flat = parse_coloring(&json!({"coloring": {"3": 2, "oops": 1}}));
		assert_eq!(flat, HashMap::from([(3, 2)]));
		assert!(parse_coloring(&json!({"cycles": []})).is_empty());
	}

	#[test]
	fn test_cycle_info_skips_missing_edge_ids() {
		let value = json!({
			"has_cycle": "yes",
			"cycle_path": ["v0", "v1", "v2", "v0"],
			"cycle_edges": [3, null, "5"],
		});
		let cycle = cycle_info(&value).unwrap();
		assert_eq!(cycle.labels.len(), 4);
		assert_eq!(cycle.edge_ids, vec![3, 5]);
		assert!(cycle_info(&json!({"cycle_path": [], "cycle_edges": []})).is_none());
	}

	#[test]
	fn test_service_error_detection() {
		assert_eq!(service_error(&json!({"error": "boom"})), Some("boom".into()));
		assert_eq!(service_error(&json!({"success": true})), None);
	}

	#[test]
	fn test_latest_request_wins() {
		let mut slots = ResultSlots::new();
		let first = slots.begin(SlotKind::ShortestPath);
		let second = slots.begin(SlotKind::ShortestPath);
		assert_eq!(slots.get(SlotKind::ShortestPath), Some(&SlotOutcome::Pending));

		assert!(slots.complete(second, &Ok(json!({"n": 2}))));
		assert!(!slots.complete(first, &Ok(json!({"n": 1}))));
		assert_eq!(slots.ready(SlotKind::ShortestPath), Some(&json!({"n": 2})));
	}

	#[test]
	fn test_kinds_are_independent() {
		let mut slots = ResultSlots::new();
		let dfs = slots.begin(SlotKind::DepthFirst);
		let _bfs = slots.begin(SlotKind::BreadthFirst);
		assert!(slots.complete(dfs, &Err(ApiError::Status(500))));
		assert_eq!(
			slots.get(SlotKind::DepthFirst),
			Some(&SlotOutcome::Failed("service responded with HTTP 500".into()))
		);
		assert_eq!(slots.get(SlotKind::BreadthFirst), Some(&SlotOutcome::Pending));
	}

	#[test]
	fn test_cleared_slot_ignores_in_flight_response() {
		let mut slots = ResultSlots::new();
		let ticket = slots.begin(SlotKind::AllPairs);
		slots.clear(SlotKind::AllPairs);
		assert!(!slots.complete(ticket, &Ok(json!({}))));
		assert_eq!(slots.get(SlotKind::AllPairs), None);

		let ticket = slots.begin(SlotKind::Analysis);
		slots.clear_all();
		assert!(!slots.complete(ticket, &Ok(json!({}))));
	}

	#[test]
	fn test_summaries() {
		let (store, _, _) = sample_store();
		let path = json!({"success": true, "path_nodes_ids": ["0", "1"], "path_edges": [], "total_weight": 3.0});
		assert_eq!(summarize(SlotKind::ShortestPath, &path, &store), "v0 → v1 (total 3)");
		let tree = json!({"tree_edges": [{"id": 2}]});
		assert_eq!(summarize(SlotKind::DepthFirst, &tree, &store), "1 tree edges");
		assert_eq!(summarize(SlotKind::ShortestPath, &json!({"success": false}), &store), "no path");
	}

	#[test]
	fn test_traversal_summary_lists_protocol_steps() {
		let (store, _, _) = sample_store();
		let dfs = json!({
			"protocol": [
				{"vertex": "v0", "dfs_num": 1, "stack": ["v0"], "tree_edge": "—", "edge_id": null},
				{"vertex": "v1", "dfs_num": 2, "stack": ["v0", "v1"], "tree_edge": "{v0, v1}", "edge_id": 2},
				{"vertex": "—", "dfs_num": "—", "stack": "∅", "tree_edge": "—", "edge_id": null},
			],
			"tree_edges": [{"from": "0", "to": "1", "id": 2}],
		});
		let text = summarize(SlotKind::DepthFirst, &dfs, &store);
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 3);
		assert!(lines[1].starts_with(" 2  v1"));
		assert!(lines[1].contains("{v0, v1}"));
		assert!(lines[1].ends_with("[v0, v1]"));
		assert!(lines[2].ends_with("[∅]"));

		let bfs = json!({
			"protocol": [{"vertex": "v0", "bfs_num": 1, "queue": ["v0"], "tree_edge": "—"}],
			"tree_edges": [],
		});
		assert!(summarize(SlotKind::BreadthFirst, &bfs, &store).starts_with(" 1  v0"));
	}

	#[test]
	fn test_null_ids_are_skipped_not_fatal() {
		let set = traversal_highlight(
			&json!({"tree_edges": [{"id": 4}, {"id": 5}, {"id": null}, {}]}),
			HighlightKind::DepthFirst,
		)
		.unwrap();
		assert_eq!(set.edge_ids, [4, 5].into_iter().collect());

		let path = json!({
			"success": true,
			"path_nodes_ids": [0, 1, null],
			"path_edges": [{"id": 7}, {"id": null}],
		});
		let set = shortest_path_highlight(&path).unwrap();
		assert_eq!(set.node_ids, [0, 1].into_iter().collect());
		assert_eq!(set.edge_ids, [7].into_iter().collect());
	}
}
