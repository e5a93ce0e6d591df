use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::geometry::{EdgePath, adjusted_endpoints, edge_geometry};
use super::state::EditorState;
use super::types::Point;

const BACKGROUND: &str = "#1a1a2e";
const GRID: &str = "rgba(255, 255, 255, 0.05)";
const EDGE: &str = "rgba(100, 180, 255, 0.8)";
const HIGHLIGHT: &str = "#ef4444";
const NODE_FILL: &str = "#f8fafc";
const NODE_STROKE: &str = "#334155";
const ARROW_SIZE: f64 = 10.0;

pub fn render(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_grid(state, ctx);
	draw_edges(state, ctx);
	draw_preview(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
	draw_labels(state, ctx);
}

fn draw_grid(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let spacing = state.config.grid_spacing;
	let (min, max) = state.transform.visible_world_rect(state.width, state.height);
	ctx.set_stroke_style_str(GRID);
	ctx.set_line_width(1.0 / state.transform.k);
	ctx.begin_path();
	let mut x = (min.x / spacing).floor() * spacing;
	while x <= max.x {
		ctx.move_to(x, min.y);
		ctx.line_to(x, max.y);
		x += spacing;
	}
	let mut y = (min.y / spacing).floor() * spacing;
	while y <= max.y {
		ctx.move_to(min.x, y);
		ctx.line_to(max.x, y);
		y += spacing;
	}
	ctx.stroke();
}

fn trace(path: &EdgePath, radius: f64, ctx: &CanvasRenderingContext2d) {
	ctx.begin_path();
	match *path {
		EdgePath::Line { from, to } => {
			let (from, to) = adjusted_endpoints(from, to, radius);
			ctx.move_to(from.x, from.y);
			ctx.line_to(to.x, to.y);
		}
		EdgePath::Quadratic { from, ctrl, to } => {
			ctx.move_to(from.x, from.y);
			ctx.quadratic_curve_to(ctrl.x, ctrl.y, to.x, to.y);
		}
		EdgePath::Loop { origin, c1, c2 } => {
			ctx.move_to(origin.x, origin.y);
			ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, origin.x, origin.y);
		}
	}
	ctx.stroke();
}

/// Arrowhead whose tip sits on the rim of the target node.
fn draw_arrow(path: &EdgePath, radius: f64, color: &str, ctx: &CanvasRenderingContext2d) {
	let dir = path.end_direction();
	let tip = path.end() - dir * radius;
	let back = tip - dir * ARROW_SIZE;
	let side = Point::new(-dir.y, dir.x) * (ARROW_SIZE * 0.5);
	ctx.set_fill_style_str(color);
	ctx.begin_path();
	ctx.move_to(tip.x, tip.y);
	ctx.line_to(back.x + side.x, back.y + side.y);
	ctx.line_to(back.x - side.x, back.y - side.y);
	ctx.close_path();
	ctx.fill();
}

fn draw_edges(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let edges = state.store.edges();

	for edge in edges {
		let (Some(from), Some(to)) = (state.store.position(edge.from), state.store.position(edge.to)) else {
			continue;
		};
		let geometry = edge_geometry(edge, edges, from, to);
		let highlighted = state.overlay.is_edge_highlighted(edge.id);
		let color = if highlighted { HIGHLIGHT } else { EDGE };

		ctx.set_stroke_style_str(color);
		let width = if highlighted { 3.0 } else { 1.5 };
		ctx.set_line_width(width / k.max(0.5));
		trace(&geometry.path, state.config.node_radius, ctx);
		if geometry.directed {
			draw_arrow(&geometry.path, state.config.node_radius, color, ctx);
		}
	}
}

fn draw_preview(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let Some((from, to)) = state.connection_preview() else {
		return;
	};
	let k = state.transform.k;
	ctx.set_stroke_style_str(EDGE);
	ctx.set_line_width(1.5 / k);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(6.0 / k),
		&JsValue::from_f64(4.0 / k),
	));
	ctx.begin_path();
	ctx.move_to(from.x, from.y);
	ctx.line_to(to.x, to.y);
	ctx.stroke();
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn draw_nodes(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let (radius, k) = (state.config.node_radius, state.transform.k);
	for node in state.store.nodes() {
		let highlighted = state.overlay.is_node_highlighted(node.id);
		let fill = if highlighted {
			HIGHLIGHT
		} else {
			state.overlay.display_color(node).unwrap_or(NODE_FILL)
		};

		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, radius, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(fill);
		ctx.fill();
		ctx.set_stroke_style_str(if highlighted { "white" } else { NODE_STROKE });
		ctx.set_line_width(2.0 / k.max(0.5));
		ctx.stroke();
	}
}

fn draw_labels(state: &EditorState, ctx: &CanvasRenderingContext2d) {
	let camera = &state.transform;
	let edges = state.store.edges();
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	ctx.set_font("12px sans-serif");
	for edge in edges.iter().filter(|e| e.has_weight) {
		let (Some(from), Some(to)) = (state.store.position(edge.from), state.store.position(edge.to)) else {
			continue;
		};
		let at = camera.to_screen(edge_geometry(edge, edges, from, to).label);
		ctx.set_fill_style_str(BACKGROUND);
		ctx.begin_path();
		let _ = ctx.arc(at.x, at.y, 10.0, 0.0, 2.0 * PI);
		ctx.fill();
		ctx.set_fill_style_str(if state.overlay.is_edge_highlighted(edge.id) { HIGHLIGHT } else { EDGE });
		let _ = ctx.fill_text(&edge.weight.to_string(), at.x, at.y);
	}

	ctx.set_font("bold 12px sans-serif");
	for node in state.store.nodes() {
		let at = camera.to_screen(node.position());
		let plain = !state.overlay.is_node_highlighted(node.id) && state.overlay.display_color(node).is_none();
		ctx.set_fill_style_str(if plain { NODE_STROKE } else { "white" });
		let _ = ctx.fill_text(&node.label, at.x, at.y);
	}
}
