//! Toolbar and analysis sidebar around the canvas.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use leptos::ev::{Event, MouseEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use log::{info, warn};

use super::api::{AnalysisClient, AnalysisRequest, SlotKind};
use super::component::{alert, confirm};
use super::state::{EditorState, highlight_kind};
use super::types::{NodeId, Tool};

type Shared = Rc<RefCell<EditorState>>;
type SlotTexts = RwSignal<HashMap<SlotKind, String>>;

#[derive(Clone, Copy)]
pub struct UiSignals {
	pub tool: RwSignal<Tool>,
	pub directed: RwSignal<bool>,
	pub coloring_shown: RwSignal<bool>,
	pub texts: SlotTexts,
}

impl UiSignals {
	pub fn new() -> Self {
		Self {
			tool: RwSignal::new(Tool::default()),
			directed: RwSignal::new(false),
			coloring_shown: RwSignal::new(false),
			texts: RwSignal::new(HashMap::new()),
		}
	}
}

fn set_text(texts: SlotTexts, kind: SlotKind, text: String) {
	texts.update(|m| {
		m.insert(kind, text);
	});
}

/// Sends `request` and records the outcome in its slot once it lands.
fn run(state: Shared, texts: SlotTexts, request: AnalysisRequest) {
	let kind = request.slot();
	let started = state.borrow_mut().begin_request(request);
	let (ticket, body) = match started {
		Ok(started) => started,
		Err(err) => {
			warn!("could not start {kind:?}: {err}");
			set_text(texts, kind, format!("error: {err}"));
			return;
		}
	};
	let client = AnalysisClient::new(&state.borrow().config.api_base_url);
	set_text(texts, kind, state.borrow().slot_text(kind));

	spawn_local(async move {
		let outcome = client.send(request, body).await;
		let text = {
			let mut s = state.borrow_mut();
			if !s.finish_request(ticket, outcome) {
				return;
			}
			s.slot_text(kind)
		};
		set_text(texts, kind, text);
	});
}

/// Resolves a label typed into the sidebar, telling the user when it matches
/// no vertex.
fn lookup(state: &Shared, label: &str) -> Option<NodeId> {
	let id = state.borrow().node_by_label(label);
	if id.is_none() {
		alert(&format!("No vertex labelled \"{}\"", label.trim()));
	}
	id
}

pub fn toolbar(state: Shared, ui: UiSignals) -> impl IntoView {
	let UiSignals {
		tool,
		directed,
		coloring_shown,
		texts,
	} = ui;
	let buttons = Tool::ALL
		.into_iter()
		.map(|t| {
			let state = state.clone();
			view! {
				<button
					class="tool"
					class:active=move || tool.get() == t
					on:click=move |_: MouseEvent| {
						state.borrow_mut().set_tool(t);
						tool.set(t);
					}
				>
					{t.label()}
				</button>
			}
		})
		.collect_view();

	let state_dir = state.clone();
	let on_directed = move |ev: Event| {
		let value = event_target_checked(&ev);
		state_dir.borrow_mut().set_directed(value);
		directed.set(value);
	};

	let on_clear = move |_: MouseEvent| {
		if !state.borrow().store.is_empty() && !confirm("Clear the whole canvas?") {
			return;
		}
		state.borrow_mut().clear();
		texts.set(HashMap::new());
		coloring_shown.set(false);
		info!("canvas cleared");
	};

	view! {
		<div class="graph-toolbar">
			{buttons}
			<label class="toggle">
				<input type="checkbox" prop:checked=move || directed.get() on:change=on_directed />
				"Directed"
			</label>
			<button class="danger" on:click=on_clear>
				"Clear"
			</button>
		</div>
	}
}

fn result_slot(state: Shared, ui: UiSignals, kind: SlotKind) -> impl IntoView {
	let texts = ui.texts;
	let state_show = state.clone();
	let text = move || texts.with(|m| m.get(&kind).cloned().unwrap_or_default());
	let show = highlight_kind(kind).is_some().then(|| {
		view! {
			<button on:click=move |_: MouseEvent| state_show.borrow_mut().show_result(kind)>"Show"</button>
		}
	});
	view! {
		<div class="result-slot">
			<h4>{kind.title()}</h4>
			<pre>{text}</pre>
			{show}
			<button on:click=move |_: MouseEvent| {
				state.borrow_mut().clear_result(kind);
				texts.update(|m| {
					m.remove(&kind);
				});
				if kind == SlotKind::Solutions {
					ui.coloring_shown.set(false);
				}
			}>"Clear"</button>
		</div>
	}
}

pub fn sidebar(state: Shared, ui: UiSignals) -> impl IntoView {
	let UiSignals {
		coloring_shown,
		texts,
		..
	} = ui;
	let path_from = RwSignal::new(String::new());
	let path_to = RwSignal::new(String::new());
	let traversal_start = RwSignal::new(String::new());

	let state_an = state.clone();
	let on_analyze = move |_: MouseEvent| {
		if state_an.borrow().store.is_empty() {
			return;
		}
		run(state_an.clone(), texts, AnalysisRequest::Analyze);
		run(state_an.clone(), texts, AnalysisRequest::Solve);
	};

	let state_cy = state.clone();
	let on_cycle = move |_: MouseEvent| state_cy.borrow_mut().show_cycle();

	let state_col = state.clone();
	let on_coloring = move |_: MouseEvent| {
		if !state_col.borrow().overlay.has_coloring() {
			alert("Run the analysis first to get a coloring.");
			return;
		}
		let shown = state_col.borrow_mut().toggle_coloring();
		coloring_shown.set(shown);
	};

	let state_sp = state.clone();
	let on_shortest = move |_: MouseEvent| {
		let (Some(start), Some(end)) = (
			lookup(&state_sp, &path_from.get_untracked()),
			lookup(&state_sp, &path_to.get_untracked()),
		) else {
			return;
		};
		run(state_sp.clone(), texts, AnalysisRequest::ShortestPath { start, end });
	};

	let state_fl = state.clone();
	let on_floyd = move |_: MouseEvent| run(state_fl.clone(), texts, AnalysisRequest::AllPairs);

	let state_dfs = state.clone();
	let on_dfs = move |_: MouseEvent| {
		if let Some(start) = lookup(&state_dfs, &traversal_start.get_untracked()) {
			run(state_dfs.clone(), texts, AnalysisRequest::DepthFirst { start });
		}
	};

	let state_bfs = state.clone();
	let on_bfs = move |_: MouseEvent| {
		if let Some(start) = lookup(&state_bfs, &traversal_start.get_untracked()) {
			run(state_bfs.clone(), texts, AnalysisRequest::BreadthFirst { start });
		}
	};

	view! {
		<aside class="graph-sidebar">
			<section>
				<button on:click=on_analyze>"Analyze"</button>
				<button on:click=on_cycle>"Show cycle"</button>
				<button on:click=on_coloring>
					{move || if coloring_shown.get() { "Hide coloring" } else { "Show coloring" }}
				</button>
				{result_slot(state.clone(), ui, SlotKind::Analysis)}
				{result_slot(state.clone(), ui, SlotKind::Solutions)}
			</section>
			<section>
				<input placeholder="from" bind:value=path_from />
				<input placeholder="to" bind:value=path_to />
				<button on:click=on_shortest>"Shortest path"</button>
				<button on:click=on_floyd>"All pairs"</button>
				{result_slot(state.clone(), ui, SlotKind::ShortestPath)}
				{result_slot(state.clone(), ui, SlotKind::AllPairs)}
			</section>
			<section>
				<input placeholder="start" bind:value=traversal_start />
				<button on:click=on_dfs>"DFS"</button>
				<button on:click=on_bfs>"BFS"</button>
				{result_slot(state.clone(), ui, SlotKind::DepthFirst)}
				{result_slot(state, ui, SlotKind::BreadthFirst)}
			</section>
		</aside>
	}
}
