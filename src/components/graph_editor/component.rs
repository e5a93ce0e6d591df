use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent};

use super::config::EditorConfig;
use super::interaction::{PointerButton, PointerEvent};
use super::panels::{self, UiSignals};
use super::render;
use super::state::{EditorState, Prompt};
use super::types::{Point, Tool};

type Shared = Rc<RefCell<EditorState>>;

pub(super) fn alert(message: &str) {
	if let Some(window) = web_sys::window() {
		let _ = window.alert_with_message(message);
	}
}

/// Asks the user a yes/no question. Anything but an explicit yes is a no.
pub(super) fn confirm(message: &str) -> bool {
	web_sys::window()
		.and_then(|w| w.confirm_with_message(message).ok())
		.unwrap_or(false)
}

fn ask(message: &str, default: &str) -> Option<String> {
	web_sys::window()?
		.prompt_with_message_and_default(message, default)
		.ok()
		.flatten()
}

fn answer_prompts(state: &Shared, prompts: Vec<Prompt>) {
	for prompt in prompts {
		let result = match prompt {
			Prompt::Rename { node, label } => {
				let Some(input) = ask("New vertex label:", &label) else {
					continue;
				};
				state.borrow_mut().rename_node(node, &input)
			}
			Prompt::Weight { edge, weight } => {
				let Some(input) = ask("Edge weight:", &weight.to_string()) else {
					continue;
				};
				state.borrow_mut().set_weight(edge, &input)
			}
		};
		if let Err(err) = result {
			warn!("{err}");
			alert(&err.to_string());
		}
	}
}

fn local_point(canvas_ref: NodeRef<leptos::html::Canvas>, ev: &MouseEvent) -> Option<Point> {
	let canvas: HtmlCanvasElement = canvas_ref.get()?.into();
	let rect = canvas.get_bounding_client_rect();
	Some(Point::new(
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}

fn container_size(canvas: &HtmlCanvasElement) -> (f64, f64) {
	canvas
		.parent_element()
		.map(|p| (p.client_width() as f64, p.client_height() as f64))
		.filter(|&(w, h)| w > 0.0 && h > 0.0)
		.unwrap_or((800.0, 600.0))
}

fn cursor(tool: Tool) -> &'static str {
	match tool {
		Tool::Hand => "display: block; cursor: grab;",
		Tool::PlaceVertex => "display: block; cursor: copy;",
		Tool::Eraser => "display: block; cursor: not-allowed;",
		t if t.is_connect() => "display: block; cursor: crosshair;",
		_ => "display: block; cursor: default;",
	}
}

fn editor_canvas(state: Shared, tool: RwSignal<Tool>) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("no window to draw in");
			return;
		};

		let (w, h) = container_size(&canvas);
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);
		state_init.borrow_mut().resize(w, h);

		let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
			Ok(Some(ctx)) => match ctx.dyn_into() {
				Ok(ctx) => ctx,
				Err(_) => {
					error!("2d context has an unexpected type");
					return;
				}
			},
			_ => {
				error!("canvas has no 2d context");
				return;
			}
		};

		let (state_resize, canvas_resize) = (state_init.clone(), canvas.clone());
		*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
			let (nw, nh) = container_size(&canvas_resize);
			canvas_resize.set_width(nw as u32);
			canvas_resize.set_height(nh as u32);
			state_resize.borrow_mut().resize(nw, nh);
		}));
		if let Some(ref cb) = *resize_cb_init.borrow() {
			let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
		}

		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			render::render(&state_anim.borrow(), &ctx);
			if let (Some(cb), Some(win)) = (&*animate_inner.borrow(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some(screen) = local_point(canvas_ref, &ev) else {
			return;
		};
		let button = PointerButton::from_code(ev.button());
		if button == PointerButton::Middle {
			ev.prevent_default();
		}
		let prompts = state_md
			.borrow_mut()
			.dispatch(PointerEvent::Down { screen, button });
		answer_prompts(&state_md, prompts);
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let Some(screen) = local_point(canvas_ref, &ev) {
			state_mm.borrow_mut().dispatch(PointerEvent::Move { screen });
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		if let Some(screen) = local_point(canvas_ref, &ev) {
			state_mu.borrow_mut().dispatch(PointerEvent::Up { screen });
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		state_ml.borrow_mut().dispatch(PointerEvent::Leave);
	};

	let state_wh = state;
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		if let Some(screen) = local_point(canvas_ref, &ev) {
			state_wh.borrow_mut().dispatch(PointerEvent::Wheel {
				screen,
				delta_y: ev.delta_y(),
			});
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="graph-editor-canvas"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			on:contextmenu=|ev: MouseEvent| ev.prevent_default()
			style=move || cursor(tool.get())
		/>
	}
}

/// Drawing canvas with its toolbar and the analysis sidebar.
#[component]
pub fn GraphEditor(#[prop(optional)] config: Option<EditorConfig>) -> impl IntoView {
	let state: Shared = Rc::new(RefCell::new(EditorState::new(
		config.unwrap_or_default(),
		800.0,
		600.0,
	)));
	let ui = UiSignals::new();

	view! {
		<div class="graph-editor">
			<div class="graph-editor-main">
				{panels::toolbar(state.clone(), ui)}
				<div class="graph-editor-stage">{editor_canvas(state.clone(), ui.tool)}</div>
			</div>
			{panels::sidebar(state, ui)}
		</div>
	}
}
