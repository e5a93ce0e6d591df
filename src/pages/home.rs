use leptos::prelude::*;

use crate::components::graph_editor::{EditorConfig, GraphEditor};

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="fullscreen-graph">
				<GraphEditor config=EditorConfig::default() />
				<div class="graph-overlay">
					<h1>"Graph Editor"</h1>
					<p class="subtitle">
						"Pick a tool, then click the canvas. Scroll to zoom, drag empty space to pan."
					</p>
				</div>
			</div>
		</ErrorBoundary>
	}
}
