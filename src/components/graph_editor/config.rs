use super::interaction::PickTolerance;

pub const DEFAULT_API_URL: &str = "https://graphinfo.pythonanywhere.com/api";

/// Editor settings. The service URL can be overridden at build time with the
/// `GRAPH_API_URL` environment variable.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorConfig {
	pub api_base_url: String,
	pub pick: PickTolerance,
	pub node_radius: f64,
	pub grid_spacing: f64,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			api_base_url: option_env!("GRAPH_API_URL")
				.unwrap_or(DEFAULT_API_URL)
				.to_string(),
			pick: PickTolerance::default(),
			node_radius: 18.0,
			grid_spacing: 40.0,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults() {
		let config = EditorConfig::default();
		assert!(config.api_base_url.starts_with("http"));
		// Vertices must be pickable anywhere inside their drawn circle.
		assert!(config.pick.node_radius >= config.node_radius);
		assert!(config.pick.edge_distance > 0.0);
	}
}
