
#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct Config {
	#[serde(default)]
	pub read: ReadConfig,

	#[serde(default)]
	pub write: WriteConfig,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct ReadConfig {
	/// nested objects deeper than this abort the conversion
	#[serde_inline_default(64)]
	pub max_depth: usize,

	/// narrowing steps allowed per discovered type before giving up
	#[serde_inline_default(16)]
	pub narrowing_limit: usize,

	/// context assumed for objects without `@context`
	#[serde_inline_default(crate::context::ACTIVITYSTREAMS.to_string())]
	pub default_context: String,
}

#[serde_inline_default::serde_inline_default]
#[derive(Debug, Clone, serde::Deserialize, serde::Serialize, serde_default::DefaultFromSerde)]
pub struct WriteConfig {
	#[serde(default)]
	pub pretty: bool,

	/// write bare links as plain strings
	#[serde_inline_default(true)]
	pub compact_links: bool,

	/// repeat `@context` on nested objects even when it's the default one
	#[serde(default)]
	pub nested_context: bool,
}

impl Config {
	pub fn load(path: Option<&std::path::PathBuf>) -> Self {
		let Some(cfg_path) = path else { return Config::default() };
		match std::fs::read_to_string(cfg_path) {
			Ok(x) => match toml::from_str(&x) {
				Ok(cfg) => return cfg,
				Err(e) => tracing::error!("failed parsing config file: {e}"),
			},
			Err(e) => tracing::error!("failed reading config file: {e}"),
		}
		Config::default()
	}
}
