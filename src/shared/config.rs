//! Application configuration. Event identifiers, API credentials, paths.
//!
//! All values arrive as environment variables from the orchestrating
//! workflow (MENTION_RELAY_* prefix) and are treated as opaque strings.

use serde::Deserialize;

/// Default directory holding group-definition YAML files, relative to the
/// checkout the orchestrator runs in.
pub const DEFAULT_GROUPS_DIR: &str = "../groups";

/// Default REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Repository identifier ("owner/name"). Read from MENTION_RELAY_REPO.
    pub repo: Option<String>,

    /// Triggering event name. Read from MENTION_RELAY_EVENT_NAME.
    pub event_name: Option<String>,

    /// Issue number for issue-scoped events. Read from MENTION_RELAY_ISSUE_NUMBER.
    #[serde(default)]
    pub issue_number: Option<String>,

    /// PR number for pull-request events. Read from MENTION_RELAY_PR_NUMBER.
    #[serde(default)]
    pub pr_number: Option<String>,

    /// Comment id for issue_comment events. Read from MENTION_RELAY_COMMENT_ID.
    #[serde(default)]
    pub comment_id: Option<String>,

    /// Path of the metadata file inside the repository. Read from
    /// MENTION_RELAY_METADATA_PATH.
    pub metadata_path: Option<String>,

    /// API access token. Read from MENTION_RELAY_TOKEN.
    pub token: Option<String>,

    /// Directory with group-definition files. Read from MENTION_RELAY_GROUPS_DIR.
    #[serde(default)]
    pub groups_dir: Option<String>,

    /// REST API root override (e.g. GitHub Enterprise). Read from
    /// MENTION_RELAY_API_URL.
    #[serde(default)]
    pub api_url: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("MENTION_RELAY"));
        if let Ok(path) = std::env::var("MENTION_RELAY_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the groups directory. Defaults to [`DEFAULT_GROUPS_DIR`].
    pub fn groups_dir_or_default(&self) -> String {
        self.groups_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_GROUPS_DIR.to_string())
    }

    /// Returns the API root. Defaults to [`DEFAULT_API_URL`].
    pub fn api_url_or_default(&self) -> String {
        self.api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }
}
