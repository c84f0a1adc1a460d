use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Where the user profile blob is persisted
    #[serde(default = "default_profile_path")]
    pub profile_path: String,

    /// Fixed RNG seed for reproducible feeds; unset means real entropy
    #[serde(default)]
    pub feed_seed: Option<u64>,
}

fn default_profile_path() -> String {
    "user_profile.json".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
