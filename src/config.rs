use crate::client::error::ConfigError;

pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_CHAT_LIMIT: u32 = 100;

/// Client settings baked in at build time.
///
/// - `CAREER_CENTER_API_URL` - base URL of the career center API
/// - `CAREER_CENTER_CHAT_LIMIT` - number of chat messages fetched per load
#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_url: String,
    pub chat_limit: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            chat_limit: DEFAULT_CHAT_LIMIT,
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            option_env!("CAREER_CENTER_API_URL"),
            option_env!("CAREER_CENTER_CHAT_LIMIT"),
        )
    }

    fn from_vars(api_url: Option<&str>, chat_limit: Option<&str>) -> Result<Self, ConfigError> {
        let api_url = match api_url.map(str::trim) {
            None | Some("") => DEFAULT_API_URL.to_string(),
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                url.trim_end_matches('/').to_string()
            }
            Some(url) => {
                return Err(ConfigError::InvalidEnvValue {
                    var: "CAREER_CENTER_API_URL".to_string(),
                    reason: format!("{:?} is not an http(s) URL", url),
                })
            }
        };

        let chat_limit = match chat_limit.map(str::trim) {
            None | Some("") => DEFAULT_CHAT_LIMIT,
            Some(limit) => match limit.parse::<u32>() {
                Ok(limit) if limit > 0 => limit,
                Ok(_) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "CAREER_CENTER_CHAT_LIMIT".to_string(),
                        reason: "must be greater than zero".to_string(),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "CAREER_CENTER_CHAT_LIMIT".to_string(),
                        reason: e.to_string(),
                    })
                }
            },
        };

        Ok(Self {
            api_url,
            chat_limit,
        })
    }
}
