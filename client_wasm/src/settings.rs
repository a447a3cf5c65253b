//! Match configuration passed in by the page

use crate::error::ClientError;
use game_core::Config;

/// Parse an optional JSON override. Missing fields keep their defaults;
/// validation happens when the match is created.
pub fn parse_config(json: Option<&str>) -> Result<Config, ClientError> {
    match json.map(str::trim) {
        None | Some("") => Ok(Config::default()),
        Some(text) => Ok(serde_json::from_str(text)?),
    }
}
