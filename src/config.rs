//! Startup configuration from the environment

use crate::drivers::{CameraConfig, ServoConfig};
use anyhow::{bail, Context, Result};

/// Bot API credential; startup is refused without it
pub const BOT_TOKEN_ENV: &str = "BOT_TOKEN";
/// Optional chat restriction for plain-text triggers
pub const RESCUE_CHAT_ID_ENV: &str = "RESCUE_CHAT_ID";

/// Bridge configuration resolved once at startup
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Bot API credential
    pub bot_token: String,
    /// Chat restriction for plain-text triggers (0 = unrestricted)
    pub rescue_chat_id: i64,
    /// Servo driver configuration
    pub servo: ServoConfig,
    /// Camera driver configuration
    pub camera: CameraConfig,
}

impl BridgeConfig {
    /// Read configuration from the environment.
    ///
    /// A missing token or malformed chat id is fatal; callers must not open
    /// a platform connection before this succeeds.
    pub fn from_env() -> Result<Self> {
        let bot_token = match std::env::var(BOT_TOKEN_ENV) {
            Ok(token) if !token.trim().is_empty() => token,
            _ => bail!("{} not set", BOT_TOKEN_ENV),
        };

        let rescue_chat_id = parse_chat_id(std::env::var(RESCUE_CHAT_ID_ENV).ok())?;

        Ok(Self {
            bot_token,
            rescue_chat_id,
            servo: ServoConfig::default(),
            camera: CameraConfig::default(),
        })
    }
}

/// Absent or empty means unrestricted; anything else must parse as a chat id
fn parse_chat_id(raw: Option<String>) -> Result<i64> {
    match raw {
        None => Ok(0),
        Some(s) if s.trim().is_empty() => Ok(0),
        Some(s) => s
            .trim()
            .parse()
            .with_context(|| format!("invalid {}: {:?}", RESCUE_CHAT_ID_ENV, s)),
    }
}
