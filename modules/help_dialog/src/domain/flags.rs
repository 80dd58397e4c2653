//! Feature flags supplied by the licensing layer and add-ons

use crate::config::Config;

/// Flag enabling pro-gated fields
pub const PREMIUM_FLAG: &str = "premium";
/// Flag reporting the chat add-on as installed
pub const CHAT_FLAG: &str = "chat";

/// Runtime feature availability
pub trait FeatureFlags: Send + Sync {
    fn is_premium_active(&self) -> bool;

    fn is_chat_available(&self) -> bool;
}

/// Flags fixed at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaticFeatureFlags {
    pub premium: bool,
    pub chat: bool,
}

impl StaticFeatureFlags {
    /// Read `premium` and `chat` from the module feature flags
    pub fn from_config(config: &Config) -> Self {
        let enabled = |flag: &str| config.feature_flags.iter().any(|f| f == flag);
        Self {
            premium: enabled(PREMIUM_FLAG),
            chat: enabled(CHAT_FLAG),
        }
    }
}

impl FeatureFlags for StaticFeatureFlags {
    fn is_premium_active(&self) -> bool {
        self.premium
    }

    fn is_chat_available(&self) -> bool {
        self.chat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_from_config() {
        let config = Config {
            feature_flags: vec!["chat".to_string(), "beta".to_string()],
            ..Config::default()
        };
        let flags = StaticFeatureFlags::from_config(&config);
        assert!(!flags.is_premium_active());
        assert!(flags.is_chat_available());
        assert_eq!(StaticFeatureFlags::from_config(&Config::default()), StaticFeatureFlags::default());
    }
}
