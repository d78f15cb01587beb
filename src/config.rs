//! Encoder configuration.

/// Default `triggerSource` value.
pub const DEFAULT_TRIGGER_SOURCE: &str = "ue";
/// Default `env` value.
pub const DEFAULT_ENV: &str = "prod";
/// Default `locale` value.
pub const DEFAULT_LOCALE: &str = "en-US";
/// Path segment that marks an edit-mode (side panel) URL.
pub const EDITOR_MARKER: &str = "/sidepanel.content.html";
/// Environment name handed to the externalizer.
pub const PUBLISH_ENVIRONMENT: &str = "publish";

/// How the `authorization` header becomes the `imsToken` value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenMode {
    /// Strip a leading `bearer ` (any case) and keep the rest
    #[default]
    StripBearer,
    /// Use the header value unchanged
    Raw,
}

/// Settings for [`RequestDataEncoder`](crate::RequestDataEncoder).
///
/// Built with `with_*` methods on top of [`EncoderConfig::default`].
///
/// # Examples
///
/// ```
/// use experiment_payload::{EncoderConfig, TokenMode};
///
/// let config = EncoderConfig::default()
///     .with_token_mode(TokenMode::Raw)
///     .with_env("stage");
///
/// assert_eq!(config.token_mode(), TokenMode::Raw);
/// assert_eq!(config.env(), "stage");
/// assert_eq!(config.locale(), "en-US");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderConfig {
    token_mode: TokenMode,
    trigger_source: String,
    env: String,
    locale: String,
    editor_marker: String,
    publish_environment: String,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            token_mode: TokenMode::default(),
            trigger_source: DEFAULT_TRIGGER_SOURCE.to_string(),
            env: DEFAULT_ENV.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            editor_marker: EDITOR_MARKER.to_string(),
            publish_environment: PUBLISH_ENVIRONMENT.to_string(),
        }
    }
}

impl EncoderConfig {
    /// Sets how the `authorization` header is turned into a token.
    pub fn with_token_mode(mut self, mode: TokenMode) -> Self {
        self.token_mode = mode;
        self
    }

    /// Overrides the `triggerSource` value.
    pub fn with_trigger_source(mut self, trigger_source: impl Into<String>) -> Self {
        self.trigger_source = trigger_source.into();
        self
    }

    /// Overrides the `env` value.
    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    /// Overrides the `locale` value.
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Overrides the segment that marks an edit-mode URL.
    ///
    /// An empty marker disables edit-mode detection: the page path then always
    /// starts after the host.
    pub fn with_editor_marker(mut self, marker: impl Into<String>) -> Self {
        self.editor_marker = marker.into();
        self
    }

    /// Overrides the environment name passed to the externalizer.
    pub fn with_publish_environment(mut self, environment: impl Into<String>) -> Self {
        self.publish_environment = environment.into();
        self
    }

    /// Returns the token mode.
    pub fn token_mode(&self) -> TokenMode {
        self.token_mode
    }

    /// Returns the `triggerSource` value.
    pub fn trigger_source(&self) -> &str {
        &self.trigger_source
    }

    /// Returns the `env` value.
    pub fn env(&self) -> &str {
        &self.env
    }

    /// Returns the `locale` value.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the edit-mode marker segment.
    pub fn editor_marker(&self) -> &str {
        &self.editor_marker
    }

    /// Returns the externalization environment name.
    pub fn publish_environment(&self) -> &str {
        &self.publish_environment
    }
}
