//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Parley Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The provider API key is read from the GEMINI_API_KEY environment variable.

[server]
# host = "0.0.0.0"
# port = 5001

[provider]
# model = "gemini-2.0-flash"
# base_url = "https://generativelanguage.googleapis.com/v1beta/models"
# max_tokens = 4096      # 1-65536
# temperature = 0.7      # 0.0-2.0
# timeout_secs = 120     # 1-600
# system_prompt = "You are a helpful assistant."

[sessions]
# idle_ttl_secs = 1800       # 60-86400
# max_sessions = 1024        # 1-100000
# reap_interval_secs = 60    # 1-3600

[logging]
# level = "INFO"         # TRACE, DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
