//! Process-level configuration for `planctl`.
//!
//! Everything that varies per plan request (stickiness, weights, hierarchy
//! rules) lives on the JSON `PlanRequestDoc` instead, since it's per-call
//! data, not process configuration (SPEC_FULL.md §6). What's left here is
//! the small set of knobs that genuinely are process-level, following the
//! teacher's plain-struct-with-`Default` `ServerConfig` convention.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// `tracing_subscriber::EnvFilter` directive, overridable by `RUST_LOG`.
    pub log_level: String,
    /// Pretty-print the JSON result instead of emitting it on one line.
    pub pretty: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            pretty: false,
        }
    }
}
