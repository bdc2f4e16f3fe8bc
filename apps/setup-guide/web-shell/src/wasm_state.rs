use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub(crate) struct ShellDiagnostics {
    pub(crate) phase: String,
    pub(crate) dispatched_actions: u64,
    pub(crate) effect_failures: u64,
    pub(crate) sections_observed: usize,
    pub(crate) last_error: Option<String>,
}

impl Default for ShellDiagnostics {
    fn default() -> Self {
        Self {
            phase: "idle".to_string(),
            dispatched_actions: 0,
            effect_failures: 0,
            sections_observed: 0,
            last_error: None,
        }
    }
}
