use serde::{Deserialize, Serialize};

fn default_focus_when_hidden() -> bool {
    true
}

fn default_toggle_shortcut() -> String {
    "Ctrl+Alt+C".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OverlayConfig {
    /// Refocus the query input even while the window is hidden
    #[serde(default = "default_focus_when_hidden")]
    pub focus_when_hidden: bool,
    /// Hide the overlay when it loses focus
    #[serde(default)]
    pub hide_on_blur: bool,
    /// Keys passed through untouched in addition to the built-in set
    #[serde(default)]
    pub passthrough_keys: Vec<String>,
    /// Shortcut that shows or hides the overlay
    #[serde(default = "default_toggle_shortcut")]
    pub toggle_shortcut: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            focus_when_hidden: default_focus_when_hidden(),
            hide_on_blur: false,
            passthrough_keys: vec![],
            toggle_shortcut: default_toggle_shortcut(),
        }
    }
}
