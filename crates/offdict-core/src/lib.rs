pub mod capability;
pub mod error;
pub mod key;
pub mod preprocess;
pub mod router;
pub mod state;

pub use capability::{RenderingSink, SelectionSource, ShellControl};
pub use error::{HostError, KeyParseError, SelectionError};
pub use router::{KeyDisposition, OverlayKeyRouter, RouterOptions};
pub use state::UiState;

#[cfg(test)]
mod tests;
