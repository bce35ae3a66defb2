pub mod keys;
pub mod lookups;
pub mod selection;

pub use keys::read_input_events;
pub use lookups::read_lookup_events;
pub use selection::{SystemSelection, watch_selection};
