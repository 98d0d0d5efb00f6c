pub mod settings;

pub use settings::{ResolvedSettings, Settings, DEFAULT_TAB_SIZE, MAX_TAB_SIZE};
