pub mod format;
pub mod persistence;

pub use format::{format_km, format_lakhs, format_scatter_km};
pub use persistence::{load_persisted_state, save_persisted_state, PersistSaveError};
