pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod panel;
pub mod utils;

pub use adapters::{CommandAdapter, JesAdapter, MvsAdapter, UssAdapter};
pub use config::ConnectionProfile;
pub use domain::ports::{CommandApi, CommonApi, JesApi, MvsApi, UssApi};
pub use utils::error::{Result, ZosmfError};
