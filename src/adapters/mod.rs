// Adapters layer: the zosmf facade family binding the domain ports to the
// REST calls in core.

pub mod commands;
pub mod common;
pub mod datasets;
pub mod jobs;
pub mod uss;

pub use commands::CommandAdapter;
pub use common::{HasCommon, ZosmfCommon};
pub use datasets::MvsAdapter;
pub use jobs::JesAdapter;
pub use uss::UssAdapter;
