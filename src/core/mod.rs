pub mod commands;
pub mod datasets;
pub mod files;
pub mod info;
pub mod jobs;
pub mod rest;
pub mod session;

pub use rest::ZosmfRest;
pub use session::{AuthScheme, Session, TOKEN_TYPE_APIML};
