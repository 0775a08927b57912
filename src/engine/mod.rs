mod errors;
mod loader;

pub use errors::LoaderError;
pub use loader::{LoadReport, Loader};
