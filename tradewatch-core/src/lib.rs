pub mod config;
pub mod error;
pub mod text;
pub mod types;

pub use config::*;
pub use error::*;
pub use text::*;
pub use types::*;
