//! Page components for the showcase.

mod showcase;
mod upload;

pub use showcase::Showcase;
pub use upload::Upload;
