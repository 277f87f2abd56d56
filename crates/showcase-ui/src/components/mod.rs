//! Reusable UI components

mod button;
mod filter_pills;
mod particles;

pub use button::*;
pub use filter_pills::*;
pub use particles::*;
