#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod gateways;

mod render;

pub use render::*;

pub type Result<T> = std::result::Result<T, error::AppError>;
