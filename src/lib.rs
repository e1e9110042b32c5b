// Library exports for testing
pub mod config;
pub mod constants;
pub mod generator;
pub mod loader;
pub mod report;
pub mod resize;
pub mod writer;
