pub mod api;
pub mod config;
pub mod diagram;
pub mod error;
pub mod loader;
pub mod model;
// cmd and reports belong to the binary (main.rs); the library stays free of
// terminal output.
