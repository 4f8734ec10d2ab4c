// Library surface for headless/integration tests and the binary.
pub mod app;
pub mod app_dirs;
pub mod cadence;
pub mod config;
pub mod error;
pub mod field;
pub mod game;
pub mod geometry;
pub mod glyph;
pub mod logging;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod vocabulary;
pub mod word;
