//! Menagerie Engine library.
//!
//! ## Structure
//!
//! - `config` - Environment-driven settings
//! - `app` - Service composition from config
//! - `demo` - The demonstration sequence, one function per section

pub mod app;
pub mod config;
pub mod demo;

pub use app::App;
pub use config::DemoConfig;
