// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod batch;
pub mod csv;
pub mod dni;
pub mod error;
pub mod file;
pub mod gui;
pub mod import;
pub mod log;
pub mod progress;
pub mod query;
pub mod record;

pub use batch::{Batch, Entry};
pub use dni::{Dni, Nationality, format_dni, format_dni_to_str};
pub use error::{Error, Result};
pub use query::QueryClient;
pub use record::{Record, Status};
