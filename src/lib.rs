//! Kiln - classpath resolver
//!
//! Reads a `kiln.yaml` build descriptor (project identity, repository sources,
//! dependency entries) and resolves it into the compile classpath and the
//! runtime classpath of a JVM-style build.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let descriptor = kiln::config::Descriptor::load(Path::new("kiln.yaml"))?;
//! let classpaths = kiln::resolver::resolve(&descriptor)?;
//! for path in &classpaths.compile {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), kiln::error::KilnError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod hash;
pub mod logging;
pub mod progress;
pub mod provision;
pub mod resolver;
pub mod transaction;
