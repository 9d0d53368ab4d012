//! Typed Tailwind CSS utility class names.
//!
//! Every utility of the Tailwind CSS catalog is available as a `&'static str`
//! constant, grouped by the CSS concern it addresses, together with helpers
//! that prepend responsive breakpoint and state variant prefixes.
//!
//! ```
//! use tailwind_catalog::{class_list, tw};
//!
//! let card = class_list![
//!     tw::background::WHITE,
//!     tw::border::ROUNDED_LG,
//!     tw::effects::shadow::LG,
//!     tw::spacing::padding::P_6,
//!     tw::responsive::md(tw::sizing::max_width::W_MD),
//!     tw::state::hover(tw::background::GRAY_100),
//! ];
//!
//! assert_eq!(
//!     card.to_string(),
//!     "bg-white rounded-lg shadow-lg p-6 md:max-w-md hover:bg-gray-100"
//! );
//! ```

pub mod args;
pub mod catalog;
pub mod class_list;
pub mod cli;
pub mod config;
pub mod errors;
pub mod manifest;
pub mod modifier;
pub mod tw;

pub use args::{ApplyArgs, Cli, Commands, ListArgs, LookupArgs, ManifestArgs};
pub use catalog::{Category, UtilityClassEntry};
pub use class_list::ClassList;
pub use config::{CatalogConfig, CategoryFilter, ManifestOptions};
pub use errors::{CatalogError, Result};
pub use manifest::{CatalogManifest, ManifestBuilder};
pub use modifier::{
    responsive, state, try_responsive, try_state, Breakpoint, Modifier, StateVariant,
};

/// Tailwind CSS version these constants were generated from
pub const TAILWIND_VERSION: &str = "4.1.18";
