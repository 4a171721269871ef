//! Loosely-typed value container for schema-less data.
//!
//! ```
//! use variant::Variant;
//!
//! let mut v = Variant::new();
//! v.entry("name").set("kodi");
//! v.entry("port").set("8080");
//! v.entry("tags").push_back("media");
//!
//! assert_eq!(v["port"].as_integer(0), 8080);
//! assert_eq!(v["missing"].as_string("n/a"), "n/a");
//! assert!(v["tags"].is_array());
//! ```
pub mod error;
pub mod numparse;
pub mod path_de;
pub mod pointer;
pub mod serde_impl;
pub mod variant;
pub mod wide;

pub use error::{Error, Result};
pub use variant::{ObjectIterMut, Slot, Variant, VariantArray, VariantMap, VariantType};
pub use wide::WideString;
