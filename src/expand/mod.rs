//! Orthogonal expansion engine
//!
//! This module multiplies each template case into one concrete case per
//! combination of the orthogonal factors it references. A case body is
//! scanned for `$${NAME}` placeholders, the Cartesian product of the
//! referenced factors' value lists is generated, and each combination is
//! substituted into an independent copy of the body.
//!
//! # Example
//!
//! ```text
//! factors {
//!     ANIMAL: ["cat", "dog"]
//! }
//!
//! cases {
//!     case "feed" {
//!         do "feed the $${ANIMAL}"
//!     }
//! }
//! ```
//!
//! expands into cases `[1].feed-cat` and `[2].feed-dog`.

mod combine;
mod driver;
mod factors;
mod scan;
mod substitute;

pub use combine::{combinations, Combination};
pub use driver::expand_document;
pub use factors::{parse_values, ExpandError, Factor, FactorStore};
pub use scan::{placeholder_names, referenced_factors};
pub use substitute::{instance_name, instantiate};
