//! Builder API for hand drivers.
//!
//! # Example
//!
//! ```
//! use grasp_heuristic::builder::HandDriverBuilder;
//! use grasp_heuristic::core::HandId;
//!
//! let driver = HandDriverBuilder::new()
//!     .hand(HandId(0))
//!     .two_handed_grasp(false)
//!     .build()
//!     .unwrap();
//! assert_eq!(driver.hand(), HandId(0));
//! ```

pub mod driver;
pub mod error;

pub use driver::HandDriverBuilder;
pub use error::BuildError;
