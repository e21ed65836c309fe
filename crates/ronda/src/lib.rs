//! # ronda
//!
//! A daily point-in-time cross-sectional equity factor matrix.
//!
//! This crate provides a unified interface to the ronda ecosystem.
//! Individual components can be enabled via feature flags.
//!
//! ## Features
//!
//! - `full` (default): Enables all components
//! - `primitives`: Core type definitions
//! - `panel`: Wide date-by-asset panels and the loader
//! - `math`: Cross-sectional statistics
//! - `fundamentals`: Point-in-time fundamental resolution
//! - `signals`: The factor signal library
//! - `matrix`: Forward returns, assembly, and the pipeline
//!
//! ## Example
//!
//! ```rust,ignore
//! // With default features (all components):
//! use ronda::matrix::{Pipeline, PipelineInputs};
//!
//! // Or with specific features only:
//! // [dependencies]
//! // ronda = { version = "0.1", default-features = false, features = ["signals"] }
//! ```

#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

#[cfg(feature = "primitives")]
#[doc(inline)]
pub use ronda_primitives as primitives;

#[cfg(feature = "panel")]
#[doc(inline)]
pub use ronda_panel as panel;

#[cfg(feature = "math")]
#[doc(inline)]
pub use ronda_math as math;

#[cfg(feature = "fundamentals")]
#[doc(inline)]
pub use ronda_fundamentals as fundamentals;

#[cfg(feature = "signals")]
#[doc(inline)]
pub use ronda_signals as signals;

#[cfg(feature = "matrix")]
#[doc(inline)]
pub use ronda_matrix as matrix;
