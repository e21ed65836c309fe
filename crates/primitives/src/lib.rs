#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod asset;
pub use asset::{AssetSeries, Symbol};

mod fundamentals;
pub use fundamentals::{FundamentalMetric, FundamentalObservation};

/// Re-export common date type.
pub type Date = chrono::NaiveDate;
