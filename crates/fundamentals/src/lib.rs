#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod resolve;
pub use resolve::{resolve_panel, resolve_series};

mod ratios;
pub use ratios::{FundamentalSet, RatioPanels};

mod error;
pub use error::FundamentalsError;
