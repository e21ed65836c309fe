#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod cross_section;
pub use cross_section::{
    Normalizer, NormalizerConfig, rank_pct, rank_pct_xsection, zscore, zscore_xsection,
};

mod winsorize;
pub use winsorize::{winsorize, winsorize_xsection};

mod error;
pub use error::MathError;
