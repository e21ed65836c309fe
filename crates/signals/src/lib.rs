#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod expr_util;

mod traits;
pub use traits::{Signal, SignalInputs};

mod momentum;
pub use momentum::{MomentumConfig, MomentumSignal};

mod value;
pub use value::ValueSignal;

mod size;
pub use size::SizeSignal;

mod quality;
pub use quality::QualitySignal;

mod low_vol;
pub use low_vol::{LowVolConfig, LowVolSignal};

mod sentiment;
pub use sentiment::SentimentSignal;

mod registry;
pub use registry::SignalRegistry;

mod error;
pub use error::SignalError;
