#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/ronda/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod forward;
pub use forward::forward_log_returns;

mod assemble;
pub use assemble::{assemble, write_matrix_csv};

mod report;
pub use report::MatrixReport;

mod config;
pub use config::PipelineConfig;

mod pipeline;
pub use pipeline::{Pipeline, PipelineInputs, PipelineOutput};

mod error;
pub use error::MatrixError;
