pub mod pipeline;
pub mod stages;
pub mod worker;

pub use pipeline::{Chain, Pipeline, PipelineBuilder, Records, Stage};
pub use worker::{queue_bindings, Worker};
