//! Command-line workflows, independent of argument parsing

pub mod orchestration;

pub use orchestration::{
    resolve_checkout, run_publish_workflow, CheckoutResolution, PublishWorkflowArgs,
    WorkflowOutcome,
};
