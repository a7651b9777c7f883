//! Evaluation HTTP adapter module.
//!
//! Provides REST endpoints for the expected value comparison, the decision
//! tree diagram and the comparison chart.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{ErrorResponse, EvaluationParams, EvaluationResponse, InputFieldDescriptor};
pub use handlers::{EvaluationApiError, EvaluationAppState};
pub use routes::evaluation_router;
