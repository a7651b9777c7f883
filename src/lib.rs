//! Treatment Choice - expected-value comparison of treatment strategies
//!
//! This crate compares immediate surgery against watchful waiting by weighting
//! the quality of life of each outcome by its probability. Results are served
//! as JSON, a Graphviz decision tree and an SVG bar chart.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
