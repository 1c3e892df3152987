//! Command-line demo driver built on the public graph API.

pub mod commands;
pub mod driver;

pub use driver::{DemoGraph, DemoParams, GraphSpec, NeighborReport, PointReport};
