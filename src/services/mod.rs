// Service module exports

pub mod board;
pub mod config;
pub mod geometry;
pub mod ids;
pub mod placement;
pub mod resize;
