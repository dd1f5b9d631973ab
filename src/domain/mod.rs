// Domain layer - Core types and timecode rules

pub mod model;
pub mod rules;
