//! Building blocks shared between puzzle solutions

pub mod range_map;
