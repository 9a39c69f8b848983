//! Coordinate representations used by the frame rotations

pub mod cartesian;

pub use cartesian::Cartesian3;
