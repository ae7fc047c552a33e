pub mod placement;
pub mod scale;
