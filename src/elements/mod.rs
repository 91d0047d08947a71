pub mod curve;
pub mod sector;

pub use curve::CurvePath;
pub use sector::{LabelState, SectorData, SectorId, SectorKind, SECTOR_SAMPLES};
