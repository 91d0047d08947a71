//! Construct factories wiring new elements into a board.

pub mod angle;
pub mod circumcircle;
pub mod sector;

pub use angle::CreateAngle;
pub use circumcircle::CreateCircumcircleSector;
pub use sector::CreateSector;

use crate::board::point::PointId;
use crate::board::{Board, ObjectRef};
use crate::error::{ConstructError, Result};

/// Validates that every parent reference designates an existing point.
///
/// Fails fast with [`ConstructError::InvalidParentType`] on the first
/// non-point parent; nothing is constructed in that case.
pub(crate) fn point_parents<const N: usize>(
    construct: &'static str,
    board: &Board,
    parents: &[ObjectRef; N],
) -> Result<[PointId; N]> {
    let mut ids = [PointId::default(); N];
    for (index, parent) in parents.iter().enumerate() {
        let id = parent
            .as_point()
            .ok_or(ConstructError::InvalidParentType {
                construct,
                index,
                found: parent.type_name(),
            })?;
        board.point(id)?;
        ids[index] = id;
    }
    Ok(ids)
}
