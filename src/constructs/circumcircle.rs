//! Circumcircle sector construction.

use crate::board::{AttrOverrides, Board, ObjectRef, PointRule};
use crate::elements::sector::SectorId;
use crate::error::Result;

use super::{point_parents, CreateSector};

/// Creates a sector of the circumcircle through three points.
///
/// A hidden, unlabeled circumcenter point is derived from the parents and
/// becomes the sector's center. Which of the outer points acts as radius
/// point is not fixed here: the sector re-resolves it from the triple's
/// orientation on every recomputation, so the drawn arc always follows
/// the circle's traversal direction through the middle parent.
#[derive(Debug, Clone)]
pub struct CreateCircumcircleSector {
    parents: [ObjectRef; 3],
    attributes: AttrOverrides,
}

impl CreateCircumcircleSector {
    /// Creates a new `CreateCircumcircleSector` operation.
    #[must_use]
    pub fn new(parents: [ObjectRef; 3]) -> Self {
        Self {
            parents,
            attributes: AttrOverrides::default(),
        }
    }

    /// Sets call-site attribute overrides.
    #[must_use]
    pub fn with_attributes(mut self, attributes: AttrOverrides) -> Self {
        self.attributes = attributes;
        self
    }

    /// Executes the operation, creating the circumcenter point and the
    /// sector on the board.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConstructError::InvalidParentType`] if any
    /// parent is not a point.
    pub fn execute(self, board: &mut Board) -> Result<SectorId> {
        let [p0, p1, p2] = point_parents("circumcircle sector", board, &self.parents)?;

        let midpoint_id = self.attributes.id.as_ref().map(|id| format!("{id}_mp"));
        let mp = board.add_derived_point(
            PointRule::Circumcenter {
                a: p0,
                b: p1,
                c: p2,
            },
            midpoint_id,
        )?;

        let mut attributes = self.attributes;
        attributes.use_direction = Some(true);

        CreateSector::new([mp.into(), p0.into(), p2.into()])
            .with_attributes(attributes)
            .as_circumcircle([p0, p1, p2])
            .execute(board)
    }
}
