//! Sector construction.

use crate::board::point::PointId;
use crate::board::{AttrOverrides, Attributes, Board, Dependent, ObjectRef};
use crate::elements::sector::{SectorData, SectorId, SectorKind};
use crate::error::Result;

use super::point_parents;

/// Creates a sector from three points: the center, the point fixing the
/// radius, and the point fixing the arc span.
#[derive(Debug, Clone)]
pub struct CreateSector {
    parents: [ObjectRef; 3],
    attributes: AttrOverrides,
    kind: SectorKind,
    direction_parents: Option<[PointId; 3]>,
}

impl CreateSector {
    /// Creates a new `CreateSector` operation.
    #[must_use]
    pub fn new(parents: [ObjectRef; 3]) -> Self {
        Self {
            parents,
            attributes: AttrOverrides::default(),
            kind: SectorKind::Sector,
            direction_parents: None,
        }
    }

    /// Sets call-site attribute overrides.
    #[must_use]
    pub fn with_attributes(mut self, attributes: AttrOverrides) -> Self {
        self.attributes = attributes;
        self
    }

    /// Marks this sector as a circumcircle sector and records the raw
    /// parent triple from which orientation is resolved at sample time.
    pub(crate) fn as_circumcircle(mut self, raw_parents: [PointId; 3]) -> Self {
        self.kind = SectorKind::CircumcircleSector;
        self.direction_parents = Some(raw_parents);
        self
    }

    /// Executes the operation, creating the sector on the board.
    ///
    /// The element is registered as a dependent of all three defining
    /// points and its boundary path is sampled once before returning.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConstructError::InvalidParentType`] if any
    /// parent is not a point.
    pub fn execute(self, board: &mut Board) -> Result<SectorId> {
        let [center, radius_point, angle_point] = point_parents("sector", board, &self.parents)?;

        let merged = Attributes::resolve(
            &self.attributes,
            &board.options().sector,
            &board.options().elements,
        );

        let mut data = SectorData::new(center, radius_point, angle_point, merged, self.kind);
        if let Some(raw) = self.direction_parents {
            data.set_direction_parents(raw);
        }

        let id = board.insert_sector(data);
        for point in [center, radius_point, angle_point] {
            board.add_child(point, Dependent::Sector(id))?;
        }
        board.recompute_sector(id)?;
        Ok(id)
    }
}
