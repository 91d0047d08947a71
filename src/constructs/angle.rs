//! Angle construction.

use crate::board::{label, AttrOverrides, Attributes, Board, Dependent, ObjectRef, PointRule};
use crate::elements::sector::{SectorId, SectorKind};
use crate::error::Result;

use super::{point_parents, CreateSector};

/// Creates an angle from three points `[a, b, c]`: the angle sits at
/// vertex `b`, between the rays toward `a` and `c`.
///
/// The drawn wedge is a sector whose radius point is a hidden auxiliary
/// point at fixed distance `radius` from the vertex along the ray toward
/// `a`, so the arc radius stays constant as `a` moves.
#[derive(Debug, Clone)]
pub struct CreateAngle {
    parents: [ObjectRef; 3],
    attributes: AttrOverrides,
    legacy_arm_offset: bool,
}

impl CreateAngle {
    /// Creates a new `CreateAngle` operation.
    #[must_use]
    pub fn new(parents: [ObjectRef; 3]) -> Self {
        Self {
            parents,
            attributes: AttrOverrides::default(),
            legacy_arm_offset: false,
        }
    }

    /// Sets call-site attribute overrides.
    #[must_use]
    pub fn with_attributes(mut self, attributes: AttrOverrides) -> Self {
        self.attributes = attributes;
        self
    }

    /// Places the auxiliary point with the historical mixed-axis y
    /// formula instead of the corrected one. Off by default; kept so
    /// boards that relied on the old label placement can reproduce it.
    #[must_use]
    pub fn with_legacy_arm_offset(mut self, legacy: bool) -> Self {
        self.legacy_arm_offset = legacy;
        self
    }

    /// Executes the operation, creating the angle on the board.
    ///
    /// Without an explicit `text` attribute the label is drawn from the
    /// Greek-letter pool, skipping letters already used by angles on this
    /// board. The scan happens once, here; later renames or removals do
    /// not retroactively re-check assigned labels.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ConstructError::InvalidParentType`] if any
    /// parent is not a point.
    pub fn execute(self, board: &mut Board) -> Result<SectorId> {
        let [a, b, c] = point_parents("angle", board, &self.parents)?;

        let mut merged = Attributes::resolve(
            &self.attributes,
            &board.options().angle,
            &board.options().elements,
        );

        let text = match merged.text.as_deref() {
            Some(t) if !t.is_empty() => t.to_owned(),
            _ => {
                let existing: Vec<&str> = board
                    .sectors()
                    .filter(|(_, s)| s.kind() == SectorKind::Angle)
                    .filter_map(|(_, s)| s.label_text())
                    .collect();
                label::allocate(&existing)
            }
        };

        let aux = board.add_derived_point(
            PointRule::RadialOffset {
                vertex: b,
                toward: a,
                radius: merged.radius,
                legacy_arm_offset: self.legacy_arm_offset,
            },
            None,
        )?;

        merged.name = Some(text.clone());
        let id = CreateSector::new([b.into(), aux.into(), c.into()])
            .with_attributes(merged.into_overrides())
            .execute(board)?;

        board.sector_mut(id)?.promote_to_angle(text, aux);
        // The first defining point is not one of the sector's geometric
        // parents, but moving it must still retrigger recomputation.
        board.add_child(a, Dependent::Sector(id))?;
        Ok(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use crate::board::label::GREEK_LABELS;
    use crate::board::point::PointId;

    use super::*;

    const TOL: f64 = 1e-10;

    fn right_angle_points(board: &mut Board) -> [PointId; 3] {
        let a = board.add_point(2.0, 0.0);
        let b = board.add_point(0.0, 0.0);
        let c = board.add_point(0.0, 3.0);
        [a, b, c]
    }

    fn make_angle(board: &mut Board) -> SectorId {
        let [a, b, c] = right_angle_points(board);
        CreateAngle::new([a.into(), b.into(), c.into()])
            .execute(board)
            .unwrap()
    }

    #[test]
    fn labels_follow_the_greek_pool_in_order() {
        let mut board = Board::new();
        let first = make_angle(&mut board);
        let second = make_angle(&mut board);
        let third = make_angle(&mut board);
        let fourth = make_angle(&mut board);

        assert_eq!(board.sector(first).unwrap().label_text(), Some("α"));
        assert_eq!(board.sector(second).unwrap().label_text(), Some("β"));
        assert_eq!(board.sector(third).unwrap().label_text(), Some("γ"));
        assert_eq!(board.sector(fourth).unwrap().label_text(), Some("δ"));
    }

    #[test]
    fn explicit_text_skips_allocation() {
        let mut board = Board::new();
        let [a, b, c] = right_angle_points(&mut board);
        let attrs = AttrOverrides {
            text: Some("φ₁".to_owned()),
            ..AttrOverrides::default()
        };
        let id = CreateAngle::new([a.into(), b.into(), c.into()])
            .with_attributes(attrs)
            .execute(&mut board)
            .unwrap();
        assert_eq!(board.sector(id).unwrap().label_text(), Some("φ₁"));

        // The pool is untouched: the next unnamed angle still gets α.
        let next = make_angle(&mut board);
        assert_eq!(board.sector(next).unwrap().label_text(), Some("α"));
    }

    #[test]
    fn exhausted_pool_switches_to_indexed_labels() {
        let mut board = Board::new();
        for _ in GREEK_LABELS {
            make_angle(&mut board);
        }
        let overflow = make_angle(&mut board);
        assert_eq!(board.sector(overflow).unwrap().label_text(), Some("α_{0}"));
    }

    #[test]
    fn removed_labels_are_reused_by_later_angles() {
        // Scan-at-creation semantics: freeing a letter makes it available
        // to future allocations, but existing labels are never revisited.
        let mut board = Board::new();
        let first = make_angle(&mut board);
        let _second = make_angle(&mut board);

        board.remove_sector(first).unwrap();
        let third = make_angle(&mut board);
        assert_eq!(board.sector(third).unwrap().label_text(), Some("α"));
    }

    #[test]
    fn wedge_radius_is_fixed_by_the_radius_attribute() {
        let mut board = Board::new();
        let id = make_angle(&mut board);

        // Default angle radius is 1, independent of dist(a, b) = 2.
        assert!((board.sector_radius(id).unwrap() - 1.0).abs() < TOL);
        let phi = board.sector_arc_angle(id).unwrap();
        assert!((phi - FRAC_PI_2).abs() < TOL, "phi={phi}");

        // The hidden radius point sits on the arm toward `a`.
        let aux = board.sector(id).unwrap().aux_point().unwrap();
        let p = board.point_coords(aux).unwrap();
        assert!((p.x - 1.0).abs() < TOL, "x={}", p.x);
        assert!(p.y.abs() < TOL, "y={}", p.y);
    }

    #[test]
    fn aux_point_tracks_the_first_defining_point() {
        let mut board = Board::new();
        let [a, b, c] = right_angle_points(&mut board);
        let id = CreateAngle::new([a.into(), b.into(), c.into()])
            .execute(&mut board)
            .unwrap();

        // Swing the first arm from the x axis to the diagonal.
        board.move_point(a, 3.0, 3.0).unwrap();

        let aux = board.sector(id).unwrap().aux_point().unwrap();
        let p = board.point_coords(aux).unwrap();
        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        assert!((p.x - inv_sqrt2).abs() < TOL, "x={}", p.x);
        assert!((p.y - inv_sqrt2).abs() < TOL, "y={}", p.y);

        // The resampled wedge starts at the refreshed auxiliary point.
        let start = board.sector_path(id).unwrap().point(1).unwrap();
        assert!((start.x - p.x).abs() < TOL);
        assert!((start.y - p.y).abs() < TOL);
        // The wedge narrowed from π/2 to π/4 with the arm.
        let phi = board.sector_arc_angle(id).unwrap();
        assert!((phi - FRAC_PI_4).abs() < TOL, "phi={phi}");
    }

    #[test]
    fn legacy_arm_offset_reproduces_the_old_placement() {
        let mut board = Board::new();
        let a = board.add_point(5.0, 4.0);
        let b = board.add_point(2.0, 0.0);
        let c = board.add_point(2.0, 5.0);
        let id = CreateAngle::new([a.into(), b.into(), c.into()])
            .with_legacy_arm_offset(true)
            .execute(&mut board)
            .unwrap();

        // Arm (3, 4), length 5, radius 1. Legacy y term: (a.y - b.x) / 5.
        let aux = board.sector(id).unwrap().aux_point().unwrap();
        let p = board.point_coords(aux).unwrap();
        assert!((p.x - 2.6).abs() < TOL, "x={}", p.x);
        assert!((p.y - 0.4).abs() < TOL, "y={}", p.y);
    }

    #[test]
    fn removing_an_angle_releases_its_auxiliary_point() {
        let mut board = Board::new();
        let id = make_angle(&mut board);
        let aux = board.sector(id).unwrap().aux_point().unwrap();

        board.remove_sector(id).unwrap();
        assert!(board.sector(id).is_err());
        assert!(board.point(aux).is_err());
    }

    #[test]
    fn non_point_parent_is_rejected() {
        let mut board = Board::new();
        let id = make_angle(&mut board);
        let [a, b, _] = right_angle_points(&mut board);

        let err = CreateAngle::new([a.into(), b.into(), id.into()]).execute(&mut board);
        assert!(err.is_err());
    }

    #[test]
    fn angle_name_attribute_carries_the_label() {
        let mut board = Board::new();
        let id = make_angle(&mut board);
        let sector = board.sector(id).unwrap();
        assert_eq!(sector.attributes().name.as_deref(), Some("α"));
        assert_eq!(sector.kind(), SectorKind::Angle);
    }
}
