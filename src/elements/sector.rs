//! Sector-like drawable elements: sectors, circumcircle sectors, angles.

use slotmap::SlotMap;

use crate::board::coords::Viewport;
use crate::board::options::Attributes;
use crate::board::point::{PointData, PointId};
use crate::error::{BoardError, Result};
use crate::math::angle_2d::{orientation_det, rad};
use crate::math::arc_2d::{rotate_about, sector_boundary};
use crate::math::{Point2, Vector2};

use super::curve::CurvePath;

slotmap::new_key_type! {
    /// Unique identifier for a sector-like element on a board.
    pub struct SectorId;
}

/// Number of interior samples along the arc of a sector boundary.
pub const SECTOR_SAMPLES: u32 = 100;

/// Label offset past the arc, in device pixels (converted per axis).
const LABEL_GAP_PX: f64 = 10.0;

/// Label sits on the wedge bisector.
const SECTOR_ANCHOR_FRACTION: f64 = 0.5;

/// Angle labels sit slightly past the bisector.
const ANGLE_ANCHOR_FRACTION: f64 = 0.5 * 1.125;

/// What a sector-like element represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectorKind {
    Sector,
    CircumcircleSector,
    Angle,
}

/// Label state attached to a sector-like element.
#[derive(Debug, Clone, Default)]
pub struct LabelState {
    /// Label text; angles receive one at construction.
    pub text: Option<String>,
    /// Offset relative to the computed anchor, in user units.
    pub relative_offset: Vector2,
}

/// A filled wedge bounded by two radii and a sampled circular arc.
///
/// The element holds non-owning references to its three defining points.
/// The sampled boundary path is regenerated on every recomputation; the
/// radius and arc angle are derived on demand and never cached.
#[derive(Debug, Clone)]
pub struct SectorData {
    center: PointId,
    radius_point: PointId,
    angle_point: PointId,
    use_direction: bool,
    direction_parents: Option<[PointId; 3]>,
    kind: SectorKind,
    anchor_fraction: f64,
    attributes: Attributes,
    aux_point: Option<PointId>,
    label: LabelState,
    path: CurvePath,
}

fn coords_of(points: &SlotMap<PointId, PointData>, id: PointId) -> Result<Point2> {
    points
        .get(id)
        .map(PointData::coords)
        .ok_or_else(|| BoardError::EntityNotFound("point").into())
}

impl SectorData {
    /// Creates a sector element over three defining points. The boundary
    /// path starts empty; the board resamples it immediately after
    /// insertion.
    #[must_use]
    pub(crate) fn new(
        center: PointId,
        radius_point: PointId,
        angle_point: PointId,
        attributes: Attributes,
        kind: SectorKind,
    ) -> Self {
        let label = LabelState {
            text: attributes.text.clone(),
            relative_offset: Vector2::zeros(),
        };
        Self {
            center,
            radius_point,
            angle_point,
            use_direction: attributes.use_direction,
            direction_parents: None,
            kind,
            anchor_fraction: SECTOR_ANCHOR_FRACTION,
            attributes,
            aux_point: None,
            label,
            path: CurvePath::new(),
        }
    }

    /// Records the raw parent triple used for orientation resolution.
    pub(crate) fn set_direction_parents(&mut self, parents: [PointId; 3]) {
        self.direction_parents = Some(parents);
    }

    /// Re-marks this sector as an angle: assigns the label text, takes
    /// ownership of the hidden auxiliary point, and moves the label anchor
    /// past the bisector.
    pub(crate) fn promote_to_angle(&mut self, text: String, aux_point: PointId) {
        self.kind = SectorKind::Angle;
        self.label.text = Some(text);
        self.aux_point = Some(aux_point);
        self.anchor_fraction = ANGLE_ANCHOR_FRACTION;
    }

    /// The midpoint of the wedge.
    #[must_use]
    pub fn center(&self) -> PointId {
        self.center
    }

    /// The point fixing the wedge radius (construction-time binding; see
    /// [`SectorData::bound_points`] for the direction-resolved pair).
    #[must_use]
    pub fn radius_point(&self) -> PointId {
        self.radius_point
    }

    /// The point fixing the arc span (construction-time binding).
    #[must_use]
    pub fn angle_point(&self) -> PointId {
        self.angle_point
    }

    /// What this element represents.
    #[must_use]
    pub fn kind(&self) -> SectorKind {
        self.kind
    }

    /// Whether orientation is re-resolved from the raw parents on every
    /// recomputation.
    #[must_use]
    pub fn use_direction(&self) -> bool {
        self.use_direction
    }

    /// Resolved attribute set.
    #[must_use]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// The hidden auxiliary point owned by an angle element.
    #[must_use]
    pub fn aux_point(&self) -> Option<PointId> {
        self.aux_point
    }

    /// Label state.
    #[must_use]
    pub fn label(&self) -> &LabelState {
        &self.label
    }

    /// Assigned label text, if any.
    #[must_use]
    pub fn label_text(&self) -> Option<&str> {
        self.label.text.as_deref()
    }

    /// The sampled boundary path.
    #[must_use]
    pub fn path(&self) -> &CurvePath {
        &self.path
    }

    /// Resolves which points currently act as radius point and angle point.
    ///
    /// For direction-resolving sectors this is a pure function of the raw
    /// parent triple, re-evaluated on every call: a negative orientation
    /// determinant binds `(p0, p2)`, otherwise the pair is swapped. The
    /// middle parent participates only in the determinant. Point motion can
    /// flip the result between calls; nothing is mutated on the element.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced point is missing from the store.
    pub fn bound_points(&self, points: &SlotMap<PointId, PointData>) -> Result<(PointId, PointId)> {
        if self.use_direction {
            if let Some([p0, p1, p2]) = self.direction_parents {
                let det = orientation_det(
                    coords_of(points, p0)?,
                    coords_of(points, p1)?,
                    coords_of(points, p2)?,
                );
                return Ok(if det < 0.0 { (p0, p2) } else { (p2, p0) });
            }
        }
        Ok((self.radius_point, self.angle_point))
    }

    /// The wedge radius: distance from the center to the radius point.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced point is missing from the store.
    pub fn radius(&self, points: &SlotMap<PointId, PointData>) -> Result<f64> {
        let (radius_point, _) = self.bound_points(points)?;
        let b = coords_of(points, self.center)?;
        let a = coords_of(points, radius_point)?;
        Ok(nalgebra::distance(&b, &a))
    }

    /// The arc span in radians, in `[0, 2π)`.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced point is missing from the store.
    pub fn arc_angle(&self, points: &SlotMap<PointId, PointData>) -> Result<f64> {
        let (radius_point, angle_point) = self.bound_points(points)?;
        let b = coords_of(points, self.center)?;
        let a = coords_of(points, radius_point)?;
        let c = coords_of(points, angle_point)?;
        Ok(rad(a, b, c))
    }

    /// Regenerates the sampled boundary path from the current point
    /// coordinates. Orientation is resolved before the span is measured.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced point is missing from the store.
    pub(crate) fn resample(&mut self, points: &SlotMap<PointId, PointData>) -> Result<()> {
        let (radius_point, angle_point) = self.bound_points(points)?;
        let b = coords_of(points, self.center)?;
        let a = coords_of(points, radius_point)?;
        let c = coords_of(points, angle_point)?;

        let phi = rad(a, b, c);
        let boundary = sector_boundary(b, a, phi, SECTOR_SAMPLES);
        self.path.assign(&boundary);
        Ok(())
    }

    /// Tests whether the given screen position lies within the wedge.
    ///
    /// The radius bound is strict (a point exactly on the circle is
    /// outside); the angular bound is inclusive (the closing ray belongs
    /// to the wedge).
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced point is missing from the store.
    pub fn contains_point(
        &self,
        points: &SlotMap<PointId, PointData>,
        view: &Viewport,
        screen_x: f64,
        screen_y: f64,
    ) -> Result<bool> {
        let p = view.screen_to_user(screen_x, screen_y);
        let b = coords_of(points, self.center)?;

        if nalgebra::distance(&b, &p) >= self.radius(points)? {
            return Ok(false);
        }

        let (radius_point, angle_point) = self.bound_points(points)?;
        let a = coords_of(points, radius_point)?;
        let c = coords_of(points, angle_point)?;
        Ok(rad(a, b, p) <= rad(a, b, c))
    }

    /// The anchor for text attached to the element: the center coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if the center point is missing from the store.
    pub fn text_anchor(&self, points: &SlotMap<PointId, PointData>) -> Result<Point2> {
        coords_of(points, self.center)
    }

    /// Computes the label anchor: the radius vector rotated along the
    /// wedge by the element's anchor fraction, lengthened by a fixed
    /// screen-space gap so the label clears the sampled arc.
    ///
    /// Resets the label's relative offset so the absolute anchor takes
    /// effect. A zero-radius wedge yields non-finite coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if a referenced point is missing from the store.
    pub fn label_anchor(
        &mut self,
        points: &SlotMap<PointId, PointData>,
        view: &Viewport,
    ) -> Result<Point2> {
        self.label.relative_offset = Vector2::zeros();

        let (radius_point, angle_point) = self.bound_points(points)?;
        let b = coords_of(points, self.center)?;
        let a = coords_of(points, radius_point)?;
        let c = coords_of(points, angle_point)?;

        let phi = rad(a, b, c);
        let vec = rotate_about(a, b, phi * self.anchor_fraction) - b;
        let len = vec.norm();

        let dx = LABEL_GAP_PX / view.stretch_x();
        let dy = LABEL_GAP_PX / view.stretch_y();

        Ok(Point2::new(
            b.x + vec.x * (len + dx) / len,
            b.y + vec.y * (len + dy) / len,
        ))
    }
}
