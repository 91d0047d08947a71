//! The board: entity store, viewport, and reactive recomputation.

pub mod coords;
pub mod label;
pub mod options;
pub mod point;

pub use coords::Viewport;
pub use options::{AttrOverrides, Attributes, BoardOptions};
pub use point::{PointData, PointId, PointRule};

use slotmap::{SecondaryMap, SlotMap};

use crate::elements::curve::CurvePath;
use crate::elements::sector::{SectorData, SectorId};
use crate::error::{BoardError, Result};
use crate::math::Point2;

/// An entity that must be recomputed when a parent point moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dependent {
    Point(PointId),
    Sector(SectorId),
}

/// Reference to any object on a board. Construct factories take these as
/// parents and validate the referenced type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectRef {
    Point(PointId),
    Sector(SectorId),
}

impl ObjectRef {
    /// Human-readable type name, used in construction errors.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "point",
            Self::Sector(_) => "sector",
        }
    }

    pub(crate) fn as_point(self) -> Option<PointId> {
        match self {
            Self::Point(id) => Some(id),
            Self::Sector(_) => None,
        }
    }
}

impl From<PointId> for ObjectRef {
    fn from(id: PointId) -> Self {
        Self::Point(id)
    }
}

impl From<SectorId> for ObjectRef {
    fn from(id: SectorId) -> Self {
        Self::Sector(id)
    }
}

/// Central store owning all points and sector-like elements of one scene.
///
/// Entities reference each other via typed ids (generational indices).
/// Every point carries a list of dependents in registration order; moving
/// a free point synchronously recomputes the transitive dependents, with
/// no threads and no suspension. The dependency graph is kept acyclic at
/// registration time.
#[derive(Debug, Default)]
pub struct Board {
    points: SlotMap<PointId, PointData>,
    sectors: SlotMap<SectorId, SectorData>,
    children: SecondaryMap<PointId, Vec<Dependent>>,
    options: BoardOptions,
    view: Viewport,
}

impl Board {
    /// Creates an empty board with default options and viewport.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty board with the given viewport.
    #[must_use]
    pub fn with_view(view: Viewport) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    /// Board-wide configuration.
    #[must_use]
    pub fn options(&self) -> &BoardOptions {
        &self.options
    }

    /// Mutable board-wide configuration. Changes affect elements created
    /// afterwards; existing elements keep their resolved attributes.
    pub fn options_mut(&mut self) -> &mut BoardOptions {
        &mut self.options
    }

    /// The screen ⇄ user viewport.
    #[must_use]
    pub fn view(&self) -> &Viewport {
        &self.view
    }

    // --- Point operations ---

    /// Inserts a free point and returns its id.
    pub fn add_point(&mut self, x: f64, y: f64) -> PointId {
        self.points.insert(PointData::free(x, y))
    }

    /// Inserts a hidden derived point, registers it as a dependent of the
    /// rule's parents, and evaluates its initial coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if a rule parent is missing from the store.
    pub fn add_derived_point(&mut self, rule: PointRule, id: Option<String>) -> Result<PointId> {
        let parents = rule.parents();
        for parent in &parents {
            if !self.points.contains_key(*parent) {
                return Err(BoardError::EntityNotFound("point").into());
            }
        }

        let mut data = PointData::derived(rule);
        data.id = id;
        let pid = self.points.insert(data);

        for parent in parents {
            self.add_child(parent, Dependent::Point(pid))?;
        }
        self.refresh_point(pid)?;
        Ok(pid)
    }

    /// Returns a reference to the point data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn point(&self, id: PointId) -> Result<&PointData> {
        self.points
            .get(id)
            .ok_or_else(|| BoardError::EntityNotFound("point").into())
    }

    /// Current user-space coordinates of a point.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn point_coords(&self, id: PointId) -> Result<Point2> {
        Ok(self.point(id)?.coords())
    }

    /// Distance between two points.
    ///
    /// # Errors
    ///
    /// Returns an error if either entity is not found in the store.
    pub fn dist(&self, a: PointId, b: PointId) -> Result<f64> {
        Ok(nalgebra::distance(
            &self.point_coords(a)?,
            &self.point_coords(b)?,
        ))
    }

    /// Moves a free point and synchronously recomputes every transitive
    /// dependent (derived points refresh their coordinates, sectors
    /// resample their paths) in registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is missing or not free.
    pub fn move_point(&mut self, id: PointId, x: f64, y: f64) -> Result<()> {
        let data = self
            .points
            .get_mut(id)
            .ok_or(BoardError::EntityNotFound("point"))?;
        if !data.is_free() {
            return Err(BoardError::NotAFreePoint(format!("{id:?}")).into());
        }
        data.coords = Point2::new(x, y);
        self.propagate_from(id)
    }

    /// Registers `dependent` for recomputation whenever `parent` moves.
    /// Dependents are notified in registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` is missing, or if the new edge would
    /// close a dependency cycle.
    pub fn add_child(&mut self, parent: PointId, dependent: Dependent) -> Result<()> {
        if !self.points.contains_key(parent) {
            return Err(BoardError::EntityNotFound("point").into());
        }
        if let Dependent::Point(child) = dependent {
            if child == parent || self.reaches(child, parent) {
                return Err(BoardError::DependencyCycle.into());
            }
        }
        if let Some(deps) = self.children.get_mut(parent) {
            deps.push(dependent);
        } else {
            self.children.insert(parent, vec![dependent]);
        }
        Ok(())
    }

    /// Whether `target` is reachable from `from` along dependent edges.
    fn reaches(&self, from: PointId, target: PointId) -> bool {
        let mut queue = vec![from];
        let mut idx = 0;
        while idx < queue.len() {
            let current = queue[idx];
            idx += 1;
            if current == target {
                return true;
            }
            if let Some(deps) = self.children.get(current) {
                for dep in deps {
                    if let Dependent::Point(p) = dep {
                        if !queue.contains(p) {
                            queue.push(*p);
                        }
                    }
                }
            }
        }
        false
    }

    /// Re-evaluates a derived point's rule and caches the result.
    fn refresh_point(&mut self, id: PointId) -> Result<()> {
        let rule = self
            .points
            .get(id)
            .ok_or(BoardError::EntityNotFound("point"))?
            .rule()
            .clone();
        if let Some(coords) = rule.eval(&self.points)? {
            if let Some(data) = self.points.get_mut(id) {
                data.coords = coords;
            }
        }
        Ok(())
    }

    /// Synchronous breadth-first recomputation of everything downstream of
    /// `origin`. Derived points always register before the sectors reading
    /// them, so each sector resamples once, after its inputs settled.
    fn propagate_from(&mut self, origin: PointId) -> Result<()> {
        let mut queue: Vec<Dependent> = self.children.get(origin).cloned().unwrap_or_default();
        let mut resampled: Vec<SectorId> = Vec::new();

        let mut idx = 0;
        while idx < queue.len() {
            match queue[idx] {
                Dependent::Point(p) => {
                    self.refresh_point(p)?;
                    if let Some(more) = self.children.get(p) {
                        queue.extend(more.iter().copied());
                    }
                }
                Dependent::Sector(s) => {
                    if !resampled.contains(&s) {
                        resampled.push(s);
                        self.recompute_sector(s)?;
                    }
                }
            }
            idx += 1;
        }

        log::debug!(
            "moved point {origin:?}: {} dependents notified, {} sectors resampled",
            queue.len(),
            resampled.len()
        );
        Ok(())
    }

    // --- Sector operations ---

    pub(crate) fn insert_sector(&mut self, data: SectorData) -> SectorId {
        self.sectors.insert(data)
    }

    /// Returns a reference to the sector data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn sector(&self, id: SectorId) -> Result<&SectorData> {
        self.sectors
            .get(id)
            .ok_or_else(|| BoardError::EntityNotFound("sector").into())
    }

    pub(crate) fn sector_mut(&mut self, id: SectorId) -> Result<&mut SectorData> {
        self.sectors
            .get_mut(id)
            .ok_or_else(|| BoardError::EntityNotFound("sector").into())
    }

    /// Enumerates all sector-like elements on the board.
    pub fn sectors(&self) -> impl Iterator<Item = (SectorId, &SectorData)> {
        self.sectors.iter()
    }

    /// Forces one recomputation of a sector's sampled boundary path.
    ///
    /// # Errors
    ///
    /// Returns an error if the sector or one of its points is missing.
    pub fn recompute_sector(&mut self, id: SectorId) -> Result<()> {
        let Self {
            points, sectors, ..
        } = self;
        sectors
            .get_mut(id)
            .ok_or(BoardError::EntityNotFound("sector"))?
            .resample(points)
    }

    /// The sector's sampled boundary path.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn sector_path(&self, id: SectorId) -> Result<&CurvePath> {
        Ok(self.sector(id)?.path())
    }

    /// The sector's current radius.
    ///
    /// # Errors
    ///
    /// Returns an error if the sector or one of its points is missing.
    pub fn sector_radius(&self, id: SectorId) -> Result<f64> {
        self.sector(id)?.radius(&self.points)
    }

    /// The sector's current arc span in radians.
    ///
    /// # Errors
    ///
    /// Returns an error if the sector or one of its points is missing.
    pub fn sector_arc_angle(&self, id: SectorId) -> Result<f64> {
        self.sector(id)?.arc_angle(&self.points)
    }

    /// Hit test against a screen position.
    ///
    /// # Errors
    ///
    /// Returns an error if the sector or one of its points is missing.
    pub fn sector_contains_point(&self, id: SectorId, x: f64, y: f64) -> Result<bool> {
        self.sector(id)?
            .contains_point(&self.points, &self.view, x, y)
    }

    /// The sector's text anchor (its center).
    ///
    /// # Errors
    ///
    /// Returns an error if the sector or its center point is missing.
    pub fn sector_text_anchor(&self, id: SectorId) -> Result<Point2> {
        self.sector(id)?.text_anchor(&self.points)
    }

    /// The sector's label anchor. Resets the label's relative offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the sector or one of its points is missing.
    pub fn sector_label_anchor(&mut self, id: SectorId) -> Result<Point2> {
        let Self {
            points,
            sectors,
            view,
            ..
        } = self;
        sectors
            .get_mut(id)
            .ok_or(BoardError::EntityNotFound("sector"))?
            .label_anchor(points, view)
    }

    /// Removes a sector-like element, detaching it from every dependent
    /// list. The hidden auxiliary point owned by an angle element is
    /// released and deregistered with it.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found in the store.
    pub fn remove_sector(&mut self, id: SectorId) -> Result<()> {
        let data = self
            .sectors
            .remove(id)
            .ok_or(BoardError::EntityNotFound("sector"))?;

        for (_, deps) in &mut self.children {
            deps.retain(|d| *d != Dependent::Sector(id));
        }

        if let Some(aux) = data.aux_point() {
            self.points.remove(aux);
            self.children.remove(aux);
            for (_, deps) in &mut self.children {
                deps.retain(|d| *d != Dependent::Point(aux));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn moving_a_parent_refreshes_derived_points() {
        let _ = env_logger::builder().is_test(true).try_init();

        let mut board = Board::new();
        let a = board.add_point(0.0, 0.0);
        let b = board.add_point(4.0, 0.0);
        let c = board.add_point(0.0, 2.0);
        let mp = board
            .add_derived_point(PointRule::Circumcenter { a, b, c }, None)
            .unwrap();

        let before = board.point_coords(mp).unwrap();
        assert!((before.x - 2.0).abs() < TOL);
        assert!((before.y - 1.0).abs() < TOL);

        board.move_point(b, 6.0, 0.0).unwrap();
        let after = board.point_coords(mp).unwrap();
        assert!((after.x - 3.0).abs() < TOL, "x={}", after.x);
        assert!((after.y - 1.0).abs() < TOL, "y={}", after.y);
    }

    #[test]
    fn derived_points_cannot_be_moved_directly() {
        let mut board = Board::new();
        let a = board.add_point(0.0, 0.0);
        let b = board.add_point(4.0, 0.0);
        let c = board.add_point(0.0, 2.0);
        let mp = board
            .add_derived_point(PointRule::Circumcenter { a, b, c }, None)
            .unwrap();

        let err = board.move_point(mp, 1.0, 1.0);
        assert!(err.is_err());
    }

    #[test]
    fn cyclic_registration_is_rejected() {
        let mut board = Board::new();
        let p = board.add_point(0.0, 0.0);
        let q = board.add_point(1.0, 0.0);
        let d = board
            .add_derived_point(
                PointRule::RadialOffset {
                    vertex: p,
                    toward: q,
                    radius: 1.0,
                    legacy_arm_offset: false,
                },
                None,
            )
            .unwrap();

        // d already depends on p; registering p under d closes a cycle.
        let err = board.add_child(d, Dependent::Point(p));
        assert!(err.is_err());
        // Self-dependency is a cycle of length one.
        let err = board.add_child(p, Dependent::Point(p));
        assert!(err.is_err());
    }

    #[test]
    fn derived_point_is_hidden_and_unlabeled() {
        let mut board = Board::new();
        let p = board.add_point(0.0, 0.0);
        let q = board.add_point(3.0, 4.0);
        let d = board
            .add_derived_point(
                PointRule::RadialOffset {
                    vertex: p,
                    toward: q,
                    radius: 2.0,
                    legacy_arm_offset: false,
                },
                Some("helper".to_owned()),
            )
            .unwrap();

        let data = board.point(d).unwrap();
        assert!(!data.visible);
        assert!(!data.with_label);
        assert_eq!(data.id.as_deref(), Some("helper"));

        let coords = data.coords();
        assert!((coords.x - 1.2).abs() < TOL);
        assert!((coords.y - 1.6).abs() < TOL);
    }

    #[test]
    fn missing_entities_are_reported() {
        let mut board = Board::new();
        let p = board.add_point(0.0, 0.0);
        let q = board.add_point(1.0, 1.0);
        assert!((board.dist(p, q).unwrap() - 2.0_f64.sqrt()).abs() < TOL);

        assert!(board.point(PointId::default()).is_err());
        assert!(board.sector(crate::elements::sector::SectorId::default()).is_err());
    }
}
