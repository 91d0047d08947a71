//! Point entities: free points and rule-derived helper points.

use slotmap::SlotMap;

use crate::error::{BoardError, Result};
use crate::math::circumcircle_2d::circumcenter;
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a point on a board.
    pub struct PointId;
}

/// How a point's coordinates are determined.
///
/// Derived rules are pure functions of their parent points, re-evaluated
/// whenever a parent moves; the entity itself only caches the result.
#[derive(Debug, Clone)]
pub enum PointRule {
    /// Coordinates are owned and set directly via [`crate::board::Board::move_point`].
    Free,

    /// Circumcenter of the triangle spanned by three parent points.
    Circumcenter { a: PointId, b: PointId, c: PointId },

    /// Point at fixed distance `radius` from `vertex` along the direction
    /// toward `toward`: `P = V + (T - V) * radius / dist(V, T)`.
    ///
    /// With `legacy_arm_offset` set, the y component reproduces a
    /// historical defect that scaled the offset by `T.y - V.x` (the arm's
    /// y mixed with the vertex's x). Off by default.
    RadialOffset {
        vertex: PointId,
        toward: PointId,
        radius: f64,
        legacy_arm_offset: bool,
    },
}

impl PointRule {
    /// The parent points this rule reads, in registration order.
    #[must_use]
    pub fn parents(&self) -> Vec<PointId> {
        match self {
            Self::Free => Vec::new(),
            Self::Circumcenter { a, b, c } => vec![*a, *b, *c],
            Self::RadialOffset { vertex, toward, .. } => vec![*vertex, *toward],
        }
    }

    /// Evaluates the rule against the current point store.
    ///
    /// Returns `None` for free points (their coordinates are owned, not
    /// derived). Degenerate parent configurations yield non-finite
    /// coordinates rather than an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a parent point is missing from the store.
    pub fn eval(&self, points: &SlotMap<PointId, PointData>) -> Result<Option<Point2>> {
        let coords = |id: PointId| -> Result<Point2> {
            points
                .get(id)
                .map(PointData::coords)
                .ok_or_else(|| BoardError::EntityNotFound("point").into())
        };

        match self {
            Self::Free => Ok(None),
            Self::Circumcenter { a, b, c } => {
                Ok(Some(circumcenter(coords(*a)?, coords(*b)?, coords(*c)?)))
            }
            Self::RadialOffset {
                vertex,
                toward,
                radius,
                legacy_arm_offset,
            } => {
                let v = coords(*vertex)?;
                let t = coords(*toward)?;
                let d = nalgebra::distance(&v, &t);

                let x = v.x + (t.x - v.x) * radius / d;
                let y = if *legacy_arm_offset {
                    v.y + (t.y - v.x) * radius / d
                } else {
                    v.y + (t.y - v.y) * radius / d
                };
                Ok(Some(Point2::new(x, y)))
            }
        }
    }
}

/// Data associated with a point on a board.
#[derive(Debug, Clone)]
pub struct PointData {
    pub(crate) coords: Point2,
    pub(crate) rule: PointRule,
    /// Optional stable identifier (assigned by callers, not the board).
    pub id: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Hidden helper points are created with `visible = false`.
    pub visible: bool,
    /// Whether a label is drawn next to the point.
    pub with_label: bool,
}

impl PointData {
    /// Creates a free point at the given coordinates.
    #[must_use]
    pub fn free(x: f64, y: f64) -> Self {
        Self {
            coords: Point2::new(x, y),
            rule: PointRule::Free,
            id: None,
            name: None,
            visible: true,
            with_label: true,
        }
    }

    /// Creates a hidden, unlabeled derived point. Its coordinates are
    /// evaluated from the rule once it is inserted into a board.
    #[must_use]
    pub fn derived(rule: PointRule) -> Self {
        Self {
            coords: Point2::origin(),
            rule,
            id: None,
            name: None,
            visible: false,
            with_label: false,
        }
    }

    /// Current user-space coordinates.
    #[must_use]
    pub fn coords(&self) -> Point2 {
        self.coords
    }

    /// X coordinate in user space.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.coords.x
    }

    /// Y coordinate in user space.
    #[must_use]
    pub fn y(&self) -> f64 {
        self.coords.y
    }

    /// Whether this point is free (directly movable).
    #[must_use]
    pub fn is_free(&self) -> bool {
        matches!(self.rule, PointRule::Free)
    }

    /// The rule determining this point's coordinates.
    #[must_use]
    pub fn rule(&self) -> &PointRule {
        &self.rule
    }
}
