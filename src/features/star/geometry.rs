//! Rounded five-pointed star outline
//!
//! Builds the closed outline of a five-pointed star whose tips (outer vertices)
//! and notches (inner vertices) are rounded independently.
//!
//! # Coordinate system
//!
//! Vertices are placed on two concentric circles in a math coordinate system
//! centred on the star's bounding square, then moved into the square's local
//! space: origin at the top-left corner, y growing downward.
//!
//! # Rounding
//!
//! Every corner is replaced by a straight run up to a padding point on the
//! incoming edge, followed by a quadratic curve whose control point is the
//! true vertex and whose end point is the padding point on the outgoing edge.
//! A corner radius of zero makes both padding points coincide with the vertex,
//! which yields the classic sharp star. Padding is limited to half of each
//! edge, so every emitted point lies on the star polygon or at a vertex.

use iced::{Point, Rectangle, Size, Vector};

/// Inner/outer radius ratio of a regular five-pointed star (`sin 18° / sin 54°`)
pub const REGULAR_RADIUS_SCALE: f32 = 0.381_966_02;

/// Angles (degrees) of the outer vertices A, B, C, D, E
const OUTER_ANGLES: [f32; 5] = [90.0, 18.0, -54.0, -126.0, -198.0];

/// Angles (degrees) of the inner vertices aa, bb, cc, dd, ee
const INNER_ANGLES: [f32; 5] = [-90.0, 198.0, 126.0, 54.0, -18.0];

/// Inner vertex visited after each outer vertex when walking the outline.
///
/// The walk is A → dd → B → ee → C → aa → D → bb → E → cc → A.
const INNER_AFTER_OUTER: [usize; 5] = [3, 4, 0, 1, 2];

/// Input of the star outline generator
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarGeometry {
    /// Side length of the bounding square
    pub size: f32,
    /// Ratio between the inner and the outer vertex radius (0.0 - 1.0)
    pub radius_scale: f32,
    /// Rounding distance applied at the five tips
    pub outer_corner_radius: f32,
    /// Rounding distance applied at the five notches
    pub inner_corner_radius: f32,
}

impl Default for StarGeometry {
    fn default() -> Self {
        Self {
            size: 150.0,
            radius_scale: REGULAR_RADIUS_SCALE,
            outer_corner_radius: 0.0,
            inner_corner_radius: 0.0,
        }
    }
}

impl StarGeometry {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn radius_scale(mut self, scale: f32) -> Self {
        self.radius_scale = scale;
        self
    }

    pub fn outer_corner_radius(mut self, radius: f32) -> Self {
        self.outer_corner_radius = radius;
        self
    }

    pub fn inner_corner_radius(mut self, radius: f32) -> Self {
        self.inner_corner_radius = radius;
        self
    }

    /// Copy with every field forced into its valid range.
    ///
    /// `size` must be finite and non-negative, `radius_scale` lies in `[0, 1]`
    /// and both corner radii lie in `[0, size / 2]`. NaN maps to the lower bound.
    pub fn sanitized(&self) -> Self {
        let size = if self.size.is_finite() {
            self.size.max(0.0)
        } else {
            0.0
        };
        let half = size / 2.0;

        Self {
            size,
            radius_scale: clamp_or_min(self.radius_scale, 0.0, 1.0),
            outer_corner_radius: clamp_or_min(self.outer_corner_radius, 0.0, half),
            inner_corner_radius: clamp_or_min(self.inner_corner_radius, 0.0, half),
        }
    }

    /// Build a fresh outline for the current configuration
    pub fn rebuild(&self) -> StarOutline {
        StarOutline::build(self)
    }
}

/// A single drawing command of an outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    QuadTo { control: Point, to: Point },
    Close,
}

/// Closed outline of a rounded five-pointed star
#[derive(Debug, Clone, PartialEq)]
pub struct StarOutline {
    size: f32,
    outer: [Point; 5],
    inner: [Point; 5],
    commands: Vec<PathCommand>,
}

impl StarOutline {
    /// Generate the outline for `geometry`.
    ///
    /// Out of range values are clamped, never rejected.
    pub fn build(geometry: &StarGeometry) -> Self {
        let geometry = geometry.sanitized();
        let outer_radius = geometry.size / 2.0;
        let inner_radius = geometry.radius_scale * outer_radius;
        let center = Point::new(outer_radius, outer_radius);

        let outer = OUTER_ANGLES.map(|angle| polar(center, outer_radius, angle));
        let inner = INNER_ANGLES.map(|angle| polar(center, inner_radius, angle));

        // Vertices in walking order, each paired with its corner radius
        let mut ring = [(Point::ORIGIN, 0.0); 10];
        for (index, vertex) in outer.iter().enumerate() {
            ring[index * 2] = (*vertex, geometry.outer_corner_radius);
            ring[index * 2 + 1] = (
                inner[INNER_AFTER_OUTER[index]],
                geometry.inner_corner_radius,
            );
        }

        let mut commands = Vec::with_capacity(ring.len() * 2 + 2);
        let (last, last_radius) = ring[ring.len() - 1];
        commands.push(PathCommand::MoveTo(point_toward(last, ring[0].0, last_radius)));

        for (index, &(vertex, radius)) in ring.iter().enumerate() {
            let previous = ring[(index + ring.len() - 1) % ring.len()].0;
            let next = ring[(index + 1) % ring.len()].0;

            commands.push(PathCommand::LineTo(point_toward(vertex, previous, radius)));
            commands.push(PathCommand::QuadTo {
                control: vertex,
                to: point_toward(vertex, next, radius),
            });
        }
        commands.push(PathCommand::Close);

        Self {
            size: geometry.size,
            outer,
            inner,
            commands,
        }
    }

    /// Side length of the bounding square this outline was built for
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// True tips A, B, C, D, E (top first, clockwise on screen)
    pub fn outer_vertices(&self) -> &[Point; 5] {
        &self.outer
    }

    /// True notches aa, bb, cc, dd, ee
    pub fn inner_vertices(&self) -> &[Point; 5] {
        &self.inner
    }

    /// Every point referenced by the commands, control points included
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.commands.iter().flat_map(|command| {
            let (first, second) = match *command {
                PathCommand::MoveTo(point) | PathCommand::LineTo(point) => (Some(point), None),
                PathCommand::QuadTo { control, to } => (Some(control), Some(to)),
                PathCommand::Close => (None, None),
            };
            first.into_iter().chain(second)
        })
    }

    /// Axis-aligned bounding box of all emitted points
    pub fn bounds(&self) -> Rectangle {
        let mut points = self.points();
        let Some(first) = points.next() else {
            return Rectangle::new(Point::ORIGIN, Size::ZERO);
        };

        let (min, max) = points.fold((first, first), |(min, max), point| {
            (
                Point::new(min.x.min(point.x), min.y.min(point.y)),
                Point::new(max.x.max(point.x), max.y.max(point.y)),
            )
        });

        Rectangle::new(min, Size::new(max.x - min.x, max.y - min.y))
    }

    /// Region of the bounding square painted with the active color.
    ///
    /// The region is anchored at the left edge and spans `fill_level` of the
    /// width, so clipping the outline to it renders a partially filled star.
    pub fn fill_clip(&self, fill_level: f32) -> Rectangle {
        let level = clamp_or_min(fill_level, 0.0, 1.0);
        Rectangle::new(Point::ORIGIN, Size::new(self.size * level, self.size))
    }

    /// Copy of this outline shifted by `offset`
    pub fn translate(&self, offset: Vector) -> Self {
        let shift = |point: Point| point + offset;

        Self {
            size: self.size,
            outer: self.outer.map(shift),
            inner: self.inner.map(shift),
            commands: self
                .commands
                .iter()
                .map(|command| match *command {
                    PathCommand::MoveTo(point) => PathCommand::MoveTo(shift(point)),
                    PathCommand::LineTo(point) => PathCommand::LineTo(shift(point)),
                    PathCommand::QuadTo { control, to } => PathCommand::QuadTo {
                        control: shift(control),
                        to: shift(to),
                    },
                    PathCommand::Close => PathCommand::Close,
                })
                .collect(),
        }
    }
}

/// Point on the circle of `radius` around `center` at `degrees`, y flipped
fn polar(center: Point, radius: f32, degrees: f32) -> Point {
    let radians = degrees.to_radians();
    Point::new(
        center.x + radians.cos() * radius,
        center.y - radians.sin() * radius,
    )
}

/// Point at `distance` from `from` along the segment towards `to`.
///
/// The distance never exceeds half the segment, so the rounding points of the
/// two corners sharing an edge cannot cross its midpoint.
fn point_toward(from: Point, to: Point, distance: f32) -> Point {
    let delta = to - from;
    let length = delta.x.hypot(delta.y);
    if length <= f32::EPSILON {
        return from;
    }
    from + delta * (distance.min(length / 2.0) / length)
}

/// Clamp that maps NaN to `min` instead of propagating it
pub(crate) fn clamp_or_min(value: f32, min: f32, max: f32) -> f32 {
    if value.is_nan() {
        min
    } else {
        value.clamp(min, max)
    }
}
