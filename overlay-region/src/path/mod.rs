//------------------------------------------------------------------------------
// mod.rs
//------------------------------------------------------------------------------
// Provides the PlanarPath data structure, which is a container for
// PathCommands organized in sub-paths
//------------------------------------------------------------------------------

mod path_enums;
mod builders;
mod containment;

pub use path_enums::*;

use std::fmt::*;

use crate::geometry::*;
use crate::Curve;

// The PathCommand enum
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadraticBezierTo(Vec2, Vec2),
    CubicBezierTo(Vec2, Vec2, Vec2),
    EllipticArcTo(Vec2, Coord, bool, bool, Vec2),
    ClosePath
}

// Displayed as SVG path data, angles in degrees
impl Display for PathCommand {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            PathCommand::MoveTo(t) => write!(f, "M{},{}", t.x, t.y),
            PathCommand::LineTo(t) => write!(f, "L{},{}", t.x, t.y),
            PathCommand::QuadraticBezierTo(c, t) => write!(f, "Q{},{} {},{}", c.x, c.y, t.x, t.y),
            PathCommand::CubicBezierTo(c1, c2, t) =>
                write!(f, "C{},{} {},{} {},{}", c1.x, c1.y, c2.x, c2.y, t.x, t.y),
            PathCommand::EllipticArcTo(radii, angle, large_arc, sweep, t)
                => write!(f, "A{},{} {} {} {} {},{}", radii.x, radii.y, angle.to_degrees(),
                    *large_arc as u8, *sweep as u8, t.x, t.y),
            PathCommand::ClosePath => write!(f, "Z"),
        }
    }
}

// An ordered sequence of sub-paths. Every sub-path starts with a MoveTo; paths
// are combined by plain concatenation, so the fill rule decides what overlaps mean
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlanarPath {
    commands: Vec<PathCommand>
}

impl PlanarPath {
    pub fn new() -> PlanarPath { PlanarPath { commands: Vec::new() } }

    pub fn commands(&self) -> &[PathCommand] { &self.commands }
    pub fn len(&self) -> usize { self.commands.len() }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    pub fn subpath_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCommand::MoveTo(_))).count()
    }

    pub fn push(&mut self, cmd: PathCommand) -> &mut PlanarPath {
        self.commands.push(cmd);
        self
    }

    pub fn move_to(&mut self, target: Vec2) -> &mut PlanarPath { self.push(PathCommand::MoveTo(target)) }
    pub fn line_to(&mut self, target: Vec2) -> &mut PlanarPath { self.push(PathCommand::LineTo(target)) }
    pub fn quadratic_to(&mut self, ctl: Vec2, target: Vec2) -> &mut PlanarPath {
        self.push(PathCommand::QuadraticBezierTo(ctl, target))
    }
    pub fn cubic_to(&mut self, ctl1: Vec2, ctl2: Vec2, target: Vec2) -> &mut PlanarPath {
        self.push(PathCommand::CubicBezierTo(ctl1, ctl2, target))
    }
    pub fn arc_to(&mut self, radii: Vec2, angle: Coord, large_arc: bool, sweep: bool, target: Vec2) -> &mut PlanarPath {
        self.push(PathCommand::EllipticArcTo(radii, angle, large_arc, sweep, target))
    }
    pub fn close(&mut self) -> &mut PlanarPath { self.push(PathCommand::ClosePath) }

    // Appends every sub-path of other verbatim, after the existing ones
    pub fn append(&mut self, other: &PlanarPath) {
        self.commands.extend_from_slice(&other.commands);
    }

    pub fn curves(&self) -> PathToCurvesIterator<'_> { path_to_curves(&self.commands) }

    pub fn bounds(&self) -> Option<Rect> {
        let boxes: Vec<_> = self.curves().flat_map(|comp| comp.curves).map(|c| c.bbox()).collect();
        Rect::enclosing_rect(boxes.iter().flat_map(|b| vec![b.min(), b.max()]))
    }
}

impl From<Vec<PathCommand>> for PlanarPath {
    fn from(commands: Vec<PathCommand>) -> PlanarPath { PlanarPath { commands } }
}

impl Display for PlanarPath {
    fn fmt(&self, f: &mut Formatter) -> Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 { write!(f, " ")?; }
            write!(f, "{}", cmd)?;
        }
        Ok(())
    }
}

// Split a path into curves and their components
pub struct CurveComp {
    pub curves: Vec<Curve>,
    pub closed: bool
}

impl CurveComp {
    // The curves of the component, plus the implicit closing line fills assume for open ones
    pub fn closed_curves(&self) -> impl Iterator<Item = Curve> + '_ {
        let closing = if self.closed || self.curves.is_empty() { None } else {
            let first = self.curves[0].at(0.0);
            let last = self.curves[self.curves.len()-1].at(1.0);
            if first.roughly_equals(last) { None } else { Some(Curve::line(last, first)) }
        };

        self.curves.iter().cloned().chain(closing)
    }
}

pub fn path_to_curves(path: &[PathCommand]) -> PathToCurvesIterator<'_> {
    PathToCurvesIterator { first_vec: Vec2::zero(), prev_vec: Vec2::zero(), path: path.iter() }
}

pub struct PathToCurvesIterator<'a> {
    first_vec: Vec2, prev_vec: Vec2,
    path: std::slice::Iter<'a, PathCommand>
}

impl<'a> Iterator for PathToCurvesIterator<'a> {
    type Item = CurveComp;

    fn next(&mut self) -> Option<Self::Item> {
        let mut curves = Vec::new();

        while let Some(cmd) = self.path.next() {
            match cmd {
                PathCommand::MoveTo(target) => {
                    let was_open = !curves.is_empty();
                    self.first_vec = *target;
                    self.prev_vec = *target;

                    if was_open {
                        return Some(CurveComp { curves, closed: false });
                    }
                }
                PathCommand::LineTo(target) => {
                    curves.push(Curve::line(self.prev_vec, *target));
                    self.prev_vec = *target;
                }
                PathCommand::QuadraticBezierTo(ctl, target) => {
                    curves.push(Curve::quadratic_bezier(self.prev_vec, *ctl, *target));
                    self.prev_vec = *target;
                }
                PathCommand::CubicBezierTo(ctl1, ctl2, target) => {
                    curves.push(Curve::cubic_bezier(self.prev_vec, *ctl1, *ctl2, *target));
                    self.prev_vec = *target;
                }
                PathCommand::EllipticArcTo(radii, angle, large_arc, sweep, target) => {
                    curves.push(Curve::elliptic_arc(self.prev_vec, *radii,
                        *angle, *large_arc, *sweep, *target));
                    self.prev_vec = *target;
                }
                PathCommand::ClosePath => {
                    if self.prev_vec != self.first_vec {
                        curves.push(Curve::line(self.prev_vec, self.first_vec));
                    }

                    self.prev_vec = self.first_vec;
                    if !curves.is_empty() {
                        return Some(CurveComp { curves, closed: true });
                    }
                }
            }
        }

        if !curves.is_empty() { Some(CurveComp { curves, closed: false }) }
        else { None }
    }
}
