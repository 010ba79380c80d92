//--------------------------------------------------------------------
// mask.rs
//--------------------------------------------------------------------
// Provides the RegionMask, the even-odd compound path made of the base
// rectangle followed by the outline of every subtracted hole
//--------------------------------------------------------------------

use std::borrow::Borrow;
use std::ops::Range;
use std::rc::Rc;

use crate::error::MaskError;
use crate::geometry::*;
use crate::path::{PlanarPath, PathCommand, FillRule};
use crate::render::MaskSnapshot;

#[derive(Debug, Default)]
pub struct RegionMask {
    bounds: Option<Rect>,
    // Swapped for a new Rc on every change; snapshots keep the old one alive
    path: Rc<PlanarPath>,
    // Command ranges of every hole outline, in subtraction order
    outlines: Vec<Range<usize>>,
    revision: u64
}

impl RegionMask {
    /// A mask that paints the whole rectangle.
    pub fn initialize(bounds: Rect) -> RegionMask {
        RegionMask { bounds: Some(bounds), path: Rc::new(PlanarPath::rect(bounds)), outlines: Vec::new(), revision: 1 }
    }

    pub fn is_initialized(&self) -> bool { self.bounds.is_some() }
    pub fn bounds(&self) -> Option<Rect> { self.bounds }
    pub fn fill_rule(&self) -> FillRule { FillRule::EvenOdd }
    pub fn revision(&self) -> u64 { self.revision }
    pub fn hole_count(&self) -> usize { self.outlines.len() }

    pub fn compound_path(&self) -> Option<Rc<PlanarPath>> {
        self.bounds.map(|_| self.path.clone())
    }

    pub fn base_outline(&self) -> &[PathCommand] {
        let end = self.outlines.first().map_or(self.path.len(), |r| r.start);
        &self.path.commands()[..end]
    }

    pub fn hole_outlines(&self) -> impl Iterator<Item = &[PathCommand]> + '_ {
        self.outlines.iter().map(move |r| &self.path.commands()[r.clone()])
    }

    pub fn extend(&mut self, path: &PlanarPath) -> Result<(), MaskError> {
        self.extend_all(std::iter::once(path)).map(|_| ())
    }

    /// Appends every path after the existing outlines and returns how many were added.
    /// The new compound path is built aside and swapped in at the end, so a
    /// snapshot taken before never sees a partial update.
    pub fn extend_all<I>(&mut self, paths: I) -> Result<usize, MaskError>
        where I: IntoIterator, I::Item: Borrow<PlanarPath> {
        if self.bounds.is_none() {
            tracing::error!("attempted to extend a region mask before it was initialized");
            return Err(MaskError::NotInitialized);
        }

        let mut compound = PlanarPath::clone(&self.path);
        let mut outlines = Vec::new();
        for path in paths {
            let start = compound.len();
            compound.append(path.borrow());
            outlines.push(start..compound.len());
        }

        if outlines.is_empty() { return Ok(0); }

        let added = outlines.len();
        self.path = Rc::new(compound);
        self.outlines.extend(outlines);
        self.revision += 1;

        tracing::debug!(added, holes = self.outlines.len(), revision = self.revision, "extended region mask");
        Ok(added)
    }

    pub fn snapshot(&self) -> Option<MaskSnapshot> {
        self.bounds.map(|bounds| MaskSnapshot {
            path: self.path.clone(),
            fill_rule: self.fill_rule(),
            bounds,
            revision: self.revision,
            hole_count: self.outlines.len()
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn v(x: Coord, y: Coord) -> Vec2 { Vec2::new(x, y) }

    #[test]
    fn test_initial_mask_paints_rectangle() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mask = RegionMask::initialize(r);
        let snapshot = mask.snapshot().expect("Initialized mask should have a snapshot");

        assert_eq!(snapshot.fill_rule, FillRule::EvenOdd);
        assert_eq!(snapshot.hole_count, 0);
        assert_eq!(mask.base_outline(), PlanarPath::rect(r).commands());
        assert!(snapshot.paints(v(50.0, 50.0)));
        assert!(!snapshot.paints(v(150.0, 50.0)));
    }

    #[test]
    fn test_uninitialized_mask_rejects_extension() {
        let mut mask = RegionMask::default();
        let circle = PlanarPath::circle(v(0.0, 0.0), 1.0);

        assert_eq!(mask.extend(&circle), Err(MaskError::NotInitialized));
        assert!(mask.snapshot().is_none());
        assert!(mask.compound_path().is_none());
        assert_eq!(mask.hole_count(), 0);
    }

    #[test]
    fn test_extension_keeps_base_and_order() {
        let r = Rect::new(0.0, 0.0, 100.0, 100.0);
        let mut mask = RegionMask::initialize(r);
        let a = PlanarPath::circle(v(20.0, 20.0), 5.0);
        let b = PlanarPath::rect(Rect::new(60.0, 60.0, 10.0, 10.0));

        mask.extend(&a).expect("Mask is initialized");
        assert_eq!(mask.extend_all(vec![b.clone(), a.clone()]), Ok(2));

        assert_eq!(mask.base_outline(), PlanarPath::rect(r).commands());
        let outlines: Vec<_> = mask.hole_outlines().collect();
        assert_eq!(outlines, vec![a.commands(), b.commands(), a.commands()]);
        assert_eq!(mask.revision(), 3);
    }

    #[test]
    fn test_holes_are_cut_out_by_even_odd() {
        let mut mask = RegionMask::initialize(Rect::new(0.0, 0.0, 100.0, 100.0));
        mask.extend(&PlanarPath::circle(v(50.0, 50.0), 10.0)).expect("Mask is initialized");

        let snapshot = mask.snapshot().expect("Initialized mask should have a snapshot");
        assert!(!snapshot.paints(v(50.0, 50.0)), "The hole should not be painted");
        assert!(snapshot.paints(v(10.0, 10.0)));
    }

    #[test]
    fn test_overlapping_holes_repaint_the_overlap() {
        let mut mask = RegionMask::initialize(Rect::new(0.0, 0.0, 100.0, 100.0));
        mask.extend(&PlanarPath::rect(Rect::new(20.0, 20.0, 40.0, 40.0))).expect("Mask is initialized");
        mask.extend(&PlanarPath::rect(Rect::new(40.0, 40.0, 40.0, 40.0))).expect("Mask is initialized");

        let snapshot = mask.snapshot().expect("Initialized mask should have a snapshot");
        assert!(!snapshot.paints(v(30.0, 30.0)));
        assert!(!snapshot.paints(v(70.0, 70.0)));
        assert!(snapshot.paints(v(50.0, 50.0)), "Even-odd paints the overlap of two holes again");
    }

    #[test]
    fn test_empty_extension_is_a_no_op() {
        let mut mask = RegionMask::initialize(Rect::new(0.0, 0.0, 10.0, 10.0));
        let before = mask.compound_path().expect("Mask is initialized");

        assert_eq!(mask.extend_all(Vec::<PlanarPath>::new()), Ok(0));
        assert_eq!(mask.revision(), 1);
        assert!(Rc::ptr_eq(&before, &mask.compound_path().expect("Mask is initialized")));
    }

    #[test]
    fn test_snapshots_are_immutable() {
        let mut mask = RegionMask::initialize(Rect::new(0.0, 0.0, 10.0, 10.0));
        let old = mask.snapshot().expect("Mask is initialized");
        mask.extend(&PlanarPath::circle(v(5.0, 5.0), 1.0)).expect("Mask is initialized");

        assert_eq!(old.path.subpath_count(), 1, "An older snapshot must keep its own path");
        assert_eq!(mask.snapshot().map(|s| s.path.subpath_count()), Some(2));
    }
}
