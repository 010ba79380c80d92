//--------------------------------------------------------------------
// overlay.rs
//--------------------------------------------------------------------
// Provides the OverlayRegion: a rectangle with holes cut out of it,
// keeping the rendered mask and the hit-test list in step
//--------------------------------------------------------------------

use std::fmt;

use crate::error::{ConstructionError, MaskError};
use crate::geometry::*;
use crate::hole::HoleRef;
use crate::mask::RegionMask;
use crate::render::{MaskRenderer, MaskSnapshot, OverlayStyle};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayState {
    // No holes yet, every point is intercepted
    Plain,
    Holed
}

/// A translucent rectangle with holes that let input through.
///
/// The holes live in two places: the hit-test list, queried on every pointer
/// event, and the compound path of the mask the renderer fills. Both are only
/// ever appended to, together, in the same order.
pub struct OverlayRegion {
    bounds: Rect,
    holes: Vec<HoleRef>,
    mask: RegionMask,
    style: OverlayStyle,
    renderer: Option<Box<dyn MaskRenderer>>
}

impl OverlayRegion {
    /// An overlay without holes.
    pub fn plain(bounds: Rect) -> OverlayRegion {
        OverlayRegion {
            bounds,
            holes: Vec::new(),
            mask: RegionMask::initialize(bounds),
            style: OverlayStyle::default(),
            renderer: None
        }
    }

    /// An overlay with the given holes already subtracted. `None` and an empty
    /// list both give a plain overlay.
    pub fn new(bounds: Rect, initial_holes: Option<Vec<HoleRef>>) -> Result<OverlayRegion, ConstructionError> {
        let mut overlay = OverlayRegion::plain(bounds);
        if let Some(holes) = initial_holes {
            overlay.subtract(holes)?;
        }

        tracing::debug!(%bounds, holes = overlay.holes.len(), "created overlay region");
        Ok(overlay)
    }

    /// Rebuilding an overlay from persisted UI state. Always fails: there is no
    /// archived form of the mask to restore from.
    pub fn restore(archive: &[u8]) -> Result<OverlayRegion, ConstructionError> {
        tracing::error!(bytes = archive.len(), "refusing to restore an overlay from persisted state");
        Err(ConstructionError::UnsupportedRestore)
    }

    pub fn bounds(&self) -> Rect { self.bounds }
    pub fn holes(&self) -> &[HoleRef] { &self.holes }
    pub fn mask(&self) -> &RegionMask { &self.mask }
    pub fn style(&self) -> &OverlayStyle { &self.style }

    pub fn state(&self) -> OverlayState {
        if self.holes.is_empty() { OverlayState::Plain } else { OverlayState::Holed }
    }

    pub fn snapshot(&self) -> Result<MaskSnapshot, MaskError> {
        self.mask.snapshot().ok_or(MaskError::NotInitialized)
    }

    /// Cuts every shape out of the overlay, in order. The whole batch is applied
    /// or, on error, nothing is: the mask is extended first, and the hole list
    /// only once that succeeded.
    pub fn subtract<I>(&mut self, shapes: I) -> Result<(), MaskError>
        where I: IntoIterator<Item = HoleRef> {
        let shapes: Vec<HoleRef> = shapes.into_iter().collect();
        if shapes.is_empty() { return Ok(()); }

        let outlines: Vec<_> = shapes.iter().map(|s| s.path()).collect();
        self.mask.extend_all(&outlines)?;
        self.holes.extend(shapes);

        tracing::debug!(holes = self.holes.len(), revision = self.mask.revision(), "subtracted shapes from overlay");
        self.request_render();
        Ok(())
    }

    /// Whether the point falls in any hole, checking holes in subtraction order.
    pub fn contains_point_in_hole(&self, point: Point) -> bool {
        let hit = self.holes.iter().any(|h| h.contains(point));
        tracing::trace!(%point, hit, "overlay hole hit-test");
        hit
    }

    /// Whether a pointer event at this point is taken by the overlay rather than
    /// passed to the content beneath it.
    pub fn intercepts(&self, point: Point) -> bool {
        self.bounds.contains_point(point) && !self.contains_point_in_hole(point)
    }

    /// Hooks up the rendering backend, which immediately receives the current mask.
    pub fn attach_renderer(&mut self, renderer: Box<dyn MaskRenderer>) {
        self.renderer = Some(renderer);
        self.request_render();
    }

    pub fn detach_renderer(&mut self) -> Option<Box<dyn MaskRenderer>> { self.renderer.take() }

    pub fn set_style(&mut self, style: OverlayStyle) {
        self.style = style;
        self.request_render();
    }

    fn request_render(&mut self) {
        if let (Some(renderer), Some(snapshot)) = (self.renderer.as_mut(), self.mask.snapshot()) {
            renderer.render_mask(&snapshot, &self.style);
        }
    }
}

impl fmt::Debug for OverlayRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlayRegion")
            .field("bounds", &self.bounds)
            .field("holes", &self.holes)
            .field("mask", &self.mask)
            .field("style", &self.style)
            .field("renderer", &self.renderer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::hole::*;
    use crate::path::PlanarPath;

    fn v(x: Coord, y: Coord) -> Vec2 { Vec2::new(x, y) }
    fn square() -> Rect { Rect::new(0.0, 0.0, 100.0, 100.0) }
    fn circle(x: Coord, y: Coord, r: Coord) -> HoleRef { hole(CircularHole::new(v(x, y), r)) }

    // Asserts that the mask carries exactly the outlines of the hole list, in order
    fn assert_consistent(overlay: &OverlayRegion) {
        let outlines: Vec<_> = overlay.mask().hole_outlines().collect();
        assert_eq!(outlines.len(), overlay.holes().len(),
            "Mask has {} hole outlines but the overlay keeps {} holes", outlines.len(), overlay.holes().len());
        for (outline, h) in outlines.iter().zip(overlay.holes()) {
            assert_eq!(*outline, h.path().commands());
        }
    }

    #[derive(Default)]
    struct RecordingRenderer { revisions: Rc<RefCell<Vec<(u64, usize)>>> }

    impl MaskRenderer for RecordingRenderer {
        fn render_mask(&mut self, mask: &MaskSnapshot, _style: &OverlayStyle) {
            self.revisions.borrow_mut().push((mask.revision, mask.hole_count));
        }
    }

    #[test]
    fn test_scenario_two_circles() {
        let mut overlay = OverlayRegion::plain(square());
        assert!(!overlay.contains_point_in_hole(v(50.0, 50.0)));

        overlay.subtract(vec![circle(50.0, 50.0, 10.0)]).expect("Overlay mask is initialized");
        assert!(overlay.contains_point_in_hole(v(50.0, 50.0)));
        assert!(!overlay.contains_point_in_hole(v(0.0, 0.0)));

        overlay.subtract(vec![circle(90.0, 90.0, 5.0)]).expect("Overlay mask is initialized");
        assert!(overlay.contains_point_in_hole(v(50.0, 50.0)));
        assert!(overlay.contains_point_in_hole(v(90.0, 90.0)));
        assert!(!overlay.contains_point_in_hole(v(95.0, 5.0)));
        assert_consistent(&overlay);
    }

    #[test]
    fn test_plain_overlay_has_no_holes_anywhere() {
        let overlay = OverlayRegion::new(square(), None).expect("Construction cannot fail");
        assert_eq!(overlay.state(), OverlayState::Plain);
        for &(x, y) in &[(0.0, 0.0), (100.0, 0.0), (0.0, 100.0), (100.0, 100.0), (50.0, 0.0), (100.0, 50.0), (50.0, 50.0)] {
            assert!(!overlay.contains_point_in_hole(v(x, y)), "Plain overlay reported a hole at ({},{})", x, y);
            assert!(overlay.intercepts(v(x, y)));
        }
    }

    #[test]
    fn test_empty_initial_holes_is_plain() {
        let overlay = OverlayRegion::new(square(), Some(Vec::new())).expect("Construction cannot fail");
        assert_eq!(overlay.state(), OverlayState::Plain);
        assert_eq!(overlay.mask().revision(), 1);
    }

    #[test]
    fn test_initial_holes_are_subtracted() {
        let overlay = OverlayRegion::new(square(), Some(vec![circle(20.0, 20.0, 5.0), circle(70.0, 70.0, 5.0)]))
            .expect("Construction cannot fail");
        assert_eq!(overlay.state(), OverlayState::Holed);
        assert!(overlay.contains_point_in_hole(v(70.0, 70.0)));
        assert_consistent(&overlay);
    }

    #[test]
    fn test_empty_subtract_is_a_no_op() {
        let mut overlay = OverlayRegion::new(square(), Some(vec![circle(20.0, 20.0, 5.0)])).expect("Construction cannot fail");
        let before = overlay.mask().compound_path().expect("Overlay mask is initialized");
        let revision = overlay.mask().revision();

        overlay.subtract(Vec::new()).expect("Empty batches always succeed");

        assert_eq!(overlay.holes().len(), 1);
        assert_eq!(overlay.mask().revision(), revision);
        assert!(Rc::ptr_eq(&before, &overlay.mask().compound_path().expect("Overlay mask is initialized")));
        assert!(overlay.contains_point_in_hole(v(20.0, 20.0)));
        assert!(!overlay.contains_point_in_hole(v(50.0, 50.0)));
    }

    #[test]
    fn test_containment_is_monotonic() {
        let mut overlay = OverlayRegion::plain(square());
        let samples: Vec<_> = (0..=10).flat_map(|i| (0..=10).map(move |j| v(i as Coord * 10.0, j as Coord * 10.0))).collect();

        let batches = vec![
            vec![circle(30.0, 30.0, 15.0)],
            vec![hole(RectangularHole::new(Rect::new(50.0, 10.0, 30.0, 20.0)).with_corner_radius(4.0))],
            vec![circle(30.0, 30.0, 15.0), circle(80.0, 80.0, 12.0)],
        ];

        let mut previous: Vec<bool> = samples.iter().map(|&p| overlay.contains_point_in_hole(p)).collect();
        for batch in batches {
            overlay.subtract(batch).expect("Overlay mask is initialized");
            let current: Vec<bool> = samples.iter().map(|&p| overlay.contains_point_in_hole(p)).collect();
            for (i, (&was, &is)) in previous.iter().zip(&current).enumerate() {
                assert!(!was || is, "Point {} left the holes after a subtraction", samples[i]);
            }
            previous = current;
            assert_consistent(&overlay);
        }
    }

    #[test]
    fn test_disjunction() {
        let overlay = OverlayRegion::new(square(), Some(vec![
            hole(RectangularHole::new(Rect::new(10.0, 10.0, 20.0, 20.0))),
            hole(RectangularHole::new(Rect::new(60.0, 60.0, 20.0, 20.0))),
            hole(RectangularHole::new(Rect::new(70.0, 70.0, 20.0, 20.0))),
        ])).expect("Construction cannot fail");

        assert!(overlay.contains_point_in_hole(v(15.0, 15.0)), "Inside only the first hole");
        assert!(!overlay.contains_point_in_hole(v(45.0, 45.0)), "Outside every hole");
        assert!(overlay.contains_point_in_hole(v(75.0, 75.0)), "Inside two overlapping holes");
        assert!(!overlay.intercepts(v(75.0, 75.0)));
        assert!(!overlay.intercepts(v(150.0, 150.0)), "Points outside the overlay are not intercepted");

        // The overlap is still a hole for input, while even-odd paints it again
        let snapshot = overlay.snapshot().expect("Overlay mask is initialized");
        assert!(snapshot.paints(v(75.0, 75.0)));
        assert!(!snapshot.paints(v(65.0, 65.0)));
    }

    #[test]
    fn test_duplicate_holes_are_kept() {
        let shared = circle(40.0, 40.0, 5.0);
        let mut overlay = OverlayRegion::plain(square());
        overlay.subtract(vec![shared.clone(), shared.clone()]).expect("Overlay mask is initialized");

        assert_eq!(overlay.holes().len(), 2);
        assert_eq!(overlay.mask().hole_count(), 2);
        assert!(overlay.contains_point_in_hole(v(40.0, 40.0)));
        assert_consistent(&overlay);
    }

    #[test]
    fn test_caller_may_drop_its_shapes() {
        let mut overlay = OverlayRegion::plain(square());
        {
            let outline = PlanarPath::polygon(&[v(10.0, 10.0), v(40.0, 10.0), v(10.0, 40.0)]);
            let shape = hole(PathHole::new(outline));
            overlay.subtract(vec![shape]).expect("Overlay mask is initialized");
        }
        assert!(overlay.contains_point_in_hole(v(15.0, 15.0)));
    }

    #[test]
    fn test_restore_is_unsupported() {
        let result = OverlayRegion::restore(b"archived view");
        assert_eq!(result.err(), Some(ConstructionError::UnsupportedRestore));
    }

    #[test]
    fn test_renderer_sees_every_change() {
        let renderer = RecordingRenderer::default();
        let revisions = renderer.revisions.clone();

        let mut overlay = OverlayRegion::plain(square());
        overlay.attach_renderer(Box::new(renderer));
        overlay.subtract(vec![circle(50.0, 50.0, 10.0)]).expect("Overlay mask is initialized");
        overlay.subtract(Vec::new()).expect("Empty batches always succeed");
        overlay.subtract(vec![circle(10.0, 10.0, 2.0), circle(20.0, 20.0, 2.0)]).expect("Overlay mask is initialized");

        assert_eq!(*revisions.borrow(), vec![(1, 0), (2, 1), (3, 3)]);

        overlay.set_style(OverlayStyle::default());
        assert_eq!(revisions.borrow().len(), 4);
        assert!(overlay.detach_renderer().is_some());
    }
}
