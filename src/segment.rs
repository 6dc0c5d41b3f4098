use crate::*;
use std::iter::once;

/// A directed wall edge from `start` to `end`.
#[derive(Copy, Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Segment {
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Segment {
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> f64 {
        self.end.sub(self.start).mag()
    }

    /// Returns if the segment has zero length.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// Build the closed boundary loop of a wall polygon.
///
/// For two or more points, each point is joined to the next and the last point is joined back
/// to the first, giving one segment per point:
/// `(p0,p1), (p1,p2), ..., (pn-1,p0)`.
///
/// An empty slice gives no segments.
///
/// A **single** point gives one zero-length segment at the _origin_ `(0, 0)`, not at the
/// supplied point. Authoring hosts have always received this segment for one-point walls, so it
/// is kept.
///
/// # Example
/// ```rust
/// # use sketchit::*;
/// let segs = segments(&[
///     Coordinate::new(1.0, 0.0),
///     Coordinate::new(0.0, 1.0),
///     Coordinate::new(0.0, 0.0),
/// ]);
///
/// assert_eq!(segs.len(), 3);
/// assert_eq!(segs[2], Segment::new(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0)));
/// ```
pub fn segments(pts: &[Coordinate]) -> Vec<Segment> {
    match pts {
        [] => Vec::new(),
        [_] => vec![Segment::new(Coordinate::zero(), Coordinate::zero())],
        [first, .., last] => pts
            .iter()
            .zip(&pts[1..])
            .chain(once((last, first)))
            .map(|(a, b)| Segment::new(*a, *b))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;

    fn c(x: f64, y: f64) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn triangle_loop() {
        let segs = segments(&triangle());
        assert_eq!(
            segs,
            vec![
                Segment::new(c(1.0, 0.0), c(0.0, 1.0)),
                Segment::new(c(0.0, 1.0), c(0.0, 0.0)),
                Segment::new(c(0.0, 0.0), c(1.0, 0.0)),
            ]
        );
    }

    #[test]
    fn two_points_go_there_and_back() {
        let segs = segments(&[c(0.0, 0.0), c(3.0, 4.0)]);
        assert_eq!(
            segs,
            vec![
                Segment::new(c(0.0, 0.0), c(3.0, 4.0)),
                Segment::new(c(3.0, 4.0), c(0.0, 0.0)),
            ]
        );
        assert_eq!(segs[0].length(), 5.0);
        assert_eq!(segs[1].length(), 5.0);
    }

    #[test]
    fn empty_has_no_segments() {
        assert!(segments(&[]).is_empty());
    }

    #[test]
    fn single_point_is_origin_segment() {
        let segs = segments(&[c(5.0, 7.0)]);
        assert_eq!(segs, vec![Segment::new(c(0.0, 0.0), c(0.0, 0.0))]);
        assert!(segs[0].is_degenerate());
        assert_eq!(segs[0].length(), 0.0);
    }

    #[test]
    fn repeated_points_are_kept() {
        let segs = segments(&[c(1.0, 1.0), c(1.0, 1.0), c(2.0, 1.0)]);
        assert_eq!(segs.len(), 3);
        assert!(segs[0].is_degenerate());
        assert!(!segs[1].is_degenerate());
    }

    #[quickcheck]
    fn one_segment_per_point(pts: FiniteCoords) -> TestResult {
        let pts = pts.coords;
        if pts.len() < 2 {
            return TestResult::discard();
        }

        TestResult::from_bool(segments(&pts).len() == pts.len())
    }

    #[quickcheck]
    fn loop_is_closed_and_chained(pts: FiniteCoords) -> TestResult {
        let pts = pts.coords;
        if pts.len() < 2 {
            return TestResult::discard();
        }

        let segs = segments(&pts);
        let chained = segs
            .iter()
            .zip(segs.iter().cycle().skip(1))
            .all(|(a, b)| a.end == b.start);
        let starts = segs.iter().map(|s| s.start).eq(pts.iter().copied());

        TestResult::from_bool(chained && starts && segs[segs.len() - 1].end == segs[0].start)
    }

    #[quickcheck]
    fn segments_idempotent(pts: FiniteCoords) -> bool {
        segments(&pts.coords) == segments(&pts.coords)
    }
}
