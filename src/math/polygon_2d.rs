use super::Point2;

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Computes the enclosed area of a polygon, regardless of winding.
#[must_use]
pub fn area(points: &[Point2]) -> f64 {
    signed_area(points).abs()
}

/// Computes the total edge length of a closed polygon, including the
/// closing edge from the last point back to the first.
#[must_use]
pub fn perimeter(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 2 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += (points[j] - points[i]).norm();
    }
    sum
}

/// Computes the arithmetic mean of the polygon vertices.
///
/// Returns the origin for an empty slice.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn centroid(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    let mut sum = Point2::origin();
    for p in points {
        sum.x += p.x;
        sum.y += p.y;
    }
    let n = points.len() as f64;
    Point2::new(sum.x / n, sum.y / n)
}

/// Tests whether a point lies inside a polygon (even-odd ray cast).
///
/// Points exactly on an edge may land on either side.
#[must_use]
pub fn point_in_polygon(points: &[Point2], p: Point2) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (points[i], points[j]);
        if ((a.y < p.y && b.y >= p.y) || (b.y < p.y && a.y >= p.y))
            && a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x) < p.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Returns the axis-aligned bounding box of a point set as `(min, max)`.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn bounding_box(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for p in &points[1..] {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }
    Some((min, max))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn signed_area_ccw_square() {
        let pts = vec![p(0.0, 0.0), p(1.0, 0.0), p(1.0, 1.0), p(0.0, 1.0)];
        assert!((signed_area(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let pts = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)];
        assert!((signed_area(&pts) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area(&[p(0.0, 0.0)]).abs() < TOLERANCE);
        assert!(signed_area(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn area_ignores_winding() {
        let ccw = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        let cw = vec![p(0.0, 0.0), p(0.0, 4.0), p(4.0, 4.0), p(4.0, 0.0)];
        assert!((area(&ccw) - 16.0).abs() < TOLERANCE);
        assert!((area(&cw) - 16.0).abs() < TOLERANCE);
    }

    #[test]
    fn area_l_shape() {
        let pts = vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 2.0),
            p(2.0, 2.0),
            p(2.0, 4.0),
            p(0.0, 4.0),
        ];
        assert!((area(&pts) - 12.0).abs() < TOLERANCE);
    }

    #[test]
    fn perimeter_square() {
        let pts = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        assert!((perimeter(&pts) - 16.0).abs() < TOLERANCE);
    }

    #[test]
    fn perimeter_includes_closing_edge() {
        let pts = vec![p(0.0, 0.0), p(3.0, 0.0), p(3.0, 4.0)];
        // 3 + 4 + 5
        assert!((perimeter(&pts) - 12.0).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_square() {
        let pts = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        let c = centroid(&pts);
        assert!((c.x - 2.0).abs() < TOLERANCE);
        assert!((c.y - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn centroid_empty() {
        let c = centroid(&[]);
        assert!(c.x.abs() < TOLERANCE);
        assert!(c.y.abs() < TOLERANCE);
    }

    #[test]
    fn point_in_polygon_square() {
        let pts = vec![p(0.0, 0.0), p(4.0, 0.0), p(4.0, 4.0), p(0.0, 4.0)];
        assert!(point_in_polygon(&pts, p(2.0, 2.0)));
        assert!(!point_in_polygon(&pts, p(5.0, 2.0)));
        assert!(!point_in_polygon(&pts, p(-1.0, 2.0)));
    }

    #[test]
    fn point_in_polygon_concave_notch() {
        let pts = vec![
            p(0.0, 0.0),
            p(4.0, 0.0),
            p(4.0, 2.0),
            p(2.0, 2.0),
            p(2.0, 4.0),
            p(0.0, 4.0),
        ];
        assert!(point_in_polygon(&pts, p(1.0, 3.0)));
        // inside the cut-away quadrant of the L
        assert!(!point_in_polygon(&pts, p(3.0, 3.0)));
    }

    #[test]
    fn bounding_box_basic() {
        let pts = vec![p(1.0, 2.0), p(-1.0, 5.0), p(3.0, 0.5)];
        let (min, max) = bounding_box(&pts).unwrap();
        assert!((min.x + 1.0).abs() < TOLERANCE);
        assert!((min.y - 0.5).abs() < TOLERANCE);
        assert!((max.x - 3.0).abs() < TOLERANCE);
        assert!((max.y - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn bounding_box_empty() {
        assert!(bounding_box(&[]).is_none());
    }
}
