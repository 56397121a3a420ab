use imageproc::point::Point;

/// External boundary of one connected foreground component, stored as a
/// closed polygon with collinear runs collapsed to their endpoints.
#[derive(Debug, Clone)]
pub struct Region {
    pub boundary: Vec<Point<i32>>,
}

impl Region {
    /// Area enclosed by the boundary polygon, in pixels, by the shoelace
    /// formula. Always non-negative regardless of winding.
    pub fn area(&self) -> f64 {
        if self.boundary.len() < 3 {
            return 0.0;
        }
        let mut twice_area = 0i64;
        for (i, p) in self.boundary.iter().enumerate() {
            let q = &self.boundary[(i + 1) % self.boundary.len()];
            twice_area += i64::from(p.x) * i64::from(q.y) - i64::from(q.x) * i64::from(p.y);
        }
        twice_area.abs() as f64 / 2.0
    }

    /// Length of the closed boundary polyline.
    pub fn perimeter(&self) -> f64 {
        if self.boundary.len() < 2 {
            return 0.0;
        }
        let mut length = 0.0;
        for (i, p) in self.boundary.iter().enumerate() {
            let q = &self.boundary[(i + 1) % self.boundary.len()];
            let dx = f64::from(q.x - p.x);
            let dy = f64::from(q.y - p.y);
            length += dx.hypot(dy);
        }
        length
    }

    /// Isoperimetric ratio, 1.0 for a perfect circle. `None` when the
    /// boundary has no length.
    pub fn circularity(&self) -> Option<f64> {
        self.metrics().map(|m| m.circularity)
    }

    /// Score the region. A boundary with zero perimeter cannot be scored
    /// and yields `None`.
    pub fn metrics(&self) -> Option<ShapeMetrics> {
        let perimeter = self.perimeter();
        if perimeter == 0.0 {
            return None;
        }
        let area = self.area();
        Some(ShapeMetrics {
            area,
            perimeter,
            circularity: 4.0 * std::f64::consts::PI * area / (perimeter * perimeter),
        })
    }
}

/// Scalar shape descriptors for one region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeMetrics {
    pub area: f64,
    pub perimeter: f64,
    pub circularity: f64,
}
