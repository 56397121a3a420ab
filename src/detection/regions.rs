use image::GrayImage;
use imageproc::contours::{BorderType, find_contours};
use imageproc::point::Point;

use crate::models::Region;

/// Trace every top-level foreground component of the mask and return its
/// external boundary. Hole borders and components nested inside another
/// component are dropped, so one region comes back per visible blob.
pub fn extract_regions(mask: &GrayImage) -> Vec<Region> {
    find_contours::<i32>(mask)
        .into_iter()
        .filter(|c| c.border_type == BorderType::Outer && c.parent.is_none())
        .map(|c| Region {
            boundary: compress_boundary(&c.points),
        })
        .collect()
}

/// Collapse straight runs of border pixels to their endpoints. Border
/// tracing emits every boundary pixel; only the points where the walk
/// changes direction carry shape information, and dropping the rest leaves
/// the polygon's area and length unchanged.
fn compress_boundary(points: &[Point<i32>]) -> Vec<Point<i32>> {
    let n = points.len();
    if n < 3 {
        return points.to_vec();
    }
    let mut kept = Vec::new();
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let cur = points[i];
        let next = points[(i + 1) % n];
        let step_in = (cur.x - prev.x, cur.y - prev.y);
        let step_out = (next.x - cur.x, next.y - cur.y);
        if step_in != step_out {
            kept.push(cur);
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    fn mask_with_rects(width: u32, height: u32, rects: &[(u32, u32, u32, u32)]) -> GrayImage {
        let mut mask = GrayImage::new(width, height);
        for &(x0, y0, w, h) in rects {
            for y in y0..y0 + h {
                for x in x0..x0 + w {
                    mask.put_pixel(x, y, Luma([255u8]));
                }
            }
        }
        mask
    }

    #[test]
    fn square_boundary_compresses_to_corners() {
        let mask = mask_with_rects(10, 10, &[(2, 3, 4, 4)]);
        let regions = extract_regions(&mask);
        assert_eq!(regions.len(), 1);
        assert_eq!(regions[0].boundary.len(), 4);
        assert_eq!(regions[0].area(), 9.0);
        assert_eq!(regions[0].perimeter(), 12.0);
    }

    #[test]
    fn disjoint_blobs_become_separate_regions() {
        let mask = mask_with_rects(20, 10, &[(1, 1, 3, 3), (10, 4, 4, 4)]);
        let regions = extract_regions(&mask);
        assert_eq!(regions.len(), 2);
    }

    #[test]
    fn empty_mask_has_no_regions() {
        let mask = GrayImage::new(10, 10);
        assert!(extract_regions(&mask).is_empty());
    }

    #[test]
    fn hole_border_is_not_a_region() {
        // 8x8 block with a 2x2 hole punched out of the middle.
        let mut mask = mask_with_rects(12, 12, &[(2, 2, 8, 8)]);
        for y in 5..7 {
            for x in 5..7 {
                mask.put_pixel(x, y, Luma([0u8]));
            }
        }
        let regions = extract_regions(&mask);
        assert_eq!(regions.len(), 1);
    }

    #[test]
    fn single_pixel_region_survives_extraction() {
        let mask = mask_with_rects(5, 5, &[(2, 2, 1, 1)]);
        let regions = extract_regions(&mask);
        assert_eq!(regions.len(), 1);
        // One point, so no closed boundary and no measurable shape.
        assert!(regions[0].metrics().is_none());
    }
}
