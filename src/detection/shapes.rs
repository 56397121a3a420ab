use crate::config::CircularityBand;
use crate::models::{Region, ShapeMetrics};

/// Score every region. Regions whose boundary has no length cannot be
/// scored and are dropped here rather than poisoning the count.
pub fn measure_regions(regions: &[Region]) -> Vec<ShapeMetrics> {
    regions.iter().filter_map(Region::metrics).collect()
}

/// Count shapes whose circularity lies inside the accepted band.
pub fn count_round(metrics: &[ShapeMetrics], accepted: CircularityBand) -> u32 {
    metrics
        .iter()
        .filter(|m| accepted.contains(m.circularity))
        .count() as u32
}
