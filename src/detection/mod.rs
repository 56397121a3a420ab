pub mod preprocessing;
pub mod regions;
pub mod segmentation;
pub mod shapes;

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageReader};

use crate::config::DetectorConfig;
use crate::error::CountError;
use crate::models::{Region, ShapeMetrics};

/// Main counting pipeline orchestrator.
///
/// Runs four stages over one still image: rescale to the working
/// resolution, mask the target color band, trace each blob's external
/// boundary, then count the boundaries that score as roughly circular.
/// Stateless between calls, so one counter can serve any number of images.
pub struct ShapeCounter {
    pub config: DetectorConfig,
    pub verbose: bool,
}

impl ShapeCounter {
    pub fn new() -> Self {
        Self {
            config: DetectorConfig::default(),
            verbose: false,
        }
    }

    pub fn with_config(mut self, config: DetectorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Count round in-band shapes on an already decoded image.
    pub fn count(&self, img: &DynamicImage) -> u32 {
        let regions = self.regions(img);
        let metrics = shapes::measure_regions(&regions);
        let counted = shapes::count_round(&metrics, self.config.circularity_range);

        if self.verbose {
            println!(
                "Counted {} round shapes (from {} regions)",
                counted,
                regions.len()
            );
            for (i, m) in metrics.iter().take(10).enumerate() {
                println!(
                    "  Region {}: area={:.1}, perimeter={:.1}, circ={:.3}",
                    i + 1,
                    m.area,
                    m.perimeter,
                    m.circularity
                );
            }
        }

        counted
    }

    /// Decode the image at `path` and count it. An unreadable or
    /// undecodable file is reported as an error, not folded into the count.
    pub fn count_path<P: AsRef<Path>>(&self, path: P) -> Result<u32, CountError> {
        let img = ImageReader::open(path.as_ref())?.decode()?;
        Ok(self.count(&img))
    }

    /// Like [`count_path`](Self::count_path), but maps any read or decode
    /// failure to a count of zero.
    pub fn count_path_or_zero<P: AsRef<Path>>(&self, path: P) -> u32 {
        self.count_path(path).unwrap_or(0)
    }

    /// Score every region on an image without counting (for inspection).
    /// Ordering follows discovery order and carries no meaning.
    pub fn analyze(&self, img: &DynamicImage) -> Vec<ShapeMetrics> {
        shapes::measure_regions(&self.regions(img))
    }

    /// The color mask at working resolution (for inspection).
    pub fn mask(&self, img: &DynamicImage) -> GrayImage {
        if self.verbose {
            println!(
                "Normalizing to {}x{}...",
                self.config.working_width, self.config.working_height
            );
        }
        let working = preprocessing::normalize(
            img,
            self.config.working_width,
            self.config.working_height,
        );

        if self.verbose {
            println!("Masking target color band...");
        }
        segmentation::hsv_mask(
            &working,
            self.config.hue_range,
            self.config.saturation_range,
            self.config.value_range,
        )
    }

    /// Boundary regions of the mask (for inspection).
    pub fn regions(&self, img: &DynamicImage) -> Vec<Region> {
        let mask = self.mask(img);

        if self.verbose {
            println!("Tracing region boundaries...");
        }
        let regions = regions::extract_regions(&mask);
        if self.verbose {
            println!("Found {} regions", regions.len());
        }
        regions
    }
}

impl Default for ShapeCounter {
    fn default() -> Self {
        Self::new()
    }
}
