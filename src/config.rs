/// Inclusive band over one 8-bit channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelBand {
    pub lo: u8,
    pub hi: u8,
}

impl ChannelBand {
    pub const fn new(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: u8) -> bool {
        self.lo <= value && value <= self.hi
    }
}

/// Accepted circularity scores. Both bounds are exclusive, so a score
/// exactly on an edge is rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircularityBand {
    pub lo: f64,
    pub hi: f64,
}

impl CircularityBand {
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lo < value && value < self.hi
    }
}

/// Tuning constants for the counting pipeline, injected at construction.
///
/// Hue is on the halved 0-179 scale, saturation and value on 0-255. The
/// defaults reproduce the tobacco-brown band and the 600x400 working
/// resolution the detector was tuned at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig {
    pub hue_range: ChannelBand,
    pub saturation_range: ChannelBand,
    pub value_range: ChannelBand,
    pub circularity_range: CircularityBand,
    pub working_width: u32,
    pub working_height: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            hue_range: ChannelBand::new(10, 30),
            saturation_range: ChannelBand::new(60, 255),
            value_range: ChannelBand::new(50, 255),
            circularity_range: CircularityBand::new(0.6, 1.3),
            working_width: 600,
            working_height: 400,
        }
    }
}
