/// How much text the composer produces per reading.
pub trait ContentProvider: Send + Sync {
    fn summary_lines(&self) -> usize;
    fn ritual_count(&self) -> usize;
    fn transit_count(&self) -> usize;
}

/// Built-in reading shape: four summary lines, three rituals, three transits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingOptions {
    pub summary_lines: usize,
    pub ritual_count: usize,
    pub transit_count: usize,
}

impl ReadingOptions {
    pub const SUMMARY_LINES: (usize, usize) = (3, 5);
    pub const RITUAL_COUNT: (usize, usize) = (1, 6);
    pub const TRANSIT_COUNT: (usize, usize) = (1, 4);
}

impl Default for ReadingOptions {
    fn default() -> Self {
        Self {
            summary_lines: 4,
            ritual_count: 3,
            transit_count: 3,
        }
    }
}

impl ContentProvider for ReadingOptions {
    fn summary_lines(&self) -> usize {
        self.summary_lines
    }

    fn ritual_count(&self) -> usize {
        self.ritual_count
    }

    fn transit_count(&self) -> usize {
        self.transit_count
    }
}
