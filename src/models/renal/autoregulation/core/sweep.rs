use uom::si::{f64::Pressure, pressure::millimeter_of_mercury};

/// Evenly spaced MAP samples from `start` to `end`, both included.
///
/// A sweep is a plain value: iterating it twice yields the same samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSweep {
    start: Pressure,
    end: Pressure,
    count: usize,
}

impl MapSweep {
    #[must_use]
    pub fn new(start: Pressure, end: Pressure, count: usize) -> Self {
        Self { start, end, count }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Iterates over the samples in increasing index order.
    pub fn samples(&self) -> impl ExactSizeIterator<Item = Pressure> + use<> {
        let start = self.start.get::<millimeter_of_mercury>();
        let end = self.end.get::<millimeter_of_mercury>();
        let step = if self.count > 1 {
            #[allow(clippy::cast_precision_loss)]
            let intervals = (self.count - 1) as f64;
            (end - start) / intervals
        } else {
            0.0
        };

        (0..self.count).map(move |i| {
            #[allow(clippy::cast_precision_loss)]
            let offset = step * i as f64;
            Pressure::new::<millimeter_of_mercury>(start + offset)
        })
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Pressure> {
        self.samples().collect()
    }
}

impl Default for MapSweep {
    /// 60 samples across 40–220 mmHg.
    fn default() -> Self {
        Self::new(
            Pressure::new::<millimeter_of_mercury>(40.0),
            Pressure::new::<millimeter_of_mercury>(220.0),
            60,
        )
    }
}
