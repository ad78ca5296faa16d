use crate::Error;

/// Simulation box: a cube of edge `length`, periodic along every axis.
///
/// Atoms are never wrapped in place; coordinates are folded into the box
/// only when binning, and pair separations follow the minimum image
/// convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Container {
    length: f64,
}
impl Container {
    /// Create a container large enough for a neighbor search out to `extended_cutoff`
    pub fn cubic(length: f64, extended_cutoff: f64) -> Result<Self, Error> {
        if !length.is_finite() || !(length > extended_cutoff) {
            return Err(Error::BoxTooSmall {
                length,
                extended_cutoff,
            });
        }
        Ok(Self { length })
    }

    pub fn length(&self) -> f64 {
        self.length
    }

    /// Fractional coordinate of `x` folded into `[0, 1]`
    pub fn fractional(&self, x: f64) -> f64 {
        let s = x / self.length;
        s - s.floor()
    }

    /// Periodic image of `d` closest to the origin
    pub fn minimum_image(&self, d: [f64; 3]) -> [f64; 3] {
        let l = self.length;
        [
            d[0] - l * (d[0] / l).round(),
            d[1] - l * (d[1] / l).round(),
            d[2] - l * (d[2] / l).round(),
        ]
    }

    /// Minimum image separation `a - b`
    pub fn displacement(&self, a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
        self.minimum_image([a[0] - b[0], a[1] - b[1], a[2] - b[2]])
    }
}
