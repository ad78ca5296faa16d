use crate::Error;

/// Settings for computing and updating a neighbor list
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UpdateSettings {
    /// Reuse the list while no atom has moved more than half the skin;
    /// when false the list is rebuilt on every force computation
    pub check: bool,
    /// Initial neighbor capacity per atom
    pub pairs_per_atom: usize,
    /// Factor by which the neighbor buffer grows when it overflows
    pub growth_factor: f64,
}

impl UpdateSettings {
    pub fn new() -> Self {
        Self {
            check: true,
            pairs_per_atom: 64,
            growth_factor: 1.5,
        }
    }
    pub fn validate(&self) -> Result<(), Error> {
        if !(self.growth_factor > 1.0) || !self.growth_factor.is_finite() {
            return Err(Error::InvalidParameters(format!(
                "Neighbor list growth factor should be larger than one, found {}",
                self.growth_factor
            )));
        }
        Ok(())
    }
    /// Two atoms each displaced by at most `d` since the last build have
    /// approached by at most `2 d`, which the skin must absorb.
    pub fn should_rebuild(&self, max_displacement_sq: f64, skin: f64) -> bool {
        !self.check || 4.0 * max_displacement_sq > skin * skin
    }
}

impl Default for UpdateSettings {
    fn default() -> Self {
        Self::new()
    }
}
