use super::{PairModelTrait, PairOutput};

/// No interaction; the model of every pair that was never set
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct None_ {}
impl None_ {
    pub fn new() -> Self {
        Self {}
    }
}
impl PairModelTrait for None_ {
    fn cutoff_distance(&self) -> f64 {
        0.0
    }
    fn evaluate(&self, _r2: f64) -> PairOutput {
        PairOutput::default()
    }
}
