use super::{PairModel, PairModelTrait};
use crate::{utils::Types, Error};

/// Model of one pair of atom types, with its squared cutoff ready for the force loop
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PairType {
    model: PairModel,
    cutoff_sq: f64,
}
impl PairType {
    pub fn new(model: PairModel) -> Self {
        let rc = model.cutoff_distance();
        Self {
            model,
            cutoff_sq: rc * rc,
        }
    }
    pub fn model(&self) -> &PairModel {
        &self.model
    }
    pub fn cutoff_sq(&self) -> f64 {
        self.cutoff_sq
    }
}

/// Symmetric `num_types x num_types` table of pair models.
///
/// Every pair starts out as [`None_`](super::None_), so leaving pairs unset
/// is legal and simply switches their interaction off.
#[derive(Clone, Debug)]
pub struct PairTable {
    num_types: usize,
    cutoff: f64,
    pairs: Vec<PairType>,
    pair_set: Vec<bool>,
}
impl PairTable {
    /// Empty table whose models may reach at most `cutoff`
    pub fn new(num_types: usize, cutoff: f64) -> Self {
        let len = num_types * num_types;
        Self {
            num_types,
            cutoff,
            pairs: vec![PairType::default(); len],
            pair_set: vec![false; len],
        }
    }
    pub fn num_types(&self) -> usize {
        self.num_types
    }
    pub fn cutoff(&self) -> f64 {
        self.cutoff
    }
    #[inline]
    pub fn get(&self, type_i: usize, type_j: usize) -> &PairType {
        &self.pairs[self.type_idx(type_i, type_j)]
    }
    pub fn is_set(&self, type_i: usize, type_j: usize) -> bool {
        self.pair_set[self.type_idx(type_i, type_j)]
    }
    pub fn all_set(&self) -> bool {
        self.pair_set.iter().all(|&x| x)
    }

    /// Assign `model` to every pair drawn from `itypes` and `jtypes`, both ways round.
    ///
    /// The table is left untouched on error.
    pub fn set(&mut self, itypes: Types, jtypes: Types, model: PairModel) -> Result<(), Error> {
        for types in [&itypes, &jtypes] {
            types
                .check_within(self.num_types)
                .map_err(|type_| Error::InvalidType {
                    type_,
                    num_types: self.num_types,
                })?;
        }
        let rc = model.cutoff_distance();
        if rc > self.cutoff {
            return Err(Error::PairCutoffTooLarge {
                pair: rc,
                global: self.cutoff,
            });
        }

        let pair = PairType::new(model);
        for i in itypes.to_range() {
            for j in jtypes.to_range() {
                for index in [self.type_idx(i, j), self.type_idx(j, i)] {
                    self.pairs[index] = pair;
                    self.pair_set[index] = true;
                }
            }
        }
        Ok(())
    }

    #[inline]
    fn type_idx(&self, type_i: usize, type_j: usize) -> usize {
        type_i * self.num_types + type_j
    }
}
