use std::ops::Range;

/// One atom type or a range of them, for setting pair parameters in bulk
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Types {
    One(usize),
    Range(Range<usize>),
}
impl Types {
    pub fn to_range(&self) -> Range<usize> {
        match self {
            Types::One(i) => *i..*i + 1,
            Types::Range(r) => r.clone(),
        }
    }
    /// Largest type selected, if any
    pub fn last(&self) -> Option<usize> {
        let r = self.to_range();
        if r.is_empty() {
            None
        } else {
            Some(r.end - 1)
        }
    }
    /// Fails with the first selected type that is not below `num_types`
    pub fn check_within(&self, num_types: usize) -> Result<(), usize> {
        match self.last() {
            Some(t) if t >= num_types => Err(self.to_range().start.max(num_types)),
            _ => Ok(()),
        }
    }
}
impl From<Range<usize>> for Types {
    fn from(value: Range<usize>) -> Self {
        Types::Range(value)
    }
}
impl From<usize> for Types {
    fn from(value: usize) -> Self {
        Self::One(value)
    }
}
