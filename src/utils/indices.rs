/// Linear index of a cell in a cubic grid with `bounds` cells per side
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Index {
    idx: usize,
    bounds: usize,
}
impl Index {
    pub fn new(idx: usize, bounds: usize) -> Self {
        if idx >= bounds * bounds * bounds {
            panic!("Out of bounds");
        }
        Self { idx, bounds }
    }
    pub fn from_3d(indices: &[usize; 3], bounds: usize) -> Self {
        let [x, y, z] = *indices;
        if x >= bounds || y >= bounds || z >= bounds {
            panic!("Out of bounds");
        }
        let idx = (x * bounds + y) * bounds + z;
        Self { idx, bounds }
    }
    pub fn to_3d(&self) -> [usize; 3] {
        let z = self.idx % self.bounds;
        let q = self.idx / self.bounds;
        let y = q % self.bounds;
        let x = q / self.bounds;
        [x, y, z]
    }
    /// The cell reached by `offset`, wrapped periodically
    pub fn shifted(&self, offset: &[i32; 3]) -> Self {
        let n = self.bounds as i64;
        let base = self.to_3d();
        let mut inds = [0usize; 3];
        for k in 0..3 {
            inds[k] = (base[k] as i64 + offset[k] as i64).rem_euclid(n) as usize;
        }
        Self::from_3d(&inds, self.bounds)
    }
    pub fn idx(&self) -> usize {
        self.idx
    }
    pub fn bounds(&self) -> usize {
        self.bounds
    }
}
