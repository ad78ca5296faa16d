pub fn norm_squared(v: &[f64; 3]) -> f64 {
    v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
}
pub fn distance_squared(coord1: &[f64; 3], coord2: &[f64; 3]) -> f64 {
    let x = coord1[0] - coord2[0];
    let y = coord1[1] - coord2[1];
    let z = coord1[2] - coord2[2];
    x * x + y * y + z * z
}
/// Applies `x <- a * x + b` to every component
pub fn scale_and_shift(values: &mut [[f64; 3]], a: f64, b: f64) {
    values.iter_mut().flatten().for_each(|x| *x = a * *x + b);
}
