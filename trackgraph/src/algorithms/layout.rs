use rand::Rng;

use crate::model::Point;

/// `count` points evenly spaced on a circle, starting at angle 0.
pub fn ring(count: usize, center: Point, radius: f64) -> Vec<Point> {
    let step = std::f64::consts::TAU / count.max(1) as f64;
    (0..count)
        .map(|i| {
            let a = step * i as f64;
            Point::new(center.x + radius * a.cos(), center.y + radius * a.sin())
        })
        .collect()
}

/// `count` points at random integer coordinates in `[0, extent)`.
pub fn scatter<R: Rng>(count: usize, extent: u32, rng: &mut R) -> Vec<Point> {
    let extent = extent.max(1);
    (0..count)
        .map(|_| {
            let x = rng.random_range(0..extent);
            let y = rng.random_range(0..extent);
            Point::new(x as f64, y as f64)
        })
        .collect()
}
