use fnv::FnvHashMap;
use rand::Rng;
use std::f64::consts::PI;
use std::hash::Hash;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Straight-line distance in canvas units.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    pub fn midpoint(&self, other: &Point) -> Point {
        Point {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }
}

/// Drawing area, `margin` kept free on every side.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            margin: 80.0,
        }
    }
}

impl Canvas {
    pub fn center(&self) -> Point {
        Point {
            x: self.width / 2.0,
            y: self.height / 2.0,
        }
    }

    pub fn max_radius(&self) -> f64 {
        let usable = (self.width - self.margin * 2.0).min(self.height - self.margin * 2.0);
        (usable / 2.0).max(0.0)
    }

    fn clamp(&self, p: Point) -> Point {
        // `max` then `min` so a canvas smaller than two margins still yields a point.
        Point {
            x: p.x.max(self.margin).min(self.width - self.margin),
            y: p.y.max(self.margin).min(self.height - self.margin),
        }
    }
}

pub type Layout<N> = FnvHashMap<N, Point>;

/// Places nodes evenly by angle around the canvas center, each at 70% to 100% of the maximum
/// radius so that labels on neighbouring nodes do not line up.
pub fn circular_layout<N: Clone + Eq + Hash, R: Rng>(
    nodes: &[N],
    canvas: &Canvas,
    rng: &mut R,
) -> Layout<N> {
    let center = canvas.center();
    let max_radius = canvas.max_radius();
    let count = nodes.len() as f64;

    let mut positions = FnvHashMap::default();
    for (i, node) in nodes.iter().enumerate() {
        let angle = 2.0 * PI * i as f64 / count;
        let radius = max_radius * (0.7 + rng.gen_range(0.0..0.3));
        let p = Point {
            x: center.x + radius * angle.cos(),
            y: center.y + radius * angle.sin(),
        };
        positions.insert(node.clone(), canvas.clamp(p));
    }
    positions
}
