use crate::Point;
use rand::Rng;
use thiserror::Error;

pub const SCATTER_DEFAULT_COUNT: usize = 10;
pub const SCATTER_DEFAULT_LO: f32 = -10.0;
pub const SCATTER_DEFAULT_HI: f32 = 10.0;

#[derive(Error, Debug)]
pub enum ScatterError {
    #[error("range bound was NaN or Inf: lo={lo}, hi={hi}")]
    BadBound { lo: f32, hi: f32 },
    #[error("empty range: lo={lo} is above hi={hi}")]
    EmptyRange { lo: f32, hi: f32 },
}

/// Settings for how a batch of random points is drawn.
pub struct Scatter {
    /// how many points to draw
    pub count: usize,
    /// lower bound for each coordinate
    pub lo: f32,
    /// upper bound for each coordinate (inclusive)
    pub hi: f32,
}

impl Default for Scatter {
    fn default() -> Self {
        Self {
            count: SCATTER_DEFAULT_COUNT,
            lo: SCATTER_DEFAULT_LO,
            hi: SCATTER_DEFAULT_HI,
        }
    }
}

impl Scatter {
    /// Draw `count` points, each coordinate uniform over `[lo, hi]`,
    /// in construction order.
    pub fn run<R: Rng>(&self, rng: &mut R) -> Result<Vec<Point>, ScatterError> {
        if !self.lo.is_finite() || !self.hi.is_finite() {
            return Err(ScatterError::BadBound {
                lo: self.lo,
                hi: self.hi,
            });
        }
        if self.lo > self.hi {
            return Err(ScatterError::EmptyRange {
                lo: self.lo,
                hi: self.hi,
            });
        }
        let mut points = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let x = rng.gen_range(self.lo..=self.hi);
            let y = rng.gen_range(self.lo..=self.hi);
            points.push(Point::new(x, y));
        }
        Ok(points)
    }
}

pub(crate) fn fixed(count: usize) -> Vec<Point> {
    vec![Point::default(); count]
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn fixed_points_are_all_the_origin() {
        let points = fixed(10);
        assert_eq!(points.len(), 10);
        assert!(points.iter().all(|p| *p == Point::default()));
    }

    #[test]
    fn draws_the_requested_number_of_points() {
        let scatter = Scatter::default();
        let points = scatter.run(&mut rand::thread_rng()).unwrap();
        assert_eq!(points.len(), SCATTER_DEFAULT_COUNT);
    }

    #[test]
    fn draws_stay_inside_the_closed_range() {
        let scatter = Scatter {
            count: 200,
            ..Default::default()
        };
        let points = scatter.run(&mut rand::thread_rng()).unwrap();
        for p in points {
            assert!(p.x >= SCATTER_DEFAULT_LO && p.x <= SCATTER_DEFAULT_HI);
            assert!(p.y >= SCATTER_DEFAULT_LO && p.y <= SCATTER_DEFAULT_HI);
        }
    }

    #[test]
    fn zero_count_draws_nothing() {
        let scatter = Scatter {
            count: 0,
            ..Default::default()
        };
        assert!(scatter.run(&mut rand::thread_rng()).unwrap().is_empty());
    }

    #[test]
    fn collapsed_range_pins_every_coordinate() {
        let scatter = Scatter {
            count: 3,
            lo: 2.5,
            hi: 2.5,
        };
        let points = scatter.run(&mut rand::thread_rng()).unwrap();
        assert!(points.iter().all(|p| *p == Point::new(2.5, 2.5)));
    }

    #[test]
    fn rejects_an_inverted_range() {
        let scatter = Scatter {
            count: 1,
            lo: 1.0,
            hi: -1.0,
        };
        assert!(matches!(
            scatter.run(&mut rand::thread_rng()),
            Err(ScatterError::EmptyRange { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_bounds() {
        let scatter = Scatter {
            count: 1,
            lo: f32::NAN,
            hi: 1.0,
        };
        assert!(matches!(
            scatter.run(&mut rand::thread_rng()),
            Err(ScatterError::BadBound { .. })
        ));
    }
}
