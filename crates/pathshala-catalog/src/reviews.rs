//! Rating summary for the course detail page.

use pathshala_core::Review;

/// Review count, average, and star distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewSummary {
    count: usize,
    /// Index 0 holds one-star reviews, index 4 five-star.
    by_stars: [usize; 5],
    total_stars: u32,
}

impl ReviewSummary {
    /// Ratings outside 1..=5 are ignored; the catalog rejects them at load.
    pub fn from_reviews(reviews: &[Review]) -> Self {
        let mut by_stars = [0usize; 5];
        let mut total_stars = 0u32;
        let mut count = 0usize;
        for review in reviews.iter().filter(|r| (1..=5).contains(&r.rating)) {
            by_stars[usize::from(review.rating - 1)] += 1;
            total_stars += u32::from(review.rating);
            count += 1;
        }
        Self {
            count,
            by_stars,
            total_stars,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Mean rating, `None` without reviews.
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| f64::from(self.total_stars) / self.count as f64)
    }

    /// Reviews with exactly `stars` stars. Zero for anything outside 1..=5.
    pub fn count_for(&self, stars: u8) -> usize {
        match stars {
            1..=5 => self.by_stars[usize::from(stars - 1)],
            _ => 0,
        }
    }

    /// Share of reviews with `stars` stars, as a percentage. Zero without reviews.
    pub fn percentage_for(&self, stars: u8) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        self.count_for(stars) as f64 * 100.0 / self.count as f64
    }

    /// `(stars, count)` from five stars down to one, the order the detail page lists them.
    pub fn distribution(&self) -> [(u8, usize); 5] {
        [5, 4, 3, 2, 1].map(|stars| (stars, self.count_for(stars)))
    }
}
