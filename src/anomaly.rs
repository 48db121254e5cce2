//! Polarity outliers within one article set.

use serde::Serialize;

use crate::news::Article;

/// Default band half-width, in standard deviations.
pub const DEFAULT_DEVIATION_THRESHOLD: f64 = 1.5;

// Rounding noise in the mean of identical values.
const SPREAD_EPSILON: f64 = 1e-12;

/// Mean and population standard deviation of polarity across a set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PolarityStats {
    pub mean: f64,
    pub std_dev: f64,
    pub threshold: f64,
}

impl PolarityStats {
    /// `None` for an empty set.
    pub fn compute(polarities: &[f64], threshold: f64) -> Option<Self> {
        if polarities.is_empty() {
            return None;
        }
        let n = polarities.len() as f64;
        let mean = polarities.iter().sum::<f64>() / n;
        let var = polarities.iter().map(|p| (p - mean).powi(2)).sum::<f64>() / n;
        Some(Self {
            mean,
            std_dev: var.sqrt(),
            threshold,
        })
    }

    /// Inclusive band outside which a polarity counts as an outlier.
    pub fn band(&self) -> (f64, f64) {
        let half = self.threshold * self.std_dev;
        (self.mean - half, self.mean + half)
    }

    /// Always false for a degenerate (constant) set.
    pub fn is_outlier(&self, polarity: f64) -> bool {
        if self.std_dev <= SPREAD_EPSILON {
            return false;
        }
        let (lo, hi) = self.band();
        polarity < lo || polarity > hi
    }
}

/// Flags each article whose polarity leaves the `mean ± threshold·sd` band.
///
/// The result is parallel to `articles`. Upstream `is_anomaly` flags take
/// precedence; the local statistic fills in where the backend sent none.
pub fn flag_anomalies(articles: &[Article], threshold: f64) -> Vec<bool> {
    let polarities: Vec<f64> = articles.iter().map(polarity_of).collect();
    let stats = PolarityStats::compute(&polarities, threshold);

    #[cfg(feature = "tracing")]
    {
        if let Some(s) = &stats {
            tracing::debug!(mean = s.mean, std_dev = s.std_dev, "polarity stats");
        }
    }

    articles
        .iter()
        .zip(&polarities)
        .map(|(a, &p)| {
            a.is_anomaly
                .unwrap_or_else(|| stats.is_some_and(|s| s.is_outlier(p)))
        })
        .collect()
}

/// The upstream polarity score when present, otherwise `positive - negative`.
pub fn polarity_of(article: &Article) -> f64 {
    article
        .polarity_score
        .unwrap_or_else(|| article.sentiment.polarity())
}
