//! Summary statistics over repeated timings

/// Summary of a set of timings, in milliseconds
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SampleStats {
    /// Number of timed runs
    pub count: usize,
    /// Fastest run
    pub min: f64,
    /// Middle run (mean of the two middle runs for an even count)
    pub median: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Slowest run
    pub max: f64,
}

impl SampleStats {
    /// Summarize `samples`; `None` when there are none
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(f64::total_cmp);

        let count = sorted.len();
        let mid = count / 2;
        let median = if count % 2 == 0 {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        } else {
            sorted[mid]
        };

        Some(Self {
            count,
            min: sorted[0],
            median,
            mean: sorted.iter().sum::<f64>() / count as f64,
            max: sorted[count - 1],
        })
    }
}
