use crate::models::trip::Dataset;
use log::info;
use std::time::Instant;

/// A read-only statistic computed over a [`Dataset`].
/// Implementors must not fail on an empty dataset; they report "no data" in
/// their `Output` instead.
pub trait Aggregation {
    type Output;

    /// Label used in logs.
    fn name(&self) -> &'static str;

    /// Computes the statistic. Pure: same dataset, same output.
    fn compute(&self, dataset: &Dataset) -> Self::Output;

    /// Computes the statistic and logs how long it took.
    fn run(&self, dataset: &Dataset) -> Self::Output {
        let started = Instant::now();
        let out = self.compute(dataset);
        info!(
            "{} over {} trips took {:?}",
            self.name(),
            dataset.len(),
            started.elapsed()
        );
        out
    }
}
