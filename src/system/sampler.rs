use super::error::SampleError;
use super::snapshot::SystemSample;

/// Source of system metrics. The production implementation is
/// [`SysinfoSampler`](super::collector::SysinfoSampler); tests inject fakes.
pub trait MetricSampler {
    fn sample(&mut self) -> Result<SystemSample, SampleError>;
}

impl<S: MetricSampler + ?Sized> MetricSampler for Box<S> {
    fn sample(&mut self) -> Result<SystemSample, SampleError> {
        (**self).sample()
    }
}
