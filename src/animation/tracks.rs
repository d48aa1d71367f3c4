use crate::animation::values::Interpolatable;

/// Typed keyframe storage for one animation channel, linearly interpolated.
///
/// Times are expected to be non-decreasing; the sampler does not reorder them.
/// Only the first `min(times.len(), values.len())` keyframes are sampled.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTrack<T: Interpolatable> {
    pub times: Vec<f32>,
    pub values: Vec<T>,
}

impl<T: Interpolatable> KeyframeTrack<T> {
    #[must_use]
    pub fn new(times: Vec<f32>, values: Vec<T>) -> Self {
        Self { times, values }
    }

    /// Builds a track from a flattened value buffer holding
    /// `T::COMPONENTS` scalars per keyframe. A trailing partial value is dropped.
    #[must_use]
    pub fn from_flat(times: Vec<f32>, flat: &[f32]) -> Self {
        let values = flat
            .chunks_exact(T::COMPONENTS)
            .map(T::from_components)
            .collect();
        Self::new(times, values)
    }

    /// Number of sampleable keyframes.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.times.len().min(self.values.len())
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Samples the track at `time`, or `None` if the track has no keyframes.
    ///
    /// Times before the first keyframe clamp to the first value, times after
    /// the last keyframe clamp to the last value.
    #[must_use]
    pub fn sample(&self, time: f32) -> Option<T> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let times = &self.times[..len];

        // partition_point finds the first index where t > time, i.e. next_index
        let next_idx = times.partition_point(|&t| t <= time);
        let idx = next_idx.saturating_sub(1);

        Some(self.sample_at_frame(times, idx, time))
    }

    fn sample_at_frame(&self, times: &[f32], index: usize, time: f32) -> T {
        let len = times.len();

        if index >= len - 1 {
            return self.values[len - 1];
        }

        let next_idx = index + 1;
        let t0 = times[index];
        let t1 = times[next_idx];
        let dt = t1 - t0;

        // Prevent division by zero
        let t = if dt > 1e-6 { (time - t0) / dt } else { 0.0 };
        let t = t.clamp(0.0, 1.0);

        T::interpolate_linear(self.values[index], self.values[next_idx], t)
    }
}
