// Keyframe tables and interpolation

use std::sync::Arc;

use crate::core::math::{lerp, smoothstep};

/// Errors raised while building a keyframe table
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KeyframeError {
    #[error("Keyframe table needs at least 2 frames, got {0}")]
    TooFewFrames(usize),

    #[error("Keyframe table has an empty state vector")]
    EmptyState,

    #[error("Frame {index} has {actual} values, expected {expected}")]
    InconsistentWidth {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Frame {index} has a non-finite time")]
    NonFiniteTime { index: usize },

    #[error("Frame {index} time {time} does not come after {previous}")]
    NonIncreasingTime {
        index: usize,
        previous: f32,
        time: f32,
    },
}

/// One authored sample of a state vector
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub values: Vec<f32>,
    pub time: f32,
}

impl Frame {
    pub fn new(values: Vec<f32>, time: f32) -> Self {
        Self { values, time }
    }
}

/// An ordered, validated, immutable sequence of frames
///
/// Every frame has the same number of values and times are strictly
/// increasing. Tables are built once and shared read-only between actors.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeTable {
    frames: Vec<Frame>,
}

impl KeyframeTable {
    /// Validate and build a table from frames
    pub fn new(frames: Vec<Frame>) -> Result<Self, KeyframeError> {
        if frames.len() < 2 {
            return Err(KeyframeError::TooFewFrames(frames.len()));
        }

        let width = frames[0].values.len();
        if width == 0 {
            return Err(KeyframeError::EmptyState);
        }

        for (index, frame) in frames.iter().enumerate() {
            if frame.values.len() != width {
                return Err(KeyframeError::InconsistentWidth {
                    index,
                    expected: width,
                    actual: frame.values.len(),
                });
            }
            if !frame.time.is_finite() {
                return Err(KeyframeError::NonFiniteTime { index });
            }
            if index > 0 {
                let previous = frames[index - 1].time;
                if frame.time <= previous {
                    return Err(KeyframeError::NonIncreasingTime {
                        index,
                        previous,
                        time: frame.time,
                    });
                }
            }
        }

        Ok(Self { frames })
    }

    /// Build a table from authored rows whose last column is the time
    pub fn from_rows<R: AsRef<[f32]>>(rows: &[R]) -> Result<Self, KeyframeError> {
        let mut frames = Vec::with_capacity(rows.len());
        for row in rows {
            let row = row.as_ref();
            match row.split_last() {
                Some((&time, values)) => frames.push(Frame::new(values.to_vec(), time)),
                None => return Err(KeyframeError::EmptyState),
            }
        }
        Self::new(frames)
    }

    pub fn first(&self) -> &Frame {
        &self.frames[0]
    }

    pub fn last(&self) -> &Frame {
        &self.frames[self.frames.len() - 1]
    }

    /// Time of the final keyframe (clip duration when the first frame is at 0)
    pub fn end_time(&self) -> f32 {
        self.last().time
    }

    /// Index `i` such that `frames[i].time < t <= frames[i + 1].time`
    ///
    /// Forward scan from the start; callers clamp `t` into the open interval
    /// `(first.time, last.time)` beforehand so the scan always terminates.
    fn interval_index(&self, t: f32) -> usize {
        let mut i = 0;
        while i + 2 < self.frames.len() && t > self.frames[i + 1].time {
            i += 1;
        }
        i
    }

    /// Fraction of interval `i` covered at time `t`
    fn tau(&self, t: f32, i: usize) -> f32 {
        let t0 = self.frames[i].time;
        let t1 = self.frames[i + 1].time;
        (t - t0) / (t1 - t0)
    }

    /// Shared evaluation skeleton: clamp outside the table, otherwise blend
    /// the two neighbouring frames with `remap(tau)`
    fn sample(&self, t: f32, remap: impl Fn(f32) -> f32) -> Vec<f32> {
        if t <= self.first().time {
            return self.first().values.clone();
        }
        if t >= self.last().time {
            return self.last().values.clone();
        }

        let i = self.interval_index(t);
        let tau = remap(self.tau(t, i));
        let (from, to) = (&self.frames[i].values, &self.frames[i + 1].values);
        from.iter()
            .zip(to.iter())
            .map(|(&a, &b)| lerp(a, b, tau))
            .collect()
    }
}

/// Strategy that turns a keyframe table and a query time into a state vector
///
/// Implementations are pure: the same `t` always yields the same output.
pub trait Interpolator: std::fmt::Debug + Send + Sync {
    /// Interpolated state vector at time `t`
    fn evaluate(&self, t: f32) -> Vec<f32>;

    /// The table this interpolator reads from
    fn table(&self) -> &KeyframeTable;

    /// Whether `t` has reached the final keyframe
    fn is_finished(&self, t: f32) -> bool {
        t >= self.table().end_time()
    }
}

/// Piecewise-linear interpolation between neighbouring keyframes
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    table: Arc<KeyframeTable>,
}

impl LinearInterpolator {
    pub fn new(table: Arc<KeyframeTable>) -> Self {
        Self { table }
    }
}

impl Interpolator for LinearInterpolator {
    fn evaluate(&self, t: f32) -> Vec<f32> {
        self.table.sample(t, |tau| tau)
    }

    fn table(&self) -> &KeyframeTable {
        &self.table
    }
}

/// Ease-in/ease-out interpolation: smoothstep applied to each interval
#[derive(Debug, Clone)]
pub struct EaseInOutInterpolator {
    table: Arc<KeyframeTable>,
}

impl EaseInOutInterpolator {
    pub fn new(table: Arc<KeyframeTable>) -> Self {
        Self { table }
    }
}

impl Interpolator for EaseInOutInterpolator {
    fn evaluate(&self, t: f32) -> Vec<f32> {
        self.table.sample(t, smoothstep)
    }

    fn table(&self) -> &KeyframeTable {
        &self.table
    }
}
