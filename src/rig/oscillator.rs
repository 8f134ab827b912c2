/// A single sine oscillator: a pure function of elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oscillator {
    /// Angular frequency multiplier applied to elapsed seconds.
    pub frequency: f32,
    /// Phase offset in radians.
    pub phase: f32,
}

impl Oscillator {
    #[must_use]
    pub const fn new(frequency: f32, phase: f32) -> Self {
        Self { frequency, phase }
    }

    /// Signal value at elapsed time `time`, in [-1, 1].
    #[inline]
    #[must_use]
    pub fn sample(self, time: f32) -> f32 {
        (time * self.frequency + self.phase).sin()
    }
}

/// The fixed set of idle-motion oscillators.
///
/// The frequencies are deliberately detuned against each other so the
/// cycles never line up into synchronized, mechanical-looking motion; the
/// body and leg cycles share a frequency but are held apart by phase.
#[derive(Debug, Clone, PartialEq)]
pub struct OscillatorBank {
    /// Head/neck breathing cycle.
    pub head: Oscillator,
    /// Spine lean cycle.
    pub spine: Oscillator,
    /// Pelvis vertical bob cycle.
    pub body: Oscillator,
    /// Elbow bend/extend cycle.
    pub arm: Oscillator,
    /// Thigh/calf flex cycle.
    pub leg: Oscillator,
}

impl Default for OscillatorBank {
    fn default() -> Self {
        Self {
            head: Oscillator::new(0.7, 0.0),
            spine: Oscillator::new(1.0, 0.0),
            body: Oscillator::new(1.3, 0.0),
            arm: Oscillator::new(1.1, 0.5),
            leg: Oscillator::new(1.3, 1.0),
        }
    }
}

impl OscillatorBank {
    /// Evaluates every oscillator at the same instant.
    #[must_use]
    pub fn sample(&self, time: f32) -> OscillatorFrame {
        OscillatorFrame {
            head: self.head.sample(time),
            spine: self.spine.sample(time),
            body: self.body.sample(time),
            arm: self.arm.sample(time),
            leg: self.leg.sample(time),
        }
    }
}

/// All oscillator values for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorFrame {
    pub head: f32,
    pub spine: f32,
    pub body: f32,
    pub arm: f32,
    pub leg: f32,
}
