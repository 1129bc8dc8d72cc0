//! Spinning category wheel: random selection and rotation targeting
//!
//! The wheel owns its selection state exclusively:
//! - Which segment wins a spin (uniform over all segments)
//! - The accumulated rotation angle, strictly increasing across spins
//! - The eased animation between the old and new rotation
//!
//! Time does not live here. The caller advances the animation with a
//! progress value in `[0, 1]` and calls [`Wheel::finish`] once when the
//! spin duration has elapsed, which yields the winning index exactly once.

use rand::Rng;
use tracing::debug;

/// Angle where the segment gradient starts, matching the wheel's visual
/// frame: segment 0 begins at 90 degrees, pointer fixed at 0 (12 o'clock).
const GRADIENT_ORIGIN_DEG: f64 = 90.0;

/// Minimum number of extra full revolutions per spin
const MIN_REVOLUTIONS: u32 = 5;

/// Upper bound (exclusive) on additional random revolutions
const EXTRA_REVOLUTIONS: u32 = 3;

/// An in-flight spin: where it started, where it will stop, and who wins
#[derive(Debug, Clone, Copy)]
struct ActiveSpin {
    winning_index: usize,
    start_rotation: f64,
    target_rotation: f64,
}

/// Declarative view of the wheel for the rendering layer
#[derive(Debug, Clone, PartialEq)]
pub struct WheelView {
    /// Segment labels in display order
    pub segments: Vec<String>,
    /// Current rotation in degrees (accumulated, not normalized)
    pub rotation: f64,
    /// Whether a spin is in flight
    pub spinning: bool,
    /// Index of the segment currently under the pointer
    pub pointer_index: usize,
}

/// The category wheel
#[derive(Debug, Clone)]
pub struct Wheel {
    segments: Vec<String>,
    rotation: f64,
    spin: Option<ActiveSpin>,
}

impl Wheel {
    /// Create a wheel with one segment per label, in display order.
    ///
    /// `segments` must be non-empty; the question bank guarantees this.
    pub fn new(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty());
        Self {
            segments,
            rotation: 0.0,
            spin: None,
        }
    }

    /// Degrees covered by one segment (360 for a single-segment wheel)
    pub fn segment_angle(&self) -> f64 {
        360.0 / self.segments.len() as f64
    }

    /// Angle of segment `index`'s center in the wheel's own frame
    fn segment_center(&self, index: usize) -> f64 {
        GRADIENT_ORIGIN_DEG + index as f64 * self.segment_angle() + self.segment_angle() / 2.0
    }

    /// Start a spin: pick a uniformly random winner and compute the
    /// rotation that parks its segment center under the pointer.
    ///
    /// Returns `false` without touching any state if a spin is already
    /// in flight.
    pub fn spin<R: Rng>(&mut self, rng: &mut R) -> bool {
        if self.spin.is_some() {
            debug!("spin requested while already spinning, ignoring");
            return false;
        }

        let winning_index = rng.gen_range(0..self.segments.len());

        // The pointer sits at 0 degrees, so the wheel must rotate by the
        // negation of the winning center, normalized to [0, 360).
        let target_normalized = (-self.segment_center(winning_index)).rem_euclid(360.0);
        let diff = (target_normalized - self.rotation.rem_euclid(360.0)).rem_euclid(360.0);

        let revolutions = MIN_REVOLUTIONS + rng.gen_range(0..EXTRA_REVOLUTIONS);
        let target_rotation = self.rotation + f64::from(revolutions) * 360.0 + diff;

        debug!(
            winning_index,
            target_rotation, revolutions, "spin started"
        );

        self.spin = Some(ActiveSpin {
            winning_index,
            start_rotation: self.rotation,
            target_rotation,
        });
        true
    }

    /// Advance the animation to `progress` in `[0, 1]`.
    ///
    /// Values are clamped; calling this with no spin in flight is a no-op.
    pub fn set_progress(&mut self, progress: f64) {
        if let Some(spin) = self.spin {
            let t = progress.clamp(0.0, 1.0);
            let eased = ease_out_cubic(t);
            self.rotation = spin.start_rotation + (spin.target_rotation - spin.start_rotation) * eased;
        }
    }

    /// Complete the in-flight spin: snap to the target rotation, clear the
    /// spinning flag, and return the winning index.
    ///
    /// Returns `None` when no spin is in flight, so a stale timer firing
    /// after a reset is harmless.
    pub fn finish(&mut self) -> Option<usize> {
        let spin = self.spin.take()?;
        self.rotation = spin.target_rotation;
        debug!(winning_index = spin.winning_index, "spin finished");
        Some(spin.winning_index)
    }

    /// Whether a spin is in flight
    pub fn is_spinning(&self) -> bool {
        self.spin.is_some()
    }

    /// Current rotation in degrees (accumulated across spins)
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Rotation the in-flight spin will stop at, if any
    pub fn target_rotation(&self) -> Option<f64> {
        self.spin.map(|s| s.target_rotation)
    }

    /// The segment currently under the pointer for the current rotation
    pub fn pointer_index(&self) -> usize {
        // Invert the center formula: find the segment whose span contains
        // the pointer once the current rotation is applied.
        let wheel_angle = (-self.rotation - GRADIENT_ORIGIN_DEG).rem_euclid(360.0);
        let index = (wheel_angle / self.segment_angle()) as usize;
        index.min(self.segments.len() - 1)
    }

    /// Emit the declarative view model for the rendering layer
    pub fn view(&self) -> WheelView {
        WheelView {
            segments: self.segments.clone(),
            rotation: self.rotation,
            spinning: self.is_spinning(),
            pointer_index: self.pointer_index(),
        }
    }
}

/// Ease-out cubic, the TUI stand-in for the original CSS spin curve
fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn wheel(n: usize) -> Wheel {
        Wheel::new((0..n).map(|i| format!("cat-{}", i)).collect())
    }

    #[test]
    fn test_selection_is_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut w = wheel(8);
        let mut counts = [0usize; 8];

        let trials = 8000;
        for _ in 0..trials {
            assert!(w.spin(&mut rng));
            let idx = w.finish().unwrap();
            counts[idx] += 1;
        }

        // Every segment should land close to trials / 8 = 1000.
        for (i, &count) in counts.iter().enumerate() {
            assert!(
                (700..1300).contains(&count),
                "segment {} won {} times out of {}",
                i,
                count,
                trials
            );
        }
    }

    #[test]
    fn test_rotation_is_monotonic_with_min_revolutions() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut w = wheel(5);

        for _ in 0..50 {
            let before = w.rotation();
            assert!(w.spin(&mut rng));
            let target = w.target_rotation().unwrap();
            assert!(target > before, "target {} not past {}", target, before);
            assert!(
                target - before >= f64::from(super::MIN_REVOLUTIONS) * 360.0,
                "delta {} below minimum revolutions",
                target - before
            );
            w.finish().unwrap();
        }
    }

    #[test]
    fn test_winner_lands_under_pointer() {
        let mut rng = StdRng::seed_from_u64(99);
        for n in [1usize, 2, 3, 7, 10] {
            let mut w = wheel(n);
            for _ in 0..20 {
                assert!(w.spin(&mut rng));
                let winner = w.finish().unwrap();
                assert_eq!(
                    w.pointer_index(),
                    winner,
                    "pointer drifted off winner for {} segments",
                    n
                );

                // The winning center, rotated, must sit at the pointer.
                let center = w.segment_center(winner);
                let at_pointer = (center + w.rotation()).rem_euclid(360.0);
                assert!(
                    at_pointer < 1e-6 || at_pointer > 360.0 - 1e-6,
                    "center off pointer by {} degrees",
                    at_pointer
                );
            }
        }
    }

    #[test]
    fn test_spin_while_spinning_is_rejected() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut w = wheel(4);

        assert!(w.spin(&mut rng));
        let target = w.target_rotation().unwrap();

        assert!(!w.spin(&mut rng));
        assert_eq!(w.target_rotation().unwrap(), target);

        // Exactly one reveal comes out of one spin.
        assert!(w.finish().is_some());
        assert!(w.finish().is_none());
    }

    #[test]
    fn test_single_segment_wheel() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut w = wheel(1);

        assert_eq!(w.segment_angle(), 360.0);
        assert!(w.spin(&mut rng));
        assert_eq!(w.finish(), Some(0));
        assert_eq!(w.pointer_index(), 0);
    }

    #[test]
    fn test_progress_is_monotonic_and_bounded() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut w = wheel(6);
        assert!(w.spin(&mut rng));

        let start = w.rotation();
        let target = w.target_rotation().unwrap();
        let mut last = start;
        for step in 0..=20 {
            w.set_progress(f64::from(step) / 20.0);
            assert!(w.rotation() >= last);
            assert!(w.rotation() <= target);
            last = w.rotation();
        }

        // Over-driving progress clamps at the target.
        w.set_progress(1.5);
        assert!((w.rotation() - target).abs() < 1e-9);
    }

    #[test]
    fn test_finish_without_spin_is_noop() {
        let mut w = wheel(3);
        assert!(w.finish().is_none());
        assert_eq!(w.rotation(), 0.0);
    }

    #[test]
    fn test_view_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut w = wheel(4);
        assert_eq!(w.view(), w.view());

        w.spin(&mut rng);
        w.set_progress(0.4);
        assert_eq!(w.view(), w.view());
    }
}
