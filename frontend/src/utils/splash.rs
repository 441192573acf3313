use std::f64::consts::TAU;
use rand::{rngs::SmallRng, Rng, SeedableRng};

pub const DEFAULT_SPLASH_MS: u64 = 3_000;
pub const FRAME_MS: u64 = 16;

const SPLASH_DURATION_MS: &str = env!("SPLASH_DURATION_MS");

/// Non numeric or empty values fall back to the default.
pub fn parse_duration(raw: &str) -> u64 {
  raw.trim().parse::<u64>().unwrap_or(DEFAULT_SPLASH_MS)
}

pub fn configured_duration() -> u64 {
  parse_duration(SPLASH_DURATION_MS)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplashTimeline {
  pub duration_ms: u64
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashPhase {
  Visible,
  FadingOut,
  Done
}

impl Default for SplashTimeline {
  fn default() -> Self {
    SplashTimeline { duration_ms: DEFAULT_SPLASH_MS }
  }
}

impl SplashTimeline {
  pub fn new(duration_ms: u64) -> Self {
    SplashTimeline { duration_ms }
  }

  /// Logo starts fading at half the duration.
  pub fn fade_at(&self) -> u64 {
    self.duration_ms / 2
  }

  pub fn fade_ms(&self) -> u64 {
    self.duration_ms - self.fade_at()
  }

  pub fn phase(&self, elapsed_ms: u64) -> SplashPhase {
    if elapsed_ms >= self.duration_ms {
      SplashPhase::Done
    } else if elapsed_ms >= self.fade_at() {
      SplashPhase::FadingOut
    } else {
      SplashPhase::Visible
    }
  }

  pub fn progress(&self, elapsed_ms: u64) -> u8 {
    if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
      return 100;
    }
    ((elapsed_ms * 100) / self.duration_ms) as u8
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SplashEvent {
  Completed
}

/// Feeds wall-clock ticks into a timeline and reports completion once.
#[derive(Debug, Clone)]
pub struct SplashDriver {
  timeline: SplashTimeline,
  progress: u8,
  completed: bool
}

impl SplashDriver {
  pub fn new(timeline: SplashTimeline) -> Self {
    SplashDriver { timeline, progress: 0, completed: false }
  }

  pub fn tick(&mut self, elapsed_ms: u64) -> Option<SplashEvent> {
    // clocks can jitter backwards, the readout must not
    self.progress = self.progress.max(self.timeline.progress(elapsed_ms));

    if self.completed || self.timeline.phase(elapsed_ms) != SplashPhase::Done {
      return None;
    }
    self.completed = true;
    Some(SplashEvent::Completed)
  }

  pub fn progress(&self) -> u8 {
    self.progress
  }

  pub fn is_completed(&self) -> bool {
    self.completed
  }
}

/* Decorative particles orbiting the logo.
   r(t) = base_radius + amplitude * sin(phase), angle advances at angular_velocity */
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
  pub base_radius: f64,
  pub angle: f64,
  pub angular_velocity: f64,
  pub amplitude: f64,
  pub frequency: f64,
  pub phase: f64,
  pub size: f64
}

impl Particle {
  fn radius(&self) -> f64 {
    self.base_radius + self.amplitude * self.phase.sin()
  }

  fn advance(&mut self, dt: f64) {
    self.angle = (self.angle + self.angular_velocity * dt).rem_euclid(TAU);
    self.phase = (self.phase + self.frequency * dt).rem_euclid(TAU);
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParticleField {
  pub center: (f64, f64),
  pub particles: Vec<Particle>
}

impl ParticleField {
  pub fn seeded(count: usize, center: (f64, f64), max_radius: f64, seed: u64) -> Self {
    let mut rng = SmallRng::seed_from_u64(seed);
    let particles = (0..count)
      .map(|_| {
        let base_radius = rng.random_range(0.35..0.9) * max_radius;
        Particle {
          base_radius,
          angle: rng.random_range(0.0..TAU),
          angular_velocity: rng.random_range(0.2..1.2) * if rng.random_bool(0.5) { 1.0 } else { -1.0 },
          amplitude: rng.random_range(0.02..0.1) * max_radius,
          frequency: rng.random_range(0.5..3.0),
          phase: rng.random_range(0.0..TAU),
          size: rng.random_range(1.5..4.0)
        }
      })
      .collect();
    ParticleField { center, particles }
  }

  pub fn step(&mut self, dt: f64) {
    for p in self.particles.iter_mut() {
      p.advance(dt);
    }
  }

  pub fn positions(&self) -> Vec<(f64, f64, f64)> {
    let (cx, cy) = self.center;
    self.particles.iter()
      .map(|p| {
        let r = p.radius();
        (cx + r * p.angle.cos(), cy + r * p.angle.sin(), p.size)
      })
      .collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn completes_exactly_once_after_duration() {
    let mut driver = SplashDriver::new(SplashTimeline::new(3_000));
    let mut fired_at = vec![];
    let mut now = 0;
    while now <= 6_000 {
      if let Some(SplashEvent::Completed) = driver.tick(now) {
        fired_at.push(now);
      }
      now += FRAME_MS;
    }
    assert_eq!(fired_at.len(), 1);
    assert!(fired_at[0] >= 3_000);
    assert!(fired_at[0] < 3_000 + FRAME_MS);
    assert!(driver.is_completed());
  }

  #[test]
  fn no_completion_before_duration() {
    let mut driver = SplashDriver::new(SplashTimeline::new(500));
    for now in [0, 100, 250, 499] {
      assert_eq!(driver.tick(now), None);
    }
    assert_eq!(driver.tick(500), Some(SplashEvent::Completed));
    assert_eq!(driver.tick(501), None);
  }

  #[test]
  fn progress_is_monotonic_and_clamped() {
    let mut driver = SplashDriver::new(SplashTimeline::default());
    let mut last = 0;
    for now in [0, 300, 1500, 1200, 2999, 3000, 9000] {
      driver.tick(now);
      assert!(driver.progress() >= last);
      last = driver.progress();
    }
    assert_eq!(last, 100);
  }

  #[test]
  fn phases_follow_the_half_way_fade() {
    let timeline = SplashTimeline::new(3_000);
    assert_eq!(timeline.fade_at(), 1_500);
    assert_eq!(timeline.fade_ms(), 1_500);
    assert_eq!(timeline.phase(0), SplashPhase::Visible);
    assert_eq!(timeline.phase(1_499), SplashPhase::Visible);
    assert_eq!(timeline.phase(1_500), SplashPhase::FadingOut);
    assert_eq!(timeline.phase(3_000), SplashPhase::Done);
  }

  #[test]
  fn zero_duration_completes_immediately() {
    let mut driver = SplashDriver::new(SplashTimeline::new(0));
    assert_eq!(driver.tick(0), Some(SplashEvent::Completed));
    assert_eq!(driver.progress(), 100);
  }

  #[test]
  fn particle_field_is_reproducible_and_bounded() {
    let mut a = ParticleField::seeded(24, (50.0, 50.0), 40.0, 9);
    let mut b = ParticleField::seeded(24, (50.0, 50.0), 40.0, 9);
    for _ in 0..120 {
      a.step(FRAME_MS as f64 / 1_000.0);
      b.step(FRAME_MS as f64 / 1_000.0);
    }
    assert_eq!(a, b);

    for (x, y, size) in a.positions() {
      let dist = ((x - 50.0).powi(2) + (y - 50.0).powi(2)).sqrt();
      assert!(dist <= 40.0, "particle escaped to {}", dist);
      assert!(size >= 1.5 && size < 4.0);
    }
  }

  #[test]
  fn duration_parsing_falls_back() {
    assert_eq!(parse_duration("1200"), 1_200);
    assert_eq!(parse_duration(" 0 "), 0);
    assert_eq!(parse_duration(""), DEFAULT_SPLASH_MS);
    assert_eq!(parse_duration("soon"), DEFAULT_SPLASH_MS);
  }

  #[test]
  fn particles_move_between_frames() {
    let mut field = ParticleField::seeded(4, (0.0, 0.0), 10.0, 1);
    let before = field.positions();
    field.step(0.5);
    assert_ne!(before, field.positions());
  }
}
