//! Floating/swinging icon animation assignment.
//!
//! Every icon always carries exactly one animation. At startup each icon gets
//! a random profile, staggered so they don't start in lockstep; afterwards a
//! periodic tick reassigns one random icon.

use crate::constants::ICON_STAGGER_MS;
use crate::error::CoreError;
use rand::prelude::*;

/// Uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

/// Deterministic source for native runs and tests.
pub struct SeededRandom(StdRng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationProfile {
    pub name: &'static str,
    pub duration_s: (f32, f32),
    pub delay_s: (f32, f32),
}

pub const DEFAULT_PROFILES: [AnimationProfile; 5] = [
    AnimationProfile {
        name: "icon-float-1",
        duration_s: (3.0, 5.0),
        delay_s: (0.0, 2.0),
    },
    AnimationProfile {
        name: "icon-float-2",
        duration_s: (3.5, 5.5),
        delay_s: (0.0, 1.5),
    },
    AnimationProfile {
        name: "icon-float-3",
        duration_s: (2.5, 4.5),
        delay_s: (0.0, 2.0),
    },
    AnimationProfile {
        name: "icon-float-4",
        duration_s: (3.0, 5.0),
        delay_s: (0.0, 1.8),
    },
    AnimationProfile {
        name: "icon-swing",
        duration_s: (4.0, 6.0),
        delay_s: (0.0, 2.5),
    },
];

#[derive(Clone, Debug, PartialEq)]
pub struct IconAnimation {
    pub name: &'static str,
    pub duration_s: f32,
    pub delay_s: f32,
}

impl IconAnimation {
    pub fn to_css(&self) -> String {
        format!(
            "{} {}s ease-in-out {}s infinite",
            self.name, self.duration_s, self.delay_s
        )
    }
}

/// `floor(r * len)`, kept in range even if a source returns exactly 1.0.
#[inline]
pub fn pick_index(len: usize, rng: &mut impl RandomSource) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let i = (rng.next_unit() * len as f64).floor() as usize;
    Some(i.min(len - 1))
}

#[inline]
fn sample_range(range: (f32, f32), rng: &mut impl RandomSource) -> f32 {
    range.0 + rng.next_unit() as f32 * (range.1 - range.0)
}

#[derive(Clone, Debug)]
pub struct IconPalette {
    profiles: Vec<AnimationProfile>,
}

impl Default for IconPalette {
    fn default() -> Self {
        Self {
            profiles: DEFAULT_PROFILES.to_vec(),
        }
    }
}

impl IconPalette {
    pub fn new(profiles: Vec<AnimationProfile>) -> Result<Self, CoreError> {
        if profiles.is_empty() {
            return Err(CoreError::EmptyPalette);
        }
        for p in &profiles {
            for (field, (min, max)) in [("duration", p.duration_s), ("delay", p.delay_s)] {
                if min > max {
                    return Err(CoreError::InvertedRange {
                        name: p.name.to_string(),
                        field,
                        min,
                        max,
                    });
                }
            }
        }
        Ok(Self { profiles })
    }

    pub fn profiles(&self) -> &[AnimationProfile] {
        &self.profiles
    }

    /// Draws three samples: profile, duration, delay.
    pub fn pick(&self, rng: &mut impl RandomSource) -> IconAnimation {
        let i = pick_index(self.profiles.len(), rng).unwrap_or(0);
        let p = &self.profiles[i];
        IconAnimation {
            name: p.name,
            duration_s: sample_range(p.duration_s, rng),
            delay_s: sample_range(p.delay_s, rng),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledAnimation {
    pub icon: usize,
    pub delay_ms: i32,
    pub animation: IconAnimation,
}

pub struct IconRandomizer<R: RandomSource> {
    palette: IconPalette,
    rng: R,
    active: Vec<Option<IconAnimation>>,
}

impl<R: RandomSource> IconRandomizer<R> {
    pub fn new(palette: IconPalette, rng: R) -> Self {
        Self {
            palette,
            rng,
            active: Vec::new(),
        }
    }

    /// One assignment per icon, icon `i` delayed by `i * ICON_STAGGER_MS`.
    pub fn initial_schedule(&mut self, icon_count: usize) -> Vec<ScheduledAnimation> {
        self.active = vec![None; icon_count];
        (0..icon_count)
            .map(|icon| {
                let animation = self.palette.pick(&mut self.rng);
                self.active[icon] = Some(animation.clone());
                ScheduledAnimation {
                    icon,
                    delay_ms: icon as i32 * ICON_STAGGER_MS,
                    animation,
                }
            })
            .collect()
    }

    /// Pick one of the `icon_count` icons currently in the document and give
    /// it a fresh animation. `None` when there are no icons.
    pub fn reassign(&mut self, icon_count: usize) -> Option<(usize, IconAnimation)> {
        let icon = pick_index(icon_count, &mut self.rng)?;
        let animation = self.palette.pick(&mut self.rng);
        self.active.resize(icon_count, None);
        self.active[icon] = Some(animation.clone());
        Some((icon, animation))
    }

    pub fn active(&self, icon: usize) -> Option<&IconAnimation> {
        self.active.get(icon).and_then(|a| a.as_ref())
    }
}
