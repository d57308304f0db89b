//! Constrained random pastel color generation.
//!
//! Every channel is drawn uniformly inside its configured bounds. A draw is
//! only accepted when the distance between its brightest and dimmest channel
//! is at most [`MIN_COLOR_DIFF`], which keeps the result muted without being
//! gray. Rejected draws are discarded and all three channels are drawn again.

use log::{debug, warn};
use rand::RngExt;

use crate::color::Rgb;

pub const DEFAULT_MAX_VALUE: u8 = 230;
pub const DEFAULT_MIN_VALUE: u8 = 90;

/// Largest accepted spread between the channels of one color.
pub const MIN_COLOR_DIFF: u16 = 30;
/// Upper spread limit. Always looser than [`MIN_COLOR_DIFF`], so it never decides acceptance.
pub const MAX_COLOR_DIFF: u16 = 130;

const _: () = assert!(MIN_COLOR_DIFF < MAX_COLOR_DIFF);

pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

/// A source of uniform draws in `[0, 1)`.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: RngExt> UnitSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    R,
    G,
    B,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::R, Channel::G, Channel::B];
}

/// One bound value per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChannelBounds {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ChannelBounds {
    pub const fn splat(value: u8) -> Self {
        Self {
            r: value,
            g: value,
            b: value,
        }
    }

    pub fn get(&self, channel: Channel) -> u8 {
        match channel {
            Channel::R => self.r,
            Channel::G => self.g,
            Channel::B => self.b,
        }
    }
}

/// Generates pastel colors inside fixed per-channel bounds.
///
/// Bounds are set once at construction. `min > max` is tolerated: the draw
/// interval never drops below 1.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorGenerator {
    max_limit: ChannelBounds,
    min_limit: ChannelBounds,
    max_attempts: u32,
}

impl Default for ColorGenerator {
    fn default() -> Self {
        Self::from_bounds(
            ChannelBounds::splat(DEFAULT_MAX_VALUE),
            ChannelBounds::splat(DEFAULT_MIN_VALUE),
        )
    }
}

impl ColorGenerator {
    /// Each absent bound falls back to its default on its own. `Some(0)` is a real bound.
    pub fn new(
        r_max: Option<u8>,
        g_max: Option<u8>,
        b_max: Option<u8>,
        r_min: Option<u8>,
        g_min: Option<u8>,
        b_min: Option<u8>,
    ) -> Self {
        Self::from_bounds(
            ChannelBounds {
                r: r_max.unwrap_or(DEFAULT_MAX_VALUE),
                g: g_max.unwrap_or(DEFAULT_MAX_VALUE),
                b: b_max.unwrap_or(DEFAULT_MAX_VALUE),
            },
            ChannelBounds {
                r: r_min.unwrap_or(DEFAULT_MIN_VALUE),
                g: g_min.unwrap_or(DEFAULT_MIN_VALUE),
                b: b_min.unwrap_or(DEFAULT_MIN_VALUE),
            },
        )
    }

    pub fn from_bounds(max_limit: ChannelBounds, min_limit: ChannelBounds) -> Self {
        Self {
            max_limit,
            min_limit,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Caps the rejection loop. The draw made on the last attempt is accepted as is.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn max_limit(&self) -> ChannelBounds {
        self.max_limit
    }

    pub fn min_limit(&self) -> ChannelBounds {
        self.min_limit
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Draws one channel value in `[min, min + max(max - min, 1)]`.
    ///
    /// Not clamped: with `min == max == 255` the result can be 256.
    pub fn channel_value<S: UnitSource + ?Sized>(&self, channel: Channel, rng: &mut S) -> u16 {
        let max = i32::from(self.max_limit.get(channel));
        let min = i32::from(self.min_limit.get(channel));
        let interval = (max - min).max(1);
        let drawn = (rng.next_unit() * f64::from(interval)).round() as u16;
        min as u16 + drawn
    }

    /// Draws colors until one passes the spread check, or the attempt cap is hit.
    pub fn generate<S: UnitSource + ?Sized>(&self, rng: &mut S) -> Rgb {
        let mut attempt = 1;
        loop {
            let values = Channel::ALL.map(|channel| self.channel_value(channel, rng));
            let spread = spread(values);
            if spread <= MIN_COLOR_DIFF {
                return pack(values);
            }
            if attempt >= self.max_attempts {
                warn!(
                    "no color within spread {MIN_COLOR_DIFF} after {attempt} attempts, accepting {values:?}"
                );
                return pack(values);
            }
            debug!("rejected {values:?}: spread {spread} > {MIN_COLOR_DIFF}");
            attempt += 1;
        }
    }

    pub fn generate_hex<S: UnitSource + ?Sized>(&self, rng: &mut S) -> String {
        self.generate(rng).to_hex()
    }
}

fn spread(values: [u16; 3]) -> u16 {
    let max = values.iter().copied().max().unwrap_or(0);
    let min = values.iter().copied().min().unwrap_or(0);
    max - min
}

fn pack([r, g, b]: [u16; 3]) -> Rgb {
    let byte = |value: u16| u8::try_from(value).unwrap_or(u8::MAX);
    Rgb::new(byte(r), byte(g), byte(b))
}
