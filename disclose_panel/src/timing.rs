// Copyright 2025 the Disclose Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animation-timing detection.
//!
//! A panel animates with either a CSS transition or a CSS keyframe animation,
//! never both. [`classify`] reads the computed durations and reports which
//! completion event the state machine should wait for.

use alloc::string::String;

use disclose_core::dom::Dom;

bitflags::bitflags! {
    /// Which kinds of CSS motion have a non-zero duration.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Motion: u8 {
        /// `transition-duration` is non-zero.
        const TRANSITION = 0b0000_0001;
        /// `animation-duration` is non-zero.
        const ANIMATION  = 0b0000_0010;
    }
}

/// How a panel transition completes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TimingMode {
    /// No motion; apply the final state immediately.
    None,
    /// Wait for `transitionend`.
    Transition,
    /// Wait for `animationend`.
    Animation,
    /// Misconfigured; treated like [`TimingMode::None`] after a warning.
    Both,
}

impl TimingMode {
    /// The event to wait for, if any.
    pub const fn end_event(self) -> Option<EndEvent> {
        match self {
            Self::Transition => Some(EndEvent::TransitionEnd),
            Self::Animation => Some(EndEvent::AnimationEnd),
            Self::None | Self::Both => None,
        }
    }
}

impl From<Motion> for TimingMode {
    fn from(motion: Motion) -> Self {
        match (
            motion.contains(Motion::TRANSITION),
            motion.contains(Motion::ANIMATION),
        ) {
            (false, false) => Self::None,
            (true, false) => Self::Transition,
            (false, true) => Self::Animation,
            (true, true) => Self::Both,
        }
    }
}

/// A DOM completion event the host listens for on the panel node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EndEvent {
    /// `transitionend`.
    TransitionEnd,
    /// `animationend`.
    AnimationEnd,
}

impl EndEvent {
    /// The DOM event type name.
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::TransitionEnd => "transitionend",
            Self::AnimationEnd => "animationend",
        }
    }
}

/// Computed timing of one element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Timing {
    /// Which durations are non-zero.
    pub motion: Motion,
    /// Computed `transition-duration`, verbatim.
    pub transition_duration: String,
    /// Computed `animation-duration`, verbatim.
    pub animation_duration: String,
}

impl Timing {
    /// The completion strategy.
    pub fn mode(&self) -> TimingMode {
        self.motion.into()
    }
}

/// Read the computed durations of `node` and classify them.
pub fn classify<D: Dom>(dom: &D, node: D::Node) -> Timing {
    let transition_duration = dom.computed_style(node, "transition-duration");
    let animation_duration = dom.computed_style(node, "animation-duration");

    let mut motion = Motion::empty();
    motion.set(
        Motion::TRANSITION,
        !is_zero_duration(&transition_duration),
    );
    motion.set(Motion::ANIMATION, !is_zero_duration(&animation_duration));

    Timing {
        motion,
        transition_duration,
        animation_duration,
    }
}

/// Whether a computed duration list means "no motion".
///
/// Accepts `0s`, `0ms`, an empty value, and comma-separated lists where every
/// entry is zero. Anything unparseable counts as motion.
pub fn is_zero_duration(value: &str) -> bool {
    value.split(',').all(|entry| {
        let entry = entry.trim();
        if entry.is_empty() {
            return true;
        }
        let number = entry
            .strip_suffix("ms")
            .or_else(|| entry.strip_suffix('s'))
            .unwrap_or(entry);
        number.parse::<f64>().is_ok_and(|n| n == 0.0)
    })
}
