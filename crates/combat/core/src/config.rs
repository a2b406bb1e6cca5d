//! Engine configuration constants and tunable parameters.
//!
//! All radii are Chebyshev tile distances, all durations are milliseconds on
//! the injected monotonic clock, and all thresholds compare against percent
//! values. Invalid combinations are rejected once, at engine construction,
//! so the per-tick paths never re-validate.

/// Tunable parameters for the combat decision engine.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Radius within which hostiles contribute threat; beyond it they score 0
    /// and are excluded from the threat list.
    pub danger_radius: u32,
    /// Weight of the clustering bonus added to aggregate threat.
    pub group_weight: f64,
    /// Minimum simultaneous hits for a wave cast to be reported at all.
    pub wave_min_targets: u32,
    /// Minimum simultaneous hits before the arbiter commits to a wave cast.
    pub wave_commit_targets: u32,
    /// Cooldown between reposition suggestions from the wave optimizer.
    pub reposition_cooldown_ms: u64,
    /// Minimum interval between kill-priority recomputations; calls inside
    /// the window return the cached list.
    pub priority_refresh_ms: u64,
    /// Outer radius of the escape-risk band in the kill-priority score.
    pub escape_radius: u32,
    /// Radius of the cluster considered by the stack analyzer.
    pub stack_radius: u32,
    /// Stationary hostiles required for a stack to count as optimal.
    pub min_stack_size: u32,
    /// Hard cap on how long the stack analyzer keeps recommending to wait.
    pub max_stack_wait_ms: u64,
    /// Mana floor below which no combo sequence is offered.
    pub min_mana_percent: u8,
    /// Cooldown after a completed combo before the next one is offered.
    pub combo_cooldown_ms: u64,
    /// Health percent at or below which a hostile qualifies for a finisher.
    pub finisher_threshold: u8,
    /// Hostiles inside the burst diamond required to pick an area combo.
    pub burst_threshold: u32,
}

impl EngineConfig {
    pub const DEFAULT_DANGER_RADIUS: u32 = 5;
    pub const DEFAULT_GROUP_WEIGHT: f64 = 0.5;
    pub const DEFAULT_WAVE_MIN_TARGETS: u32 = 2;
    pub const DEFAULT_WAVE_COMMIT_TARGETS: u32 = 4;
    pub const DEFAULT_REPOSITION_COOLDOWN_MS: u64 = 2000;
    pub const DEFAULT_PRIORITY_REFRESH_MS: u64 = 200;
    pub const DEFAULT_ESCAPE_RADIUS: u32 = 6;
    pub const DEFAULT_STACK_RADIUS: u32 = 3;
    pub const DEFAULT_MIN_STACK_SIZE: u32 = 3;
    pub const DEFAULT_MAX_STACK_WAIT_MS: u64 = 2000;
    pub const DEFAULT_MIN_MANA_PERCENT: u8 = 30;
    pub const DEFAULT_COMBO_COOLDOWN_MS: u64 = 1000;
    pub const DEFAULT_FINISHER_THRESHOLD: u8 = 15;
    pub const DEFAULT_BURST_THRESHOLD: u32 = 3;

    pub fn new() -> Self {
        Self {
            danger_radius: Self::DEFAULT_DANGER_RADIUS,
            group_weight: Self::DEFAULT_GROUP_WEIGHT,
            wave_min_targets: Self::DEFAULT_WAVE_MIN_TARGETS,
            wave_commit_targets: Self::DEFAULT_WAVE_COMMIT_TARGETS,
            reposition_cooldown_ms: Self::DEFAULT_REPOSITION_COOLDOWN_MS,
            priority_refresh_ms: Self::DEFAULT_PRIORITY_REFRESH_MS,
            escape_radius: Self::DEFAULT_ESCAPE_RADIUS,
            stack_radius: Self::DEFAULT_STACK_RADIUS,
            min_stack_size: Self::DEFAULT_MIN_STACK_SIZE,
            max_stack_wait_ms: Self::DEFAULT_MAX_STACK_WAIT_MS,
            min_mana_percent: Self::DEFAULT_MIN_MANA_PERCENT,
            combo_cooldown_ms: Self::DEFAULT_COMBO_COOLDOWN_MS,
            finisher_threshold: Self::DEFAULT_FINISHER_THRESHOLD,
            burst_threshold: Self::DEFAULT_BURST_THRESHOLD,
        }
    }

    /// Checks every invariant the per-tick paths rely on.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint. Called by the engine
    /// constructor; callers mutating a config by hand can re-check here.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.danger_radius == 0 {
            return Err(ConfigError::ZeroRadius { field: "danger_radius" });
        }
        if self.stack_radius == 0 {
            return Err(ConfigError::ZeroRadius { field: "stack_radius" });
        }
        if !self.group_weight.is_finite() || self.group_weight < 0.0 {
            return Err(ConfigError::InvalidGroupWeight {
                value: self.group_weight,
            });
        }
        if self.wave_min_targets == 0 {
            return Err(ConfigError::ZeroThreshold {
                field: "wave_min_targets",
            });
        }
        if self.min_stack_size == 0 {
            return Err(ConfigError::ZeroThreshold {
                field: "min_stack_size",
            });
        }
        if self.burst_threshold == 0 {
            return Err(ConfigError::ZeroThreshold {
                field: "burst_threshold",
            });
        }
        if self.wave_commit_targets < self.wave_min_targets {
            return Err(ConfigError::CommitBelowMinimum {
                commit: self.wave_commit_targets,
                minimum: self.wave_min_targets,
            });
        }
        // The escape band is (3, escape_radius]; anything at 3 or below is
        // already melee range and carries no escape risk.
        if self.escape_radius <= 3 {
            return Err(ConfigError::EscapeRadiusTooSmall {
                value: self.escape_radius,
            });
        }
        if self.min_mana_percent > 100 {
            return Err(ConfigError::PercentOutOfRange {
                field: "min_mana_percent",
                value: self.min_mana_percent,
            });
        }
        if self.finisher_threshold > 100 {
            return Err(ConfigError::PercentOutOfRange {
                field: "finisher_threshold",
                value: self.finisher_threshold,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Constraint violation detected when constructing the engine.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be at least 1 tile")]
    ZeroRadius { field: &'static str },

    #[error("{field} must be at least 1")]
    ZeroThreshold { field: &'static str },

    #[error("group_weight must be finite and non-negative, got {value}")]
    InvalidGroupWeight { value: f64 },

    #[error("wave_commit_targets ({commit}) must not be below wave_min_targets ({minimum})")]
    CommitBelowMinimum { commit: u32, minimum: u32 },

    #[error("escape_radius must exceed the melee band of 3 tiles, got {value}")]
    EscapeRadiusTooSmall { value: u32 },

    #[error("{field} is a percent and must be <= 100, got {value}")]
    PercentOutOfRange { field: &'static str, value: u8 },
}
