//! Statistical adaptation of the decay curve.
//!
//! Every nudge records the value at which the caller failed. Once
//! `n_warm_up` fails are on record the adapter plans the next asymptote,
//! nudge target and decay rate from their mean and spread:
//!
//! ```text
//! next_nudge     = mean + d·k(step)·σ + d·burst·σ
//! next_asymptote = mean + d·std_asymptote·σ
//! next_rate      = rate_curve(step)
//! ```
//!
//! where `d` is the controller direction, `k` decays from `std_nudge` toward
//! `nudge_rate_asymptote`, and `burst` grows with consecutive 1-step fails.

pub mod statistics;

use pacer_core::config::AdapterConfig;
use pacer_core::constants::CURVE_TOLERANCE;
use tracing::debug;

use crate::curve::Hyperbola;
use crate::direction::Direction;

/// Share of the initial nudge multiplier's distance to its asymptote left after `n_decay` steps.
const NUDGE_RATE_RESIDUAL: f64 = 0.1;

/// Whether the adapter has seen enough fails to take over nudging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterPhase {
    /// Fewer than `n_warm_up` fails recorded.
    WarmingUp { remaining: u32 },
    /// `step` counts recorded fails beyond the warm-up window.
    Adapting { step: u32 },
}

/// Which formula produced an [`Adjustment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdjustBranch {
    /// Still warming up: the user-declared start and asymptote are used.
    WarmUp,
    /// Mean/σ band around the recorded fails.
    Statistical,
    /// Nudge collapsed onto the asymptote; recomputed from the whole interval.
    OverlapFallback,
}

/// Planned curve parameters for the next adaptation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub next_asymptote: f64,
    pub next_nudge: f64,
    /// `None` while warming up.
    pub next_rate: Option<f64>,
    pub branch: AdjustBranch,
}

/// Controller state the adapter reads when planning.
#[derive(Debug, Clone, Copy)]
pub struct AdjustContext {
    pub start: f64,
    pub asymptote: f64,
    pub initial_asymptote: f64,
    pub direction: Direction,
    pub last_ones: usize,
}

#[derive(Debug, Clone)]
pub struct StatisticalAdapter {
    config: AdapterConfig,
    /// Relaxes the decay rate from its initial value toward `rate_ceiling`.
    decay_rate_curve: Hyperbola,
    /// Standard deviations between the fail mean and the next nudge.
    nudge_rate: Hyperbola,
    fails: Vec<f64>,
    pending: Option<Adjustment>,
}

impl StatisticalAdapter {
    /// `initial_rate` is the controller's decay rate at construction.
    pub fn new(initial_rate: f64, config: AdapterConfig) -> Self {
        let n_decay = f64::from(config.n_decay);

        let mut decay_rate_curve = Hyperbola::new(-1.0, 0.0, 1.0);
        if initial_rate > config.rate_ceiling - CURVE_TOLERANCE {
            // At or past the ceiling: hold the rate.
            decay_rate_curve = Hyperbola::new(0.0, 1.0, initial_rate);
        } else {
            decay_rate_curve.adjust_rate(0.0, initial_rate, n_decay, config.rate_ceiling);
        }

        let mut nudge_rate = Hyperbola::new(1.0, 0.0, config.nudge_rate_asymptote);
        let nudge_rate_end = config.nudge_rate_asymptote
            + (config.std_nudge - config.nudge_rate_asymptote) * NUDGE_RATE_RESIDUAL;
        nudge_rate.adjust_rate(0.0, config.std_nudge, n_decay, nudge_rate_end);

        Self {
            config,
            decay_rate_curve,
            nudge_rate,
            fails: Vec::new(),
            pending: None,
        }
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub fn phase(&self) -> AdapterPhase {
        let recorded = self.fails.len();
        let warm_up = self.config.n_warm_up as usize;
        if recorded < warm_up {
            AdapterPhase::WarmingUp {
                remaining: (warm_up - recorded) as u32,
            }
        } else {
            AdapterPhase::Adapting {
                step: (recorded - warm_up) as u32,
            }
        }
    }

    pub fn is_warmed_up(&self) -> bool {
        matches!(self.phase(), AdapterPhase::Adapting { .. })
    }

    /// Values at which the controller was nudged, oldest first.
    pub fn fails(&self) -> &[f64] {
        &self.fails
    }

    pub fn record_fail(&mut self, value: f64) {
        self.fails.push(value);
    }

    /// The last plan computed by [`Self::adjust`].
    pub fn pending(&self) -> Option<&Adjustment> {
        self.pending.as_ref()
    }

    pub fn decay_rate_curve(&self) -> &Hyperbola {
        &self.decay_rate_curve
    }

    pub fn nudge_rate_curve(&self) -> &Hyperbola {
        &self.nudge_rate
    }

    /// Plan the next asymptote, nudge target and decay rate from the recorded fails.
    ///
    /// Only the plan is stored; the controller's curve is untouched.
    pub fn adjust(&mut self, ctx: &AdjustContext) -> Adjustment {
        let cfg = &self.config;
        let (mean_fails, std_fails) = statistics::mean_std(&self.fails);
        let d = ctx.direction.sign();
        let burst = ctx.last_ones as f64 * cfg.burst_weight;

        let adjustment = match self.phase() {
            AdapterPhase::WarmingUp { .. } => Adjustment {
                next_asymptote: ctx.asymptote,
                next_nudge: ctx.start,
                next_rate: None,
                branch: AdjustBranch::WarmUp,
            },
            AdapterPhase::Adapting { step } => {
                let step = f64::from(step);
                let k = self.nudge_rate.value(step);
                let next_nudge = mean_fails + d * k * std_fails + d * burst * std_fails;
                let next_asymptote = mean_fails + d * cfg.std_asymptote * std_fails;
                let next_rate = Some(self.decay_rate_curve.value(step));

                if (next_nudge - next_asymptote).abs() <= CURVE_TOLERANCE {
                    let (next_asymptote, next_nudge) = self.overlap_fallback(ctx, burst);
                    Adjustment {
                        next_asymptote,
                        next_nudge,
                        next_rate,
                        branch: AdjustBranch::OverlapFallback,
                    }
                } else {
                    Adjustment {
                        next_asymptote,
                        next_nudge,
                        next_rate,
                        branch: AdjustBranch::Statistical,
                    }
                }
            }
        };

        debug!(
            mean_fails,
            std_fails,
            last_ones = ctx.last_ones,
            next_nudge = adjustment.next_nudge,
            next_asymptote = adjustment.next_asymptote,
            next_rate = ?adjustment.next_rate,
            branch = ?adjustment.branch,
            "adapter planned next curve"
        );

        self.pending = Some(adjustment);
        adjustment
    }

    /// Widen the band using start, the user's asymptote and every fail.
    /// The asymptote never moves past the user-declared one.
    fn overlap_fallback(&self, ctx: &AdjustContext, burst: f64) -> (f64, f64) {
        let cfg = &self.config;
        let d = ctx.direction.sign();

        let mut interval = Vec::with_capacity(self.fails.len() + 2);
        interval.push(ctx.start);
        interval.push(ctx.initial_asymptote);
        interval.extend_from_slice(&self.fails);
        let (mean, std) = statistics::mean_std(&interval);

        let next_nudge = mean + d * cfg.fallback_std_nudge * std + d * burst * std;
        let unclamped = mean - d * cfg.fallback_std_asymptote * std;
        let next_asymptote = match ctx.direction {
            Direction::Descending => unclamped.max(ctx.initial_asymptote),
            Direction::Ascending => unclamped.min(ctx.initial_asymptote),
        };
        (next_asymptote, next_nudge)
    }
}
