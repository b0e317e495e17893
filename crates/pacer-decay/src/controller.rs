use std::fmt;

use pacer_core::config::{AdapterConfig, DecayConfig};
use pacer_core::errors::{ConfigError, PacerResult, ProtocolError};
use tracing::{debug, warn};

use crate::adapter::{AdapterPhase, AdjustContext, Adjustment, StatisticalAdapter};
use crate::curve::Hyperbola;
use crate::direction::Direction;
use crate::ticker::Ticker;

/// What a call to [`DecayController::nudge`] did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NudgeOutcome {
    /// Deterministic nudge; the curve now passes through `target` at the current step.
    Nudged { target: f64 },
    /// The adapter re-planned the curve.
    Adapted(Adjustment),
    /// One step of natural decay would undo more than the nudge adds.
    Skipped,
}

/// Delivers values along a hyperbola that approaches `asymptote` and never reaches it.
///
/// With `start = 4`, `asymptote = 0` and `rate = 0.5` the first two values are
/// 4 and 2, and later ones keep following the same hyperbola toward 0.
///
/// Work cycle:
///
/// ```text
/// deliver value
///   → (failure) nudge
///   → record fail value
///   → plan nudge and asymptote (or use the user's during warm-up)
///   → refit curve
///   → continue delivering
/// ```
///
/// At most one nudge is accepted per step; [`Self::deliver`] opens the next one.
#[derive(Debug, Clone)]
pub struct DecayController {
    start: f64,
    initial_asymptote: f64,
    rate: f64,
    nudge_by: f64,
    adapt: bool,
    direction: Direction,
    step: u64,
    nudged: bool,
    curve: Hyperbola,
    ticker: Ticker,
    adapter: StatisticalAdapter,
    last_nudge: f64,
}

impl DecayController {
    /// Create a controller with the default adapter tuning.
    ///
    /// `rate` is the share of the distance to the asymptote kept after one step
    /// (0 < rate < 1). `nudge_by` scales deterministic nudges; 1.0 pushes the
    /// value out by its full distance to the asymptote.
    pub fn new(
        start: f64,
        asymptote: f64,
        rate: f64,
        nudge_by: f64,
        adapt: bool,
    ) -> PacerResult<Self> {
        Self::with_adapter_config(start, asymptote, rate, nudge_by, adapt, AdapterConfig::default())
    }

    pub fn from_config(
        start: f64,
        asymptote: f64,
        decay: &DecayConfig,
        adapter: &AdapterConfig,
    ) -> PacerResult<Self> {
        Self::with_adapter_config(
            start,
            asymptote,
            decay.rate,
            decay.nudge_by,
            decay.adapt,
            adapter.clone(),
        )
    }

    pub fn with_adapter_config(
        start: f64,
        asymptote: f64,
        rate: f64,
        nudge_by: f64,
        adapt: bool,
        adapter_config: AdapterConfig,
    ) -> PacerResult<Self> {
        if !start.is_finite() || !asymptote.is_finite() {
            return Err(ConfigError::ValidationFailed {
                field: "start/asymptote".to_string(),
                message: format!("must be finite, got {start} and {asymptote}"),
            }
            .into());
        }
        let direction = Direction::between(start, asymptote)
            .ok_or(ConfigError::StartEqualsAsymptote { value: start })?;
        if !(rate > 0.0 && rate < 1.0) {
            return Err(ConfigError::RateOutOfRange { rate }.into());
        }
        if nudge_by.is_nan() || nudge_by < 0.0 {
            return Err(ConfigError::NegativeNudge { nudge_by }.into());
        }
        adapter_config.validate()?;

        // h = 1 puts step 0 one unit off the asymptote before shifting onto `start`.
        let mut curve = Hyperbola::new(direction.sign(), 1.0, asymptote);
        curve.shift_h(0.0, start);

        let mut controller = Self {
            start,
            initial_asymptote: asymptote,
            rate,
            nudge_by,
            adapt,
            direction,
            step: 0,
            nudged: false,
            curve,
            ticker: Ticker::new(),
            adapter: StatisticalAdapter::new(rate, adapter_config),
            last_nudge: start,
        };
        controller.set_rate(rate)?;

        debug!(
            start,
            asymptote,
            rate,
            nudge_by,
            adapt,
            direction = %direction,
            "decay controller created"
        );
        Ok(controller)
    }

    /// Value at the current step.
    pub fn value(&self) -> f64 {
        self.curve.value(self.step as f64)
    }

    /// Value at the previous step (step 0 while nothing was delivered).
    pub fn previous(&self) -> f64 {
        self.curve.value(self.step.saturating_sub(1) as f64)
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    pub fn start(&self) -> f64 {
        self.start
    }

    /// Working asymptote. Adaptation may move it away from the declared one.
    pub fn asymptote(&self) -> f64 {
        self.curve.v
    }

    /// Asymptote declared at construction.
    pub fn initial_asymptote(&self) -> f64 {
        self.initial_asymptote
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn nudge_by(&self) -> f64 {
        self.nudge_by
    }

    pub fn adapt_enabled(&self) -> bool {
        self.adapt
    }

    /// Whether a nudge already happened at the current step.
    pub fn is_nudged(&self) -> bool {
        self.nudged
    }

    /// Last value the curve was shifted to; `start` until the first nudge.
    pub fn last_nudge(&self) -> f64 {
        self.last_nudge
    }

    pub fn curve(&self) -> &Hyperbola {
        &self.curve
    }

    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    pub fn adapter(&self) -> &StatisticalAdapter {
        &self.adapter
    }

    /// Refit the curve so one more step from the current point keeps
    /// `rate` of the distance to the asymptote.
    pub fn set_rate(&mut self, rate: f64) -> PacerResult<()> {
        if !(rate > 0.0 && rate < 1.0) {
            return Err(ConfigError::RateOutOfRange { rate }.into());
        }
        let current_x = self.step as f64;
        let current_y = self.curve.value(current_x);
        let after_step_y = current_y - (current_y - self.curve.v) * (1.0 - rate);

        self.curve
            .adjust_rate(current_x, current_y, current_x + 1.0, after_step_y);
        self.rate = rate;

        if !self.curve.is_finite() {
            warn!(
                step = self.step,
                c = self.curve.c,
                h = self.curve.h,
                v = self.curve.v,
                "decay curve refit produced non-finite coefficients"
            );
        }
        Ok(())
    }

    /// Deliver the value at the current step and advance by one.
    pub fn deliver_one(&mut self) -> f64 {
        let value = self.value();
        self.advance(1);
        value
    }

    /// Deliver `n` consecutive values starting at the current step and advance by `n`.
    pub fn deliver(&mut self, n: u64) -> Vec<f64> {
        self.deliver_with_steps(n)
            .into_iter()
            .map(|(_, value)| value)
            .collect()
    }

    /// Like [`Self::deliver`], pairing each value with its step.
    ///
    /// `n == 0` returns nothing and leaves the controller untouched.
    pub fn deliver_with_steps(&mut self, n: u64) -> Vec<(u64, f64)> {
        if n == 0 {
            return Vec::new();
        }
        let coordinates = self.curve.coordinates(self.step..self.step + n);
        self.advance(n);
        coordinates
    }

    fn advance(&mut self, n: u64) {
        self.nudged = false;
        self.step += n;
        self.ticker.tick(n);
    }

    /// React to a failure.
    ///
    /// Once the adapter is warmed up (and adaptation is enabled) this hands over
    /// to [`Self::adapt`]. Otherwise the previous value is pushed away from the
    /// asymptote by `nudge_by` times its distance to it.
    pub fn nudge(&mut self) -> PacerResult<NudgeOutcome> {
        self.ensure_not_nudged()?;
        if self.adapt && self.adapter.is_warmed_up() {
            return self.adapt().map(NudgeOutcome::Adapted);
        }

        let previous = self.previous();
        let v = self.curve.v;
        let distance = (previous - v).abs();
        let required_y = previous + self.direction.sign() * distance * self.nudge_by;
        let undone_next_step = (self.rate * (previous - v)).abs();

        if (required_y - v).abs() < undone_next_step {
            debug!(
                step = self.step,
                required_y, undone_next_step, "nudge smaller than one step of decay, skipped"
            );
            return Ok(NudgeOutcome::Skipped);
        }

        self.nudge_to_value(required_y)?;
        Ok(NudgeOutcome::Nudged { target: required_y })
    }

    /// Nudge by `percent` of the previous value's distance to the asymptote.
    pub fn nudge_by_percent(&mut self, percent: f64) -> PacerResult<()> {
        let relative = self.previous() - self.curve.v;
        let value = self.direction.sign() * (relative * percent).abs();
        self.nudge_by_value(value)
    }

    /// Nudge to `previous + value`.
    pub fn nudge_by_value(&mut self, value: f64) -> PacerResult<()> {
        let required_y = self.previous() + value;
        self.nudge_to_value(required_y)
    }

    /// Shift the curve so the current step delivers `target`.
    pub fn nudge_to_value(&mut self, target: f64) -> PacerResult<()> {
        self.ensure_not_nudged()?;

        let previous = self.previous();
        self.ticker.flush();
        self.adapter.record_fail(previous);
        self.curve.shift_h(self.step as f64, target);
        self.last_nudge = target;
        self.nudged = true;

        debug!(step = self.step, previous, target, "decay nudged");
        Ok(())
    }

    /// Record the last fail and apply the adapter's plan: new asymptote,
    /// curve re-centred on the planned nudge, new decay rate.
    pub fn adapt(&mut self) -> PacerResult<Adjustment> {
        if let AdapterPhase::WarmingUp { remaining } = self.adapter.phase() {
            return Err(ProtocolError::AdaptBeforeWarmUp { remaining }.into());
        }
        self.ensure_not_nudged()?;

        let previous = self.previous();
        self.ticker.flush();
        self.adapter.record_fail(previous);

        let ctx = AdjustContext {
            start: self.start,
            asymptote: self.curve.v,
            initial_asymptote: self.initial_asymptote,
            direction: self.direction,
            last_ones: self.ticker.last_ones(),
        };
        let adjustment = self.adapter.adjust(&ctx);

        self.curve.v = adjustment.next_asymptote;
        self.curve.shift_h(self.step as f64, adjustment.next_nudge);
        if let Some(rate) = adjustment.next_rate {
            self.set_rate(rate)?;
        }
        self.last_nudge = adjustment.next_nudge;
        self.nudged = true;

        debug!(
            step = self.step,
            previous,
            asymptote = self.curve.v,
            nudge = adjustment.next_nudge,
            rate = self.rate,
            "decay adapted"
        );
        Ok(adjustment)
    }

    fn ensure_not_nudged(&self) -> PacerResult<()> {
        if self.nudged {
            return Err(ProtocolError::AlreadyNudged { step: self.step }.into());
        }
        Ok(())
    }
}

impl fmt::Display for DecayController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<Decay [{}] current:{}, asymptote:{}>",
            self.direction,
            self.value(),
            self.curve.v
        )
    }
}
