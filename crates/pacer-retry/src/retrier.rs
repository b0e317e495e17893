use std::fmt;

use pacer_core::config::{AdapterConfig, DecayConfig, PacerConfig, RetryConfig};
use pacer_core::errors::{PacerError, PacerResult};
use pacer_decay::DecayController;
use tracing::{debug, info, warn};

use crate::delay::{Delay, Sleeper};
use crate::fingerprint::MachineFingerprint;
use crate::store::{ConfiguredStore, ParamStore, StoredParams};

/// Why [`Retrier::run`] gave up.
#[derive(Debug, thiserror::Error)]
pub enum RetryError<E>
where
    E: fmt::Debug + fmt::Display,
{
    #[error("{name} failed after {attempts} attempts: {last}")]
    Exhausted { name: String, attempts: u32, last: E },

    #[error(transparent)]
    Pacer(#[from] PacerError),
}

/// Retries one named operation, sleeping for controller-delivered delays.
///
/// Delays start at the stored `last_nudge` for this operation and machine,
/// or at `retry.initial_delay_secs` the first time, and decay toward
/// `retry.min_delay_secs`. Each failure nudges the controller before the
/// next attempt.
pub struct Retrier<S, Z> {
    name: String,
    retry: RetryConfig,
    decay: DecayConfig,
    adapter: AdapterConfig,
    delay: Delay,
    fingerprint: MachineFingerprint,
    store: S,
    sleeper: Z,
}

impl<S, Z> Retrier<S, Z>
where
    S: ParamStore,
    Z: Sleeper,
{
    /// Retrier over an explicit store. `retry.store_path` is not consulted;
    /// see [`Retrier::from_config`] for that.
    pub fn new(
        name: impl Into<String>,
        config: &PacerConfig,
        store: S,
        sleeper: Z,
    ) -> PacerResult<Self> {
        config.validate()?;
        Ok(Self {
            name: name.into(),
            retry: config.retry.clone(),
            decay: config.decay.clone(),
            adapter: config.adapter.clone(),
            delay: Delay::new(config.retry.jitter_sd_secs),
            fingerprint: MachineFingerprint::current(),
            store,
            sleeper,
        })
    }

    /// Key stored parameters under another machine.
    pub fn with_fingerprint(mut self, fingerprint: MachineFingerprint) -> Self {
        self.fingerprint = fingerprint;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fingerprint(&self) -> &MachineFingerprint {
        &self.fingerprint
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sleeper(&self) -> &Z {
        &self.sleeper
    }

    /// Controller seeded from the store, falling back to the configured delays.
    pub fn controller(&self) -> PacerResult<DecayController> {
        let stored = self
            .store
            .get(self.fingerprint.as_str(), &self.name)?
            .filter(StoredParams::is_usable);

        let (start, asymptote) = match stored {
            Some(params) => {
                debug!(
                    name = %self.name,
                    last_nudge = params.last_nudge,
                    asymptote = params.asymptote,
                    "seeding controller from stored params"
                );
                (params.last_nudge, params.asymptote)
            }
            None => (self.retry.initial_delay_secs, self.retry.min_delay_secs),
        };
        DecayController::from_config(start, asymptote, &self.decay, &self.adapter)
    }

    /// Call `op` until it succeeds or `retry.max_attempts` is spent.
    ///
    /// `op` receives the 1-based attempt number.
    pub fn run<T, E, F>(&mut self, mut op: F) -> Result<T, RetryError<E>>
    where
        F: FnMut(u32) -> Result<T, E>,
        E: fmt::Debug + fmt::Display,
    {
        let mut decay = self.controller()?;
        let mut attempt = 0u32;

        loop {
            attempt += 1;
            let delay_secs = decay.deliver_one();
            let wait = self.delay.duration(delay_secs);
            if !wait.is_zero() {
                self.sleeper.sleep(wait);
            }

            match op(attempt) {
                Ok(value) => {
                    info!(name = %self.name, attempt, delay_secs, "operation succeeded");
                    self.persist(&decay);
                    return Ok(value);
                }
                Err(e) => {
                    warn!(name = %self.name, attempt, delay_secs, error = %e, "attempt failed");
                    if attempt >= self.retry.max_attempts {
                        return Err(RetryError::Exhausted {
                            name: self.name.clone(),
                            attempts: attempt,
                            last: e,
                        });
                    }
                    decay.nudge()?;
                }
            }
        }
    }

    fn persist(&mut self, decay: &DecayController) {
        let params = StoredParams::new(decay.last_nudge(), decay.asymptote());
        if !params.is_usable() {
            warn!(name = %self.name, ?params, "tuned params not usable, not stored");
            return;
        }
        if let Err(e) = self
            .store
            .put(self.fingerprint.as_str(), &self.name, params)
        {
            warn!(name = %self.name, error = %e, "failed to store tuned params");
        }
    }
}

impl<Z> Retrier<ConfiguredStore, Z>
where
    Z: Sleeper,
{
    /// Retrier whose store follows `retry.store_path`: tuned parameters go to
    /// that JSON file, or stay in memory when it is unset.
    pub fn from_config(
        name: impl Into<String>,
        config: &PacerConfig,
        sleeper: Z,
    ) -> PacerResult<Self> {
        let store = ConfiguredStore::from_config(&config.retry);
        let retrier = Self::new(name, config, store, sleeper)?;
        debug!(
            name = %retrier.name,
            persistent = retrier.store.is_persistent(),
            "retrier built from config"
        );
        Ok(retrier)
    }
}
