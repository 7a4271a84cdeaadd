//! context/manager.rs
//!
//! Owning wrapper around a paired encode/decode session.
//!
//! Design notes:
//! - Construction acquires both handles and applies the configuration; any
//!   failure returns early and the already-acquired handles are dropped on the
//!   way out, so a half-built context is never observable.
//! - `release` destroys the decoder, then the encoder. It is idempotent and is
//!   also what `Drop` runs.
//! - After release the context stays a valid value; operations on it fail with
//!   `OpError::InvalidContext` without touching the engine.

use std::fmt;

use crate::context::config::{ContextConfig, ResolvedConfig};
use crate::engine::{Engine, EngineResult, Parameter, ZstdEngine};
use crate::telemetry::{ContextCounters, TelemetrySnapshot};
use crate::types::{ContextError, HandleKind};

pub struct Context<E: Engine = ZstdEngine> {
    pub(crate) encoder: Option<E::Encoder>,
    pub(crate) decoder: Option<E::Decoder>,
    pub(crate) config: ResolvedConfig,
    /// Format the decoder currently expects; reverts to the engine default
    /// after a non-sticky reset.
    pub(crate) decoder_format: u32,
    pub(crate) counters: ContextCounters,
}

fn configure<E: Engine, H>(
    handle: &mut H,
    kind: HandleKind,
    param: Parameter,
    apply: fn(&mut H, Parameter) -> EngineResult,
) -> Result<(), ContextError> {
    apply(handle, param).map(|_| ()).map_err(|source| {
        log::debug!("{}: {} rejected {:?}: {}", E::name(), kind, param, E::error_name(source));
        ContextError::Configuration {
            engine: E::name(),
            handle: kind,
            param,
            source,
        }
    })
}

impl Context<ZstdEngine> {
    /// Context on the default engine with [`ContextConfig::DEFAULT`].
    pub fn new() -> Result<Self, ContextError> {
        Self::from_config(ContextConfig::DEFAULT)
    }

    /// Context on the default engine with an explicit configuration.
    pub fn from_config(config: ContextConfig) -> Result<Self, ContextError> {
        Self::with_config(config)
    }
}

impl<E: Engine> Context<E> {
    /// Acquire both sessions and apply `config`.
    ///
    /// # Errors
    /// - `ContextError::Allocation` if either session cannot be created.
    /// - `ContextError::Configuration` if the engine rejects a parameter.
    pub fn with_config(config: ContextConfig) -> Result<Self, ContextError> {
        let resolved = config.resolve::<E>();

        let mut encoder = E::create_encoder().ok_or_else(|| {
            log::debug!("{}: encoder allocation failed", E::name());
            ContextError::Allocation { engine: E::name(), handle: HandleKind::Encoder }
        })?;
        let mut decoder = E::create_decoder().ok_or_else(|| {
            log::debug!("{}: decoder allocation failed", E::name());
            ContextError::Allocation { engine: E::name(), handle: HandleKind::Decoder }
        })?;

        if resolved.sticky_parameters {
            let sticky = Parameter::StickyParameters(true);
            configure::<E, _>(&mut encoder, HandleKind::Encoder, sticky, E::set_encoder_parameter)?;
            configure::<E, _>(&mut decoder, HandleKind::Decoder, sticky, E::set_decoder_parameter)?;
        }

        let format = Parameter::FormatVersion(resolved.format_version);
        configure::<E, _>(&mut encoder, HandleKind::Encoder, format, E::set_encoder_parameter)?;
        configure::<E, _>(&mut decoder, HandleKind::Decoder, format, E::set_decoder_parameter)?;

        let level = Parameter::CompressionLevel(resolved.compression_level);
        configure::<E, _>(&mut encoder, HandleKind::Encoder, level, E::set_encoder_parameter)?;

        log::trace!("{}: context created with {:?}", E::name(), resolved);

        Ok(Self {
            encoder: Some(encoder),
            decoder: Some(decoder),
            config: resolved,
            decoder_format: resolved.format_version,
            counters: ContextCounters::default(),
        })
    }

    /// Destroy the decode session, then the encode session.
    ///
    /// Calling this on an already released context does nothing.
    pub fn release(&mut self) {
        let live = self.is_initialized();
        drop(self.decoder.take());
        drop(self.encoder.take());
        if live {
            log::trace!("{}: context released", E::name());
        }
    }

    /// Both sessions present.
    pub fn is_initialized(&self) -> bool {
        self.encoder.is_some() && self.decoder.is_some()
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn counters(&self) -> &ContextCounters {
        &self.counters
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        TelemetrySnapshot::from(E::name(), &self.counters)
    }
}

impl<E: Engine> Drop for Context<E> {
    fn drop(&mut self) {
        self.release();
    }
}

impl<E: Engine> fmt::Debug for Context<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("engine", &E::name())
            .field("encoder", &self.encoder.is_some())
            .field("decoder", &self.decoder.is_some())
            .field("config", &self.config)
            .finish()
    }
}
