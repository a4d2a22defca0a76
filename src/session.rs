//! Drives one encode/decode run: draws random coefficient matrices until the
//! solver accepts one, then decodes the message back and checks it.

use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{FecError, Result};
use crate::fec::{Decoder, Elem, Encoder, Matrix, SolveStrategy, DIM, MODULUS};
use crate::telemetry;

/// Message used when none is configured.
pub const DEFAULT_MESSAGE: [Elem; DIM] = [2, 4, 1, 123, 12, 5, 1, 23, 5, 6, 1];
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Draws `DIM` coefficients uniformly from the field.
pub fn generate_coefficients<R: Rng + ?Sized>(rng: &mut R) -> Vec<Elem> {
    (0..DIM).map(|_| rng.gen_range(0..MODULUS)).collect()
}

pub fn generate_matrix<R: Rng + ?Sized>(rng: &mut R) -> Matrix {
    (0..DIM).map(|_| generate_coefficients(rng)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub max_attempts: usize,
    pub seed: Option<u64>,
    pub strategy: SolveStrategy,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            seed: None,
            strategy: SolveStrategy::Strict,
        }
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub message: Vec<Elem>,
    pub coefficients: Matrix,
    pub encoded: Vec<Elem>,
    pub decoded: Vec<Elem>,
    /// Matrices drawn, including the accepted one.
    pub attempts: usize,
}

pub struct Session<R: Rng = StdRng> {
    encoder: Encoder,
    decoder: Decoder,
    max_attempts: usize,
    rng: R,
}

impl Session<StdRng> {
    /// Seeds from `config.seed`, or from OS entropy when unset.
    pub fn new(message: Vec<Elem>, config: &SessionConfig) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(message, config, rng)
    }
}

impl<R: Rng> Session<R> {
    pub fn with_rng(message: Vec<Elem>, config: &SessionConfig, rng: R) -> Result<Self> {
        if message.len() != DIM {
            return Err(FecError::InvalidShape {
                expected: DIM,
                found: message.len(),
            });
        }
        if config.max_attempts == 0 {
            return Err(FecError::Config("max_attempts must be at least 1".into()));
        }
        Ok(Self {
            encoder: Encoder::new(message)?,
            decoder: Decoder::new(config.strategy),
            max_attempts: config.max_attempts,
            rng,
        })
    }

    pub fn message(&self) -> &[Elem] {
        self.encoder.message()
    }

    /// Encodes under fresh random matrices until one decodes, then decodes
    /// again from the retained copies and verifies the result.
    pub fn run(&mut self) -> Result<SessionReport> {
        let mut last = None;
        for attempt in 1..=self.max_attempts {
            crate::telemetry!(telemetry::SESSION_ATTEMPTS.inc());
            let matrix = generate_matrix(&mut self.rng);
            let encoded = self.encoder.encode_block(&matrix)?;

            // Trial solve on clones; a zero pivot here means draw again.
            match self.decoder.decode(&matrix, &encoded) {
                Ok(_) => {
                    info!("attempt {}: coefficient matrix accepted", attempt);
                    let decoded = self.decoder.decode(&matrix, &encoded)?;
                    if decoded != self.encoder.message() {
                        error!("decoded message differs from original");
                        return Err(FecError::DecodeMismatch);
                    }
                    return Ok(SessionReport {
                        message: self.encoder.message().to_vec(),
                        coefficients: matrix,
                        encoded,
                        decoded,
                        attempts: attempt,
                    });
                }
                Err(e) if e.is_retryable() => {
                    warn!("attempt {}: {}", attempt, e);
                    last = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        let last = last.unwrap_or(FecError::SingularMatrix { row: 0 });
        error!("giving up after {} attempts", self.max_attempts);
        Err(FecError::AttemptsExhausted {
            attempts: self.max_attempts,
            last: Box::new(last),
        })
    }
}
