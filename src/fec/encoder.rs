use log::trace;

use super::field::{self, mul_add};
use super::{Elem, Matrix};
use crate::error::{FecError, Result};

/// Computes one encoded symbol: the dot product of `coefficients` and
/// `message` in GF(p), reduced after every accumulation step.
pub fn encode_symbol(coefficients: &[Elem], message: &[Elem]) -> Result<Elem> {
    if coefficients.len() != message.len() {
        return Err(FecError::InvalidShape {
            expected: message.len(),
            found: coefficients.len(),
        });
    }
    if let Some(&value) = coefficients
        .iter()
        .chain(message)
        .find(|&&v| !field::contains(v))
    {
        return Err(FecError::OutOfField { value });
    }
    Ok(coefficients
        .iter()
        .zip(message)
        .fold(0, |acc, (&c, &m)| mul_add(c, m, acc)))
}

/// Produces encoded symbols for a fixed message.
pub struct Encoder {
    message: Vec<Elem>,
}

impl Encoder {
    /// Takes ownership of the message. Every entry must be a field element.
    pub fn new(message: Vec<Elem>) -> Result<Self> {
        if let Some(&value) = message.iter().find(|&&v| !field::contains(v)) {
            return Err(FecError::OutOfField { value });
        }
        Ok(Self { message })
    }

    pub fn message(&self) -> &[Elem] {
        &self.message
    }

    /// Encodes the message against a single coefficient vector.
    pub fn encode(&self, coefficients: &[Elem]) -> Result<Elem> {
        encode_symbol(coefficients, &self.message)
    }

    /// Encodes one symbol per row of `matrix`, yielding the `b` in `A·x = b`.
    pub fn encode_block(&self, matrix: &Matrix) -> Result<Vec<Elem>> {
        let encoded = matrix
            .iter()
            .map(|row| self.encode(row))
            .collect::<Result<Vec<_>>>()?;
        trace!("encoded {} symbols", encoded.len());
        Ok(encoded)
    }
}
