// primefec Core Library
//
// This library contains prime-field arithmetic, the random linear encoder,
// the Gauss-Jordan decoder and the session driver that ties them together.

pub mod app_config;
pub mod error;
pub mod fec;
pub mod session;
pub mod telemetry;

pub use error::{FecError, Result};
pub use fec::{
    encode_symbol, solve, solve_with, Decoder, Elem, Encoder, Matrix, SolveStrategy, DIM, MODULUS,
};
pub use session::{Session, SessionConfig, SessionReport};
