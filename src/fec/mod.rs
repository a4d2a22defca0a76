// Copyright (c) 2024, The primefec Project Authors.
// All rights reserved.
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are
// met:
//
//     * Redistributions of source code must retain the above copyright
//       notice, this list of conditions and the following disclaimer.
//
//     * Redistributions in binary form must reproduce the above
//       copyright notice, this list of conditions and the following disclaimer
//       in the documentation and/or other materials provided with the
//       distribution.
//
//     * Neither the name of the copyright holder nor the names of its
//       contributors may be used to endorse or promote products derived from
//       this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS
// "AS IS" AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT
// LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR
// A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT
// OWNER OR CONTRIBUTORS BE LIABLE FOR ANY DIRECT, INDIRECT, INCIDENTAL,
// SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE,
// DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY
// THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY, OR TORT
// (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

//! # Random Linear Coding over GF(127)
//!
//! A message of `DIM` field elements is mixed with random coefficient vectors
//! into `DIM` encoded symbols. Decoding solves the resulting square linear
//! system by Gauss-Jordan elimination over the prime field.

pub mod decoder;
pub mod encoder;
pub mod field;

pub use decoder::*;
pub use encoder::*;

/// Size of the prime field.
pub const MODULUS: u32 = 127;
/// Length of the message and of every coefficient vector.
pub const DIM: usize = 11;

/// A field element in `[0, MODULUS)`.
pub type Elem = u32;
/// Row-major square coefficient matrix.
pub type Matrix = Vec<Vec<Elem>>;

#[cfg(test)]
mod tests {
    use super::*;

    // Lower-triangular with unit diagonal: every pivot stays 1 throughout.
    fn unit_lower(n: usize) -> Matrix {
        (0..n)
            .map(|i| {
                (0..n)
                    .map(|j| match j {
                        _ if j == i => 1,
                        _ if j < i => ((i * 7 + j * 13) as u32) % MODULUS,
                        _ => 0,
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn full_dimension_round_trip() {
        let message: Vec<Elem> = vec![2, 4, 1, 123, 12, 5, 1, 23, 5, 6, 1];
        let matrix = unit_lower(DIM);
        let enc = Encoder::new(message.clone()).unwrap();
        let encoded = enc.encode_block(&matrix).unwrap();

        let mut a = matrix.clone();
        let mut b = encoded.clone();
        let decoded = solve(&mut a, &mut b).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn repeated_solves_on_clones_agree() {
        let message: Vec<Elem> = (0..DIM as u32).map(|i| (i * 31) % MODULUS).collect();
        let matrix = unit_lower(DIM);
        let encoded = Encoder::new(message).unwrap().encode_block(&matrix).unwrap();
        let first = solve(&mut matrix.clone(), &mut encoded.clone()).unwrap();
        let second = solve(&mut matrix.clone(), &mut encoded.clone()).unwrap();
        assert_eq!(first, second);
    }
}
