//! # Rabin-Karp Substring Search
//!
//! This module implements **Rabin-Karp** substring search over byte slices: a
//! polynomial rolling hash slides a pattern-sized window across the text, and
//! only windows whose hash equals the pattern's hash are compared byte-for-byte.
//! Hash equality is treated strictly as a filter — a colliding window that does
//! not match the pattern is discarded, so the result is always exact.
//!
//! ## Key Features
//! - **Configurable modulus** via [`RabinKarpBuilder`], with the classic small
//!   prime 101 as the default.
//! - **Exact integer arithmetic** throughout: the pattern-length power of the
//!   radix is computed by repeated squaring modulo the modulus, never through a
//!   floating-point `pow`.
//! - **Lazy results**: [`RabinKarp::matches`] yields offsets as an iterator;
//!   [`RabinKarp::find_all`] and [`search`] collect them eagerly.
//!
//! All hash state stays in `[0, modulus)`. The window roll subtracts the
//! outgoing byte's contribution with modulus-aware subtraction, so no negative
//! intermediate value is ever formed.

use log::trace;

use crate::error::{Result, StringError};

/// Radix of the polynomial hash: one digit per possible byte value.
pub const RADIX: u64 = 256;

/// Default modulus, the small prime the classic formulation uses.
pub const DEFAULT_MODULUS: u64 = 101;

/// A builder for [`RabinKarp`], allowing you to set the hash modulus.
#[derive(Debug, Clone)]
pub struct RabinKarpBuilder {
    modulus: u64,
}

impl Default for RabinKarpBuilder {
    fn default() -> Self {
        Self {
            modulus: DEFAULT_MODULUS,
        }
    }
}

impl RabinKarpBuilder {
    /// Creates a new builder with the default modulus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the modulus bounding all hash values.
    /// Typically a prime; larger values make spurious collisions rarer.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Builds the searcher, validating the modulus.
    ///
    /// # Errors
    /// * `InvalidModulus` if the modulus is below 2.
    pub fn build(self) -> Result<RabinKarp> {
        if self.modulus < 2 {
            return Err(StringError::InvalidModulus(self.modulus));
        }
        Ok(RabinKarp {
            modulus: self.modulus,
        })
    }
}

/// A Rabin-Karp searcher with a validated modulus.
///
/// The searcher holds no per-call state: every search borrows its inputs for
/// the duration of the call only, so a single searcher may be shared freely
/// across threads.
#[derive(Debug, Clone, Copy)]
pub struct RabinKarp {
    modulus: u64,
}

impl Default for RabinKarp {
    fn default() -> Self {
        Self::new()
    }
}

impl RabinKarp {
    /// Creates a searcher with the default modulus.
    pub fn new() -> Self {
        RabinKarp {
            modulus: DEFAULT_MODULUS,
        }
    }

    /// Creates a searcher with the given modulus.
    ///
    /// # Errors
    /// * `InvalidModulus` if the modulus is below 2.
    pub fn with_modulus(modulus: u64) -> Result<Self> {
        RabinKarpBuilder::new().with_modulus(modulus).build()
    }

    /// Returns the modulus this searcher hashes with.
    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns an iterator over the starting offsets of every occurrence of
    /// `pattern` in `text`, in strictly increasing order.
    ///
    /// An empty `pattern`, an empty `text`, or a `pattern` longer than `text`
    /// all yield an empty iterator.
    pub fn matches<'t, 'p>(&self, text: &'t [u8], pattern: &'p [u8]) -> Matches<'t, 'p> {
        Matches::new(text, pattern, self.modulus)
    }

    /// Collects every match offset into a vector.
    pub fn find_all(&self, text: &[u8], pattern: &[u8]) -> Vec<usize> {
        self.matches(text, pattern).collect()
    }

    /// Returns the offset of the first occurrence of `pattern` in `text`,
    /// or `None` if it does not occur.
    pub fn find_first(&self, text: &[u8], pattern: &[u8]) -> Option<usize> {
        self.matches(text, pattern).next()
    }
}

/// Finds every occurrence of `pattern` in `text` using Rabin-Karp with the
/// given hash modulus.
///
/// # Arguments
/// * `text` - The byte sequence to scan
/// * `pattern` - The byte sequence to look for
/// * `modulus` - Bound on all hash values, at least 2
///
/// # Returns
/// * `Ok(offsets)` - The 0-based starting offset of every occurrence, in
///   strictly increasing order; empty when `pattern` is empty, `text` is
///   empty, or `pattern` is longer than `text`
/// * `Err(StringError)` - If the modulus is invalid
///
/// # Examples
/// ```
/// use strsearch::string::search;
///
/// let offsets = search(b"ABABDABACDABABCABAB", b"ABABCABAB", 101).unwrap();
/// assert_eq!(offsets, vec![10]);
/// ```
///
/// # Complexity
/// * Time: O(n + m) expected; O(n * m) only under pathological hash collisions
/// * Space: O(1) beyond the output
///
/// # Errors
/// * `InvalidModulus` if `modulus` is below 2
pub fn search(text: &[u8], pattern: &[u8], modulus: u64) -> Result<Vec<usize>> {
    let searcher = RabinKarp::with_modulus(modulus)?;
    Ok(searcher.find_all(text, pattern))
}

/// Iterator over match offsets, produced by [`RabinKarp::matches`].
///
/// Offsets are yielded lazily in strictly increasing order. The iterator keeps
/// the rolling window hash as its only mutable state.
#[derive(Debug, Clone)]
pub struct Matches<'t, 'p> {
    text: &'t [u8],
    pattern: &'p [u8],
    modulus: u64,
    pattern_hash: u64,
    window_hash: u64,
    /// RADIX^(m-1) mod modulus: the weight of the window's outgoing byte.
    radix_pow: u64,
    /// Next window start to examine.
    next: usize,
    exhausted: bool,
}

impl<'t, 'p> Matches<'t, 'p> {
    fn new(text: &'t [u8], pattern: &'p [u8], modulus: u64) -> Self {
        let m = pattern.len();
        if m == 0 || text.len() < m {
            return Matches {
                text,
                pattern,
                modulus,
                pattern_hash: 0,
                window_hash: 0,
                radix_pow: 0,
                next: 0,
                exhausted: true,
            };
        }
        Matches {
            text,
            pattern,
            modulus,
            pattern_hash: horner_hash(pattern, modulus),
            window_hash: horner_hash(&text[..m], modulus),
            radix_pow: pow_mod(RADIX, (m - 1) as u64, modulus),
            next: 0,
            exhausted: false,
        }
    }

    /// Slides the window one byte right: drops `outgoing` from the front,
    /// takes `incoming` in at the back.
    fn roll(&mut self, outgoing: u8, incoming: u8) {
        let dropped = mul_mod(outgoing as u64, self.radix_pow, self.modulus);
        let shifted = mul_mod(
            sub_mod(self.window_hash, dropped, self.modulus),
            RADIX,
            self.modulus,
        );
        self.window_hash = add_mod(shifted, incoming as u64 % self.modulus, self.modulus);
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let m = self.pattern.len();
        while !self.exhausted {
            let i = self.next;
            let last = self.text.len() - m;
            let hit = self.window_hash == self.pattern_hash;
            let matched = hit && &self.text[i..i + m] == self.pattern;
            if hit && !matched {
                trace!("hash collision without a byte match at offset {i}");
            }
            if i < last {
                self.roll(self.text[i], self.text[i + m]);
                self.next = i + 1;
            } else {
                self.exhausted = true;
            }
            if matched {
                return Some(i);
            }
        }
        None
    }
}

// internal ops

#[inline]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    let s = a + b;
    if s >= m {
        s - m
    } else {
        s
    }
}

#[inline]
fn sub_mod(a: u64, b: u64, m: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        (a + m) - b
    }
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    // 128-bit multiplication, reduced mod m; m must be < 2^63
    ((a as u128 * b as u128) % m as u128) as u64
}

/// RADIX-ary Horner evaluation of `data`, reduced mod `m`.
fn horner_hash(data: &[u8], m: u64) -> u64 {
    let mut h = 0u64;
    for &b in data {
        h = add_mod(mul_mod(h, RADIX, m), b as u64 % m, m);
    }
    h
}

/// `base^exp mod m` by repeated squaring, in exact integer arithmetic.
fn pow_mod(mut base: u64, mut exp: u64, m: u64) -> u64 {
    base %= m;
    let mut acc = 1 % m;
    while exp > 0 {
        if exp & 1 == 1 {
            acc = mul_mod(acc, base, m);
        }
        base = mul_mod(base, base, m);
        exp >>= 1;
    }
    acc
}
