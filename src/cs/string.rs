pub mod naive;
pub mod rabin_karp;

pub use rabin_karp::{search, Matches, RabinKarp, RabinKarpBuilder, DEFAULT_MODULUS, RADIX};
