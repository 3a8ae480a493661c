//! The catalog of hashing algorithms supported by the marketplace.
//!
//! An algorithm's position in [`ALGORITHMS`] is the integer the API uses to identify it on the
//! wire, so the order of this list is part of the API contract and must never change. New
//! algorithms are only ever appended.

use phf::phf_map;

use crate::Result;
use crate::error::{IndexOutOfRange, UnknownAlgorithm};

/// Algorithm names, ordered by their wire identifier.
pub const ALGORITHMS: &[&str] = &[
    "Scrypt",
    "SHA256",
    "ScryptNf",
    "X11",
    "X13",
    "Keccak",
    "X15",
    "Nist5",
    "NeoScrypt",
    "Lyra2RE",
    "WhirlpoolX",
    "Qubit",
    "Quark",
    "Axiom",
    "Lyra2REv2",
    "ScryptJaneNf16",
    "Blake256r8",
    "Blake256r14",
    "Blake256r8vnl",
    "Hodl",
    "DaggerHashimoto",
    "Decred",
    "CryptoNight",
    "Lbry",
    "Equihash",
    "Pascal",
    "X11Gost",
    "Sia",
    "Blake2s",
    "Skunk",
];

// Reverse index of `ALGORITHMS`, checked against it in tests.
static INDEX: phf::Map<&'static str, usize> = phf_map! {
    "Scrypt" => 0,
    "SHA256" => 1,
    "ScryptNf" => 2,
    "X11" => 3,
    "X13" => 4,
    "Keccak" => 5,
    "X15" => 6,
    "Nist5" => 7,
    "NeoScrypt" => 8,
    "Lyra2RE" => 9,
    "WhirlpoolX" => 10,
    "Qubit" => 11,
    "Quark" => 12,
    "Axiom" => 13,
    "Lyra2REv2" => 14,
    "ScryptJaneNf16" => 15,
    "Blake256r8" => 16,
    "Blake256r14" => 17,
    "Blake256r8vnl" => 18,
    "Hodl" => 19,
    "DaggerHashimoto" => 20,
    "Decred" => 21,
    "CryptoNight" => 22,
    "Lbry" => 23,
    "Equihash" => 24,
    "Pascal" => 25,
    "X11Gost" => 26,
    "Sia" => 27,
    "Blake2s" => 28,
    "Skunk" => 29,
};

/// Number of algorithms in the registry.
#[must_use]
pub const fn len() -> usize {
    ALGORITHMS.len()
}

/// Iterates `(identifier, name)` pairs in wire order.
pub fn algorithms() -> impl Iterator<Item = (usize, &'static str)> {
    ALGORITHMS.iter().copied().enumerate()
}

/// Returns the wire identifier of the algorithm called `name`. Names are case-sensitive.
///
/// # Example
///
/// ```
/// use nicehash_client_sdk::registry;
///
/// assert_eq!(registry::index_of("X11").unwrap(), 3);
/// ```
pub fn index_of(name: &str) -> Result<usize> {
    INDEX.get(name).copied().ok_or_else(|| {
        UnknownAlgorithm {
            name: name.to_owned(),
        }
        .into()
    })
}

/// Returns the name of the algorithm with wire identifier `index`.
pub fn name_of(index: usize) -> Result<&'static str> {
    ALGORITHMS.get(index).copied().ok_or_else(|| {
        IndexOutOfRange {
            index,
            len: len(),
        }
        .into()
    })
}
