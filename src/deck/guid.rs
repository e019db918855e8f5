// src/deck/guid.rs
// Anki note GUIDs: sha256 of the values joined by "__", first 8 bytes as a
// big-endian integer, written in Anki's base-91 alphabet. Same values, same GUID.

use sha2::{Digest, Sha256};

const BASE91: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!#$%&()*+,-./:;<=>?@[]^_`{|}~";

pub fn guid_for(values: &[&str]) -> String {
    let joined = values.join("__");
    let digest = Sha256::digest(joined.as_bytes());
    let mut n = digest.iter().take(8).fold(0u64, |acc, b| (acc << 8) | u64::from(*b));

    let base = BASE91.len() as u64;
    let mut rev = Vec::with_capacity(10);
    while n > 0 {
        rev.push(BASE91[(n % base) as usize]);
        n /= base;
    }
    rev.iter().rev().map(|&b| b as char).collect()
}
