use blake3::Hasher;

use crate::index::AliasIndex;

/// Content fingerprint of an [`AliasIndex`], independent of how it was encoded.
///
/// Entities are fed in identifier order and aliases in sorted order, with length
/// prefixes so that `("ab", ["c"])` and `("a", ["bc"])` never collide structurally.
pub fn hash_index(index: &AliasIndex) -> [u8; 32] {
    let mut hasher = Hasher::new();
    hasher.update(&(index.len() as u64).to_le_bytes());
    for (id, aliases) in index.iter() {
        update_str(&mut hasher, id);
        hasher.update(&(aliases.len() as u64).to_le_bytes());
        for alias in aliases {
            update_str(&mut hasher, alias);
        }
    }
    *hasher.finalize().as_bytes()
}

/// Fingerprint of raw bytes (cache files, staged payloads).
#[inline]
pub fn hash_bytes(data: &[u8]) -> [u8; 32] {
    *blake3::hash(data).as_bytes()
}

/// First 8 bytes of the BLAKE3 hash, for compact log fields.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Short hex rendering of a fingerprint for log lines.
pub fn short_hex(fingerprint: &[u8; 32]) -> String {
    fingerprint[..6].iter().map(|b| format!("{b:02x}")).collect()
}

fn update_str(hasher: &mut Hasher, value: &str) {
    hasher.update(&(value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
