//! Versioned on-disk cache for the combination table. Purely a latency
//! optimization: a missing file or a magic mismatch just means the
//! in-memory table gets built the normal way, which is already cheap.

use std::path::Path;

use rkyv::{Archive, Deserialize, Serialize};

use kakuro_core::combinations;

use crate::error::IoError;

const CACHE_MAGIC_V1: [u8; 8] = *b"KKROCOMB";

#[derive(Archive, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[rkyv(derive(Debug))]
struct CacheFileV1 {
    magic: [u8; 8],
    entries: Vec<CacheEntryV1>,
}

#[derive(Archive, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[rkyv(derive(Debug))]
struct CacheEntryV1 {
    sum: u8,
    k: u8,
    combos: Vec<Vec<u8>>,
}

/// One cached `(sum, k)` entry and its combinations, as handed back by
/// `load_combination_cache`.
pub type CachedCombos = ((u32, u32), Vec<Vec<u8>>);

fn encode() -> Result<Vec<u8>, IoError> {
    let mut entries = Vec::new();
    for sum in 1..=45u32 {
        for k in 1..=9u32 {
            let combos = combinations::combinations(sum, k);
            if combos.is_empty() {
                continue;
            }
            entries.push(CacheEntryV1 {
                sum: sum as u8,
                k: k as u8,
                combos: combos.iter().map(|c| c.to_vec()).collect(),
            });
        }
    }
    let file = CacheFileV1 { magic: CACHE_MAGIC_V1, entries };
    Ok(rkyv::to_bytes::<rkyv::rancor::Error>(&file)?.to_vec())
}

fn decode(bytes: &[u8]) -> Result<Vec<CachedCombos>, IoError> {
    let archived = rkyv::access::<ArchivedCacheFileV1, rkyv::rancor::Error>(bytes)?;
    if archived.magic != CACHE_MAGIC_V1 {
        return Err(IoError::InvalidCacheMagic);
    }
    let file: CacheFileV1 = rkyv::deserialize::<CacheFileV1, rkyv::rancor::Error>(archived)?;
    Ok(file.entries.into_iter().map(|e| ((e.sum as u32, e.k as u32), e.combos)).collect())
}

/// Serialize the current combination table to `path`.
pub fn save_combination_cache(path: &Path) -> Result<(), IoError> {
    std::fs::write(path, encode()?)?;
    Ok(())
}

/// Load a previously saved combination cache from `path`. Callers treat a
/// failure here as "rebuild", not as a hard error — `kakuro_core::combinations`
/// rebuilds its table lazily regardless of whether this ever runs.
pub fn load_combination_cache(path: &Path) -> Result<Vec<CachedCombos>, IoError> {
    let bytes = std::fs::read(path)?;
    decode(&bytes)
}
