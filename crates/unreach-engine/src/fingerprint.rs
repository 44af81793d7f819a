//! Method-Set Fingerprint (C2, §4.2).
//!
//! A 64-bit bitmask summary of a method set, used as a sound
//! rejection test before ever running the structural `implements`
//! check (§4.2, P3). The modulus is pinned to a machine word so the
//! subset test is a single `AND`/`NOT` pair.

use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};
use unreach_ir::Method;

/// `hash(method_id, param_count, result_count) mod 64`, set as a bit.
///
/// Arity is folded into the hash so two methods with the same name but
/// different signatures (overloads) never collide into the same bit
/// by name alone — a missing-arity mismatch must still be able to
/// reject the fast path.
pub fn fingerprint<'a>(methods: impl IntoIterator<Item = &'a Method>) -> u64 {
    let mut bits = 0u64;
    for method in methods {
        bits |= 1u64 << method_bit(method);
    }
    bits
}

fn method_bit(method: &Method) -> u32 {
    let mut hasher = FxHasher::default();
    method.name.hash(&mut hasher);
    method.param_count.hash(&mut hasher);
    method.result_count.hash(&mut hasher);
    (hasher.finish() % 64) as u32
}

/// The fast-path subset test (P3): if any bit required by `interface`
/// is absent from `concrete`, the concrete type cannot implement the
/// interface and the expensive structural check never runs.
///
/// This is a *sound* rejection, not a heuristic: a missing bit proves
/// a missing method. It can produce false positives (bits collide) but
/// never false negatives, which is why the structural check still
/// runs to confirm every pass.
pub fn fast_path_rejects(interface_fingerprint: u64, concrete_fingerprint: u64) -> bool {
    (interface_fingerprint & !concrete_fingerprint) != 0
}
