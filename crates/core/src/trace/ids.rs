use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::RngCore;
use rand::rngs::OsRng;
use uuid::Builder;

/// Produces render-identity ids for trace lines. Uniqueness within the
/// process is the only contract.
pub trait LineIds {
    fn next_id(&mut self) -> String;
}

/// UUID v4 from the OS random source, degrading to a time + counter id
/// when no random source is available.
#[derive(Debug, Default)]
pub struct UuidLineIds {
    fallback: FallbackLineIds,
    warned: bool,
}

impl LineIds for UuidLineIds {
    fn next_id(&mut self) -> String {
        let mut bytes = [0u8; 16];
        match OsRng.try_fill_bytes(&mut bytes) {
            Ok(()) => Builder::from_random_bytes(bytes).into_uuid().to_string(),
            Err(e) => {
                if !self.warned {
                    log::warn!("random source unavailable ({e}); using time-based trace line ids");
                    self.warned = true;
                }
                self.fallback.next_id()
            }
        }
    }
}

/// `"<millis since epoch>-<counter>"`, both in hex.
#[derive(Debug, Default)]
pub struct FallbackLineIds {
    counter: u64,
}

impl LineIds for FallbackLineIds {
    fn next_id(&mut self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .as_ref()
            .map(Duration::as_millis)
            .unwrap_or_default();
        self.counter = self.counter.wrapping_add(1);
        format!("{millis:x}-{:x}", self.counter)
    }
}

/// `line-1`, `line-2`, … for deterministic tests and snapshots.
#[derive(Debug, Default)]
pub struct SequentialLineIds {
    next: u64,
}

impl LineIds for SequentialLineIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("line-{}", self.next)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn uuid_ids_are_unique_v4() {
        let mut ids = UuidLineIds::default();
        let seen: HashSet<String> = (0..500).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 500);
        let sample = ids.next_id();
        assert_eq!(sample.len(), 36);
        assert_eq!(sample.as_bytes()[14], b'4');
    }

    #[test]
    fn fallback_ids_never_repeat_within_a_millisecond() {
        let mut ids = FallbackLineIds::default();
        let seen: HashSet<String> = (0..1000).map(|_| ids.next_id()).collect();
        assert_eq!(seen.len(), 1000);
    }
}
