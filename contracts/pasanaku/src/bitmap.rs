use soroban_sdk::{BytesN, Env};

/// Number of positions a [`PresenceMask`] can track. Also caps the member count.
pub const WIDTH: u32 = 256;

const BYTES: usize = (WIDTH / 8) as usize;

/// Fixed-width presence bitmap keyed by member position.
/// Position `i` lives in byte `i / 8`, bit `i % 8`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PresenceMask([u8; BYTES]);

impl PresenceMask {
    pub const fn empty() -> Self {
        Self([0; BYTES])
    }

    pub fn from_bytes(bytes: &BytesN<32>) -> Self {
        Self(bytes.to_array())
    }

    pub fn to_bytes(&self, env: &Env) -> BytesN<32> {
        BytesN::from_array(env, &self.0)
    }

    pub fn is_set(&self, position: u32) -> bool {
        if position >= WIDTH {
            return false;
        }
        self.0[(position / 8) as usize] & (1 << (position % 8)) != 0
    }

    pub fn set(&mut self, position: u32) {
        if position < WIDTH {
            self.0[(position / 8) as usize] |= 1 << (position % 8);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn count(&self) -> u32 {
        self.0.iter().map(|b| b.count_ones()).sum()
    }

    /// Drops `position` and shifts every higher bit down by one, mirroring
    /// the compaction of the member list on removal.
    pub fn remove(&mut self, position: u32) {
        let mut compacted = Self::empty();
        let mut dst = 0;
        for src in 0..WIDTH {
            if src == position {
                continue;
            }
            if self.is_set(src) {
                compacted.set(dst);
            }
            dst += 1;
        }
        *self = compacted;
    }
}
