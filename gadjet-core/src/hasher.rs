use std::hash::{BuildHasher, Hasher};

const FNV_OFFSET_BASIS: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

/// FNV-1a 64-bit hash of some text. Used to key injected style blocks by content.
#[inline]
pub(crate) fn content_hash(text: &str) -> u64 {
    let mut hasher = ContentHasher::default();
    hasher.write(text.as_bytes());
    hasher.finish()
}

/// FNV-1a 64-bit. Stable across runs and platforms, unlike `DefaultHasher`.
pub(crate) struct ContentHasher(u64);

impl Default for ContentHasher {
    #[inline]
    fn default() -> Self {
        Self(FNV_OFFSET_BASIS)
    }
}

impl Hasher for ContentHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 ^= b as u64;
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }
}

/// For maps keyed by values that are already hashes.
#[derive(Clone, Default)]
pub(crate) struct IdentityBuildHasher;

pub(crate) struct IdentityHasher(u64);

impl Default for IdentityHasher {
    #[inline]
    fn default() -> Self {
        Self(0)
    }
}

impl Hasher for IdentityHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.0 = i;
    }

    // Only u64 keys are expected.
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        debug_assert!(false);

        let mut hasher = ContentHasher::default();
        hasher.write(bytes);
        self.0 = hasher.finish();
    }
}

impl BuildHasher for IdentityBuildHasher {
    type Hasher = IdentityHasher;

    #[inline]
    fn build_hasher(&self) -> Self::Hasher {
        IdentityHasher::default()
    }
}
