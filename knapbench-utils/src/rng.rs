use anyhow::{anyhow, Result};
use rand::RngCore;

/// Marsaglia xorshift generator with the (13, 7, 17) shift triple.
///
/// Every benchmark input is drawn from this generator, so the update below
/// must stay exactly as written for results to line up with existing
/// baselines. Zero is an absorbing state and is rejected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShift64 {
    x: u64,
}

impl XorShift64 {
    pub fn new(seed: u64) -> Result<Self> {
        if seed == 0 {
            return Err(anyhow!("Invalid argument: xorshift seed must be non-zero"));
        }
        Ok(Self { x: seed })
    }

    pub fn next(&mut self) -> u64 {
        // shifts on u64 discard overflowing bits, i.e. arithmetic mod 2^64
        self.x ^= self.x << 13;
        self.x ^= self.x >> 7;
        self.x ^= self.x << 17;
        self.x
    }

    pub fn state(&self) -> u64 {
        self.x
    }
}

impl RngCore for XorShift64 {
    fn next_u32(&mut self) -> u32 {
        (self.next() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
