/// 16-bit Fibonacci linear-feedback shift register (taps 16, 14, 13, 11)
///
/// Each step shifts one feedback bit in at the top, so a full `u16` of fresh
/// output takes sixteen steps. The all-zero state is a fixed point and is
/// never produced from a non-zero seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lfsr16 {
    state: u16,
}

impl Lfsr16 {
    pub const fn new(seed: u16) -> Self {
        // zero would lock the register
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub const fn state(&self) -> u16 {
        self.state
    }

    /// Advance one step and return the bit shifted in
    pub fn next_bit(&mut self) -> u16 {
        let s = self.state;
        let bit = (s ^ (s >> 2) ^ (s >> 3) ^ (s >> 5)) & 1;
        self.state = (s >> 1) | (bit << 15);
        bit
    }

    /// Next 16 pseudo-random bits
    pub fn next_u16(&mut self) -> u16 {
        for _ in 0..16 {
            self.next_bit();
        }
        self.state
    }
}
