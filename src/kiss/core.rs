//! KISS64 state and step function.
//!
//! A [`Seed`] holds the complete state of one generator:
//!
//! - `x`: linear congruential component
//! - `y`: xorshift component, never zero (zero is a fixed point)
//! - `(c1, z1)`, `(c2, z2)`: multiply-with-carry components, carry and
//!   value, never both zero (the all-zero pair is a fixed point)
//!
//! Each step advances all four sub-generators and sums their outputs with
//! wrapping arithmetic. The combined generator has a period of roughly
//! 2^250 and passes the usual statistical batteries, but it is **not**
//! cryptographically secure: a handful of outputs is enough to recover the
//! state.

const LCG_MUL: u64 = 1_490_024_343_005_336_237;
const LCG_ADD: u64 = 123_456_789;

const MWC1_MUL: u64 = 4_294_584_393;
const MWC2_MUL: u64 = 4_246_477_509;

/// Complete state of one KISS64 generator.
///
/// A seed that satisfies [`Seed::is_valid`] never degenerates into a short
/// cycle. The all-zero seed ([`Seed::ZERO`]) is the placeholder a thread
/// slot holds before its first seeding and is not valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Seed {
    /// Linear congruential component.
    pub x: u64,

    /// Xorshift component.
    ///
    /// Must be non-zero.
    pub y: u64,

    /// Carry of the first multiply-with-carry component.
    pub c1: u32,

    /// Value of the first multiply-with-carry component.
    ///
    /// `c1` and `z1` must not both be zero.
    pub z1: u32,

    /// Carry of the second multiply-with-carry component.
    pub c2: u32,

    /// Value of the second multiply-with-carry component.
    ///
    /// `c2` and `z2` must not both be zero.
    pub z2: u32,
}

impl Seed {
    /// The zeroed placeholder state.
    pub const ZERO: Self = Self::new(0, 0, 0, 0, 0, 0);

    /// Creates a seed from its raw components.
    ///
    /// No validation is performed; see [`Seed::is_valid`].
    pub const fn new(x: u64, y: u64, c1: u32, z1: u32, c2: u32, z2: u32) -> Self {
        Self {
            x,
            y,
            c1,
            z1,
            c2,
            z2,
        }
    }

    /// Returns `true` if no component sits on a fixed point.
    pub const fn is_valid(&self) -> bool {
        self.y != 0 && (self.c1 != 0 || self.z1 != 0) && (self.c2 != 0 || self.z2 != 0)
    }

    /// Advances the state in place and returns the next 64-bit output.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        self.x = LCG_MUL.wrapping_mul(self.x).wrapping_add(LCG_ADD);

        self.y ^= self.y << 21;
        self.y ^= self.y >> 17;
        self.y ^= self.y << 30;

        (self.c1, self.z1) = mwc(MWC1_MUL, self.c1, self.z1);
        (self.c2, self.z2) = mwc(MWC2_MUL, self.c2, self.z2);

        self.x
            .wrapping_add(self.y)
            .wrapping_add(self.z1 as u64)
            .wrapping_add((self.z2 as u64) << 32)
    }
}

/// One multiply-with-carry update: `t = a * z + c`, new carry is the high
/// half of `t`, new value the low half.
///
/// `a * z + c` cannot overflow 64 bits since `a`, `z`, `c` all fit in 32.
#[inline(always)]
fn mwc(a: u64, c: u32, z: u32) -> (u32, u32) {
    let t = a * z as u64 + c as u64;
    ((t >> 32) as u32, t as u32)
}

/// Pure form of [`Seed::next_u64`]: returns the successor state alongside
/// the output, leaving the input untouched.
pub fn advance(seed: Seed) -> (Seed, u64) {
    let mut next = seed;
    let out = next.next_u64();
    (next, out)
}
