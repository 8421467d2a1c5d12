//! Seeded randomness

/// ARC4 keystream seeded from text
pub mod arc4;
/// Floats, integers and shuffles drawn from the stream
pub mod random;
