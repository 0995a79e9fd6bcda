/// Source of unit-interval randomness for the simulator.
///
/// Every draw the simulator makes comes through this trait, so tests can
/// substitute a scripted sequence and assert exact outputs.
pub trait Entropy {
    /// Next draw in `[0, 1)`.
    fn unit(&mut self) -> f64;
}

impl Entropy for fastrand::Rng {
    fn unit(&mut self) -> f64 {
        self.f64()
    }
}
