use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplier of the quality roll, a uniform draw in [0, 1).
///
/// The scorer asks for exactly one value per submission.
pub trait RollSource {
    fn roll(&mut self) -> f64;
}

/// Thread-local generator; what submissions use outside of tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRoll;

impl RollSource for RandomRoll {
    fn roll(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Seeded generator so a whole batch can be replayed.
#[derive(Debug, Clone)]
pub struct SeededRoll {
    rng: StdRng,
}

impl SeededRoll {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RollSource for SeededRoll {
    fn roll(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Always draws the same value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRoll(pub f64);

impl RollSource for FixedRoll {
    fn roll(&mut self) -> f64 {
        self.0
    }
}

/// Replays a list of draws, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedRoll {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedRoll {
    /// An empty script draws 0.99 (the basic band) forever
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl RollSource for ScriptedRoll {
    fn roll(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.99;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}
