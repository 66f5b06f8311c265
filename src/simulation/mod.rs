pub mod progress;
pub use progress::*;

pub mod round;
pub use round::*;

pub mod simulator;
pub use simulator::*;
