//! Testing utilities and harness for Lumen

pub mod probes;
pub mod testing;

pub use probes::*;
pub use testing::*;

pub mod prelude {
    pub use crate::probes::*;
    pub use crate::testing::*;
}
