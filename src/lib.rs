//! Counter-based random streams for SPMD workloads.
//!
//! A root [`Threefry4x64Engine`] is seeded once per run; every worker derives a
//! private engine with [`derive`] and then owns it outright.  No state is shared
//! and nothing needs synchronizing.  [`EngineMapper`] and [`BoxedEngine`] adapt
//! any engine (including `rand_chacha`/`rand_pcg` ones) to a common 32- or
//! 64-bit interface, and every engine implements `rand_core::RngCore` so it can
//! feed `rand_distr` distributions.

pub mod word;
pub mod threefry;
pub mod engine;
pub mod counter_engine;
pub mod derive;
pub mod foreign;
pub mod mapper;
pub mod boxed;
pub mod seed;

pub use boxed::{erase_as_32, erase_as_64, AnyEngine32, AnyEngine64, BoxedEngine};
pub use counter_engine::{
    CounterEngine, Threefry2x32Engine, Threefry2x64Engine, Threefry4x32Engine, Threefry4x64Engine,
};
pub use derive::{derive, derive_seeded, Derivable};
pub use engine::RandomEngine;
pub use mapper::{wrap_as_32, wrap_as_64, EngineMapper, EngineMapper32, EngineMapper64};
pub use seed::{RootSeed, SeedError};
pub use threefry::{BlockFunction, Threefry, Threefry2x32, Threefry2x64, Threefry4x32, Threefry4x64};
pub use word::{Word, WordTuple};
