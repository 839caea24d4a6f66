pub mod analyzer;
pub mod engine;
pub mod export;
pub mod io;
pub mod leet;
pub mod patterns;
pub mod report;
pub mod seed;
pub mod server;
pub mod stem;
pub mod variants;

pub mod prelude {
    pub use crate::analyzer::{Analysis, analyze};
    pub use crate::engine::{Generator, GeneratorOptions, generate};
    pub use crate::seed::SeedToken;
}
