pub mod chainer;
pub mod error;
pub mod generator;
pub mod grid;
pub mod logger;
pub mod scanner;
pub mod seeder;
pub mod word;

pub use error::GenerateError;
pub use generator::{GenerationReport, GeneratorConfig, Phase, PuzzleGenerator};
pub use grid::{Grid, Pos};
pub use word::SeedWord;
