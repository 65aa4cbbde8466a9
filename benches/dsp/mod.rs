//! Benchmarks for slide voice primitives.

mod amplify;
mod envelope;
mod graph;
mod position;

pub use amplify::bench_amplify;
pub use envelope::bench_envelope;
pub use graph::bench_graph;
pub use position::bench_position;
