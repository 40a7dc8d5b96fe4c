pub mod flow;
pub mod make;
pub mod synth;
pub mod ugt;
