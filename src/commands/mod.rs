// entry program
pub mod ugt;

// commands
mod flow;
mod help;
mod make;
mod synth;

// informational content for help about commands
mod helps;
mod manuals;
