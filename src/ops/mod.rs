pub mod progress_ops;
pub mod scaffold;
