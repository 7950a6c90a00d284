pub mod normalize;
pub mod stack;

pub use normalize::normalize_response;
pub use stack::{infer_stack, StackHints};
