mod reader;

pub use reader::{Input, InputReader, MAX_INPUT_SIZE};
