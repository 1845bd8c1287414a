/// Render buffer dump command.
pub mod buffers;
/// File-level information command.
pub mod info;
/// Decoded scene summary command.
pub mod scene;
/// Generic record tree printing command.
pub mod tree;

mod util;

#[cfg(test)]
mod test_support;
