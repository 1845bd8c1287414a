//! Public library API for decoding binary DirectX `.x` scene files.

/// Header, token stream, record tree, and mesh extraction for `.x` files.
pub mod xof;
