pub mod decode;
pub mod encode;
pub mod serde;
pub use crate::base_common::Alphabet;

/// The RFC 9285 alphabet. The order of the characters is the symbol value.
pub const ALPHABET: Alphabet<45> = match Alphabet::new(b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:") {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("Could not build alphabet"),
};

pub use decode::{decode, decode_into, decoded_len, Decoder};
pub use encode::{encode, encode_into, encoded_len, Encoder};
