//! RFC 9285 Base45 encoding.
//!
//! Two bytes become three characters of the alphabet
//! `0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:`, a trailing odd byte becomes two.
//!
//! ```
//! assert_eq!(base45_codec::encode("Hello!!"), "%69 VD92EX0");
//! assert_eq!(base45_codec::decode("%69 VD92EX0").unwrap(), b"Hello!!");
//! assert!(base45_codec::decode("GGW").is_err());
//! ```

pub mod base45;
pub mod base_common;

pub use self::base45::{decode, decode_into, decoded_len, encode, encode_into, encoded_len, Decoder, Encoder, ALPHABET};
pub use self::base45::{decode::Error as DecodeError, encode::Error as EncodeError};
pub use self::base_common::Alphabet;
pub use self::base45::serde;
