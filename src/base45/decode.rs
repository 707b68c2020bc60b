use super::{Alphabet, ALPHABET};
use crate::base_common::alphabet;
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    BufferTooSmall,
    InvalidLength { length: usize },
    InvalidCharacter { character: char, index: usize },
    /// A group decoded to more than 16 bits (triplet) or 8 bits (trailing pair).
    InvalidValue { value: usize, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "Output buffer too small"),
            Self::InvalidLength { length } => write!(f, "Invalid input length {}", length),
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character {:?} at index {}", character, index),
            Self::InvalidValue { value, index } => write!(f, "Invalid decoded value {} at index {}", value, index),
        }
    }
}

impl From<alphabet::DecodeError> for Error {
    fn from(error: alphabet::DecodeError) -> Self {
        match error {
            alphabet::DecodeError::InvalidCharacter { character, index } => Error::InvalidCharacter { character, index },
        }
    }
}

/// Number of bytes produced for an input of `len` characters.
pub fn decoded_len(len: usize) -> Result<usize, Error> {
    match len % 3 {
        1 => Err(Error::InvalidLength { length: len }),
        remainder => Ok((len / 3) * 2 + remainder / 2),
    }
}

pub struct Decoder<'a> {
    alphabet: &'a Alphabet<45>,
}

impl<'a> Decoder<'a> {
    const fn new(alphabet: &'a Alphabet<45>) -> Self {
        Self { alphabet }
    }

    fn digits<const M: usize>(&self, characters: &mut impl Iterator<Item = (usize, char)>, length: usize) -> Result<usize, Error> {
        let mut value = 0;
        let mut weight = 1;
        for _ in 0..M {
            let (index, character) = characters.next().ok_or(Error::InvalidLength { length })?;
            value += self.alphabet.decode(character, index)? as usize * weight;
            weight *= 45;
        }
        Ok(value)
    }

    fn decode_chars(&self, input: &str, length: usize, output: &mut [u8]) -> Result<usize, Error> {
        let len = decoded_len(length)?;
        let output = output.get_mut(..len).ok_or(Error::BufferTooSmall)?;
        let mut characters = input.chars().enumerate();
        let mut pairs = output.chunks_exact_mut(2);
        for (group, pair) in (&mut pairs).enumerate() {
            let value = self.digits::<3>(&mut characters, length)?;
            if value > 0xFFFF {
                return Err(Error::InvalidValue { value, index: group * 3 });
            }
            pair[0] = (value >> 8) as u8;
            pair[1] = (value & 0xFF) as u8;
        }
        if let [byte] = pairs.into_remainder() {
            let value = self.digits::<2>(&mut characters, length)?;
            if value > 0xFF {
                return Err(Error::InvalidValue { value, index: length - 2 });
            }
            *byte = value as u8;
        }
        Ok(len)
    }

    pub fn decode_into(&self, input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        self.decode_chars(input, input.chars().count(), output.as_mut())
    }

    pub fn decode(&self, input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
        let input = input.as_ref();
        let length = input.chars().count();
        let mut output = vec![0u8; decoded_len(length)?];
        self.decode_chars(input, length, &mut output)?;
        Ok(output)
    }

    pub fn default() -> &'static Self {
        &DECODER
    }
}

const DECODER: Decoder = Decoder::new(&ALPHABET);

/// Decodes a Base45 string.
///
/// ```compile_fail
/// base45_codec::decode(b"BB8".to_vec());
/// ```
pub fn decode(input: impl AsRef<str>) -> Result<Vec<u8>, Error> {
    Decoder::default().decode(input)
}

pub fn decode_into(input: impl AsRef<str>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Decoder::default().decode_into(input, output)
}
