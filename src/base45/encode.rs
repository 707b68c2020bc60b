use super::{Alphabet, ALPHABET};
use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The output buffer was too small to contain the entire output.
    BufferTooSmall,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BufferTooSmall => write!(f, "Output buffer too small"),
        }
    }
}

/// Number of characters produced for `len` input bytes.
pub const fn encoded_len(len: usize) -> usize {
    (len / 2) * 3 + (len % 2) * 2
}

pub struct Encoder<'a> {
    alphabet: &'a Alphabet<45>,
}

impl<'a> Encoder<'a> {
    const fn new(alphabet: &'a Alphabet<45>) -> Self {
        Self { alphabet }
    }

    fn encode_with(&self, input: &[u8], mut push: impl FnMut(u8)) {
        let mut pairs = input.chunks_exact(2);
        for pair in &mut pairs {
            let value = ((pair[0] as usize) << 8) | (pair[1] as usize);
            push(self.alphabet.encode(value % 45));
            push(self.alphabet.encode((value / 45) % 45));
            push(self.alphabet.encode(value / (45 * 45)));
        }
        if let &[value] = pairs.remainder() {
            let value = value as usize;
            push(self.alphabet.encode(value % 45));
            push(self.alphabet.encode(value / 45));
        }
    }

    pub fn encode_into(&self, input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
        let input = input.as_ref();
        let output = output.as_mut();
        let len = encoded_len(input.len());
        if output.len() < len {
            return Err(Error::BufferTooSmall);
        }
        let mut index = 0;
        self.encode_with(input, |character| {
            output[index] = character;
            index += 1;
        });
        Ok(len)
    }

    pub fn encode(&self, input: impl AsRef<[u8]>) -> String {
        let input = input.as_ref();
        let mut output = String::with_capacity(encoded_len(input.len()));
        self.encode_with(input, |character| output.push(character as char));
        output
    }

    pub fn default() -> &'static Self {
        &ENCODER
    }
}

const ENCODER: Encoder = Encoder::new(&ALPHABET);

/// Encodes `input` as a Base45 string.
///
/// Only byte buffers are accepted:
///
/// ```compile_fail
/// base45_codec::encode(123456u32);
/// ```
///
/// ```compile_fail
/// base45_codec::encode(true);
/// ```
pub fn encode(input: impl AsRef<[u8]>) -> String {
    Encoder::default().encode(input)
}

pub fn encode_into(input: impl AsRef<[u8]>, output: &mut impl AsMut<[u8]>) -> Result<usize, Error> {
    Encoder::default().encode_into(input, output)
}
