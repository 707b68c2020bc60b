use std::{error, fmt};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    DuplicateCharacter { character: char, first: usize, second: usize },
    NonAsciiCharacter { character: u8, index: usize },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum DecodeError {
    InvalidCharacter { character: char, index: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCharacter { character, first, second } => {
                write!(f, "Duplicate character '{}' at indexes {} and {}", character, first, second)
            }
            Self::NonAsciiCharacter { character, index } => write!(f, "Non-ascii character {:#04x} at index {}", character, index),
        }
    }
}

impl error::Error for DecodeError {}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCharacter { character, index } => write!(f, "Invalid character {:?} at index {}", character, index),
        }
    }
}

/// A symbol table of `N` ASCII characters together with its inverse.
///
/// The inverse covers every code point below 256; anything above is never a
/// symbol.
pub struct Alphabet<const N: usize> {
    encode: [u8; N],
    decode: [Option<u8>; 256],
}

impl<const N: usize> Alphabet<N> {
    pub(crate) const fn new(characters: &[u8; N]) -> Result<Self, Error> {
        let mut encode = [0u8; N];
        let mut decode: [Option<u8>; 256] = [None; 256];

        let mut index = 0;
        while index < N {
            let character = characters[index];
            if character >= 128 {
                return Err(Error::NonAsciiCharacter { index, character });
            }
            if let Some(first) = decode[character as usize] {
                return Err(Error::DuplicateCharacter {
                    character: character as char,
                    first: first as usize,
                    second: index,
                });
            }
            encode[index] = character;
            decode[character as usize] = Some(index as u8);
            index += 1;
        }

        Ok(Self { encode, decode })
    }

    /// Returns the character for a symbol value. `value` must be below `N`.
    pub fn encode(&self, value: usize) -> u8 {
        self.encode[value]
    }

    /// Returns the symbol value of `character`, found at `index` of the input.
    pub fn decode(&self, character: char, index: usize) -> Result<u8, DecodeError> {
        let symbol = match u8::try_from(character) {
            Ok(code) => self.decode[code as usize],
            Err(_) => None,
        };
        symbol.ok_or(DecodeError::InvalidCharacter { character, index })
    }

    pub fn contains(&self, character: char) -> bool {
        self.decode(character, 0).is_ok()
    }

    pub const fn len(&self) -> usize {
        N
    }

    pub fn characters(&self) -> impl Iterator<Item = char> + '_ {
        self.encode.iter().map(|&character| character as char)
    }
}

#[cfg(test)]
mod tests {
    use super::{Alphabet, DecodeError, Error};

    #[test]
    fn new() {
        assert!(Alphabet::new(b"abc").is_ok());
        assert_eq!(
            Alphabet::new(b"abca").err(),
            Some(Error::DuplicateCharacter {
                character: 'a',
                first: 0,
                second: 3
            })
        );
        assert_eq!(
            Alphabet::new(&[b'a', 0xe9]).err(),
            Some(Error::NonAsciiCharacter { character: 0xe9, index: 1 })
        );
    }

    #[test]
    fn decode() {
        let alphabet = match Alphabet::new(b"xyz") {
            Ok(alphabet) => alphabet,
            Err(error) => panic!("{}", error),
        };
        assert_eq!(alphabet.decode('x', 0), Ok(0));
        assert_eq!(alphabet.decode('z', 7), Ok(2));
        assert_eq!(alphabet.decode('a', 3), Err(DecodeError::InvalidCharacter { character: 'a', index: 3 }));
        assert_eq!(alphabet.decode('\u{ff}', 1), Err(DecodeError::InvalidCharacter { character: '\u{ff}', index: 1 }));
        assert_eq!(
            alphabet.decode('\u{178}', 2),
            Err(DecodeError::InvalidCharacter { character: '\u{178}', index: 2 })
        );
        assert_eq!(alphabet.encode(1), b'y');
        assert_eq!(alphabet.len(), 3);
        assert_eq!(alphabet.characters().collect::<String>(), "xyz");
    }
}
