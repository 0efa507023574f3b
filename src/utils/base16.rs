//! Decoding and encoding of Base 16 a.k.a. hex digits.
//!
//! The Base 16 encoding is defined in [RFC 4648]. It really is just a normal
//! hex-encoding using the (case-insensitive) letters ‘A’ to ‘F’ as
//! additional values for the digits.
//!
//! [RFC 4648]: https://tools.ietf.org/html/rfc4648

use core::fmt;

//------------ Re-exports ----------------------------------------------------

pub use super::base64::DecodeError;

//------------ Convenience Functions -----------------------------------------

/// Decodes a string with Base 16 data and returns it as a vec.
pub fn decode_vec(s: &str) -> Result<Vec<u8>, DecodeError> {
    let mut decoder = Decoder::new();
    for ch in s.chars() {
        decoder.push(ch)?;
    }
    decoder.finalize()
}

/// Encodes binary data in Base 16 and writes it into a format stream.
pub fn display<Octets, Target>(octets: &Octets, f: &mut Target) -> fmt::Result
where
    Octets: AsRef<[u8]> + ?Sized,
    Target: fmt::Write,
{
    for &octet in octets.as_ref() {
        f.write_char(ENCODE_ALPHABET[usize::from(octet >> 4)])?;
        f.write_char(ENCODE_ALPHABET[usize::from(octet & 0x0F)])?;
    }
    Ok(())
}

/// Encodes binary data in Base 16 and returns the encoded data as a string.
pub fn encode_string<B: AsRef<[u8]> + ?Sized>(bytes: &B) -> String {
    let mut res = String::with_capacity(bytes.as_ref().len() * 2);
    let _ = display(bytes, &mut res);
    res
}

/// Returns a placeholder value that implements `Display` for encoded data.
pub fn encode_display<Octets: AsRef<[u8]> + ?Sized>(
    octets: &Octets,
) -> impl fmt::Display + '_ {
    struct Display<'a>(&'a [u8]);

    impl<'a> fmt::Display for Display<'a> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            display(self.0, f)
        }
    }

    Display(octets.as_ref())
}

//------------ Decoder -------------------------------------------------------

/// A Base 16 decoder.
///
/// This type keeps all the state for decoding a sequence of characters
/// representing data encoded in Base 16. Upon success, the decoder returns
/// the decoded data.
#[derive(Clone, Debug, Default)]
pub struct Decoder {
    /// A buffer for the first half of an octet.
    buf: Option<u8>,

    /// The decoded data.
    target: Vec<u8>,
}

impl Decoder {
    /// Creates a new, empty decoder.
    #[must_use]
    pub fn new() -> Self {
        Default::default()
    }

    /// Finalizes decoding and returns the decoded data.
    pub fn finalize(self) -> Result<Vec<u8>, DecodeError> {
        if self.buf.is_some() {
            return Err(DecodeError::ShortInput);
        }
        Ok(self.target)
    }

    /// Decodes one more character of data.
    pub fn push(&mut self, ch: char) -> Result<(), DecodeError> {
        let value = match ch.to_digit(16) {
            Some(value) => value as u8,
            None => return Err(DecodeError::IllegalChar(ch)),
        };
        if let Some(upper) = self.buf.take() {
            self.target.push(upper | value);
        } else {
            self.buf = Some(value << 4)
        }
        Ok(())
    }
}

//------------ Constants -----------------------------------------------------

/// The alphabet used for encoding.
///
/// Presentation format of record data uses lower case hex digits.
const ENCODE_ALPHABET: [char; 16] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd',
    'e', 'f',
];

//============ Test ==========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decode_str() {
        assert_eq!(&decode_vec("").unwrap(), b"");
        assert_eq!(&decode_vec("F0").unwrap(), b"\xF0");
        assert_eq!(&decode_vec("F00f").unwrap(), b"\xF0\x0F");
        assert_eq!(decode_vec("F0F").unwrap_err(), DecodeError::ShortInput);
        assert_eq!(
            decode_vec("FG").unwrap_err(),
            DecodeError::IllegalChar('G')
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(encode_string(b""), "");
        assert_eq!(encode_string(b"\xf0"), "f0");
        assert_eq!(encode_string(b"\xf0\x0f"), "f00f");
    }
}
