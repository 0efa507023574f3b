//! Reading data in presentation format.
//!
//! Presentation format is the textual representation of DNS data used in
//! zone files and by most tools. It consists of tokens separated by white
//! space, with `;` introducing a comment that lasts until the end of the
//! line and parentheses allowing an entry to span several lines.
//!
//! The [`Tokenizer`] splits text into [`Token`]s and provides typed getters
//! for the fields found in record data. Escape sequences are kept in the
//! token values; they are resolved by whoever interprets the token, using
//! [`Symbol`] to read one character or escape sequence at a time.

use super::name::{Name, NameError};
use super::ttl;
use crate::utils::base64::DecodeError;
use core::fmt;
use core::str::FromStr;

//------------ Symbol --------------------------------------------------------

/// The character symbol and how it was encoded.
///
/// This type represents a character in presentation format together with
/// the way it was written: either plainly, escaped with a backslash, or
/// as a three digit decimal escape.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Symbol {
    /// An unescaped Unicode character.
    Char(char),

    /// A character escaped via a preceding backslash.
    SimpleEscape(u8),

    /// An octet value given in decimal as three digits after a backslash.
    DecimalEscape(u8),
}

impl Symbol {
    /// Reads a symbol from a character source.
    ///
    /// Returns the next symbol in the source, `Ok(None)` if the source has
    /// been exhausted, or an error if there wasn’t a valid symbol.
    pub fn from_chars<C: Iterator<Item = char>>(
        chars: &mut C,
    ) -> Result<Option<Self>, SymbolCharsError> {
        #[inline]
        fn bad_escape() -> SymbolCharsError {
            SymbolCharsError::BadEscape
        }

        #[inline]
        fn short_input() -> SymbolCharsError {
            SymbolCharsError::ShortInput
        }

        let ch = match chars.next() {
            Some(ch) => ch,
            None => return Ok(None),
        };
        if ch != '\\' {
            return Ok(Some(Symbol::Char(ch)));
        }
        match chars.next() {
            Some(ch) if ch.is_ascii_digit() => {
                let ch = ch.to_digit(10).unwrap_or(0) * 100;
                let ch2 = match chars.next() {
                    Some(ch) => match ch.to_digit(10) {
                        Some(ch) => ch * 10,
                        None => return Err(bad_escape()),
                    },
                    None => return Err(short_input()),
                };
                let ch3 = match chars.next() {
                    Some(ch) => match ch.to_digit(10) {
                        Some(ch) => ch,
                        None => return Err(bad_escape()),
                    },
                    None => return Err(short_input()),
                };
                let res = ch + ch2 + ch3;
                if res > 255 {
                    return Err(bad_escape());
                }
                Ok(Some(Symbol::DecimalEscape(res as u8)))
            }
            Some(ch) => {
                let ch = u8::try_from(ch).map_err(|_| bad_escape())?;
                Ok(Some(Symbol::SimpleEscape(ch)))
            }
            None => Err(short_input()),
        }
    }

    /// Provides the best symbol for an octet.
    ///
    /// The function will use the simple escape sequence for octet values
    /// that have a special meaning in presentation format and the plain
    /// ASCII value for all other printable ASCII characters. Any other
    /// value is escaped using the decimal escape sequence.
    pub fn from_octet(ch: u8) -> Self {
        if b"\"().;\\@$".contains(&ch) {
            Symbol::SimpleEscape(ch)
        } else if !(0x21..0x7F).contains(&ch) {
            Symbol::DecimalEscape(ch)
        } else {
            Symbol::Char(ch as char)
        }
    }

    /// Provides the symbol for an octet inside a quoted character string.
    ///
    /// Only the quote and the backslash need escaping in there.
    pub fn from_quoted_octet(ch: u8) -> Self {
        if ch == b'"' || ch == b'\\' {
            Symbol::SimpleEscape(ch)
        } else if !(0x20..0x7F).contains(&ch) {
            Symbol::DecimalEscape(ch)
        } else {
            Symbol::Char(ch as char)
        }
    }

    /// Converts the symbol into an octet if it represents one.
    ///
    /// Both domain names and character strings operate on bytes instead of
    /// characters. These bytes can be represented by printable ASCII
    /// characters, both plain or through a simple escape, or by a decimal
    /// escape.
    pub fn into_octet(self) -> Result<u8, BadSymbol> {
        match self {
            Symbol::Char(ch) => {
                if ch.is_ascii() && ('\u{20}'..='\u{7E}').contains(&ch) {
                    Ok(ch as u8)
                } else {
                    Err(BadSymbol(self))
                }
            }
            Symbol::SimpleEscape(ch) | Symbol::DecimalEscape(ch) => Ok(ch),
        }
    }

    /// Appends the octets this symbol stands for to `target`.
    ///
    /// Unlike [`into_octet`][Self::into_octet], this accepts any character
    /// and appends its UTF-8 encoding.
    pub fn push_octets(self, target: &mut Vec<u8>) {
        match self {
            Symbol::Char(ch) => {
                let mut buf = [0u8; 4];
                target.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes())
            }
            Symbol::SimpleEscape(ch) | Symbol::DecimalEscape(ch) => {
                target.push(ch)
            }
        }
    }
}

//--- From

impl From<char> for Symbol {
    fn from(ch: char) -> Symbol {
        Symbol::Char(ch)
    }
}

//--- Display

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Symbol::Char(ch) => write!(f, "{}", ch),
            Symbol::SimpleEscape(ch) => write!(f, "\\{}", ch as char),
            Symbol::DecimalEscape(ch) => write!(f, "\\{:03}", ch),
        }
    }
}

//------------ Symbols -------------------------------------------------------

/// An iterator over the symbols in a char sequence.
///
/// The iterator returns a `Result` so escape errors are not swallowed.
#[derive(Clone, Debug)]
pub struct Symbols<Chars> {
    /// The chars of the sequence.
    ///
    /// This is an option so we can fuse the iterator on error.
    chars: Option<Chars>,
}

impl<Chars> Symbols<Chars> {
    pub fn new(chars: Chars) -> Self {
        Symbols { chars: Some(chars) }
    }
}

impl<Chars: Iterator<Item = char>> Iterator for Symbols<Chars> {
    type Item = Result<Symbol, SymbolCharsError>;

    fn next(&mut self) -> Option<Self::Item> {
        match Symbol::from_chars(self.chars.as_mut()?) {
            Ok(Some(symbol)) => Some(Ok(symbol)),
            Ok(None) => {
                self.chars = None;
                None
            }
            Err(err) => {
                self.chars = None;
                Some(Err(err))
            }
        }
    }
}

/// Resolves all escape sequences in `text` into the octets they encode.
pub fn unescape(text: &str) -> Result<Vec<u8>, SyntaxError> {
    let mut res = Vec::with_capacity(text.len());
    for symbol in Symbols::new(text.chars()) {
        symbol.map_err(|_| SyntaxError::BadEscape)?.push_octets(&mut res);
    }
    Ok(res)
}

//------------ Token ---------------------------------------------------------

/// A token of presentation format.
///
/// Identifier and quoted string values still contain their escape
/// sequences. The quotes around a quoted string are removed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    Identifier(String),
    QuotedString(String),
    Eol,
    Eof,
    Whitespace,
    Comment(String),
}

impl Token {
    pub fn is_eol_or_eof(&self) -> bool {
        matches!(self, Token::Eol | Token::Eof)
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, Token::Identifier(_))
    }

    /// Returns the value of an identifier or quoted string.
    pub fn value(&self) -> Option<&str> {
        match *self {
            Token::Identifier(ref value)
            | Token::QuotedString(ref value)
            | Token::Comment(ref value) => Some(value),
            _ => None,
        }
    }
}

//------------ Tokenizer -----------------------------------------------------

/// Splits presentation format text into tokens.
///
/// Inside parentheses, line feeds are treated as white space so that an
/// entry can be spread over several lines. A single token can be pushed
/// back via [`unget`][Self::unget].
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    /// The text to tokenize.
    src: &'a str,

    /// The byte position of the next character in `src`.
    pos: usize,

    /// A token pushed back by the user.
    ungotten: Option<Token>,

    /// The current nesting depth of parentheses.
    depth: usize,

    /// The current line number starting at 1.
    line: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Tokenizer {
            src,
            pos: 0,
            ungotten: None,
            depth: 0,
            line: 1,
        }
    }

    /// Returns the line the tokenizer is currently at.
    pub fn line_number(&self) -> usize {
        self.line
    }

    fn peek_char(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
        }
        Some(ch)
    }

    /// Skips white space and returns how many characters were skipped.
    ///
    /// Line feeds are only white space inside parentheses.
    fn skip_whitespace(&mut self) -> usize {
        let mut count = 0;
        while let Some(ch) = self.peek_char() {
            if ch == ' ' || ch == '\t' || (ch == '\n' && self.depth > 0) {
                self.next_char();
                count += 1;
            } else {
                break;
            }
        }
        count
    }

    fn is_delimiter(ch: char) -> bool {
        matches!(ch, ' ' | '\t' | '\n' | ';' | '(' | ')' | '"')
    }

    /// Returns the next token.
    ///
    /// Leading white space is only reported as a token of its own if
    /// `want_leading` is true. Likewise, comments are only returned if
    /// `want_comment` is true and skipped otherwise.
    pub fn get_token(
        &mut self,
        want_leading: bool,
        want_comment: bool,
    ) -> Result<Token, SyntaxError> {
        if let Some(token) = self.ungotten.take() {
            match token {
                Token::Whitespace if !want_leading => {}
                Token::Comment(_) if !want_comment => {}
                token => return Ok(token),
            }
        }
        let skipped = self.skip_whitespace();
        if want_leading && skipped > 0 {
            return Ok(Token::Whitespace);
        }
        loop {
            let ch = match self.peek_char() {
                Some(ch) => ch,
                None => {
                    if self.depth > 0 {
                        return Err(SyntaxError::Custom(
                            "unbalanced parentheses",
                        ));
                    }
                    return Ok(Token::Eof);
                }
            };
            match ch {
                '\r' => {
                    self.next_char();
                }
                '\n' => {
                    self.next_char();
                    return Ok(Token::Eol);
                }
                '(' => {
                    self.next_char();
                    self.depth += 1;
                    self.skip_whitespace();
                }
                ')' => {
                    self.next_char();
                    if self.depth == 0 {
                        return Err(SyntaxError::Custom(
                            "unbalanced parentheses",
                        ));
                    }
                    self.depth -= 1;
                    self.skip_whitespace();
                }
                ';' => {
                    self.next_char();
                    let start = self.pos;
                    while let Some(ch) = self.peek_char() {
                        if ch == '\n' {
                            break;
                        }
                        self.next_char();
                    }
                    let comment = self.src[start..self.pos].to_string();
                    if want_comment {
                        return Ok(Token::Comment(comment));
                    }
                    self.skip_whitespace();
                }
                '"' => {
                    self.next_char();
                    return self.read_quoted();
                }
                _ => return self.read_identifier(),
            }
        }
    }

    /// Returns the next token skipping white space and comments.
    pub fn get(&mut self) -> Result<Token, SyntaxError> {
        self.get_token(false, false)
    }

    fn read_quoted(&mut self) -> Result<Token, SyntaxError> {
        let mut value = String::new();
        loop {
            match self.next_char() {
                None => return Err(SyntaxError::UnexpectedEnd),
                Some('"') => return Ok(Token::QuotedString(value)),
                Some('\n') => {
                    return Err(SyntaxError::Custom("newline in quoted string"))
                }
                Some('\\') => {
                    value.push('\\');
                    match self.next_char() {
                        Some(ch) => value.push(ch),
                        None => return Err(SyntaxError::UnexpectedEnd),
                    }
                }
                Some(ch) => value.push(ch),
            }
        }
    }

    fn read_identifier(&mut self) -> Result<Token, SyntaxError> {
        let mut value = String::new();
        while let Some(ch) = self.peek_char() {
            if Self::is_delimiter(ch) || ch == '\r' {
                break;
            }
            self.next_char();
            value.push(ch);
            if ch == '\\' {
                match self.next_char() {
                    Some(ch) => value.push(ch),
                    None => return Err(SyntaxError::UnexpectedEnd),
                }
            }
        }
        Ok(Token::Identifier(value))
    }

    /// Pushes a token back so that the next call returns it again.
    ///
    /// Only one token can be pushed back at a time.
    pub fn unget(&mut self, token: Token) -> Result<(), SyntaxError> {
        if self.ungotten.is_some() {
            return Err(SyntaxError::Custom("token already ungotten"));
        }
        self.ungotten = Some(token);
        Ok(())
    }

    /// Returns the value of the next token which must be an identifier.
    pub fn get_identifier(&mut self) -> Result<String, SyntaxError> {
        match self.get()? {
            Token::Identifier(value) => Ok(value),
            Token::Eol | Token::Eof => Err(SyntaxError::UnexpectedEnd),
            _ => Err(SyntaxError::UnexpectedToken("identifier")),
        }
    }

    /// Returns an unsigned integer given in decimal.
    pub fn get_int<T: FromStr>(&mut self) -> Result<T, SyntaxError> {
        let value = self.get_identifier()?;
        if value.is_empty() || !value.bytes().all(|ch| ch.is_ascii_digit()) {
            return Err(SyntaxError::BadNumber);
        }
        value.parse().map_err(|_| SyntaxError::BadNumber)
    }

    pub fn get_u8(&mut self) -> Result<u8, SyntaxError> {
        self.get_int()
    }

    pub fn get_u16(&mut self) -> Result<u16, SyntaxError> {
        self.get_int()
    }

    pub fn get_u32(&mut self) -> Result<u32, SyntaxError> {
        self.get_int()
    }

    /// Returns the octets of an identifier or a quoted string.
    pub fn get_string(&mut self) -> Result<Vec<u8>, SyntaxError> {
        match self.get()? {
            Token::Identifier(value) | Token::QuotedString(value) => {
                unescape(&value)
            }
            Token::Eol | Token::Eof => Err(SyntaxError::UnexpectedEnd),
            _ => Err(SyntaxError::UnexpectedToken("string")),
        }
    }

    /// Returns a domain name, made absolute with `origin` if given.
    pub fn get_name(
        &mut self,
        origin: Option<&Name>,
    ) -> Result<Name, SyntaxError> {
        let value = self.get_identifier()?;
        Name::from_text(&value, origin).map_err(SyntaxError::BadName)
    }

    /// Returns a TTL, accepting the `1w2d3h4m5s` notation.
    pub fn get_ttl(&mut self) -> Result<u32, SyntaxError> {
        let value = self.get_identifier()?;
        ttl::from_text(&value)
    }

    /// Returns the next token and checks that it is one of `values`.
    pub fn get_mnemonic<T, F>(&mut self, op: F) -> Result<T, SyntaxError>
    where
        F: FnOnce(&[u8]) -> Option<T>,
    {
        let value = self.get_identifier()?;
        op(value.as_bytes()).ok_or(SyntaxError::UnknownMnemonic)
    }

    /// Checks that the entry has ended.
    pub fn get_eol(&mut self) -> Result<(), SyntaxError> {
        if self.get()?.is_eol_or_eof() {
            Ok(())
        } else {
            Err(SyntaxError::TrailingTokens)
        }
    }

    /// Returns whether the next token ends the entry without consuming it.
    pub fn at_eol(&mut self) -> Result<bool, SyntaxError> {
        let token = self.get()?;
        let res = token.is_eol_or_eof();
        self.unget(token)?;
        Ok(res)
    }

    /// Returns all remaining tokens of the entry.
    ///
    /// The end of line token is pushed back.
    pub fn get_remaining(&mut self) -> Result<Vec<Token>, SyntaxError> {
        let mut res = Vec::new();
        loop {
            let token = self.get()?;
            if token.is_eol_or_eof() {
                self.unget(token)?;
                return Ok(res);
            }
            res.push(token);
        }
    }

    /// Concatenates the remaining identifiers of the entry.
    ///
    /// This is used for fields such as base64 encoded keys that may be
    /// split by white space.
    pub fn concatenate_remaining_identifiers(
        &mut self,
    ) -> Result<String, SyntaxError> {
        let mut res = String::new();
        for token in self.get_remaining()? {
            match token {
                Token::Identifier(value) => res.push_str(&value),
                _ => return Err(SyntaxError::UnexpectedToken("identifier")),
            }
        }
        Ok(res)
    }
}

//============ Error Types ===================================================

//------------ SymbolCharsError ----------------------------------------------

/// An error happened when reading a symbol.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SymbolCharsError {
    /// An illegal escape sequence was encountered.
    BadEscape,

    /// Unexpected end of input.
    ShortInput,
}

impl fmt::Display for SymbolCharsError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SymbolCharsError::BadEscape => f.write_str("illegal escape"),
            SymbolCharsError::ShortInput => f.write_str("unexpected end"),
        }
    }
}

impl std::error::Error for SymbolCharsError {}

//------------ BadSymbol -----------------------------------------------------

/// A symbol of unexepected value was encountered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct BadSymbol(pub Symbol);

impl fmt::Display for BadSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "bad symbol '{}'", self.0)
    }
}

impl std::error::Error for BadSymbol {}

//------------ SyntaxError ---------------------------------------------------

/// Presentation format data could not be read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyntaxError {
    /// The entry ended before all fields were read.
    UnexpectedEnd,

    /// A token of the wrong kind was found. Names what was expected.
    UnexpectedToken(&'static str),

    /// An escape sequence was malformed.
    BadEscape,

    /// A number was malformed or out of range.
    BadNumber,

    /// A mnemonic was not recognized.
    UnknownMnemonic,

    /// A domain name was malformed.
    BadName(NameError),

    /// A TTL was malformed or out of range.
    BadTtl,

    /// There were tokens left after the entry was complete.
    TrailingTokens,

    /// Base 16, 32, or 64 encoded data was malformed.
    BadEncoding,

    /// Some other error.
    Custom(&'static str),
}

//--- From

impl From<NameError> for SyntaxError {
    fn from(err: NameError) -> Self {
        SyntaxError::BadName(err)
    }
}

impl From<DecodeError> for SyntaxError {
    fn from(_: DecodeError) -> Self {
        SyntaxError::BadEncoding
    }
}

impl From<SymbolCharsError> for SyntaxError {
    fn from(_: SymbolCharsError) -> Self {
        SyntaxError::BadEscape
    }
}

//--- Display and Error

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SyntaxError::UnexpectedEnd => f.write_str("unexpected end of entry"),
            SyntaxError::UnexpectedToken(what) => {
                write!(f, "expected {}", what)
            }
            SyntaxError::BadEscape => f.write_str("bad escape sequence"),
            SyntaxError::BadNumber => f.write_str("bad number"),
            SyntaxError::UnknownMnemonic => f.write_str("unknown mnemonic"),
            SyntaxError::BadName(ref err) => err.fmt(f),
            SyntaxError::BadTtl => f.write_str("bad TTL"),
            SyntaxError::TrailingTokens => {
                f.write_str("trailing data after entry")
            }
            SyntaxError::BadEncoding => f.write_str("bad encoded data"),
            SyntaxError::Custom(msg) => f.write_str(msg),
        }
    }
}

impl std::error::Error for SyntaxError {}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    fn symbols(s: &str) -> Result<Vec<Symbol>, SymbolCharsError> {
        Symbols::new(s.chars()).collect()
    }

    #[test]
    fn symbol_from_chars() {
        assert_eq!(
            symbols("a\\.\\065").unwrap(),
            [
                Symbol::Char('a'),
                Symbol::SimpleEscape(b'.'),
                Symbol::DecimalEscape(65)
            ]
        );
        assert_eq!(symbols("\\256"), Err(SymbolCharsError::BadEscape));
        assert_eq!(symbols("\\12"), Err(SymbolCharsError::ShortInput));
        assert_eq!(symbols("\\1a2"), Err(SymbolCharsError::BadEscape));
        assert_eq!(symbols("\\"), Err(SymbolCharsError::ShortInput));
    }

    #[test]
    fn tokens() {
        let mut tok = Tokenizer::new("foo \"b\\\"ar\" ; c\n( 1\n 2 )\n");
        assert_eq!(tok.get().unwrap(), Token::Identifier("foo".into()));
        assert_eq!(
            tok.get().unwrap(),
            Token::QuotedString("b\\\"ar".into())
        );
        assert_eq!(tok.get().unwrap(), Token::Eol);
        assert_eq!(tok.get().unwrap(), Token::Identifier("1".into()));
        assert_eq!(tok.get().unwrap(), Token::Identifier("2".into()));
        assert_eq!(tok.get().unwrap(), Token::Eol);
        assert_eq!(tok.get().unwrap(), Token::Eof);
        assert_eq!(tok.line_number(), 4);
    }

    #[test]
    fn leading_and_comments() {
        let mut tok = Tokenizer::new("  a ;x");
        assert_eq!(tok.get_token(true, true).unwrap(), Token::Whitespace);
        assert_eq!(
            tok.get_token(true, true).unwrap(),
            Token::Identifier("a".into())
        );
        assert_eq!(tok.get_token(false, true).unwrap(), Token::Comment("x".into()));
        assert_eq!(tok.get_token(false, true).unwrap(), Token::Eof);
    }

    #[test]
    fn unbalanced() {
        assert!(Tokenizer::new("( a").get_remaining().is_err());
        assert!(Tokenizer::new(") a").get().is_err());
    }

    #[test]
    fn unget() {
        let mut tok = Tokenizer::new("a b");
        let token = tok.get().unwrap();
        tok.unget(token.clone()).unwrap();
        assert!(tok.unget(token).is_err());
        assert_eq!(tok.get_identifier().unwrap(), "a");
        assert_eq!(tok.get_identifier().unwrap(), "b");
        assert_eq!(tok.get_identifier(), Err(SyntaxError::UnexpectedEnd));
    }

    #[test]
    fn getters() {
        let mut tok = Tokenizer::new("10 65536 x \"a\\032b\\\\\" 1h2m AB CD");
        assert_eq!(tok.get_u8().unwrap(), 10);
        assert_eq!(tok.get_u16(), Err(SyntaxError::BadNumber));
        assert_eq!(tok.get_u32(), Err(SyntaxError::BadNumber));
        assert_eq!(tok.get_string().unwrap(), b"a b\\");
        assert_eq!(tok.get_ttl().unwrap(), 3720);
        assert_eq!(tok.concatenate_remaining_identifiers().unwrap(), "ABCD");
        tok.get_eol().unwrap();
    }

    #[test]
    fn trailing() {
        let mut tok = Tokenizer::new("a b\n");
        tok.get().unwrap();
        assert_eq!(tok.get_eol(), Err(SyntaxError::TrailingTokens));
    }

    #[test]
    fn from_octet() {
        assert_eq!(Symbol::from_octet(b'.'), Symbol::SimpleEscape(b'.'));
        assert_eq!(Symbol::from_octet(b' '), Symbol::DecimalEscape(32));
        assert_eq!(Symbol::from_octet(b'a'), Symbol::Char('a'));
        assert_eq!(Symbol::from_quoted_octet(b' '), Symbol::Char(' '));
        assert_eq!(Symbol::from_octet(0xff).to_string(), "\\255");
    }
}
