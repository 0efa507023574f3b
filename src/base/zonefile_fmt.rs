//! Writing data in presentation format.
//!
//! Types that have a presentation format implement [`ZonefileFmt`] and
//! write themselves token by token into a [`Presenter`]. The presenter
//! separates the tokens by a single space and takes care of writing
//! embedded domain names relative to or absolute with an origin.

use super::name::Name;
use core::fmt;
use core::fmt::Write as _;

//------------ ZonefileFmt ---------------------------------------------------

/// Show a value in presentation format.
pub trait ZonefileFmt {
    fn present(&self, p: &mut Presenter);

    /// Returns the presentation format as a string.
    ///
    /// Embedded names are relativized to `origin` if `relativize` is true
    /// and made absolute with it otherwise.
    fn to_text(&self, origin: Option<&Name>, relativize: bool) -> String {
        let mut p = Presenter::new(origin, relativize);
        self.present(&mut p);
        p.finish()
    }

    /// Returns a value displaying `self` without an origin.
    fn display_zonefile(&self) -> ZonefileDisplay<'_, Self> {
        ZonefileDisplay { inner: self }
    }
}

impl<T: ZonefileFmt + ?Sized> ZonefileFmt for &T {
    fn present(&self, p: &mut Presenter) {
        T::present(self, p)
    }
}

//------------ ZonefileDisplay -----------------------------------------------

pub struct ZonefileDisplay<'a, T: ?Sized> {
    inner: &'a T,
}

impl<T: ZonefileFmt + ?Sized> fmt::Display for ZonefileDisplay<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner.to_text(None, false))
    }
}

//------------ Presenter -----------------------------------------------------

/// Collects the tokens of a value in presentation format.
///
/// All tokens end up on a single line.
pub struct Presenter<'a> {
    out: String,
    first: bool,
    origin: Option<&'a Name>,
    relativize: bool,
}

impl<'a> Presenter<'a> {
    pub fn new(origin: Option<&'a Name>, relativize: bool) -> Self {
        Presenter {
            out: String::new(),
            first: true,
            origin,
            relativize,
        }
    }

    pub fn origin(&self) -> Option<&'a Name> {
        self.origin
    }

    fn separate(&mut self) {
        if !self.first {
            self.out.push(' ');
        }
        self.first = false;
    }

    /// Pushes a token.
    pub fn write_token(&mut self, token: impl fmt::Display) {
        self.separate();
        // Writing into a string never fails.
        let _ = write!(self.out, "{}", token);
    }

    /// Pushes a domain name, adjusted for the origin.
    pub fn write_name(&mut self, name: &Name) {
        match name.choose_relativity(self.origin, self.relativize) {
            Ok(name) => self.write_token(name),
            Err(_) => self.write_token(name),
        }
    }

    /// Pushes the tokens of another value.
    pub fn write_show(&mut self, item: &(impl ZonefileFmt + ?Sized)) {
        item.present(self)
    }

    /// Returns everything written so far.
    pub fn finish(self) -> String {
        self.out
    }
}

//============ Testing =======================================================

#[cfg(test)]
mod test {
    use super::*;

    struct Pair(u8, Name);

    impl ZonefileFmt for Pair {
        fn present(&self, p: &mut Presenter) {
            p.write_token(self.0);
            p.write_name(&self.1);
        }
    }

    #[test]
    fn present() {
        let origin: Name = "example.".parse().unwrap();
        let pair = Pair(10, "mail.example.".parse().unwrap());
        assert_eq!(pair.to_text(None, false), "10 mail.example.");
        assert_eq!(pair.to_text(Some(&origin), true), "10 mail");
        assert_eq!(pair.display_zonefile().to_string(), "10 mail.example.");
        let rel = Pair(1, Name::from_text("mail", None).unwrap());
        assert_eq!(rel.to_text(Some(&origin), false), "1 mail.example.");
    }
}
