//! Building a domain name.
//!
//! This is a private module for tidiness. `NameBuilder` is re-exported by
//! the parent module.

use super::{Label, Name, NameError};

//------------ NameBuilder --------------------------------------------------

/// An incremental builder for domain names.
///
/// The domain name can be built out of individual bytes and/or whole
/// labels. Once building is complete, an absolute or relative domain name
/// can be extracted.
///
/// The root label must not be added as a label. Instead, call
/// [`into_absolute()`][Self::into_absolute] to finish an absolute name.
#[derive(Clone, Debug, Default)]
pub struct NameBuilder {
    /// The name built so far in wire format.
    octets: Vec<u8>,

    /// The offset of the length octet of the current label, if any.
    head: Option<usize>,
}

impl NameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the length of the name built so far.
    pub fn len(&self) -> usize {
        self.octets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.octets.is_empty()
    }

    /// Returns whether there currently is a label under construction.
    pub fn in_label(&self) -> bool {
        self.head.is_some()
    }

    /// Pushes an octet to the end of the current label.
    ///
    /// Starts a new label if necessary.
    pub fn push(&mut self, ch: u8) -> Result<(), NameError> {
        let head = match self.head {
            Some(head) => head,
            None => {
                let head = self.octets.len();
                self.octets.push(0);
                self.head = Some(head);
                head
            }
        };
        let len = self.octets.len() - head;
        if len > Label::MAX_LEN {
            return Err(NameError::LabelTooLong);
        }
        if self.octets.len() >= Name::MAX_LEN {
            return Err(NameError::NameTooLong);
        }
        self.octets.push(ch);
        self.octets[head] = len as u8;
        Ok(())
    }

    /// Ends the current label.
    ///
    /// Fails with an empty label error if there is no current label.
    pub fn end_label(&mut self) -> Result<(), NameError> {
        match self.head.take() {
            Some(_) => Ok(()),
            None => Err(NameError::EmptyLabel),
        }
    }

    /// Appends a complete non-root label.
    pub fn append_label(&mut self, label: &[u8]) -> Result<(), NameError> {
        if self.head.is_some() {
            self.end_label()?;
        }
        if label.is_empty() {
            return Err(NameError::EmptyLabel);
        }
        let label = Label::from_slice(label)?;
        if self.octets.len() + label.len() + 1 > Name::MAX_LEN {
            return Err(NameError::NameTooLong);
        }
        label.compose(&mut self.octets);
        Ok(())
    }

    /// Appends all non-root labels of a name.
    ///
    /// Returns whether the name was absolute.
    pub fn append_name(&mut self, name: &Name) -> Result<bool, NameError> {
        let mut absolute = false;
        for label in name.labels() {
            if label.is_root() {
                absolute = true;
            } else {
                self.append_label(label.as_slice())?;
            }
        }
        Ok(absolute)
    }

    /// Finishes a relative name.
    pub fn into_relative(mut self) -> Result<Name, NameError> {
        self.head = None;
        if self.octets.len() > Name::MAX_LEN {
            return Err(NameError::NameTooLong);
        }
        Ok(Name::from_octets_unchecked(self.octets))
    }

    /// Finishes an absolute name by appending the root label.
    pub fn into_absolute(mut self) -> Result<Name, NameError> {
        self.head = None;
        self.octets.push(0);
        if self.octets.len() > Name::MAX_LEN {
            return Err(NameError::NameTooLong);
        }
        Ok(Name::from_octets_unchecked(self.octets))
    }
}

//============ Testing =======================================================
