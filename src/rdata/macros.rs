//! Macros for use in rdata definitions.
//!
//! These macros are not public but are used by the super module only. They
//! are here so that `mod.rs` doesn’t become too unwieldly.

/// Defines the `Rdata` enum.
///
/// Each entry names the variant, its data type, and the record type it is
/// used for, followed by three flags: whether embedded names are lowercased
/// in canonical form, whether they may be compressed, and whether the type
/// is only defined for the IN class.
macro_rules! rdata_types {
    ( $(
        $variant:ident($ty:ty) => $rtype:ident,
            $lower:literal, $compress:literal, $in_only:literal;
    )* ) => {
        //------------- Rdata ------------------------------------------------

        /// The data of a resource record.
        ///
        /// This enum has one variant for each implemented record type plus
        /// [`Rdata::Unknown`] for all other types as well as for class
        /// specific types appearing in a different class.
        #[derive(Clone, Debug)]
        pub enum Rdata {
            $(
                $variant($ty),
            )*
            Unknown($crate::rdata::generic::UnknownRdata),
        }

        impl Rdata {
            /// Returns the record type of the data.
            pub fn rtype(&self) -> $crate::base::iana::Rtype {
                match *self {
                    $(
                        Rdata::$variant(_) => $crate::base::iana::Rtype::$rtype,
                    )*
                    Rdata::Unknown(ref inner) => inner.rtype(),
                }
            }

            /// Returns whether there is a dedicated variant for `rtype`.
            pub fn is_known_type(rtype: $crate::base::iana::Rtype) -> bool {
                match rtype {
                    $(
                        $crate::base::iana::Rtype::$rtype => true,
                    )*
                    _ => false,
                }
            }

            /// Returns whether names in the data of `rtype` are lowercased
            /// in canonical form.
            ///
            /// This follows the list in section 6.2 of RFC 4034 with NSEC
            /// removed as per RFC 6840.
            pub fn is_canonical_lowercase(
                rtype: $crate::base::iana::Rtype
            ) -> bool {
                match rtype {
                    $(
                        $crate::base::iana::Rtype::$rtype => $lower,
                    )*
                    _ => false,
                }
            }

            /// Returns whether names in the data of `rtype` may be
            /// compressed.
            pub fn allows_compression(
                rtype: $crate::base::iana::Rtype
            ) -> bool {
                match rtype {
                    $(
                        $crate::base::iana::Rtype::$rtype => $compress,
                    )*
                    _ => false,
                }
            }

            /// Returns whether the variant for `rtype` is only used in the
            /// IN class.
            pub fn is_class_specific(
                rtype: $crate::base::iana::Rtype
            ) -> bool {
                match rtype {
                    $(
                        $crate::base::iana::Rtype::$rtype => $in_only,
                    )*
                    _ => false,
                }
            }

            /// Parses the data of the given class and type from wire format.
            ///
            /// The parser must be limited to the record data.
            pub fn parse(
                class: $crate::base::iana::Class,
                rtype: $crate::base::iana::Rtype,
                parser: &mut $crate::base::wire::Parser,
            ) -> Result<Self, $crate::base::wire::ParseError> {
                use $crate::base::rdata::RecordData;

                if !Self::uses_variant(class, rtype) {
                    return $crate::rdata::generic::UnknownRdata::parse(
                        rtype, parser
                    ).map(Rdata::Unknown)
                }
                match rtype {
                    $(
                        $crate::base::iana::Rtype::$rtype => {
                            <$ty as RecordData>::parse_rdata(parser)
                                .map(Rdata::$variant)
                        }
                    )*
                    _ => {
                        $crate::rdata::generic::UnknownRdata::parse(
                            rtype, parser
                        ).map(Rdata::Unknown)
                    }
                }
            }

            /// Scans the type specific presentation format.
            fn scan_specific(
                class: $crate::base::iana::Class,
                rtype: $crate::base::iana::Rtype,
                tok: &mut $crate::base::scan::Tokenizer,
                origin: Option<&$crate::base::name::Name>,
            ) -> Result<Self, $crate::base::scan::SyntaxError> {
                use $crate::base::rdata::RecordData;

                if !Self::uses_variant(class, rtype) {
                    return Err($crate::base::scan::SyntaxError::Custom(
                        "unknown record type requires generic syntax"
                    ))
                }
                match rtype {
                    $(
                        $crate::base::iana::Rtype::$rtype => {
                            <$ty as RecordData>::scan_rdata(tok, origin)
                                .map(Rdata::$variant)
                        }
                    )*
                    _ => Err($crate::base::scan::SyntaxError::Custom(
                        "unknown record type requires generic syntax"
                    ))
                }
            }

            /// Appends the wire format with the given mode.
            ///
            /// The compression and canonical flags of `mode` are only
            /// applied if the record type allows them.
            fn compose_with<Target>(
                &self,
                target: &mut Target,
                mode: $crate::base::rdata::ComposeMode,
            ) -> Result<(), $crate::base::wire::ComposeError>
            where Target: $crate::base::wire::Composer + ?Sized {
                use $crate::base::rdata::{ComposeMode, RecordData};

                match *self {
                    $(
                        Rdata::$variant(ref inner) => {
                            inner.compose_rdata(target, ComposeMode {
                                origin: mode.origin,
                                compress: mode.compress && $compress,
                                canonical: mode.canonical && $lower,
                            })
                        }
                    )*
                    Rdata::Unknown(ref inner) => {
                        inner.compose(target);
                        Ok(())
                    }
                }
            }
        }

        //--- ZonefileFmt

        impl $crate::base::zonefile_fmt::ZonefileFmt for Rdata {
            fn present(
                &self, p: &mut $crate::base::zonefile_fmt::Presenter
            ) {
                match *self {
                    $(
                        Rdata::$variant(ref inner) => inner.present(p),
                    )*
                    Rdata::Unknown(ref inner) => inner.present(p),
                }
            }
        }
    }
}
