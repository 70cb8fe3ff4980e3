//! Macros for creating validators with minimal boilerplate.
//!
//! [`validator!`] covers the common case of a domain validator that is a
//! single predicate with a single error: it emits the struct, a constructor,
//! the [`Validate`](crate::foundation::Validate) impl and a factory function.
//! Multi-stage validators (password strength, checksums) implement
//! `Validate` by hand.
//!
//! # Examples
//!
//! ```
//! use formcheck_validator::validator;
//! use formcheck_validator::foundation::{Locale, Validate, ValidationError};
//!
//! validator! {
//!     /// Accepts only ASCII input.
//!     #[derive(Copy, PartialEq, Eq)]
//!     pub AsciiOnly { locale: Locale } for str;
//!     rule(self, input) { input.is_ascii() }
//!     error(self, input) { ValidationError::domain_format("ascii", "ASCII only") }
//!     new() { Self { locale: Locale::Polish } }
//!     fn ascii_only();
//! }
//!
//! assert!(ascii_only().validate("plain").is_ok());
//! assert!(ascii_only().validate("żółw").is_err());
//! ```

/// Creates a validator: struct definition, `new` constructor, `Validate`
/// implementation and (optionally) a factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via
/// `#[derive(...)]`. All fields are public.
#[macro_export]
macro_rules! validator {
    // ── Struct with fields + custom new + factory fn ─────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for $input;
            rule($self_, $inp) $rule
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + custom new, no factory ──────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
