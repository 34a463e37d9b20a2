//! Macros for declaring validators with minimal boilerplate.
//!
//! [`validator!`] expands to a struct, its [`Validate`](crate::foundation::Validate)
//! impl, a constructor and a factory function. The `rule` block is the
//! acceptance predicate; the `error` block builds the failure.
//!
//! ```rust,ignore
//! validator! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MaxLength { max: usize } for str;
//!     rule(self, input) { input.chars().count() <= self.max }
//!     error(self, input) { ValidationError::max_length(self.max, input.chars().count()) }
//!     fn max_length(max: usize);
//! }
//! ```

/// Creates a complete validator: struct definition, `Validate` implementation,
/// constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit validator** (zero-sized, no fields):
/// ```rust,ignore
/// validator! {
///     pub IsoDate for str;
///     rule(input) { parse(input).is_some() }
///     error(input) { ValidationError::iso_date("unparseable") }
///     fn iso_date();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// validator! {
///     pub MaxLength { max: usize } for str;
///     rule(self, input) { input.len() <= self.max }
///     error(self, input) { ValidationError::max_length(self.max, input.len()) }
///     fn max_length(max: usize);
/// }
/// ```
///
/// **Fallible constructor** (the type after `->` is the error type):
/// ```rust,ignore
/// validator! {
///     pub Pattern { regex: regex::Regex } for str;
///     rule(self, input) { self.regex.is_match(input) }
///     error(self, input) { ValidationError::regexp(self.regex.as_str().to_owned()) }
///     new(pattern: &str) -> Error { ... }
///     fn pattern(pattern: &str) -> Error;
/// }
/// ```
#[macro_export]
macro_rules! validator {
    // ── Unit validator + factory fn ──────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::validator! {
            $(#[$meta])*
            $vis $name for $input;
            rule($inp) $rule
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Unit validator, no factory ───────────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for $input:ty;
        rule($inp:ident) $rule:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&self, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };

    // ── Struct with fields + fallible new + fallible factory ─────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) -> $ety:ty $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?) -> $efty:ty;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            pub fn new($($narg: $naty),*) -> ::std::result::Result<Self, $ety> $new_body
        }

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> ::std::result::Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }

        $vis fn $factory($($farg: $faty),*) -> ::std::result::Result<$name, $efty> {
            $name::new($($farg),*)
        }
    };

    // ── Struct with fields + auto new + factory fn ───────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
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

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };
}
