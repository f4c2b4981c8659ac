//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// Every variant carries the human-readable label it is displayed and
/// parsed as. Parsing is exact and case-sensitive.
///
/// The calling crate must depend on [`strum`] directly.
///
/// [`strum`]: https://docs.rs/strum
///
/// # Example
///
/// ```rust
/// # use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube => "Cube",
///
///         #[doc = "A round sphere"]
///         RoundSphere => "Round Sphere",
///     }
/// }
///
/// assert_eq!(Kind::RoundSphere.to_string(), "Round Sphere");
/// assert_eq!("Cube".parse::<Kind>(), Ok(Kind::Cube));
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
        )]
        #[doc = $doc]
        pub enum $name {
            $(
                #[doc = $variant_doc]
                #[strum(serialize = $label)]
                $variant,
            )*
        }

        impl $name {
            #[doc = ::core::concat!(
                "All the [`", ::core::stringify!($name), "`] variants, in \
                 declaration order."
            )]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Returns the human-readable label of this kind.
            #[must_use]
            pub const fn label(self) -> &'static str {
                match self {
                    $(
                        Self::$variant => $label,
                    )*
                }
            }
        }
    };
}
