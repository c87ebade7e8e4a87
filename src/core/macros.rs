//! Macro for the closed, labelled enumerations used by the engine.

/// Generate a fieldless enum whose variants carry a canonical label.
///
/// The label is used for `Display`, for case-insensitive `FromStr` and as
/// the serde representation. Deserialization goes through `FromStr`, so
/// documents may spell labels in any case. The generated `ALL` slice lists variants in
/// declaration order, which is also the order of `index()`.
///
/// # Example
///
/// ```ignore
/// labelled_enum! {
///     pub enum Direction {
///         Up => "UP",
///         Down => "DOWN",
///     }
/// }
/// ```
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $label:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $label)]
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// Number of variants.
            pub const COUNT: usize = Self::ALL.len();

            /// Canonical upper-snake-case label.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),*
                }
            }

            #[inline]
            pub(crate) const fn index(self) -> usize {
                self as usize
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::core::ParseLabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.name().eq_ignore_ascii_case(trimmed))
                    .ok_or_else(|| $crate::core::ParseLabelError {
                        kind: stringify!($name),
                        value: s.to_string(),
                    })
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::core::ParseLabelError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }
    };
}
