//! String tags for the closed categorical inputs.
//!
//! Request handlers receive categories as text. They convert them here, once,
//! and the engine only ever sees the enum.

/// Implement `as_str`, `ALL`, `Display` and `FromStr` (failing with
/// [`EngineError::UnknownTag`](crate::EngineError::UnknownTag)) for a fieldless enum.
macro_rules! string_tags {
    ($ty:ident, $kind:literal, { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $ty {
            pub const ALL: &'static [$ty] = &[$($ty::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($ty::$variant => $tag),+
                }
            }
        }

        impl ::std::fmt::Display for $ty {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $ty {
            type Err = $crate::error::EngineError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($ty::$variant),)+
                    _ => {
                        ::tracing::warn!(kind = $kind, value = s, "rejected unknown tag");
                        Err($crate::error::EngineError::UnknownTag {
                            kind: $kind,
                            value: s.to_string(),
                        })
                    }
                }
            }
        }
    };
}

pub(crate) use string_tags;
