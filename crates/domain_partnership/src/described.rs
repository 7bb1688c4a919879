//! Enumerations exchanged as human-readable descriptions
//!
//! The registry's vocabularies (nationalities, countries, partnership types…)
//! travel over the wire as their description text rather than as variant
//! names. An unrecognised description never fails deserialization: it maps
//! to `Unknown`, which the field-level validator then rejects.

/// A vocabulary value exchanged by description
pub trait Described: Copy {
    fn description(&self) -> &'static str;
    fn is_known(&self) -> bool;
}

macro_rules! described_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident => $desc:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            /// A description that matched no known value
            Unknown,
        }

        impl $name {
            /// Every known value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The description used on the wire
            pub fn description(&self) -> &'static str {
                match self {
                    $($name::$variant => $desc,)+
                    $name::Unknown => "UNKNOWN",
                }
            }

            /// Case-insensitive lookup by description
            pub fn from_description(value: &str) -> Self {
                let wanted = value.trim().to_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.description().to_lowercase() == wanted)
                    .unwrap_or($name::Unknown)
            }

            /// Whether this is a recognised value
            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown)
            }
        }

        impl $crate::described::Described for $name {
            fn description(&self) -> &'static str {
                $name::description(self)
            }

            fn is_known(&self) -> bool {
                $name::is_known(self)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.description())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(self.description())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let value = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok($name::from_description(&value))
            }
        }
    };
}
