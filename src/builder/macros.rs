//! Macros for declaring machine states.

/// Declare a state enum together with its `State` and `Display`
/// implementations.
///
/// The enum derives `Clone`, `PartialEq`, `Debug` and serde's traits; extra
/// derives can be added as ordinary attributes. A variant's name is its
/// identifier, and that name is also what `Display` prints.
///
/// # Example
///
/// ```
/// use coinvend::core::State;
/// use coinvend::state_enum;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum HopperState {
///         Stocked,
///         Low,
///     }
/// }
///
/// assert_eq!(HopperState::Low.name(), "Low");
/// assert_eq!(format!("hopper {}", HopperState::Stocked), "hopper Stocked");
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
