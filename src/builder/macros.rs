//! Macros for ergonomic state declarations.

/// Declare a fieldless enum and implement the state traits for it.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash` and
/// `Debug`, implements [`State`](crate::core::State) with each variant's
/// identifier as its name, and implements
/// [`EnumerableState`](crate::core::EnumerableState) listing the variants in
/// declaration order.
///
/// # Example
///
/// ```
/// use automa::core::{EnumerableState, State};
/// use automa::state_enum;
///
/// state_enum! {
///     pub enum Parity {
///         Start,
///         Even,
///         Odd,
///         Reject,
///     }
/// }
///
/// assert_eq!(Parity::Odd.name(), "Odd");
/// assert_eq!(Parity::all().len(), 4);
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
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
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

        impl $crate::core::EnumerableState for $name {
            fn all() -> ::std::vec::Vec<Self> {
                ::std::vec![$(Self::$variant),*]
            }
        }
    };
}
