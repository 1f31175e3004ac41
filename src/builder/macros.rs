//! Macros for ergonomic state and action domains.

/// Generate a `State` implementation for a fieldless enum.
///
/// The variant list doubles as the domain returned by `State::all`.
///
/// # Example
///
/// ```
/// use patterncore::state_enum;
/// use patterncore::core::State;
///
/// state_enum! {
///     pub enum OrderState {
///         Open,
///         Shipped,
///         Cancelled,
///     }
///     final: [Shipped, Cancelled]
///     error: [Cancelled]
/// }
///
/// assert_eq!(OrderState::all().len(), 3);
/// assert!(OrderState::Cancelled.is_error());
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

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
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

            fn all() -> Vec<Self> {
                vec![$(Self::$variant),*]
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

/// Generate an `Action` implementation for a fieldless enum.
///
/// # Example
///
/// ```
/// use patterncore::action_enum;
/// use patterncore::core::Action;
///
/// action_enum! {
///     pub enum DoorAction {
///         Open,
///         Close,
///     }
/// }
///
/// assert_eq!(DoorAction::from_name("Close"), Some(DoorAction::Close));
/// ```
#[macro_export]
macro_rules! action_enum {
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
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Action for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn all() -> Vec<Self> {
                vec![$(Self::$variant),*]
            }
        }
    };
}
