/// Declare an enumeration and describe it for use with
/// [EnumSet][crate::EnumSet].
///
/// The macro declares the enumeration itself, derives
/// `Debug, Clone, Copy, PartialEq, Eq, Hash` for it, and implements
/// [Member][crate::Member] with ordinals following declaration order. The
/// primitive backing sets of the enumeration is named after the enumeration
/// itself; an enumeration with more members than the primitive has bits is
/// rejected at compile time.
///
/// # Examples
///
/// ```rust
/// enset::members! {
///     /// States reported by the connection tracker.
///     pub enum ConntrackState: u8 {
///         New,
///         Established,
///         Related,
///     }
/// }
///
/// let mut states = enset::EnumSet::new();
/// states.set(ConntrackState::New);
///
/// assert!(states.contains(ConntrackState::New));
/// assert_eq!(states.capacity(), 3);
/// ```
#[macro_export]
macro_rules! members {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $bits:ty {
            $($(#[$variant_meta:meta])* $variant:ident),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$variant_meta])* $variant,)+
        }

        impl $crate::Member for $name {
            type Bits = $bits;

            const MAX: Self = {
                const MEMBERS: &[$name] = &[$($name::$variant),+];
                MEMBERS[MEMBERS.len() - 1]
            };

            fn index(self) -> usize {
                self as usize
            }

            fn from_index(index: usize) -> Option<Self> {
                const MEMBERS: &[$name] = &[$($name::$variant),+];
                MEMBERS.get(index).copied()
            }
        }

        const _: () = {
            assert!(
                [$($name::$variant),+].len() <= <$bits as $crate::Bits>::WIDTH,
                "backing primitive is too narrow for the enumeration"
            );
        };
    };
}

/// Construct an [EnumSet][crate::EnumSet] with the given members.
///
/// # Examples
///
/// ```rust
/// enset::members! {
///     enum Flag: u8 {
///         A,
///         B,
///         C,
///     }
/// }
///
/// let flags = enset::enum_set![Flag::A, Flag::C];
///
/// assert!(flags.contains(Flag::A));
/// assert!(!flags.contains(Flag::B));
/// assert!(flags.contains(Flag::C));
/// ```
#[macro_export]
macro_rules! enum_set {
    ($($member:expr),* $(,)?) => {
        $crate::EnumSet::from_array([$($member),*])
    };
}
