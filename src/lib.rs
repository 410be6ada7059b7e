//! Type-safe bit sets over closed enumerations.
//!
//! A small, closed set of named states is commonly packed into an integer
//! bitmask. [EnumSet] keeps that compact representation, but makes the
//! enumeration part of the set's type: membership tests, set algebra, and
//! iteration all speak in enumeration members, and combining sets over
//! different enumerations refuses to compile instead of silently mixing
//! masks.
//!
//! An enumeration is described for use with [EnumSet] through the [Member]
//! trait, most conveniently by declaring it with the [members!] macro. The
//! macro also picks the primitive backing the set, so a set is exactly as
//! large as the primitive it wraps.
//!
//! # Examples
//!
//! ```rust
//! enset::members! {
//!     /// States reported by the connection tracker.
//!     pub enum ConntrackState: u8 {
//!         New,
//!         Established,
//!         Related,
//!     }
//! }
//!
//! let mut states = enset::EnumSet::new();
//! states.set(ConntrackState::New).set(ConntrackState::Established);
//!
//! assert!(states.contains(ConntrackState::New));
//! assert!(!states.contains(ConntrackState::Related));
//! assert_eq!(states.count(), 2);
//!
//! for state in &states {
//!     println!("{:?} is in the set", state);
//! }
//!
//! assert_eq!(std::mem::size_of_val(&states), std::mem::size_of::<u8>());
//! ```
//!
//! Sets support the usual algebra, producing new sets of the same
//! enumeration:
//!
//! ```rust
//! enset::members! {
//!     enum Flag: u8 {
//!         A,
//!         B,
//!         C,
//!     }
//! }
//!
//! let ab = enset::enum_set![Flag::A, Flag::B];
//! let bc = enset::enum_set![Flag::B, Flag::C];
//!
//! assert_eq!(ab & bc, enset::enum_set![Flag::B]);
//! assert_eq!(ab | bc, enset::enum_set![Flag::A, Flag::B, Flag::C]);
//! assert_eq!(ab ^ bc, enset::enum_set![Flag::A, Flag::C]);
//! assert_eq!(!ab, enset::enum_set![Flag::C]);
//! ```

#![deny(missing_docs, rustdoc::broken_intra_doc_links)]

#[macro_use]
mod macros;

mod bits;
pub use self::bits::Bits;

mod member;
pub use self::member::Member;

mod error;
pub use self::error::Error;

mod set;
pub use self::set::{EnumSet, IntoIter, Iter};
