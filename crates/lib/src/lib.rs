pub mod cli;
pub mod env;
pub mod input;
mod macros;

pub use self::env::Size;
pub use self::input::{FromInput, FromInputIter, IStr, InputIterator};

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::env::Size;
    pub use crate::input::{IStr, Nl, NonEmpty, Skip, Split, Ws, B, W};
    pub use anyhow::{anyhow, bail, ensure, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub use arrayvec::ArrayString;
    pub use bstr::{BStr, ByteSlice};
}
