//! Named field access for vectors with up to 4 elements.

use std::{
    mem,
    ops::{Deref, DerefMut},
};

use crate::Vector;

// Positional names:

#[repr(C)]
pub struct X<T> {
    pub x: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XY<T> {
    pub x: T,
    pub y: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
    _priv: (), // prevent external construction
}

// Color names, reached through the positional ones:

#[repr(C)]
pub struct R<T> {
    pub r: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct RG<T> {
    pub r: T,
    pub g: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct RGB<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct RGBA<T> {
    pub r: T,
    pub g: T,
    pub b: T,
    pub a: T,
    _priv: (), // prevent external construction
}

macro_rules! view {
    ($from:ty => $to:ident) => {
        impl<T> Deref for $from {
            type Target = $to<T>;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Safety: `Target` is `repr(C)` with one `T` field per element, same as `$from`.
                unsafe { mem::transmute(self) }
            }
        }

        impl<T> DerefMut for $from {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // Safety: see `deref`.
                unsafe { mem::transmute(self) }
            }
        }
    };
}

view!(Vector<T, 1> => X);
view!(Vector<T, 2> => XY);
view!(Vector<T, 3> => XYZ);
view!(Vector<T, 4> => XYZW);
view!(X<T> => R);
view!(XY<T> => RG);
view!(XYZ<T> => RGB);
view!(XYZW<T> => RGBA);
