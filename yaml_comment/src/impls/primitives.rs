use std::{borrow::Cow, num};

use crate::{Reflect, Scalar, Shape};

macro_rules! impl_int {
	($variant:ident, $wide:ty, $($ty:ty),*) => {
		$(
			impl Reflect for $ty {
				#[inline]
				fn shape(&self) -> Shape<'_> {
					Shape::Scalar(Scalar::$variant(*self as $wide))
				}
			}
		)*
	};
}

macro_rules! impl_non_zero {
	($variant:ident, $wide:ty, $($ty:ty),*) => {
		$(
			impl Reflect for $ty {
				#[inline]
				fn shape(&self) -> Shape<'_> {
					Shape::Scalar(Scalar::$variant(self.get() as $wide))
				}
			}
		)*
	};
}

impl_int!(Int, i128, i8, i16, i32, i64, i128, isize);
impl_int!(Uint, u128, u16, u32, u64, u128, usize);

impl_non_zero!(
	Int,
	i128,
	num::NonZeroI8,
	num::NonZeroI16,
	num::NonZeroI32,
	num::NonZeroI64,
	num::NonZeroI128,
	num::NonZeroIsize
);
impl_non_zero!(
	Uint,
	u128,
	num::NonZeroU8,
	num::NonZeroU16,
	num::NonZeroU32,
	num::NonZeroU64,
	num::NonZeroU128,
	num::NonZeroUsize
);

// Byte buffers (`Vec<u8>`, `[u8]`, `[u8; N]`) encode as one binary scalar
impl Reflect for u8 {
	#[inline]
	fn shape(&self) -> Shape<'_> {
		Shape::Scalar(Scalar::Uint(*self as u128))
	}

	#[inline]
	fn slice_shape(slice: &[Self]) -> Shape<'_> {
		Shape::Bytes(slice)
	}
}

impl Reflect for f32 {
	// Widened, so `0.1f32` encodes as `0.10000000149011612`
	#[inline]
	fn shape(&self) -> Shape<'_> {
		Shape::Scalar(Scalar::Float(*self as f64))
	}
}

impl Reflect for f64 {
	#[inline]
	fn shape(&self) -> Shape<'_> {
		Shape::Scalar(Scalar::Float(*self))
	}
}

impl Reflect for bool {
	#[inline]
	fn shape(&self) -> Shape<'_> {
		Shape::Scalar(Scalar::Bool(*self))
	}
}

impl Reflect for char {
	fn shape(&self) -> Shape<'_> {
		Shape::Scalar(Scalar::Str(Cow::Owned(self.to_string())))
	}
}

impl Reflect for str {
	#[inline]
	fn shape(&self) -> Shape<'_> {
		Shape::Scalar(Scalar::Str(Cow::Borrowed(self)))
	}
}

impl Reflect for String {
	#[inline]
	fn shape(&self) -> Shape<'_> {
		Shape::Scalar(Scalar::Str(Cow::Borrowed(self.as_str())))
	}
}

impl Reflect for () {
	#[inline]
	fn shape(&self) -> Shape<'_> {
		Shape::Null
	}
}
