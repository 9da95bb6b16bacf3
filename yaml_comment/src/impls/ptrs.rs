use std::{borrow::Cow, rc::Rc, sync::Arc};

use crate::{Reflect, Shape};

// References are transparent: they report their pointee's shape and emptiness
macro_rules! impl_transparent {
	($($ty:ty),*) => {
		$(
			impl<T: Reflect + ?Sized> Reflect for $ty {
				#[inline]
				fn shape(&self) -> Shape<'_> {
					(**self).shape()
				}

				#[inline]
				fn is_zero(&self) -> Option<bool> {
					(**self).is_zero()
				}
			}
		)*
	};
}

impl_transparent!(&T, &mut T);

// Owning pointers encode as their pointee, but are never nil. So they are only
// empty if the pointee's own `is_zero` check says so.
macro_rules! impl_owning {
	($($ty:ty),*) => {
		$(
			impl<T: Reflect + ?Sized> Reflect for $ty {
				#[inline]
				fn shape(&self) -> Shape<'_> {
					(**self).shape()
				}

				#[inline]
				fn is_zero(&self) -> Option<bool> {
					Some((**self).is_zero().unwrap_or(false))
				}
			}
		)*
	};
}

impl_owning!(Box<T>, Rc<T>, Arc<T>);

impl<B> Reflect for Cow<'_, B>
where B: Reflect + ToOwned + ?Sized
{
	#[inline]
	fn shape(&self) -> Shape<'_> {
		(**self).shape()
	}

	#[inline]
	fn is_zero(&self) -> Option<bool> {
		(**self).is_zero()
	}
}

/// `Option` is the nullable reference: `None` encodes as null, and counts as
/// empty even for types with a custom emptiness check.
impl<T: Reflect> Reflect for Option<T> {
	#[inline]
	fn shape(&self) -> Shape<'_> {
		Shape::Ref(self.as_ref().map(|value| value as &dyn Reflect))
	}

	#[inline]
	fn is_zero(&self) -> Option<bool> {
		match self {
			Some(value) => value.is_zero(),
			None => Some(true),
		}
	}
}
