use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use crate::{Reflect, Shape};

impl<T: Reflect> Reflect for [T] {
	#[inline]
	fn shape(&self) -> Shape<'_> {
		T::slice_shape(self)
	}
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
	#[inline]
	fn shape(&self) -> Shape<'_> {
		T::slice_shape(self)
	}
}

impl<T: Reflect> Reflect for Vec<T> {
	#[inline]
	fn shape(&self) -> Shape<'_> {
		T::slice_shape(self.as_slice())
	}
}

macro_rules! impl_seq {
	($ty:ident<T $(, $param:ident)*>) => {
		impl<T: Reflect $(, $param)*> Reflect for $ty<T $(, $param)*> {
			fn shape(&self) -> Shape<'_> {
				Shape::Seq(Box::new(self.iter().map(|value| value as &dyn Reflect)))
			}
		}
	};
}

impl_seq!(VecDeque<T>);
impl_seq!(BTreeSet<T>);
impl_seq!(HashSet<T, S>);

impl<K: Reflect, V: Reflect> Reflect for BTreeMap<K, V> {
	fn shape(&self) -> Shape<'_> {
		Shape::Map(Box::new(
			self
				.iter()
				.map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
		))
	}
}

// Entries come out in the map's own iteration order, which is not stable
// across runs
impl<K: Reflect, V: Reflect, S> Reflect for HashMap<K, V, S> {
	fn shape(&self) -> Shape<'_> {
		Shape::Map(Box::new(
			self
				.iter()
				.map(|(key, value)| (key as &dyn Reflect, value as &dyn Reflect)),
		))
	}
}
