use crate::{Reflect, Shape};

// Tuples encode as sequences
macro_rules! impl_tuple {
	($($name:ident: $index:tt),+) => {
		impl<$($name: Reflect),+> Reflect for ($($name,)+) {
			fn shape(&self) -> Shape<'_> {
				let elements = vec![$(&self.$index as &dyn Reflect),+];
				Shape::Seq(Box::new(elements.into_iter()))
			}
		}
	};
}

impl_tuple!(A: 0);
impl_tuple!(A: 0, B: 1);
impl_tuple!(A: 0, B: 1, C: 2);
impl_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
