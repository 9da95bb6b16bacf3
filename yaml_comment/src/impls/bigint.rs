use num_bigint::{BigInt, BigUint};

use crate::{Reflect, Scalar, Shape};

// Decimal digits can exceed `i128`, so these carry their text through
// `Scalar::BigInt` rather than a fixed-width integer
impl Reflect for BigUint {
	fn shape(&self) -> Shape<'_> {
		Shape::Scalar(Scalar::BigInt(self.to_string()))
	}
}

impl Reflect for BigInt {
	fn shape(&self) -> Shape<'_> {
		Shape::Scalar(Scalar::BigInt(self.to_string()))
	}
}
