use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, TimeZone};

use crate::{Reflect, Scalar, Shape};

/// Unix timestamp of `0001-01-01T00:00:00Z`, the zero time.
const ZERO_TIME_SECS: i64 = -62_135_596_800;

impl<Tz> Reflect for DateTime<Tz>
where
	Tz: TimeZone,
	Tz::Offset: Display,
{
	fn shape(&self) -> Shape<'_> {
		Shape::Scalar(Scalar::Timestamp(
			self.to_rfc3339_opts(SecondsFormat::AutoSi, true),
		))
	}

	fn is_zero(&self) -> Option<bool> {
		Some(self.timestamp() == ZERO_TIME_SECS && self.timestamp_subsec_nanos() == 0)
	}
}
