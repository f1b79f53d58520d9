//! Matched path parameters and typed access.

use crate::error::ParamError;

/// Parameters extracted from a matched path, in pattern order.
///
/// Lookup is by name; the number of parameters is bounded by the pattern
/// segment limit, so a linear scan is plenty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathParams {
	entries: Vec<(String, String)>,
}

impl PathParams {
	pub(crate) fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
		Self {
			entries: pairs.into_iter().collect(),
		}
	}

	/// Returns the raw value of a parameter.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	/// Parses a parameter into a typed value.
	///
	/// # Examples
	///
	/// ```
	/// use wayfarer::PathPattern;
	///
	/// let pattern = PathPattern::new("/events/{id}").unwrap();
	/// let params = pattern.matches("/events/42").unwrap();
	/// assert_eq!(params.parse::<i64>("id").unwrap(), 42);
	/// assert!(params.parse::<i64>("missing").is_err());
	/// ```
	pub fn parse<T: FromParam>(&self, name: &str) -> Result<T, ParamError> {
		let raw = self
			.get(name)
			.ok_or_else(|| ParamError::Unknown(name.to_string()))?;
		T::from_param(raw).map_err(|message| ParamError::Parse {
			name: name.to_string(),
			value: raw.to_string(),
			ty: T::TYPE_NAME,
			message,
		})
	}

	/// Returns the number of parameters.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether there are no parameters.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(name, value)` pairs in pattern order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
	}
}

/// Conversion from a raw path parameter value.
pub trait FromParam: Sized {
	/// Type name used in error diagnostics.
	const TYPE_NAME: &'static str;

	/// Converts the raw value, returning a message on failure.
	fn from_param(raw: &str) -> Result<Self, String>;
}

macro_rules! impl_from_param {
	($($ty:ty),* $(,)?) => {
		$(
			impl FromParam for $ty {
				const TYPE_NAME: &'static str = stringify!($ty);

				fn from_param(raw: &str) -> Result<Self, String> {
					raw.parse::<$ty>().map_err(|e| e.to_string())
				}
			}
		)*
	};
}

impl_from_param!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, usize, f32, f64, bool);

impl FromParam for String {
	const TYPE_NAME: &'static str = "String";

	fn from_param(raw: &str) -> Result<Self, String> {
		Ok(raw.to_string())
	}
}
