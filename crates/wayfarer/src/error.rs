//! Error types for route table construction and navigation.

use crate::pattern::{MAX_PATH_SEGMENTS, MAX_PATTERN_LENGTH};

/// Defects in a single path pattern string.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
	#[error("Pattern cannot be empty")]
	Empty,

	#[error("Pattern must start with '/': '{0}'")]
	MissingLeadingSlash(String),

	#[error("Pattern length {0} exceeds maximum allowed length of {MAX_PATTERN_LENGTH} bytes")]
	TooLong(usize),

	#[error("Pattern has {0} path segments, exceeding maximum of {MAX_PATH_SEGMENTS}")]
	TooManySegments(usize),

	#[error("Unclosed '{{' in pattern")]
	UnclosedBrace,

	#[error("Parameter name '{0}' is not a valid identifier")]
	InvalidParamName(String),

	#[error("Duplicate parameter name '{0}' in pattern")]
	DuplicateParam(String),

	#[error("Failed to compile pattern regex: {0}")]
	Regex(String),
}

/// Configuration defects detected while building a route table.
///
/// Every variant names the offending entry so a startup failure points
/// straight at the line of configuration that caused it.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
	#[error("Duplicate route name '{name}': declared for '{first}' and '{second}'")]
	DuplicateName {
		name: String,
		first: String,
		second: String,
	},

	#[error("Invalid path pattern '{path}': {source}")]
	InvalidPattern {
		path: String,
		source: PatternError,
	},

	#[error("Route group '{0}' has no child routes")]
	EmptyGroup(String),
}

/// Failures resolving or reversing routes against a built table.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
	#[error("No route matches path: {0}")]
	NotFound(String),

	#[error("Unknown route name: {0}")]
	UnknownName(String),

	#[error("Missing parameter '{param}' when reversing route '{name}'")]
	MissingParam { name: String, param: String },
}

/// Failures extracting typed values from matched path parameters.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParamError {
	#[error("Unknown parameter: {0}")]
	Unknown(String),

	#[error("Failed to parse parameter '{name}' value '{value}' as {ty}: {message}")]
	Parse {
		name: String,
		value: String,
		ty: &'static str,
		message: String,
	},
}
