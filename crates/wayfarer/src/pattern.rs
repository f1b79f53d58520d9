//! URL path pattern compilation and matching.
//!
//! Patterns are validated and compiled once, at table build time; matching
//! afterwards is a single regex pass.

use std::collections::HashMap;

use crate::error::PatternError;
use crate::params::PathParams;

/// Maximum allowed length for a pattern string in bytes.
pub const MAX_PATTERN_LENGTH: usize = 1024;

/// Maximum allowed number of path segments in a pattern.
pub const MAX_PATH_SEGMENTS: usize = 32;

/// Maximum allowed size for a compiled pattern regex in bytes.
const MAX_REGEX_SIZE: usize = 1 << 20;

/// A compiled URL path pattern.
///
/// Supports literal paths and parameter captures:
/// - `/about` matches exactly
/// - `/events/{id}` captures one path segment as `id`
/// - `/files/{rest:*}` captures the remaining path, separators included
///
/// Wildcard captures include `/`, so a value taken from `{rest:*}` must be
/// validated by the caller before being used for anything filesystem-shaped.
///
/// # Examples
///
/// ```
/// use wayfarer::PathPattern;
///
/// let pattern = PathPattern::new("/events/{id}").unwrap();
/// let params = pattern.matches("/events/42").unwrap();
/// assert_eq!(params.get("id"), Some("42"));
/// assert!(pattern.matches("/events").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct PathPattern {
	/// The original pattern string.
	pattern: String,
	/// Compiled matcher.
	regex: regex::Regex,
	/// Parameter names in pattern order.
	param_names: Vec<String>,
	/// Whether the pattern has no captures.
	is_exact: bool,
}

impl PathPattern {
	/// Validates and compiles a pattern string.
	///
	/// # Errors
	///
	/// Returns a [`PatternError`] if the pattern is empty, lacks a leading
	/// `/`, exceeds the length or segment limits, contains a malformed or
	/// duplicate parameter, or fails regex compilation.
	pub fn new(pattern: &str) -> Result<Self, PatternError> {
		if pattern.is_empty() {
			return Err(PatternError::Empty);
		}
		if !pattern.starts_with('/') {
			return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
		}
		// Bound the input before regex compilation; oversized patterns are a
		// configuration defect, not something to hand to the regex engine.
		if pattern.len() > MAX_PATTERN_LENGTH {
			return Err(PatternError::TooLong(pattern.len()));
		}
		let segment_count = pattern.split('/').count();
		if segment_count > MAX_PATH_SEGMENTS {
			return Err(PatternError::TooManySegments(segment_count));
		}

		let (regex_str, param_names) = Self::compile(pattern)?;

		let regex = regex::RegexBuilder::new(&regex_str)
			.size_limit(MAX_REGEX_SIZE)
			.build()
			.map_err(|e| PatternError::Regex(e.to_string()))?;

		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			param_names,
			is_exact: !pattern.contains('{'),
		})
	}

	/// Translates a pattern into an anchored regex and collects its
	/// parameter names.
	fn compile(pattern: &str) -> Result<(String, Vec<String>), PatternError> {
		let mut regex_str = String::from("^");
		let mut param_names: Vec<String> = Vec::new();
		let mut chars = pattern.chars().peekable();

		while let Some(c) = chars.next() {
			match c {
				'{' => {
					let mut name = String::new();
					let mut wildcard = false;
					let mut closed = false;

					while let Some(next) = chars.next() {
						match next {
							'}' => {
								closed = true;
								break;
							}
							// The `:*` marker must close the capture.
							':' if chars.peek() == Some(&'*') => {
								chars.next();
								wildcard = true;
								match chars.next() {
									Some('}') => closed = true,
									_ => return Err(PatternError::UnclosedBrace),
								}
								break;
							}
							_ => name.push(next),
						}
					}

					if !closed {
						return Err(PatternError::UnclosedBrace);
					}
					if !is_valid_param_name(&name) {
						return Err(PatternError::InvalidParamName(name));
					}
					if param_names.contains(&name) {
						return Err(PatternError::DuplicateParam(name));
					}

					if wildcard {
						// Matches across `/`; captures the rest of the path.
						regex_str.push_str(&format!("(?P<{}>.*)", name));
					} else {
						regex_str.push_str(&format!("(?P<{}>[^/]+)", name));
					}
					param_names.push(name);
				}
				'/' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '^' | '$' | '|' | '\\' => {
					regex_str.push('\\');
					regex_str.push(c);
				}
				_ => regex_str.push(c),
			}
		}

		regex_str.push('$');
		Ok((regex_str, param_names))
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the parameter names in pattern order.
	pub fn param_names(&self) -> &[String] {
		&self.param_names
	}

	/// Returns whether the pattern has no parameter captures.
	pub fn is_exact(&self) -> bool {
		self.is_exact
	}

	/// Attempts to match a path, extracting its parameters.
	pub fn matches(&self, path: &str) -> Option<PathParams> {
		self.regex.captures(path).map(|caps| {
			PathParams::from_pairs(self.param_names.iter().filter_map(|name| {
				caps.name(name)
					.map(|m| (name.clone(), m.as_str().to_string()))
			}))
		})
	}

	/// Returns whether the path matches, without extracting parameters.
	pub fn is_match(&self, path: &str) -> bool {
		self.regex.is_match(path)
	}

	/// Substitutes parameters back into the pattern, producing a path.
	///
	/// Returns `None` if any parameter of the pattern is absent from `params`.
	pub fn reverse(&self, params: &HashMap<String, String>) -> Option<String> {
		let mut result = self.pattern.clone();

		for name in &self.param_names {
			let value = params.get(name)?;
			let plain = format!("{{{}}}", name);
			let wildcard = format!("{{{}:*}}", name);

			if result.contains(&plain) {
				result = result.replace(&plain, value);
			} else {
				result = result.replace(&wildcard, value);
			}
		}

		Some(result)
	}
}

impl PartialEq for PathPattern {
	fn eq(&self, other: &Self) -> bool {
		self.pattern == other.pattern
	}
}

impl Eq for PathPattern {}

impl std::fmt::Display for PathPattern {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.pattern)
	}
}

/// Parameter names double as regex capture group names, so they are held to
/// ASCII identifier rules.
fn is_valid_param_name(name: &str) -> bool {
	let mut chars = name.chars();
	match chars.next() {
		Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
		_ => return false,
	}
	chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_exact_pattern() {
		let pattern = PathPattern::new("/about").unwrap();
		assert!(pattern.is_exact());
		assert!(pattern.is_match("/about"));
		assert!(!pattern.is_match("/about/us"));
	}

	#[rstest]
	fn test_single_param() {
		let pattern = PathPattern::new("/events/{id}").unwrap();
		assert!(!pattern.is_exact());

		let params = pattern.matches("/events/42").unwrap();
		assert_eq!(params.get("id"), Some("42"));
		assert!(pattern.matches("/events/").is_none());
	}

	#[rstest]
	fn test_multiple_params() {
		let pattern = PathPattern::new("/events/{event_id}/guests/{guest_id}").unwrap();
		let params = pattern.matches("/events/7/guests/19").unwrap();

		assert_eq!(params.get("event_id"), Some("7"));
		assert_eq!(params.get("guest_id"), Some("19"));
		assert_eq!(pattern.param_names(), &["event_id", "guest_id"]);
	}

	#[rstest]
	fn test_wildcard_param() {
		let pattern = PathPattern::new("/files/{rest:*}").unwrap();
		let params = pattern.matches("/files/css/site/main.css").unwrap();

		assert_eq!(params.get("rest"), Some("css/site/main.css"));
	}

	#[rstest]
	fn test_special_chars_escaped() {
		let pattern = PathPattern::new("/api/v1.0").unwrap();
		assert!(pattern.is_match("/api/v1.0"));
		assert!(!pattern.is_match("/api/v1X0"));
	}

	#[rstest]
	#[case("")]
	#[case("about")]
	fn test_rejects_malformed_start(#[case] raw: &str) {
		assert!(PathPattern::new(raw).is_err());
	}

	#[rstest]
	fn test_rejects_unclosed_brace() {
		assert_eq!(PathPattern::new("/events/{id"), Err(PatternError::UnclosedBrace));
	}

	#[rstest]
	#[case("/events/{}")]
	#[case("/events/{1st}")]
	#[case("/events/{a-b}")]
	#[case("/events/{id:int}")]
	fn test_rejects_invalid_param_name(#[case] raw: &str) {
		assert!(matches!(
			PathPattern::new(raw),
			Err(PatternError::InvalidParamName(_))
		));
	}

	#[rstest]
	fn test_rejects_duplicate_param() {
		assert_eq!(
			PathPattern::new("/events/{id}/guests/{id}"),
			Err(PatternError::DuplicateParam("id".to_string()))
		);
	}

	#[rstest]
	fn test_rejects_excessive_length() {
		let long = format!("/{}", "a".repeat(MAX_PATTERN_LENGTH));
		assert!(matches!(PathPattern::new(&long), Err(PatternError::TooLong(_))));
	}

	#[rstest]
	fn test_rejects_excessive_segments() {
		let deep = "/seg".repeat(MAX_PATH_SEGMENTS + 1);
		assert!(matches!(
			PathPattern::new(&deep),
			Err(PatternError::TooManySegments(_))
		));
	}

	#[rstest]
	fn test_reverse() {
		let pattern = PathPattern::new("/events/{id}").unwrap();
		let mut params = HashMap::new();
		params.insert("id".to_string(), "42".to_string());

		assert_eq!(pattern.reverse(&params), Some("/events/42".to_string()));
		assert_eq!(pattern.reverse(&HashMap::new()), None);
	}

	#[rstest]
	fn test_reverse_wildcard() {
		let pattern = PathPattern::new("/files/{rest:*}").unwrap();
		let mut params = HashMap::new();
		params.insert("rest".to_string(), "css/main.css".to_string());

		assert_eq!(pattern.reverse(&params), Some("/files/css/main.css".to_string()));
	}

	#[rstest]
	fn test_display_and_equality() {
		let p1 = PathPattern::new("/events/{id}").unwrap();
		let p2 = PathPattern::new("/events/{id}").unwrap();
		let p3 = PathPattern::new("/events/{event}").unwrap();

		assert_eq!(format!("{}", p1), "/events/{id}");
		assert_eq!(p1, p2);
		assert_ne!(p1, p3);
	}
}
