//! Filename pattern recognising camera and UUID style names.
//!
//! Two shapes are accepted, both anchored at the start of the name:
//!
//! - `IMG_` followed by exactly four ASCII digits (`IMG_1234.jpg`)
//! - a UUID-shaped prefix of ASCII hex digits in either case
//!   (`1b4e28ba-2fa1-11d2-883f-0016d3cca427.heic`)
//!
//! Anything may follow the prefix, so extensions and copy suffixes such as
//! `IMG_1234 (1).jpg` still match.
//!
//! # Example
//!
//! ```
//! use imgdedupe::scanner::NamePattern;
//!
//! let pattern = NamePattern::camera_and_uuid();
//! assert!(pattern.matches("IMG_0001 (1).jpg"));
//! assert!(!pattern.matches("holiday_IMG_0001.jpg"));
//! ```

use regex::Regex;

/// Regex source for the recognised filename prefixes.
pub const CAMERA_AND_UUID: &str = concat!(
    r"^(?:IMG_[0-9]{4}",
    r"|[0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12})",
);

/// Immutable filename matcher.
///
/// Built once at startup and handed to the [`Selector`](super::Selector);
/// there is no process-wide compiled pattern.
#[derive(Debug, Clone)]
pub struct NamePattern {
    regex: Regex,
}

impl NamePattern {
    /// The camera (`IMG_dddd`) and UUID prefix pattern.
    #[must_use]
    pub fn camera_and_uuid() -> Self {
        Self {
            regex: Regex::new(CAMERA_AND_UUID).expect("Invalid built-in filename regex"),
        }
    }

    /// Returns true if `name` starts with one of the recognised prefixes.
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }
}
