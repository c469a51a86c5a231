//! `#<id>` fragment routing.

use std::fmt;

/// The recipe selected by the location fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    id: String,
}

impl Route {
    /// Parse `#abc`, `abc` or a full URL ending in `#abc`. Empty ids yield `None`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let id = match input.rfind('#') {
            Some(pos) => &input[pos + 1..],
            None => input,
        };
        if id.is_empty() {
            return None;
        }
        Some(Route { id: id.to_string() })
    }

    pub fn new(id: impl Into<String>) -> Self {
        Route { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fragment() {
        assert_eq!(Route::parse("#abc123").unwrap().id(), "abc123");
        assert_eq!(Route::parse("abc123").unwrap().id(), "abc123");
        assert_eq!(
            Route::parse("http://localhost:1234/#5ed6604591c37cdc054bc886")
                .unwrap()
                .id(),
            "5ed6604591c37cdc054bc886"
        );
    }

    #[test]
    fn test_empty_fragment() {
        assert!(Route::parse("").is_none());
        assert!(Route::parse("#").is_none());
        assert!(Route::parse("  ").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Route::new("abc").to_string(), "#abc");
    }
}
