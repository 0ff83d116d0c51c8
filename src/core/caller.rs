//! Caller context attached to log headers
//!
//! Rust has no runtime call-stack reflection, so frames are built at the
//! call site: [`caller!`](crate::caller) captures the enclosing function path,
//! file, line and the listed arguments, and [`CallerFrame::here`] captures
//! just the location through `#[track_caller]`.

use std::fmt;
use std::panic::Location;

/// One captured call site.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CallerFrame {
    pub function: Option<String>,
    pub owner: Option<String>,
    pub file: String,
    pub line: u32,
    /// Argument name and `Debug` rendering, in call order
    pub args: Vec<(String, String)>,
}

impl CallerFrame {
    /// Location-only frame for whoever called the enclosing `#[track_caller]` fn.
    #[track_caller]
    pub fn here() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self {
            function: None,
            owner: None,
            file: location.file().to_string(),
            line: location.line(),
            args: Vec::new(),
        }
    }

    /// Build a frame from a `type_name`-style function path such as
    /// `my_crate::orders::Order::submit` or `<my_crate::Order as Trait>::run`.
    ///
    /// A path that yields no function name produces a frame without one.
    pub fn from_path(path: &str, file: &str, line: u32) -> Self {
        let (function, owner) = split_function_path(path);
        Self {
            function,
            owner,
            file: file.to_string(),
            line,
            args: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }
}

/// `Owner.function(a=1, b="x") @ file:line`, omitting what is unknown.
impl fmt::Display for CallerFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(function) = &self.function {
            if let Some(owner) = &self.owner {
                write!(f, "{}.", owner)?;
            }
            write!(f, "{}(", function)?;
            for (i, (name, value)) in self.args.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}={}", name, value)?;
            }
            write!(f, ") ")?;
        }
        write!(f, "@ {}:{}", self.file, self.line)
    }
}

fn split_function_path(path: &str) -> (Option<String>, Option<String>) {
    // `<a::Type as b::Trait>::method` keeps the type inside the brackets.
    let (qualified_owner, tail) = match path.rfind(">::") {
        Some(pos) if path.starts_with('<') => {
            let inner = &path[1..pos];
            let ty = inner.split(" as ").next().unwrap_or(inner);
            (last_segment(ty), &path[pos + 3..])
        }
        _ => (None, path),
    };

    let segments: Vec<&str> = tail
        .split("::")
        .filter(|s| !s.is_empty() && *s != "{{closure}}")
        .collect();

    let Some((function, parents)) = segments.split_last() else {
        return (None, qualified_owner);
    };

    let owner = qualified_owner.or_else(|| {
        parents
            .last()
            .filter(|s| s.starts_with(|c: char| c.is_ascii_uppercase()))
            .map(|s| s.to_string())
    });

    (Some(function.to_string()), owner)
}

fn last_segment(path: &str) -> Option<String> {
    path.rsplit("::")
        .next()
        .map(|s| s.split('<').next().unwrap_or(s))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_function_path() {
        let frame = CallerFrame::from_path("app::orders::submit", "src/orders.rs", 10);
        assert_eq!(frame.function.as_deref(), Some("submit"));
        assert_eq!(frame.owner, None);
    }

    #[test]
    fn test_method_path() {
        let frame = CallerFrame::from_path("app::orders::Order::submit", "src/orders.rs", 10);
        assert_eq!(frame.function.as_deref(), Some("submit"));
        assert_eq!(frame.owner.as_deref(), Some("Order"));
    }

    #[test]
    fn test_trait_impl_path() {
        let frame =
            CallerFrame::from_path("<app::Order as app::Validate>::check", "src/lib.rs", 3);
        assert_eq!(frame.function.as_deref(), Some("check"));
        assert_eq!(frame.owner.as_deref(), Some("Order"));
    }

    #[test]
    fn test_closure_segments_skipped() {
        let frame = CallerFrame::from_path("app::Order::submit::{{closure}}", "src/lib.rs", 3);
        assert_eq!(frame.function.as_deref(), Some("submit"));
        assert_eq!(frame.owner.as_deref(), Some("Order"));
    }

    #[test]
    fn test_empty_path() {
        let frame = CallerFrame::from_path("", "src/lib.rs", 1);
        assert_eq!(frame.function, None);
        assert_eq!(frame.to_string(), "@ src/lib.rs:1");
    }

    #[test]
    fn test_display() {
        let frame = CallerFrame::from_path("app::Order::submit", "src/lib.rs", 7)
            .with_arg("qty", "3")
            .with_arg("sku", "\"A-1\"");
        assert_eq!(frame.to_string(), "Order.submit(qty=3, sku=\"A-1\") @ src/lib.rs:7");
    }

    #[test]
    fn test_here_captures_this_file() {
        let frame = CallerFrame::here();
        assert!(frame.file.ends_with("caller.rs"));
        assert!(frame.line > 0);
    }

    #[test]
    fn test_caller_macro() {
        struct Widget;
        impl Widget {
            fn spin(&self, turns: u32) -> CallerFrame {
                crate::caller!(turns)
            }
        }

        let frame = Widget.spin(2);
        assert_eq!(frame.function.as_deref(), Some("spin"));
        assert_eq!(frame.owner.as_deref(), Some("Widget"));
        assert_eq!(frame.args, vec![("turns".to_string(), "2".to_string())]);
    }
}
