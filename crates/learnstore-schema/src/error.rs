use std::{collections::BTreeMap, fmt};

///
/// ErrorTree
///
/// Accumulates validation failures, optionally routed by schema path
/// (e.g. `item:AssignmentItem`), so one pass reports every problem.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorTree {
    messages: Vec<String>,
    children: BTreeMap<String, Self>,
}

impl ErrorTree {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one error at this level.
    pub fn add(&mut self, err: impl fmt::Display) {
        self.messages.push(err.to_string());
    }

    /// Record one error under a named route.
    pub fn add_for(&mut self, route: impl Into<String>, err: impl fmt::Display) {
        self.children.entry(route.into()).or_default().add(err);
    }

    /// Attach a sub-tree under a named route; empty trees are dropped.
    pub fn merge_for(&mut self, route: impl Into<String>, tree: Self) {
        if tree.is_empty() {
            return;
        }

        let slot = self.children.entry(route.into()).or_default();
        slot.messages.extend(tree.messages);
        for (child, sub) in tree.children {
            slot.merge_for(child, sub);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty() && self.children.values().all(Self::is_empty)
    }

    /// Total number of recorded errors, at every depth.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len() + self.children.values().map(Self::len).sum::<usize>()
    }

    /// All errors as `(route, message)` pairs, routes joined with `.`.
    #[must_use]
    pub fn flatten(&self) -> Vec<(String, String)> {
        let mut out = Vec::new();
        self.flatten_into(String::new(), &mut out);

        out
    }

    fn flatten_into(&self, prefix: String, out: &mut Vec<(String, String)>) {
        for message in &self.messages {
            out.push((prefix.clone(), message.clone()));
        }
        for (route, child) in &self.children {
            let path = if prefix.is_empty() {
                route.clone()
            } else {
                format!("{prefix}.{route}")
            };
            child.flatten_into(path, out);
        }
    }

    /// `Ok` when nothing was recorded.
    pub fn result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl fmt::Display for ErrorTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (route, message) in self.flatten() {
            if route.is_empty() {
                writeln!(f, "{message}")?;
            } else {
                writeln!(f, "{route}: {message}")?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for ErrorTree {}

/// Format and record one error into an [`ErrorTree`].
#[macro_export]
macro_rules! err {
    ($errs:expr, $($arg:tt)*) => {
        $errs.add(format!($($arg)*))
    };
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tree_is_ok() {
        let mut errs = ErrorTree::new();
        errs.merge_for("item:Empty", ErrorTree::new());

        assert!(errs.is_empty());
        assert!(errs.result().is_ok());
    }

    #[test]
    fn routed_errors_flatten_with_paths() {
        let mut inner = ErrorTree::new();
        err!(inner, "duplicate property '{}'", "Title");

        let mut errs = ErrorTree::new();
        errs.add("root problem");
        errs.merge_for("item:NoteItem", inner);
        errs.add_for("view:Notes", "bad column");

        assert_eq!(errs.len(), 3);
        assert_eq!(
            errs.flatten(),
            vec![
                (String::new(), "root problem".to_string()),
                (
                    "item:NoteItem".to_string(),
                    "duplicate property 'Title'".to_string()
                ),
                ("view:Notes".to_string(), "bad column".to_string()),
            ]
        );
        assert!(errs.to_string().contains("view:Notes: bad column"));
    }
}
