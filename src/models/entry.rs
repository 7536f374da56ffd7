use serde::{Deserialize, Serialize};

/// A single changelog entry: a heading plus an optional body paragraph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Entry heading line, e.g. `### ✨ feat(auth): add login flow`.
    /// Headings are unique within a document; the duplicate check
    /// compares this string exactly.
    pub heading: String,
    /// Body paragraph rendered under the heading (may be empty)
    pub body: String,
}

impl Entry {
    /// Render the full entry block: heading line, blank line, then the
    /// body paragraph followed by a blank line if the body is non-empty
    pub fn block(&self) -> String {
        let mut output = format!("{}\n\n", self.heading);

        if !self.body.is_empty() {
            output.push_str(&self.body);
            output.push_str("\n\n");
        }

        output
    }
}
