//! Template resolution - rewrites implicit and named placeholders into
//! explicit positional indices
//!
//! Placeholder forms handled:
//!
//! ```text
//! {}  {:2}  {,10:N2}               implicit: index inserted
//! {name}  {name:2}  {name,10:N2}   named: name replaced by its index
//! {0}  {0:2}  {0,10:N2}            explicit: left untouched
//! ```

use std::collections::HashMap;

use tracing::trace;

/// A template rewritten to explicit positional placeholders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTemplate {
    /// The rewritten template text
    pub text: String,
    /// Named placeholders and the index bound to each, in first-seen order
    pub names: Vec<(String, usize)>,
    /// Argument slots consumed by the scan (the shared counter's final value)
    pub slots: usize,
}

impl ResolvedTemplate {
    /// Look up the index bound to a placeholder name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, index)| *index)
    }
}

/// Rewrite a template so every placeholder carries an explicit index
///
/// See [`resolve_template`] for the full result including name bindings.
///
/// ```rust
/// use mungefmt::template::resolve;
///
/// assert_eq!(resolve("{} is a {1}"), "{0} is a {1}");
/// assert_eq!(resolve("{x} and {x}"), "{0} and {0}");
/// ```
pub fn resolve(template: &str) -> String {
    resolve_template(template).text
}

/// Rewrite a template and report how names were bound
///
/// The scan is lenient: a stray `}` or an unterminated `{` stops rewriting and
/// the rest of the template is copied through unchanged, leaving any
/// diagnosis to the positional formatter.
pub fn resolve_template(template: &str) -> ResolvedTemplate {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len() + 8);
    let mut names: Vec<(String, usize)> = Vec::new();
    let mut name_to_index: HashMap<&str, usize> = HashMap::new();
    let mut counter = 0usize;

    // everything before `copied` has already been written to `out`
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'}' => {
                if bytes.get(i + 1) == Some(&b'}') {
                    i += 2;
                    continue;
                }
                break;
            }
            b'{' => {
                if bytes.get(i + 1) == Some(&b'{') {
                    i += 2;
                    continue;
                }
            }
            _ => {
                i += 1;
                continue;
            }
        }

        let meta_start = i + 1;
        let Some(close) = template[meta_start..].find('}').map(|p| meta_start + p) else {
            break;
        };
        let meta_end = template[meta_start..close]
            .find([':', ','])
            .map_or(close, |p| meta_start + p);
        let meta = template[meta_start..meta_end].trim();

        if is_explicit_index(meta) {
            counter += 1;
        } else {
            let index = if meta.is_empty() {
                counter += 1;
                counter - 1
            } else if let Some(&index) = name_to_index.get(meta) {
                index
            } else {
                name_to_index.insert(meta, counter);
                names.push((meta.to_string(), counter));
                counter += 1;
                counter - 1
            };

            trace!(meta, index, "bound placeholder");
            out.push_str(&template[copied..meta_start]);
            out.push_str(&index.to_string());
            copied = meta_end;
        }

        i = close + 1;
    }

    out.push_str(&template[copied..]);

    ResolvedTemplate {
        text: out,
        names,
        slots: counter,
    }
}

/// A meta that reads as a 32-bit integer, optionally signed
fn is_explicit_index(meta: &str) -> bool {
    meta.parse::<i32>().is_ok()
}
