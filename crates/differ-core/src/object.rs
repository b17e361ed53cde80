//! Recursive structural diff over plain JSON records.
//!
//! Records are [`serde_json::Map`] values. A key held by both records is
//! recursed into only when both sides are objects; arrays, nulls, and
//! scalars are leaves compared with the equality predicate. `serde_json` is
//! built with `preserve_order`, so traversal follows first-seen key order:
//! the old record's keys, then any new-only keys.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single change between two records, addressed by key path from the root.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ObjectDiffEntry {
    /// Key present only in the new record.
    Added {
        path: Vec<String>,
        #[serde(rename = "newValue")]
        new_value: Value,
    },
    /// Key present only in the old record.
    Removed {
        path: Vec<String>,
        #[serde(rename = "oldValue")]
        old_value: Value,
    },
    /// Leaf value differs between the records.
    Modified {
        path: Vec<String>,
        #[serde(rename = "oldValue")]
        old_value: Value,
        #[serde(rename = "newValue")]
        new_value: Value,
    },
    /// Leaf value equal in both records. Emitted only on request.
    Unchanged { path: Vec<String>, value: Value },
}

impl ObjectDiffEntry {
    /// The key path from the root record to the differing leaf.
    pub fn path(&self) -> &[String] {
        match self {
            ObjectDiffEntry::Added { path, .. }
            | ObjectDiffEntry::Removed { path, .. }
            | ObjectDiffEntry::Modified { path, .. }
            | ObjectDiffEntry::Unchanged { path, .. } => path,
        }
    }

    fn path_mut(&mut self) -> &mut Vec<String> {
        match self {
            ObjectDiffEntry::Added { path, .. }
            | ObjectDiffEntry::Removed { path, .. }
            | ObjectDiffEntry::Modified { path, .. }
            | ObjectDiffEntry::Unchanged { path, .. } => path,
        }
    }
}

/// Options for [`diff_objects`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ObjectDiffOptions {
    /// Emit `Unchanged` entries for equal leaves. Defaults to `false`.
    pub include_unchanged: bool,
}

/// Diff two records under structural value equality.
///
/// [`Value`] is an owned tree, so the input cannot be cyclic; recursion depth
/// is bounded by the nesting of the records themselves.
pub fn diff_objects(
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    options: &ObjectDiffOptions,
) -> Vec<ObjectDiffEntry> {
    diff_objects_by(old, new, options, |a, b| a == b)
}

/// Diff two records under a caller-supplied leaf equality predicate.
pub fn diff_objects_by<F>(
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    options: &ObjectDiffOptions,
    eq: F,
) -> Vec<ObjectDiffEntry>
where
    F: Fn(&Value, &Value) -> bool,
{
    diff_records(old, new, options, &eq)
}

fn diff_records<F>(
    old: &Map<String, Value>,
    new: &Map<String, Value>,
    options: &ObjectDiffOptions,
    eq: &F,
) -> Vec<ObjectDiffEntry>
where
    F: Fn(&Value, &Value) -> bool,
{
    let mut entries = Vec::new();

    for (key, old_value) in old {
        match new.get(key) {
            Some(new_value) => match (old_value.as_object(), new_value.as_object()) {
                (Some(old_record), Some(new_record)) => {
                    for mut child in diff_records(old_record, new_record, options, eq) {
                        child.path_mut().insert(0, key.clone());
                        entries.push(child);
                    }
                }
                _ => {
                    if !eq(old_value, new_value) {
                        entries.push(ObjectDiffEntry::Modified {
                            path: vec![key.clone()],
                            old_value: old_value.clone(),
                            new_value: new_value.clone(),
                        });
                    } else if options.include_unchanged {
                        entries.push(ObjectDiffEntry::Unchanged {
                            path: vec![key.clone()],
                            value: old_value.clone(),
                        });
                    }
                }
            },
            None => entries.push(ObjectDiffEntry::Removed {
                path: vec![key.clone()],
                old_value: old_value.clone(),
            }),
        }
    }

    for (key, new_value) in new {
        if !old.contains_key(key) {
            entries.push(ObjectDiffEntry::Added {
                path: vec![key.clone()],
                new_value: new_value.clone(),
            });
        }
    }

    entries
}

/// Format record diff entries as a newline-joined report.
///
/// One line per entry: `+ path: value` for additions, `- path: value` for
/// removals, `~ path: old → new` for modifications, and a two-space prefix
/// for unchanged leaves. Paths are dot-joined; values are compact JSON.
pub fn format_object_diff(entries: &[ObjectDiffEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let path = entry.path().join(".");
            match entry {
                ObjectDiffEntry::Added { new_value, .. } => {
                    format!("+ {path}: {}", compact(new_value))
                }
                ObjectDiffEntry::Removed { old_value, .. } => {
                    format!("- {path}: {}", compact(old_value))
                }
                ObjectDiffEntry::Modified {
                    old_value,
                    new_value,
                    ..
                } => format!("~ {path}: {} → {}", compact(old_value), compact(new_value)),
                ObjectDiffEntry::Unchanged { value, .. } => {
                    format!("  {path}: {}", compact(value))
                }
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn compact(value: &Value) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn record(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other:?}"),
        }
    }

    #[test]
    fn nested_records_recurse_with_prefixed_paths() {
        let old = record(json!({
            "name": "John",
            "age": 30,
            "address": { "city": "New York", "zip": "10001" },
        }));
        let new = record(json!({
            "name": "John",
            "age": 31,
            "address": { "city": "Boston", "zip": "10001" },
            "email": "john@example.com",
        }));

        let result = diff_objects(&old, &new, &ObjectDiffOptions::default());

        assert_eq!(
            result,
            vec![
                ObjectDiffEntry::Modified {
                    path: vec!["age".to_string()],
                    old_value: json!(30),
                    new_value: json!(31),
                },
                ObjectDiffEntry::Modified {
                    path: vec!["address".to_string(), "city".to_string()],
                    old_value: json!("New York"),
                    new_value: json!("Boston"),
                },
                ObjectDiffEntry::Added {
                    path: vec!["email".to_string()],
                    new_value: json!("john@example.com"),
                },
            ]
        );
    }

    #[test]
    fn include_unchanged_emits_equal_leaves() {
        let old = record(json!({ "a": 1, "b": 2 }));
        let new = record(json!({ "a": 1, "b": 3 }));

        let result = diff_objects(
            &old,
            &new,
            &ObjectDiffOptions {
                include_unchanged: true,
            },
        );

        assert_eq!(
            result,
            vec![
                ObjectDiffEntry::Unchanged {
                    path: vec!["a".to_string()],
                    value: json!(1),
                },
                ObjectDiffEntry::Modified {
                    path: vec!["b".to_string()],
                    old_value: json!(2),
                    new_value: json!(3),
                },
            ]
        );
    }

    #[test]
    fn arrays_are_leaves_not_records() {
        let old = record(json!({ "tags": [1, 2] }));
        let new = record(json!({ "tags": [1, 3] }));

        let result = diff_objects(&old, &new, &ObjectDiffOptions::default());

        assert_eq!(
            result,
            vec![ObjectDiffEntry::Modified {
                path: vec!["tags".to_string()],
                old_value: json!([1, 2]),
                new_value: json!([1, 3]),
            }]
        );
    }

    #[test]
    fn null_is_a_leaf() {
        let old = record(json!({ "x": null }));
        let new = record(json!({ "x": { "inner": 1 } }));

        let result = diff_objects(&old, &new, &ObjectDiffOptions::default());
        assert_eq!(result.len(), 1);
        assert!(matches!(result[0], ObjectDiffEntry::Modified { .. }));
    }

    #[test]
    fn custom_predicate_overrides_structural_equality() {
        let old = record(json!({ "a": 10 }));
        let new = record(json!({ "a": 99 }));

        // Treat all numbers as equal.
        let result = diff_objects_by(&old, &new, &ObjectDiffOptions::default(), |a, b| {
            a.is_number() && b.is_number() || a == b
        });
        assert!(result.is_empty());
    }

    #[test]
    fn disjoint_keys_are_total() {
        let old = record(json!({ "gone": 1 }));
        let new = record(json!({ "fresh": 2 }));

        let result = diff_objects(&old, &new, &ObjectDiffOptions::default());
        assert_eq!(
            result,
            vec![
                ObjectDiffEntry::Removed {
                    path: vec!["gone".to_string()],
                    old_value: json!(1),
                },
                ObjectDiffEntry::Added {
                    path: vec!["fresh".to_string()],
                    new_value: json!(2),
                },
            ]
        );
    }

    #[test]
    fn formatting_is_line_per_entry() {
        let entries = vec![
            ObjectDiffEntry::Added {
                path: vec!["email".to_string()],
                new_value: json!("john@example.com"),
            },
            ObjectDiffEntry::Removed {
                path: vec!["phone".to_string()],
                old_value: json!("123-456-7890"),
            },
            ObjectDiffEntry::Modified {
                path: vec!["age".to_string()],
                old_value: json!(30),
                new_value: json!(31),
            },
        ];

        assert_eq!(
            format_object_diff(&entries),
            "+ email: \"john@example.com\"\n- phone: \"123-456-7890\"\n~ age: 30 → 31"
        );
    }

    #[test]
    fn formatting_unchanged_uses_blank_prefix() {
        let entries = vec![ObjectDiffEntry::Unchanged {
            path: vec!["a".to_string(), "b".to_string()],
            value: json!(true),
        }];
        assert_eq!(format_object_diff(&entries), "  a.b: true");
    }
}
