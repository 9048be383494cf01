//! Recursive schema comparator with reference resolution and cycle safety.
//!
//! [`SchemaDiffer`] walks two schema nodes in lockstep and reports the
//! elements present on only one side as [`ElProperty`] entries. Named
//! references are resolved against the definition table of their own
//! document side; the two sides are never cross-resolved. A recursion-path
//! guard makes self-referential and mutually-referential definitions
//! terminate instead of recursing forever.

use crate::changeset::ElProperty;
use crate::config::DiffConfig;
use crate::model::{Schema, SchemaKind};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

use crate::map_diff::MapKeyDiff;

/// Schema elements found on only one side of a comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaDiff {
    /// Elements present only in the new schema.
    pub increased: Vec<ElProperty>,
    /// Elements present only in the old schema.
    pub missing: Vec<ElProperty>,
}

impl SchemaDiff {
    pub fn is_empty(&self) -> bool {
        self.increased.is_empty() && self.missing.is_empty()
    }
}

/// Reference-name pair identifying one in-flight expansion on the current
/// recursion path. `None` marks a side that was not a reference.
type RefPair = (Option<String>, Option<String>);

/// One schema comparison, carrying both definition tables and the cycle
/// guard. Scoped to a single top-level diff call; never shared between
/// unrelated branches.
pub struct SchemaDiffer<'a> {
    old_defs: &'a BTreeMap<String, Schema>,
    new_defs: &'a BTreeMap<String, Schema>,
    max_ref_depth: u32,
    in_flight: FxHashSet<RefPair>,
}

impl<'a> SchemaDiffer<'a> {
    pub fn new(
        old_defs: &'a BTreeMap<String, Schema>,
        new_defs: &'a BTreeMap<String, Schema>,
        config: &DiffConfig,
    ) -> SchemaDiffer<'a> {
        SchemaDiffer {
            old_defs,
            new_defs,
            max_ref_depth: config.max_ref_depth,
            in_flight: FxHashSet::default(),
        }
    }

    /// Compare two optional schema nodes rooted at `prefix`.
    ///
    /// Consumes the differ: the cycle guard must not leak into a second
    /// top-level comparison.
    pub fn diff(
        mut self,
        old: Option<&Schema>,
        new: Option<&Schema>,
        prefix: &str,
    ) -> SchemaDiff {
        let mut out = SchemaDiff::default();
        self.diff_nodes(old, new, prefix, &mut out);
        out
    }

    fn diff_nodes(
        &mut self,
        old: Option<&Schema>,
        new: Option<&Schema>,
        path: &str,
        out: &mut SchemaDiff,
    ) {
        match (old, new) {
            (None, None) => {}
            (None, Some(new_node)) => out.increased.push(ElProperty::new(path, new_node.clone())),
            (Some(old_node), None) => out.missing.push(ElProperty::new(path, old_node.clone())),
            (Some(old_node), Some(new_node)) => self.diff_present(old_node, new_node, path, out),
        }
    }

    fn diff_present(&mut self, old: &Schema, new: &Schema, path: &str, out: &mut SchemaDiff) {
        let (old_ref, old_resolved) = resolve(old, self.old_defs, self.max_ref_depth);
        let (new_ref, new_resolved) = resolve(new, self.new_defs, self.max_ref_depth);

        let guard = if old_ref.is_some() || new_ref.is_some() {
            let pair: RefPair = (
                old_ref.map(str::to_owned),
                new_ref.map(str::to_owned),
            );
            if !self.in_flight.insert(pair.clone()) {
                // Same reference pair is already being expanded further up
                // this recursion path: cycle, treat as structurally equal.
                return;
            }
            Some(pair)
        } else {
            None
        };

        self.diff_resolved(old_resolved, new_resolved, path, out);

        if let Some(pair) = guard {
            self.in_flight.remove(&pair);
        }
    }

    fn diff_resolved(&mut self, old: &Schema, new: &Schema, path: &str, out: &mut SchemaDiff) {
        match (&old.kind, &new.kind) {
            (
                SchemaKind::Object {
                    properties: old_props,
                },
                SchemaKind::Object {
                    properties: new_props,
                },
            ) => {
                let prop_diff = MapKeyDiff::diff(old_props, new_props);
                for (name, schema) in prop_diff.increased {
                    out.increased
                        .push(ElProperty::new(join(path, name), (*schema).clone()));
                }
                for (name, schema) in prop_diff.missing {
                    out.missing
                        .push(ElProperty::new(join(path, name), (*schema).clone()));
                }
                for name in prop_diff.shared {
                    let child_path = join(path, name);
                    self.diff_nodes(
                        old_props.get(name),
                        new_props.get(name),
                        &child_path,
                        out,
                    );
                }
            }
            (SchemaKind::Array { items: old_items }, SchemaKind::Array { items: new_items }) => {
                let item_path = format!("{path}[]");
                self.diff_nodes(
                    Some(old_items.as_ref()),
                    Some(new_items.as_ref()),
                    &item_path,
                    out,
                );
            }
            (
                SchemaKind::Primitive {
                    type_name: old_type,
                },
                SchemaKind::Primitive {
                    type_name: new_type,
                },
            ) => {
                if old_type != new_type {
                    replace(out, path, old, new);
                }
            }
            // Both sides stayed references after resolution (dangling or
            // depth-capped): opaque leaves compared by name only.
            (SchemaKind::Reference { name: old_name }, SchemaKind::Reference { name: new_name }) => {
                if old_name != new_name {
                    replace(out, path, old, new);
                }
            }
            // Kind mismatch: reported as a full replacement, not a partial
            // structural diff.
            _ => replace(out, path, old, new),
        }
    }
}

/// Follow a reference chain against one side's definition table.
///
/// Returns the outermost reference name (when the node was a reference at
/// all) and the furthest resolvable node. Dangling references and chains
/// longer than `max_depth` stop at the last reference node.
fn resolve<'s>(
    node: &'s Schema,
    defs: &'s BTreeMap<String, Schema>,
    max_depth: u32,
) -> (Option<&'s str>, &'s Schema) {
    let mut current = node;
    let mut first_ref = None;
    let mut depth = 0;
    while let SchemaKind::Reference { name } = &current.kind {
        if first_ref.is_none() {
            first_ref = Some(name.as_str());
        }
        if depth >= max_depth {
            break;
        }
        match defs.get(name) {
            Some(next) => {
                current = next;
                depth += 1;
            }
            None => break,
        }
    }
    (first_ref, current)
}

/// Description-only differences never land here; a replacement is emitted
/// only for kind or primitive-type mismatches.
fn replace(out: &mut SchemaDiff, path: &str, old: &Schema, new: &Schema) {
    out.missing.push(ElProperty::new(path, old.clone()));
    out.increased.push(ElProperty::new(path, new.clone()));
}

fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}
