//! The union (generalization) engine.
//!
//! A [`Schema`] starts empty (matching nothing it has been shown, since
//! it has been shown nothing) and is widened in place by
//! [`Schema::union`] so that after each call it matches every instance
//! folded in so far. Widening is monotonic: tags are only ever added to
//! a node's type set, never removed.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::debug;
use crate::schema::core::GeneralizeConfig;
use crate::schema::kind::Kind;

/// An insertion-ordered set of type tags.
///
/// JSON Schema's `type` keyword is either a single tag string or an
/// array of distinct tag strings. This type keeps the tags in
/// first-seen order (a plain `Vec` with a membership check, rather than
/// a hash set whose iteration order would be arbitrary) and serializes
/// a one-tag set as a bare string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeSet(Vec<Kind>);

impl TypeSet {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, kind: Kind) -> bool {
        self.0.contains(&kind)
    }

    /// Add a tag in first-seen position. Returns `true` if the tag was
    /// not already present.
    pub fn insert(&mut self, kind: Kind) -> bool {
        if self.contains(kind) {
            false
        } else {
            self.0.push(kind);
            true
        }
    }

    pub fn as_slice(&self) -> &[Kind] {
        &self.0
    }

    fn spelling(&self) -> String {
        self.0
            .iter()
            .map(Kind::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Serialize for TypeSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Single tag serializes as a bare string, matching the common
        // JSON Schema shape; two or more serialize as an array.
        match self.0.as_slice() {
            [single] => single.serialize(serializer),
            tags => tags.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for TypeSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(Kind),
            Many(Vec<Kind>),
        }

        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(kind) => {
                let mut set = TypeSet::default();
                set.insert(kind);
                set
            }
            OneOrMany::Many(kinds) => {
                let mut set = TypeSet::default();
                for kind in kinds {
                    set.insert(kind);
                }
                set
            }
        })
    }
}

/// The inferred shape of every value seen at one position.
///
/// Serializes as JSON-Schema-draft-4-style JSON: `type`, `properties`,
/// `items` and nothing else. A freshly created schema serializes as
/// `{}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Observed type tags, in first-seen order.
    #[serde(
        rename = "type",
        default,
        skip_serializing_if = "TypeSet::is_empty"
    )]
    pub kinds: TypeSet,
    /// Per-key schemas; present iff `object` is among the tags. Keys
    /// appear in first-seen order. A key present on only some observed
    /// objects still gets an entry, generalizing just the objects that
    /// had it (no optionality marker is recorded).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
    /// Single list-style element schema; present iff `array` is among
    /// the tags. It is the union across all elements of all arrays seen
    /// at this position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    /// Widen this schema in place so it additionally matches `instance`.
    ///
    /// Everything the schema matched before the call is still matched
    /// after it. Calling again with the same instance is a no-op. The
    /// schema is mutated destructively; callers that need the previous
    /// schema must clone it first.
    ///
    /// Fails only when `instance` nests deeper than
    /// [`GeneralizeConfig::max_depth`]; the schema may have been
    /// partially widened when that happens.
    pub fn union(&mut self, instance: &Value, config: &GeneralizeConfig) -> Result<(), String> {
        self.union_at(Some(instance), 0, config)
    }

    /// [`Schema::union`] over a possibly-absent value. `None` stands
    /// for an absent slot and leaves the schema untouched.
    pub fn union_opt(
        &mut self,
        instance: Option<&Value>,
        config: &GeneralizeConfig,
    ) -> Result<(), String> {
        self.union_at(instance, 0, config)
    }

    fn union_at(
        &mut self,
        instance: Option<&Value>,
        depth: usize,
        config: &GeneralizeConfig,
    ) -> Result<(), String> {
        if depth >= config.max_depth {
            return Err(format!(
                "Instance nesting exceeds the configured max depth of {}",
                config.max_depth
            ));
        }

        let Some(value) = instance else {
            // Absent values never affect inference at this position
            return Ok(());
        };

        match value {
            Value::Object(fields) => {
                self.widen(Kind::Object, config);
                let properties = self.properties.get_or_insert_with(IndexMap::new);
                for (key, field_value) in fields {
                    properties
                        .entry(key.clone())
                        .or_default()
                        .union_at(Some(field_value), depth + 1, config)?;
                }
            }
            Value::Array(elements) => {
                self.widen(Kind::Array, config);
                // One shared item schema, folded over every element of
                // every array seen here, never a per-index tuple.
                let items = self.items.get_or_insert_with(Default::default);
                for element in elements {
                    items.union_at(Some(element), depth + 1, config)?;
                }
            }
            _ => {
                self.widen(Kind::of(Some(value)), config);
            }
        }
        Ok(())
    }

    fn widen(&mut self, kind: Kind, config: &GeneralizeConfig) {
        if self.kinds.insert(kind) {
            debug!(
                config,
                "Widened type set with '{}' (now [{}])",
                kind.as_str(),
                self.kinds.spelling()
            );
        }
    }
}

/// Fold a sequence of instances into a single schema, starting from the
/// canonical empty schema. Zero instances yield the empty schema.
pub fn generalize<'a, I>(instances: I, config: &GeneralizeConfig) -> Result<Schema, String>
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut schema = Schema::default();
    for instance in instances {
        schema.union(instance, config)?;
    }
    Ok(schema)
}

/// [`generalize`] over possibly-absent instances, so sparse sequences
/// can be expressed. `None` slots are skipped.
pub fn generalize_opt<'a, I>(instances: I, config: &GeneralizeConfig) -> Result<Schema, String>
where
    I: IntoIterator<Item = Option<&'a Value>>,
{
    let mut schema = Schema::default();
    for instance in instances {
        schema.union_opt(instance, config)?;
    }
    Ok(schema)
}
