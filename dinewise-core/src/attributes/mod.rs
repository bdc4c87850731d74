//! Business attribute values and their normalisation.
//!
//! Raw attributes are a mapping whose values are often literal-encoded text,
//! sometimes wrapping a further mapping (`"{'garage': False}"`). Loading
//! flattens them once into [`Attributes`], a flat map keyed by attribute name
//! where nested entries appear as `parent_child`.

use std::collections::BTreeMap;

use log::trace;

mod literal;

pub use literal::{LiteralError, parse_literal};

/// A parsed literal attribute value.
///
/// Mappings preserve the order in which their keys were written.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// `True` or `False`.
    Bool(bool),
    /// Integer or decimal number.
    Number(f64),
    /// Free text, including text that failed to parse as a literal.
    Text(String),
    /// A list or tuple.
    List(Vec<AttributeValue>),
    /// An ordered key/value mapping.
    Map(Vec<(String, AttributeValue)>),
    /// `None`.
    Null,
}

impl AttributeValue {
    /// Short name of the value's kind, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "text",
            Self::List(_) => "list",
            Self::Map(_) => "mapping",
            Self::Null => "none",
        }
    }
}

/// A non-mapping attribute value stored in [`Attributes`].
#[derive(Debug, Clone, PartialEq)]
pub enum FlatValue {
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Opaque text.
    Text(String),
    /// Sequence of values, kept as parsed.
    List(Vec<AttributeValue>),
    /// Explicit absence.
    Null,
}

impl FlatValue {
    /// Report whether the value is boolean `true`.
    ///
    /// Text such as `"True"` does not count; only parsed booleans do.
    #[must_use]
    pub const fn is_true(&self) -> bool {
        matches!(self, Self::Bool(true))
    }
}

impl From<FlatValue> for AttributeValue {
    fn from(value: FlatValue) -> Self {
        match value {
            FlatValue::Bool(flag) => Self::Bool(flag),
            FlatValue::Number(number) => Self::Number(number),
            FlatValue::Text(text) => Self::Text(text),
            FlatValue::List(items) => Self::List(items),
            FlatValue::Null => Self::Null,
        }
    }
}

/// Flat attribute mapping for a single business.
///
/// No value is itself a mapping; nested entries were expanded into
/// `parent_child` keys by [`flatten_attributes`].
///
/// # Examples
/// ```
/// use dinewise_core::{AttributeValue, FlatValue, flatten_attributes};
///
/// let attributes = flatten_attributes([
///     ("GoodForKids".to_owned(), AttributeValue::Text("True".to_owned())),
///     (
///         "BusinessParking".to_owned(),
///         AttributeValue::Text("{'garage': False, 'street': True}".to_owned()),
///     ),
/// ]);
///
/// assert_eq!(attributes.get("GoodForKids"), Some(&FlatValue::Bool(true)));
/// assert_eq!(attributes.get("BusinessParking_street"), Some(&FlatValue::Bool(true)));
/// assert!(attributes.get("BusinessParking").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    entries: BTreeMap<String, FlatValue>,
}

impl Attributes {
    /// Create an empty attribute mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Look up a value by exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FlatValue> {
        self.entries.get(key)
    }

    /// Number of flattened entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Report whether no attributes are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlatValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Report whether some key containing `keyword` maps to boolean `true`.
    ///
    /// Key matching ignores case; `keyword` is expected to be lowercase
    /// already.
    #[must_use]
    pub fn has_true_key_containing(&self, keyword: &str) -> bool {
        self.entries
            .iter()
            .any(|(key, value)| value.is_true() && key.to_lowercase().contains(keyword))
    }

    fn insert(&mut self, key: String, value: AttributeValue) {
        let flat = match value {
            AttributeValue::Map(entries) => {
                for (child, nested) in entries {
                    self.insert(format!("{key}_{child}"), nested);
                }
                return;
            }
            AttributeValue::Bool(flag) => FlatValue::Bool(flag),
            AttributeValue::Number(number) => FlatValue::Number(number),
            AttributeValue::Text(text) => FlatValue::Text(text),
            AttributeValue::List(items) => FlatValue::List(items),
            AttributeValue::Null => FlatValue::Null,
        };
        self.entries.insert(key, flat);
    }
}

impl IntoIterator for Attributes {
    type Item = (String, FlatValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FlatValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Flatten a raw attribute mapping.
///
/// Text values are parsed as literals; text that does not parse is kept
/// verbatim. Mapping values, whether parsed from text or supplied directly,
/// are expanded into `{key}_{child}` entries. Later entries overwrite earlier
/// ones on key collision, in input order.
pub fn flatten_attributes<I>(raw: I) -> Attributes
where
    I: IntoIterator<Item = (String, AttributeValue)>,
{
    let mut attributes = Attributes::new();
    for (key, value) in raw {
        match value {
            AttributeValue::Text(text) => match parse_literal(&text) {
                Ok(parsed) => attributes.insert(key, parsed),
                Err(err) => {
                    trace!("keeping attribute {key} as text: {err}");
                    attributes.insert(key, AttributeValue::Text(text));
                }
            },
            other => attributes.insert(key, other),
        }
    }
    attributes
}

/// Parse and flatten a whole attributes cell from the dataset.
///
/// A blank cell or a literal `None` yields an empty mapping.
///
/// # Errors
/// Returns [`LiteralError`] when the cell is not a well-formed literal, or
/// [`LiteralError::NotAMapping`] when it parses to something other than a
/// mapping.
pub fn parse_attribute_cell(cell: &str) -> Result<Attributes, LiteralError> {
    if cell.trim().is_empty() {
        return Ok(Attributes::new());
    }
    match parse_literal(cell)? {
        AttributeValue::Map(entries) => Ok(flatten_attributes(entries)),
        AttributeValue::Null => Ok(Attributes::new()),
        other => Err(LiteralError::NotAMapping { kind: other.kind() }),
    }
}
