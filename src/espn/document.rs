//! Tree-shaped view over a fetched ESPN payload.
//!
//! The selection and scoring rules in [`crate::espn::compute`] only ever talk to
//! [`Document`], so the JSON library behind the fetcher can change without
//! touching them. Absent fields and wrong types fall back to the caller's
//! default instead of failing.

use serde_json::Value;

/// Path-addressable document node.
pub trait Document {
    /// Child of an object node. `None` when absent or when `self` is not an object;
    /// an explicit `null` is returned as a node.
    fn field(&self, key: &str) -> Option<&Self>;

    fn is_null_node(&self) -> bool;

    fn is_object_node(&self) -> bool;

    /// Integer value, accepting integral floats.
    fn as_int(&self) -> Option<i64>;

    /// Numeric value. Strings and booleans are not numbers.
    fn as_float(&self) -> Option<f64>;

    fn as_text(&self) -> Option<&str>;

    fn as_flag(&self) -> Option<bool>;

    /// Array elements; empty for anything that is not an array.
    fn elements(&self) -> impl Iterator<Item = &Self>;

    /// Object members; empty for anything that is not an object.
    fn entries(&self) -> impl Iterator<Item = (&str, &Self)>;

    fn path(&self, keys: &[&str]) -> Option<&Self> {
        keys.iter().try_fold(self, |node, key| node.field(key))
    }

    fn int_or(&self, keys: &[&str], default: i64) -> i64 {
        self.path(keys).and_then(|n| n.as_int()).unwrap_or(default)
    }

    fn float_or(&self, keys: &[&str], default: f64) -> f64 {
        self.path(keys).and_then(|n| n.as_float()).unwrap_or(default)
    }

    fn text_or<'a>(&'a self, keys: &[&str], default: &'a str) -> &'a str {
        self.path(keys).and_then(|n| n.as_text()).unwrap_or(default)
    }

    fn flag_or(&self, keys: &[&str], default: bool) -> bool {
        self.path(keys).and_then(|n| n.as_flag()).unwrap_or(default)
    }

    /// Elements of the array at `keys`, empty when missing.
    fn elements_at(&self, keys: &[&str]) -> impl Iterator<Item = &Self> {
        self.path(keys).into_iter().flat_map(|n| n.elements())
    }

    /// Present and not `null`.
    fn has_non_null(&self, key: &str) -> bool {
        self.field(key).is_some_and(|n| !n.is_null_node())
    }
}

impl Document for Value {
    fn field(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    fn is_null_node(&self) -> bool {
        self.is_null()
    }

    fn is_object_node(&self) -> bool {
        self.is_object()
    }

    fn as_int(&self) -> Option<i64> {
        let Value::Number(n) = self else {
            return None;
        };
        n.as_i64()
            .or_else(|| n.as_u64().and_then(|u| i64::try_from(u).ok()))
            .or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                    .map(|f| f as i64)
            })
    }

    fn as_float(&self) -> Option<f64> {
        self.as_f64()
    }

    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }

    fn as_flag(&self) -> Option<bool> {
        self.as_bool()
    }

    fn elements(&self) -> impl Iterator<Item = &Self> {
        self.as_array().into_iter().flatten()
    }

    fn entries(&self) -> impl Iterator<Item = (&str, &Self)> {
        self.as_object()
            .into_iter()
            .flat_map(|m| m.iter().map(|(k, v)| (k.as_str(), v)))
    }
}
