// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data points and per-point accessors.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use core::fmt;

use crate::symbol::Symbol;
use crate::value::Value;

/// A property that is either a constant or a function of the data point.
///
/// Functions are evaluated lazily, once per point per render, with the full datum.
pub enum Accessor<T> {
    /// A constant value.
    Const(T),
    /// A value computed from the datum.
    Func(Arc<dyn Fn(&Datum) -> T + Send + Sync>),
}

impl<T> Accessor<T> {
    /// Wraps a closure.
    pub fn func(f: impl Fn(&Datum) -> T + Send + Sync + 'static) -> Self {
        Self::Func(Arc::new(f))
    }

    /// Returns the constant, or `None` for a function.
    pub fn as_const(&self) -> Option<&T> {
        match self {
            Self::Const(v) => Some(v),
            Self::Func(_) => None,
        }
    }

    /// Returns `true` if this accessor is a function of the datum.
    pub fn is_func(&self) -> bool {
        matches!(self, Self::Func(_))
    }
}

impl<T: Clone> Accessor<T> {
    /// Evaluates this accessor for `datum`.
    pub fn eval(&self, datum: &Datum) -> T {
        match self {
            Self::Const(v) => v.clone(),
            Self::Func(f) => f(datum),
        }
    }
}

impl<T: Clone> Clone for Accessor<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Const(v) => Self::Const(v.clone()),
            Self::Func(f) => Self::Func(Arc::clone(f)),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Const(v) => f.debug_tuple("Const").field(v).finish(),
            Self::Func(_) => f.write_str("Func(..)"),
        }
    }
}

impl<T> From<T> for Accessor<T> {
    fn from(value: T) -> Self {
        Self::Const(value)
    }
}

/// One data record.
///
/// `x` and `y` are required. The typed optional fields drive sizing, symbol choice and
/// labelling; everything else lives in [`Datum::fields`] and may override point style
/// (`fill`, `opacity`, `stroke`, `strokeWidth`, ...).
#[derive(Clone, Debug)]
pub struct Datum {
    /// The x value.
    pub x: Value,
    /// The y value.
    pub y: Value,
    /// Optional third dimension, commonly used as the bubble property.
    pub z: Option<f64>,
    /// Per-point size override.
    pub size: Option<Accessor<f64>>,
    /// Per-point symbol override.
    pub symbol: Option<Accessor<Symbol>>,
    /// Label text.
    pub label: Option<String>,
    /// Series/record name. Never used as a style property.
    pub name: Option<String>,
    /// Additional fields, in key order.
    pub fields: BTreeMap<String, Value>,
}

impl Datum {
    /// Creates a datum with the given coordinates and no other fields.
    pub fn new(x: impl Into<Value>, y: impl Into<Value>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: None,
            size: None,
            symbol: None,
            label: None,
            name: None,
            fields: BTreeMap::new(),
        }
    }

    /// Sets the `z` value.
    pub fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Sets the per-point size.
    pub fn with_size(mut self, size: impl Into<Accessor<f64>>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Sets the per-point symbol.
    pub fn with_symbol(mut self, symbol: impl Into<Accessor<Symbol>>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Sets the label text.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the record name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets an additional field.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Looks up a field by key, including the built-in `x`, `y` and `z` fields.
    ///
    /// The built-in keys shadow entries of the same name in [`Datum::fields`].
    pub fn get(&self, key: &str) -> Option<Value> {
        match key {
            "x" => Some(self.x.clone()),
            "y" => Some(self.y.clone()),
            "z" => self.z.map(Value::Number),
            "label" => self.label.clone().map(Value::Text),
            "name" => self.name.clone().map(Value::Text),
            _ => self.fields.get(key).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn builtin_keys_shadow_fields() {
        let d = Datum::new(1.0, 2.0).with_z(3.0).with_field("z", 9.0);
        assert_eq!(d.get("z"), Some(Value::Number(3.0)));
        assert_eq!(d.get("x"), Some(Value::Number(1.0)));
        assert_eq!(d.get("missing"), None);
    }

    #[test]
    fn accessors_evaluate_against_the_datum() {
        let size = Accessor::func(|d: &Datum| d.y.as_f64().unwrap_or(0.0) * 2.0);
        let d = Datum::new(0.0, 4.5);
        assert_eq!(size.eval(&d), 9.0);
        assert!(size.is_func());
        assert_eq!(Accessor::Const(3.0).as_const(), Some(&3.0));
    }
}
