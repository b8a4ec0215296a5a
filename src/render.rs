// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Literal rendering for materialized pair runs.
//!
//! The conformance script this crate grew out of prints every result as a
//! list of tuples, e.g. `[(5, 1), (6, 2), (7, 3)]`. Snapshots of that output are
//! the ground truth, so the rendering has to be exact: integers bare, strings
//! quoted (single quotes unless the text itself holds one), floats with a
//! fractional part or a signed two-digit exponent, booleans capitalized.
//!
//! `Repr` is the hook. Anything that can be written in that literal notation
//! implements it; pairs, tuples and slices compose from their parts.

use crate::types::IndexedPair;
use serde::Serialize;
use std::fmt::{self, Write};

/// Values with a literal (list/tuple) notation.
pub trait Repr {
    fn repr(&self, out: &mut String);

    fn to_repr(&self) -> String {
        let mut out = String::new();
        self.repr(&mut out);
        out
    }
}

macro_rules! repr_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Repr for $ty {
                fn repr(&self, out: &mut String) {
                    // Writing into a String cannot fail.
                    let _ = write!(out, "{}", self);
                }
            }
        )*
    };
}

repr_display!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Repr for bool {
    fn repr(&self, out: &mut String) {
        out.push_str(if *self { "True" } else { "False" });
    }
}

impl Repr for f64 {
    fn repr(&self, out: &mut String) {
        if self.is_nan() {
            out.push_str("nan");
        } else if self.is_infinite() {
            out.push_str(if *self > 0.0 { "inf" } else { "-inf" });
        } else {
            let exponent = decimal_exponent(*self);
            if !(-4..16).contains(&exponent) {
                let sci = format!("{:e}", self);
                let mantissa = sci.split_once('e').map_or(sci.as_str(), |(m, _)| m);
                let sign = if exponent < 0 { '-' } else { '+' };
                let _ = write!(out, "{}e{}{:02}", mantissa, sign, exponent.unsigned_abs());
            } else if self.fract() == 0.0 {
                let _ = write!(out, "{:.1}", self);
            } else {
                let _ = write!(out, "{}", self);
            }
        }
    }
}

/// Power of ten of the leading digit in the shortest round-trip form.
fn decimal_exponent(value: f64) -> i32 {
    let sci = format!("{:e}", value);
    sci.split_once('e')
        .and_then(|(_, exp)| exp.parse().ok())
        .unwrap_or(0)
}

impl Repr for f32 {
    fn repr(&self, out: &mut String) {
        f64::from(*self).repr(out);
    }
}

impl Repr for str {
    fn repr(&self, out: &mut String) {
        let quote = if self.contains('\'') && !self.contains('"') {
            '"'
        } else {
            '\''
        };
        out.push(quote);
        for c in self.chars() {
            match c {
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                '\t' => out.push_str("\\t"),
                c if c == quote => {
                    out.push('\\');
                    out.push(c);
                }
                c if c.is_control() && (c as u32) < 0x100 => {
                    let _ = write!(out, "\\x{:02x}", c as u32);
                }
                c => out.push(c),
            }
        }
        out.push(quote);
    }
}

impl Repr for String {
    fn repr(&self, out: &mut String) {
        self.as_str().repr(out);
    }
}

impl Repr for char {
    fn repr(&self, out: &mut String) {
        let mut buf = [0u8; 4];
        (*self.encode_utf8(&mut buf)).repr(out);
    }
}

impl<T: Repr + ?Sized> Repr for &T {
    fn repr(&self, out: &mut String) {
        (**self).repr(out);
    }
}

impl<T: Repr> Repr for Option<T> {
    fn repr(&self, out: &mut String) {
        match self {
            Some(value) => value.repr(out),
            None => out.push_str("None"),
        }
    }
}

impl<A: Repr, B: Repr> Repr for (A, B) {
    fn repr(&self, out: &mut String) {
        out.push('(');
        self.0.repr(out);
        out.push_str(", ");
        self.1.repr(out);
        out.push(')');
    }
}

impl<T: Repr> Repr for IndexedPair<T> {
    fn repr(&self, out: &mut String) {
        out.push('(');
        self.index.repr(out);
        out.push_str(", ");
        self.value.repr(out);
        out.push(')');
    }
}

impl<T: Repr> Repr for [T] {
    fn repr(&self, out: &mut String) {
        out.push('[');
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            item.repr(out);
        }
        out.push(']');
    }
}

impl<T: Repr> Repr for Vec<T> {
    fn repr(&self, out: &mut String) {
        self.as_slice().repr(out);
    }
}

/// Render a run of pairs as a list of tuples: `[(0, 1), (1, 2)]`.
pub fn render_pairs<T: Repr>(pairs: &[IndexedPair<T>]) -> String {
    pairs.to_repr()
}

/// Render a run of pairs as JSON: `[[0,1],[1,2]]`.
pub fn render_json<T: Serialize>(pairs: &[IndexedPair<T>]) -> Result<String, serde_json::Error> {
    serde_json::to_string(pairs)
}

/// Adapter so any `Repr` value can go through `{}`.
pub struct Literal<'a, T: ?Sized>(pub &'a T);

impl<T: Repr + ?Sized> fmt::Display for Literal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_repr())
    }
}
