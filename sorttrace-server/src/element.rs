//! JSON numbers as sortable elements.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A numeric array element from the request body.
///
/// Integers stay integers on the way back out (`newValue: 42`, not `42.0`).
/// Integers and floats compare by exact numeric value. JSON cannot carry NaN,
/// so every pair of decoded elements is ordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Element {
    Int(i64),
    Float(f64),
}

impl PartialEq for Element {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Element {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Element::Int(a), Element::Int(b)) => Some(a.cmp(&b)),
            (Element::Float(a), Element::Float(b)) => a.partial_cmp(&b),
            (Element::Int(a), Element::Float(b)) => cmp_int_float(a, b),
            (Element::Float(a), Element::Int(b)) => cmp_int_float(b, a).map(Ordering::reverse),
        }
    }
}

/// Exact ordering of an integer against a float.
///
/// Casting the integer to `f64` rounds above 2^53, which would make distinct
/// integers equal to the same float. Instead split the float into its integral
/// part, compare that as an integer, then let the fraction break ties.
fn cmp_int_float(int: i64, float: f64) -> Option<Ordering> {
    // 2^63: the first float above every i64.
    const I64_END: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return None;
    }
    if float >= I64_END {
        return Some(Ordering::Less);
    }
    if float < -I64_END {
        return Some(Ordering::Greater);
    }
    let whole = float.trunc();
    // In range and integral, so the cast is exact.
    match int.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        ord => Some(ord),
    }
}
