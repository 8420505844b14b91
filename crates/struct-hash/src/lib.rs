//! geojson-struct-hash - stable structural hashing of ordered field values.
//!
//! A DJB2-style fold over JSON-shaped values. Every value kind is prefixed
//! with its own salt constant, so `"1"`, `1` and `[1]` never fold the same
//! way, and sequences are folded in order.
//!
//! The hash is deterministic across runs and platforms: it never depends on
//! pointer identity, `RandomState` or map iteration order other than the
//! insertion order preserved by `serde_json`'s `preserve_order` feature.

use serde_json::{Number, Value};

const START_STATE: i64 = 5381;
const CONST_NULL: i64 = 982_452_847;
const CONST_TRUE: i64 = 982_453_247;
const CONST_FALSE: i64 = 982_454_243;
const CONST_ARRAY: i64 = 982_452_259;
const CONST_STRING: i64 = 982_453_601;
const CONST_OBJECT: i64 = 982_454_533;
const CONST_FLOAT: i64 = 982_455_007;
const CONST_ABSENT: i64 = 982_455_757;

#[inline]
fn update_num(state: i64, num: i64) -> i64 {
    (state << 5).wrapping_add(state).wrapping_add(num)
}

fn update_str(mut state: i64, s: &str) -> i64 {
    state = update_num(state, CONST_STRING);
    state = update_num(state, s.len() as i64);
    for b in s.bytes().rev() {
        state = update_num(state, b as i64);
    }
    state
}

fn update_f64(state: i64, f: f64) -> i64 {
    // -0.0 == 0.0, so both must fold identically.
    let bits = if f == 0.0 { 0 } else { f.to_bits() };
    update_num(update_num(state, CONST_FLOAT), bits as i64)
}

fn update_number(state: i64, n: &Number) -> i64 {
    if let Some(i) = n.as_i64() {
        update_num(state, i)
    } else if let Some(u) = n.as_u64() {
        update_num(state, u as i64)
    } else if let Some(f) = n.as_f64() {
        update_f64(state, f)
    } else {
        state
    }
}

fn update_json(mut state: i64, json: &Value) -> i64 {
    match json {
        Value::Null => update_num(state, CONST_NULL),
        Value::Bool(v) => update_num(state, if *v { CONST_TRUE } else { CONST_FALSE }),
        Value::Number(n) => update_number(state, n),
        Value::String(s) => update_str(state, s),
        Value::Array(arr) => {
            state = update_num(state, CONST_ARRAY);
            state = update_num(state, arr.len() as i64);
            for v in arr {
                state = update_json(state, v);
            }
            state
        }
        Value::Object(obj) => {
            state = update_num(state, CONST_OBJECT);
            state = update_num(state, obj.len() as i64);
            for (key, val) in obj {
                state = update_str(state, key);
                state = update_json(state, val);
            }
            state
        }
    }
}

#[inline]
fn truncate(state: i64) -> u32 {
    (state as u64 & 0xffff_ffff) as u32
}

/// Incremental structural hasher.
///
/// Fields are folded in the order they are written; callers that need
/// equal-implies-equal-hash must write exactly the fields their equality
/// compares, in the same order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructHasher {
    state: i64,
}

impl Default for StructHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl StructHasher {
    pub fn new() -> Self {
        Self { state: START_STATE }
    }

    fn write_i64(&mut self, num: i64) -> &mut Self {
        self.state = update_num(self.state, num);
        self
    }

    pub fn write_f64(&mut self, f: f64) -> &mut Self {
        self.state = update_f64(self.state, f);
        self
    }

    /// Marks an absent optional field. Distinct from an explicit `null`.
    pub fn write_absent(&mut self) -> &mut Self {
        self.write_i64(CONST_ABSENT)
    }

    pub fn write_str(&mut self, s: &str) -> &mut Self {
        self.state = update_str(self.state, s);
        self
    }

    /// Opens a sequence of `len` elements. Elements are written afterwards.
    pub fn write_seq_header(&mut self, len: usize) -> &mut Self {
        self.write_i64(CONST_ARRAY).write_i64(len as i64)
    }

    pub fn write_json(&mut self, json: &Value) -> &mut Self {
        self.state = update_json(self.state, json);
        self
    }

    pub fn finish(&self) -> u32 {
        truncate(self.state)
    }
}

/// Hashes an ordered list of field values.
pub fn hash_fields<'a, I>(fields: I) -> u32
where
    I: IntoIterator<Item = &'a Value>,
{
    let mut hasher = StructHasher::new();
    for field in fields {
        hasher.write_json(field);
    }
    hasher.finish()
}

pub fn hash_json(json: &Value) -> u32 {
    truncate(update_json(START_STATE, json))
}

pub fn hash_str(s: &str) -> u32 {
    truncate(update_str(START_STATE, s))
}
