//! Serde support for the sparse container types.
//!
//! The boundary format is minimal: a span is `(start, end)`, a data range
//! is `(offset, values)`, and a sparse vector is `(len, ranges)`. On
//! deserialization the range list is re-checked against the container
//! invariants, so a reloaded vector is canonical or the load fails.

use std::fmt;
use std::marker::PhantomData;

use serde::{
    de::{self, SeqAccess, Visitor},
    ser::SerializeTuple,
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::data_range::DataRange;
use crate::span::Span;
use crate::sparse_vec::SparseVector;

impl Serialize for Span {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&self.start())?;
        t.serialize_element(&self.end())?;
        t.end()
    }
}

impl<'de> Deserialize<'de> for Span {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SpanVisitor;

        impl<'de> Visitor<'de> for SpanVisitor {
            type Value = Span;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a (start, end) index pair")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Span, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let start = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("missing span start"))?;
                let end = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("missing span end"))?;
                Ok(Span::new(start, end))
            }
        }

        deserializer.deserialize_tuple(2, SpanVisitor)
    }
}

impl<T: Serialize> Serialize for DataRange<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&self.start())?;
        t.serialize_element(self.values())?;
        t.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DataRange<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RangeVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for RangeVisitor<T> {
            type Value = DataRange<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "an (offset, values) pair")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<DataRange<T>, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let offset = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("missing range offset"))?;
                let values: Vec<T> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("missing range values"))?;
                Ok(DataRange::from_vec(offset, values))
            }
        }

        deserializer.deserialize_tuple(2, RangeVisitor(PhantomData))
    }
}

impl<T: Serialize> Serialize for SparseVector<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut t = serializer.serialize_tuple(2)?;
        t.serialize_element(&self.len())?;
        t.serialize_element(self.range_list())?;
        t.end()
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SparseVector<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct VectorVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for VectorVisitor<T> {
            type Value = SparseVector<T>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                write!(formatter, "a (len, ranges) pair")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<SparseVector<T>, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let len: usize = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("missing nominal length"))?;
                let ranges: Vec<DataRange<T>> = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("missing range list"))?;
                let sv = SparseVector::from_raw_parts(len, ranges);
                if !sv.is_valid() {
                    return Err(de::Error::custom(
                        "range list is not sorted, separated and contained",
                    ));
                }
                Ok(sv)
            }
        }

        deserializer.deserialize_tuple(2, VectorVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let mut sv: SparseVector<i32> = SparseVector::with_len(10);
        sv.add_range(2, &[1, 2]);
        sv.add_range(6, &[3]);
        let json = serde_json::to_string(&sv).unwrap();
        assert_eq!(json, "[10,[[2,[1,2]],[6,[3]]]]");
        let back: SparseVector<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sv);
        assert!(back.is_valid());
    }

    #[test]
    fn test_rejects_touching_ranges() {
        let json = "[10,[[2,[1,2]],[4,[3]]]]";
        let err = serde_json::from_str::<SparseVector<i32>>(json);
        assert!(err.is_err());
    }

    #[test]
    fn test_rejects_overflowing_length() {
        let json = "[3,[[2,[1,2]]]]";
        let err = serde_json::from_str::<SparseVector<i32>>(json);
        assert!(err.is_err());
    }

    #[test]
    fn test_span_roundtrip() {
        let s = Span::new(3, 8);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[3,8]");
        let back: Span = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
