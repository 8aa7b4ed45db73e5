use core::marker::PhantomData;

use serde_core::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{SeqAccess, Visitor},
    ser::SerializeSeq,
};

use crate::HybridVec;

impl<T: Serialize, const N: usize> Serialize for HybridVec<T, N> {
    /// Serialize a `HybridVec` as a sequence.
    ///
    /// The serialization format is identical whether the elements are stored
    /// inline or in the overflow buffer.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

impl<'de, T: Deserialize<'de>, const N: usize> Deserialize<'de> for HybridVec<T, N> {
    /// Deserialize a `HybridVec` from a sequence.
    ///
    /// Elements are appended one at a time; a sequence longer than the
    /// inline capacity `N` ends up in the overflow buffer through the usual
    /// growth transitions.
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct HybridVecVisitor<T, const N: usize> {
            _marker: PhantomData<T>,
        }

        impl<'de, T: Deserialize<'de>, const N: usize> Visitor<'de> for HybridVecVisitor<T, N> {
            type Value = HybridVec<T, N>;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut vec = HybridVec::new();

                while let Some(element) = seq.next_element()? {
                    vec.push(element);
                }

                Ok(vec)
            }
        }

        deserializer.deserialize_seq(HybridVecVisitor {
            _marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::{HybridVec, hybridvec};

    #[test]
    fn inline_json_round_trip() {
        let v: HybridVec<_, 5> = hybridvec![1, 2, 3];
        let s = serde_json::to_string(&v).unwrap();
        assert_eq!(s, "[1,2,3]");
        let r: HybridVec<i32, 5> = serde_json::from_str(&s).unwrap();
        assert!(r.is_inline());
        assert_eq!(r, [1, 2, 3]);
    }

    #[test]
    fn heap_json_round_trip() {
        let v: HybridVec<_, 2> = hybridvec![1, 2, 3, 4];
        let s = serde_json::to_string(&v).unwrap();
        let r: HybridVec<i32, 2> = serde_json::from_str(&s).unwrap();
        assert!(!r.is_inline());
        assert_eq!(r, v);
    }
}
