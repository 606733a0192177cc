use crate::prelude::*;

/// Byte conversion used by the serde implementations of scalars and group elements.
pub trait FromToBytes: Sized {
    /// Convert to bytes.
    fn zkt_to_bytes(&self) -> Vec<u8>;
    /// Reconstruct from bytes.
    fn zkt_from_bytes(bytes: &[u8]) -> Result<Self>;
}

/// Implement [`FromToBytes`] for a scalar through its canonical byte encoding.
#[macro_export]
macro_rules! to_from_bytes_scalar {
    ($t:ident) => {
        impl $crate::serialization::FromToBytes for $t {
            fn zkt_to_bytes(&self) -> $crate::prelude::Vec<u8> {
                $crate::traits::Scalar::to_bytes(self)
            }
            fn zkt_from_bytes(
                bytes: &[u8],
            ) -> core::result::Result<$t, $crate::errors::AlgebraError> {
                <$t as $crate::traits::Scalar>::from_bytes(bytes)
            }
        }
    };
}

/// Implement [`FromToBytes`] for a group element through its compressed encoding.
#[macro_export]
macro_rules! to_from_bytes_group {
    ($g:ident) => {
        impl $crate::serialization::FromToBytes for $g {
            fn zkt_to_bytes(&self) -> $crate::prelude::Vec<u8> {
                $crate::traits::Group::to_compressed_bytes(self)
            }
            fn zkt_from_bytes(
                bytes: &[u8],
            ) -> core::result::Result<$g, $crate::errors::AlgebraError> {
                <$g as $crate::traits::Group>::from_compressed_bytes(bytes)
            }
        }
    };
}

/// Implement serde for a type with [`FromToBytes`]: base64 strings for
/// human-readable formats, raw bytes otherwise.
#[macro_export]
macro_rules! serialize_deserialize {
    ($t:ident) => {
        impl serde::Serialize for $t {
            fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                let bytes = $crate::serialization::FromToBytes::zkt_to_bytes(self);
                if serializer.is_human_readable() {
                    serializer.serialize_str(&$crate::utils::b64enc(&bytes))
                } else {
                    serializer.serialize_bytes(&bytes)
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> core::result::Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bytes = if deserializer.is_human_readable() {
                    deserializer.deserialize_str($crate::serialization::obj_serde::BytesVisitor)?
                } else {
                    deserializer.deserialize_bytes($crate::serialization::obj_serde::BytesVisitor)?
                };
                <$t as $crate::serialization::FromToBytes>::zkt_from_bytes(bytes.as_slice())
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Visitors shared by the serde implementations.
pub mod obj_serde {
    use crate::prelude::*;
    use serde::de::{SeqAccess, Visitor};

    /// Accept base64 strings, byte buffers and byte sequences.
    pub struct BytesVisitor;

    impl<'de> Visitor<'de> for BytesVisitor {
        type Value = Vec<u8>;

        fn expecting(&self, formatter: &mut Formatter<'_>) -> core::fmt::Result {
            formatter.write_str("a valid encoding of a field or group element")
        }

        fn visit_seq<V>(self, mut seq: V) -> core::result::Result<Vec<u8>, V::Error>
        where
            V: SeqAccess<'de>,
        {
            let mut vec: Vec<u8> = vec![];
            while let Some(x) = seq.next_element()? {
                vec.push(x);
            }
            Ok(vec)
        }

        fn visit_bytes<E>(self, v: &[u8]) -> core::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(v.to_vec())
        }

        fn visit_str<E>(self, v: &str) -> core::result::Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            b64dec(v).map_err(serde::de::Error::custom)
        }
    }
}
