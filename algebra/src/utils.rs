use crate::prelude::*;
use base64::alphabet::URL_SAFE;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

const BASE64_PADDING_CONFIG: GeneralPurposeConfig =
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent);

const BASE64_ENGINE: GeneralPurpose = GeneralPurpose::new(&URL_SAFE, BASE64_PADDING_CONFIG);

/// Convert an 8 byte array (little-endian) into a u64
pub fn u8_le_slice_to_u64(slice: &[u8]) -> u64 {
    let mut a = [0u8; 8];
    a.copy_from_slice(slice);
    u64::from_le_bytes(a)
}

/// Split little-endian bytes into u64 limbs, zero-padding the last limb
pub fn u64_limbs_from_bytes(slice: &[u8]) -> Vec<u64> {
    slice
        .chunks(8)
        .map(|chunk| {
            let mut limb = [0u8; 8];
            limb[..chunk.len()].copy_from_slice(chunk);
            u64::from_le_bytes(limb)
        })
        .collect()
}

/// Return `ceil(log2(n))`, with `ceil_log2(0) == ceil_log2(1) == 0`
pub fn ceil_log2(n: usize) -> u32 {
    if n <= 1 {
        0
    } else {
        usize::BITS - (n - 1).leading_zeros()
    }
}

/// Return `floor(log2(n))` for `n > 0`, and 0 otherwise
pub fn floor_log2(n: usize) -> u32 {
    if n == 0 {
        0
    } else {
        usize::BITS - 1 - n.leading_zeros()
    }
}

/// Convert the input into the base64 encoding
pub fn b64enc<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    BASE64_ENGINE.encode(input)
}

/// Reconstruct from the base64 encoding
pub fn b64dec<T: ?Sized + AsRef<[u8]>>(input: &T) -> Result<Vec<u8>> {
    BASE64_ENGINE
        .decode(input)
        .map_err(|_| AlgebraError::DeserializationError)
}

#[cfg(test)]
mod test {
    use ark_std::vec;

    #[test]
    fn u8_le_slice_to_u64() {
        let array = [0xA2_u8, 0x98, 0xE4, 0x22, 0x73, 0xC6, 0x01, 0xFA];
        let n = super::u8_le_slice_to_u64(&array);
        assert_eq!(0xFA01C67322E498A2, n);
    }

    #[test]
    fn u64_limbs_from_bytes() {
        let bytes = [1u8, 0, 0, 0, 0, 0, 0, 0, 2, 3];
        assert_eq!(super::u64_limbs_from_bytes(&bytes), vec![1u64, 0x0302]);
        assert!(super::u64_limbs_from_bytes(&[]).is_empty());
    }

    #[test]
    fn logarithms() {
        assert_eq!(super::ceil_log2(0), 0);
        assert_eq!(super::ceil_log2(1), 0);
        assert_eq!(super::ceil_log2(2), 1);
        assert_eq!(super::ceil_log2(5), 3);
        assert_eq!(super::ceil_log2(8), 3);
        assert_eq!(super::ceil_log2(9), 4);
        assert_eq!(super::floor_log2(1), 0);
        assert_eq!(super::floor_log2(9), 3);
        assert_eq!(super::floor_log2(1024), 10);
    }

    #[test]
    fn b64_roundtrip() {
        let data = vec![0u8, 255, 17, 4, 99];
        let encoded = super::b64enc(&data);
        assert_eq!(super::b64dec(&encoded).unwrap(), data);
        assert!(super::b64dec("*not base64*").is_err());
    }
}
