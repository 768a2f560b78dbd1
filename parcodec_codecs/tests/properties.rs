//! Round-trip and determinism laws over arbitrary buffers.
use parcodec_codecs::{deflate, inflate, Method};
use proptest::prelude::*;

fn any_method() -> impl Strategy<Value = Method> {
    prop::sample::select(Method::ALL.to_vec())
}

/// Buffers drawn from a small alphabet so the codecs find real matches.
fn low_entropy_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(b"abc \n".to_vec()), 0..16_384)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip_arbitrary_bytes(m in any_method(), data in prop::collection::vec(any::<u8>(), 0..8192)) {
        let compressed = deflate(m.name(), &data).unwrap();
        prop_assert_eq!(inflate(m.name(), &compressed).unwrap(), data);
    }

    #[test]
    fn roundtrip_low_entropy_bytes(m in any_method(), data in low_entropy_bytes()) {
        let compressed = deflate(m.name(), &data).unwrap();
        prop_assert_eq!(inflate(m.name(), &compressed).unwrap(), data);
    }

    #[test]
    fn deflate_is_deterministic(m in any_method(), data in low_entropy_bytes()) {
        prop_assert_eq!(deflate(m.name(), &data).unwrap(), deflate(m.name(), &data).unwrap());
    }

    #[test]
    fn unknown_tokens_always_rejected(token in "[A-Za-z_]{1,12}", data in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assume!(Method::ALL.iter().all(|m| m.name() != token));
        prop_assert!(deflate(&token, &data).unwrap_err().is_unsupported());
        prop_assert!(inflate(&token, &data).unwrap_err().is_unsupported());
    }
}
