use proptest::prelude::*;

use ecsig_crypto::{
    hash_message, run_workflow, sign_digest, verify_digest, verify_encoded, Curve, Digest, KeyPair,
    NonceMode, SeededEntropy, Signature, ENGINE,
};

const FIXTURE_KEY_DER: &str = "30770201010420270623da3768df6fc3c3439b8e0319621318b1dec6199052f49faefdd9d80548a00a06082a8648ce3d030107a1440342000462ded99b11da850eec19a908aa57effbec88541aa04da07d0a2cabf046b2502dd061eccc9860c7922ea758a2e8ac1e5f6d044d7a6af03060aa5dcb13cafc8a73";
const FIXTURE_DIGEST: &str = "1c5863cd55b5a4413fd59f054af57ba3c75c0698b3851d70f99b8de2d5c7338f";
const FIXTURE_SIGNATURE: &str = "6d56582490ff9a54b44df6bf9fa991c0432f2fd25f32760bf540b10049b50a048ca986d7e9f0ee7745bce735dcd0db951f21664f054e94b0a03d87046857a3ca";

fn keypair(seed: u64) -> KeyPair {
    KeyPair::generate(Curve::P256, &mut SeededEntropy::new(seed)).unwrap()
}

fn mode() -> impl Strategy<Value = NonceMode> {
    prop_oneof![Just(NonceMode::Hedged), Just(NonceMode::Deterministic)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn hashing_is_deterministic(msg in prop::collection::vec(any::<u8>(), 0..512)) {
        prop_assert_eq!(hash_message(&msg), hash_message(&msg));
        prop_assert_eq!(hash_message(&msg).to_hex().len(), 64);
    }

    #[test]
    fn signatures_verify_under_signing_key(
        seed in any::<u64>(),
        msg in prop::collection::vec(any::<u8>(), 0..256),
        mode in mode(),
    ) {
        let key = keypair(seed);
        let digest = hash_message(&msg);
        let sig = sign_digest(&key, &digest, &mut SeededEntropy::new(seed ^ 1), mode).unwrap();
        prop_assert_eq!(sig.to_bytes().len(), Curve::P256.signature_len());
        prop_assert!(verify_digest(key.public_key(), &digest, &sig));
    }

    #[test]
    fn signatures_fail_under_other_key(
        seed in any::<u64>(),
        msg in prop::collection::vec(any::<u8>(), 0..256),
    ) {
        let signer = keypair(seed);
        let other = keypair(seed.wrapping_add(1));
        prop_assume!(signer.public_key() != other.public_key());

        let digest = hash_message(&msg);
        let sig = sign_digest(&signer, &digest, &mut SeededEntropy::new(seed), NonceMode::Hedged).unwrap();
        prop_assert!(!verify_digest(other.public_key(), &digest, &sig));
    }

    #[test]
    fn flipping_a_signature_bit_breaks_it(seed in any::<u64>(), bit in 0usize..512) {
        let key = keypair(seed);
        let digest = hash_message(b"i love you");
        let sig = sign_digest(&key, &digest, &mut SeededEntropy::new(seed), NonceMode::Hedged).unwrap();

        let mut bytes = sig.to_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);
        let pk = key.public_key().to_sec1_bytes(true);
        prop_assert!(!verify_encoded(&pk, digest.as_ref(), &bytes));
    }

    #[test]
    fn flipping_a_digest_bit_breaks_it(seed in any::<u64>(), bit in 0usize..256) {
        let key = keypair(seed);
        let digest = hash_message(b"i love you");
        let sig = sign_digest(&key, &digest, &mut SeededEntropy::new(seed), NonceMode::Deterministic).unwrap();

        let mut bytes = *digest.as_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);
        prop_assert!(!verify_digest(key.public_key(), &Digest::new(bytes), &sig));
    }
}

#[test]
fn recorded_fixture_triple_verifies() {
    let key = KeyPair::from_sec1_der(&hex::decode(FIXTURE_KEY_DER).unwrap()).unwrap();
    let digest = Digest::from_hex(FIXTURE_DIGEST).unwrap();
    let sig = Signature::from_hex(FIXTURE_SIGNATURE).unwrap();

    assert_eq!(hash_message(b"i love you"), digest);
    assert!(verify_digest(key.public_key(), &digest, &sig));
    assert!(!verify_digest(key.public_key(), &hash_message(b"i love u"), &sig));
}

#[test]
fn end_to_end_with_os_entropy() {
    let transcript = run_workflow(&ENGINE, "i love you", &mut ecsig_crypto::OsEntropy).unwrap();
    assert!(transcript.verified);
    assert_eq!(transcript.digest, FIXTURE_DIGEST);
    assert_eq!(hex::decode(&transcript.signature).unwrap().len(), 64);
}
