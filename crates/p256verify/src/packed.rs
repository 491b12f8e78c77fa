//! Verification over the packed 160-byte precompile input.
//!
//! The input is encoded as follows:
//!
//! | signed message hash |  r  |  s  | public key x | public key y |
//! | :-----------------: | :-: | :-: | :----------: | :----------: |
//! |          32         | 32  | 32  |     32       |      32      |
use crate::{
    constants::{MESSAGE_HASH_LENGTH, PUBKEY_LENGTH, SIGNATURE_LENGTH},
    interface::VerifyResult,
    verifier::verify_bytes,
};

/// Length of a packed input.
pub const INPUT_LENGTH: usize = MESSAGE_HASH_LENGTH + SIGNATURE_LENGTH + PUBKEY_LENGTH;

/// A 32-byte word with the last byte set to one.
static SUCCESS_WORD: [u8; 32] = {
    let mut word = [0u8; 32];
    word[31] = 1;
    word
};

/// Verifies a packed `digest || r || s || x || y` input.
///
/// Any input that is not exactly [`INPUT_LENGTH`] bytes is an invalid signature.
pub fn verify_packed(input: &[u8]) -> VerifyResult {
    if input.len() != INPUT_LENGTH {
        return VerifyResult::InvalidSignature;
    }

    // msg signed (msg is already the hash of the signed payload)
    let msg = &input[..32];
    // r, s: signature
    let sig = &input[32..96];
    // x, y: public key
    let pk = &input[96..160];

    verify_bytes(msg, sig, pk).into()
}

/// Returns the precompile output for `result`: a word ending in `0x01` on
/// success, empty otherwise.
#[inline]
pub fn encode_output(result: VerifyResult) -> &'static [u8] {
    if result.is_success() {
        &SUCCESS_WORD
    } else {
        &[]
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rstest::rstest;

    #[rstest]
    // test vectors from https://github.com/daimo-eth/p256-verifier/tree/master/test-vectors
    #[case::ok_1("4cee90eb86eaa050036147a12d49004b6b9c72bd725d39d4785011fe190f0b4da73bd4903f0ce3b639bbbf6e8e80d16931ff4bcf5993d58468e8fb19086e8cac36dbcd03009df8c59286b162af3bd7fcc0450c9aa81be5d10d312af6c66b1d604aebd3099c618202fcfe16ae7770b0c49ab5eadf74b754204a3bb6060e44eff37618b065f9832de4ca6ca971a7a1adc826d0f7c00181a5fb2ddf79ae00b4e10e", VerifyResult::Success)]
    #[case::ok_2("3fec5769b5cf4e310a7d150508e82fb8e3eda1c2c94c61492d3bd8aea99e06c9e22466e928fdccef0de49e3503d2657d00494a00e764fd437bdafa05f5922b1fbbb77c6817ccf50748419477e843d5bac67e6a70e97dde5a57e0c983b777e1ad31a80482dadf89de6302b1988c82c29544c9c07bb910596158f6062517eb089a2f54c9a0f348752950094d3228d3b940258c75fe2a413cb70baa21dc2e352fc5", VerifyResult::Success)]
    #[case::ok_3("e775723953ead4a90411a02908fd1a629db584bc600664c609061f221ef6bf7c440066c8626b49daaa7bf2bcc0b74be4f7a1e3dcf0e869f1542fe821498cbf2de73ad398194129f635de4424a07ca715838aefe8fe69d1a391cfa70470795a80dd056866e6e1125aff94413921880c437c9e2570a28ced7267c8beef7e9b2d8d1547d76dfcf4bee592f5fefe10ddfb6aeb0991c5b9dbbee6ec80d11b17c0eb1a", VerifyResult::Success)]
    #[case::ok_4("b5a77e7a90aa14e0bf5f337f06f597148676424fae26e175c6e5621c34351955289f319789da424845c9eac935245fcddd805950e2f02506d09be7e411199556d262144475b1fa46ad85250728c600c53dfd10f8b3f4adf140e27241aec3c2da3a81046703fccf468b48b145f939efdbb96c3786db712b3113bb2488ef286cdcef8afe82d200a5bb36b5462166e8ce77f2d831a52ef2135b2af188110beaefb1", VerifyResult::Success)]
    #[case::ok_5("858b991cfd78f16537fe6d1f4afd10273384db08bdfc843562a22b0626766686f6aec8247599f40bfe01bec0e0ecf17b4319559022d4d9bf007fe929943004eb4866760dedf31b7c691f5ce665f8aae0bda895c23595c834fecc2390a5bcc203b04afcacbb4280713287a2d0c37e23f7513fab898f2c1fefa00ec09a924c335d9b629f1d4fb71901c3e59611afbfea354d101324e894c788d1c01f00b3c251b2", VerifyResult::Success)]
    #[case::fail_wrong_msg_1("3cee90eb86eaa050036147a12d49004b6b9c72bd725d39d4785011fe190f0b4da73bd4903f0ce3b639bbbf6e8e80d16931ff4bcf5993d58468e8fb19086e8cac36dbcd03009df8c59286b162af3bd7fcc0450c9aa81be5d10d312af6c66b1d604aebd3099c618202fcfe16ae7770b0c49ab5eadf74b754204a3bb6060e44eff37618b065f9832de4ca6ca971a7a1adc826d0f7c00181a5fb2ddf79ae00b4e10e", VerifyResult::InvalidSignature)]
    #[case::fail_wrong_msg_2("afec5769b5cf4e310a7d150508e82fb8e3eda1c2c94c61492d3bd8aea99e06c9e22466e928fdccef0de49e3503d2657d00494a00e764fd437bdafa05f5922b1fbbb77c6817ccf50748419477e843d5bac67e6a70e97dde5a57e0c983b777e1ad31a80482dadf89de6302b1988c82c29544c9c07bb910596158f6062517eb089a2f54c9a0f348752950094d3228d3b940258c75fe2a413cb70baa21dc2e352fc5", VerifyResult::InvalidSignature)]
    #[case::fail_wrong_msg_3("f775723953ead4a90411a02908fd1a629db584bc600664c609061f221ef6bf7c440066c8626b49daaa7bf2bcc0b74be4f7a1e3dcf0e869f1542fe821498cbf2de73ad398194129f635de4424a07ca715838aefe8fe69d1a391cfa70470795a80dd056866e6e1125aff94413921880c437c9e2570a28ced7267c8beef7e9b2d8d1547d76dfcf4bee592f5fefe10ddfb6aeb0991c5b9dbbee6ec80d11b17c0eb1a", VerifyResult::InvalidSignature)]
    #[case::fail_wrong_msg_4("c5a77e7a90aa14e0bf5f337f06f597148676424fae26e175c6e5621c34351955289f319789da424845c9eac935245fcddd805950e2f02506d09be7e411199556d262144475b1fa46ad85250728c600c53dfd10f8b3f4adf140e27241aec3c2da3a81046703fccf468b48b145f939efdbb96c3786db712b3113bb2488ef286cdcef8afe82d200a5bb36b5462166e8ce77f2d831a52ef2135b2af188110beaefb1", VerifyResult::InvalidSignature)]
    #[case::fail_wrong_msg_5("958b991cfd78f16537fe6d1f4afd10273384db08bdfc843562a22b0626766686f6aec8247599f40bfe01bec0e0ecf17b4319559022d4d9bf007fe929943004eb4866760dedf31b7c691f5ce665f8aae0bda895c23595c834fecc2390a5bcc203b04afcacbb4280713287a2d0c37e23f7513fab898f2c1fefa00ec09a924c335d9b629f1d4fb71901c3e59611afbfea354d101324e894c788d1c01f00b3c251b2", VerifyResult::InvalidSignature)]
    #[case::fail_short_input_1(
        "4cee90eb86eaa050036147a12d49004b6a",
        VerifyResult::InvalidSignature
    )]
    #[case::fail_short_input_2("4cee90eb86eaa050036147a12d49004b6a958b991cfd78f16537fe6d1f4afd10273384db08bdfc843562a22b0626766686f6aec8247599f40bfe01bec0e0ecf17b4319559022d4d9bf007fe929943004eb4866760dedf319", VerifyResult::InvalidSignature)]
    #[case::fail_truncated_pubkey("b5a77e7a90aa14e0bf5f337f06f597148676424fae26e175c6e5621c34351955289f319789da424845c9eac935245fcddd805950e2f02506d09be7e411199556d262144475b1fa46ad85250728c600c53dfd10f8b3f4adf140e27241aec3c2daaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaef8afe82d200a5bb36b5462166e8ce77f2d831a52ef2135b2af188110beaefb1", VerifyResult::InvalidSignature)]
    #[case::fail_long_input("4cee90eb86eaa050036147a12d49004b6b9c72bd725d39d4785011fe190f0b4da73bd4903f0ce3b639bbbf6e8e80d16931ff4bcf5993d58468e8fb19086e8cac36dbcd03009df8c59286b162af3bd7fcc0450c9aa81be5d10d312af6c66b1d604aebd3099c618202fcfe16ae7770b0c49ab5eadf74b754204a3bb6060e44eff37618b065f9832de4ca6ca971a7a1adc826d0f7c00181a5fb2ddf79ae00b4e10e00", VerifyResult::InvalidSignature)]
    #[case::fail_invalid_sig("4cee90eb86eaa050036147a12d49004b6b9c72bd725d39d4785011fe190f0b4dffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff4aebd3099c618202fcfe16ae7770b0c49ab5eadf74b754204a3bb6060e44eff37618b065f9832de4ca6ca971a7a1adc826d0f7c00181a5fb2ddf79ae00b4e10e", VerifyResult::InvalidSignature)]
    #[case::fail_invalid_pubkey("4cee90eb86eaa050036147a12d49004b6b9c72bd725d39d4785011fe190f0b4da73bd4903f0ce3b639bbbf6e8e80d16931ff4bcf5993d58468e8fb19086e8cac36dbcd03009df8c59286b162af3bd7fcc0450c9aa81be5d10d312af6c66b1d6000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000000", VerifyResult::InvalidKeys)]
    // x(R) in [n, p): accepted only after reducing x(R) modulo n
    #[case::ok_rx_above_order("000000000000000000000000000000000000000000000000000000000000000100000000000000000000000000000000000000000000000000000000000000030000000000000000000000000000000000000000000000000000000000000001ab835d9808d0b3e93199f38d0c1c9a5ab8c9bf62516ffbf37b037ea17f2fbd41e99c2933ec5b6de96409c9c5ebe6a33842583f16805b96074e9a977b125d29cd", VerifyResult::Success)]
    #[case::fail_rx_above_order_unreduced_r("000000000000000000000000000000000000000000000000000000000000000100000000000000000000000000000000000000000000000000000000000000040000000000000000000000000000000000000000000000000000000000000001ab835d9808d0b3e93199f38d0c1c9a5ab8c9bf62516ffbf37b037ea17f2fbd41e99c2933ec5b6de96409c9c5ebe6a33842583f16805b96074e9a977b125d29cd", VerifyResult::InvalidSignature)]
    // s = n - 1 with Q = G
    #[case::ok_s_max("830d84e672fcb08275adc7fcfb4ae53bfc5d90cb2f25834f4dae81c6b4fc8bd77cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc6325506b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c2964fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5", VerifyResult::Success)]
    #[case::fail_r_max("830d84e672fcb08275adc7fcfb4ae53bfc5d90cb2f25834f4dae81c6b4fc8bd7ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc63255000000000000000000000000000000000000000000000000000000000000000016b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c2964fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5", VerifyResult::InvalidSignature)]
    // Q = -G
    #[case::ok_negated_generator_key("af2bdbe1aa9b6ec1e2ade1d694f41fc71a831d0268e9891562113d8a62add1bf7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978991cb0640ecc0fa22c2dd4e9c81f82818b7056e6cc07863257dfdfa88bd52ecc6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296b01cbd1c01e58065711814b583f061e9d431cca994cea1313449bf97c840ae0a", VerifyResult::Success)]
    fn test_sig_verify(#[case] input: &str, #[case] expected: VerifyResult) {
        let input = hex::decode(input).unwrap();
        assert_eq!(verify_packed(&input), expected);
    }

    #[rstest]
    #[case(VerifyResult::Success, &SUCCESS_WORD)]
    #[case(VerifyResult::InvalidSignature, &[])]
    #[case(VerifyResult::InvalidKeys, &[])]
    fn test_output_encoding(#[case] result: VerifyResult, #[case] expected: &[u8]) {
        assert_eq!(encode_output(result), expected);
    }

    #[test]
    fn test_success_word() {
        assert_eq!(SUCCESS_WORD[..31], [0u8; 31]);
        assert_eq!(SUCCESS_WORD[31], 1);
        assert_eq!(INPUT_LENGTH, 160);
    }
}
