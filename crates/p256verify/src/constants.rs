//! Constants for secp256r1 (P-256) operations.
//!
//! Curve parameters follow [NIST SP 800-186] § 3.2.1.3. Multi-limb values are
//! stored as four little-endian 64-bit limbs.
//!
//! [NIST SP 800-186]: https://csrc.nist.gov/publications/detail/sp/800-186/final

/// Width in bytes of a field element or scalar.
pub const FIELD_BYTES_LENGTH: usize = 32;

/// Length of the message hash (32 bytes).
pub const MESSAGE_HASH_LENGTH: usize = FIELD_BYTES_LENGTH;

/// Length of the signature (64 bytes: r || s).
pub const SIGNATURE_LENGTH: usize = 2 * FIELD_BYTES_LENGTH;

/// Length of the untagged uncompressed public key (64 bytes: x || y).
pub const PUBKEY_LENGTH: usize = 2 * FIELD_BYTES_LENGTH;

/// Base field modulus `p = 2^256 - 2^224 + 2^192 + 2^96 - 1`.
pub const FIELD_MODULUS: [u64; 4] = [
    0xffff_ffff_ffff_ffff,
    0x0000_0000_ffff_ffff,
    0x0000_0000_0000_0000,
    0xffff_ffff_0000_0001,
];

/// Order `n` of the group generated by the base point. The cofactor is 1.
pub const CURVE_ORDER: [u64; 4] = [
    0xf3b9_cac2_fc63_2551,
    0xbce6_faad_a717_9e84,
    0xffff_ffff_ffff_ffff,
    0xffff_ffff_0000_0000,
];

/// Curve coefficient `b` of `y^2 = x^3 - 3x + b`.
pub const EQUATION_B: [u64; 4] = [
    0x3bce_3c3e_27d2_604b,
    0x651d_06b0_cc53_b0f6,
    0xb3eb_bd55_7698_86bc,
    0x5ac6_35d8_aa3a_93e7,
];

/// Affine `x` coordinate of the base point `G`.
pub const GENERATOR_X: [u64; 4] = [
    0xf4a1_3945_d898_c296,
    0x7703_7d81_2deb_33a0,
    0xf8bc_e6e5_63a4_40f2,
    0x6b17_d1f2_e12c_4247,
];

/// Affine `y` coordinate of the base point `G`.
pub const GENERATOR_Y: [u64; 4] = [
    0xcbb6_4068_37bf_51f5,
    0x2bce_3357_6b31_5ece,
    0x8ee7_eb4a_7c0f_9e16,
    0x4fe3_42e2_fe1a_7f9b,
];
