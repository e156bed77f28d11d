//! Known-answer vectors shared by the integration tests
//!
//! All values are big-endian hex. Affine coordinates of `k*G` were computed
//! independently with plain integer arithmetic.

/// Scalar used by every `k*G` vector
pub const SCALAR: &str = "1d5f3a9b7c2e4f6081a3c5e7092b4d6f8091a2b3c4d5e6f708192a3b4c5d6e7f";

/// Second scalar for `k*G + k2*(2G)`
pub const SCALAR2: &str = "0f1e2d3c4b5a69788796a5b4c3d2e1f00112233445566778899aabbccddeeff";

/// Affine `k*G` on a curve with both coordinates
#[derive(Debug, Clone, Copy)]
pub struct MulVector {
    /// Curve name as reported by the marker
    pub curve: &'static str,
    /// x-coordinate of `2G`
    pub double_x: &'static str,
    /// x-coordinate of `k*G`
    pub x: &'static str,
    /// y-coordinate of `k*G`
    pub y: &'static str,
}

/// NIST P-256
pub const NIST256: MulVector = MulVector {
    curve: "NIST256",
    double_x: "7cf27b188d034f7e8a52380304b51ac3c08969e277f21b35a60b48fc47669978",
    x: "e7da3c00cf4e102e569e28fc1c9554c906cbe7f5c5cca74630aa734d1000705b",
    y: "eeff279c133c11fba35744824ed4e91c0327ef53394535d2a9e98be49692186f",
};

/// BN254 G1
pub const BN254: MulVector = MulVector {
    curve: "BN254",
    double_x: "0948d920900000006e8d1360000000021848400000000004e9c0000000000009",
    x: "056e74ae63a82ab599c8009c768e0a9fe53b66bcf6a9c07d8b6f73f618228759",
    y: "0b718cb4c8abb6443be90bbdc3a93a2619343564e20b099f7ac3673726644928",
};

/// Ed25519
pub const ED25519: MulVector = MulVector {
    curve: "ED25519",
    double_x: "36ab384c9f5a046c3d043b7d1833e7ac080d8e4515d7a45f83c5a14e2843ce0e",
    x: "2fdc990942e1786cf1349fc7224f3634f5d0c0a23ffd0a08e01698907a20db0a",
    y: "53cd06b9c57e37b2b696bedcf34409b5afa3ffdc4efca045f8abe7e3df933eb9",
};

/// Curve25519 x-only: `2*9` and `k*9`
pub const CURVE25519_DOUBLE_X: &str =
    "20d342d51873f1b7d9750c687d1571148f3f5ced1e350b5c5cae469cdd684efb";
/// See [`CURVE25519_DOUBLE_X`]
pub const CURVE25519_X: &str = "28bc3dd220770a4474c86e6d2de588ca310ac16746a4d5f23cdf5558751514f2";

/// P-256 `k*G + k2*(2G)`
pub const NIST256_MUL2: (&str, &str) = (
    "f8f19bc0e1bd7531ac9dc568421ffe59602d86b76336b3787662d4a438422fb8",
    "a0eb259b8ac55258f8c08d75ee79b90cd4d910e3ad8d8696568a4e1a8f6a6707",
);

/// Compressed P-256 generator
pub const NIST256_G_COMPRESSED: &str =
    "036b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

/// `e(G2, G1)` on BN254, twelve coefficients in encoding order
pub const BN254_E_G2_G1: [&str; 12] = [
    "0d8a793b0defaef46557b6694e97514cc17a5ef2a410a979113e53d0644f9a5a",
    "1ff35a6f3bd5e17c32b319111480f860b6572335300a6f07eec69fc89a586be7",
    "17224135a9a5fb3989c3f4e890c01ff14c2f25bc365500e6cfa5beacf99c030b",
    "1e3fabd61be8363430f4b6a50ef66f4dbde24fd135bfbbce2e3e515d6f382bd5",
    "02984d9eb6e0fb0e6254c036c9f110c4eda9d0b47873483634e36219ef6d3667",
    "21bb4de1e9efc68028a58dd3b3677400c6a4edbb321a49b2554a3d94af7049ee",
    "11a0963c0701d5089ae418ebe84a5a97b24089c688eb91a931068a7f91db9339",
    "20b7dc228dd3a27f9589fae17d352de2f2a1076ff56eb716026708945f53afcf",
    "221fc0405a912aa6a474d891868725ff1a821017264e02f74021107f3e32775a",
    "1c0c4fae54227be18b16acbc49dda4c3faafe051ea945152ad8a9bb4f5e734df",
    "237331610f44927d30add64ca35c4d4c6dd776bb212d6eb6da29bdbdb95408f2",
    "23bc485aa8a38dfabb7dcb49caed2e12b5b7cdffc35f6e41bdab5df1d54d51d8",
];
