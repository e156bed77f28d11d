use crate::bigint::Big;


/// Scalar shared by the known-answer vectors
const K: &str = "1d5f3a9b7c2e4f6081a3c5e7092b4d6f8091a2b3c4d5e6f708192a3b4c5d6e7f";

/// Second scalar for the joint multiplications
const K2: &str = "0f1e2d3c4b5a69788796a5b4c3d2e1f00112233445566778899aabbccddeeff";

fn big(s: &str) -> Big {
    Big::from_hex(s).unwrap()
}
