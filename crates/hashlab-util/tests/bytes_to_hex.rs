// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

#[cfg(test)]
mod bytes_to_hex_tests {
    use hashlab_util::bytes_to_hex;

    #[test]
    fn test_basic_bytes() {
        assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
    }

    #[test]
    fn test_empty_slice() {
        assert_eq!(bytes_to_hex(&[]), "");
    }

    #[test]
    fn test_digest_sized_input() {
        let hex = bytes_to_hex(&[0xab; 32]);
        assert_eq!(hex.len(), 64);
        assert_eq!(hex, "ab".repeat(32));
    }
}
