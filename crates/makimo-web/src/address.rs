//! Wallet address checks for the landing form.

/// Length of a base58-encoded Solana pubkey as typed by users.
pub const SOLANA_ADDRESS_LEN: usize = 44;

/// A submission passes when the address is exactly 44 characters long.
///
/// Content is not inspected: base58 decoding and the 32-byte pubkey
/// check belong to the mint pipeline, not the landing form, so any
/// 44-character string is accepted here.
pub fn is_valid_address(address: &str) -> bool {
    address.chars().count() == SOLANA_ADDRESS_LEN
}
