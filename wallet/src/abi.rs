//! Call encoding for the multi-token balance query.
//!
//! The eligibility check is a single `eth_call` of
//! `balanceOfBatch(address[],uint256[])` on the fixed token contract. This is
//! the only contract call the client makes, so the encoding is done by hand
//! rather than through a full ABI layer.

use ratify_types::{TokenId, WalletAddress};

use crate::error::WalletError;

/// 4-byte selector of `balanceOfBatch(address[],uint256[])`.
const BALANCE_OF_BATCH_SELECTOR: [u8; 4] = [0x4e, 0x12, 0x73, 0xf4];

const WORD: usize = 32;

/// Encode the calldata querying `owner`'s balance for each token id.
///
/// The accounts array repeats the owner once per token id, matching the
/// shape `balanceOfBatch` expects.
pub fn encode_balance_of_batch(owner: &WalletAddress, token_ids: &[TokenId]) -> String {
    let n = token_ids.len();
    let mut data = Vec::with_capacity(4 + WORD * (2 + 2 * (1 + n)));
    data.extend_from_slice(&BALANCE_OF_BATCH_SELECTOR);

    // Two dynamic arguments: head holds their offsets into the tail.
    push_word_usize(&mut data, 2 * WORD);
    push_word_usize(&mut data, 2 * WORD + WORD * (1 + n));

    push_word_usize(&mut data, n);
    for _ in token_ids {
        push_word_address(&mut data, owner);
    }

    push_word_usize(&mut data, n);
    for id in token_ids {
        push_word_usize(&mut data, id.value() as usize);
    }

    format!("0x{}", hex::encode(data))
}

/// Decode a `uint256[]` call result into balances.
///
/// Words that do not fit in a `u128` are rejected rather than truncated.
pub fn decode_uint_array(data: &str) -> Result<Vec<u128>, WalletError> {
    let raw = data.strip_prefix("0x").unwrap_or(data);
    let bytes = hex::decode(raw)
        .map_err(|e| WalletError::InvalidResponse(format!("non-hex call result: {e}")))?;
    if bytes.len() % WORD != 0 {
        return Err(WalletError::InvalidResponse(
            "call result is not word-aligned".into(),
        ));
    }

    let offset = read_word_usize(&bytes, 0)?;
    if offset % WORD != 0 {
        return Err(WalletError::InvalidResponse(format!(
            "misaligned array offset {offset}"
        )));
    }
    let len_index = offset / WORD;
    let len = read_word_usize(&bytes, len_index)?;

    let mut balances = Vec::with_capacity(len);
    for i in 0..len {
        balances.push(read_word_u128(&bytes, len_index + 1 + i)?);
    }
    Ok(balances)
}

fn push_word_usize(buf: &mut Vec<u8>, value: usize) {
    buf.extend_from_slice(&[0u8; WORD - 8]);
    buf.extend_from_slice(&(value as u64).to_be_bytes());
}

fn push_word_address(buf: &mut Vec<u8>, address: &WalletAddress) {
    let bytes = hex::decode(&address.as_str()[WalletAddress::PREFIX.len()..])
        .expect("address is validated hex");
    buf.extend_from_slice(&[0u8; 12]);
    buf.extend_from_slice(&bytes);
}

fn word(bytes: &[u8], index: usize) -> Result<&[u8], WalletError> {
    bytes
        .get(index * WORD..(index + 1) * WORD)
        .ok_or_else(|| WalletError::InvalidResponse("truncated call result".into()))
}

fn read_word_usize(bytes: &[u8], index: usize) -> Result<usize, WalletError> {
    let w = word(bytes, index)?;
    if w[..WORD - 8].iter().any(|&b| b != 0) {
        return Err(WalletError::InvalidResponse(
            "oversized length or offset word".into(),
        ));
    }
    let mut tail = [0u8; 8];
    tail.copy_from_slice(&w[WORD - 8..]);
    Ok(u64::from_be_bytes(tail) as usize)
}

fn read_word_u128(bytes: &[u8], index: usize) -> Result<u128, WalletError> {
    let w = word(bytes, index)?;
    if w[..WORD - 16].iter().any(|&b| b != 0) {
        return Err(WalletError::InvalidResponse(
            "balance exceeds u128".into(),
        ));
    }
    let mut tail = [0u8; 16];
    tail.copy_from_slice(&w[WORD - 16..]);
    Ok(u128::from_be_bytes(tail))
}
