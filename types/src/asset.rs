use {
    crate::AccountId,
    stellar_xdr_codec::{xdr_enum, xdr_struct, xdr_union},
    thiserror::Error,
};

/// Longest asset code the schema can carry.
pub const MAX_ASSET_CODE_LEN: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssetCodeError {
    #[error("asset code is empty")]
    Empty,

    #[error("asset code is {0} bytes, at most 12 allowed")]
    TooLong(usize),

    #[error("asset code contains {0:?}, only ASCII letters and digits are allowed")]
    InvalidCharacter(char),
}

impl_fixed_opaque!(TYPE = AssetCode4, LEN = 4);
impl_fixed_opaque!(TYPE = AssetCode12, LEN = 12);

xdr_enum! {
    pub enum AssetType {
        Native = 0,
        CreditAlphanum4 = 1,
        CreditAlphanum12 = 2,
        PoolShare = 3,
    }
}

xdr_struct! {
    pub struct AlphaNum4 {
        pub asset_code: AssetCode4,
        pub issuer: AccountId,
    }
}

xdr_struct! {
    pub struct AlphaNum12 {
        pub asset_code: AssetCode12,
        pub issuer: AccountId,
    }
}

xdr_union! {
    pub enum Asset switch (AssetType) {
        Native = AssetType::Native,
        CreditAlphanum4(AlphaNum4) = AssetType::CreditAlphanum4,
        CreditAlphanum12(AlphaNum12) = AssetType::CreditAlphanum12,
    }
}

impl Asset {
    /// A credit asset; codes of up to 4 bytes use the short form, up to 12
    /// the long one, right-padded with zeros.
    pub fn credit(code: &str, issuer: AccountId) -> Result<Self, AssetCodeError> {
        if let Some(c) = code.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(AssetCodeError::InvalidCharacter(c));
        }
        let bytes = code.as_bytes();
        match bytes.len() {
            1..=4 => {
                let mut asset_code = [0u8; 4];
                asset_code[..bytes.len()].copy_from_slice(bytes);
                Ok(Self::CreditAlphanum4(AlphaNum4 {
                    asset_code: AssetCode4(asset_code),
                    issuer,
                }))
            }
            5..=MAX_ASSET_CODE_LEN => {
                let mut asset_code = [0u8; 12];
                asset_code[..bytes.len()].copy_from_slice(bytes);
                Ok(Self::CreditAlphanum12(AlphaNum12 {
                    asset_code: AssetCode12(asset_code),
                    issuer,
                }))
            }
            0 => Err(AssetCodeError::Empty),
            len => Err(AssetCodeError::TooLong(len)),
        }
    }
}
