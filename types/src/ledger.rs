//! Ledger header skip list and the account entry with its extension chain.
//!
//! Each account extension version adds a nested union whose non-void arm
//! uses the version number as its discriminant, so the chain reads
//! `0 | 1 -> (0 | 2 -> (0 | 3))`.

use {
    crate::{
        AccountId, ExtensionPoint, Hash, SequenceNumber, SignerKey, String32, Thresholds,
        TimePoint,
    },
    stellar_xdr_codec::{xdr_struct, xdr_union, BoundedVec},
};

/// Maximum number of signers on one account.
pub const MAX_SIGNERS: u32 = 20;

/// Hashes of older ledger headers kept in each header.
pub type SkipList = [Hash; 4];

/// Account that sponsors a reserve, if any.
pub type SponsorshipDescriptor = Option<AccountId>;

xdr_struct! {
    pub struct Liabilities {
        pub buying: i64,
        pub selling: i64,
    }
}

xdr_struct! {
    pub struct Signer {
        pub key: SignerKey,
        pub weight: u32,
    }
}

xdr_struct! {
    pub struct AccountEntryExtensionV3 {
        pub ext: ExtensionPoint,
        pub seq_ledger: u32,
        pub seq_time: TimePoint,
    }
}

xdr_union! {
    pub enum AccountEntryExtensionV2Ext switch (i32) {
        V0 = 0,
        V3(AccountEntryExtensionV3) = 3,
    }
}

xdr_struct! {
    pub struct AccountEntryExtensionV2 {
        pub num_sponsored: u32,
        pub num_sponsoring: u32,
        pub signer_sponsoring_ids: BoundedVec<SponsorshipDescriptor, MAX_SIGNERS>,
        pub ext: AccountEntryExtensionV2Ext,
    }
}

xdr_union! {
    pub enum AccountEntryExtensionV1Ext switch (i32) {
        V0 = 0,
        V2(AccountEntryExtensionV2) = 2,
    }
}

xdr_struct! {
    pub struct AccountEntryExtensionV1 {
        pub liabilities: Liabilities,
        pub ext: AccountEntryExtensionV1Ext,
    }
}

xdr_union! {
    pub enum AccountEntryExt switch (i32) {
        V0 = 0,
        V1(AccountEntryExtensionV1) = 1,
    }
}

impl_ext_default!(
    AccountEntryExtensionV2Ext,
    AccountEntryExtensionV1Ext,
    AccountEntryExt
);

xdr_struct! {
    pub struct AccountEntry with builder AccountEntryBuilder {
        pub account_id: AccountId,
        pub balance: i64,
        pub seq_num: SequenceNumber,
        pub num_sub_entries: u32 = Default,
        pub inflation_dest: Option<AccountId> = Default,
        pub flags: u32 = Default,
        pub home_domain: String32 = Default,
        pub thresholds: Thresholds,
        pub signers: BoundedVec<Signer, MAX_SIGNERS> = Default,
        pub ext: AccountEntryExt = Default,
    }
}

impl AccountEntry {
    pub fn liabilities(&self) -> Option<&Liabilities> {
        match &self.ext {
            AccountEntryExt::V0 => None,
            AccountEntryExt::V1(v1) => Some(&v1.liabilities),
        }
    }

    /// Ledger and time of the last sequence number bump, known only once the
    /// entry carries the V3 extension.
    pub fn seq_bump(&self) -> Option<(u32, TimePoint)> {
        let AccountEntryExt::V1(v1) = &self.ext else {
            return None;
        };
        let AccountEntryExtensionV1Ext::V2(v2) = &v1.ext else {
            return None;
        };
        match &v2.ext {
            AccountEntryExtensionV2Ext::V3(v3) => Some((v3.seq_ledger, v3.seq_time)),
            AccountEntryExtensionV2Ext::V0 => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::strategies,
        assert_matches::assert_matches,
        proptest::prelude::*,
        stellar_xdr_codec::{Limits, XdrCodec, XdrError},
    };

    proptest! {
        #[test]
        fn test_account_entry_round_trip(entry in strategies::account_entry()) {
            let bytes = entry.to_xdr().unwrap();
            let decoded = AccountEntry::from_xdr(&bytes).unwrap();
            prop_assert_eq!(&decoded, &entry);
            prop_assert_eq!(decoded.to_xdr().unwrap(), bytes);
        }

        #[test]
        fn test_account_entry_decode_is_canonical(
            bytes in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            if let Ok(entry) = AccountEntry::from_xdr(&bytes) {
                prop_assert_eq!(entry.to_xdr().unwrap(), bytes);
            }
        }
    }

    fn account() -> AccountEntry {
        AccountEntry::builder()
            .account_id(
                "GB43KVROR7TFJ6KAPCYRF2FJROTZAH4FHLTJLPWX4DRZCC5NASLGITR6"
                    .parse()
                    .unwrap(),
            )
            .balance(10_000_000)
            .seq_num(42)
            .thresholds(Thresholds::new([1, 0, 0, 0]))
            .build()
            .unwrap()
    }

    fn full_chain() -> AccountEntryExt {
        AccountEntryExt::V1(AccountEntryExtensionV1 {
            liabilities: Liabilities {
                buying: 5,
                selling: 6,
            },
            ext: AccountEntryExtensionV1Ext::V2(AccountEntryExtensionV2 {
                num_sponsored: 1,
                num_sponsoring: 2,
                signer_sponsoring_ids: BoundedVec::new(),
                ext: AccountEntryExtensionV2Ext::V3(AccountEntryExtensionV3 {
                    ext: ExtensionPoint::V0,
                    seq_ledger: 77,
                    seq_time: 1_700_000_000,
                }),
            }),
        })
    }

    #[test]
    fn test_chain_round_trip() {
        let mut entry = account();
        assert_eq!(entry.seq_bump(), None);
        entry.ext = full_chain();
        let bytes = entry.to_xdr().unwrap();
        let decoded = AccountEntry::from_xdr(&bytes).unwrap();
        assert_eq!(decoded.seq_bump(), Some((77, 1_700_000_000)));
        assert_eq!(decoded.liabilities().map(|l| l.selling), Some(6));
        assert_eq!(decoded, entry);
    }

    #[test]
    fn test_v1_ext_skips_code_one() {
        // liabilities, then an inner ext claiming version 1
        let mut bytes = vec![0; 16];
        bytes.extend_from_slice(&1i32.to_be_bytes());
        assert_matches!(
            AccountEntryExtensionV1::from_xdr(&bytes),
            Err(XdrError::UnknownDiscriminant {
                type_name: "AccountEntryExtensionV1Ext",
                value: 1
            })
        );

        let mut bytes = vec![0; 16];
        bytes.extend_from_slice(&0i32.to_be_bytes());
        assert!(AccountEntryExtensionV1::from_xdr(&bytes).is_ok());
    }

    #[test]
    fn test_chain_depth_limit() {
        let bytes = full_chain().to_xdr().unwrap();
        assert!(AccountEntryExt::from_xdr(&bytes).is_ok());
        assert_eq!(
            AccountEntryExt::from_xdr_with_limits(&bytes, Limits::default().with_depth(4)),
            Err(XdrError::DepthLimitExceeded)
        );
    }

    #[test]
    fn test_skip_list_has_no_length_prefix() {
        let skip_list: SkipList = [
            Hash::new([1; 32]),
            Hash::new([2; 32]),
            Hash::new([3; 32]),
            Hash::new([4; 32]),
        ];
        let bytes = skip_list.to_xdr().unwrap();
        assert_eq!(bytes.len(), 128);
        assert_eq!(bytes[0], 1);
        assert_eq!(<SkipList>::from_xdr(&bytes).unwrap(), skip_list);
        assert_matches!(
            <SkipList>::from_xdr(&bytes[..96]),
            Err(XdrError::Truncated { .. })
        );
    }

    #[test]
    fn test_sponsorship_descriptors() {
        let ids: BoundedVec<SponsorshipDescriptor, MAX_SIGNERS> =
            BoundedVec::of(vec![None, Some(account().account_id)]).unwrap();
        let bytes = ids.to_xdr().unwrap();
        assert_eq!(&bytes[..8], &[0, 0, 0, 2, 0, 0, 0, 0]);
        assert_eq!(bytes.len(), 4 + 4 + 4 + 36);
    }
}
