use {
    crate::{AccountId, Asset, DataValue, MuxedAccount, SequenceNumber, String64},
    stellar_xdr_codec::{xdr_enum, xdr_struct, xdr_union},
};

xdr_enum! {
    pub enum OperationType {
        CreateAccount = 0,
        Payment = 1,
        PathPaymentStrictReceive = 2,
        ManageSellOffer = 3,
        CreatePassiveSellOffer = 4,
        SetOptions = 5,
        ChangeTrust = 6,
        AllowTrust = 7,
        AccountMerge = 8,
        Inflation = 9,
        ManageData = 10,
        BumpSequence = 11,
        ManageBuyOffer = 12,
        PathPaymentStrictSend = 13,
        CreateClaimableBalance = 14,
        ClaimClaimableBalance = 15,
        BeginSponsoringFutureReserves = 16,
        EndSponsoringFutureReserves = 17,
        RevokeSponsorship = 18,
        Clawback = 19,
        ClawbackClaimableBalance = 20,
        SetTrustLineFlags = 21,
        LiquidityPoolDeposit = 22,
        LiquidityPoolWithdraw = 23,
        InvokeHostFunction = 24,
        ExtendFootprintTtl = 25,
        RestoreFootprint = 26,
    }
}

xdr_struct! {
    pub struct CreateAccountOp {
        pub destination: AccountId,
        pub starting_balance: i64,
    }
}

xdr_struct! {
    pub struct PaymentOp {
        pub destination: MuxedAccount,
        pub asset: Asset,
        pub amount: i64,
    }
}

xdr_struct! {
    pub struct ManageDataOp {
        pub data_name: String64,
        /// `None` deletes the entry.
        pub data_value: Option<DataValue>,
    }
}

xdr_struct! {
    pub struct BumpSequenceOp {
        pub bump_to: SequenceNumber,
    }
}

xdr_struct! {
    pub struct BeginSponsoringFutureReservesOp {
        pub sponsored_id: AccountId,
    }
}

xdr_union! {
    /// Operation payloads. Only the classic operations without nested
    /// ledger-entry schemas are modelled; any other type fails to decode.
    pub enum OperationBody switch (OperationType) {
        CreateAccount(CreateAccountOp) = OperationType::CreateAccount,
        Payment(PaymentOp) = OperationType::Payment,
        AccountMerge(MuxedAccount) = OperationType::AccountMerge,
        Inflation = OperationType::Inflation,
        ManageData(ManageDataOp) = OperationType::ManageData,
        BumpSequence(BumpSequenceOp) = OperationType::BumpSequence,
        BeginSponsoringFutureReserves(BeginSponsoringFutureReservesOp) =
            OperationType::BeginSponsoringFutureReserves,
        EndSponsoringFutureReserves = OperationType::EndSponsoringFutureReserves,
    }
}

xdr_struct! {
    pub struct Operation with builder OperationBuilder {
        /// Overrides the transaction source for this operation.
        pub source_account: Option<MuxedAccount> = Default,
        pub body: OperationBody,
    }
}

impl Operation {
    pub fn operation_type(&self) -> OperationType {
        self.body.discriminant()
    }
}

impl From<OperationBody> for Operation {
    fn from(body: OperationBody) -> Self {
        Self {
            source_account: None,
            body,
        }
    }
}
