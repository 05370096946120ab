//! Peer-to-peer overlay messages.

use {
    crate::TransactionEnvelope,
    stellar_xdr_codec::{xdr_enum, xdr_struct, xdr_union, BoundedString},
};

xdr_enum! {
    pub enum MessageType {
        ErrorMsg = 0,
        Auth = 2,
        DontHave = 3,
        Peers = 5,
        GetTxSet = 6,
        TxSet = 7,
        GeneralizedTxSet = 17,
        Transaction = 8,
        GetScpQuorumset = 9,
        ScpQuorumset = 10,
        ScpMessage = 11,
        GetScpState = 12,
        Hello = 13,
        SendMore = 16,
        SendMoreExtended = 20,
        FloodAdvert = 18,
        FloodDemand = 19,
        TimeSlicedSurveyRequest = 21,
        TimeSlicedSurveyResponse = 22,
        TimeSlicedSurveyStartCollecting = 23,
        TimeSlicedSurveyStopCollecting = 24,
    }
}

xdr_enum! {
    pub enum ErrorCode {
        Misc = 0,
        Data = 1,
        Conf = 2,
        Auth = 3,
        Load = 4,
    }
}

xdr_struct! {
    /// Error reported by a peer before it drops the connection.
    pub struct SError {
        pub code: ErrorCode,
        pub msg: BoundedString<100>,
    }
}

xdr_struct! {
    pub struct SendMore {
        pub num_messages: u32,
    }
}

xdr_struct! {
    pub struct SendMoreExtended {
        pub num_messages: u32,
        pub num_bytes: u32,
    }
}

impl_fixed_opaque!(
    /// HMAC-SHA256 authenticating an overlay message.
    TYPE = HmacSha256Mac,
    LEN = 32
);

xdr_union! {
    /// The overlay message kinds that carry no consensus or ledger state.
    pub enum StellarMessage switch (MessageType) {
        ErrorMsg(SError) = MessageType::ErrorMsg,
        Transaction(TransactionEnvelope) = MessageType::Transaction,
        GetScpState(u32) = MessageType::GetScpState,
        SendMore(SendMore) = MessageType::SendMore,
        SendMoreExtended(SendMoreExtended) = MessageType::SendMoreExtended,
    }
}

xdr_struct! {
    pub struct AuthenticatedMessageV0 {
        pub sequence: u64,
        pub message: StellarMessage,
        pub mac: HmacSha256Mac,
    }
}

xdr_union! {
    pub enum AuthenticatedMessage switch (u32) {
        V0(AuthenticatedMessageV0) = 0,
    }
}
