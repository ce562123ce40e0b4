use serde::{Deserialize, Serialize};

/// Challenge descriptor attached to an intent that requires action.
///
/// Descriptors this crate does not know yet deserialize as [`NextAction::Unknown`],
/// so a newer API response still reaches selection instead of failing to parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NextAction {
    /// Challenge through the in-app 3DS2 transaction SDK.
    #[serde(rename = "use_3ds2")]
    Use3ds2(Use3ds2Data),
    /// Legacy 3DS1 challenge rendered in a browser surface.
    #[serde(rename = "use_3ds1")]
    Use3ds1 { url: String },
    RedirectToUrl {
        url: String,
        return_url: Option<String>,
    },
    AlipayRedirect {
        web_view_url: String,
        return_url: Option<String>,
    },
    DisplayOxxoDetails {
        expires_after: i64,
        number: Option<String>,
        hosted_voucher_url: Option<String>,
    },
    BlikAuthorize,
    /// Any descriptor type not listed above. Its payload is discarded.
    #[serde(other)]
    Unknown,
}

/// Field-less discriminant of [`NextAction`], used as the selector's lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NextActionKind {
    Use3ds2,
    Use3ds1,
    RedirectToUrl,
    AlipayRedirect,
    DisplayOxxoDetails,
    BlikAuthorize,
    Unknown,
}

impl NextActionKind {
    pub const ALL: [NextActionKind; 7] = [
        NextActionKind::Use3ds2,
        NextActionKind::Use3ds1,
        NextActionKind::RedirectToUrl,
        NextActionKind::AlipayRedirect,
        NextActionKind::DisplayOxxoDetails,
        NextActionKind::BlikAuthorize,
        NextActionKind::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NextActionKind::Use3ds2 => "use_3ds2",
            NextActionKind::Use3ds1 => "use_3ds1",
            NextActionKind::RedirectToUrl => "redirect_to_url",
            NextActionKind::AlipayRedirect => "alipay_redirect",
            NextActionKind::DisplayOxxoDetails => "display_oxxo_details",
            NextActionKind::BlikAuthorize => "blik_authorize",
            NextActionKind::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for NextActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NextAction {
    pub fn kind(&self) -> NextActionKind {
        match self {
            NextAction::Use3ds2(_) => NextActionKind::Use3ds2,
            NextAction::Use3ds1 { .. } => NextActionKind::Use3ds1,
            NextAction::RedirectToUrl { .. } => NextActionKind::RedirectToUrl,
            NextAction::AlipayRedirect { .. } => NextActionKind::AlipayRedirect,
            NextAction::DisplayOxxoDetails { .. } => NextActionKind::DisplayOxxoDetails,
            NextAction::BlikAuthorize => NextActionKind::BlikAuthorize,
            NextAction::Unknown => NextActionKind::Unknown,
        }
    }
}

/// Payload the 3DS2 SDK needs to start a challenge transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Use3ds2Data {
    pub source: String,
    pub server_name: String,
    pub transaction_id: String,
    pub server_encryption: DirectoryServerEncryption,
    pub three_ds2_intent_id: Option<String>,
    pub publishable_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryServerEncryption {
    pub directory_server_id: String,
    pub ds_certificate_data: String,
    #[serde(default)]
    pub root_certs: Vec<String>,
    pub key_id: Option<String>,
}
