//! Deep-link parsing.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::PlanId;

const PLAN_PARAM: &str = "plan";

/// Plan preselection read once when a booking starts.
///
/// The link only carries the raw value; whether it names a plan the flow can
/// use is decided when the wizard starts.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeepLink {
    plan: Option<String>,
}

impl DeepLink {
    /// A link that preselects the given plan key.
    pub fn plan(key: impl Into<String>) -> Self {
        let key = key.into();
        let key = key.trim();
        Self {
            plan: (!key.is_empty()).then(|| key.to_string()),
        }
    }

    /// Extracts the `plan` parameter from a URL or query string.
    ///
    /// Accepts a full URL (`/book?plan=premium#top`), a query string
    /// (`?plan=premium&utm_source=mail`) or a bare query (`plan=premium`).
    /// The first non-empty `plan` parameter wins; parameter names are
    /// matched case-insensitively. Values are form-decoded the way a browser
    /// decodes them: `+` is a space and `%XX` is an escaped byte.
    pub fn from_query(query: &str) -> Self {
        let query = query.split('#').next().unwrap_or_default();
        let query = match query.split_once('?') {
            Some((_, rest)) => rest,
            None => query,
        };

        let plan = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .filter(|(name, _)| name.trim().eq_ignore_ascii_case(PLAN_PARAM))
            .map(|(_, value)| decode_component(value).trim().to_string())
            .find(|value| !value.is_empty());

        Self { plan }
    }

    /// Parses either a query string or a bare plan key.
    pub fn parse(input: &str) -> Self {
        if input.contains('=') || input.contains('?') {
            Self::from_query(input)
        } else {
            Self::plan(input)
        }
    }

    /// The raw plan value carried by the link.
    pub fn raw_plan(&self) -> Option<&str> {
        self.plan.as_deref()
    }

    /// The plan key, if the link carries a recognized one.
    pub fn plan_id(&self) -> Option<PlanId> {
        self.plan
            .as_deref()
            .and_then(|value| PlanId::from_str(value).ok())
    }
}

/// Decodes one `application/x-www-form-urlencoded` query component.
///
/// Malformed escapes are kept literally.
fn decode_component(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => out.push(b' '),
            b'%' if i + 2 < bytes.len() => {
                let high = (bytes[i + 1] as char).to_digit(16);
                let low = (bytes[i + 2] as char).to_digit(16);
                if let (Some(high), Some(low)) = (high, low) {
                    out.push(((high << 4) | low) as u8);
                    i += 3;
                    continue;
                }
                out.push(b'%');
            }
            byte => out.push(byte),
        }
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}
