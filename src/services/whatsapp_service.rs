use url::Url;

use crate::error::Result;

/// Builds the `https://wa.me/<phone>?text=<encoded>` deep link that pre-fills
/// the operator's WhatsApp chat. The text template is business content read by
/// a human, so callers must keep field labels and order intact.
pub fn deep_link(phone: &str, text: &str) -> Result<String> {
    let mut link = Url::parse(&format!("https://wa.me/{}", phone))?;
    link.query_pairs_mut().append_pair("text", text);
    Ok(link.into())
}
