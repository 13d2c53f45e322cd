//! Hyperlink extraction from directory-listing pages.
//!
//! Pages are token-scanned rather than parsed into a tree. Tree construction
//! repairs misnested markup by inventing elements, which would add links that
//! are not in the source.

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer,
};
use log::debug;

use crate::error_handling::FetchError;

/// Fetches a listing page and returns the `href` of every anchor on it.
///
/// Links come back in document order, duplicates included. Values are not
/// decoded or validated; they are combined with a host prefix later.
///
/// # Arguments
///
/// * `client` - HTTP client (its timeout bounds the request)
/// * `page_url` - Listing page to fetch
///
/// # Returns
///
/// The extracted links, possibly empty. An empty page is not an error here;
/// callers decide whether that is acceptable.
///
/// # Errors
///
/// Returns a `FetchError` naming `page_url` if the request fails, the status is
/// not a success, or the body cannot be read.
pub async fn extract_links(
    client: &reqwest::Client,
    page_url: &str,
) -> Result<Vec<String>, FetchError> {
    let response = super::get(client, page_url).await?;
    let body = response.text().await.map_err(|source| FetchError::Body {
        url: page_url.to_string(),
        source,
    })?;

    let links = parse_links(&body);
    debug!("Found {} links at {}", links.len(), page_url);
    Ok(links)
}

/// Collects `href` values from anchor start tags as the tokenizer emits them.
#[derive(Default)]
struct AnchorSink {
    links: RefCell<Vec<String>>,
}

impl TokenSink for AnchorSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) if tag.kind == TagKind::StartTag => {
                if &*tag.name == "a" {
                    if let Some(href) = first_href(&tag) {
                        self.links.borrow_mut().push(href);
                    }
                }
                raw_text_kind(&tag).map_or(TokenSinkResult::Continue, TokenSinkResult::RawData)
            }
            _ => TokenSinkResult::Continue,
        }
    }
}

fn first_href(tag: &Tag) -> Option<String> {
    tag.attrs
        .iter()
        .find(|attr| &*attr.name.local == "href")
        .map(|attr| attr.value.to_string())
}

/// Content of these elements is text, so markup inside it is not scanned.
fn raw_text_kind(tag: &Tag) -> Option<RawKind> {
    match &*tag.name {
        "title" | "textarea" => Some(RawKind::Rcdata),
        "style" | "xmp" | "iframe" | "noembed" | "noframes" => Some(RawKind::Rawtext),
        "script" => Some(RawKind::ScriptData),
        _ => None,
    }
}

/// Returns the first `href` attribute of each `<a>` start tag in document order.
///
/// Anchors without an `href` contribute nothing. End tags are ignored, so
/// unclosed or misnested anchors yield exactly one link each.
pub(crate) fn parse_links(html: &str) -> Vec<String> {
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    let tokenizer = Tokenizer::new(AnchorSink::default(), Default::default());
    // The sink never yields a script handle, so one feed drains the input
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    tokenizer.sink.links.take()
}
