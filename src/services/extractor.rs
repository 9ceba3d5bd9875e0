// src/services/extractor.rs

//! Result image extraction from search result pages.
//!
//! The page is never parsed into a tree. Start tags are consumed as a stream
//! and a single flag remembers whether the previous start tag was a result
//! container (`class="photo"`). An `img` start tag seen while the flag is set
//! is a result thumbnail; its `data-src` is rewritten to the full-size URL.
//!
//! Only adjacency in the start-tag stream matters. A container whose image
//! sits two or more start tags later is not detected, and an `img` that is
//! itself classed `photo` arms the next tag rather than matching itself.
//!
//! Tags are read with the bare `html5ever` tokenizer and no tree builder, so
//! the content of `noscript`, `title`, `iframe` and `textarea` is still
//! tokenized as markup. Only `script` and `style` bodies are raw text.

use std::cell::RefCell;

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

use crate::error::{AppError, Result};
use crate::utils::url::to_original;

const PHOTO_CLASS: &str = "photo";

/// One-step lookback state over start tags.
#[derive(Debug, Default)]
pub struct PhotoTracker {
    after_photo: bool,
    images: Vec<String>,
}

impl PhotoTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one start tag.
    ///
    /// `class` and `data_src` are the decoded attribute values, if present.
    /// An empty `data-src` counts as missing.
    pub fn start_tag(
        &mut self,
        name: &str,
        class: Option<&str>,
        data_src: Option<&str>,
    ) -> Result<()> {
        if self.after_photo && name.eq_ignore_ascii_case("img") {
            let src = data_src
                .filter(|src| !src.is_empty())
                .ok_or(AppError::MissingDataSrc)?;
            self.images.push(to_original(src));
        }
        self.after_photo = class == Some(PHOTO_CLASS);
        Ok(())
    }

    pub fn into_images(self) -> Vec<String> {
        self.images
    }
}

/// Token sink feeding start tags to a [`PhotoTracker`].
///
/// The tokenizer cannot be aborted from a sink, so the first error is kept
/// and every later token is ignored.
#[derive(Default)]
struct StartTagSink {
    tracker: RefCell<PhotoTracker>,
    error: RefCell<Option<AppError>>,
}

impl StartTagSink {
    fn start_tag(&self, tag: &Tag) {
        if self.error.borrow().is_some() {
            return;
        }
        let result = self.tracker.borrow_mut().start_tag(
            &tag.name,
            attr(tag, "class"),
            attr(tag, "data-src"),
        );
        if let Err(e) = result {
            *self.error.borrow_mut() = Some(e);
        }
    }

    fn finish(&self) -> Result<Vec<String>> {
        match self.error.take() {
            Some(e) => Err(e),
            None => Ok(self.tracker.take().into_images()),
        }
    }
}

fn attr<'a>(tag: &'a Tag, name: &str) -> Option<&'a str> {
    tag.attrs
        .iter()
        .find(|attr| &*attr.name.local == name)
        .map(|attr| &*attr.value)
}

impl TokenSink for StartTagSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        let Token::TagToken(tag) = token else {
            return TokenSinkResult::Continue;
        };
        if tag.kind != TagKind::StartTag {
            return TokenSinkResult::Continue;
        }

        self.start_tag(&tag);

        // A self-closing script or style has no body to skip.
        if tag.self_closing {
            return TokenSinkResult::Continue;
        }
        match &*tag.name {
            "script" => TokenSinkResult::RawData(RawKind::ScriptData),
            "style" => TokenSinkResult::RawData(RawKind::Rawtext),
            _ => TokenSinkResult::Continue,
        }
    }
}

/// Extract full-size result image URLs from a search result page.
pub fn extract_images(html: &str) -> Result<Vec<String>> {
    let input = BufferQueue::default();
    input.push_back(StrTendril::from_slice(html));

    let tokenizer = Tokenizer::new(StartTagSink::default(), TokenizerOpts::default());
    // The sink never hands back a script, so one feed drains the queue.
    let _ = tokenizer.feed(&input);
    tokenizer.end();

    let images = tokenizer.sink.finish()?;
    log::debug!("Extracted {} result images", images.len());
    Ok(images)
}
