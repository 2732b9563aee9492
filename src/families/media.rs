//! Media elements: `<audio>`.

use crate::error::ArticleResult;
use crate::node::{Node, TextItem};
use crate::sink::{DocumentSink, NodeId};
use crate::validate::is_text_empty;

// =============================================================================
// Audio
// =============================================================================

/// Audio clip embedded in an article.
///
/// Renders as:
///
/// ```text
/// <audio title="..." autoplay="autoplay" muted="muted">
///   <source src="..."/>
/// </audio>
/// ```
///
/// The source URL is required; without it the element renders as a placeholder.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Audio {
    title: String,
    url: String,
    playback: Option<String>,
    autoplay: bool,
    muted: bool,
}

impl Audio {
    /// Tag name of the audio element
    pub const TAG: &'static str = "audio";
    /// Tag name of the nested source element
    pub const SOURCE_TAG: &'static str = "source";

    /// Create an empty audio element
    pub fn create() -> Self {
        Self::default()
    }

    /// Set the source URL
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Start playing as soon as the element is visible
    pub fn enable_autoplay(mut self) -> Self {
        self.autoplay = true;
        self
    }

    /// Wait for user interaction before playing
    pub fn disable_autoplay(mut self) -> Self {
        self.autoplay = false;
        self
    }

    /// Start muted
    pub fn enable_muted(mut self) -> Self {
        self.muted = true;
        self
    }

    /// Start with sound
    pub fn disable_muted(mut self) -> Self {
        self.muted = false;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Legacy playback mode. No setter writes it, so it is always `None`
    /// for values built through this API.
    pub fn playback(&self) -> Option<&str> {
        self.playback.as_deref()
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }
}

impl Node for Audio {
    fn node_name(&self) -> &'static str {
        "Audio"
    }

    fn is_valid(&self) -> bool {
        !is_text_empty(&self.url)
    }

    fn emit(&self, sink: &mut dyn DocumentSink) -> ArticleResult<NodeId> {
        let audio = sink.create_element(Self::TAG)?;

        if !self.title.is_empty() {
            sink.set_attribute(audio, "title", &self.title)?;
        }
        if self.autoplay {
            sink.set_attribute(audio, "autoplay", "autoplay")?;
        }
        if self.muted {
            sink.set_attribute(audio, "muted", "muted")?;
        }
        if !self.url.is_empty() {
            let source = sink.create_element(Self::SOURCE_TAG)?;
            sink.set_attribute(source, "src", &self.url)?;
            sink.append_child(audio, source)?;
        }

        Ok(audio)
    }
}

impl From<Audio> for TextItem {
    fn from(audio: Audio) -> Self {
        TextItem::Node(Box::new(audio))
    }
}

// =============================================================================
// Tests
// =============================================================================
