use clap::ValueEnum;
use prost::Message as _;
use prost_reflect::{DynamicMessage, MessageDescriptor};
use uuid::Uuid;

/// Reserved template token replaced with a fresh identifier on every render.
///
/// All occurrences within one template share the same identifier for that
/// render, so the token can be used as a correlation id across fields.
pub const CORRELATION_PLACEHOLDER: &str = "{{uuid}}";

/// When template rendering happens relative to the request cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Render once at startup and serve the same bytes for every request.
    Static,
    /// Render fresh for every request, re-substituting the placeholder.
    PerRequest,
}

/// Failure to render the template against the resolved descriptor.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("template does not parse against message `{type_name}`: {source}")]
    TemplateParse {
        type_name: String,
        #[source]
        source: prost_reflect::text_format::ParseError,
    },
}

/// A concrete message rendered from the template.
#[derive(Debug, Clone)]
pub struct RenderedMessage {
    /// Canonical binary encoding of the message.
    pub bytes: Vec<u8>,
    /// Fully qualified name of the message type.
    pub type_name: String,
}

/// Renders the text-format template into message values against one resolved
/// descriptor.
///
/// Holds no mutable state: in static mode the bytes are rendered once at
/// construction and cloned per request; in per-request mode each call
/// allocates a fresh message, so the renderer is freely shareable across
/// concurrent requests.
#[derive(Debug, Clone)]
pub struct MessageRenderer {
    descriptor: MessageDescriptor,
    template: String,
    cached: Option<RenderedMessage>,
}

impl MessageRenderer {
    /// Build a renderer for `descriptor` and `template`.
    ///
    /// In [`RenderMode::Static`] the template is rendered immediately, so a
    /// template that does not match the descriptor fails here, before any
    /// listener is bound.
    pub fn new(
        descriptor: MessageDescriptor,
        template: String,
        mode: RenderMode,
    ) -> Result<Self, RenderError> {
        let mut renderer = Self {
            descriptor,
            template,
            cached: None,
        };
        if mode == RenderMode::Static {
            renderer.cached = Some(renderer.render_fresh()?);
        }
        Ok(renderer)
    }

    /// The fully qualified name of the served message type.
    pub fn message_type(&self) -> &str {
        self.descriptor.full_name()
    }

    /// Produce the message for one request.
    pub fn render(&self) -> Result<RenderedMessage, RenderError> {
        match &self.cached {
            Some(rendered) => Ok(rendered.clone()),
            None => self.render_fresh(),
        }
    }

    fn render_fresh(&self) -> Result<RenderedMessage, RenderError> {
        let text = self
            .template
            .replace(CORRELATION_PLACEHOLDER, &Uuid::new_v4().to_string());
        let message = DynamicMessage::parse_text_format(self.descriptor.clone(), &text).map_err(
            |source| RenderError::TemplateParse {
                type_name: self.descriptor.full_name().to_string(),
                source,
            },
        )?;
        Ok(RenderedMessage {
            bytes: message.encode_to_vec(),
            type_name: self.descriptor.full_name().to_string(),
        })
    }
}
