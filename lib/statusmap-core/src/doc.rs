//! Read-only introspection for documentation generators.
//!
//! [`crate::Registry::describe`] lists every status code an endpoint can
//! produce, in registration order, with the default variant last.

use std::fmt;

use crate::{ContentType, DiscriminatorKind};

/// Documentation of a single variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDoc {
    /// Status code, `None` for a default variant relying on the branch policy.
    pub status: Option<u16>,
    /// Description, falling back to the canonical reason phrase.
    pub description: Option<String>,
    /// Content type of the payload, `None` for an empty body.
    pub content_type: Option<ContentType>,
    /// Payload type name.
    pub payload: &'static str,
    /// Discriminator strategy, `None` for the default variant.
    pub kind: Option<DiscriminatorKind>,
    /// Whether this is the default variant.
    pub is_default: bool,
}

impl StatusDoc {
    pub(crate) fn reason(status: Option<u16>) -> Option<String> {
        status
            .and_then(|s| http::StatusCode::from_u16(s).ok())
            .and_then(|s| s.canonical_reason())
            .map(str::to_string)
    }
}

impl fmt::Display for StatusDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self
            .status
            .map_or_else(|| "default".to_string(), |s| s.to_string());
        let kind = self.kind.map_or_else(|| "-".to_string(), |k| k.to_string());
        let content_type = self.content_type.map_or("-", |c| c.as_str());
        let description = self.description.as_deref().unwrap_or("-");
        write!(f, "{status:<8}{kind:<9}{content_type:<18}{description}")
    }
}

/// Documentation of a whole registry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusDocs(pub Vec<StatusDoc>);

impl StatusDocs {
    /// Entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusDoc> {
        self.0.iter()
    }

    /// Explicit status codes, without duplicates, in registration order.
    #[must_use]
    pub fn status_codes(&self) -> Vec<u16> {
        let mut codes = Vec::new();
        for code in self.0.iter().filter_map(|doc| doc.status) {
            if !codes.contains(&code) {
                codes.push(code);
            }
        }
        codes
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<StatusDoc> for StatusDocs {
    fn extend<I: IntoIterator<Item = StatusDoc>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for StatusDocs {
    type Item = StatusDoc;
    type IntoIter = std::vec::IntoIter<StatusDoc>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for StatusDocs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, doc) in self.0.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{doc}")?;
        }
        Ok(())
    }
}
