//! HTTP method types.
//!
//! Methods exist twice: as the runtime [`RestMethod`] enum used when the
//! request goes over the wire, and as zero-sized marker types ([`Get`],
//! [`Post`], ...) that a schema uses to declare which methods a path accepts.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods an OpenAPI path item may declare.
///
/// ## Examples
///
/// ```rust
/// use oapy::RestMethod;
///
/// let method = RestMethod::Get;
/// assert!(!method.has_body());
///
/// let parsed: RestMethod = "POST".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Post);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource.
    Get,
    /// HTTP POST - Create a resource or trigger an action.
    Post,
    /// HTTP PUT - Replace a resource entirely.
    Put,
    /// HTTP PATCH - Partially update a resource.
    Patch,
    /// HTTP DELETE - Remove a resource.
    Delete,
    /// HTTP HEAD - Retrieve headers only.
    Head,
    /// HTTP OPTIONS - Query supported methods.
    Options,
    /// HTTP TRACE - Echo the request for debugging.
    Trace,
}

impl RestMethod {
    /// Returns `true` if a request body is transmitted for this method.
    ///
    /// GET, DELETE, TRACE, OPTIONS and HEAD never carry a body, even when
    /// one was set on the builder.
    pub fn has_body(&self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
            Self::Head => reqwest::Method::HEAD,
            Self::Options => reqwest::Method::OPTIONS,
            Self::Trace => reqwest::Method::TRACE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}

/// A method marker usable as the `M` of [`Operation<M>`](crate::Operation).
pub trait HttpMethod: Copy + Send + Sync + 'static {
    /// The runtime method this marker stands for.
    const METHOD: RestMethod;
}

macro_rules! method_markers {
    ($($(#[$doc:meta])* $marker:ident => $variant:ident),* $(,)?) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
            pub struct $marker;

            impl HttpMethod for $marker {
                const METHOD: RestMethod = RestMethod::$variant;
            }
        )*
    };
}

method_markers! {
    /// Selects the `get` operation of a path.
    Get => Get,
    /// Selects the `post` operation of a path.
    Post => Post,
    /// Selects the `put` operation of a path.
    Put => Put,
    /// Selects the `patch` operation of a path.
    Patch => Patch,
    /// Selects the `delete` operation of a path.
    Delete => Delete,
    /// Selects the `head` operation of a path.
    Head => Head,
    /// Selects the `options` operation of a path.
    Options => Options,
    /// Selects the `trace` operation of a path.
    Trace => Trace,
}
