use crate::codec::Deserializer;
use crate::error::ValidationError;

/// A discriminated union of every response an operation declares.
///
/// Normally generated with [`responses!`](crate::responses). The status code
/// is the discriminant: each declared status maps to one variant, carrying
/// the decoded body when the status declares one.
pub trait Responses: Sized {
    /// Every declared status code, in declaration order.
    const STATUSES: &'static [u16];

    /// The status code of this response.
    fn status(&self) -> u16;

    /// Builds the variant for `status` from the response text.
    ///
    /// Fails with [`ValidationError::UndeclaredStatus`] when the server
    /// answered with a status the operation does not declare.
    fn decode<D: Deserializer>(
        status: u16,
        text: String,
        deserializer: &D,
    ) -> Result<Self, ValidationError>;

    /// Returns `true` for 2xx responses.
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status())
    }
}

/// The body type declared for one status code of a response union.
///
/// Only statuses with a body get an impl, so naming the body of a
/// status-only response does not compile.
pub trait StatusBody<const STATUS: u16>: Responses {
    /// The decoded body type.
    type Data;
}

/// Declares a response union.
///
/// Each arm maps a status code to a variant, optionally with the body type
/// that status returns. The macro implements [`Responses`] and, for every
/// arm with a body, [`StatusBody`].
///
/// ## Examples
///
/// ```rust
/// use oapy::codec::JsonCodec;
/// use oapy::{responses, Responses, ValidationError};
///
/// #[derive(Debug, PartialEq, serde::Deserialize)]
/// pub struct Pet {
///     pub name: String,
/// }
///
/// responses! {
///     #[derive(Debug, PartialEq)]
///     pub enum GetPet {
///         200 => Ok(Pet),
///         404 => NotFound,
///     }
/// }
///
/// let ok = GetPet::decode(200, r#"{"name":"Skippy"}"#.to_string(), &JsonCodec).unwrap();
/// assert_eq!(ok, GetPet::Ok(Pet { name: "Skippy".to_string() }));
///
/// let missing = GetPet::decode(404, "no such pet".to_string(), &JsonCodec).unwrap();
/// assert_eq!(missing.status(), 404);
///
/// let err = GetPet::decode(500, "boom".to_string(), &JsonCodec).unwrap_err();
/// assert!(matches!(err, ValidationError::UndeclaredStatus { status: 500, .. }));
/// ```
#[macro_export]
macro_rules! responses {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $status:literal => $variant:ident $( ( $data:ty ) )?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant $( ($data) )?,
            )*
        }

        impl $crate::Responses for $name {
            const STATUSES: &'static [u16] = &[$($status),*];

            fn status(&self) -> u16 {
                match self {
                    $( Self::$variant { .. } => $status, )*
                }
            }

            #[allow(unused_variables)]
            fn decode<D: $crate::codec::Deserializer>(
                status: u16,
                text: ::std::string::String,
                deserializer: &D,
            ) -> ::core::result::Result<Self, $crate::ValidationError> {
                match status {
                    $(
                        $status => ::core::result::Result::Ok(
                            $crate::__oapy_response_variant!(
                                Self::$variant, status, text, deserializer $(, $data)?
                            )
                        ),
                    )*
                    _ => ::core::result::Result::Err(
                        $crate::ValidationError::UndeclaredStatus { status, body: text },
                    ),
                }
            }
        }

        $( $crate::__oapy_status_body!($name, $status $(, $data)?); )*
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __oapy_response_variant {
    ($variant:path, $status:ident, $text:ident, $deserializer:ident) => {
        $variant
    };
    ($variant:path, $status:ident, $text:ident, $deserializer:ident, $data:ty) => {
        $variant($crate::codec::Deserializer::deserialize::<$data>(
            $deserializer,
            &$text,
            $status,
        )?)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __oapy_status_body {
    ($name:ident, $status:literal) => {};
    ($name:ident, $status:literal, $data:ty) => {
        impl $crate::StatusBody<{ $status }> for $name {
            type Data = $data;
        }
    };
}
