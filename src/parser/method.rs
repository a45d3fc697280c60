//! HTTP request methods.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::parser::error::Error;

/// An HTTP request method token.
///
/// Methods form an open set: any non-empty token parses, so requests using
/// extension methods are routed like any other. Constants are provided for
/// the methods defined in RFC 7231 and common extensions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Method(Cow<'static, str>);

impl Method {
    /// GET method: Requests a representation of the specified resource.
    pub const GET: Method = Method(Cow::Borrowed("GET"));
    /// POST method: Submits data to be processed to the identified resource.
    pub const POST: Method = Method(Cow::Borrowed("POST"));
    /// PUT method: Replaces all current representations of the target resource with the request payload.
    pub const PUT: Method = Method(Cow::Borrowed("PUT"));
    /// DELETE method: Deletes the specified resource.
    pub const DELETE: Method = Method(Cow::Borrowed("DELETE"));
    /// HEAD method: Same as GET but only transfers the status line and header section.
    pub const HEAD: Method = Method(Cow::Borrowed("HEAD"));
    /// OPTIONS method: Describes the communication options for the target resource.
    pub const OPTIONS: Method = Method(Cow::Borrowed("OPTIONS"));
    /// PATCH method: Applies partial modifications to a resource.
    pub const PATCH: Method = Method(Cow::Borrowed("PATCH"));

    /// The method token as received on the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Implement FromStr for Method
impl FromStr for Method {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Error::MalformedRequest("empty method token".to_string()));
        }
        Ok(Method(Cow::Owned(s.to_string())))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
