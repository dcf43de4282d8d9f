//! Path and query encoding.
//!
//! Both encoders are total: any input string produces an encoded string, and
//! neither can fail. The output is byte-for-byte deterministic, which the
//! signer relies on.
//!
//! - [`encode_path`]: classifies a path as a proxy path (an embedded absolute
//!   URL) or an asset path and escapes it accordingly
//! - [`encode_query`]: serializes a [`Params`](crate::Params) multimap in
//!   sorted key order, base64-encoding values of keys ending in `64`

mod path;
mod query;

pub use path::{classify_path, encode_path, PathKind};
pub use query::{
    base64_encode_value, encode_query, encode_query_param, encode_query_value, is_base64_key,
    BASE64_KEY_SUFFIX,
};
