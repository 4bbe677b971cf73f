// Copyright (c) 2025-2026 Adrian Robinson. Licensed under the AGPL-3.0.
// See LICENSE file in the project root for full license text.

use thiserror::Error;

/// Errors raised while encoding options or decoding replies.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Operation name outside the closed set. Always a caller bug.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
    /// Reply shape does not match what the command/options produce.
    #[error("malformed reply: {0}")]
    MalformedReply(String),
    /// Token stream contains something no flag or param of the operation accounts for.
    #[error("unrecognized token '{token}' for {operation}")]
    UnrecognizedToken { operation: String, token: String },
}
