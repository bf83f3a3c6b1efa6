//! Anchor-based text surgery
//!
//! The patcher is format agnostic: it locates a literal anchor substring and
//! splices replacement text around it. All knowledge of the target file
//! formats lives in the declarative catalogs, never here. A single call
//! applies a single operation; sequencing multiple operations against the
//! same content is the caller's job, in catalog-declared order.
//!
//! Application is deliberately not idempotent. Re-running against already
//! patched content inserts duplicates or misses consumed anchors; the tenant
//! registry prevents that one layer up.

use crate::error::{PatchError, PatchResult};

/// How the replacement text relates to the located anchor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchVerb {
    /// Splice immediately before the anchor, leaving it intact
    InsertBefore,

    /// Splice immediately after the anchor, leaving it intact
    InsertAfter,

    /// Replace the anchor itself, or the span from the anchor through the
    /// first occurrence of `end` after it (inclusive) when `end` is set
    ReplaceSegment { end: Option<String> },

    /// Ignore the anchor and splice at end of file
    Append,
}

/// A patch operation with all templates rendered to literal strings.
#[derive(Debug, Clone)]
pub struct ResolvedPatch {
    /// Literal anchor substring (unused by `Append`)
    pub anchor: String,

    /// The splice verb
    pub verb: PatchVerb,

    /// Text to splice in
    pub replacement: String,
}

/// Apply one patch operation to `content`, returning the new text.
///
/// The first occurrence of the anchor is used. Content outside the located
/// region is returned byte-for-byte unchanged. A missing anchor (or missing
/// segment end token) fails with `AnchorNotFound` and the original content
/// is untouched.
pub fn apply(content: &str, patch: &ResolvedPatch) -> PatchResult<String> {
    if let PatchVerb::Append = patch.verb {
        let mut out = String::with_capacity(content.len() + patch.replacement.len());
        out.push_str(content);
        out.push_str(&patch.replacement);
        return Ok(out);
    }

    let start = content
        .find(&patch.anchor)
        .ok_or_else(|| PatchError::AnchorNotFound {
            anchor: patch.anchor.clone(),
        })?;
    let anchor_end = start + patch.anchor.len();

    let (keep_until, resume_from) = match &patch.verb {
        PatchVerb::InsertBefore => (start, start),
        PatchVerb::InsertAfter => (anchor_end, anchor_end),
        PatchVerb::ReplaceSegment { end } => {
            let segment_end = match end {
                None => anchor_end,
                Some(token) => {
                    let rel = content[anchor_end..].find(token).ok_or_else(|| {
                        PatchError::AnchorNotFound {
                            anchor: token.clone(),
                        }
                    })?;
                    anchor_end + rel + token.len()
                }
            };
            (start, segment_end)
        }
        PatchVerb::Append => unreachable!(),
    };

    let mut out =
        String::with_capacity(content.len() - (resume_from - keep_until) + patch.replacement.len());
    out.push_str(&content[..keep_until]);
    out.push_str(&patch.replacement);
    out.push_str(&content[resume_from..]);
    Ok(out)
}

#[cfg(test)]
#[path = "patcher_test.rs"]
mod tests;
