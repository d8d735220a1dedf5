//! Tag parsing and merge logic.
//!
//! Tags arrive from several sources per measurement (global tags, per-metric
//! tags, the item name of a set item) and may overlap. The resolver
//! flattens them in source order, drops whatever does not parse, and merges
//! by key with last-write-wins so the caller always gets at most one tag
//! per key. Parsing is deliberately lenient: one malformed tag must never
//! abort a whole write.

use std::fmt;

use crate::format;

/// The key a bare item name is filed under when it is not itself a
/// `key=value` list.
const NAME_KEY: &str = "Name";

/// An immutable key/value pair attached to a measurement.
///
/// Only produced by parsing, so key and value are always trimmed and
/// non-empty. Renders as the escaped `key=value` line protocol segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    key: String,
    value: String,
}

impl Tag {
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}={}",
            format::escape_tag_part(&self.key),
            format::escape_tag_part(&self.value)
        )
    }
}

/// Parses one raw pair into a [Tag], trimming both sides. Returns `None`
/// when either side is empty or whitespace-only.
pub fn to_tag(key: &str, value: &str) -> Option<Tag> {
    let key = key.trim();
    let value = value.trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }
    Some(Tag {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

/// Flattens all pairs across `sources`, in source order then pair order,
/// dropping pairs that do not parse.
pub fn to_tags(sources: &[&[(&str, &str)]]) -> Vec<Tag> {
    let mut out = Vec::new();
    for source in sources {
        for (key, value) in source.iter() {
            match to_tag(key, value) {
                Some(tag) => out.push(tag),
                None => log::trace!("dropping malformed tag pair ({:?}, {:?})", key, value),
            }
        }
    }
    out
}

/// Merges all pairs across `sources` into at most one tag per key: first
/// key occurrence fixes the position, last value wins.
pub fn join_tags(sources: &[&[(&str, &str)]]) -> Vec<Tag> {
    merge(to_tags(sources))
}

/// Like [join_tags], with the item name applied after all sources so its
/// tags override same-key tags from them.
///
/// An item name of the form `k1=v1,k2=v2` parses into those tags. Anything
/// else falls back to the single tag `Name=<item_name>`, so every reported
/// series carries an identifying tag even when no explicit tags were
/// supplied. A blank item name contributes nothing.
pub fn join_tags_with_name(item_name: &str, sources: &[&[(&str, &str)]]) -> Vec<Tag> {
    let mut all = to_tags(sources);
    all.extend(item_name_tags(item_name));
    merge(all)
}

fn item_name_tags(item_name: &str) -> Vec<Tag> {
    let mut tags = Vec::new();
    for segment in item_name.split(',') {
        let parts: Vec<&str> = segment.split('=').collect();
        if parts.len() == 2 {
            if let Some(tag) = to_tag(parts[0], parts[1]) {
                tags.push(tag);
            }
        }
    }
    if tags.is_empty() {
        to_tag(NAME_KEY, item_name).into_iter().collect()
    } else {
        tags
    }
}

fn merge<I>(tags: I) -> Vec<Tag>
where
    I: IntoIterator<Item = Tag>,
{
    let mut out: Vec<Tag> = Vec::new();
    for tag in tags {
        match out.iter_mut().find(|existing| existing.key == tag.key) {
            Some(slot) => *slot = tag,
            None => out.push(tag),
        }
    }
    out
}
