//! Dotted-path addressing into page data.
//!
//! DESIGN
//! ======
//! Region ids are plain strings; repeatable regions address one element as
//! `"list.2"` and use the sentinel `"list.-1"` for "append a new item here".
//! Only a trailing all-digit (or `-1`) segment is treated as an index;
//! interior dots stay part of the key, so hosts may namespace ids freely.
//! Paths are parsed once into [`EntryPath`] and all list surgery happens
//! against the root `serde_json` map.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use serde_json::{Map, Value};

/// Error from a page-data path operation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// The key exists but does not hold a list.
    #[error("`{path}` does not address a list")]
    NotAList {
        /// Offending path as given by the caller.
        path: String,
    },
    /// The index segment points past the end of the list.
    #[error("index {index} is out of range for `{path}` (len {len})")]
    IndexOutOfRange {
        /// Offending path as given by the caller.
        path: String,
        /// Parsed index segment.
        index: usize,
        /// Current list length.
        len: usize,
    },
    /// The operation requires an `.N` index segment and the path has none.
    #[error("`{path}` has no index segment")]
    MissingIndex {
        /// Offending path as given by the caller.
        path: String,
    },
}

/// Which slot inside the keyed value a path addresses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Slot {
    /// The keyed value itself.
    Entry,
    /// Element `N` of the list stored at the key.
    At(usize),
    /// One past the end of the list stored at the key (the `-1` sentinel).
    Append,
}

/// Parsed form of a dotted region path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryPath {
    /// Page-data key the path roots at.
    pub key: String,
    /// Slot within the keyed value.
    pub slot: Slot,
}

impl EntryPath {
    /// Parse a dotted path. Never fails: anything without a trailing index
    /// segment is a plain key.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        if let Some((key, tail)) = path.rsplit_once('.') {
            if !key.is_empty() {
                if tail == "-1" {
                    return Self {
                        key: key.to_owned(),
                        slot: Slot::Append,
                    };
                }
                if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
                    if let Ok(index) = tail.parse::<usize>() {
                        return Self {
                            key: key.to_owned(),
                            slot: Slot::At(index),
                        };
                    }
                }
            }
        }
        Self {
            key: path.to_owned(),
            slot: Slot::Entry,
        }
    }

    /// Whether this path is the append sentinel.
    #[must_use]
    pub fn is_append(&self) -> bool {
        self.slot == Slot::Append
    }

    /// The `.N` index, if the path has one.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self.slot {
            Slot::At(index) => Some(index),
            _ => None,
        }
    }
}

/// How to reorder a repeatable item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemMove {
    /// Swap with the previous element. No-op at index 0.
    Up,
    /// Swap with the next element. No-op at the last index.
    Down,
    /// Move to the front of the list. No-op at index 0.
    ToStart,
    /// Move to the back of the list. No-op at the last index.
    ToEnd,
}

/// Resolve the value a path addresses, if present.
#[must_use]
pub fn resolve<'a>(root: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let parsed = EntryPath::parse(path);
    match parsed.slot {
        Slot::Entry => root.get(&parsed.key),
        Slot::At(index) => root.get(&parsed.key)?.as_array()?.get(index),
        Slot::Append => None,
    }
}

/// Write a record at a path, creating the entry (or list) as needed.
///
/// `Entry` replaces the keyed value; `At(N)` replaces element `N` (or pushes
/// when `N` equals the current length); `Append` pushes.
///
/// # Errors
///
/// [`PathError::NotAList`] when the key holds a non-list value and the path
/// carries an index, [`PathError::IndexOutOfRange`] when `N` is past the end.
pub fn write(root: &mut Map<String, Value>, path: &str, record: Value) -> Result<(), PathError> {
    let parsed = EntryPath::parse(path);
    match parsed.slot {
        Slot::Entry => {
            root.insert(parsed.key, record);
            Ok(())
        }
        Slot::At(index) => {
            let list = list_at_mut(root, &parsed.key, path)?;
            if index < list.len() {
                list[index] = record;
                Ok(())
            } else if index == list.len() {
                list.push(record);
                Ok(())
            } else {
                Err(PathError::IndexOutOfRange {
                    path: path.to_owned(),
                    index,
                    len: list.len(),
                })
            }
        }
        Slot::Append => {
            let list = list_at_mut(root, &parsed.key, path)?;
            list.push(record);
            Ok(())
        }
    }
}

/// Remove the indexed item a path addresses and return it.
///
/// # Errors
///
/// [`PathError::MissingIndex`] for paths without an `.N` segment,
/// [`PathError::NotAList`] / [`PathError::IndexOutOfRange`] as in [`write`].
pub fn remove(root: &mut Map<String, Value>, path: &str) -> Result<Value, PathError> {
    let parsed = EntryPath::parse(path);
    let Some(index) = parsed.index() else {
        return Err(PathError::MissingIndex {
            path: path.to_owned(),
        });
    };
    let list = list_at_mut(root, &parsed.key, path)?;
    if index < list.len() {
        Ok(list.remove(index))
    } else {
        Err(PathError::IndexOutOfRange {
            path: path.to_owned(),
            index,
            len: list.len(),
        })
    }
}

/// Reorder the indexed item a path addresses. Returns whether anything moved;
/// boundary moves are no-ops, not errors.
///
/// # Errors
///
/// Same conditions as [`remove`].
pub fn shift(root: &mut Map<String, Value>, path: &str, movement: ItemMove) -> Result<bool, PathError> {
    let parsed = EntryPath::parse(path);
    let Some(index) = parsed.index() else {
        return Err(PathError::MissingIndex {
            path: path.to_owned(),
        });
    };
    let list = list_at_mut(root, &parsed.key, path)?;
    if index >= list.len() {
        return Err(PathError::IndexOutOfRange {
            path: path.to_owned(),
            index,
            len: list.len(),
        });
    }
    let target = match movement {
        ItemMove::Up | ItemMove::ToStart if index == 0 => return Ok(false),
        ItemMove::Down | ItemMove::ToEnd if index == list.len() - 1 => return Ok(false),
        ItemMove::Up => index - 1,
        ItemMove::Down => index + 1,
        ItemMove::ToStart => 0,
        ItemMove::ToEnd => list.len() - 1,
    };
    let item = list.remove(index);
    list.insert(target, item);
    Ok(true)
}

/// Mutable list stored under `key`, created empty when absent.
fn list_at_mut<'a>(
    root: &'a mut Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a mut Vec<Value>, PathError> {
    let entry = root
        .entry(key.to_owned())
        .or_insert_with(|| Value::Array(Vec::new()));
    entry.as_array_mut().ok_or_else(|| PathError::NotAList {
        path: path.to_owned(),
    })
}
