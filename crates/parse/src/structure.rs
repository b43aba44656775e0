// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structural projection of a leaf tree, for diagnostics and tests.
//!
//! | leaf                  | projection          |
//! |-----------------------|---------------------|
//! | terminal              | `kind`              |
//! | branch, one child     | `{kind: child}`     |
//! | branch, many children | `{kind: [a, b, c]}` |

use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structure {
    /// A terminal leaf.
    Kind(&'static str),
    /// A branch with exactly one child.
    Single(&'static str, Box<Structure>),
    /// A branch with more than one child.
    List(&'static str, Vec<Structure>),
}

impl Serialize for Structure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Structure::Kind(name) => serializer.serialize_str(name),
            Structure::Single(name, child) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, child)?;
                map.end()
            }
            Structure::List(name, children) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(name, children)?;
                map.end()
            }
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::Kind(name) => f.write_str(name),
            Structure::Single(name, child) => write!(f, "{{{name}: {child}}}"),
            Structure::List(name, children) => {
                write!(f, "{{{name}: [")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{child}")?;
                }
                f.write_str("]}")
            }
        }
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
