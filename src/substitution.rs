// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

mod parser;


use anyhow::{anyhow, Error};
use chumsky::Parser;
use hashlink::LinkedHashMap;

use parser::gen_pattern_parser;

/// Ordered old -> new rename pairs, parsed from `old1=new1,old2=new2,...`.
///
/// Pairs apply in the order they were written. Overlapping or chained tokens
/// (an old token of one pair contained in the new token of another) are
/// therefore order-sensitive.
pub struct SubstitutionTable {
    pairs: LinkedHashMap<String, String>,
}

impl SubstitutionTable {
    pub fn parse(pattern: &str) -> Result<SubstitutionTable, Error> {
        let parser = gen_pattern_parser();
        let entries = parser.parse(pattern).map_err(|errs| {
            let details: Vec<String> = errs.iter().map(|err| err.to_string()).collect();
            anyhow!("invalid substitution pattern {:?}: {}", pattern, details.join("; "))
        })?;

        let mut pairs = LinkedHashMap::new();
        for (old, new) in entries {
            if old.is_empty() {
                return Err(anyhow!("invalid substitution pattern {:?}: empty old token", pattern));
            }
            // A repeated old token keeps its first position and takes the
            // last value.
            pairs.insert(old, new);
        }

        Ok(SubstitutionTable { pairs })
    }

    /// Replaces every literal occurrence of each old token with its new
    /// token, in table order. After each pair, if the value contains no CRLF
    /// sequence, every bare LF is rewritten to CRLF; the server keeps its
    /// stored configs CRLF-terminated.
    pub fn apply(&self, text: &str) -> String {
        let mut value = text.to_string();
        for (old, new) in &self.pairs {
            value = value.replace(old.as_str(), new.as_str());
            if !value.contains("\r\n") {
                value = value.replace('\n', "\r\n");
            }
        }
        value
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
