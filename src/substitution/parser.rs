// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

use chumsky::{
    error::Simple,
    primitive::{end, filter, just},
    Parser,
};

/// Builds the parser for the `old1=new1,old2=new2,...` pattern string.
///
/// Entries are comma-separated (a trailing comma is tolerated) and each entry
/// splits on its first `=`, so a new token may itself contain `=`. Both sides
/// are whitespace-trimmed.
pub(super) fn gen_pattern_parser() -> impl Parser<char, Vec<(String, String)>, Error = Simple<char>> {
    let old_token = filter(|c: &char| *c != '=' && *c != ',')
        .repeated()
        .collect::<String>()
        .labelled("old token");

    let new_token = filter(|c: &char| *c != ',')
        .repeated()
        .collect::<String>()
        .labelled("new token");

    let pair = old_token
        .then_ignore(just('='))
        .then(new_token)
        .map(|(old, new)| (old.trim().to_string(), new.trim().to_string()));

    pair.separated_by(just(','))
        .at_least(1)
        .allow_trailing()
        .then_ignore(end())
}
