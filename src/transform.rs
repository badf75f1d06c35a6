// Copyright (c) Chris Gunn.
// Licensed under the MIT license.

// Tree walks over a config document: job-name extraction and in-place
// substitution of leaf values.


use crate::config_xml::ConfigNode;
use crate::substitution::SubstitutionTable;

const JOB_NAMES_ELEMENT: &str = "jobNames";

/// Returns the names of the jobs a view document references, in document
/// order, duplicates included.
///
/// A name is the value of any value-bearing leaf whose grandparent element is
/// named `jobNames` — the position job names occupy in a view's config.xml.
pub fn extract_job_names(doc: &ConfigNode) -> Vec<String> {
    let mut names = Vec::new();
    collect_job_names(doc, None, None, &mut names);
    names
}

fn collect_job_names(node: &ConfigNode, parent: Option<&str>, grandparent: Option<&str>, names: &mut Vec<String>) {
    match node {
        ConfigNode::Text(value) => {
            if grandparent == Some(JOB_NAMES_ELEMENT) {
                names.push(value.clone());
            }
        }
        ConfigNode::Element(element) => {
            for child in &element.children {
                collect_job_names(child, Some(&element.name), parent, names);
            }
        }
    }
}

/// Rewrites every leaf value in the document through the substitution table,
/// in place. Leaves without a value, or whose value is blank after trimming,
/// are left untouched.
pub fn transform_document(doc: &mut ConfigNode, table: &SubstitutionTable) {
    match doc {
        ConfigNode::Element(element) => {
            for child in &mut element.children {
                transform_document(child, table);
            }
        }
        ConfigNode::Text(value) => {
            if !value.trim().is_empty() {
                *value = table.apply(value);
            }
        }
    }
}
