// Url-path derivation for view and job resources.

#[cfg(test)]
mod tests;

use anyhow::{anyhow, Error};

const VIEW_SEGMENT: &str = "/view/";

/// Removes a single trailing `/` if present.
pub fn strip_end_slash(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}

/// Returns the url of the view's parent container: everything before the
/// last `/view/` segment. The new view is created there so that source and
/// clone end up as siblings.
pub fn parent_view_url(url: &str) -> Result<&str, Error> {
    match url.rfind(VIEW_SEGMENT) {
        Some(index) => Ok(&url[..index]),
        None => Err(anyhow!("unable to clone view: no /view/ segment in url {url}")),
    }
}

/// Returns the server root the view lives on: everything before the first
/// `/view/` segment. Job resources hang off this root as `/job/<name>`.
pub fn server_root(url: &str) -> Result<&str, Error> {
    match url.find(VIEW_SEGMENT) {
        Some(index) => Ok(&url[..index]),
        None => Err(anyhow!("unable to clone view: no /view/ segment in url {url}")),
    }
}
