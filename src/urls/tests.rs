use super::*;

#[test]
fn strip_end_slash_removes_one_trailing_slash() {
    assert_eq!(strip_end_slash("http://host/view/trunk/"), "http://host/view/trunk");
    assert_eq!(strip_end_slash("http://host/view/trunk"), "http://host/view/trunk");
}

#[test]
fn parent_is_everything_before_the_last_view_segment() {
    assert_eq!(
        parent_view_url("http://host/view/branches/view/trunk").unwrap(),
        "http://host/view/branches"
    );
    assert_eq!(parent_view_url("http://host/view/trunk").unwrap(), "http://host");
}

#[test]
fn parent_requires_a_view_segment() {
    assert!(parent_view_url("http://host/nope").is_err());
}

#[test]
fn root_is_everything_before_the_first_view_segment() {
    assert_eq!(
        server_root("http://host/jenkins/view/branches/view/trunk").unwrap(),
        "http://host/jenkins"
    );
    assert_eq!(server_root("http://host/view/trunk").unwrap(), "http://host");
}

#[test]
fn root_requires_a_view_segment() {
    assert!(server_root("http://host/job/thing").is_err());
}
