use super::*;

#[test]
fn channel_href_formats_route() {
    assert_eq!(channel_href("acme", "random"), "/workspace/acme/channel/random");
}

#[test]
fn dm_href_formats_route() {
    assert_eq!(dm_href("acme", 3), "/workspace/acme/dm/3");
}

#[test]
fn default_channel_href_targets_default_channel() {
    assert_eq!(
        default_channel_href("acme"),
        "/workspace/acme/channel/%EC%9D%BC%EB%B0%98"
    );
}

#[test]
fn channel_href_encodes_reserved_characters() {
    assert_eq!(
        channel_href("acme", "q&a/2024?#1"),
        "/workspace/acme/channel/q%26a%2F2024%3F%231"
    );
    assert_eq!(channel_href("my team", "dev"), "/workspace/my%20team/channel/dev");
}

#[test]
fn dm_href_encodes_workspace() {
    assert_eq!(dm_href("a/b", 3), "/workspace/a%2Fb/dm/3");
}

#[test]
fn find_member_by_id() {
    let members = vec![
        Member {
            id: 1,
            nickname: "alice".to_owned(),
            email: "alice@example.com".to_owned(),
        },
        Member {
            id: 2,
            nickname: "bob".to_owned(),
            email: "bob@example.com".to_owned(),
        },
    ];
    assert_eq!(find_member(&members, 2).map(|m| m.nickname.as_str()), Some("bob"));
    assert!(find_member(&members, 3).is_none());
}
