use super::*;

#[test]
fn folder_like_kinds_are_browsed() {
    assert_eq!(ItemKind::Directory.class(), ItemClass::Folder);
    assert_eq!(ItemKind::Artist.class(), ItemClass::Folder);
    assert_eq!(ItemKind::Album.class(), ItemClass::Folder);
    assert_eq!(ItemKind::Track.class(), ItemClass::Track);
    assert_eq!(ItemKind::Playlist.class(), ItemClass::Unknown);
    assert_eq!(ItemKind::Other("radio".into()).class(), ItemClass::Unknown);
}

#[test]
fn item_kind_parses_host_labels_case_insensitive() {
    assert_eq!(ItemKind::from("track"), ItemKind::Track);
    assert_eq!(ItemKind::from("DIRECTORY"), ItemKind::Directory);
    assert_eq!(ItemKind::from("Album"), ItemKind::Album);
    assert_eq!(ItemKind::from("radio"), ItemKind::Other("radio".into()));
    assert_eq!(ItemKind::from("Radio").label(), "radio");
    assert_eq!(ItemKind::Playlist.to_string(), "playlist");
}

#[test]
fn catalog_item_builders_set_kind_and_name() {
    let t = CatalogItem::track("local:track:a").with_name("A");
    assert_eq!(t.kind, ItemKind::Track);
    assert_eq!(t.name.as_deref(), Some("A"));
    assert_eq!(CatalogItem::directory("local:directory").kind, ItemKind::Directory);
}
