use std::collections::HashSet;

use unsplash_picker::{
    Photo, Rgb, SearchResults, User, decode_photos,
    photo::{LinkKind, UrlKind},
    user::{self, ProfileImageSize},
};

const SEARCH_PAGE: &str = include_str!("data/search_photos.json");

#[test]
fn decodes_search_page() {
    let page = SearchResults::from_json(SEARCH_PAGE).unwrap();

    assert_eq!(page.total(), 133);
    assert_eq!(page.total_pages(), 7);
    assert_eq!(page.results().len(), 2);
}

#[test]
fn decodes_complete_photo() {
    let photos = decode_photos(SEARCH_PAGE).unwrap();
    let photo = &photos[0];

    assert_eq!(photo.id(), "eOLpJytrbsQ");
    assert_eq!(photo.color(), Some(Rgb::new(0xA7, 0xA2, 0xA1)));
    assert_eq!(photo.likes_count(), 286);
    assert_eq!(photo.downloads_count(), None);
    assert!(photo.exif().is_none());

    // small_s3 is not a known rendition
    assert_eq!(photo.urls().len(), 5);
    assert!(photo.url(UrlKind::Thumb).is_some());
    assert_eq!(photo.links().len(), 4);
    assert!(photo.link(LinkKind::Own).is_some());

    let user = photo.user().unwrap();
    assert_eq!(user.display_name(), "Jeff Sheldon");
    assert_eq!(user.bio(), None);
    assert_eq!(user.links().len(), 4);
    assert!(user.link(user::LinkKind::Portfolio).is_some());
    assert!(user.profile_image(ProfileImageSize::Large).is_some());
    assert_eq!(
        user.profile_url().map(String::from).as_deref(),
        Some("https://unsplash.com/@ugmonk")
    );
}

#[test]
fn degrades_best_effort_fields() {
    let photos = decode_photos(SEARCH_PAGE).unwrap();
    let photo = &photos[1];

    assert_eq!(photo.color(), None);
    assert_eq!(photo.likes_count(), 0);
    assert_eq!(photo.downloads_count(), Some(1345));
    assert_eq!(photo.views_count(), Some(26502));
    // iso comes as a number here, which the exif record does not accept
    assert!(photo.exif().is_none());
    assert!(photo.user().is_none());
    assert_eq!(photo.urls().len(), 2);
}

#[test]
fn serde_round_trip() {
    let page: SearchResults = serde_json::from_str(SEARCH_PAGE).unwrap();

    for photo in page.results() {
        let encoded = serde_json::to_string(photo).unwrap();
        let decoded: Photo = serde_json::from_str(&encoded).unwrap();

        assert_eq!(&decoded, photo);
    }
}

#[test]
fn users_dedup_by_identifier() {
    let photos = decode_photos(SEARCH_PAGE).unwrap();
    let user = photos[0].user().unwrap().clone();

    let mut renamed = serde_json::to_value(&user).unwrap();
    renamed["username"] = "someone_else".into();
    let renamed = User::from_value(&renamed).unwrap();

    assert_eq!(renamed, user);
    assert_eq!(HashSet::from([user, renamed]).len(), 1);
}

#[test]
fn export_is_json_compatible() {
    let photos = decode_photos(SEARCH_PAGE).unwrap();
    let exported = photos[0].json();

    assert_eq!(exported["id"], "eOLpJytrbsQ");
    assert_eq!(exported["color"], "#A7A2A1");
    assert_eq!(exported["likes"], 286);
    assert_eq!(exported["user"]["username"], "ugmonk");
    assert_eq!(exported["links"]["download_location"], "https://api.unsplash.com/photos/eOLpJytrbsQ/download");
    assert!(!exported.contains_key("downloads"));
    assert!(!exported.contains_key("exif"));
}
