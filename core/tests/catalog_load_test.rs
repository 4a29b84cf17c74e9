use std::fs;
use std::io;
use std::sync::{Arc, Mutex};

use manga_core::{Catalog, ChapterId, VolumeId};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8(sink.0.lock().unwrap().clone()).unwrap();
    (out, logs)
}

#[test]
fn reads_generator_script_output() {
    let dir = tempfile::tempdir().unwrap();
    let manga_path = dir.path().join("manga-data.js");
    let materials_path = dir.path().join("materials-data.js");
    fs::write(
        &manga_path,
        "const generatedMangaData = {\"1\": {\"title\": \"Vol 1\", \"cover\": \"c.jpg\", \
         \"chapters\": {\"1\": {\"title\": \"Ch 1\", \"pages\": [\"001.jpg\"]}}}};\n",
    )
    .unwrap();
    fs::write(&materials_path, "const generatedMaterialsData = [\"assets/materials/a.png\"];")
        .unwrap();

    let catalog = Catalog::load(&manga_path, &materials_path).expect("load catalog");

    let volume = catalog.volume(VolumeId(1)).expect("volume 1");
    assert_eq!(volume.title, "Vol 1");
    assert_eq!(volume.cover.as_deref(), Some("c.jpg"));
    assert_eq!(volume.chapter(ChapterId(1)).unwrap().pages(), ["001.jpg".to_string()]);
    assert_eq!(catalog.gallery().len(), 1);
    assert_eq!(catalog.gallery()[0].src, "assets/materials/a.png");
}

#[test]
fn missing_files_behave_like_undefined_globals() {
    let dir = tempfile::tempdir().unwrap();
    let catalog =
        Catalog::load(&dir.path().join("manga-data.js"), &dir.path().join("materials.js")).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.gallery().is_empty());
}

#[test]
fn malformed_entries_are_skipped_not_fatal() {
    let manga = r#"{
        "1": { "title": "Good", "chapters": {
            "1": { "title": "No pages" },
            "2": { "title": "Bad pages", "pages": "001.jpg" },
            "x": { "title": "Bad id", "pages": [] },
            "3": "not a chapter"
        }},
        "2": "not a volume",
        "three": { "title": "Bad id" },
        "4": { "cover": "" },
        "5": { "title": "Five", "chapters": [] },
        "6": { "title": 6, "cover": false, "chapters": { "1": { "title": 1, "pages": [] } } },
        "7": { "title": "Seven", "chapters": "none" }
    }"#;

    let catalog = Catalog::from_json(Some(manga), Some(r#"["a.png", 7, null]"#)).unwrap();

    let ids: Vec<VolumeId> = catalog.volumes().keys().copied().collect();
    assert_eq!(ids, vec![VolumeId(1), VolumeId(4), VolumeId(5), VolumeId(6), VolumeId(7)]);

    let good = catalog.volume(VolumeId(1)).unwrap();
    let chapter_ids: Vec<ChapterId> = good.chapters.keys().copied().collect();
    assert_eq!(chapter_ids, vec![ChapterId(1), ChapterId(2)]);
    assert_eq!(good.chapter(ChapterId(1)).unwrap().pages, None);
    assert_eq!(good.chapter(ChapterId(2)).unwrap().pages, None);

    let untitled = catalog.volume(VolumeId(4)).unwrap();
    assert_eq!(untitled.title, "");
    assert_eq!(untitled.cover, None);
    assert!(untitled.chapters.is_empty());

    let five = catalog.volume(VolumeId(5)).unwrap();
    assert_eq!(five.title, "Five");
    assert!(five.chapters.is_empty());

    let six = catalog.volume(VolumeId(6)).unwrap();
    assert_eq!(six.title, "");
    assert_eq!(six.cover, None);
    assert_eq!(six.chapter(ChapterId(1)).unwrap().title, "");

    assert!(catalog.volume(VolumeId(7)).unwrap().chapters.is_empty());

    assert_eq!(catalog.gallery().len(), 1);
}

#[test]
fn non_json_text_is_an_error() {
    let err = Catalog::from_json(Some("<html>"), None).expect_err("garbage should fail");
    assert!(format!("{err:#}").contains("manga data"));
}

#[test]
fn volumes_sort_numerically_not_lexically() {
    let manga = r#"{"10": {"title": "ten"}, "2": {"title": "two"}, "1": {"title": "one"}}"#;
    let catalog = Catalog::from_json(Some(manga), None).unwrap();
    let titles: Vec<&str> = catalog.volumes().values().map(|v| v.title.as_str()).collect();
    assert_eq!(titles, vec!["one", "two", "ten"]);
    assert_eq!(catalog.first_volume(), Some(VolumeId(1)));
}

#[test]
fn empty_array_is_an_empty_catalog() {
    let catalog = Catalog::from_json(Some("[]"), Some("[]")).expect("empty array tolerated");
    assert!(catalog.is_empty());
    assert!(catalog.gallery().is_empty());

    let catalog = Catalog::from_json(Some("const generatedMangaData = 5;"), None).unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn colliding_ids_keep_one_entry_and_warn() {
    let manga = r#"{
        "01": {"title": "padded", "chapters": {"02": {"title": "a"}, "2": {"title": "b"}}},
        "1": {"title": "plain", "chapters": {"02": {"title": "a"}, "2": {"title": "b"}}}
    }"#;

    let (catalog, logs) = capture_logs(|| Catalog::from_json(Some(manga), None).unwrap());

    assert_eq!(catalog.volumes().len(), 1);
    assert_eq!(catalog.volume(VolumeId(1)).unwrap().chapters.len(), 1);
    assert!(logs.contains("duplicate volume id"), "logs: {logs}");
    assert!(logs.contains("duplicate chapter id"), "logs: {logs}");
}
