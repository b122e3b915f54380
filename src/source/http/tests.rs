//! Unit tests for the season downloader

use super::*;
use tempfile::tempdir;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn downloader(server: &MockServer, dir: &Path) -> SeasonDownloader {
    let url_template = YearTemplate::new(&format!("{}/stats/{{year}}.csv", server.uri())).unwrap();
    let file_template = YearTemplate::new("baseball-{year}.csv").unwrap();
    SeasonDownloader::new(dir, url_template, file_template).unwrap()
}

#[tokio::test]
async fn test_download_writes_files() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/2001.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("2001,BOS,AL,smithjo01\n"))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/2002.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("2002,NYA,AL,smithjo01\n"))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let downloader = downloader(&server, dir.path());
    let written = downloader
        .download(&[Season::new(2001), Season::new(2002)])
        .await
        .unwrap();

    assert_eq!(written, vec![Season::new(2001), Season::new(2002)]);
    let content = std::fs::read_to_string(dir.path().join("baseball-2001.csv")).unwrap();
    assert_eq!(content, "2001,BOS,AL,smithjo01\n");
    assert!(dir.path().join("baseball-2002.csv").is_file());
}

#[tokio::test]
async fn test_download_skips_http_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/2001.csv"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stats/2002.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("2002,NYA,AL,smithjo01\n"))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let downloader = downloader(&server, dir.path());
    let written = downloader
        .download(&[Season::new(2001), Season::new(2002)])
        .await
        .unwrap();

    assert_eq!(written, vec![Season::new(2002)]);
    assert!(!dir.path().join("baseball-2001.csv").exists());
}

#[tokio::test]
async fn test_download_nothing_requested() {
    let server = MockServer::start().await;
    let dir = tempdir().unwrap();
    let written = downloader(&server, dir.path()).download(&[]).await.unwrap();
    assert!(written.is_empty());
}

#[tokio::test]
async fn test_download_into_missing_dir_is_io_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stats/2001.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("x"))
        .mount(&server)
        .await;

    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope");
    let result = downloader(&server, &missing)
        .download(&[Season::new(2001)])
        .await;

    assert!(matches!(result, Err(crate::TriplesError::Io(_))));
}

#[test]
fn test_file_path() {
    let url_template = YearTemplate::new("http://localhost/{year}.csv").unwrap();
    let file_template = YearTemplate::new("baseball-{year}.csv").unwrap();
    let downloader =
        SeasonDownloader::new(Path::new("/data"), url_template, file_template).unwrap();
    assert_eq!(
        downloader.file_path(Season::new(1999)),
        PathBuf::from("/data/baseball-1999.csv")
    );
}
