use super::*;
use futures::executor::block_on;
use serde_json::json;

fn descriptor(id: &str) -> AssetDescriptor {
    AssetDescriptor {
        id: id.to_owned(),
        url: format!("https://cdn/{id}.jpg"),
        name: None,
        thumb_url: None,
    }
}

#[test]
fn list_only_source_does_not_support_upload() {
    let source = AssetSource::new(|| async { Ok(vec![]) });
    assert!(!source.supports_upload());
}

#[test]
fn with_upload_enables_the_upload_tab() {
    let source = AssetSource::new(|| async { Ok(vec![]) })
        .with_upload(|file: FileHandle| async move { Ok(descriptor(&file.name)) });
    assert!(source.supports_upload());
}

#[test]
fn upload_without_support_errors() {
    let source = AssetSource::new(|| async { Ok(vec![]) });
    let result = block_on(source.upload(FileHandle {
        name: "pic.png".to_owned(),
        #[cfg(feature = "hydrate")]
        file: unreachable!("native test"),
    }));
    assert!(result.is_err());
}

#[test]
fn list_assets_passes_results_through() {
    let source = AssetSource::new(|| async { Ok(vec![descriptor("a"), descriptor("b")]) });
    let assets = block_on(source.list_assets()).unwrap();
    assert_eq!(assets.len(), 2);
    assert_eq!(assets[0].id, "a");
}

#[test]
fn publish_hook_round_trips() {
    let hook = PublishHook::new(|data: PageData| async move {
        if data.is_empty() {
            Err("empty".to_owned())
        } else {
            Ok(())
        }
    });
    assert!(block_on(hook.run(PageData::new())).is_err());

    let data: PageData = serde_json::from_value(json!({"hero": {}})).unwrap();
    assert!(block_on(hook.run(data)).is_ok());
}

#[test]
fn page_search_hook_round_trips() {
    let hook = PageSearchHook::new(|query: String| async move {
        Ok(vec![PageRef {
            path: format!("/{query}"),
            title: query,
        }])
    });
    let hits = block_on(hook.run("about".to_owned())).unwrap();
    assert_eq!(hits[0].path, "/about");
}

#[test]
fn video_fields_only_get_video_sources() {
    assert_eq!(StockSource::options_for(true), &[StockSource::Pexels]);
    assert_eq!(
        StockSource::options_for(false),
        &[
            StockSource::Unsplash,
            StockSource::SvgRepo,
            StockSource::Pexels
        ]
    );
}

#[test]
fn stock_source_names_round_trip() {
    for source in [
        StockSource::Unsplash,
        StockSource::SvgRepo,
        StockSource::Pexels,
    ] {
        assert_eq!(StockSource::parse(source.as_str()), Some(source));
    }
    assert_eq!(StockSource::parse("flickr"), None);
}

#[test]
fn asset_query_serializes_wire_names() {
    let query = AssetQuery {
        text: "mountains".to_owned(),
        source: StockSource::Unsplash,
        video: false,
    };
    let json = serde_json::to_value(&query).unwrap();
    assert_eq!(json["search"], "mountains");
    assert_eq!(json["source"], "unsplash");
    assert_eq!(json["isVideo"], false);
}

#[test]
fn endpoint_search_resolves_empty_off_browser() {
    let hook = AssetSearchHook::endpoint("/api/assets/search");
    let hits = block_on(hook.run(AssetQuery {
        text: "sky".to_owned(),
        source: StockSource::Pexels,
        video: true,
    }))
    .unwrap();
    assert!(hits.is_empty());
}
