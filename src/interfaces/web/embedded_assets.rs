use rust_embed::Embed;

/// `/` で返すページ
pub const INDEX_PAGE: &str = "index.html";

/// カメラ画面のHTML・CSS・JSをバイナリに埋め込む
#[derive(Embed)]
#[folder = "web/"]
#[include = "*.html"]
#[include = "css/*.css"]
#[include = "js/*.js"]
pub struct WebAssets;

/// 配信用に解決済みのアセット
pub struct StaticAsset {
    pub content_type: String,
    pub body: Vec<u8>,
}

impl WebAssets {
    /// リクエストパスからアセットを引く。`/` は `index.html`
    pub fn lookup(request_path: &str) -> Option<StaticAsset> {
        let path = match request_path.trim_start_matches('/') {
            "" => INDEX_PAGE,
            path => path,
        };

        Self::get(path).map(|file| StaticAsset {
            content_type: mime_guess::from_path(path)
                .first_or_octet_stream()
                .to_string(),
            body: file.data.into_owned(),
        })
    }
}
