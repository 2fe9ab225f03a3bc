use std::path::Path;

/// バイナリに埋め込むカメラ画面のアセット
const REQUIRED_ASSETS: [&str; 3] = ["web/index.html", "web/css/style.css", "web/js/app.js"];

fn main() {
    // 欠けていると `/` が404になるのでビルドを止める
    for asset in REQUIRED_ASSETS {
        if !Path::new(asset).is_file() {
            panic!("missing web asset: {asset}");
        }
        println!("cargo:rerun-if-changed={asset}");
    }

    // /api/health と起動ログに出すビルド時刻
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();
    println!("cargo:rustc-env=BUILD_TIMESTAMP={timestamp}");

    println!("cargo:rerun-if-changed=web/");
    println!("cargo:rerun-if-changed=build.rs");
}
