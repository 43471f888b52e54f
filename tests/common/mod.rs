//! Shared utilities for integration tests.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use tempfile::TempDir;
use tokio::net::TcpListener;
use webhost::config::HostConfig;
use webhost::{HttpServer, Shutdown};

/// A running host over a throwaway site.
pub struct TestHost {
    pub addr: SocketAddr,
    pub root: TempDir,
    pub shutdown: Shutdown,
}

impl TestHost {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestHost {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Write a small generated site: pages, an image, a script and some JSON.
pub fn write_site(root: &Path) {
    fs::create_dir_all(root.join("posts")).unwrap();
    fs::create_dir_all(root.join("images")).unwrap();
    fs::write(root.join("index.html"), "<html><body>Index</body></html>").unwrap();
    fs::write(
        root.join("posts/home.html"),
        "<html><body><h1>Home</h1></body></html>",
    )
    .unwrap();
    fs::write(
        root.join("posts/hello-world.html"),
        format!("<html><body>{}</body></html>", "Hello world! ".repeat(40)),
    )
    .unwrap();
    fs::write(root.join("images/profile.jpg"), [0xff, 0xd8, 0xff, 0xe0]).unwrap();
    fs::write(root.join("favicon.ico"), [0u8, 0, 1, 0]).unwrap();
    fs::write(root.join("main.js"), "console.log('hello');").unwrap();
    fs::write(root.join("posts.json"), r#"{"posts":["hello-world"]}"#).unwrap();
}

/// Start a host on an ephemeral port; `customize` may adjust the config.
#[allow(dead_code)]
pub async fn start_host_with(customize: impl FnOnce(&mut HostConfig)) -> TestHost {
    let root = tempfile::tempdir().unwrap();
    write_site(root.path());

    let mut config = HostConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.site.physical_root = root.path().to_path_buf();
    customize(&mut config);

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestHost {
        addr,
        root,
        shutdown,
    }
}

#[allow(dead_code)]
pub async fn start_host() -> TestHost {
    start_host_with(|_| {}).await
}

/// Client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}
