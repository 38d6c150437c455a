//! Host-side helper: `cargo run [-- PORT]` bundles the page with wasm-pack
//! into `static/pkg` and serves `static/` locally until interrupted.

use std::env;
use std::process::{exit, Command};

const DEFAULT_PORT: u16 = 8000;

fn main() {
    let port = match env::args().nth(1) {
        None => DEFAULT_PORT,
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            eprintln!("invalid port `{arg}`");
            exit(2);
        }),
    };

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors.");
            exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH (https://rustwasm.github.io/wasm-pack/); serving existing static/pkg.");
        }
    }

    println!("Serving portfolio at http://127.0.0.1:{port} …");
    let served = Command::new("python3")
        .args(["-m", "http.server", &port.to_string(), "--directory", "static"])
        .status();
    match served {
        Ok(st) if st.success() => {}
        Ok(st) => {
            eprintln!("http server exited with {st}");
            exit(1);
        }
        Err(e) => {
            eprintln!("failed to start http server: {e}");
            exit(1);
        }
    }
}
