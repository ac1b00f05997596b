//! Lumina frontend - Dioxus app.
//! Browser only: `dx serve`, or `cargo run` to hand off to it.

#[cfg(target_arch = "wasm32")]
fn main() {
    use lumina_frontend::app::App;
    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The web build has to go through the Dioxus CLI; hand off to `dx serve`.
    // Reference types are disabled so wasm-bindgen can find its intrinsics.
    let rustflags = std::env::var("RUSTFLAGS").unwrap_or_default();
    let rustflags = if rustflags.is_empty() {
        "-C target-feature=-reference-types".to_string()
    } else {
        format!("{rustflags} -C target-feature=-reference-types")
    };
    let status = std::process::Command::new("dx")
        .args(["serve", "--platform", "web"])
        .env("RUSTFLAGS", &rustflags)
        .status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {e}");
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            eprintln!("Set LUMINA_API_URL at build time to point at the gallery backend.");
            std::process::exit(1);
        }
    }
}
