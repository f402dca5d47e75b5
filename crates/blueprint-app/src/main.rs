//! Main application entry point (native).

#[cfg(feature = "native")]
fn main() {
    env_logger::init();
    log::info!("Starting Blueprint");

    let Some(path) = std::env::args().nth(1) else {
        println!("Usage: blueprint <script.json>\n\nKeyboard shortcuts:");
        print!("{}", blueprint_app::help_text());
        return;
    };

    let result =
        blueprint_app::Script::load(&path).and_then(|script| blueprint_app::replay(&script));
    match result {
        Ok(editor) => print!("{}", blueprint_app::report(&editor)),
        Err(e) => {
            log::error!("Failed to replay {path}: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(not(feature = "native"))]
fn main() {
    panic!("Native feature not enabled. Use `cargo run --features native`");
}
