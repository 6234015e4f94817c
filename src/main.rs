fn main() {
    if let Err(e) = roombook::bootstrap::start() {
        gloo::console::error!(format!("Roombook failed to start: {e}"));
        wasm_bindgen::throw_str(&e.to_string());
    }
}
