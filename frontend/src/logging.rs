use log::Level;

/// Console verbosity for the page: `Debug` in debug mode, `Info` otherwise.
pub fn log_level(debug: bool) -> Level {
    if debug {
        Level::Debug
    } else {
        Level::Info
    }
}

/// Routes the `log` facade to the browser console.
pub fn init_logger(debug: bool) {
    wasm_logger::init(wasm_logger::Config::new(log_level(debug)));
}
