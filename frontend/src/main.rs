use channel_scout::app::App;
use channel_scout::env_variable_utils::{get_app_name, get_gateway_url, is_debug_mode};
use channel_scout::logging::init_logger;

fn main() {
    init_logger(is_debug_mode());

    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", GATEWAY: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        get_gateway_url(),
        is_debug_mode()
    );
}
