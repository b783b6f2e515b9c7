use crate::env_variable_utils::load_gateway_config;
use crate::gateway::transport::BrowserTransport;
use crate::gateway::GatewayClient;
use crate::router::{switch, Route};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

/// Shared gateway client handed to components through context.
#[derive(Clone)]
pub struct GatewayHandle(Rc<GatewayClient>);

impl GatewayHandle {
    pub fn new(client: GatewayClient) -> Self {
        Self(Rc::new(client))
    }

    pub fn from_env() -> Self {
        Self::new(GatewayClient::new(BrowserTransport, load_gateway_config()))
    }

    pub fn client(&self) -> &GatewayClient {
        &self.0
    }
}

impl PartialEq for GatewayHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// The provided handle, else one cached in `fallback` and built on first use.
fn resolve_gateway(
    provided: Option<GatewayHandle>,
    fallback: &RefCell<Option<GatewayHandle>>,
    build: impl FnOnce() -> GatewayHandle,
) -> GatewayHandle {
    match provided {
        Some(handle) => handle,
        None => fallback.borrow_mut().get_or_insert_with(build).clone(),
    }
}

#[hook]
pub fn use_gateway() -> GatewayHandle {
    let provided = use_context::<GatewayHandle>();
    let fallback = use_mut_ref(|| None::<GatewayHandle>);
    resolve_gateway(provided, &fallback, GatewayHandle::from_env)
}

#[function_component(App)]
pub fn app() -> Html {
    let gateway = use_state(GatewayHandle::from_env);

    html! {
        <ContextProvider<GatewayHandle> context={(*gateway).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<GatewayHandle>>
    }
}
