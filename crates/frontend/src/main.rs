use session_gate_frontend::app::{AdminApp, AdminAppProps};
use session_gate_frontend::auth::GateHandle;
use session_gate_frontend::logging::init_logging;

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    let gate = GateHandle::from_session_storage();
    yew::Renderer::<AdminApp>::with_props(AdminAppProps { gate }).render();
}
