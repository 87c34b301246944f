use crate::configuration::ApplicationSettings;
use crate::domain::contact::ports::ContactService;
use crate::inbound::http::handlers::{home, list_contact_requests, submit_contact_request};
use crate::inbound::http::state::SharedContactState;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

mod errors;
mod handlers;
pub mod state;

pub struct Application<CS>
where
    CS: ContactService,
{
    port: u16,
    server: Server,
    contact_state: SharedContactState<CS>,
}

fn run<CS: ContactService>(
    listener: TcpListener,
    contact_state: SharedContactState<CS>,
) -> Result<Server, std::io::Error> {
    let contact_state = web::Data::new(contact_state);

    let server = HttpServer::new(move || {
        // The site is served from a different origin than this API, so every
        // route answers cross-origin requests.
        App::new()
            .wrap(TracingLogger::default())
            .wrap(Cors::permissive())
            .route("/", web::get().to(home))
            .app_data(contact_state.clone())
            .route("/contact-request", web::post().to(submit_contact_request::<CS>))
            .route("/contact-requests", web::get().to(list_contact_requests::<CS>))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

impl<CS> Application<CS>
where
    CS: ContactService,
{
    pub async fn build(
        contact_service: CS,
        configuration: ApplicationSettings,
    ) -> Result<Self, std::io::Error> {
        let address = format!("{}:{}", configuration.host, configuration.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr().unwrap().port();

        let contact_state = SharedContactState::new(contact_service);

        let server: Server = run(listener, contact_state.clone())?;

        Ok(Self {
            port,
            server,
            contact_state,
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn contact_state(&self) -> SharedContactState<CS> {
        self.contact_state.clone()
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
