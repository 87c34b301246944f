use kyphorantis_server::configuration::get_configuration;
use kyphorantis_server::domain::contact::service::ContactIntake;
use kyphorantis_server::inbound::http::Application;
use kyphorantis_server::outbound::db::mongo_db::MongoDb;
use kyphorantis_server::outbound::notifier::email_client::EmailClient;
use kyphorantis_server::outbound::telemetry::init_logger;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let configuration = get_configuration().expect("Failed to read configuration");
    init_logger("kyphorantis-server", &configuration.log_level(), std::io::stdout);

    let store = MongoDb::new(&configuration.database()).await;
    // An unreachable deployment is logged, not fatal: the server still comes
    // up and the affected endpoints answer with a 500.
    match store.ping().await {
        Ok(()) => tracing::info!("Database Connected Successfully"),
        Err(error) => tracing::error!(
            error.cause_chain = ?error,
            "Database Connection Failed",
        ),
    }

    let email_client = EmailClient::new(configuration.email_client());
    let contact_service = ContactIntake::new(store, email_client);
    let application = Application::build(contact_service, configuration.application()).await?;
    tracing::info!("Kyphorantis project running on port {}", application.port());

    application.run_until_stopped().await?;
    Ok(())
}
