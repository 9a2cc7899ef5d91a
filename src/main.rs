use actix_cors::Cors;
use actix_web::{middleware::Logger, App, HttpServer};

mod settings;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "opensplit_balance={level},actix_web={level}",
            level = settings.level
        ))
        .init();

    tracing::info!("Server listening on {}:{}", settings.bind, settings.port);
    HttpServer::new(|| {
        App::new()
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(opensplit_balance::routes::configure)
    })
    .bind((settings.bind.as_str(), settings.port))?
    .run()
    .await?;
    Ok(())
}
