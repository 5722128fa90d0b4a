use actix_identity::IdentityMiddleware;
use actix_session::SessionMiddleware;
use actix_session::storage::CookieSessionStore;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, web};

use blossom_planner::db::establish_connection_pool;
use blossom_planner::models::config::ServerConfig;
use blossom_planner::repository::DieselRepository;
use blossom_planner::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config: ServerConfig = config::Config::builder()
        .add_source(config::File::with_name("config").required(false))
        .add_source(config::Environment::default())
        .build()
        .and_then(|settings| settings.try_deserialize())
        .map_err(std::io::Error::other)?;

    if config.secret_key.len() < 64 {
        return Err(std::io::Error::other(
            "secret_key must be at least 64 bytes",
        ));
    }
    let secret_key = Key::from(config.secret_key.as_bytes());

    let pool = establish_connection_pool(&config.database_url).map_err(std::io::Error::other)?;
    let repo = DieselRepository::new(pool);

    log::info!("Starting planner server on {}", config.bind_address);

    let bind_address = config.bind_address.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(IdentityMiddleware::default())
            .wrap(SessionMiddleware::new(
                CookieSessionStore::default(),
                secret_key.clone(),
            ))
            .app_data(web::Data::new(repo.clone()))
            .service(routes::main::health)
            .service(
                web::scope("/auth")
                    .service(routes::auth::register)
                    .service(routes::auth::login)
                    .service(routes::auth::logout)
                    .service(routes::auth::show_profile)
                    .service(routes::auth::edit_profile),
            )
            .service(
                web::scope("/planner")
                    .service(routes::calendar::show_calendar)
                    .service(routes::tasks::get_tasks)
                    .service(routes::tasks::add_task)
                    .service(routes::tasks::update_task)
                    .service(routes::tasks::toggle_task)
                    .service(routes::tasks::delete_task)
                    .service(routes::categories::show_categories)
                    .service(routes::categories::add_category)
                    .service(routes::stickers::get_stickers)
                    .service(routes::stickers::add_sticker),
            )
    })
    .bind(&bind_address)?
    .run()
    .await
}
