use migration::{Migrator, MigratorTrait};

mod settings;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    dotenv::dotenv().ok();
    let settings = settings::Settings::new()?;
    let mut tasks: tokio::task::JoinSet<Result<(), BoxError>> = tokio::task::JoinSet::new();

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "delta={level},telegram_bot={level},server={level},engine={level}",
            level = settings.log_level
        ))
        .init();

    let db = connect_database(&settings.database_url).await?;
    let engine = engine::Engine::builder().database(db).build();
    tracing::info!("Database ready");

    let addr = settings.listen_addr();
    tasks.spawn(async move {
        let listener = tokio::net::TcpListener::bind(&addr).await.map_err(|err| {
            tracing::error!("failed to bind server listener on {addr}: {err}");
            err
        })?;
        server::run_with_listener(listener).await?;
        Ok(())
    });

    let bot = telegram_bot::Bot::builder()
        .token(&settings.bot_token)
        .engine(engine)
        .build()?;
    tasks.spawn(async move {
        bot.run().await;
        Ok(())
    });

    // Whichever task ends first takes the whole process down with it.
    if let Some(joined) = tasks.join_next().await {
        tasks.shutdown().await;
        joined??;
    }

    Ok(())
}

async fn connect_database(url: &str) -> Result<sea_orm::DatabaseConnection, BoxError> {
    let database = sea_orm::Database::connect(url).await?;
    Migrator::up(&database, None).await?;
    Ok(database)
}
