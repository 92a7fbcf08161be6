use vectura::config::Settings;
use vectura::db::PgPool;
use vectura::engine::Engine;
use vectura::server::serve;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env().unwrap();

    let PgPool(pool) = PgPool::new(&settings.database_url, settings.database_max_connections)
        .await
        .unwrap();

    let engine = Engine::new(pool, settings.bid_list_limit).await.unwrap();

    serve(engine, settings.listen_addr, settings.catalog).await;
}
