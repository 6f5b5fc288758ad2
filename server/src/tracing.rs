use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer, Registry};

pub fn init_tracing() {
    let log_level = std::env::var("RUST_LOG").unwrap_or("info".to_string());
    let mut env_filter = EnvFilter::new(log_level);
    if let Ok(directive) = "actix_server=off".parse() {
        env_filter = env_filter.add_directive(directive);
    }
    let color = std::env::var("ANSI_OUTPUT").map_or(true, |v| v == "true");

    let builder = tracing_subscriber::fmt::layer()
        .compact()
        .with_line_number(false)
        .with_file(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_ansi(color)
        .with_filter(env_filter);

    if let Err(e) = Registry::default().with(builder).try_init() {
        eprintln!("Failed to initialize tracing subscriber: {e}");
    }
}
